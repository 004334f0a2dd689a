use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{AnalysisResult, SelectedFile, UploadRequest};

/// Where the collection stage currently is.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Stage {
    #[default]
    Idle,
    Ready(SelectedFile),
    Submitting(UploadRequest),
}

/// Result lists that can be expanded past their first entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Experience,
    Projects,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Projects => "projects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience" => Ok(Section::Experience),
            "projects" => Ok(Section::Projects),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpansionState {
    pub experience: bool,
    pub projects: bool,
}

impl ExpansionState {
    pub fn is_expanded(&self, section: Section) -> bool {
        match section {
            Section::Experience => self.experience,
            Section::Projects => self.projects,
        }
    }

    fn toggled(mut self, section: Section) -> Self {
        match section {
            Section::Experience => self.experience = !self.experience,
            Section::Projects => self.projects = !self.projects,
        }
        self
    }
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    FileSelected(SelectedFile),
    RequiredSkillsEdited(String),
    RecruiterEmailEdited(String),
    Submitted,
    Succeeded(AnalysisResult),
    Failed(String),
    /// The upload never reached the backend, e.g. it was over the size limit.
    UploadRejected(String),
    SectionToggled(Section),
    Reset,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::FileSelected(_) => "file_selected",
            SessionEvent::RequiredSkillsEdited(_) => "required_skills_edited",
            SessionEvent::RecruiterEmailEdited(_) => "recruiter_email_edited",
            SessionEvent::Submitted => "submitted",
            SessionEvent::Succeeded(_) => "succeeded",
            SessionEvent::Failed(_) => "failed",
            SessionEvent::UploadRejected(_) => "upload_rejected",
            SessionEvent::SectionToggled(_) => "section_toggled",
            SessionEvent::Reset => "reset",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("a submission is already pending")]
    SubmissionPending,

    #[error("no file has been selected")]
    NoFileSelected,

    #[error("no submission is in flight")]
    NotSubmitting,

    #[error("there is no result to display")]
    NoResult,
}

/// Everything one browser session knows. Values are never mutated in place:
/// [`SessionState::apply`] returns the next state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    stage: Stage,
    required_skills: String,
    recruiter_email: String,
    result: Option<Arc<AnalysisResult>>,
    error: Option<String>,
    expansion: ExpansionState,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, event: SessionEvent) -> Result<SessionState, TransitionError> {
        if self.is_loading() {
            return match event {
                SessionEvent::Succeeded(result) => Ok(SessionState {
                    stage: Stage::Idle,
                    result: Some(Arc::new(result)),
                    error: None,
                    expansion: ExpansionState::default(),
                    ..self.clone()
                }),
                SessionEvent::Failed(message) => Ok(SessionState {
                    stage: Stage::Idle,
                    result: None,
                    error: Some(message),
                    expansion: ExpansionState::default(),
                    ..self.clone()
                }),
                _ => Err(TransitionError::SubmissionPending),
            };
        }

        match event {
            SessionEvent::FileSelected(file) => Ok(SessionState {
                stage: Stage::Ready(file),
                ..self.clone()
            }),
            SessionEvent::RequiredSkillsEdited(skills) => Ok(SessionState {
                required_skills: skills,
                ..self.clone()
            }),
            SessionEvent::RecruiterEmailEdited(email) => Ok(SessionState {
                recruiter_email: email,
                ..self.clone()
            }),
            SessionEvent::Submitted => {
                let Stage::Ready(file) = &self.stage else {
                    return Err(TransitionError::NoFileSelected);
                };
                let request = UploadRequest::new(file.clone())
                    .with_required_skills(self.required_skills.clone())
                    .with_recruiter_email(self.recruiter_email.clone());
                Ok(SessionState {
                    stage: Stage::Submitting(request),
                    result: None,
                    error: None,
                    ..self.clone()
                })
            }
            SessionEvent::Succeeded(_) | SessionEvent::Failed(_) => {
                Err(TransitionError::NotSubmitting)
            }
            SessionEvent::UploadRejected(message) => Ok(SessionState {
                stage: Stage::Idle,
                result: None,
                error: Some(message),
                expansion: ExpansionState::default(),
                ..self.clone()
            }),
            SessionEvent::SectionToggled(section) => {
                if self.result.is_none() {
                    return Err(TransitionError::NoResult);
                }
                Ok(SessionState {
                    expansion: self.expansion.toggled(section),
                    ..self.clone()
                })
            }
            SessionEvent::Reset => Ok(SessionState::default()),
        }
    }

    /// True when there is nothing worth keeping: no file, no result, no
    /// error and no recruiter input.
    pub fn is_pristine(&self) -> bool {
        matches!(self.stage, Stage::Idle)
            && self.result.is_none()
            && self.error.is_none()
            && self.required_skills.is_empty()
            && self.recruiter_email.is_empty()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.stage, Stage::Submitting(_))
    }

    /// The submit control accepts input only when nothing is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.is_loading()
    }

    /// The request to send, while a submission is pending.
    pub fn in_flight(&self) -> Option<&UploadRequest> {
        match &self.stage {
            Stage::Submitting(request) => Some(request),
            _ => None,
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match &self.stage {
            Stage::Ready(file) => Some(file),
            Stage::Submitting(request) => Some(&request.file),
            Stage::Idle => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn required_skills(&self) -> &str {
        &self.required_skills
    }

    pub fn recruiter_email(&self) -> &str {
        &self.recruiter_email
    }

    pub fn expansion(&self) -> ExpansionState {
        self.expansion
    }
}
