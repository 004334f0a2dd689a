use bytes::Bytes;
use reqwest::multipart::{Form, Part};

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A file picked in the collection stage. Never content-validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// One submission to the analysis backend. Built right before the request
/// goes out and dropped afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub file: SelectedFile,
    pub required_skills: Option<String>,
    pub recruiter_email: Option<String>,
}

impl UploadRequest {
    pub fn new(file: SelectedFile) -> Self {
        Self {
            file,
            required_skills: None,
            recruiter_email: None,
        }
    }

    /// Empty input means "not supplied": the field is left out of the form.
    pub fn with_required_skills(mut self, skills: impl Into<String>) -> Self {
        self.required_skills = non_empty(skills.into());
        self
    }

    pub fn with_recruiter_email(mut self, email: impl Into<String>) -> Self {
        self.recruiter_email = non_empty(email.into());
        self
    }

    pub fn into_form(self) -> Result<Form, reqwest::Error> {
        let part = Part::bytes(self.file.content.to_vec())
            .file_name(self.file.name)
            .mime_str(PDF_MIME_TYPE)?;

        let mut form = Form::new().part("file", part);
        if let Some(skills) = self.required_skills {
            form = form.text("required_skills", skills);
        }
        if let Some(email) = self.recruiter_email {
            form = form.text("recruiter_email", email);
        }
        Ok(form)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
