use axum::{
    extract::{Multipart, Path, State},
    response::{Html, Redirect},
    Extension,
};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::SelectedFile;
use crate::session::{Section, SessionEvent, SessionId};
use crate::state::AppState;

use super::pages::render_session;

pub async fn index(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> AppResult<Html<String>> {
    let session = state.sessions.snapshot(session_id).await;
    debug!(
        session_id = %session_id,
        loading = session.is_loading(),
        has_result = session.result().is_some(),
        "Rendering session"
    );
    Ok(Html(render_session(&session, state.config.banner_copy())?))
}

/// Runs one submission for the session and redirects back to `/`, where the
/// result or the error is rendered.
pub async fn upload(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    let form = match read_upload_form(&mut multipart).await {
        Ok(form) => form,
        Err(AppError::FileTooLarge) => {
            let limit_mb = state.config.max_file_size_mb;
            warn!(session_id = %session_id, limit_mb = limit_mb, "Upload over the size limit");
            state
                .sessions
                .apply(
                    session_id,
                    SessionEvent::UploadRejected(too_large_message(limit_mb)),
                )
                .await?;
            return Ok(Redirect::to("/"));
        }
        Err(e) => return Err(e),
    };
    let file = form.file.ok_or(AppError::MissingFile)?;

    info!(
        session_id = %session_id,
        file_name = %file.name,
        file_size = file.size(),
        "Upload received"
    );

    let pending = state
        .sessions
        .apply_all(
            session_id,
            [
                SessionEvent::RequiredSkillsEdited(form.required_skills),
                SessionEvent::RecruiterEmailEdited(form.recruiter_email),
                SessionEvent::FileSelected(file),
                SessionEvent::Submitted,
            ],
        )
        .await
        .map_err(|e| {
            warn!(session_id = %session_id, error = %e, "Upload rejected");
            AppError::from(e)
        })?;

    let request = pending
        .in_flight()
        .cloned()
        .ok_or_else(|| AppError::internal("submission did not start"))?;

    // The backend call runs on its own task so a dropped browser connection
    // cannot leave the session stuck in the submitting stage.
    let analyzer = state.analyzer.clone();
    let sessions = state.sessions.clone();
    let completed = tokio::spawn(async move {
        let event = match analyzer.analyze(request).await {
            Ok(result) => SessionEvent::Succeeded(result),
            Err(e) => {
                warn!(
                    session_id = %session_id,
                    error_code = e.error_code(),
                    error = %e,
                    "Resume analysis failed"
                );
                SessionEvent::Failed(e.user_message())
            }
        };
        sessions.apply(session_id, event).await
    })
    .await?;

    let session = completed?;
    info!(
        session_id = %session_id,
        succeeded = session.result().is_some(),
        "Submission finished"
    );

    Ok(Redirect::to("/"))
}

pub async fn toggle_section(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Path(section): Path<String>,
) -> AppResult<Redirect> {
    let section: Section = section
        .parse()
        .map_err(|section| AppError::UnknownSection { section })?;

    state
        .sessions
        .apply(session_id, SessionEvent::SectionToggled(section))
        .await?;

    Ok(Redirect::to("/"))
}

pub async fn reset(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> AppResult<Redirect> {
    state
        .sessions
        .apply(session_id, SessionEvent::Reset)
        .await?;
    info!(session_id = %session_id, "Session reset");

    Ok(Redirect::to("/"))
}

fn too_large_message(limit_mb: usize) -> String {
    format!("File is too large. The maximum upload size is {}MB.", limit_mb)
}

#[derive(Debug, Default)]
struct UploadForm {
    file: Option<SelectedFile>,
    required_skills: String,
    recruiter_email: String,
}

async fn read_upload_form(multipart: &mut Multipart) -> AppResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await?;
                // Browsers send an empty, unnamed part when nothing was picked.
                if file_name.is_empty() && data.is_empty() {
                    continue;
                }
                let file_name = if file_name.is_empty() {
                    "resume.pdf".to_string()
                } else {
                    file_name
                };
                form.file = Some(SelectedFile::new(file_name, data));
            }
            "required_skills" => form.required_skills = field.text().await?,
            "recruiter_email" => form.recruiter_email = field.text().await?,
            other => debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}
