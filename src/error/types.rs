use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::session::TransitionError;

pub type AppResult<T> = Result<T, AppError>;

/// Shown whenever the backend gives no usable explanation of its own.
pub const FALLBACK_MESSAGE: &str = "Failed to parse resume. Please ensure the backend is running.";

/// Failures at the analysis backend boundary.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Analysis backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Analysis backend rejected the request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("Malformed analysis response: {message}")]
    MalformedResponse { message: String },
}

impl AnalysisError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AnalysisError::Transport(_) => "BACKEND_UNREACHABLE",
            AnalysisError::Rejected { .. } => "BACKEND_REJECTED",
            AnalysisError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
        }
    }

    /// Text surfaced to the user on the upload page.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        AnalysisError::MalformedResponse {
            message: message.into(),
        }
    }
}

/// Errors returned by the UI's own HTTP handlers.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("A submission is already in progress for this session")]
    SubmissionPending,

    #[error("Missing file in request")]
    MissingFile,

    #[error("Upload exceeds the configured size limit")]
    FileTooLarge,

    #[error("Invalid upload form: {message}")]
    InvalidForm { message: String },

    #[error("Unknown section: {section}")]
    UnknownSection { section: String },

    #[error("Session state rejected the action: {message}")]
    InvalidTransition { message: String },

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::SubmissionPending => "SUBMISSION_PENDING",
            AppError::MissingFile => "MISSING_FILE",
            AppError::FileTooLarge => "FILE_TOO_LARGE",
            AppError::InvalidForm { .. } => "INVALID_FORM",
            AppError::UnknownSection { .. } => "UNKNOWN_SECTION",
            AppError::InvalidTransition { .. } => "INVALID_TRANSITION",
            AppError::Template(_) => "TEMPLATE_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::SubmissionPending => StatusCode::CONFLICT,
            AppError::MissingFile => StatusCode::BAD_REQUEST,
            AppError::FileTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InvalidForm { .. } => StatusCode::BAD_REQUEST,
            AppError::UnknownSection { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidTransition { .. } => StatusCode::CONFLICT,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();
        let request_id = Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().to_rfc3339();

        tracing::error!(
            error_code = error_code,
            status_code = %status,
            request_id = %request_id,
            error_message = %message,
            "UI request failed"
        );

        let body = Json(json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": message,
                "request_id": request_id,
                "timestamp": timestamp
            },
            "data": null
        }));

        (status, body).into_response()
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::FileTooLarge;
        }
        AppError::InvalidForm {
            message: err.body_text(),
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal {
            message: format!("Submission task failed: {}", err),
        }
    }
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::SubmissionPending => AppError::SubmissionPending,
            TransitionError::NoFileSelected => AppError::MissingFile,
            other => AppError::InvalidTransition {
                message: other.to_string(),
            },
        }
    }
}
