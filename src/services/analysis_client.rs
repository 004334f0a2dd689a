use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::AnalysisError;
use crate::models::{AnalysisResult, ErrorBody, ParseResponse, UploadRequest};

pub const PARSE_PATH: &str = "/api/parse";

/// Anything that can turn an upload into an analysis result.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, request: UploadRequest) -> Result<AnalysisResult, AnalysisError>;
}

/// HTTP client for the résumé-analysis backend.
///
/// Sends exactly one request per call, never retries, and sets no timeout
/// of its own.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(backend_url: &str) -> Self {
        Self::with_client(Client::new(), backend_url)
    }

    pub fn with_client(http: Client, backend_url: &str) -> Self {
        let endpoint = format!("{}{}", backend_url.trim_end_matches('/'), PARSE_PATH);
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ResumeAnalyzer for AnalysisClient {
    async fn analyze(&self, request: UploadRequest) -> Result<AnalysisResult, AnalysisError> {
        let start = Instant::now();
        let file_name = request.file.name.clone();
        let file_size = request.file.size();
        let job_match_requested = request.required_skills.is_some();

        info!(
            endpoint = %self.endpoint,
            file_name = %file_name,
            file_size = file_size,
            job_match_requested = job_match_requested,
            "Submitting resume for analysis"
        );

        let form = request.into_form()?;
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Analysis backend unreachable");
                AnalysisError::Transport(e)
            })?;

        let status = response.status();
        let body = response.bytes().await?;

        debug!(
            status = %status,
            body_len = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Analysis backend responded"
        );

        if !status.is_success() {
            let detail = ErrorBody::detail_text(&body);
            warn!(
                status = %status,
                detail = ?detail,
                "Analysis backend rejected the request"
            );
            return Err(AnalysisError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let envelope: ParseResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Analysis response body could not be decoded");
            AnalysisError::malformed(e.to_string())
        })?;
        let result = envelope.into_result().map_err(AnalysisError::malformed)?;

        info!(
            file_name = %file_name,
            skills = result.skills.len(),
            experience = result.experience.len(),
            projects = result.projects.len(),
            job_match = result.job_match().is_some(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Resume analysis completed"
        );

        Ok(result)
    }
}
