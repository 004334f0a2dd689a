use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Candidate fields extracted by the backend, merged with the match metadata.
///
/// The wire names of the extracted fields are capitalised (`Name`, `Skills`,
/// ...). Missing or `null` lists decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,
    #[serde(rename = "Skills", default, deserialize_with = "entries")]
    pub skills: Vec<String>,
    #[serde(rename = "Experience", default, deserialize_with = "entries")]
    pub experience: Vec<String>,
    #[serde(rename = "Projects", default, deserialize_with = "entries")]
    pub projects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MatchMeta>,
}

impl AnalysisResult {
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn email(&self) -> Option<&str> {
        present(&self.email)
    }

    pub fn phone(&self) -> Option<&str> {
        present(&self.phone)
    }

    pub fn job_match(&self) -> Option<&MatchResult> {
        self.meta.as_ref().and_then(|meta| meta.job_match.as_ref())
    }
}

/// An empty string counts as "not extracted".
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchMeta {
    #[serde(default)]
    pub job_match: Option<MatchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_count: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32,
    pub is_shortlisted: bool,
    #[serde(default)]
    pub email_sent: bool,
    #[serde(default, deserialize_with = "entries")]
    pub matching_skills: Vec<String>,
    #[serde(default, deserialize_with = "entries")]
    pub missing_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter_email: Option<String>,
}

pub const MAX_MATCH_SCORE: u32 = 100;

/// Success body of `POST /api/parse`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseResponse {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: AnalysisResult,
    #[serde(default)]
    pub meta: Option<MatchMeta>,
}

impl ParseResponse {
    /// Folds `meta` into `data` so the rendering stage sees one value. An
    /// explicit `success: false` is treated as a malformed body.
    pub fn into_result(self) -> Result<AnalysisResult, String> {
        if self.success == Some(false) {
            return Err("backend reported success: false".to_string());
        }
        if let Some(job_match) = self.meta.as_ref().and_then(|m| m.job_match.as_ref()) {
            if job_match.score > MAX_MATCH_SCORE {
                return Err(format!(
                    "match score {} is outside 0-{}",
                    job_match.score, MAX_MATCH_SCORE
                ));
            }
        }

        Ok(AnalysisResult {
            meta: self.meta,
            ..self.data
        })
    }
}

/// Failure body of `POST /api/parse`. Only a string `detail` is meaningful.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn detail_text(bytes: &[u8]) -> Option<String> {
        let body: ErrorBody = serde_json::from_slice(bytes).ok()?;
        match body.detail? {
            Value::String(detail) if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

/// Accepts a missing/null list and stringifies non-string entries.
fn entries<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|entry| match entry {
            Value::String(text) => text,
            other => other.to_string(),
        })
        .collect())
}
