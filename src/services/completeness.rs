//! Profile completeness: how many of {email, phone, skills} were extracted.
//!
//! Derived on the client side and never read from the backend payload.

use serde::Serialize;

use crate::models::AnalysisResult;

pub const EMAIL_WEIGHT: u8 = 40;
pub const PHONE_WEIGHT: u8 = 40;
pub const SKILLS_WEIGHT: u8 = 20;

/// Scores strictly above this render in the "strong" tier.
const STRONG_ABOVE: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessTier {
    Strong,
    Partial,
}

impl CompletenessTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletenessTier::Strong => "strong",
            CompletenessTier::Partial => "partial",
        }
    }
}

pub fn completeness_score(result: &AnalysisResult) -> u8 {
    let mut score = 0;
    if result.email().is_some() {
        score += EMAIL_WEIGHT;
    }
    if result.phone().is_some() {
        score += PHONE_WEIGHT;
    }
    if !result.skills.is_empty() {
        score += SKILLS_WEIGHT;
    }
    score
}

pub fn completeness_tier(score: u8) -> CompletenessTier {
    if score > STRONG_ABOVE {
        CompletenessTier::Strong
    } else {
        CompletenessTier::Partial
    }
}
