use crate::models::MatchResult;

pub const SHORTLISTED_TITLE: &str = "Candidate Shortlisted";
pub const MISMATCH_TITLE: &str = "Skills Mismatch";

const SHORTLISTED_COPY: &str = "This candidate's skill set matches your requirements. \
     A shortlist notification has been triggered.";
const MISMATCH_COPY: &str = "This candidate does not meet the minimum skill matching threshold";

/// Copy settings for the banner. The shortlist decision itself always comes
/// from the backend; the threshold is only quoted when one is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BannerCopy {
    pub threshold_percent: Option<u8>,
}

/// Prominent job-match summary shown above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchBanner<'a> {
    pub shortlisted: bool,
    pub title: &'static str,
    pub description: String,
    pub score_label: String,
    pub email_sent: bool,
    pub matching_skills: &'a [String],
    pub missing_skills: &'a [String],
}

impl<'a> MatchBanner<'a> {
    pub fn new(job_match: &'a MatchResult, copy: BannerCopy) -> Self {
        let shortlisted = job_match.is_shortlisted;
        let description = if shortlisted {
            SHORTLISTED_COPY.to_string()
        } else {
            match copy.threshold_percent {
                Some(threshold) => format!("{} ({}%).", MISMATCH_COPY, threshold),
                None => format!("{}.", MISMATCH_COPY),
            }
        };

        Self {
            shortlisted,
            title: if shortlisted {
                SHORTLISTED_TITLE
            } else {
                MISMATCH_TITLE
            },
            description,
            score_label: format!("{}%", job_match.score),
            email_sent: job_match.email_sent,
            matching_skills: &job_match.matching_skills,
            missing_skills: &job_match.missing_skills,
        }
    }

    pub fn state_class(&self) -> &'static str {
        if self.shortlisted {
            "shortlisted"
        } else {
            "mismatch"
        }
    }
}
