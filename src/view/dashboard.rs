use crate::models::AnalysisResult;
use crate::services::{completeness_score, completeness_tier, CompletenessTier};
use crate::session::{ExpansionState, Section};

use super::banner::{BannerCopy, MatchBanner};
use super::expandable::ExpandableList;

pub const NAME_PLACEHOLDER: &str = "Not Detected";
pub const CONTACT_PLACEHOLDER: &str = "N/A";
pub const NO_SKILLS: &str = "No skills detected.";
pub const NO_EXPERIENCE: &str = "No experience section detected.";
pub const NO_PROJECTS: &str = "No projects section detected.";

/// Everything the results page shows, derived from one analysis result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub completeness: u8,
    pub tier: CompletenessTier,
    pub skills: &'a [String],
    pub experience: ExpandableList<'a>,
    pub projects: ExpandableList<'a>,
    pub banner: Option<MatchBanner<'a>>,
}

impl<'a> DashboardView<'a> {
    pub fn build(result: &'a AnalysisResult, expansion: ExpansionState, copy: BannerCopy) -> Self {
        let completeness = completeness_score(result);

        Self {
            name: result.name().unwrap_or(NAME_PLACEHOLDER),
            email: result.email(),
            phone: result.phone(),
            completeness,
            tier: completeness_tier(completeness),
            skills: &result.skills,
            experience: ExpandableList::new(
                &result.experience,
                expansion.is_expanded(Section::Experience),
                NO_EXPERIENCE,
            ),
            projects: ExpandableList::new(
                &result.projects,
                expansion.is_expanded(Section::Projects),
                NO_PROJECTS,
            ),
            banner: result.job_match().map(|m| MatchBanner::new(m, copy)),
        }
    }

    pub fn email_label(&self) -> &'a str {
        self.email.unwrap_or(CONTACT_PLACEHOLDER)
    }

    pub fn phone_label(&self) -> &'a str {
        self.phone.unwrap_or(CONTACT_PLACEHOLDER)
    }

    pub fn skills_count(&self) -> usize {
        self.skills.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchMeta, MatchResult};

    #[test]
    fn missing_fields_render_placeholders() {
        let result = AnalysisResult::default();
        let view = DashboardView::build(&result, ExpansionState::default(), BannerCopy::default());

        assert_eq!(view.name, NAME_PLACEHOLDER);
        assert_eq!(view.email_label(), CONTACT_PLACEHOLDER);
        assert_eq!(view.phone_label(), CONTACT_PLACEHOLDER);
        assert_eq!(view.completeness, 0);
        assert!(view.experience.is_empty());
        assert_eq!(view.projects.empty_message(), NO_PROJECTS);
        assert!(view.banner.is_none());
    }

    #[test]
    fn expansion_follows_session_state() {
        let result = AnalysisResult {
            experience: (0..5).map(|i| format!("Job {}", i)).collect(),
            projects: (0..4).map(|i| format!("Project {}", i)).collect(),
            ..Default::default()
        };
        let expansion = ExpansionState {
            experience: true,
            projects: false,
        };
        let view = DashboardView::build(&result, expansion, BannerCopy::default());

        assert_eq!(view.experience.visible().len(), 5);
        assert_eq!(view.projects.visible().len(), 2);
    }

    #[test]
    fn banner_appears_only_with_a_job_match() {
        let result = AnalysisResult {
            email: Some("dev@example.com".into()),
            phone: Some("555-0100".into()),
            skills: vec!["Rust".into()],
            meta: Some(MatchMeta {
                job_match: Some(MatchResult {
                    score: 72,
                    is_shortlisted: true,
                    email_sent: true,
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let view = DashboardView::build(&result, ExpansionState::default(), BannerCopy::default());

        assert_eq!(view.completeness, 100);
        assert_eq!(view.tier, CompletenessTier::Strong);
        assert_eq!(view.skills_count(), 1);
        let banner = view.banner.unwrap();
        assert_eq!(banner.score_label, "72%");
        assert!(banner.email_sent);
    }
}
