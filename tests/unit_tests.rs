//! Unit tests for individual components

use serde_json::json;
use talentscout::{
    error::{AnalysisError, AppError, FALLBACK_MESSAGE},
    models::{AnalysisResult, MatchResult, ParseResponse},
    services::{completeness_score, completeness_tier, CompletenessTier},
    session::{ExpansionState, Section, SessionEvent, SessionState, TransitionError},
    view::{BannerCopy, DashboardView, ExpandableList, MatchBanner, READ_MORE, SHOW_LESS},
};

fn parsed(body: serde_json::Value) -> AnalysisResult {
    serde_json::from_value::<ParseResponse>(body)
        .unwrap()
        .into_result()
        .unwrap()
}

#[test]
fn test_completeness_from_wire_payloads() {
    let empty = parsed(json!({"data": {"Name": "No Contact"}}));
    assert_eq!(completeness_score(&empty), 0);

    let full = parsed(json!({"data": {
        "Email": "a@b.com", "Phone": "123", "Skills": ["SQL"]
    }}));
    assert_eq!(completeness_score(&full), 100);
    assert_eq!(completeness_tier(100), CompletenessTier::Strong);

    let email_only = parsed(json!({"data": {"Email": "a@b.com", "Phone": null}}));
    assert_eq!(completeness_score(&email_only), 40);

    let phone_only = parsed(json!({"data": {"Phone": "123", "Skills": []}}));
    assert_eq!(completeness_score(&phone_only), 40);

    let skills_only = parsed(json!({"data": {"Skills": ["Docker"]}}));
    assert_eq!(completeness_score(&skills_only), 20);
}

#[test]
fn test_completeness_is_always_a_multiple_of_twenty() {
    for email in [None, Some("x@y.z")] {
        for phone in [None, Some("1")] {
            for skills in [vec![], vec!["Go".to_string()]] {
                let result = AnalysisResult {
                    email: email.map(str::to_string),
                    phone: phone.map(str::to_string),
                    skills,
                    ..Default::default()
                };
                let score = completeness_score(&result);
                assert!(score <= 100);
                assert_eq!(score % 20, 0);
            }
        }
    }
}

#[test]
fn test_experience_list_toggle() {
    let experience: Vec<String> = (1..=5).map(|i| format!("Role {}", i)).collect();
    let list = ExpandableList::new(&experience, false, "No experience section detected.");

    assert_eq!(list.visible().len(), 2);
    assert_eq!(list.toggle_label(), Some(READ_MORE));

    let expanded = list.toggled();
    assert_eq!(expanded.visible().len(), 5);
    assert_eq!(expanded.toggle_label(), Some(SHOW_LESS));

    let collapsed = expanded.toggled();
    assert_eq!(collapsed, list);
    assert_eq!(experience.len(), 5);
}

#[test]
fn test_match_banner_states() {
    let shortlisted = MatchResult {
        score: 72,
        is_shortlisted: true,
        email_sent: true,
        ..Default::default()
    };
    let banner = MatchBanner::new(&shortlisted, BannerCopy::default());
    assert!(banner.shortlisted);
    assert_eq!(banner.score_label, "72%");
    assert!(banner.email_sent);

    for score in [0, 49, 50, 72, 100] {
        let rejected = MatchResult {
            score,
            is_shortlisted: false,
            email_sent: false,
            ..Default::default()
        };
        let banner = MatchBanner::new(&rejected, BannerCopy::default());
        assert!(!banner.shortlisted, "score {}", score);
        assert_eq!(banner.title, "Skills Mismatch");
        assert!(!banner.email_sent);
    }
}

#[test]
fn test_dashboard_without_job_match_has_no_banner() {
    let result = parsed(json!({"data": {"Name": "A"}, "meta": {"job_match": null}}));
    let view = DashboardView::build(&result, ExpansionState::default(), BannerCopy::default());
    assert!(view.banner.is_none());
    assert_eq!(view.name, "A");
}

#[test]
fn test_error_user_messages() {
    let with_detail = AnalysisError::Rejected {
        status: 413,
        detail: Some("File too large".to_string()),
    };
    assert_eq!(with_detail.user_message(), "File too large");

    let without_detail = AnalysisError::Rejected {
        status: 500,
        detail: None,
    };
    assert_eq!(without_detail.user_message(), FALLBACK_MESSAGE);

    let malformed = AnalysisError::malformed("expected value at line 1");
    assert_eq!(malformed.user_message(), FALLBACK_MESSAGE);
    assert_eq!(malformed.error_code(), "MALFORMED_RESPONSE");
}

#[test]
fn test_transition_errors_map_to_status_codes() {
    use axum::http::StatusCode;

    let pending: AppError = TransitionError::SubmissionPending.into();
    assert_eq!(pending.status_code(), StatusCode::CONFLICT);
    assert_eq!(pending.error_code(), "SUBMISSION_PENDING");

    let no_file: AppError = TransitionError::NoFileSelected.into();
    assert_eq!(no_file.status_code(), StatusCode::BAD_REQUEST);

    let no_result: AppError = TransitionError::NoResult.into();
    assert_eq!(no_result.error_code(), "INVALID_TRANSITION");
}

#[test]
fn test_submit_is_disabled_only_while_pending() {
    let idle = SessionState::new();
    assert!(idle.submit_enabled());

    let pending = idle
        .apply(SessionEvent::FileSelected(
            talentscout::models::SelectedFile::new("cv.pdf", b"%PDF".to_vec()),
        ))
        .and_then(|s| s.apply(SessionEvent::Submitted))
        .unwrap();
    assert!(!pending.submit_enabled());
    assert_eq!(
        pending.apply(SessionEvent::Submitted).unwrap_err(),
        TransitionError::SubmissionPending
    );

    let done = pending
        .apply(SessionEvent::Succeeded(AnalysisResult::default()))
        .unwrap();
    assert!(done.submit_enabled());
    assert!(done
        .apply(SessionEvent::SectionToggled(Section::Projects))
        .is_ok());
}

#[test]
fn test_oversized_upload_maps_to_payload_too_large() {
    use axum::http::StatusCode;

    let err = AppError::FileTooLarge;
    assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(err.error_code(), "FILE_TOO_LARGE");
}
