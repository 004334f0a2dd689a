use askama::Template;

use crate::session::SessionState;
use crate::view::{dashboard::NO_SKILLS, BannerCopy, DashboardView};

/// Collection stage: drop zone and file picker, recruiter options and the
/// last error.
#[derive(Template)]
#[template(path = "upload.html")]
pub struct UploadPage<'a> {
    pub loading: bool,
    pub submit_enabled: bool,
    pub error: Option<&'a str>,
    pub required_skills: &'a str,
    pub recruiter_email: &'a str,
    pub pending_file: Option<&'a str>,
}

impl<'a> UploadPage<'a> {
    pub fn from_session(session: &'a SessionState) -> Self {
        Self {
            loading: session.is_loading(),
            submit_enabled: session.submit_enabled(),
            error: session.error(),
            required_skills: session.required_skills(),
            recruiter_email: session.recruiter_email(),
            pending_file: session.selected_file().map(|file| file.name.as_str()),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage<'a> {
    pub view: DashboardView<'a>,
    pub no_skills: &'static str,
}

impl<'a> DashboardPage<'a> {
    /// `None` until the session holds a result.
    pub fn from_session(session: &'a SessionState, copy: BannerCopy) -> Option<Self> {
        let result = session.result()?;
        Some(Self {
            view: DashboardView::build(result, session.expansion(), copy),
            no_skills: NO_SKILLS,
        })
    }
}

/// Renders whichever stage the session is in.
pub fn render_session(session: &SessionState, copy: BannerCopy) -> askama::Result<String> {
    match DashboardPage::from_session(session, copy) {
        Some(page) => page.render(),
        None => UploadPage::from_session(session).render(),
    }
}
