use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use crate::session::SessionId;

pub const SESSION_COOKIE: &str = "talentscout_session";

/// Resolves the browser's session from its cookie, issuing a new id when
/// the cookie is missing or malformed. The resolved [`SessionId`] is placed
/// in the request extensions. Issuing an id stores nothing: the session store
/// only keeps a session once a transition gives it state.
pub async fn session_middleware(
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let presented = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok());

    let (session_id, created) = match presented {
        Some(id) => (id, false),
        None => (SessionId::generate(), true),
    };

    debug!(session_id = %session_id, created = created, "Session resolved");
    request.extensions_mut().insert(session_id);

    let response = next.run(request).await;

    if created {
        let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        return (jar.add(cookie), response).into_response();
    }

    response
}
