pub mod health;
pub mod pages;
pub mod ui;

pub use health::*;
pub use ui::*;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{logging_middleware, session_middleware};
use crate::state::AppState;

/// Full application router. Only the UI routes carry a session.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.max_body_bytes();

    let ui = Router::new()
        .route("/", get(index))
        .route("/upload", post(upload))
        .route("/sections/:section/toggle", post(toggle_section))
        .route("/reset", post(reset))
        .route_layer(from_fn(session_middleware));

    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .merge(ui)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(max_body))
                .layer(from_fn(logging_middleware)),
        )
        .with_state(state)
}
