//! TalentScout résumé-analysis UI
//!
//! A server-rendered web front end for a résumé-parsing backend: it collects a
//! PDF plus optional recruiter parameters, forwards them to `POST /api/parse`,
//! and renders the extracted candidate profile and job-match result.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod session;
pub mod state;
pub mod view;

pub use crate::config::Config;
pub use crate::error::{AnalysisError, AppError, AppResult};
pub use crate::state::AppState;
