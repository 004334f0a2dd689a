//! Per-browser UI state: the collection-stage state machine and the store
//! that holds one state value per session.

pub mod state;
pub mod store;

pub use state::*;
pub use store::{SessionId, SessionStore};
