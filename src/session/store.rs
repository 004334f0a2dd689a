use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use super::state::{SessionEvent, SessionState, TransitionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    state: SessionState,
    touched: Instant,
}

impl Entry {
    fn new(state: SessionState) -> Self {
        Self {
            state,
            touched: Instant::now(),
        }
    }
}

/// In-memory sessions, one per browser. Transitions for a session are
/// applied under the write lock, so they never interleave.
///
/// A session is stored only once a transition leaves it with something to
/// remember. Sessions that return to the pristine state are dropped, and
/// idle ones are evicted by [`SessionStore::evict_idle`].
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<SessionId, Entry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, or a fresh one for an id this store does not hold.
    pub async fn snapshot(&self, id: SessionId) -> SessionState {
        let mut sessions = self.inner.write().await;
        match sessions.get_mut(&id) {
            Some(entry) => {
                entry.touched = Instant::now();
                entry.state.clone()
            }
            None => SessionState::default(),
        }
    }

    /// Applies `events` in order as one atomic step. Nothing is stored if any
    /// of them is rejected.
    pub async fn apply_all(
        &self,
        id: SessionId,
        events: impl IntoIterator<Item = SessionEvent>,
    ) -> Result<SessionState, TransitionError> {
        let mut sessions = self.inner.write().await;
        let mut state = sessions
            .get(&id)
            .map(|entry| entry.state.clone())
            .unwrap_or_default();
        for event in events {
            let name = event.name();
            state = state.apply(event)?;
            debug!(session_id = %id, event = name, loading = state.is_loading(), "Session transition");
        }
        if state.is_pristine() {
            if sessions.remove(&id).is_some() {
                debug!(session_id = %id, "Session released");
            }
        } else {
            sessions.insert(id, Entry::new(state.clone()));
        }
        Ok(state)
    }

    pub async fn apply(
        &self,
        id: SessionId,
        event: SessionEvent,
    ) -> Result<SessionState, TransitionError> {
        self.apply_all(id, [event]).await
    }

    /// Drops sessions untouched for at least `ttl`. Sessions with a
    /// submission in flight are kept so the result has somewhere to land.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.state.is_loading() || entry.touched.elapsed() < ttl);
        before - sessions.len()
    }

    /// Runs [`SessionStore::evict_idle`] every `period` for the life of the
    /// process.
    pub fn spawn_sweeper(&self, ttl: Duration, period: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let evicted = store.evict_idle(ttl).await;
                if evicted > 0 {
                    let remaining = store.len().await;
                    info!(evicted = evicted, remaining = remaining, "Idle sessions evicted");
                }
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
