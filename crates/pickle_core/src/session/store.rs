use super::{OperationStatus, SessionEvent, SessionState};
use crate::models::AuthToken;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle to one session.
///
/// Clones point at the same state. Created by the embedding application and
/// passed to whatever needs it; there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state
    pub fn with_state(state: SessionState) -> Self {
        Self { inner: Arc::new(RwLock::new(state)) }
    }

    /// Apply `event` and return the resulting state
    pub fn dispatch(&self, event: SessionEvent) -> SessionState {
        let description = event.describe();
        let rejected = event.is_rejection();
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let current = std::mem::take(&mut *guard);
        *guard = current.reduce(event);

        if rejected {
            log::warn!(
                "Session {} failed: {}",
                description,
                guard.error.as_deref().unwrap_or_default()
            );
        } else {
            log::debug!("Session {} -> {}", description, guard.status);
        }

        guard.clone()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SessionState {
        self.read(SessionState::clone)
    }

    /// Borrow the current state without cloning it
    pub fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    pub fn token(&self) -> Option<AuthToken> {
        self.read(|state| state.token.clone())
    }

    pub fn status(&self) -> OperationStatus {
        self.read(|state| state.status)
    }

    pub fn is_authenticated(&self) -> bool {
        self.read(SessionState::is_authenticated)
    }
}
