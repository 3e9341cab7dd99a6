//! Session state and its transitions
//!
//! [`SessionState`] changes only through [`SessionState::reduce`]. Each network
//! operation contributes three events through [`AsyncPhase`]: `Pending` when
//! the call starts, then `Fulfilled` or `Rejected` when it settles.
//!
//! Overlapping operations share the single `status` field. Whichever event is
//! applied last wins; there is no per-request fencing.

mod store;

pub use store::SessionStore;

use crate::models::{AuthResponse, AuthToken, AuthenticatedUser, UserRecord};
use serde::Serialize;
use std::fmt;

/// Reason recorded when a rejection carries no message of its own.
pub const FALLBACK_ERROR: &str = "Operation failed";

/// Lifecycle of the most recently started or settled operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationStatus::Idle => "idle",
            OperationStatus::Loading => "loading",
            OperationStatus::Succeeded => "succeeded",
            OperationStatus::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// One phase of an asynchronous operation.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncPhase<T> {
    Pending,
    Fulfilled(T),
    Rejected(String),
}

impl<T> AsyncPhase<T> {
    /// Settle a finished call, keeping only the error's message
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => AsyncPhase::Fulfilled(value),
            Err(err) => AsyncPhase::Rejected(err.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AsyncPhase::Pending)
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self, AsyncPhase::Fulfilled(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, AsyncPhase::Rejected(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            AsyncPhase::Fulfilled(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AsyncPhase::Rejected(reason) => Some(reason),
            _ => None,
        }
    }

    fn phase_name(&self) -> &'static str {
        match self {
            AsyncPhase::Pending => "pending",
            AsyncPhase::Fulfilled(_) => "fulfilled",
            AsyncPhase::Rejected(_) => "rejected",
        }
    }
}

/// Every way the session can change.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    FetchUsers(AsyncPhase<Vec<UserRecord>>),
    CreateUser(AsyncPhase<UserRecord>),
    /// Replaces the entry whose id matches the returned record
    UpdateUser(AsyncPhase<UserRecord>),
    /// Removes entries with the deleted id
    DeleteUser(AsyncPhase<u64>),
    Login(AsyncPhase<AuthResponse>),
    Register(AsyncPhase<AuthResponse>),
    Logout,
    SetUser(Option<AuthenticatedUser>),
    SetToken(Option<AuthToken>),
    RemoveUserAt(usize),
    UpdateUserAt { index: usize, user: UserRecord },
}

impl SessionEvent {
    /// Short name for logs, e.g. `login/rejected`
    pub fn describe(&self) -> String {
        match self {
            SessionEvent::FetchUsers(phase) => format!("fetch_users/{}", phase.phase_name()),
            SessionEvent::CreateUser(phase) => format!("create_user/{}", phase.phase_name()),
            SessionEvent::UpdateUser(phase) => format!("update_user/{}", phase.phase_name()),
            SessionEvent::DeleteUser(phase) => format!("delete_user/{}", phase.phase_name()),
            SessionEvent::Login(phase) => format!("login/{}", phase.phase_name()),
            SessionEvent::Register(phase) => format!("register/{}", phase.phase_name()),
            SessionEvent::Logout => "logout".to_string(),
            SessionEvent::SetUser(_) => "set_user".to_string(),
            SessionEvent::SetToken(_) => "set_token".to_string(),
            SessionEvent::RemoveUserAt(index) => format!("remove_user_at/{}", index),
            SessionEvent::UpdateUserAt { index, .. } => format!("update_user_at/{}", index),
        }
    }

    /// A network operation settling with a failure
    pub fn is_rejection(&self) -> bool {
        match self {
            SessionEvent::FetchUsers(phase) => phase.is_rejected(),
            SessionEvent::CreateUser(phase) | SessionEvent::UpdateUser(phase) => {
                phase.is_rejected()
            }
            SessionEvent::DeleteUser(phase) => phase.is_rejected(),
            SessionEvent::Login(phase) | SessionEvent::Register(phase) => phase.is_rejected(),
            SessionEvent::Logout
            | SessionEvent::SetUser(_)
            | SessionEvent::SetToken(_)
            | SessionEvent::RemoveUserAt(_)
            | SessionEvent::UpdateUserAt { .. } => false,
        }
    }
}

/// Authenticated user, token and the user list, plus the status of the last operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current_user: Option<AuthenticatedUser>,
    pub token: Option<AuthToken>,
    pub users: Vec<UserRecord>,
    pub status: OperationStatus,
    /// Last failure message. Kept until the next failure or logout.
    pub error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Apply one event and return the resulting state
    pub fn reduce(mut self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::FetchUsers(phase) => {
                self.settle(phase, |state, users| state.users = users);
            }
            SessionEvent::CreateUser(phase) => {
                self.settle(phase, |state, user| state.users.push(user));
            }
            SessionEvent::UpdateUser(phase) => {
                self.settle(phase, |state, user| {
                    if let Some(existing) = state.users.iter_mut().find(|u| u.id == user.id) {
                        *existing = user;
                    }
                });
            }
            SessionEvent::DeleteUser(phase) => {
                self.settle(phase, |state, id| state.users.retain(|u| u.id != id));
            }
            SessionEvent::Login(phase) | SessionEvent::Register(phase) => {
                self.settle(phase, |state, response| {
                    let (user, token) = response.into_parts();
                    state.current_user = Some(user);
                    state.token = Some(token);
                });
            }
            SessionEvent::Logout => return Self::default(),
            SessionEvent::SetUser(user) => self.current_user = user,
            SessionEvent::SetToken(token) => self.token = token,
            SessionEvent::RemoveUserAt(index) => {
                if index < self.users.len() {
                    self.users.remove(index);
                }
            }
            SessionEvent::UpdateUserAt { index, user } => {
                if let Some(existing) = self.users.get_mut(index) {
                    *existing = user;
                }
            }
        }
        self
    }

    fn settle<T>(&mut self, phase: AsyncPhase<T>, apply: impl FnOnce(&mut Self, T)) {
        match phase {
            AsyncPhase::Pending => self.status = OperationStatus::Loading,
            AsyncPhase::Fulfilled(value) => {
                self.status = OperationStatus::Succeeded;
                apply(self, value);
            }
            AsyncPhase::Rejected(reason) => {
                self.status = OperationStatus::Failed;
                let reason = reason.trim();
                let reason = if reason.is_empty() { FALLBACK_ERROR } else { reason };
                self.error = Some(reason.to_string());
            }
        }
    }
}

/// Free-function form of [`SessionState::reduce`]
pub fn reduce(state: SessionState, event: SessionEvent) -> SessionState {
    state.reduce(event)
}
