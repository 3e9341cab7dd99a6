//! Drives a [`SessionStore`] through the lifecycle of each network call
//!
//! Store-backed operations dispatch `Pending`, await the call, then dispatch
//! `Fulfilled` or `Rejected`. The settled phase is returned for the caller to
//! match on; errors never escape as `Err`. Calls are not serialized: two
//! operations in flight at once both write `status`, and the later event wins.

use crate::error::ApiError;
use crate::service::PickleApi;
use pickle_core::{
    validate_request, AsyncPhase, AuthResponse, AuthToken, Location, LocationQuery, LoginRequest,
    NewUser, PlayerProfile, PreferencesUpdate, RegisterRequest, SessionEvent, SessionState,
    SessionStore, UserRecord,
};
use std::future::Future;
use tracing::info;

pub struct SessionController<A> {
    api: A,
    store: SessionStore,
}

impl<A: PickleApi> SessionController<A> {
    pub fn new(api: A, store: SessionStore) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> SessionState {
        self.store.snapshot()
    }

    async fn run<T, E, F>(&self, event: E, call: F) -> AsyncPhase<T>
    where
        T: Clone,
        E: Fn(AsyncPhase<T>) -> SessionEvent,
        F: Future<Output = Result<T, ApiError>>,
    {
        self.store.dispatch(event(AsyncPhase::Pending));
        let phase = AsyncPhase::from_result(call.await);
        self.store.dispatch(event(phase.clone()));
        phase
    }

    // ========================
    // User list
    // ========================

    pub async fn fetch_users(&self) -> AsyncPhase<Vec<UserRecord>> {
        self.run(SessionEvent::FetchUsers, self.api.list_users()).await
    }

    pub async fn create_user(&self, user: &NewUser) -> AsyncPhase<UserRecord> {
        self.run(SessionEvent::CreateUser, async {
            validate_request(user)?;
            self.api.create_user(user).await
        })
        .await
    }

    pub async fn update_user(&self, id: u64, user: &NewUser) -> AsyncPhase<UserRecord> {
        self.run(SessionEvent::UpdateUser, async {
            validate_request(user)?;
            self.api.update_user(id, user).await
        })
        .await
    }

    pub async fn delete_user(&self, id: u64) -> AsyncPhase<u64> {
        self.run(SessionEvent::DeleteUser, async {
            self.api.delete_user(id).await?;
            Ok::<_, ApiError>(id)
        })
        .await
    }

    /// Drop the entry at `index` from the local list only
    pub fn remove_user_at(&self, index: usize) -> SessionState {
        self.store.dispatch(SessionEvent::RemoveUserAt(index))
    }

    /// Replace the entry at `index` in the local list only
    pub fn update_user_at(&self, index: usize, user: UserRecord) -> SessionState {
        self.store.dispatch(SessionEvent::UpdateUserAt { index, user })
    }

    // ========================
    // Authentication
    // ========================

    pub async fn login(&self, request: &LoginRequest) -> AsyncPhase<AuthResponse> {
        self.run(SessionEvent::Login, async {
            validate_request(request)?;
            self.api.login(request).await
        })
        .await
    }

    /// Create the account and player profile, then sign in with the returned token
    pub async fn register(&self, request: &RegisterRequest) -> AsyncPhase<AuthResponse> {
        self.run(SessionEvent::Register, async {
            validate_request(request)?;
            self.api.register(request).await
        })
        .await
    }

    pub fn logout(&self) -> SessionState {
        info!("logging out");
        self.store.dispatch(SessionEvent::Logout)
    }

    // ========================
    // Profile and lookups
    // ========================

    /// The signed-in player's profile. A rejected token ends the session.
    pub async fn load_profile(&self) -> Result<PlayerProfile, ApiError> {
        let token = self.require_token()?;
        let result = self.api.my_profile(&token).await;
        self.expire_if_unauthorized(result)
    }

    /// Apply a partial profile update. A rejected token ends the session.
    pub async fn update_preferences(
        &self,
        update: &PreferencesUpdate,
    ) -> Result<PlayerProfile, ApiError> {
        let token = self.require_token()?;
        let result = self.api.update_preferences(&token, update).await;
        self.expire_if_unauthorized(result)
    }

    pub async fn locations(&self, query: &LocationQuery) -> Result<Vec<Location>, ApiError> {
        self.api.locations(query).await
    }

    fn require_token(&self) -> Result<AuthToken, ApiError> {
        self.store.token().ok_or(ApiError::NotAuthenticated)
    }

    fn expire_if_unauthorized<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(err) = &result {
            if err.is_unauthorized() {
                info!("token rejected by server, ending session");
                self.store.dispatch(SessionEvent::Logout);
            }
        }
        result
    }
}
