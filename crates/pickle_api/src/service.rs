use crate::error::ApiError;
use async_trait::async_trait;
use pickle_core::{
    AuthResponse, AuthToken, Location, LocationQuery, LoginRequest, NewUser, PlayerProfile,
    PreferencesUpdate, RegisterRequest, UserRecord,
};

/// Remote operations of the partner-finder API, one network call each.
///
/// [`crate::ApiClient`] is the HTTP implementation.
#[async_trait]
pub trait PickleApi: Send + Sync {
    /// `POST /auth/register/`
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/login/`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// `GET /players/me/`
    async fn my_profile(&self, token: &AuthToken) -> Result<PlayerProfile, ApiError>;

    /// `PATCH /players/update_preferences/`
    async fn update_preferences(
        &self,
        token: &AuthToken,
        update: &PreferencesUpdate,
    ) -> Result<PlayerProfile, ApiError>;

    /// `GET /locations/`
    async fn locations(&self, query: &LocationQuery) -> Result<Vec<Location>, ApiError>;

    /// `GET /users/`
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError>;

    /// `POST /users/`
    async fn create_user(&self, user: &NewUser) -> Result<UserRecord, ApiError>;

    /// `PUT /users/{id}/`
    async fn update_user(&self, id: u64, user: &NewUser) -> Result<UserRecord, ApiError>;

    /// `DELETE /users/{id}/`
    async fn delete_user(&self, id: u64) -> Result<(), ApiError>;
}
