//! HTTP implementation of [`PickleApi`]

use crate::error::ApiError;
use crate::service::PickleApi;
use async_trait::async_trait;
use pickle_core::{
    ApiConfig, AuthResponse, AuthToken, Location, LocationQuery, LoginRequest, NewUser,
    PlayerProfile, PreferencesUpdate, RegisterRequest, UserRecord,
};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Plain-text error bodies longer than this are replaced by the status reason.
const MAX_TEXT_ERROR_LEN: usize = 200;

/// REST client bound to one configured API root.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder().build()?;
        Self::with_http_client(config, http)
    }

    /// Use a preconfigured `reqwest` client (proxies, custom TLS roots, timeouts)
    pub fn with_http_client(config: ApiConfig, http: Client) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self { http, config })
    }

    /// Build from `PICKLE_API_CONFIG_PATH` / `PICKLE_API_BASE_URL`
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.config.endpoint(path)).header(ACCEPT, "application/json")
    }

    fn authorized(&self, method: Method, path: &str, token: &AuthToken) -> RequestBuilder {
        self.request(method, path).header(AUTHORIZATION, token.header_value())
    }

    /// Send and return the body of a successful response
    async fn execute(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        debug!(%method, %url, "sending request");
        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(status, &body);
            warn!(%method, %url, status = status.as_u16(), %message, "request rejected");
            return Err(ApiError::Status { status: status.as_u16(), message });
        }

        debug!(%method, %url, status = status.as_u16(), "request succeeded");
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PickleApi for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.fetch(self.request(Method::POST, "auth/register/").json(request)).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.fetch(self.request(Method::POST, "auth/login/").json(request)).await
    }

    async fn my_profile(&self, token: &AuthToken) -> Result<PlayerProfile, ApiError> {
        self.fetch(self.authorized(Method::GET, "players/me/", token)).await
    }

    async fn update_preferences(
        &self,
        token: &AuthToken,
        update: &PreferencesUpdate,
    ) -> Result<PlayerProfile, ApiError> {
        let request =
            self.authorized(Method::PATCH, "players/update_preferences/", token).json(update);
        self.fetch(request).await
    }

    async fn locations(&self, query: &LocationQuery) -> Result<Vec<Location>, ApiError> {
        self.fetch(self.request(Method::GET, "locations/").query(query)).await
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.fetch(self.request(Method::GET, "users/")).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<UserRecord, ApiError> {
        self.fetch(self.request(Method::POST, "users/").json(user)).await
    }

    async fn update_user(&self, id: u64, user: &NewUser) -> Result<UserRecord, ApiError> {
        self.fetch(self.request(Method::PUT, &format!("users/{}/", id)).json(user)).await
    }

    async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, &format!("users/{}/", id))).await?;
        Ok(())
    }
}

/// Human-readable reason for a rejected response.
///
/// Prefers the server's `error` / `detail` / `message` field, then per-field
/// validation errors, then a short plain-text body, then the status reason.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = message_from_json(&value) {
            return message;
        }
    }

    let text = body.trim();
    if !text.is_empty() && text.len() <= MAX_TEXT_ERROR_LEN && !text.starts_with('<') {
        return text.to_string();
    }

    status.canonical_reason().unwrap_or("Request failed").to_string()
}

fn message_from_json(value: &Value) -> Option<String> {
    let object = value.as_object()?;

    for key in ["error", "detail", "message"] {
        if let Some(text) = object.get(key).and_then(Value::as_str) {
            return Some(text.to_string());
        }
    }

    // {"email": ["Enter a valid email address."]}
    let fields: Vec<String> = object
        .iter()
        .filter_map(|(field, errors)| {
            let first = match errors {
                Value::Array(items) => items.first()?.as_str()?,
                Value::String(text) => text.as_str(),
                _ => return None,
            };
            Some(format!("{}: {}", field, first))
        })
        .collect();

    if fields.is_empty() {
        None
    } else {
        Some(fields.join("; "))
    }
}
