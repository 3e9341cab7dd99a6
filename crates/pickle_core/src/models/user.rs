//! Accounts, credentials and auth tokens

use super::player::{Availability, PreferredPlay};
use super::rating::Rating;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Account entry as listed by the user resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Body for creating or replacing an account entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(email)]
    pub email: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self { username: username.into(), email: email.into() }
    }
}

/// Opaque API token, sent as `Authorization: Token <value>`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn header_value(&self) -> String {
        format!("Token {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Identity of the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: u64,
    #[serde(default)]
    pub player_id: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to both register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: AuthToken,
    #[serde(flatten)]
    pub user: AuthenticatedUser,
}

impl AuthResponse {
    pub fn into_parts(self) -> (AuthenticatedUser, AuthToken) {
        (self.user, self.token)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Sign-up form. Key names follow what the register endpoint reads.
#[derive(Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(max = 15))]
    #[serde(default)]
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub availability: Vec<Availability>,
    #[serde(rename = "preferredPlay", default)]
    pub preferred_play: PreferredPlay,
    pub notifications: bool,
    #[serde(rename = "emailNotifications")]
    pub email_notifications: bool,
    #[serde(rename = "pushNotifications")]
    pub push_notifications: bool,
}

impl RegisterRequest {
    /// Required fields only; notifications on, preferred play `Both`
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            phone_number: String::new(),
            rating: None,
            availability: Vec::new(),
            preferred_play: PreferredPlay::Both,
            notifications: true,
            email_notifications: true,
            push_notifications: true,
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("phone_number", &self.phone_number)
            .field("rating", &self.rating)
            .field("availability", &self.availability)
            .field("preferred_play", &self.preferred_play)
            .finish_non_exhaustive()
    }
}
