//! Domain models shared by the directory, the session store and the API client

pub mod player;
pub mod rating;
pub mod user;

pub use player::{
    Availability, Location, LocationQuery, PlayerProfile, PlayerRecord, PreferencesUpdate,
    PreferredPlay,
};
pub use rating::{Rating, RatingTier, YearsOfPlay};
pub use user::{
    AuthResponse, AuthToken, AuthenticatedUser, LoginRequest, NewUser, RegisterRequest, UserRecord,
};

use crate::error::ValidationError;
use validator::Validate;

/// Run the derived field checks on an outgoing request body.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), ValidationError> {
    request.validate().map_err(ValidationError::from)
}
