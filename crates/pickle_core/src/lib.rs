//! # pickle_core - Pickleball Partner Finder Core
//!
//! Everything the partner-finder client needs apart from rendering and the
//! network itself.
//!
//! ## Features
//! - Directory filtering: OR within an attribute, AND across attributes
//! - Session store driven by pending/fulfilled/rejected operation phases
//! - Rating input mask (one integer digit, one decimal digit)
//! - API models and endpoint configuration

pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod rating_input;
pub mod session;

pub use config::ApiConfig;
pub use directory::{filter_players, FilterOptions, FilterSelection};
pub use error::{ConfigError, ValidationError};
pub use models::{
    validate_request, Availability, AuthResponse, AuthToken, AuthenticatedUser, Location,
    LocationQuery, LoginRequest, NewUser, PlayerProfile, PlayerRecord, PreferencesUpdate,
    PreferredPlay, Rating, RatingTier, RegisterRequest, UserRecord, YearsOfPlay,
};
pub use rating_input::{mask_rating_input, parse_rating_input};
pub use session::{reduce, AsyncPhase, OperationStatus, SessionEvent, SessionState, SessionStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
