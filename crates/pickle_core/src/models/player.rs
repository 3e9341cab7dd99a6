//! Player-facing data: directory records, profiles and locations

use super::rating::{Rating, YearsOfPlay};
use super::user::UserRecord;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// When a player is usually free to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Availability {
    Weekdays,
    Weekends,
    Evenings,
    Flexible,
}

impl Availability {
    pub const ALL: [Availability; 4] = [
        Availability::Weekdays,
        Availability::Weekends,
        Availability::Evenings,
        Availability::Flexible,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Weekdays => "Weekdays",
            Availability::Weekends => "Weekends",
            Availability::Evenings => "Evenings",
            Availability::Flexible => "Flexible",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Singles, doubles, or either.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum PreferredPlay {
    Singles,
    Doubles,
    #[default]
    Both,
}

impl PreferredPlay {
    pub const ALL: [PreferredPlay; 3] =
        [PreferredPlay::Singles, PreferredPlay::Doubles, PreferredPlay::Both];

    pub fn as_str(self) -> &'static str {
        match self {
            PreferredPlay::Singles => "Singles",
            PreferredPlay::Doubles => "Doubles",
            PreferredPlay::Both => "Both",
        }
    }
}

impl fmt::Display for PreferredPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate in the partner directory.
///
/// Everything except `id` and `name` may be missing on a malformed record;
/// such a record never matches a filter that constrains the missing field.
/// Unrecognised rating, availability or play-style values decode as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub availability: Option<Availability>,
    #[serde(default, deserialize_with = "lenient")]
    pub preferred_play: Option<PreferredPlay>,
    #[serde(default)]
    pub experience: Option<String>,
}

/// Decode an optional field, treating a value of the wrong shape as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| T::deserialize(value).ok()))
}

impl PlayerRecord {
    /// Create a record with only the required fields set
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rating: None,
            location: None,
            availability: None,
            preferred_play: None,
            experience: None,
        }
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }

    pub fn with_preferred_play(mut self, preferred_play: PreferredPlay) -> Self {
        self.preferred_play = Some(preferred_play);
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = Some(experience.into());
        self
    }
}

/// Courts a player can be matched at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub location_id: u64,
    pub courts: String,
    pub city: String,
    /// Two-letter state or province code
    pub state: String,
}

impl Location {
    /// `City, ST`, the form used for directory locations
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

/// Optional filters for the location listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationQuery {
    /// Case-insensitive substring match on city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Case-insensitive exact match on state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl LocationQuery {
    pub fn city(city: impl Into<String>) -> Self {
        Self { city: Some(city.into()), state: None }
    }

    pub fn state(state: impl Into<String>) -> Self {
        Self { city: None, state: Some(state.into()) }
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.state.is_none()
    }
}

fn enabled() -> bool {
    true
}

/// The signed-in player's full profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: u64,
    #[serde(default)]
    pub user: Option<UserRecord>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    pub skill_rating: Rating,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub location_display: String,
    #[serde(default)]
    pub experience_years: YearsOfPlay,
    #[serde(default)]
    pub availability: Vec<Availability>,
    #[serde(default)]
    pub preferred_play: PreferredPlay,
    #[serde(default = "enabled")]
    pub notifications_enabled: bool,
    #[serde(default = "enabled")]
    pub email_notifications: bool,
    #[serde(default = "enabled")]
    pub push_notifications: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PlayerProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Directory view of this profile.
    ///
    /// The directory holds a single availability value; the first listed window is used.
    pub fn to_directory_record(&self) -> PlayerRecord {
        let location = if self.location_display.is_empty() {
            self.location.as_ref().map(Location::display_name)
        } else {
            Some(self.location_display.clone())
        };

        PlayerRecord {
            id: self.id,
            name: self.full_name(),
            rating: Some(self.skill_rating),
            location,
            availability: self.availability.first().copied(),
            preferred_play: Some(self.preferred_play),
            experience: Some(format!("{} years", self.experience_years)),
        }
    }
}

/// Partial profile update. Absent fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreferencesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<YearsOfPlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<Availability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_play: Option<PreferredPlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_notifications: Option<bool>,
}

impl PreferencesUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
