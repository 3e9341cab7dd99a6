//! Skill rating and other one-decimal quantities
//!
//! The API encodes decimals as strings (`"3.5"`) while the directory and
//! request bodies use plain numbers (`3.5`). Both are accepted on input.
//! Values are held as whole tenths so equality and set membership are exact.

use crate::error::ValidationError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Skill rating with one decimal place (e.g. 4.0, 3.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rating(u16);

/// Years of play, same one-decimal encoding as [`Rating`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct YearsOfPlay(u16);

/// Rating bands shown next to rating options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl RatingTier {
    pub fn label(self) -> &'static str {
        match self {
            RatingTier::Beginner => "Beginner",
            RatingTier::Intermediate => "Intermediate",
            RatingTier::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for RatingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Rating {
    pub const fn from_tenths(tenths: u16) -> Self {
        Self(tenths)
    }

    pub const fn tenths(self) -> u16 {
        self.0
    }

    /// Round to the nearest tenth. Negative, non-finite and oversized values are rejected.
    pub fn from_f64(value: f64) -> Option<Self> {
        tenths_from_f64(value).map(Self)
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    pub fn tier(self) -> RatingTier {
        if self.0 >= 40 {
            RatingTier::Advanced
        } else if self.0 >= 30 {
            RatingTier::Intermediate
        } else {
            RatingTier::Beginner
        }
    }

    /// Option label used by the filter dialog, e.g. `4.0 (Advanced)`.
    pub fn option_label(self) -> String {
        format!("{} ({})", self, self.tier())
    }
}

impl YearsOfPlay {
    pub const fn from_tenths(tenths: u16) -> Self {
        Self(tenths)
    }

    pub fn from_f64(value: f64) -> Option<Self> {
        tenths_from_f64(value).map(Self)
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

fn tenths_from_f64(value: f64) -> Option<u16> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let tenths = (value * 10.0).round();
    if tenths > f64::from(u16::MAX) {
        return None;
    }
    Some(tenths as u16)
}

fn write_tenths(f: &mut fmt::Formatter<'_>, tenths: u16) -> fmt::Result {
    write!(f, "{}.{}", tenths / 10, tenths % 10)
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tenths(f, self.0)
    }
}

impl fmt::Display for YearsOfPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tenths(f, self.0)
    }
}

impl FromStr for Rating {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Rating::from_f64)
            .ok_or_else(|| ValidationError::InvalidRating(s.to_string()))
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl Serialize for YearsOfPlay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TenthsVisitor).map(Rating)
    }
}

impl<'de> Deserialize<'de> for YearsOfPlay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TenthsVisitor).map(YearsOfPlay)
    }
}

struct TenthsVisitor;

impl<'de> Visitor<'de> for TenthsVisitor {
    type Value = u16;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative number with one decimal place, or its string form")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u16, E> {
        tenths_from_f64(v).ok_or_else(|| E::custom(format!("out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u16, E> {
        self.visit_f64(v as f64)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u16, E> {
        self.visit_f64(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u16, E> {
        let parsed: f64 =
            v.trim().parse().map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))?;
        self.visit_f64(parsed)
    }
}
