//! Player directory filtering
//!
//! A [`FilterSelection`] holds one value set per attribute. A record passes
//! when, for every non-empty set, its value for that attribute is a member:
//! OR within an attribute, AND across attributes. Empty sets do not constrain.

mod options;

pub use options::FilterOptions;

use crate::models::{Availability, PlayerRecord, PreferredPlay, Rating};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Active filter values, one set per attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub ratings: BTreeSet<Rating>,
    #[serde(default)]
    pub locations: BTreeSet<String>,
    #[serde(default)]
    pub availability: BTreeSet<Availability>,
    #[serde(default)]
    pub preferred_play: BTreeSet<PreferredPlay>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no attribute is constrained
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
            && self.locations.is_empty()
            && self.availability.is_empty()
            && self.preferred_play.is_empty()
    }

    /// Number of selected values across all attributes
    pub fn active_count(&self) -> usize {
        self.ratings.len()
            + self.locations.len()
            + self.availability.len()
            + self.preferred_play.len()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_rating(&mut self, rating: Rating) {
        toggle(&mut self.ratings, rating);
    }

    pub fn toggle_location(&mut self, location: impl Into<String>) {
        toggle(&mut self.locations, location.into());
    }

    pub fn toggle_availability(&mut self, availability: Availability) {
        toggle(&mut self.availability, availability);
    }

    pub fn toggle_preferred_play(&mut self, preferred_play: PreferredPlay) {
        toggle(&mut self.preferred_play, preferred_play);
    }

    /// Whether a single record passes every active constraint
    pub fn matches(&self, record: &PlayerRecord) -> bool {
        admits(&self.ratings, record.rating.as_ref())
            && admits(&self.locations, record.location.as_ref())
            && admits(&self.availability, record.availability.as_ref())
            && admits(&self.preferred_play, record.preferred_play.as_ref())
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if set.contains(&value) {
        set.remove(&value);
    } else {
        set.insert(value);
    }
}

fn admits<T: Ord>(selected: &BTreeSet<T>, value: Option<&T>) -> bool {
    selected.is_empty() || value.is_some_and(|v| selected.contains(v))
}

/// Records passing `selection`, in their original order.
pub fn filter_players(records: &[PlayerRecord], selection: &FilterSelection) -> Vec<PlayerRecord> {
    if selection.is_empty() {
        return records.to_vec();
    }
    records.iter().filter(|record| selection.matches(record)).cloned().collect()
}

#[cfg(test)]
mod tests;
