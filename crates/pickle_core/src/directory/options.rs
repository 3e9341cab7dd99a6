use crate::models::{Availability, PlayerRecord, PreferredPlay, Rating};
use serde::{Deserialize, Serialize};

/// Values offered by the filter dialog for a given directory.
///
/// Ratings are sorted ascending; the other lists keep first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub ratings: Vec<Rating>,
    pub locations: Vec<String>,
    pub availability: Vec<Availability>,
    pub preferred_play: Vec<PreferredPlay>,
}

impl FilterOptions {
    pub fn from_records(records: &[PlayerRecord]) -> Self {
        let mut options = Self::default();

        for record in records {
            push_unique(&mut options.ratings, record.rating.as_ref());
            push_unique(&mut options.locations, record.location.as_ref());
            push_unique(&mut options.availability, record.availability.as_ref());
            push_unique(&mut options.preferred_play, record.preferred_play.as_ref());
        }

        options.ratings.sort_unstable();
        options
    }
}

fn push_unique<T: PartialEq + Clone>(list: &mut Vec<T>, value: Option<&T>) {
    if let Some(value) = value {
        if !list.contains(value) {
            list.push(value.clone());
        }
    }
}
