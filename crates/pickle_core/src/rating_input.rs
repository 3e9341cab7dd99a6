//! Input mask for the rating field
//!
//! Editing happens one keystroke at a time, so a trailing `.` is kept and an
//! empty result is valid. The mask only narrows what was typed; it never
//! inserts digits.

use crate::models::Rating;

/// Restrict `raw` to at most one integer digit and one decimal digit.
///
/// Characters other than digits and `.` are dropped and any extra decimal
/// points are folded into the first one (`"3..5"` becomes `"3.5"`).
pub fn mask_rating_input(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

    let (integer, decimal) = match cleaned.split_once('.') {
        Some((integer, rest)) => (integer, Some(rest.replace('.', ""))),
        None => (cleaned.as_str(), None),
    };

    let mut masked: String = integer.chars().take(1).collect();
    if let Some(decimal) = decimal {
        let overflowed = integer.len() > 1;
        // A trailing point is dropped when the integer part was cut short.
        if !(overflowed && decimal.is_empty()) {
            masked.push('.');
            masked.extend(decimal.chars().take(1));
        }
    }
    masked
}

/// Mask `raw` and read it as a rating. Returns `None` when nothing numeric remains.
pub fn parse_rating_input(raw: &str) -> Option<Rating> {
    let masked = mask_rating_input(raw);
    if !masked.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    masked.trim_end_matches('.').parse().ok()
}
