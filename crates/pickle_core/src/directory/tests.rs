use super::*;
use crate::models::{Availability as A, PreferredPlay as P};
use proptest::prelude::*;

fn player(
    id: u64,
    name: &str,
    tenths: u16,
    location: &str,
    availability: A,
    preferred_play: P,
    experience: &str,
) -> PlayerRecord {
    PlayerRecord::new(id, name)
        .with_rating(Rating::from_tenths(tenths))
        .with_location(location)
        .with_availability(availability)
        .with_preferred_play(preferred_play)
        .with_experience(experience)
}

/// The dashboard's sample directory
fn mock_directory() -> Vec<PlayerRecord> {
    vec![
        player(1, "John Smith", 40, "Seattle, WA", A::Weekends, P::Singles, "5 years"),
        player(2, "Sarah Johnson", 35, "Portland, OR", A::Evenings, P::Doubles, "3 years"),
        player(3, "Michael Brown", 25, "Vancouver, BC", A::Flexible, P::Both, "1 year"),
        player(4, "Emily Davis", 45, "San Francisco, CA", A::Weekdays, P::Singles, "7 years"),
        player(5, "David Wilson", 30, "Los Angeles, CA", A::Weekends, P::Doubles, "2 years"),
        player(6, "Jessica Martinez", 40, "Seattle, WA", A::Weekdays, P::Both, "4 years"),
        player(7, "Robert Taylor", 20, "Portland, OR", A::Weekends, P::Doubles, "6 months"),
        player(8, "Amanda Anderson", 35, "Vancouver, BC", A::Evenings, P::Singles, "3 years"),
        player(9, "James Thompson", 45, "San Francisco, CA", A::Flexible, P::Both, "6 years"),
        player(10, "Lisa Garcia", 25, "Los Angeles, CA", A::Weekdays, P::Doubles, "1 year"),
        player(11, "Thomas Lee", 30, "Seattle, WA", A::Evenings, P::Singles, "2 years"),
        player(12, "Jennifer White", 40, "Portland, OR", A::Weekends, P::Both, "5 years"),
        player(13, "Christopher Moore", 20, "Vancouver, BC", A::Weekdays, P::Doubles, "8 months"),
        player(14, "Michelle Clark", 35, "San Francisco, CA", A::Weekends, P::Singles, "3 years"),
        player(15, "Daniel Hall", 40, "Los Angeles, CA", A::Evenings, P::Both, "4 years"),
        player(16, "Patricia Young", 25, "Seattle, WA", A::Flexible, P::Doubles, "1 year"),
        player(17, "Kevin King", 30, "Portland, OR", A::Weekdays, P::Singles, "2 years"),
        player(18, "Nancy Wright", 45, "Vancouver, BC", A::Weekends, P::Both, "6 years"),
        player(19, "Steven Lopez", 20, "San Francisco, CA", A::Evenings, P::Doubles, "6 months"),
        player(20, "Betty Hill", 35, "Los Angeles, CA", A::Flexible, P::Singles, "3 years"),
    ]
}

fn ids(records: &[PlayerRecord]) -> Vec<u64> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn test_empty_selection_is_identity() {
    let directory = mock_directory();
    assert_eq!(filter_players(&directory, &FilterSelection::new()), directory);
}

#[test]
fn test_single_rating_keeps_exact_matches_in_order() {
    let directory = mock_directory();
    let mut selection = FilterSelection::new();
    selection.toggle_rating(Rating::from_tenths(40));

    let result = filter_players(&directory, &selection);

    assert_eq!(ids(&result), vec![1, 6, 12, 15]);
    assert!(result.iter().all(|r| r.rating == Some(Rating::from_tenths(40))));
}

#[test]
fn test_or_within_attribute_and_across_attributes() {
    let directory = mock_directory();
    let mut selection = FilterSelection::new();
    selection.toggle_location("Seattle, WA");
    selection.toggle_location("Portland, OR");
    selection.toggle_preferred_play(P::Singles);

    assert_eq!(ids(&filter_players(&directory, &selection)), vec![1, 11, 17]);

    selection.toggle_availability(A::Weekends);
    assert_eq!(ids(&filter_players(&directory, &selection)), vec![1]);
}

#[test]
fn test_unknown_value_excludes_everything_it_constrains() {
    let directory = mock_directory();
    let mut selection = FilterSelection::new();
    selection.toggle_rating(Rating::from_tenths(50));

    assert!(filter_players(&directory, &selection).is_empty());
}

#[test]
fn test_missing_attribute_only_fails_filters_on_that_attribute() {
    let sparse = PlayerRecord::new(99, "No Location").with_rating(Rating::from_tenths(40));
    let records = vec![sparse.clone()];

    let mut by_rating = FilterSelection::new();
    by_rating.toggle_rating(Rating::from_tenths(40));
    assert_eq!(filter_players(&records, &by_rating), vec![sparse]);

    let mut by_location = FilterSelection::new();
    by_location.toggle_location("Seattle, WA");
    assert!(filter_players(&records, &by_location).is_empty());
}

#[test]
fn test_filter_does_not_mutate_input() {
    let directory = mock_directory();
    let before = directory.clone();
    let mut selection = FilterSelection::new();
    selection.toggle_availability(A::Flexible);

    let _ = filter_players(&directory, &selection);
    assert_eq!(directory, before);
}

#[test]
fn test_toggle_adds_then_removes() {
    let mut selection = FilterSelection::new();
    selection.toggle_rating(Rating::from_tenths(35));
    selection.toggle_location("Seattle, WA");
    assert_eq!(selection.active_count(), 2);

    selection.toggle_rating(Rating::from_tenths(35));
    assert!(selection.ratings.is_empty());
    assert!(!selection.is_empty());

    selection.clear();
    assert!(selection.is_empty());
}

#[test]
fn test_filter_options_from_directory() {
    let options = FilterOptions::from_records(&mock_directory());

    let ratings: Vec<String> = options.ratings.iter().map(Rating::to_string).collect();
    assert_eq!(ratings, vec!["2.0", "2.5", "3.0", "3.5", "4.0", "4.5"]);
    assert_eq!(
        options.locations,
        vec!["Seattle, WA", "Portland, OR", "Vancouver, BC", "San Francisco, CA", "Los Angeles, CA"]
    );
    assert_eq!(options.availability, vec![A::Weekends, A::Evenings, A::Flexible, A::Weekdays]);
    assert_eq!(options.preferred_play, vec![P::Singles, P::Doubles, P::Both]);
}

#[test]
fn test_filter_options_skip_missing_values() {
    let records = vec![PlayerRecord::new(1, "Bare"), PlayerRecord::new(2, "Also Bare")];
    assert_eq!(FilterOptions::from_records(&records), FilterOptions::default());
}

const RATING_TENTHS: [u16; 6] = [20, 25, 30, 35, 40, 45];
const LOCATIONS: [&str; 4] = ["Seattle, WA", "Portland, OR", "Vancouver, BC", "Boise, ID"];

fn arb_record() -> impl Strategy<Value = PlayerRecord> {
    (
        0u64..50,
        proptest::option::of(prop::sample::select(RATING_TENTHS.to_vec())),
        proptest::option::of(prop::sample::select(LOCATIONS.to_vec())),
        proptest::option::of(prop::sample::select(A::ALL.to_vec())),
        proptest::option::of(prop::sample::select(P::ALL.to_vec())),
    )
        .prop_map(|(id, rating, location, availability, preferred_play)| PlayerRecord {
            id,
            name: format!("Player {}", id),
            rating: rating.map(Rating::from_tenths),
            location: location.map(str::to_string),
            availability,
            preferred_play,
            experience: None,
        })
}

fn arb_selection() -> impl Strategy<Value = FilterSelection> {
    (
        prop::collection::btree_set(prop::sample::select(RATING_TENTHS.to_vec()), 0..3),
        prop::collection::btree_set(prop::sample::select(LOCATIONS.to_vec()), 0..3),
        prop::collection::btree_set(prop::sample::select(A::ALL.to_vec()), 0..3),
        prop::collection::btree_set(prop::sample::select(P::ALL.to_vec()), 0..3),
    )
        .prop_map(|(ratings, locations, availability, preferred_play)| FilterSelection {
            ratings: ratings.into_iter().map(Rating::from_tenths).collect(),
            locations: locations.into_iter().map(str::to_string).collect(),
            availability,
            preferred_play,
        })
}

/// Reference predicate written out attribute by attribute
fn passes(record: &PlayerRecord, s: &FilterSelection) -> bool {
    let rating_ok = s.ratings.is_empty() || record.rating.map_or(false, |r| s.ratings.contains(&r));
    let location_ok = s.locations.is_empty()
        || record.location.as_ref().map_or(false, |l| s.locations.contains(l));
    let availability_ok = s.availability.is_empty()
        || record.availability.map_or(false, |a| s.availability.contains(&a));
    let play_ok = s.preferred_play.is_empty()
        || record.preferred_play.map_or(false, |p| s.preferred_play.contains(&p));
    rating_ok && location_ok && availability_ok && play_ok
}

fn is_subsequence(sub: &[PlayerRecord], full: &[PlayerRecord]) -> bool {
    let mut remaining = full.iter();
    sub.iter().all(|wanted| remaining.any(|candidate| candidate == wanted))
}

proptest! {
    #[test]
    fn prop_empty_selection_returns_input(records in prop::collection::vec(arb_record(), 0..30)) {
        prop_assert_eq!(filter_players(&records, &FilterSelection::default()), records);
    }

    #[test]
    fn prop_result_is_exactly_the_passing_records(
        records in prop::collection::vec(arb_record(), 0..30),
        selection in arb_selection(),
    ) {
        let result = filter_players(&records, &selection);

        prop_assert!(result.iter().all(|r| passes(r, &selection)));
        let expected: Vec<PlayerRecord> =
            records.iter().filter(|r| passes(r, &selection)).cloned().collect();
        prop_assert_eq!(&result, &expected);
    }

    #[test]
    fn prop_filter_preserves_relative_order(
        records in prop::collection::vec(arb_record(), 0..30),
        selection in arb_selection(),
    ) {
        let result = filter_players(&records, &selection);
        prop_assert!(is_subsequence(&result, &records));
    }
}
