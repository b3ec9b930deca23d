//! Integration tests for the store + persistence pipeline.
//!
//! Tests: add/replace → save → clear → load → get_all
//!
//! Verifies:
//! - Round trips reproduce identifiers, names and numeric fields
//! - Both roster schemas go through the same store
//! - Name rules hold for arbitrary insertion sequences

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use catcollector_characters::{Character, Gameplay, generate_characters};
use catcollector_core::{EntityId, Record, Stats};
use catcollector_players::{CatTally, Player, SampleOptions, generate_players};

use crate::persistence::LoadOutcome;
use crate::roster::{InMemoryRoster, RosterRepository};

fn ids<S: Stats>(records: &[Record<S>]) -> HashSet<EntityId> {
    records.iter().map(|r| r.id()).collect()
}

/// Sort by id so collections can be compared regardless of order.
fn by_id<S: Stats>(mut records: Vec<Record<S>>) -> Vec<Record<S>> {
    records.sort_by_key(|r| *r.id().as_uuid());
    records
}

fn round_trip<S: Stats>(records: Vec<Record<S>>) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("roster.json");

    let mut roster: InMemoryRoster<S> = InMemoryRoster::default();
    roster.replace_all(records.clone()).unwrap();
    roster.save_to_file(&path).unwrap();
    roster.replace_all(Vec::new()).unwrap();
    assert!(roster.is_empty());

    let outcome = roster.load_from_file(&path).unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded(records.len()));
    assert_eq!(by_id(roster.get_all()), by_id(records.clone()));
    // Persisted order is insertion order.
    assert_eq!(roster.records(), &records[..]);
}

#[test]
fn round_trip_single_player() {
    let player = Player::new("Mr. Goose", CatTally::new(3, 1, 4, 1592)).unwrap();
    round_trip(vec![player]);
}

#[test]
fn round_trip_hundred_players_with_duplicate_scores() {
    let players: Vec<Player> = (0..100)
        .map(|i| Player::new(format!("player {i}"), CatTally::new(i, i / 2, i % 7, (i % 10) * 1000)).unwrap())
        .collect();
    round_trip(players);
}

#[test]
fn round_trip_generated_characters() {
    let characters = generate_characters(100, &mut StdRng::seed_from_u64(99)).unwrap();
    round_trip(characters);
}

#[test]
fn round_trip_fractional_high_scores() {
    let characters = vec![
        Character::new("Tenths", Gameplay::new(3, 40, 2, 1234.5)).unwrap(),
        Character::new("Tiny", Gameplay::new(3, 40, 2, 0.1)).unwrap(),
        Character::new("Tiny", Gameplay::new(3, 40, 2, 0.1)).unwrap(),
    ];
    round_trip(characters);
}

#[test]
fn generated_sample_replaces_roster() {
    let mut roster: InMemoryRoster<CatTally> = InMemoryRoster::default();
    roster.add(Player::new("Old Timer", CatTally::default()).unwrap()).unwrap();

    let sample = generate_players(10, SampleOptions::default(), &mut StdRng::seed_from_u64(5)).unwrap();
    roster.replace_all(sample.clone()).unwrap();
    assert_eq!(ids(&roster.get_all()), ids(&sample));
    assert!(roster.get_by_name("old timer").is_none());
}

#[test]
fn saved_file_is_a_json_array_of_flat_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("players.json");
    let mut roster: InMemoryRoster<CatTally> = InMemoryRoster::default();
    let id = roster.add(Player::new("Flat Cat", CatTally::new(1, 2, 3, 4)).unwrap()).unwrap();
    roster.save_to_file(&path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["id"], id.to_string());
    assert_eq!(first["name"], "Flat Cat");
    assert_eq!(first["chonky_cats_collected"], 3);
    assert!(first.get("total_cats").is_none());
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 200,
            ..ProptestConfig::default()
        })]

        /// Property: distinct names all land in the store and resolve in any casing.
        #[test]
        fn distinct_adds_are_all_retrievable(
            names in proptest::collection::hash_set("[a-z][a-z ]{0,11}[a-z]", 0..30),
            seed in any::<u32>()
        ) {
            let mut roster: InMemoryRoster<CatTally> = InMemoryRoster::default();
            let mut added = HashSet::new();
            for (i, name) in names.iter().enumerate() {
                let best = seed.wrapping_add(i as u32) % 10_000;
                let id = roster.add(Player::new(name.clone(), CatTally::new(0, 0, 0, best)).unwrap()).unwrap();
                added.insert(id);
            }

            prop_assert_eq!(ids(&roster.get_all()), added);
            for name in &names {
                let found = roster.get_by_name(&name.to_uppercase());
                prop_assert!(found.is_some());
                prop_assert_eq!(found.unwrap().name(), name.trim());
            }
        }

        /// Property: a colliding add never changes the store.
        #[test]
        fn colliding_add_leaves_store_unchanged(
            name in "[A-Za-z]{1,12}",
            flip in proptest::collection::vec(any::<bool>(), 12)
        ) {
            let mut roster: InMemoryRoster<CatTally> = InMemoryRoster::default();
            roster.add(Player::new(name.clone(), CatTally::default()).unwrap()).unwrap();
            let before = roster.records().to_vec();

            let recased: String = name
                .chars()
                .zip(flip.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                .collect();
            prop_assert!(roster.add(Player::new(recased, CatTally::new(1, 1, 1, 1)).unwrap()).is_err());
            prop_assert_eq!(roster.records(), &before[..]);
        }

        /// Property: get_all is sorted by score descending and is a permutation of the store.
        #[test]
        fn get_all_is_sorted_permutation(scores in proptest::collection::vec(0u32..20, 0..60)) {
            let mut roster: InMemoryRoster<CatTally> = InMemoryRoster::default();
            for (i, best) in scores.iter().enumerate() {
                roster.add(Player::new(format!("p{i}"), CatTally::new(0, 0, 0, *best)).unwrap()).unwrap();
            }

            let all = roster.get_all();
            prop_assert_eq!(all.len(), scores.len());
            for pair in all.windows(2) {
                prop_assert!(pair[0].score() >= pair[1].score());
                if pair[0].score() == pair[1].score() {
                    let pos = |r: &Player| roster.records().iter().position(|o| o.id() == r.id());
                    prop_assert!(pos(&pair[0]) < pos(&pair[1]));
                }
            }
        }
    }
}
