//! Generic aggregates over any roster schema.

use std::collections::BTreeMap;

use catcollector_core::{Record, Stats};

pub fn count<S: Stats>(entities: &[Record<S>]) -> usize {
    entities.len()
}

/// Mean of the score; `0.0` for an empty snapshot.
pub fn average_score<S: Stats>(entities: &[Record<S>]) -> f64 {
    average_by(entities, |r| r.score())
}

/// Mean of an arbitrary numeric field; `0.0` for an empty snapshot.
pub fn average_by<S, F>(entities: &[Record<S>], field: F) -> f64
where
    S: Stats,
    F: Fn(&Record<S>) -> f64,
{
    if entities.is_empty() {
        return 0.0;
    }
    entities.iter().map(field).sum::<f64>() / entities.len() as f64
}

/// Sum of every entity's derived total.
pub fn total_tally<S: Stats>(entities: &[Record<S>]) -> u64 {
    entities.iter().map(|r| r.tally()).sum()
}

/// The `n` highest scores, highest first. Ties keep snapshot order.
pub fn top_n<S: Stats>(entities: &[Record<S>], n: usize) -> Vec<&Record<S>> {
    let mut ranked: Vec<&Record<S>> = entities.iter().collect();
    ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));
    ranked.truncate(n);
    ranked
}

/// Highest-scoring entity; the earliest one wins a tie.
pub fn best<S: Stats>(entities: &[Record<S>]) -> Option<&Record<S>> {
    entities
        .iter()
        .reduce(|best, r| if r.score() > best.score() { r } else { best })
}

/// Entities matching `predicate`, in snapshot order.
pub fn filter<S, P>(entities: &[Record<S>], predicate: P) -> Vec<&Record<S>>
where
    S: Stats,
    P: Fn(&Record<S>) -> bool,
{
    entities.iter().filter(|r| predicate(*r)).collect()
}

/// Entities matching `predicate`, re-sorted by `key` descending (stable).
pub fn filter_sorted_desc<S, P, K, F>(entities: &[Record<S>], predicate: P, key: F) -> Vec<&Record<S>>
where
    S: Stats,
    P: Fn(&Record<S>) -> bool,
    K: PartialOrd,
    F: Fn(&Record<S>) -> K,
{
    let mut matched = filter(entities, predicate);
    matched.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(core::cmp::Ordering::Equal));
    matched
}

/// Number of entities per distinct key, ascending by key.
pub fn count_by<S, K, F>(entities: &[Record<S>], key: F) -> Vec<(K, usize)>
where
    S: Stats,
    K: Ord,
    F: Fn(&Record<S>) -> K,
{
    let mut groups = BTreeMap::new();
    for r in entities {
        *groups.entry(key(r)).or_insert(0usize) += 1;
    }
    groups.into_iter().collect()
}

/// Smallest and largest value of `field`; `None` for an empty snapshot.
pub fn min_max<S, T, F>(entities: &[Record<S>], field: F) -> Option<(T, T)>
where
    S: Stats,
    T: PartialOrd + Copy,
    F: Fn(&Record<S>) -> T,
{
    let mut values = entities.iter().map(field);
    let first = values.next()?;
    Some(values.fold((first, first), |(lo, hi), v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    }))
}
