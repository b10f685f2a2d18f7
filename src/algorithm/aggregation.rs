//! Generic aggregation utilities
//!
//! These helpers never reorder their input unless they say so: grouping keeps
//! first-encounter key order and member list order, and the maximum keeps the
//! first element attaining it.

use std::cmp::Ordering;
use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Group items by key
///
/// Keys appear in the order they are first encountered and every group lists
/// its members in input order. Groups are never empty.
pub fn group_by<'a, T, K, F>(items: &'a [T], key: F) -> Vec<(K, Vec<&'a T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&'a T) -> K,
{
    let mut index: FxHashMap<K, usize> = FxHashMap::default();
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();

    for item in items {
        let k = key(item);
        match index.get(&k) {
            Some(&slot) => groups[slot].1.push(item),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }

    groups
}

/// Arithmetic mean, `None` for an empty input
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Maximum by a floating-point key, first element wins ties
///
/// A left-to-right scan that only replaces the current best on a strictly
/// greater key.
pub fn max_by_first<'a, T, I, F>(items: I, key: F) -> Option<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> f64,
{
    let mut best: Option<&'a T> = None;
    for item in items {
        best = match best {
            Some(current) if key(item).total_cmp(&key(current)) != Ordering::Greater => {
                Some(current)
            }
            _ => Some(item),
        };
    }
    best
}

/// Deduplicate and sort strings by code point
pub fn sorted_distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .sorted_unstable()
        .dedup()
        .map(str::to_string)
        .collect()
}

/// Join names with a comma and a space
pub fn join_names<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: std::fmt::Display,
{
    names.into_iter().join(", ")
}
