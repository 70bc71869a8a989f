// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical brute-force oracle the index is checked against.

#![doc(hidden)]

use std::collections::HashMap;

use crate::index::PrefixIndex;
use crate::types::{Completion, Weight};

/// Build an index from `(text, weight)` pairs.
pub fn build_index(entries: &[(&str, Weight)]) -> PrefixIndex {
    entries.iter().map(|&(text, weight)| (weight, text)).collect()
}

/// Build an index from owned `(text, weight)` pairs.
pub fn build_index_owned(entries: &[(String, Weight)]) -> PrefixIndex {
    entries
        .iter()
        .map(|(text, weight)| (*weight, text.as_str()))
        .collect()
}

/// Collapse duplicate texts to their maximum weight, keeping first-seen order.
pub fn dedup_max(entries: &[(String, Weight)]) -> Vec<(String, Weight)> {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<&str, Weight> = HashMap::new();
    for (text, weight) in entries {
        match best.get_mut(text.as_str()) {
            Some(w) => *w = (*w).max(*weight),
            None => {
                best.insert(text.as_str(), *weight);
                order.push(text.clone());
            }
        }
    }
    order
        .into_iter()
        .map(|t| {
            let w = best[t.as_str()];
            (t, w)
        })
        .collect()
}

/// Obviously-correct top-k: filter by prefix, sort by weight descending, take k.
pub fn brute_force_top_k(entries: &[(String, Weight)], k: usize, prefix: &str) -> Vec<Completion> {
    let mut matches: Vec<(String, Weight)> = dedup_max(entries)
        .into_iter()
        .filter(|(text, _)| text.starts_with(prefix))
        .collect();
    matches.sort_by(|a, b| b.1.cmp(&a.1));
    matches
        .into_iter()
        .take(k)
        .map(|(text, weight)| Completion::new(text, weight))
        .collect()
}

/// Weights of a result list, in order.
pub fn weights(results: &[Completion]) -> Vec<Weight> {
    results.iter().map(|c| c.weight).collect()
}

/// True if the k-th and (k+1)-th matching weights are equal, i.e. the
/// top-k set is not uniquely determined by weight alone.
pub fn has_boundary_tie(entries: &[(String, Weight)], k: usize, prefix: &str) -> bool {
    let all = brute_force_top_k(entries, usize::MAX, prefix);
    k > 0 && all.len() > k && all[k - 1].weight == all[k].weight
}
