// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for query results.
//!
//! Debug-mode assertions that every `top_k` answer must satisfy. They are
//! zero-cost in release builds (`debug_assert!`) and fail loudly during
//! development and tests.
//!
//! | Contract                     | Property                                  |
//! |------------------------------|-------------------------------------------|
//! | `check_results_sorted`       | weights are non-increasing                |
//! | `check_results_match_prefix` | every text starts with the query prefix   |
//! | `check_results_len`          | at most `k` results                       |
//! | `check_results_unique`       | no text appears twice                     |
//!
//! The aggregate-bound invariant is too expensive to assert per query; see
//! [`crate::verify`] for the full-tree check.

use crate::types::Completion;

/// Check that results are ordered by descending weight.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_results_sorted(results: &[Completion]) {
    for (i, pair) in results.windows(2).enumerate() {
        debug_assert!(
            pair[0].weight >= pair[1].weight,
            "Contract violation: results[{}].weight {} < results[{}].weight {}",
            i,
            pair[0].weight,
            i + 1,
            pair[1].weight
        );
    }
}

/// Check that every result text begins with `prefix`.
#[inline]
pub fn check_results_match_prefix(results: &[Completion], prefix: &str) {
    for (i, c) in results.iter().enumerate() {
        debug_assert!(
            c.text.starts_with(prefix),
            "Contract violation: results[{}] '{}' does not start with '{}'",
            i,
            c.text,
            prefix
        );
    }
}

/// Check that no more than `k` results were returned.
#[inline]
pub fn check_results_len(results: &[Completion], k: usize) {
    debug_assert!(
        results.len() <= k,
        "Contract violation: {} results returned for k = {}",
        results.len(),
        k
    );
}

/// Check that each text is reported at most once.
#[inline]
pub fn check_results_unique(results: &[Completion]) {
    #[cfg(debug_assertions)]
    {
        let mut seen = std::collections::HashSet::with_capacity(results.len());
        for c in results {
            debug_assert!(
                seen.insert(c.text.as_str()),
                "Contract violation: '{}' returned more than once",
                c.text
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = results;
}

/// Run every result contract.
#[inline]
pub fn check_top_k(results: &[Completion], prefix: &str, k: usize) {
    check_results_len(results, k);
    check_results_sorted(results);
    check_results_match_prefix(results, prefix);
    check_results_unique(results);
}
