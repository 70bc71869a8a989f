// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The weighted prefix index.
//!
//! Two phases: build the index with [`PrefixIndex::insert`], then query it with
//! [`PrefixIndex::top_k`]. Queries take `&self` and never mutate, so a built
//! index can be shared across threads (`PrefixIndex: Sync`) and queried
//! concurrently. Inserting while other threads query needs outside locking.
//!
//! # Example
//!
//! ```
//! use autotrie::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! index.insert(5, "big");
//! index.insert(10, "biggest");
//! index.insert(20, "bigO");
//!
//! let top: Vec<_> = index
//!     .top_k(2, "big")
//!     .into_iter()
//!     .map(|c| (c.text, c.weight))
//!     .collect();
//! assert_eq!(top, vec![("bigO".to_string(), 20), ("biggest".to_string(), 10)]);
//! ```

use std::path::Path;

use tracing::trace;

use crate::contracts::check_top_k;
use crate::dictionary::load_dictionary;
use crate::error::Result;
use crate::node::IndexNode;
use crate::search::{best_first, SearchStats};
use crate::types::{Completion, Weight};
use crate::verify::{verify_index, InvariantError, VerificationReport};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Character trie with per-node weight bounds, answering top-k prefix queries.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    root: IndexNode,
    len: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a dictionary file.
    pub fn from_dictionary(path: impl AsRef<Path>) -> Result<Self> {
        Ok(load_dictionary(path)?)
    }

    /// Add `text` with `weight`.
    ///
    /// Re-inserting a text keeps the larger of the two weights. The empty
    /// string is a valid entry and is stored on the root.
    pub fn insert(&mut self, weight: Weight, text: &str) {
        if self.root.insert(weight, text) {
            self.len += 1;
        }
    }

    /// Root of the subtree holding every entry that starts with `prefix`.
    ///
    /// `None` means nothing starts with `prefix`. That is a normal outcome,
    /// not a failure.
    pub fn locate_subtree(&self, prefix: &str) -> Option<&IndexNode> {
        self.root.descend(prefix)
    }

    /// The `k` heaviest entries starting with `prefix`, heaviest first.
    ///
    /// Returns fewer than `k` entries when fewer match, and an empty vector
    /// when none do or when `k == 0`.
    pub fn top_k(&self, k: usize, prefix: &str) -> Vec<Completion> {
        self.top_k_with_stats(k, prefix).0
    }

    /// Same as [`top_k`](Self::top_k), also reporting how much of the tree was touched.
    pub fn top_k_with_stats(&self, k: usize, prefix: &str) -> (Vec<Completion>, SearchStats) {
        let Some(subtree) = self.locate_subtree(prefix) else {
            trace!(prefix, "prefix not in index");
            return (Vec::new(), SearchStats::default());
        };

        let (results, stats) = best_first(subtree, k);
        check_top_k(&results, prefix, k);
        trace!(
            prefix,
            k,
            found = results.len(),
            expanded = stats.expanded,
            pruned = stats.pruned,
            "top_k"
        );
        (results, stats)
    }

    /// Answer several prefix queries against the same index.
    ///
    /// Output order matches `prefixes`. With the `parallel` feature the
    /// queries run on the rayon pool.
    pub fn top_k_batch<S>(&self, k: usize, prefixes: &[S]) -> Vec<Vec<Completion>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            prefixes
                .par_iter()
                .map(|p| self.top_k(k, p.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            prefixes.iter().map(|p| self.top_k(k, p.as_ref())).collect()
        }
    }

    /// Weight stored for exactly `text`, if it was inserted.
    pub fn weight_of(&self, text: &str) -> Option<Weight> {
        self.root.descend(text)?.terminal_weight()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.weight_of(text).is_some()
    }

    /// Largest weight in the index.
    pub fn max_weight(&self) -> Option<Weight> {
        self.root.bound_weight()
    }

    /// Number of distinct texts.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn root(&self) -> &IndexNode {
        &self.root
    }

    /// Recompute every cached bound and compare it with the stored one.
    pub fn verify(&self) -> std::result::Result<VerificationReport, InvariantError> {
        verify_index(&self.root, self.len)
    }
}

impl<S: AsRef<str>> Extend<(Weight, S)> for PrefixIndex {
    fn extend<I: IntoIterator<Item = (Weight, S)>>(&mut self, iter: I) {
        for (weight, text) in iter {
            self.insert(weight, text.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<(Weight, S)> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = (Weight, S)>>(iter: I) -> Self {
        let mut index = PrefixIndex::new();
        index.extend(iter);
        index
    }
}
