// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Best-first top-k retrieval over a weighted subtree.
//!
//! The frontier is a max-heap keyed on each node's cached bound. Popping the
//! node with the highest bound first means terminals are discovered roughly in
//! weight order, and the search can stop as soon as the k-th best weight found
//! so far dominates every bound still on the frontier.
//!
//! # Termination
//!
//! Let `w_k` be the k-th best collected weight and `b_max` the largest bound on
//! the frontier. Every unexplored entry has weight `≤ b_max`. Once `w_k ≥ b_max`
//! no unexplored entry can displace the current top k, so the answer is final.
//! The same argument lets children with `bound ≤ w_k` be dropped before they
//! are ever pushed.
//!
//! # Ties
//!
//! Equal weights keep discovery order. Equal bounds on the frontier pop in push
//! order. Children are visited in character order, so the result is stable
//! across runs.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::IndexNode;
use crate::types::{Completion, Weight};

/// Counters describing how much of the subtree a search touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the frontier.
    pub expanded: usize,
    /// Children skipped because their bound could not beat the k-th best weight.
    pub pruned: usize,
    /// Largest frontier size reached.
    pub peak_frontier: usize,
}

/// A pending subtree, ordered by bound (highest first) then by push order.
struct Frontier<'a> {
    bound: Weight,
    seq: u64,
    node: &'a IndexNode,
}

impl PartialEq for Frontier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bound == other.bound && self.seq == other.seq
    }
}

impl Eq for Frontier<'_> {}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earlier pushes win ties, so compare seq in reverse.
        self.bound
            .cmp(&other.bound)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Results kept sorted by descending weight, never longer than `k`.
struct Accumulator {
    k: usize,
    items: Vec<Completion>,
}

impl Accumulator {
    fn new(k: usize) -> Self {
        Self {
            k,
            items: Vec::with_capacity(k.min(64)),
        }
    }

    /// Insert after every entry of greater or equal weight.
    fn push(&mut self, text: &str, weight: Weight) {
        let at = self.items.partition_point(|c| c.weight >= weight);
        if at >= self.k {
            return;
        }
        self.items.insert(at, Completion::new(text, weight));
        self.items.truncate(self.k);
    }

    /// The k-th best weight, once k entries have been collected.
    fn threshold(&self) -> Option<Weight> {
        if self.items.len() >= self.k {
            self.items.last().map(|c| c.weight)
        } else {
            None
        }
    }
}

/// Collect the `k` heaviest entries below `subtree`, heaviest first.
pub(crate) fn best_first(subtree: &IndexNode, k: usize) -> (Vec<Completion>, SearchStats) {
    let mut stats = SearchStats::default();
    if k == 0 {
        return (Vec::new(), stats);
    }
    let Some(root_bound) = subtree.bound_weight() else {
        return (Vec::new(), stats);
    };

    let mut acc = Accumulator::new(k);
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    frontier.push(Frontier {
        bound: root_bound,
        seq,
        node: subtree,
    });

    while let Some(Frontier { node, .. }) = frontier.pop() {
        stats.expanded += 1;

        if let (Some(text), Some(weight)) = (node.terminal_text(), node.terminal_weight()) {
            acc.push(text, weight);
        }

        let threshold = acc.threshold();
        for (_, child) in node.children() {
            let Some(bound) = child.bound_weight() else {
                continue;
            };
            if threshold.is_some_and(|w| bound <= w) {
                stats.pruned += 1;
                continue;
            }
            seq += 1;
            frontier.push(Frontier {
                bound,
                seq,
                node: child,
            });
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());

        if let Some(w) = acc.threshold() {
            match frontier.peek() {
                Some(next) if next.bound > w => {}
                _ => break,
            }
        }
    }

    (acc.items, stats)
}
