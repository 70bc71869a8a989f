// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trie nodes annotated with an aggregate weight bound.
//!
//! Every node caches the largest weight of any entry whose text passes through
//! it. That single number is what lets the top-k search skip whole subtrees:
//! nothing below a node can outrank the node's bound.
//!
//! # Invariants
//!
//! - **Bound**: `bound(n) = max(terminal_weight(n), max(bound(c) for c in children(n)))`.
//!   Maintained incrementally. Weights only ever go up, so raising the bound of
//!   every node on the insertion path is enough.
//!
//! - **Terminal**: a node holds at most one terminal record, for the text that
//!   ends there. Re-inserting the same text keeps the larger weight.
//!
//! - **Ownership**: each node is owned by exactly one parent (the root by the
//!   index). Nodes are never removed.

use std::collections::BTreeMap;

use crate::types::Weight;

/// The entry that ends at a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Terminal {
    pub(crate) text: String,
    pub(crate) weight: Weight,
}

/// One character position in the prefix tree.
///
/// Children are kept in a `BTreeMap` so traversal order, and therefore the
/// order of equal-weight results, is the same on every run.
#[derive(Debug, Clone, Default)]
pub struct IndexNode {
    children: BTreeMap<char, IndexNode>,
    terminal: Option<Terminal>,
    bound: Option<Weight>,
}

impl IndexNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest weight of any entry in this subtree, `None` if the subtree is empty.
    #[inline]
    pub fn bound_weight(&self) -> Option<Weight> {
        self.bound
    }

    /// Text of the entry ending exactly here.
    #[inline]
    pub fn terminal_text(&self) -> Option<&str> {
        self.terminal.as_ref().map(|t| t.text.as_str())
    }

    /// Weight of the entry ending exactly here.
    #[inline]
    pub fn terminal_weight(&self) -> Option<Weight> {
        self.terminal.as_ref().map(|t| t.weight)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    pub fn child(&self, ch: char) -> Option<&IndexNode> {
        self.children.get(&ch)
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &IndexNode)> {
        self.children.iter().map(|(ch, node)| (*ch, node))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(IndexNode::node_count).sum::<usize>()
    }

    /// Insert `text` below this node with `weight`.
    ///
    /// Raises the bound of every node on the path, this one included, before
    /// moving on to the next character. Returns `true` if `text` was not
    /// already terminal here.
    pub(crate) fn insert(&mut self, weight: Weight, text: &str) -> bool {
        let mut node = self;
        node.raise_bound(weight);
        for ch in text.chars() {
            node = node.children.entry(ch).or_default();
            node.raise_bound(weight);
        }
        node.mark_terminal(text, weight)
    }

    /// Follow `prefix` one character at a time.
    ///
    /// Returns the node reached once the prefix is consumed, terminal or not.
    /// `None` means some character had no matching child.
    pub(crate) fn descend(&self, prefix: &str) -> Option<&IndexNode> {
        let mut node = self;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    #[inline]
    fn raise_bound(&mut self, weight: Weight) {
        self.bound = Some(self.bound.map_or(weight, |b| b.max(weight)));
    }

    fn mark_terminal(&mut self, text: &str, weight: Weight) -> bool {
        match &mut self.terminal {
            Some(existing) => {
                existing.weight = existing.weight.max(weight);
                false
            }
            None => {
                self.terminal = Some(Terminal {
                    text: text.to_string(),
                    weight,
                });
                true
            }
        }
    }
}
