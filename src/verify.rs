// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-tree verification of the cached bounds.
//!
//! `top_k` is only as correct as the bound on every node. This module walks
//! the whole tree, recomputes each bound from scratch, and reports the first
//! node where the cache disagrees. It is linear in the number of nodes, so it
//! belongs in tests and the CLI's `--verify` flag, not in the query path.

use thiserror::Error;

use crate::node::IndexNode;
use crate::types::Weight;

/// A broken structural invariant, located by the path of characters from the root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// Cached bound differs from the maximum weight actually present below the node.
    #[error("bound at '{path}' is {cached:?} but subtree maximum is {actual:?}")]
    BoundMismatch {
        path: String,
        cached: Option<Weight>,
        actual: Option<Weight>,
    },

    /// Terminal record holds text that differs from the node's path.
    #[error("terminal at '{path}' stores text '{stored}'")]
    TerminalTextMismatch { path: String, stored: String },

    /// A non-root node with no entry anywhere below it.
    #[error("node at '{path}' has no entries in its subtree")]
    EmptyBranch { path: String },

    /// Index entry count disagrees with the number of terminal nodes.
    #[error("index reports {claimed} entries but holds {actual}")]
    EntryCountMismatch { claimed: usize, actual: usize },
}

/// Summary of a successful verification pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub nodes: usize,
    pub terminals: usize,
    pub max_depth: usize,
}

/// Verify every node below `root` and return what was counted.
pub fn verify_tree(root: &IndexNode) -> Result<VerificationReport, InvariantError> {
    let mut report = VerificationReport::default();
    let mut path = String::new();
    let actual = walk(root, &mut path, 0, &mut report)?;
    check_bound(root, &path, actual)?;
    Ok(report)
}

/// Verify the tree and also check the entry count the index keeps alongside it.
pub(crate) fn verify_index(
    root: &IndexNode,
    claimed_len: usize,
) -> Result<VerificationReport, InvariantError> {
    let report = verify_tree(root)?;
    if report.terminals != claimed_len {
        return Err(InvariantError::EntryCountMismatch {
            claimed: claimed_len,
            actual: report.terminals,
        });
    }
    Ok(report)
}

/// Post-order walk returning the true subtree maximum.
fn walk(
    node: &IndexNode,
    path: &mut String,
    depth: usize,
    report: &mut VerificationReport,
) -> Result<Option<Weight>, InvariantError> {
    report.nodes += 1;
    report.max_depth = report.max_depth.max(depth);

    let mut actual = None;
    if let Some(text) = node.terminal_text() {
        report.terminals += 1;
        if text != path.as_str() {
            return Err(InvariantError::TerminalTextMismatch {
                path: path.clone(),
                stored: text.to_string(),
            });
        }
        actual = node.terminal_weight();
    }

    for (ch, child) in node.children() {
        path.push(ch);
        let child_max = walk(child, path, depth + 1, report)?;
        check_bound(child, path, child_max)?;
        if child_max.is_none() {
            return Err(InvariantError::EmptyBranch { path: path.clone() });
        }
        path.pop();
        actual = actual.max(child_max);
    }

    Ok(actual)
}

fn check_bound(node: &IndexNode, path: &str, actual: Option<Weight>) -> Result<(), InvariantError> {
    if node.bound_weight() != actual {
        return Err(InvariantError::BoundMismatch {
            path: path.to_string(),
            cached: node.bound_weight(),
            actual,
        });
    }
    Ok(())
}
