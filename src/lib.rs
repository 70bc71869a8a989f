// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted prefix completion.
//!
//! Given a dictionary of `(text, weight)` entries, answer "the k heaviest
//! entries starting with this prefix" without scanning every match. The index
//! is a character trie where each node caches the largest weight anywhere in
//! its subtree. A best-first walk over those bounds finds the top k and stops
//! as soon as nothing unexplored can beat them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ dictionary.rs│────▶│   index.rs   │────▶│  search.rs   │
//! │ (load, parse)│     │ (PrefixIndex,│     │ (best_first, │
//! │              │     │ insert, top_k│     │  frontier)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │ node.rs (IndexNode: children, terminal, bound weight)   │
//! └─────────────────────────────────────────────────────────┘
//!        contracts.rs (per-query asserts)  verify.rs (full-tree check)
//! ```
//!
//! # Usage
//!
//! ```
//! use autotrie::PrefixIndex;
//!
//! let index: PrefixIndex = [(5, "big"), (10, "biggest"), (20, "bigO")]
//!     .into_iter()
//!     .collect();
//!
//! let results = index.top_k(3, "big");
//! let texts: Vec<&str> = results.iter().map(|c| c.text.as_str()).collect();
//! assert_eq!(texts, ["bigO", "biggest", "big"]);
//! ```

// Module declarations
pub mod contracts;
pub mod dictionary;
mod error;
mod index;
mod node;
mod search;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use dictionary::{load_dictionary, parse_dictionary};
pub use error::{DictionaryError, Error, Result};
pub use index::PrefixIndex;
pub use node::IndexNode;
pub use search::SearchStats;
pub use types::{Completion, Weight};
pub use verify::{InvariantError, VerificationReport};
