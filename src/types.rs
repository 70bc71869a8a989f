// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Value types shared by the index, the dictionary reader, and the CLI.
//!
//! A dictionary entry is a piece of text plus a signed integer weight. Higher
//! weight means more relevant. Queries hand back [`Completion`] records in
//! descending weight order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relevance weight of a dictionary entry.
///
/// Signed so that negative weights from a dictionary file are ranked like any
/// other value. Absence is always modeled with `Option`, never with a sentinel.
pub type Weight = i64;

/// A single query result: the stored text and its weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
    pub weight: Weight,
}

impl Completion {
    pub fn new(text: impl Into<String>, weight: Weight) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

impl From<(&str, Weight)> for Completion {
    fn from((text, weight): (&str, Weight)) -> Self {
        Completion::new(text, weight)
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.weight)
    }
}
