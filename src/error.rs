// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for autotrie.
//!
//! Query operations never fail: a prefix with no matches is an empty result,
//! not an error. Errors come from reading dictionaries and from explicit
//! verification of a built index.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::verify::InvariantError;

/// Result type alias for autotrie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while reading a dictionary file.
///
/// Line numbers are 1-based and count the header line.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Underlying read failed
    #[error("failed to read dictionary: {0}")]
    Io(#[from] io::Error),

    /// File could not be opened
    #[error("failed to open dictionary {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Line has a weight but no text after it
    #[error("line {line}: missing word after weight")]
    MissingText { line: usize },

    /// Leading field is not an integer
    #[error("line {line}: invalid weight '{value}'")]
    InvalidWeight { line: usize, value: String },
}

/// Top-level error for autotrie
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error("index invariant violated: {0}")]
    Invariant(#[from] InvariantError),
}
