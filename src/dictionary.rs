// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dictionary file reader.
//!
//! Format:
//!
//! ```text
//! <header line, ignored>
//! 5627187200	the
//! 3395006400	of
//! ...
//! <empty line or EOF ends the entries>
//! ```
//!
//! Each entry line is an integer weight, a run of whitespace, then the word.
//! The word may itself contain spaces. Anything after the first empty line is
//! ignored. A line that does not fit the shape aborts the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::DictionaryError;
use crate::index::PrefixIndex;
use crate::types::Weight;

/// Split one entry line into weight and text.
///
/// `line_no` is only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<(Weight, &str), DictionaryError> {
    let line = line.trim();
    let Some((weight, text)) = line.split_once(char::is_whitespace) else {
        return Err(if line.is_empty() || line.parse::<Weight>().is_err() {
            DictionaryError::InvalidWeight {
                line: line_no,
                value: line.to_string(),
            }
        } else {
            DictionaryError::MissingText { line: line_no }
        });
    };

    let weight = weight
        .parse::<Weight>()
        .map_err(|_| DictionaryError::InvalidWeight {
            line: line_no,
            value: weight.to_string(),
        })?;

    Ok((weight, text.trim()))
}

/// Build an index from a dictionary stream.
pub fn parse_dictionary<R: BufRead>(reader: R) -> Result<PrefixIndex, DictionaryError> {
    let mut index = PrefixIndex::new();
    let mut lines = reader.lines();

    // Header
    if lines.next().transpose()?.is_none() {
        debug!("dictionary is empty");
        return Ok(index);
    }

    let mut entries = 0usize;
    for (i, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            debug!(line = i + 2, "empty line, stopping");
            break;
        }
        let (weight, text) = parse_line(&line, i + 2)?;
        index.insert(weight, text);
        entries += 1;
    }

    debug!(entries, distinct = index.len(), "parsed dictionary");
    Ok(index)
}

/// Open `path` and build an index from it.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<PrefixIndex, DictionaryError> {
    let path = path.as_ref();
    let start = Instant::now();
    let file = File::open(path).map_err(|source| DictionaryError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let index = parse_dictionary(BufReader::new(file))?;
    info!(
        path = %path.display(),
        entries = index.len(),
        nodes = index.node_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "loaded dictionary"
    );
    Ok(index)
}
