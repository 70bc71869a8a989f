// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the autotrie command-line interface.
//!
//! One command, three positional arguments: the prefix to complete, the
//! dictionary file, and how many completions to print. `K` must be at least 1;
//! clap rejects anything else before the dictionary is even opened.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "autotrie",
    about = "Top-k weighted prefix completion over a dictionary file",
    version
)]
pub struct Cli {
    /// Prefix to complete
    pub prefix: String,

    /// Dictionary file: header line, then `<weight> <word>` lines
    pub dictionary: PathBuf,

    /// Number of completions to return (at least 1)
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub k: u64,

    /// Print results as JSON instead of ranked lines
    #[arg(long)]
    pub json: bool,

    /// Check every cached weight bound after loading
    #[arg(long)]
    pub verify: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log directive for the chosen verbosity, used when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "autotrie=info",
            2 => "autotrie=debug",
            _ => "autotrie=trace",
        }
    }

    /// `k` as a `usize`, saturating on narrow targets.
    pub fn limit(&self) -> usize {
        usize::try_from(self.k).unwrap_or(usize::MAX)
    }
}
