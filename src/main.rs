// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use anyhow::{Context, Result};
use autotrie::PrefixIndex;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli};

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let index = PrefixIndex::from_dictionary(&cli.dictionary)
        .with_context(|| format!("loading {}", cli.dictionary.display()))?;

    if cli.verify {
        let report = index
            .verify()
            .context("dictionary index failed verification")?;
        info!(
            nodes = report.nodes,
            terminals = report.terminals,
            max_depth = report.max_depth,
            "index verified"
        );
    }

    let (results, stats) = index.top_k_with_stats(cli.limit(), &cli.prefix);
    debug!(
        prefix = %cli.prefix,
        k = cli.k,
        found = results.len(),
        expanded = stats.expanded,
        pruned = stats.pruned,
        peak_frontier = stats.peak_frontier,
        "query complete"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        display::print_json(&mut out, &results)?;
    } else {
        display::print_results(&mut out, &results)?;
    }
    out.flush()?;
    Ok(())
}
