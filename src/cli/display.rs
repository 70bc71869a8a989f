// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for completion results.
//!
//! Plain output is one line per result, `"{rank}: weight: {weight}\tword: {text}"`,
//! ranks starting at 1, and `Prefix not found` when nothing matched. Pipelines
//! and `NO_COLOR` get exactly that. An interactive terminal gets the same text
//! with OneDark or One Light colors on top.
//!
//! # Theme detection order
//!
//! 1. `AUTOTRIE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::io::{self, Write};
use std::sync::OnceLock;

use autotrie::Completion;

/// Shown when a query has no matches.
pub const NOT_FOUND: &str = "Prefix not found";

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": 0-6 and 8 are dark backgrounds
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg) = bg.parse::<u8>() {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn detect_theme() -> Theme {
    let explicit = std::env::var("AUTOTRIE_THEME").ok();
    let colorfgbg = std::env::var("COLORFGBG").ok();
    parse_theme(explicit.as_deref(), colorfgbg.as_deref())
}

/// Current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

/// Roles a piece of output can play.
#[derive(Debug, Clone, Copy)]
enum Role {
    Rank,
    Weight,
    Text,
    Muted,
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn palette(theme: Theme, role: Role) -> (u8, u8, u8) {
    match (theme, role) {
        (Theme::Dark, Role::Rank) => (92, 99, 112),      // #5c6370
        (Theme::Dark, Role::Weight) => (229, 192, 123),  // #e5c07b
        (Theme::Dark, Role::Text) => (152, 195, 121),    // #98c379
        (Theme::Dark, Role::Muted) => (224, 108, 117),   // #e06c75
        (Theme::Light, Role::Rank) => (160, 161, 167),   // #a0a1a7
        (Theme::Light, Role::Weight) => (193, 132, 1),   // #c18401
        (Theme::Light, Role::Text) => (80, 161, 79),     // #50a14f
        (Theme::Light, Role::Muted) => (228, 86, 73),    // #e45649
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(styled: Option<Theme>, role: Role, bold: bool, text: &str) -> String {
    match styled {
        Some(theme) => format!(
            "{}{}{}{}",
            if bold { BOLD } else { "" },
            rgb(palette(theme, role)),
            text,
            RESET
        ),
        None => text.to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Format one result line. `rank` is 1-based.
pub fn rank_line(rank: usize, completion: &Completion, styled: Option<Theme>) -> String {
    format!(
        "{}: weight: {}\tword: {}",
        paint(styled, Role::Rank, false, &rank.to_string()),
        paint(styled, Role::Weight, false, &completion.weight.to_string()),
        paint(styled, Role::Text, true, &completion.text),
    )
}

/// Format the whole result list, one line each, or the not-found sentinel.
pub fn render(results: &[Completion], styled: Option<Theme>) -> Vec<String> {
    if results.is_empty() {
        return vec![paint(styled, Role::Muted, false, NOT_FOUND)];
    }
    results
        .iter()
        .enumerate()
        .map(|(i, c)| rank_line(i + 1, c, styled))
        .collect()
}

/// Write results as ranked lines, colored when stdout is a terminal.
pub fn print_results(out: &mut impl Write, results: &[Completion]) -> io::Result<()> {
    let styled = use_colors().then(theme);
    for line in render(results, styled) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Write results as a JSON array of `{text, weight}` objects.
pub fn print_json(out: &mut impl Write, results: &[Completion]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)
}
