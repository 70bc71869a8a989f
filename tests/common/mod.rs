//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::sync::LazyLock;

use autotrie::{load_dictionary, PrefixIndex, Weight};

// Re-export canonical test utilities from autotrie::testing
pub use autotrie::testing::{brute_force_top_k, build_index, build_index_owned, weights};

// ============================================================================
// FIXTURES
// ============================================================================

/// Sample dictionary: header line, then `<weight>\t<name>` lines.
pub const POKEMON_DICT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/pokemon.txt");

/// Index built once from the sample dictionary.
pub static POKEMON: LazyLock<PrefixIndex> =
    LazyLock::new(|| load_dictionary(POKEMON_DICT).expect("Failed to load pokemon fixture"));

/// Entries of the sample dictionary, read independently of the library parser.
pub static POKEMON_ENTRIES: LazyLock<Vec<(String, Weight)>> = LazyLock::new(|| {
    let content = fs::read_to_string(POKEMON_DICT).expect("Failed to read pokemon fixture");
    content
        .lines()
        .skip(1)
        .take_while(|l| !l.is_empty())
        .map(|l| {
            let (w, t) = l.split_once('\t').expect("fixture lines are tab separated");
            (t.trim().to_string(), w.parse().expect("fixture weight"))
        })
        .collect()
});

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert `index.top_k(k, prefix)` equals the brute-force answer.
pub fn assert_matches_oracle(index: &PrefixIndex, entries: &[(String, Weight)], k: usize, prefix: &str) {
    let expected = brute_force_top_k(entries, k, prefix);
    let actual = index.top_k(k, prefix);
    assert_eq!(
        actual, expected,
        "top_k({}, {:?}) differs from brute force",
        k, prefix
    );
}

/// Convert results to `(text, weight)` pairs for compact assertions.
pub fn pairs(results: &[autotrie::Completion]) -> Vec<(&str, Weight)> {
    results.iter().map(|c| (c.text.as_str(), c.weight)).collect()
}
