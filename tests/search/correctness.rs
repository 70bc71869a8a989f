//! Results agree with a brute-force scan of the sample dictionary.

use super::common::{assert_matches_oracle, POKEMON, POKEMON_ENTRIES};

#[test]
fn test_matches_brute_force_for_ch_and_du() {
    assert_matches_oracle(&POKEMON, &POKEMON_ENTRIES, 5, "Ch");
    assert_matches_oracle(&POKEMON, &POKEMON_ENTRIES, 4, "Du");
}

#[test]
fn test_matches_brute_force_across_prefixes() {
    for prefix in ["", "B", "Bo", "Br", "C", "Char", "Chi", "D", "Dus", "Mr", "P"] {
        for k in [1, 2, 3, 7, 50] {
            assert_matches_oracle(&POKEMON, &POKEMON_ENTRIES, k, prefix);
        }
    }
}

#[test]
fn test_length_is_k_when_enough_matches() {
    assert_eq!(POKEMON.top_k(3, "Char").len(), 3);
    assert_eq!(POKEMON.top_k(6, "B").len(), 6);
}

#[test]
fn test_length_is_match_count_when_k_is_large() {
    let char_all = POKEMON.top_k(20, "Char");
    assert!(char_all.len() <= 20);
    assert_eq!(char_all.len(), 4);

    let b_all = POKEMON.top_k(500, "B");
    let b_count = POKEMON_ENTRIES.iter().filter(|(t, _)| t.starts_with('B')).count();
    assert_eq!(b_all.len(), b_count);
}

#[test]
fn test_every_result_has_prefix() {
    for prefix in ["Ch", "Bo", "Du", "Chatot"] {
        for c in POKEMON.top_k(10, prefix) {
            assert!(c.text.starts_with(prefix), "{} lacks prefix {}", c.text, prefix);
            assert!(c.text.chars().count() >= prefix.chars().count());
        }
    }
}

#[test]
fn test_loaded_entry_count() {
    assert_eq!(POKEMON.len(), POKEMON_ENTRIES.len());
    POKEMON.verify().expect("fixture index is well formed");
}

#[test]
fn test_word_with_space() {
    let results = POKEMON.top_k(2, "Chatot");
    let texts: Vec<&str> = results.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["Chatot", "Chatot Jr"]);
    assert_eq!(POKEMON.weight_of("Mr. Mime"), Some(398));
}
