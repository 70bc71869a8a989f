//! Ordering of results.

use super::common::{build_index, pairs, POKEMON};
use autotrie::PrefixIndex;

#[test]
fn test_results_sorted_descending() {
    for prefix in ["Char", "Bo", "", "D"] {
        let results = POKEMON.top_k(5, prefix);
        assert!(
            results.windows(2).all(|w| w[0].weight >= w[1].weight),
            "unsorted results for {:?}",
            prefix
        );
    }
}

#[test]
fn test_heavier_descendant_before_lighter_ancestor() {
    let index = build_index(&[
        ("big", 5),
        ("biggest", 10),
        ("bigO", 20),
        ("don", 3),
        ("donald", 4),
    ]);
    assert_eq!(
        pairs(&index.top_k(3, "big")),
        vec![("bigO", 20), ("biggest", 10), ("big", 5)]
    );
    assert_eq!(pairs(&index.top_k(2, "don")), vec![("donald", 4), ("don", 3)]);
}

#[test]
fn test_lighter_descendant_after_heavier_ancestor() {
    let index = build_index(&[("hill", 30), ("hillary", 20), ("hills", 25)]);
    assert_eq!(
        pairs(&index.top_k(3, "hil")),
        vec![("hill", 30), ("hills", 25), ("hillary", 20)]
    );
}

#[test]
fn test_reinsert_keeps_larger_weight() {
    let mut index = PrefixIndex::new();
    index.insert(10, "pikachu");
    index.insert(2, "pikachu");
    assert_eq!(pairs(&index.top_k(3, "pika")), vec![("pikachu", 10)]);

    index.insert(50, "pikachu");
    assert_eq!(pairs(&index.top_k(3, "pika")), vec![("pikachu", 50)]);
    assert_eq!(index.len(), 1);
}

#[test]
fn test_negative_weights_ordered() {
    let index = build_index(&[("frost", -1), ("freeze", -30), ("frozen", -4), ("fry", 0)]);
    assert_eq!(
        pairs(&index.top_k(4, "fr")),
        vec![("fry", 0), ("frost", -1), ("frozen", -4), ("freeze", -30)]
    );
}

#[test]
fn test_equal_weights_are_deterministic() {
    let entries = [("ab", 5), ("aa", 5), ("ac", 5), ("ad", 1)];
    let first = build_index(&entries).top_k(2, "a");
    for _ in 0..5 {
        assert_eq!(build_index(&entries).top_k(2, "a"), first);
    }
    assert!(first.iter().all(|c| c.weight == 5));
}
