//! Cached bounds equal a brute-force recomputation after any insert sequence.

use super::common::build_index_owned;
use super::dictionary_strategy;
use autotrie::testing::dedup_max;
use autotrie::{IndexNode, Weight};
use proptest::prelude::*;

/// Check every node's bound against the entries sharing its path.
fn assert_bounds(node: &IndexNode, path: &mut String, entries: &[(String, Weight)]) {
    let expected = entries
        .iter()
        .filter(|(t, _)| t.starts_with(path.as_str()))
        .map(|(_, w)| *w)
        .max();
    assert_eq!(node.bound_weight(), expected, "bound at {:?}", path);

    let terminal = entries.iter().find(|(t, _)| t.as_str() == path.as_str()).map(|(_, w)| *w);
    assert_eq!(node.terminal_weight(), terminal, "terminal at {:?}", path);

    for (ch, child) in node.children() {
        path.push(ch);
        assert_bounds(child, path, entries);
        path.pop();
    }
}

proptest! {
    #[test]
    fn prop_bounds_match_recomputation(entries in dictionary_strategy()) {
        let index = build_index_owned(&entries);
        let deduped = dedup_max(&entries);
        assert_bounds(index.root(), &mut String::new(), &deduped);
        prop_assert!(index.verify().is_ok());
    }

    #[test]
    fn prop_root_bound_is_global_max(entries in dictionary_strategy()) {
        let index = build_index_owned(&entries);
        prop_assert_eq!(index.max_weight(), entries.iter().map(|(_, w)| *w).max());
    }

    #[test]
    fn prop_root_children_are_distinct_first_chars(entries in dictionary_strategy()) {
        let index = build_index_owned(&entries);
        let mut firsts: Vec<char> = entries.iter().filter_map(|(t, _)| t.chars().next()).collect();
        firsts.sort_unstable();
        firsts.dedup();
        prop_assert_eq!(index.root().child_count(), firsts.len());
    }
}
