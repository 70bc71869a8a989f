//! The bound-guided search touches far fewer nodes than the matching subtree.

use super::common::build_index_owned;
use autotrie::Weight;

fn skewed_dictionary() -> Vec<(String, Weight)> {
    let mut entries = Vec::new();
    for i in 0..2_000 {
        entries.push((format!("tail{:05}", i), (i % 97) as Weight));
    }
    entries.push(("tailhead".to_string(), 10_000));
    entries.push(("tailmost".to_string(), 9_000));
    entries
}

#[test]
fn test_top_two_expands_only_heavy_paths() {
    let index = build_index_owned(&skewed_dictionary());
    let subtree_nodes = index.locate_subtree("tail").unwrap().node_count();

    let (results, stats) = index.top_k_with_stats(2, "tail");
    let texts: Vec<&str> = results.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["tailhead", "tailmost"]);
    assert!(
        stats.expanded * 20 < subtree_nodes,
        "expanded {} of {} nodes",
        stats.expanded,
        subtree_nodes
    );
}

#[test]
fn test_pruning_counts_skipped_children() {
    let index = build_index_owned(&skewed_dictionary());
    let (_, stats) = index.top_k_with_stats(2, "tail");
    assert!(stats.pruned > 0 || stats.expanded < 20);
}

#[test]
fn test_full_scan_when_k_exceeds_matches() {
    let index = build_index_owned(&skewed_dictionary());
    let total = index.len();
    let (results, stats) = index.top_k_with_stats(total + 10, "tail");
    assert_eq!(results.len(), total);
    assert_eq!(stats.expanded, index.locate_subtree("tail").unwrap().node_count());
}
