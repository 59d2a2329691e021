//! Optimality and prefix-code property tests.

use oxihuff_codec::{CodeTable, FrequencyTable, HuffTree};

/// Minimum `sum(weight * depth)` over every full binary tree, found by
/// trying every merge order.
fn brute_force_cost(weights: &[u64]) -> u64 {
    if weights.len() <= 1 {
        return 0;
    }
    let mut best = u64::MAX;
    for i in 0..weights.len() {
        for j in i + 1..weights.len() {
            let merged = weights[i] + weights[j];
            let mut rest: Vec<u64> = weights
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, &w)| w)
                .collect();
            rest.push(merged);
            best = best.min(merged + brute_force_cost(&rest));
        }
    }
    best
}

fn tree_of(weights: &[u64]) -> HuffTree {
    HuffTree::from_weights(weights.iter().enumerate().map(|(s, &w)| (s as u16, w)))
        .expect("non-empty weights")
}

#[test]
fn test_optimal_small_weight_sets() {
    let cases: &[&[u64]] = &[
        &[1],
        &[1, 1],
        &[2, 1, 1],
        &[5, 5, 5, 5],
        &[1, 2, 3, 4, 5],
        &[10, 1, 1, 1, 1, 1],
        &[1, 1, 2, 3, 5, 8],
        &[7, 3, 3, 2, 9, 1],
    ];
    for weights in cases {
        let tree = tree_of(weights);
        assert_eq!(
            tree.weighted_path_length(),
            brute_force_cost(weights),
            "weights {weights:?}"
        );
    }
}

#[test]
fn test_optimal_generated_weight_sets() {
    let mut state: u64 = 0x9E3779B97F4A7C15;
    for _ in 0..40 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let len = 2 + (state >> 60) as usize % 5;
        let weights: Vec<u64> = (0..len)
            .map(|i| 1 + ((state >> (8 * i)) & 0x1F))
            .collect();
        assert_eq!(
            tree_of(&weights).weighted_path_length(),
            brute_force_cost(&weights),
            "weights {weights:?}"
        );
    }
}

#[test]
fn test_codes_prefix_free() {
    let data = b"She sells sea shells by the sea shore; the shells she sells are sea shells.";
    let tree = HuffTree::from_counts(&FrequencyTable::from_bytes(data)).expect("tree");
    let table = CodeTable::from_tree(&tree);
    assert_eq!(table.len(), tree.leaf_count());

    let codes: Vec<_> = table.iter().collect();
    for (sa, a) in &codes {
        for (sb, b) in &codes {
            if sa != sb {
                assert!(!a.is_prefix_of(b), "code of {sa} is a prefix of code of {sb}");
            }
        }
    }
}

#[test]
fn test_more_frequent_symbols_get_shorter_codes() {
    let tree = HuffTree::from_counts(&FrequencyTable::from_bytes(&[65, 65, 66])).expect("tree");
    let table = CodeTable::from_tree(&tree);
    let a = table.get(65).expect("code for 65");
    let b = table.get(66).expect("code for 66");
    assert!(a.len() <= b.len());
}
