//! Huffman tree construction.
//!
//! The tree is built greedily: every symbol with a non-zero count becomes a
//! leaf, and the two lightest nodes are repeatedly joined until one root
//! remains.
//!
//! # Tie-break
//!
//! Nodes are ordered by `(weight, sequence)`. Leaves are numbered in ascending
//! symbol order and each merged node takes the next number when it is
//! created, so nodes of equal weight leave the queue in creation order. The
//! first node extracted becomes the left child, the second the right child.

use crate::constants::PSEUDO_EOF;
use crate::counts::FrequencyTable;
use crate::node::HuffNode;
use oxihuff_core::error::{HuffError, Result};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

/// A node waiting in the priority queue.
#[derive(Debug)]
struct Pending {
    sequence: u32,
    node: HuffNode,
}

impl Pending {
    fn key(&self) -> (u64, u32) {
        (self.node.weight(), self.sequence)
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// An owned Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffTree {
    root: HuffNode,
}

impl HuffTree {
    /// Wrap an existing root node.
    pub fn new(root: HuffNode) -> Self {
        Self { root }
    }

    /// Build the tree for a frequency table.
    pub fn from_counts(counts: &FrequencyTable) -> Result<Self> {
        Self::from_weights(counts.nonzero())
    }

    /// Build a tree from `(symbol, weight)` pairs, in the order given.
    ///
    /// Zero weights are skipped. Fails with [`HuffError::EmptyTree`] if no
    /// symbol remains.
    pub fn from_weights<I>(weights: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u16, u64)>,
    {
        let mut sequence = 0u32;
        let mut heap: BinaryHeap<Reverse<Pending>> = BinaryHeap::new();

        for (symbol, weight) in weights {
            if weight == 0 {
                continue;
            }
            heap.push(Reverse(Pending {
                sequence,
                node: HuffNode::leaf(symbol, weight),
            }));
            sequence += 1;
        }

        while heap.len() > 1 {
            let (Some(Reverse(first)), Some(Reverse(second))) = (heap.pop(), heap.pop()) else {
                break;
            };
            heap.push(Reverse(Pending {
                sequence,
                node: HuffNode::merge(first.node, second.node),
            }));
            sequence += 1;
        }

        heap.pop()
            .map(|Reverse(pending)| Self::new(pending.node))
            .ok_or(HuffError::EmptyTree)
    }

    /// The root node.
    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    /// Consume the tree and return its root.
    pub fn into_root(self) -> HuffNode {
        self.root
    }

    /// Total weight (sum of all leaf weights).
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Leaves in pre-order, as `(symbol, depth)` pairs.
    pub fn leaves(&self) -> Vec<(u16, usize)> {
        fn walk(node: &HuffNode, depth: usize, out: &mut Vec<(u16, usize)>) {
            match node {
                HuffNode::Leaf { symbol, .. } => out.push((*symbol, depth)),
                HuffNode::Internal { left, right, .. } => {
                    walk(left, depth + 1, out);
                    walk(right, depth + 1, out);
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.root, 0, &mut out);
        out
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.leaves().iter().map(|&(_, d)| d).max().unwrap_or(0)
    }

    /// Whether the tree has a leaf for [`PSEUDO_EOF`].
    pub fn has_pseudo_eof(&self) -> bool {
        self.leaves().iter().any(|&(s, _)| s == PSEUDO_EOF)
    }

    /// Sum of `weight * depth` over all leaves: the encoded body length in
    /// bits when the weights are the true symbol counts.
    pub fn weighted_path_length(&self) -> u64 {
        fn walk(node: &HuffNode, depth: u64) -> u64 {
            match node {
                HuffNode::Leaf { weight, .. } => weight * depth,
                HuffNode::Internal { left, right, .. } => {
                    walk(left, depth + 1) + walk(right, depth + 1)
                }
            }
        }
        walk(&self.root, 0)
    }

    /// Compare shape and leaf symbols, ignoring weights.
    pub fn same_shape(&self, other: &HuffTree) -> bool {
        fn eq(a: &HuffNode, b: &HuffNode) -> bool {
            match (a, b) {
                (HuffNode::Leaf { symbol: x, .. }, HuffNode::Leaf { symbol: y, .. }) => x == y,
                (
                    HuffNode::Internal {
                        left: al,
                        right: ar,
                        ..
                    },
                    HuffNode::Internal {
                        left: bl,
                        right: br,
                        ..
                    },
                ) => eq(al, bl) && eq(ar, br),
                _ => false,
            }
        }
        eq(&self.root, &other.root)
    }
}

impl fmt::Display for HuffTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node(
            f: &mut fmt::Formatter<'_>,
            node: &HuffNode,
            depth: usize,
            label: &str,
        ) -> fmt::Result {
            let indent = "  ".repeat(depth);
            match node {
                HuffNode::Leaf { symbol, weight } if *symbol == PSEUDO_EOF => {
                    writeln!(f, "{indent}{label}-> Leaf: EOF [weight: {weight}]")
                }
                HuffNode::Leaf { symbol, weight } => {
                    writeln!(f, "{indent}{label}-> Leaf: {symbol:#04x} [weight: {weight}]")
                }
                HuffNode::Internal {
                    weight,
                    left,
                    right,
                } => {
                    writeln!(f, "{indent}{label}-> Internal [weight: {weight}]")?;
                    write_node(f, left, depth + 1, "0")?;
                    write_node(f, right, depth + 1, "1")
                }
            }
        }
        write_node(f, &self.root, 0, "root")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aab_tree_shape() {
        let tree = HuffTree::from_counts(&FrequencyTable::from_bytes(b"AAB")).unwrap();

        // 'B' and EOF (both weight 1) merge first, then 'A' (weight 2, older)
        // is extracted before the merged node (weight 2, newer).
        let expected = HuffNode::merge(
            HuffNode::leaf(65, 2),
            HuffNode::merge(HuffNode::leaf(66, 1), HuffNode::leaf(PSEUDO_EOF, 1)),
        );
        assert_eq!(tree.root(), &expected);
        assert_eq!(tree.weight(), 4);
        assert_eq!(tree.leaves(), vec![(65, 1), (66, 2), (PSEUDO_EOF, 2)]);
    }

    #[test]
    fn test_empty_input_is_single_leaf() {
        let tree = HuffTree::from_counts(&FrequencyTable::from_bytes(b"")).unwrap();
        assert_eq!(tree.root(), &HuffNode::leaf(PSEUDO_EOF, 1));
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.depth(), 0);
        assert!(tree.has_pseudo_eof());
    }

    #[test]
    fn test_single_symbol_has_two_leaves() {
        let data = vec![b'X'; 1000];
        let tree = HuffTree::from_counts(&FrequencyTable::from_bytes(&data)).unwrap();
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.weight(), 1001);
        // EOF (weight 1) is lighter and is extracted first
        assert_eq!(tree.leaves(), vec![(PSEUDO_EOF, 1), (b'X' as u16, 1)]);
    }

    #[test]
    fn test_no_symbols_fails() {
        assert!(matches!(
            HuffTree::from_weights(Vec::new()),
            Err(HuffError::EmptyTree)
        ));
        assert!(matches!(
            HuffTree::from_weights(vec![(1, 0), (2, 0)]),
            Err(HuffError::EmptyTree)
        ));
    }

    #[test]
    fn test_equal_weights_follow_creation_order() {
        let tree = HuffTree::from_weights(vec![(0, 1), (1, 1), (2, 1), (3, 1)]).unwrap();
        // (0,1) then (2,3), then the two pairs in creation order
        let expected = HuffNode::merge(
            HuffNode::merge(HuffNode::leaf(0, 1), HuffNode::leaf(1, 1)),
            HuffNode::merge(HuffNode::leaf(2, 1), HuffNode::leaf(3, 1)),
        );
        assert_eq!(tree.root(), &expected);
    }

    #[test]
    fn test_root_weight_is_sum() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let counts = FrequencyTable::from_bytes(data);
        let tree = HuffTree::from_counts(&counts).unwrap();
        assert_eq!(tree.weight(), data.len() as u64 + 1);
        assert_eq!(tree.leaf_count(), counts.distinct());
    }

    #[test]
    fn test_weighted_path_length() {
        let tree = HuffTree::from_counts(&FrequencyTable::from_bytes(b"AAB")).unwrap();
        // A: 2*1, B: 1*2, EOF: 1*2
        assert_eq!(tree.weighted_path_length(), 6);
    }

    #[test]
    fn test_same_shape_ignores_weights() {
        let a = HuffTree::new(HuffNode::merge(
            HuffNode::leaf(1, 10),
            HuffNode::leaf(2, 20),
        ));
        let b = HuffTree::new(HuffNode::merge(HuffNode::leaf(1, 1), HuffNode::leaf(2, 1)));
        let c = HuffTree::new(HuffNode::merge(HuffNode::leaf(2, 1), HuffNode::leaf(1, 1)));
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
    }

    #[test]
    fn test_display() {
        let tree = HuffTree::from_counts(&FrequencyTable::from_bytes(b"AAB")).unwrap();
        let text = tree.to_string();
        assert!(text.starts_with("root-> Internal [weight: 4]"));
        assert!(text.contains("Leaf: 0x41 [weight: 2]"));
        assert!(text.contains("Leaf: EOF [weight: 1]"));
    }
}
