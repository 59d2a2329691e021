//! Huffman tree nodes.

/// One node of a Huffman tree.
///
/// Internal nodes own both children, so every tree is a full binary tree.
/// Nodes are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    /// A symbol leaf.
    Leaf {
        /// Symbol value, 0..=256.
        symbol: u16,
        /// Symbol frequency (1 for trees read back from a header).
        weight: u64,
    },
    /// An internal node.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Subtree reached by a `0` bit.
        left: Box<HuffNode>,
        /// Subtree reached by a `1` bit.
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    /// Create a leaf.
    pub fn leaf(symbol: u16, weight: u64) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Join two subtrees under a new internal node.
    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Aggregate weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } | HuffNode::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<u16> {
        match self {
            HuffNode::Leaf { symbol, .. } => Some(*symbol),
            HuffNode::Internal { .. } => None,
        }
    }

    /// The child selected by `bit` (`false` = left, `true` = right).
    ///
    /// Leaves have no children.
    pub fn child(&self, bit: bool) -> Option<&HuffNode> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sums_weights() {
        let node = HuffNode::merge(HuffNode::leaf(66, 1), HuffNode::leaf(256, 1));
        assert_eq!(node.weight(), 2);
        assert!(!node.is_leaf());
        assert_eq!(node.symbol(), None);
        assert_eq!(node.child(false).and_then(HuffNode::symbol), Some(66));
        assert_eq!(node.child(true).and_then(HuffNode::symbol), Some(256));
    }

    #[test]
    fn test_leaf_has_no_children() {
        let leaf = HuffNode::leaf(b'A' as u16, 5);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.symbol(), Some(65));
        assert_eq!(leaf.weight(), 5);
        assert!(leaf.child(false).is_none());
        assert!(leaf.child(true).is_none());
    }
}
