//! Tree header serialization.
//!
//! The tree is written in pre-order:
//!
//! - Internal node: a `0` bit, then the left subtree, then the right subtree.
//! - Leaf: a `1` bit, then the symbol in a 9-bit field.
//!
//! No node count is stored; the reader knows the tree is complete when every
//! internal node has both children. Weights are not stored, so leaves read
//! back from a header carry weight 1.

use crate::constants::{LEAF_VALUE_BITS, MAX_TREE_DEPTH, PSEUDO_EOF};
use crate::node::HuffNode;
use crate::tree::HuffTree;
use oxihuff_core::error::{HuffError, Result};
use oxihuff_core::{BitReader, BitWriter};
use std::io::{Read, Write};

/// Write the tree header.
pub fn write_header<W: Write>(tree: &HuffTree, writer: &mut BitWriter<W>) -> Result<()> {
    write_node(tree.root(), writer)
}

fn write_node<W: Write>(node: &HuffNode, writer: &mut BitWriter<W>) -> Result<()> {
    match node {
        HuffNode::Internal { left, right, .. } => {
            writer.write_bit(false)?;
            write_node(left, writer)?;
            write_node(right, writer)
        }
        HuffNode::Leaf { symbol, .. } => {
            writer.write_bit(true)?;
            writer.write_bits(*symbol as u32, LEAF_VALUE_BITS)
        }
    }
}

/// Number of bits [`write_header`] emits for `tree`.
pub fn header_bits(tree: &HuffTree) -> u64 {
    let leaves = tree.leaf_count() as u64;
    // A full binary tree has leaves - 1 internal nodes
    (leaves - 1) + leaves * (1 + LEAF_VALUE_BITS as u64)
}

/// Read a tree header.
///
/// Running out of input before the tree is complete is always an error.
pub fn read_header<R: Read>(reader: &mut BitReader<R>) -> Result<HuffTree> {
    read_node(reader, 0).map(HuffTree::new)
}

fn read_node<R: Read>(reader: &mut BitReader<R>, depth: usize) -> Result<HuffNode> {
    let is_leaf = reader
        .read_bit()?
        .ok_or_else(|| HuffError::truncated_header(reader.bits_read()))?;

    if is_leaf {
        let value = reader
            .read_bits(LEAF_VALUE_BITS)?
            .ok_or_else(|| HuffError::truncated_header(reader.bits_read()))?;
        if value > PSEUDO_EOF as u32 {
            return Err(HuffError::invalid_symbol(value, reader.bits_read()));
        }
        return Ok(HuffNode::leaf(value as u16, 1));
    }

    if depth >= MAX_TREE_DEPTH {
        return Err(HuffError::tree_too_deep(MAX_TREE_DEPTH));
    }
    let left = read_node(reader, depth + 1)?;
    let right = read_node(reader, depth + 1)?;
    Ok(HuffNode::merge(left, right))
}
