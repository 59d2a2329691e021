//! Code table derivation.
//!
//! A symbol's code is its path from the root to its leaf: `0` for a step to
//! the left child, `1` for a step to the right child. Paths can be up to 256
//! bits long, so codes are kept as bit sequences rather than integers.

use crate::constants::SYMBOL_COUNT;
use crate::node::HuffNode;
use crate::tree::HuffTree;
use oxihuff_core::BitWriter;
use oxihuff_core::bitstream::MAX_BITS;
use oxihuff_core::error::Result;
use std::fmt;
use std::io::Write;

/// The bit path of one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// Create a code from its bits, first step first.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// The bits of this code, first step first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Code length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the code is empty (only for a tree whose root is a leaf).
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether `self` is a prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// Write the code MSB-first, packing up to 32 bits per call.
    ///
    /// Leading zeros are preserved; an empty code writes nothing.
    pub fn write_to<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        for chunk in self.bits.chunks(MAX_BITS as usize) {
            let value = chunk
                .iter()
                .fold(0u32, |acc, &bit| (acc << 1) | bit as u32);
            writer.write_bits(value, chunk.len() as u8)?;
        }
        Ok(())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Codes for every symbol that has a leaf in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<Code>>,
}

impl CodeTable {
    /// Derive the code table of a tree.
    pub fn from_tree(tree: &HuffTree) -> Self {
        fn walk(node: &HuffNode, path: &mut Vec<bool>, codes: &mut [Option<Code>]) {
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    if let Some(slot) = codes.get_mut(*symbol as usize) {
                        *slot = Some(Code::from_bits(path.clone()));
                    }
                }
                HuffNode::Internal { left, right, .. } => {
                    path.push(false);
                    walk(left, path, codes);
                    path.pop();

                    path.push(true);
                    walk(right, path, codes);
                    path.pop();
                }
            }
        }

        let mut codes = vec![None; SYMBOL_COUNT];
        walk(tree.root(), &mut Vec::new(), &mut codes);
        Self { codes }
    }

    /// Code for `symbol`, if it has a leaf.
    pub fn get(&self, symbol: u16) -> Option<&Code> {
        self.codes.get(symbol as usize).and_then(Option::as_ref)
    }

    /// Populated entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|c| (symbol as u16, c)))
    }

    /// Number of populated entries.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
