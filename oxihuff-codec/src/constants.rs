//! Format constants for the tree-header Huffman container.

/// Width of one input symbol in bits.
pub const BITS_PER_WORD: u8 = 8;

/// Width of the magic number field in bits.
pub const BITS_PER_INT: u8 = 32;

/// Number of byte symbols.
pub const ALPHABET_SIZE: usize = 1 << BITS_PER_WORD;

/// End-of-stream symbol. Never emitted as an output byte.
pub const PSEUDO_EOF: u16 = ALPHABET_SIZE as u16;

/// Number of distinct symbols, including [`PSEUDO_EOF`].
pub const SYMBOL_COUNT: usize = ALPHABET_SIZE + 1;

/// Width of a leaf value in the tree header (holds 0..=256).
pub const LEAF_VALUE_BITS: u8 = BITS_PER_WORD + 1;

/// Base magic number shared by the format family.
pub const HUFF_NUMBER: u32 = 0xface_8200;

/// Magic number of the tree-header variant.
pub const HUFF_TREE: u32 = HUFF_NUMBER | 1;

/// Deepest internal-node nesting a valid tree can have.
///
/// A tree with at most [`SYMBOL_COUNT`] leaves has depth at most
/// `SYMBOL_COUNT - 1`.
pub const MAX_TREE_DEPTH: usize = SYMBOL_COUNT - 1;
