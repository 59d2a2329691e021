//! Error types for OxiHuff operations.
//!
//! Every failure of a compress or decompress call is fatal for that call.
//! The format errors ([`HuffError::BadMagic`], [`HuffError::TruncatedHeader`],
//! [`HuffError::MissingTerminator`], ...) all mean the input is not a complete
//! stream produced by this format.

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum HuffError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The leading 32-bit value is not the expected magic number.
    #[error("Invalid magic number: expected {expected:#010x}, found {found:#010x}")]
    BadMagic {
        /// Expected magic value.
        expected: u32,
        /// Value actually read.
        found: u32,
    },

    /// Input ended while the tree header was being reconstructed.
    #[error("Truncated tree header at bit position {bit_position}")]
    TruncatedHeader {
        /// Bit position where the input ran out.
        bit_position: u64,
    },

    /// Input ended before the end-of-stream code was decoded.
    #[error("No end-of-stream marker found (input ended at bit position {bit_position})")]
    MissingTerminator {
        /// Bit position where the input ran out.
        bit_position: u64,
    },

    /// A header leaf carries a value outside the symbol space.
    #[error("Invalid leaf symbol {symbol} in tree header at bit position {bit_position}")]
    InvalidSymbol {
        /// The out-of-range value.
        symbol: u32,
        /// Bit position just after the offending field.
        bit_position: u64,
    },

    /// The tree header nests deeper than any valid tree can.
    #[error("Tree header nesting exceeds maximum depth {depth}")]
    TreeTooDeep {
        /// The depth limit that was exceeded.
        depth: usize,
    },

    /// A tree was requested from a symbol set with no members.
    #[error("Cannot build a Huffman tree from zero symbols")]
    EmptyTree,

    /// The encoding pass met a symbol the counting pass did not see, so the
    /// source changed between the two passes.
    #[error("Symbol {symbol} has no code (input changed during compression)")]
    UncodedSymbol {
        /// The symbol without a code.
        symbol: u16,
    },

    /// Invalid bit width passed to the bit reader or writer.
    #[error("Invalid bit width: {0} (must be 1-32)")]
    InvalidBitWidth(u8),
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, HuffError>;

impl HuffError {
    /// Create a bad magic error.
    pub fn bad_magic(expected: u32, found: u32) -> Self {
        Self::BadMagic { expected, found }
    }

    /// Create a truncated header error.
    pub fn truncated_header(bit_position: u64) -> Self {
        Self::TruncatedHeader { bit_position }
    }

    /// Create a missing terminator error.
    pub fn missing_terminator(bit_position: u64) -> Self {
        Self::MissingTerminator { bit_position }
    }

    /// Create an invalid symbol error.
    pub fn invalid_symbol(symbol: u32, bit_position: u64) -> Self {
        Self::InvalidSymbol {
            symbol,
            bit_position,
        }
    }

    /// Create a tree too deep error.
    pub fn tree_too_deep(depth: usize) -> Self {
        Self::TreeTooDeep { depth }
    }

    /// Create an uncoded symbol error.
    pub fn uncoded_symbol(symbol: u16) -> Self {
        Self::UncodedSymbol { symbol }
    }

    /// Whether this error rejects the input as malformed, as opposed to an
    /// I/O failure or API misuse.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::BadMagic { .. }
                | Self::TruncatedHeader { .. }
                | Self::MissingTerminator { .. }
                | Self::InvalidSymbol { .. }
                | Self::TreeTooDeep { .. }
        )
    }
}
