//! Huffman compression.
//!
//! Compression makes two passes over a rewindable source:
//!
//! 1. Count every 8-bit symbol and build the tree and code table.
//! 2. Write the magic number and the tree header, rewind the source, then
//!    write every symbol's code followed by the `PSEUDO_EOF` code.

use crate::codes::CodeTable;
use crate::constants::{BITS_PER_INT, BITS_PER_WORD, HUFF_TREE, PSEUDO_EOF};
use crate::counts::FrequencyTable;
use crate::header::write_header;
use crate::tree::HuffTree;
use oxihuff_core::error::{HuffError, Result};
use oxihuff_core::{BitReader, BitWriter};
use std::io::{Cursor, Read, Seek, Write};
use tracing::{debug, debug_span, trace};

/// Summary of one compression call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressStats {
    /// Input bytes encoded.
    pub symbols: u64,
    /// Leaves in the tree, including `PSEUDO_EOF`.
    pub leaves: usize,
    /// Bits used by the tree header.
    pub header_bits: u64,
    /// Bits used by the codes, including the `PSEUDO_EOF` code.
    pub body_bits: u64,
    /// All bits written: magic, header and body, without final padding.
    pub bits_written: u64,
}

impl CompressStats {
    /// Size of the output in bytes, padding included.
    pub fn output_bytes(&self) -> u64 {
        self.bits_written.div_ceil(8)
    }
}

/// Huffman compressor.
#[derive(Debug, Default, Clone, Copy)]
pub struct HuffEncoder;

impl HuffEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }

    /// Compress `input` into `output`.
    ///
    /// `input` is rewound between the counting pass and the encoding pass.
    /// `output` is flushed, with the final byte zero-padded, before returning.
    pub fn compress<R, W>(
        &self,
        input: &mut BitReader<R>,
        output: &mut BitWriter<W>,
    ) -> Result<CompressStats>
    where
        R: Read + Seek,
        W: Write,
    {
        let span = debug_span!("compress");
        let _enter = span.enter();

        let counts = FrequencyTable::read_for_counts(input)?;
        let tree = HuffTree::from_counts(&counts)?;
        let codes = CodeTable::from_tree(&tree);
        debug!(
            symbols = counts.input_len(),
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            "built Huffman tree"
        );
        for (symbol, code) in codes.iter() {
            trace!(symbol, count = counts.get(symbol), code = %code, "code");
        }

        let start = output.bits_written();
        output.write_bits(HUFF_TREE, BITS_PER_INT)?;
        write_header(&tree, output)?;
        let header_bits = output.bits_written() - start - BITS_PER_INT as u64;

        input.reset()?;
        let symbols = write_compressed_bits(&codes, input, output)?;
        output.flush()?;

        let bits_written = output.bits_written() - start;
        let stats = CompressStats {
            symbols,
            leaves: tree.leaf_count(),
            header_bits,
            body_bits: bits_written - header_bits - BITS_PER_INT as u64,
            bits_written,
        };
        debug!(
            header_bits = stats.header_bits,
            body_bits = stats.body_bits,
            "compression finished"
        );
        Ok(stats)
    }

    /// Compress an in-memory buffer.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut input = BitReader::new(Cursor::new(data));
        let mut output = BitWriter::new(Vec::with_capacity(data.len() / 2 + 64));
        self.compress(&mut input, &mut output)?;
        output.into_inner()
    }
}

/// Encode every remaining 8-bit symbol of `input`, then the `PSEUDO_EOF`
/// code. Returns the number of symbols encoded.
///
/// Fails with [`HuffError::UncodedSymbol`] if `codes` has no code for a
/// symbol of `input` or for `PSEUDO_EOF`.
pub fn write_compressed_bits<R: Read, W: Write>(
    codes: &CodeTable,
    input: &mut BitReader<R>,
    output: &mut BitWriter<W>,
) -> Result<u64> {
    let mut symbols = 0u64;
    while let Some(symbol) = input.read_bits(BITS_PER_WORD)? {
        let symbol = symbol as u16;
        codes
            .get(symbol)
            .ok_or(HuffError::uncoded_symbol(symbol))?
            .write_to(output)?;
        symbols += 1;
    }
    codes
        .get(PSEUDO_EOF)
        .ok_or(HuffError::uncoded_symbol(PSEUDO_EOF))?
        .write_to(output)?;
    Ok(symbols)
}

/// Compress an in-memory buffer (convenience function).
///
/// # Example
///
/// ```rust
/// use oxihuff_codec::encode_huff;
///
/// let compressed = encode_huff(b"AAB").unwrap();
/// assert_eq!(&compressed[..4], &[0xfa, 0xce, 0x82, 0x01]);
/// ```
pub fn encode_huff(data: &[u8]) -> Result<Vec<u8>> {
    HuffEncoder::new().encode(data)
}
