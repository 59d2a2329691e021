//! Huffman decompression.
//!
//! The decoder checks the magic number, rebuilds the tree from the header and
//! then walks the tree one bit at a time. Each leaf reached emits its byte and
//! restarts the walk at the root, until the `PSEUDO_EOF` leaf is reached.

use crate::constants::{BITS_PER_INT, BITS_PER_WORD, HUFF_TREE, PSEUDO_EOF};
use crate::header::read_header;
use crate::node::HuffNode;
use crate::tree::HuffTree;
use oxihuff_core::error::{HuffError, Result};
use oxihuff_core::{BitReader, BitWriter};
use std::io::{Cursor, Read, Write};
use tracing::{debug, debug_span};

/// Summary of one decompression call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecompressStats {
    /// Bits consumed: magic, header and body up to the end-of-stream code.
    pub bits_read: u64,
    /// Bytes written to the output.
    pub bytes_written: u64,
}

/// Huffman decompressor.
#[derive(Debug, Default, Clone, Copy)]
pub struct HuffDecoder;

impl HuffDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decompress `input` into `output`.
    ///
    /// Fails with [`HuffError::BadMagic`] before reading the header if the
    /// stream does not start with the expected magic number. Output written
    /// before a failure is not rolled back.
    pub fn decompress<R, W>(
        &self,
        input: &mut BitReader<R>,
        output: &mut BitWriter<W>,
    ) -> Result<DecompressStats>
    where
        R: Read,
        W: Write,
    {
        let span = debug_span!("decompress");
        let _enter = span.enter();

        let start = input.bits_read();
        check_magic(input)?;

        let tree = read_header(input)?;
        debug!(
            leaves = tree.leaf_count(),
            header_bits = input.bits_read() - start - BITS_PER_INT as u64,
            "read tree header"
        );

        let bytes_written = read_compressed_bits(&tree, input, output)?;
        output.flush()?;

        let stats = DecompressStats {
            bits_read: input.bits_read() - start,
            bytes_written,
        };
        debug!(
            bits_read = stats.bits_read,
            bytes_written = stats.bytes_written,
            "decompression finished"
        );
        Ok(stats)
    }

    /// Decompress an in-memory buffer.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut input = BitReader::new(Cursor::new(data));
        let mut output = BitWriter::new(Vec::with_capacity(data.len() * 2));
        self.decompress(&mut input, &mut output)?;
        output.into_inner()
    }
}

/// Read the leading 32 bits and compare them with [`HUFF_TREE`].
///
/// A stream too short to hold the magic number is rejected the same way.
pub fn check_magic<R: Read>(input: &mut BitReader<R>) -> Result<()> {
    match input.read_bits(BITS_PER_INT)? {
        Some(HUFF_TREE) => Ok(()),
        Some(found) => Err(HuffError::bad_magic(HUFF_TREE, found)),
        None => Err(HuffError::bad_magic(HUFF_TREE, read_partial(input)?)),
    }
}

/// Collect whatever whole bytes remain (fewer than four) as a big-endian
/// value, for reporting a short magic number.
fn read_partial<R: Read>(input: &mut BitReader<R>) -> Result<u32> {
    let mut value = 0u32;
    while let Some(byte) = input.read_bits(BITS_PER_WORD)? {
        value = (value << 8) | byte;
    }
    Ok(value)
}

/// Walk the tree bit by bit, writing one byte per leaf, until the
/// `PSEUDO_EOF` leaf is reached. Returns the number of bytes written.
///
/// Reaching end of input first fails with [`HuffError::MissingTerminator`].
pub fn read_compressed_bits<R: Read, W: Write>(
    tree: &HuffTree,
    input: &mut BitReader<R>,
    output: &mut BitWriter<W>,
) -> Result<u64> {
    let root = tree.root();

    // A root leaf has an empty code: nothing is read for it.
    if let Some(symbol) = root.symbol() {
        if symbol == PSEUDO_EOF {
            return Ok(0);
        }
        return Err(HuffError::missing_terminator(input.bits_read()));
    }

    let mut written = 0u64;
    let mut current = root;
    loop {
        let bit = input
            .read_bit()?
            .ok_or_else(|| HuffError::missing_terminator(input.bits_read()))?;

        current = match current.child(bit) {
            Some(next) => next,
            None => return Err(HuffError::missing_terminator(input.bits_read())),
        };

        match current {
            HuffNode::Leaf { symbol, .. } if *symbol == PSEUDO_EOF => return Ok(written),
            HuffNode::Leaf { symbol, .. } => {
                output.write_bits(*symbol as u32, BITS_PER_WORD)?;
                written += 1;
                current = root;
            }
            HuffNode::Internal { .. } => {}
        }
    }
}

/// Decompress an in-memory buffer (convenience function).
///
/// # Example
///
/// ```rust
/// use oxihuff_codec::{decode_huff, encode_huff};
///
/// let compressed = encode_huff(b"AAB").unwrap();
/// assert_eq!(decode_huff(&compressed).unwrap(), b"AAB");
/// ```
pub fn decode_huff(data: &[u8]) -> Result<Vec<u8>> {
    HuffDecoder::new().decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_huff;

    #[test]
    fn test_decode_aab() {
        let compressed = encode_huff(b"AAB").unwrap();
        let mut input = BitReader::new(Cursor::new(compressed.clone()));
        let mut output = BitWriter::new(Vec::new());
        let stats = HuffDecoder::new()
            .decompress(&mut input, &mut output)
            .unwrap();

        assert_eq!(output.into_inner().unwrap(), b"AAB");
        assert_eq!(stats.bytes_written, 3);
        // 32 magic + 32 header + 6 body
        assert_eq!(stats.bits_read, 70);
    }

    #[test]
    fn test_decode_empty() {
        let compressed = encode_huff(b"").unwrap();
        assert_eq!(decode_huff(&compressed).unwrap(), b"");
    }

    #[test]
    fn test_bad_magic() {
        let mut compressed = encode_huff(b"hello").unwrap();
        compressed[3] = 0x00;
        match decode_huff(&compressed) {
            Err(HuffError::BadMagic { expected, found }) => {
                assert_eq!(expected, HUFF_TREE);
                assert_eq!(found, 0xface_8200);
            }
            other => panic!("expected BadMagic, got {other:?}"),
        }
    }

    #[test]
    fn test_short_magic() {
        assert!(matches!(
            decode_huff(&[0xfa, 0xce]),
            Err(HuffError::BadMagic { found: 0xface, .. })
        ));
        assert!(matches!(
            decode_huff(&[]),
            Err(HuffError::BadMagic { found: 0, .. })
        ));
    }

    #[test]
    fn test_missing_terminator() {
        // Magic + header for "AAB", then a body that never reaches EOF
        let compressed = encode_huff(b"AAB").unwrap();
        let mut truncated = compressed[..8].to_vec();
        truncated.push(0b0000_0000);
        assert!(matches!(
            decode_huff(&truncated),
            Err(HuffError::MissingTerminator { .. })
        ));
    }

    #[test]
    fn test_root_leaf_without_eof() {
        // Header is a single leaf for 'A': no way to terminate
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(HUFF_TREE, BITS_PER_INT).unwrap();
        writer.write_bit(true).unwrap();
        writer.write_bits(65, 9).unwrap();
        let data = writer.into_inner().unwrap();

        assert!(matches!(
            decode_huff(&data),
            Err(HuffError::MissingTerminator { .. })
        ));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut compressed = encode_huff(b"trailing").unwrap();
        compressed.extend_from_slice(&[0xFF; 4]);
        assert_eq!(decode_huff(&compressed).unwrap(), b"trailing");
    }
}
