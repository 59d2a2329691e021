//! # OxiHuff Codec
//!
//! Pure Rust implementation of tree-header Huffman compression.
//!
//! A compressed stream is self-describing:
//!
//! ```text
//! ┌──────────────┬──────────────────────────┬───────────────────────────┐
//! │ magic (32b)  │ tree header (pre-order)  │ codes ... PSEUDO_EOF code │
//! │ 0xface8201   │ 0 = internal, 1 + 9 bits │ zero-padded to a byte     │
//! └──────────────┴──────────────────────────┴───────────────────────────┘
//! ```
//!
//! Compression counts the input, builds a Huffman tree (with `PSEUDO_EOF`
//! always present at count 1), writes the tree, rewinds the input and writes
//! one code per byte. Decompression rebuilds the tree from the header and
//! walks it bit by bit until it reaches the `PSEUDO_EOF` leaf, so no length
//! field is needed.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_codec::{decode_huff, encode_huff};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = encode_huff(original).unwrap();
//! let decompressed = decode_huff(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Streaming
//!
//! [`HuffEncoder::compress`] and [`HuffDecoder::decompress`] work on any
//! [`BitReader`]/[`BitWriter`] pair. Compression needs a rewindable source.
//!
//! ```rust
//! use oxihuff_codec::{HuffDecoder, HuffEncoder};
//! use oxihuff_core::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut input = BitReader::new(Cursor::new(b"streaming".to_vec()));
//! let mut output = BitWriter::new(Vec::new());
//! let stats = HuffEncoder::new().compress(&mut input, &mut output).unwrap();
//! assert_eq!(stats.symbols, 9);
//!
//! let compressed = output.into_inner().unwrap();
//! let mut input = BitReader::new(Cursor::new(compressed));
//! let mut output = BitWriter::new(Vec::new());
//! HuffDecoder::new().decompress(&mut input, &mut output).unwrap();
//! assert_eq!(output.into_inner().unwrap(), b"streaming");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod codes;
pub mod constants;
pub mod counts;
pub mod decode;
pub mod encode;
pub mod header;
pub mod node;
pub mod tree;

// Re-exports
pub use codes::{Code, CodeTable};
pub use counts::FrequencyTable;
pub use decode::{DecompressStats, HuffDecoder, decode_huff};
pub use encode::{CompressStats, HuffEncoder, encode_huff};
pub use header::{read_header, write_header};
pub use node::HuffNode;
pub use oxihuff_core::{BitReader, BitWriter, HuffError, Result};
pub use tree::HuffTree;
