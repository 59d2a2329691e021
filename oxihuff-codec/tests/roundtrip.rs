//! Round-trip integration tests.

use oxihuff_codec::{
    BitReader, BitWriter, FrequencyTable, HuffDecoder, HuffEncoder, HuffTree, decode_huff,
    encode_huff,
};
use std::io::Cursor;

/// Fixed-seed LCG, same generator as the benches.
fn pseudo_random(size: usize, seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state = seed;
    for _ in 0..size {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((state >> 32) as u8);
    }
    data
}

fn roundtrip(original: &[u8]) {
    let compressed = encode_huff(original).expect("compression failed");
    let decompressed = decode_huff(&compressed).expect("decompression failed");
    assert_eq!(decompressed.len(), original.len());
    assert_eq!(decompressed, original);
}

#[test]
fn test_roundtrip_empty() {
    roundtrip(b"");
}

#[test]
fn test_roundtrip_single_byte() {
    roundtrip(b"A");
    roundtrip(&[0x00]);
    roundtrip(&[0xFF]);
}

#[test]
fn test_roundtrip_aab() {
    let compressed = encode_huff(&[65, 65, 66]).expect("compression failed");
    assert_eq!(decode_huff(&compressed).expect("decompression failed"), vec![65, 65, 66]);
}

#[test]
fn test_roundtrip_text() {
    roundtrip(b"The quick brown fox jumps over the lazy dog. ");
    roundtrip(&b"It was the best of times, it was the worst of times. ".repeat(50));
}

#[test]
fn test_roundtrip_all_byte_values() {
    let original: Vec<u8> = (0..=255).collect();
    roundtrip(&original);

    let mut twice: Vec<u8> = (0..=255).rev().collect();
    twice.extend(0..=255u8);
    roundtrip(&twice);
}

#[test]
fn test_roundtrip_pseudo_random() {
    for (size, seed) in [(1, 1), (7, 2), (1000, 3), (65536, 0x123456789ABCDEF0)] {
        roundtrip(&pseudo_random(size, seed));
    }
}

#[test]
fn test_roundtrip_skewed() {
    // Fibonacci-like counts give the deepest possible trees
    let mut data = Vec::new();
    let (mut a, mut b) = (1usize, 1usize);
    for symbol in 0..20u8 {
        data.extend(std::iter::repeat_n(symbol, a));
        (a, b) = (b, a + b);
    }
    let tree = HuffTree::from_counts(&FrequencyTable::from_bytes(&data)).expect("tree");
    assert!(tree.depth() >= 19);
    roundtrip(&data);
}

#[test]
fn test_single_symbol_repeat_count() {
    for count in [1usize, 2, 8, 9, 1000] {
        let original = vec![b'X'; count];
        let tree = HuffTree::from_counts(&FrequencyTable::from_bytes(&original)).expect("tree");
        assert_eq!(tree.leaf_count(), 2);

        let decompressed = decode_huff(&encode_huff(&original).expect("compress")).expect("decompress");
        assert_eq!(decompressed.len(), count);
        assert!(decompressed.iter().all(|&b| b == b'X'));
    }
}

#[test]
fn test_streaming_roundtrip_with_stats() {
    let original = pseudo_random(4096, 42);

    let mut input = BitReader::new(Cursor::new(original.clone()));
    let mut output = BitWriter::new(Vec::new());
    let cstats = HuffEncoder::new()
        .compress(&mut input, &mut output)
        .expect("compression failed");
    let compressed = output.into_inner().expect("flush failed");
    assert_eq!(compressed.len() as u64, cstats.output_bytes());
    assert_eq!(cstats.symbols, original.len() as u64);

    let mut input = BitReader::new(Cursor::new(compressed));
    let mut output = BitWriter::new(Vec::new());
    let dstats = HuffDecoder::new()
        .decompress(&mut input, &mut output)
        .expect("decompression failed");
    assert_eq!(dstats.bytes_written, original.len() as u64);
    assert_eq!(dstats.bits_read, cstats.bits_written);
    assert_eq!(output.into_inner().expect("flush failed"), original);
}

#[test]
fn test_text_compresses() {
    let original = b"aaaaaaaabbbbccd".repeat(100);
    let compressed = encode_huff(&original).expect("compression failed");
    assert!(
        compressed.len() < original.len() / 3,
        "expected < 1/3 size, got {} of {}",
        compressed.len(),
        original.len()
    );
}
