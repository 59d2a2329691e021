//! Symbol frequency counting (first compression pass).

use crate::constants::{BITS_PER_WORD, PSEUDO_EOF, SYMBOL_COUNT};
use oxihuff_core::BitReader;
use oxihuff_core::error::Result;
use std::io::Read;

/// Occurrence counts for every symbol, including [`PSEUDO_EOF`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl FrequencyTable {
    /// Count the bytes of an in-memory buffer.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; SYMBOL_COUNT];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        counts[PSEUDO_EOF as usize] = 1;
        Self { counts }
    }

    /// Count 8-bit symbols until the reader runs out of input.
    ///
    /// The reader is left at end of input; rewind it before encoding.
    pub fn read_for_counts<R: Read>(reader: &mut BitReader<R>) -> Result<Self> {
        let mut counts = [0u64; SYMBOL_COUNT];
        while let Some(symbol) = reader.read_bits(BITS_PER_WORD)? {
            counts[symbol as usize] += 1;
        }
        counts[PSEUDO_EOF as usize] = 1;
        Ok(Self { counts })
    }

    /// Build a table from explicit counts. `PSEUDO_EOF` is forced to 1.
    pub fn from_counts(mut counts: [u64; SYMBOL_COUNT]) -> Self {
        counts[PSEUDO_EOF as usize] = 1;
        Self { counts }
    }

    /// Count for `symbol` (0 for symbols outside the alphabet).
    pub fn get(&self, symbol: u16) -> u64 {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    /// Symbols with a non-zero count, in ascending symbol order.
    pub fn nonzero(&self) -> impl Iterator<Item = (u16, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u16, count))
    }

    /// Number of symbols that will get a leaf.
    pub fn distinct(&self) -> usize {
        self.nonzero().count()
    }

    /// Number of real input bytes counted (excludes `PSEUDO_EOF`).
    pub fn input_len(&self) -> u64 {
        self.counts[..PSEUDO_EOF as usize].iter().sum()
    }
}
