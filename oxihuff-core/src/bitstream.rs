//! Bit-level I/O operations for the Huffman codec.
//!
//! This module provides `BitReader` and `BitWriter` for reading and writing
//! data at the bit level. Codes, tree headers and the magic number are all
//! written through these types.
//!
//! # Bit Ordering
//!
//! Unlike DEFLATE and LZH, the OxiHuff container is MSB-first: the first bit
//! of the stream is the most significant bit of the first byte, and a
//! multi-bit field is written starting with its most significant bit.
//!
//! # End of Input
//!
//! `BitReader::read_bits` returns `Ok(None)` when fewer than the requested
//! number of bits remain. Running out of input is a normal event for the
//! frequency counter and an error only in context (truncated header, missing
//! end-of-stream marker), so it is reported as a sentinel rather than an
//! error.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! // Writing bits
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0b101, 3).unwrap();  // Write 3 bits
//! writer.write_bits(0b1100, 4).unwrap(); // Write 4 bits
//! let output = writer.into_inner().unwrap();
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! // Reading bits
//! let mut reader = BitReader::new(Cursor::new(output));
//! assert_eq!(reader.read_bits(3).unwrap(), Some(0b101));
//! assert_eq!(reader.read_bits(4).unwrap(), Some(0b1100));
//! assert_eq!(reader.read_bits(8).unwrap(), None);
//! ```

use crate::error::{HuffError, Result};
use std::io::{self, Read, Seek, SeekFrom, Write};

/// Largest field that can be read or written in one call.
pub const MAX_BITS: u8 = 32;

#[inline]
fn check_width(count: u8) -> Result<()> {
    if count == 0 || count > MAX_BITS {
        return Err(HuffError::InvalidBitWidth(count));
    }
    Ok(())
}

#[inline]
fn low_mask(count: u8) -> u64 {
    (1u64 << count) - 1
}

/// An MSB-first bit reader that wraps any `Read` implementation.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer; valid bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume this `BitReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Pull bytes until at least `count` bits are buffered.
    ///
    /// Returns `false` if the underlying reader hit end of input first.
    fn fill_buffer(&mut self, count: u8) -> Result<bool> {
        while self.bits_in_buffer < count {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(false),
                Ok(_) => {
                    self.buffer = (self.buffer << 8) | byte[0] as u64;
                    self.bits_in_buffer += 8;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(true)
    }

    /// Read `count` bits (1-32) as an unsigned value, MSB-first.
    ///
    /// Returns `Ok(None)` if fewer than `count` bits remain. Bits that were
    /// available are left in place.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> Result<Option<u32>> {
        check_width(count)?;

        if !self.fill_buffer(count)? {
            return Ok(None);
        }

        let shift = self.bits_in_buffer - count;
        let value = (self.buffer >> shift) & low_mask(count);

        self.bits_in_buffer -= count;
        self.buffer &= low_mask(self.bits_in_buffer);
        self.total_bits_read += count as u64;

        Ok(Some(value as u32))
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<Option<bool>> {
        Ok(self.read_bits(1)?.map(|bit| bit != 0))
    }
}

impl<R: Read + Seek> BitReader<R> {
    /// Reposition the source at its start, discarding buffered bits.
    ///
    /// This is what allows the two-pass compressor to count symbols and then
    /// encode them from the same source.
    pub fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.buffer = 0;
        self.bits_in_buffer = 0;
        self.total_bits_read = 0;
        Ok(())
    }
}

/// An MSB-first bit writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits in an internal buffer and writes complete
/// bytes to the underlying writer. Call `flush()` or `into_inner()` when done
/// to pad and write any remaining partial byte.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer; pending bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written, excluding padding.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume this `BitWriter` and return the underlying writer.
    ///
    /// This flushes any remaining bits before returning the writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }

    /// Get the total number of bits written so far (padding excluded).
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write complete bytes from the buffer to the writer.
    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.writer.write_all(&[byte])?;
            self.bits_in_buffer -= 8;
        }
        self.buffer &= low_mask(self.bits_in_buffer);
        Ok(())
    }

    /// Write the low `count` bits (1-32) of `value`, MSB-first.
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        check_width(count)?;

        // At most 7 bits are pending here, so 39 bits fit.
        self.buffer = (self.buffer << count) | (value as u64 & low_mask(count));
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.flush_bytes()
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(bit as u32, 1)
    }

    /// Pad any partial byte with zero bits and flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        if self.bits_in_buffer > 0 {
            let byte = (self.buffer << (8 - self.bits_in_buffer)) as u8;
            self.writer.write_all(&[byte])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.writer.flush()?;
        Ok(())
    }
}
