//! Bit-level I/O with the wire's packing discipline.
//!
//! Each Huffman code is emitted most-significant-bit first, but bytes
//! fill from the least significant bit upward: the first bit written
//! lands in bit 0 of the first byte, the ninth in bit 0 of the second.
//! The reader walks the same order, one bit at a time.
//!
//! # Padding Rules
//! - `BitWriter`: a final partial byte is written with its upper bits zero
//! - `BitReader`: cannot tell padding from data; the caller tracks the
//!   exact bit count from the stream header and stops reading there
//!
//! # Example
//! ```
//! use huffio::bitio::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3).unwrap(); // bits 1, 0, 1 -> byte 0b0000_0101
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0b0000_0101]);
//!
//! let mut reader = BitReader::new(&bytes);
//! assert!(reader.read_bit().unwrap());
//! assert!(!reader.read_bit().unwrap());
//! assert!(reader.read_bit().unwrap());
//! ```

use crate::error::{BitIoError, Result};

/// Packs bits into bytes, filling each byte LSB-first.
///
/// # Invariants
/// - `used` is always < 8; a full accumulator is flushed immediately
#[derive(Debug, Clone)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for the current partial byte
    acc: u8,
    /// Number of bits in the accumulator (0-7)
    used: u8,
}

impl BitWriter {
    /// Create a new BitWriter with empty output.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            acc: 0,
            used: 0,
        }
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.acc |= 1 << self.used;
        }
        self.used += 1;
        if self.used == 8 {
            self.bytes.push(self.acc);
            self.acc = 0;
            self.used = 0;
        }
    }

    /// Append the low `count` bits of `value`, most significant first.
    ///
    /// Writing `value = 0b101, count = 3` appends the bits 1, 0, 1 in
    /// that order. This is the order a Huffman code is spelled.
    ///
    /// # Errors
    /// `BitIoError::InvalidBitCount` if count > 64.
    pub fn write_bits(&mut self, value: u64, count: u8) -> Result<()> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count as usize).into());
        }
        for at in (0..count).rev() {
            self.write_bit((value >> at) & 1 == 1);
        }
        Ok(())
    }

    /// Total number of bits written so far (including the partial byte).
    pub fn bit_len(&self) -> u64 {
        self.bytes.len() as u64 * 8 + self.used as u64
    }

    /// Finish writing and return the output bytes.
    ///
    /// A nonempty accumulator is flushed as a final partial byte with
    /// its unused upper bits zero. Consumes the writer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.used > 0 {
            self.bytes.push(self.acc);
        }
        self.bytes
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks a byte buffer one bit at a time, LSB-first within each byte.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Bits consumed so far (0 = bit 0 of the first byte)
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a new BitReader over the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Read the next bit.
    ///
    /// # Errors
    /// `BitIoError::UnexpectedEof` past the end of the buffer.
    pub fn read_bit(&mut self) -> Result<bool> {
        let byte_idx = self.position / 8;
        if byte_idx >= self.data.len() {
            return Err(BitIoError::UnexpectedEof.into());
        }
        let bit = (self.data[byte_idx] >> (self.position % 8)) & 1;
        self.position += 1;
        Ok(bit == 1)
    }

    /// Number of bits left in the buffer (padding included).
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.position
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.position
    }
}
