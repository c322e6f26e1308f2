//! Byte frequency accounting and its serialized wire form.
//!
//! The frequency table is both the statistics gathered from the input and
//! the entire serialized representation of the code tree: the decompressor
//! rebuilds an identical tree from these 256 counts alone.
//!
//! # Wire Layout
//!
//! 256 consecutive u64 values, little-endian, 2048 bytes total. The table
//! is indexed by `byte ^ 0x80`, so index 0 holds the count for byte 0x80
//! (the most negative value under a signed-byte reading) and index 255
//! holds the count for 0x7F. This matches the signed-char offset of the
//! original stream layout.

use crate::error::{MalformedError, Result};

/// Number of entries in the table (one per byte value).
pub const TABLE_LEN: usize = 256;

/// Serialized size of the table in bytes.
pub const TABLE_BYTES: usize = TABLE_LEN * 8;

/// Occurrence counts for each of the 256 byte values.
///
/// # Invariants
/// - `total()` equals the length of the counted input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; TABLE_LEN],
}

impl FrequencyTable {
    /// Create a new, zeroed table.
    pub fn new() -> Self {
        Self {
            counts: [0; TABLE_LEN],
        }
    }

    /// Count byte frequencies in the input.
    pub fn count(input: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in input {
            table.counts[index_of(byte)] += 1;
        }
        table
    }

    /// Record one occurrence of `byte`.
    pub fn record(&mut self, byte: u8) {
        self.counts[index_of(byte)] += 1;
    }

    /// Get the count for a specific byte value.
    pub fn get(&self, byte: u8) -> u64 {
        self.counts[index_of(byte)]
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    ///
    /// Parsed tables are untrusted; saturation keeps the sum safe even
    /// when a hostile header carries counts near the u64 limit.
    pub fn total(&self) -> u64 {
        self.counts
            .iter()
            .fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Number of distinct byte values with nonzero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterate over present symbols as `(byte, count)` pairs, in table
    /// index order. Tree construction seeds its leaves in this order, so
    /// the order is part of the deterministic tie-break.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(i, &c)| (byte_at(i), c))
    }

    /// Compute the Shannon entropy of the distribution (bits per symbol).
    ///
    /// Returns 0.0 for an empty table.
    pub fn entropy(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        let total = self.total() as f64;
        self.counts
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let prob = c as f64 / total;
                -prob * prob.log2()
            })
            .sum()
    }

    /// Serialize to the fixed 2048-byte wire form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(TABLE_BYTES);
        for count in &self.counts {
            bytes.extend_from_slice(&count.to_le_bytes());
        }
        bytes
    }

    /// Parse a table from the first 2048 bytes of `bytes`.
    ///
    /// # Errors
    /// `MalformedError::TruncatedTable` if fewer than 2048 bytes are
    /// available. Extra bytes beyond the table are ignored; the caller
    /// owns the rest of the stream.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < TABLE_BYTES {
            return Err(MalformedError::TruncatedTable {
                required: TABLE_BYTES,
                actual: bytes.len(),
            }
            .into());
        }

        let mut table = Self::new();
        for (i, chunk) in bytes[..TABLE_BYTES].chunks_exact(8).enumerate() {
            // chunks_exact(8) guarantees the conversion succeeds
            table.counts[i] = u64::from_le_bytes(chunk.try_into().unwrap());
        }
        Ok(table)
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Table index for a byte value (signed-byte offset).
fn index_of(byte: u8) -> usize {
    (byte ^ 0x80) as usize
}

/// Byte value stored at a table index.
fn byte_at(index: usize) -> u8 {
    (index as u8) ^ 0x80
}
