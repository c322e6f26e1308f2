//! Code assignment derived from the Huffman tree.
//!
//! One iterative depth-first traversal produces both directions of the
//! mapping: symbol -> code for encoding and (bits, length) -> symbol for
//! decoding. Descending to a left child appends a 0 bit, to a right child
//! a 1 bit, so the codes are prefix-free by construction.

use std::collections::HashMap;

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, NodeKind};

/// A variable-length bit code: the pattern and its length in bits.
///
/// `bits` holds the code right-aligned; only the low `len` bits are
/// meaningful. Minimum length is 1, even for a single-leaf tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

impl Code {
    /// True if `self` is a strict bit-prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len < other.len && (other.bits >> (other.len - self.len)) == self.bits
    }
}

/// Bidirectional mapping between byte values and their codes.
///
/// Patterns are stored in a `u64`, so codes past 64 bits truncate and
/// two entries can collide on a decode key. Trees that deep only arise
/// from hostile frequency tables; the decoder checks `max_code_len`
/// before using a codebook built from an untrusted table.
///
/// # Invariants
/// - Prefix-free: no assigned code is a prefix of another
/// - Every symbol present in the source tree has exactly one entry
#[derive(Debug, Clone)]
pub struct Codebook {
    encode: [Option<Code>; 256],
    decode: HashMap<(u64, u8), u8>,
    max_len: u8,
}

impl Codebook {
    /// Derive both mapping directions from a tree.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut encode = [None; 256];
        let mut decode = HashMap::with_capacity(tree.leaf_count());
        let mut max_len = 0u8;

        let mut stack = vec![(tree.root(), 0u64, 0u8)];
        while let Some((id, bits, len)) = stack.pop() {
            match tree.node(id).kind {
                NodeKind::Leaf(byte) => {
                    // A lone root leaf still needs a 1-bit code.
                    let len = len.max(1);
                    encode[byte as usize] = Some(Code { bits, len });
                    decode.insert((bits, len), byte);
                    max_len = max_len.max(len);
                }
                NodeKind::Internal { left, right } => {
                    stack.push((right, bits << 1 | 1, len + 1));
                    stack.push((left, bits << 1, len + 1));
                }
            }
        }

        Self {
            encode,
            decode,
            max_len,
        }
    }

    /// Code assigned to a byte value, if the byte is present.
    pub fn code(&self, byte: u8) -> Option<Code> {
        self.encode[byte as usize]
    }

    /// Symbol matching a candidate (bits, length) pair, if any.
    pub fn symbol(&self, bits: u64, len: u8) -> Option<u8> {
        self.decode.get(&(bits, len)).copied()
    }

    /// Length in bits of the longest assigned code.
    pub fn max_code_len(&self) -> u8 {
        self.max_len
    }

    /// Number of symbols with an assigned code.
    pub fn symbol_count(&self) -> usize {
        self.decode.len()
    }

    /// Iterate over assigned `(byte, code)` pairs.
    pub fn codes(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.encode
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|code| (i as u8, code)))
    }

    /// Total encoded size in bits: sum of frequency x code length.
    ///
    /// This is the value written to the stream header so the decoder
    /// knows exactly how many bits to consume.
    pub fn encoded_bits(&self, table: &FrequencyTable) -> u64 {
        self.codes()
            .map(|(byte, code)| table.get(byte) * code.len as u64)
            .sum()
    }
}
