//! Compression and decompression over byte slices.
//!
//! # Stream Format
//!
//! All integers are little-endian:
//!
//! ```text
//! +--------------------+
//! | frequency table    |  256 x u64 counts, 2048 bytes
//! +--------------------+
//! | total bit count    |  u64
//! +--------------------+
//! | packed code bits   |  ceil(bits / 8) bytes
//! +--------------------+
//! ```
//!
//! Empty input is the degenerate case: it compresses to zero bytes, and
//! zero bytes decompress to empty output. A stream that is present but
//! shorter than the fixed header is malformed.
//!
//! The table doubles as the decoder's integrity check: after the last
//! declared bit, the frequencies of the emitted symbols must equal the
//! header table exactly.

use crate::bitio::{BitReader, BitWriter};
use crate::codebook::Codebook;
use crate::error::{MalformedError, Result};
use crate::frequency::{FrequencyTable, TABLE_BYTES};
use crate::tree::HuffmanTree;

/// Size of the total-bit-count field.
const BIT_COUNT_BYTES: usize = 8;

/// Size of the fixed stream header (table + bit count).
pub const HEADER_BYTES: usize = TABLE_BYTES + BIT_COUNT_BYTES;

/// Compress a byte slice into a complete stream.
///
/// Pipeline: count frequencies, build the tree, derive codes, then write
/// the table, the total bit count, and every input byte's code in order.
///
/// # Errors
/// Only the pathological case of a code longer than 64 bits, which
/// requires multi-terabyte skewed inputs; ordinary inputs cannot fail.
pub fn compress_to_vec(input: &[u8]) -> Result<Vec<u8>> {
    let table = FrequencyTable::count(input);
    let Some(tree) = HuffmanTree::build(&table) else {
        // Empty input: emit nothing at all.
        return Ok(Vec::new());
    };
    let book = Codebook::from_tree(&tree);
    let total_bits = book.encoded_bits(&table);

    let payload_bytes = (total_bits / 8 + (total_bits % 8 != 0) as u64) as usize;
    let mut out = Vec::with_capacity(HEADER_BYTES + payload_bytes);
    out.extend_from_slice(&table.to_bytes());
    out.extend_from_slice(&total_bits.to_le_bytes());

    let mut writer = BitWriter::new();
    for &byte in input {
        if let Some(code) = book.code(byte) {
            writer.write_bits(code.bits, code.len)?;
        }
    }
    out.extend_from_slice(&writer.finish());

    Ok(out)
}

/// Decompress a complete stream back into the original bytes.
///
/// Rebuilds the tree from the header table with the same deterministic
/// tie-break the compressor used, then walks the declared number of bits,
/// emitting a symbol each time the accumulated candidate matches a code.
///
/// # Errors
/// `Error::Malformed` on any violation of the format: truncated header,
/// payload length disagreeing with the declared bit count, a table whose
/// codes cannot fit a u64 pattern, a candidate outgrowing the longest
/// code, a code left unfinished at the end, or decoded frequencies
/// differing from the header table.
pub fn decompress_to_vec(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let table = FrequencyTable::from_bytes(input)?;
    let rest = &input[TABLE_BYTES..];
    if rest.len() < BIT_COUNT_BYTES {
        return Err(MalformedError::TruncatedBitCount {
            required: BIT_COUNT_BYTES,
            actual: rest.len(),
        }
        .into());
    }
    let declared_bits = u64::from_le_bytes(rest[..BIT_COUNT_BYTES].try_into().unwrap());
    let payload = &rest[BIT_COUNT_BYTES..];

    // The payload must be exactly the declared bits rounded up to bytes.
    let required = declared_bits / 8 + (declared_bits % 8 != 0) as u64;
    let actual = payload.len() as u64;
    if actual < required {
        return Err(MalformedError::TruncatedPayload { required, actual }.into());
    }
    if actual > required {
        return Err(MalformedError::TrailingBytes {
            extra: actual - required,
        }
        .into());
    }

    let Some(tree) = HuffmanTree::build(&table) else {
        // All-zero table: valid only if nothing was declared.
        if declared_bits == 0 {
            return Ok(Vec::new());
        }
        return Err(MalformedError::EmptyTable {
            declared: declared_bits,
        }
        .into());
    };
    let book = Codebook::from_tree(&tree);
    if book.max_code_len() > 64 {
        return Err(MalformedError::UnrepresentableCode {
            length: book.max_code_len() as usize,
        }
        .into());
    }

    // Every decoded symbol consumes at least one bit, so the declared
    // count bounds the output; never trust header counts for allocation.
    let mut out = Vec::with_capacity(table.total().min(declared_bits) as usize);
    let mut decoded = FrequencyTable::new();
    let mut reader = BitReader::new(payload);
    let mut candidate = 0u64;
    let mut len = 0u8;

    for _ in 0..declared_bits {
        candidate = (candidate << 1) | reader.read_bit()? as u64;
        len += 1;
        if len > book.max_code_len() {
            return Err(MalformedError::CodeTooLong {
                length: len as usize,
                max: book.max_code_len() as usize,
            }
            .into());
        }
        if let Some(symbol) = book.symbol(candidate, len) {
            out.push(symbol);
            decoded.record(symbol);
            candidate = 0;
            len = 0;
        }
    }

    if len != 0 {
        return Err(MalformedError::DanglingBits {
            pending: len as usize,
        }
        .into());
    }

    if decoded != table {
        // Name the first disagreeing symbol in the error.
        for byte in 0..=255u8 {
            if decoded.get(byte) != table.get(byte) {
                return Err(MalformedError::FrequencyMismatch {
                    symbol: byte,
                    expected: table.get(byte),
                    actual: decoded.get(byte),
                }
                .into());
            }
        }
    }

    Ok(out)
}
