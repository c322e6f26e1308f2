//! huffio: frequency-table Huffman codec
//!
//! This library compresses byte streams with an optimal prefix code built
//! from symbol frequencies. The code tree is never serialized directly;
//! the stream carries the raw 256-entry frequency table, and the decoder
//! rebuilds an identical tree from it.
//!
//! # Architecture
//!
//! The pipeline is built from small modules with clear boundaries:
//! - `frequency`: byte counts and their 2048-byte wire form
//! - `tree`: deterministic Huffman tree construction
//! - `codebook`: symbol <-> code mappings derived from the tree
//! - `bitio`: bit-level packing with the wire's byte discipline
//! - `codec`: compress/decompress orchestration over slices
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured errors
//! - **Deterministic**: ties in tree construction break the same way on
//!   both sides, so encoder and decoder always agree on every code
//! - **Validating**: the decoder cross-checks its output against the
//!   embedded frequency table and rejects anything inconsistent
//!
//! # Example
//! ```
//! let input = b"abracadabra".to_vec();
//! let compressed = huffio::compress_to_vec(&input).unwrap();
//! let restored = huffio::decompress_to_vec(&compressed).unwrap();
//! assert_eq!(restored, input);
//! ```

pub mod bitio;
pub mod codebook;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod tree;

// Re-export commonly used items
pub use codec::{compress_to_vec, decompress_to_vec, HEADER_BYTES};
pub use error::{Error, Result};

use std::io::{Read, Write};

/// Compress everything from `input` and write the stream to `output`.
///
/// The input is fully buffered before encoding begins; there is no
/// incremental mode. Empty input writes nothing.
///
/// # Errors
/// `Error::Io` from either stream handle; see [`compress_to_vec`] for the
/// encoding side.
pub fn compress<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    let compressed = codec::compress_to_vec(&buf)?;
    output.write_all(&compressed)?;
    Ok(())
}

/// Decompress a complete stream from `input` and write the original
/// bytes to `output`.
///
/// # Errors
/// `Error::Io` from either stream handle; `Error::Malformed` for any
/// violation of the wire format (see [`decompress_to_vec`]).
pub fn decompress<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    let restored = codec::decompress_to_vec(&buf)?;
    output.write_all(&restored)?;
    Ok(())
}
