//! Error types for the codec.
//!
//! All operations return structured errors rather than panicking.
//! The library never logs or prints; callers interpret the error value.

use thiserror::Error;

/// Top-level error type for all operations in the crate.
///
/// Each variant corresponds to a failure domain:
/// - Bit I/O: reading/writing bits from/to byte buffers
/// - Malformed: input does not conform to the wire format, or fails the
///   post-decode cross-check against the embedded frequency table
/// - I/O: failures propagated from the caller's stream handles
#[derive(Debug, Error)]
pub enum Error {
    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Input is corrupt or was not produced by this codec
    #[error("malformed input: {0}")]
    Malformed(#[from] MalformedError),

    /// Stream I/O error from the caller-supplied reader or writer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bit-level I/O errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitIoError {
    /// Attempted to read past the end of the buffer
    #[error("unexpected end of bit stream")]
    UnexpectedEof,

    /// Attempted to write more bits than fit in a u64
    #[error("invalid bit count: {0}")]
    InvalidBitCount(usize),
}

/// Wire-format violations detected during decompression.
///
/// Every variant is terminal: the input is either truncated, carries
/// extra bytes, or its bitstream disagrees with the embedded frequency
/// table. None of these are retryable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedError {
    /// Input ended before the 256-entry frequency table was complete
    #[error("frequency table truncated: need {required} bytes, got {actual}")]
    TruncatedTable { required: usize, actual: usize },

    /// Input ended before the total-bit-count field was complete
    #[error("bit count field truncated: need {required} bytes, got {actual}")]
    TruncatedBitCount { required: usize, actual: usize },

    /// Fewer payload bytes than the declared bit count requires
    #[error("payload truncated: need {required} bytes, got {actual}")]
    TruncatedPayload { required: u64, actual: u64 },

    /// More payload bytes than the declared bit count can occupy
    #[error("{extra} trailing bytes after payload")]
    TrailingBytes { extra: u64 },

    /// A nonzero bit count declared by an all-zero frequency table
    #[error("{declared} bits declared but the frequency table is empty")]
    EmptyTable { declared: u64 },

    /// A candidate code grew past the longest code in the rebuilt table
    #[error("candidate code length {length} exceeds maximum {max}")]
    CodeTooLong { length: usize, max: usize },

    /// The rebuilt table assigns a code longer than a u64 pattern holds
    #[error("code length {length} exceeds the 64-bit pattern limit")]
    UnrepresentableCode { length: usize },

    /// The declared bit count ended mid-code
    #[error("{pending} bits left in unfinished code at end of stream")]
    DanglingBits { pending: usize },

    /// Decoded output disagrees with the embedded frequency table
    #[error("decoded frequency for byte {symbol:#04x} is {actual}, header says {expected}")]
    FrequencyMismatch {
        symbol: u8,
        expected: u64,
        actual: u64,
    },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
