//! Error types for Huffman compression and container parsing.
//!
//! Every failure is reported at the point where it is detected and carries
//! enough context (byte offset or bit position) to locate the problem in the
//! container.

use crate::data::DataType;
use thiserror::Error;

/// Huffman compression/decompression errors.
#[derive(Debug, Error)]
pub enum HuffError {
    /// Input cannot be interpreted as the requested data type.
    #[error("Unsupported input type: {message}")]
    UnsupportedInputType {
        /// Description of the mismatch.
        message: String,
    },

    /// Empty input where at least one symbol is required.
    #[error("Empty input: nothing to encode")]
    EmptyInput,

    /// Structurally invalid container.
    #[error("Malformed container at offset {offset}: {message}")]
    MalformedContainer {
        /// Byte offset where the violation was detected.
        offset: usize,
        /// Description of the violation.
        message: String,
    },

    /// Container holds a different data type than the caller asked for.
    #[error("Data type mismatch: expected {expected}, container holds {found}")]
    DataTypeMismatch {
        /// Type requested by the caller.
        expected: DataType,
        /// Type recorded in the container.
        found: DataType,
    },

    /// Unknown data-type tag in the container header.
    #[error("Unsupported data type tag: {0}")]
    UnsupportedDataType(u8),

    /// Payload bits do not decode to a whole number of codewords.
    #[error("Corrupt payload at bit position {bit_position}: {message}")]
    CorruptPayload {
        /// Bit position where decoding failed.
        bit_position: u64,
        /// Description of the failure.
        message: String,
    },

    /// Huffman tree is deeper than the configured codeword limit.
    #[error("Codeword of {length} bits exceeds limit of {max} bits")]
    CodewordTooLong {
        /// Length of the offending codeword.
        length: usize,
        /// Configured maximum.
        max: u8,
    },

    /// A length does not fit its 32-bit container field.
    #[error("{field} length {length} does not fit in 32 bits")]
    LengthOverflow {
        /// Name of the container field.
        field: &'static str,
        /// The length that was too large.
        length: u64,
    },
}

/// Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffError>;

impl HuffError {
    /// Create an unsupported input type error.
    pub fn unsupported_input(message: impl Into<String>) -> Self {
        Self::UnsupportedInputType {
            message: message.into(),
        }
    }

    /// Create a malformed container error.
    pub fn malformed(offset: usize, message: impl Into<String>) -> Self {
        Self::MalformedContainer {
            offset,
            message: message.into(),
        }
    }

    /// Create a corrupt payload error.
    pub fn corrupt(bit_position: u64, message: impl Into<String>) -> Self {
        Self::CorruptPayload {
            bit_position,
            message: message.into(),
        }
    }

    /// Create a length overflow error.
    pub fn length_overflow(field: &'static str, length: u64) -> Self {
        Self::LengthOverflow { field, length }
    }
}
