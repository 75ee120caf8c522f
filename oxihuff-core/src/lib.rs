//! # OxiHuff: Pure Rust Huffman Coding
//!
//! This crate provides Huffman compression and decompression of text and
//! binary values, packaged in a small self-describing container.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Text and binary**: Text is coded per Unicode character, binary per byte
//! - **Self-describing**: The container carries the data type, the codeword
//!   table and the exact payload bit count
//! - **Deterministic**: Equal inputs always produce identical containers
//!
//! ## Container Layout
//!
//! - **Tag** (1 byte): `0` for text, `1` for binary
//! - **Table length** (u32, big-endian) followed by the codeword table
//! - **Bit length** (u32, big-endian) of the meaningful payload bits
//! - **Payload**: codewords packed MSB-first, last byte zero-padded
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::{compress, decompress, Decoded};
//!
//! let compressed = compress("abracadabra").unwrap();
//! let decoded = decompress(&compressed).unwrap();
//! assert_eq!(decoded, Decoded::Text("abracadabra".to_string()));
//!
//! let compressed = compress(&[0u8, 0, 0, 1, 255][..]).unwrap();
//! assert_eq!(decompress(&compressed).unwrap().into_bytes(), vec![0, 0, 0, 1, 255]);
//! ```
//!
//! ## Degenerate Inputs
//!
//! An input with a single distinct symbol codes every occurrence as one `0`
//! bit. Empty input yields a container with an empty table and a zero bit
//! length, which decodes back to an empty value of the same type:
//!
//! ```rust
//! use oxihuff_core::{compress_text, decompress_text};
//!
//! assert_eq!(decompress_text(&compress_text("").unwrap()).unwrap(), "");
//! assert_eq!(decompress_text(&compress_text("zzz").unwrap()).unwrap(), "zzz");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstream;
mod codebook;
mod config;
mod container;
mod data;
mod decoder;
mod encoder;
mod error;
mod symbol;
mod tree;

pub use bitstream::{MsbBitReader, MsbBitWriter};
pub use codebook::{Codebook, Codeword, DecodeTable};
pub use config::{HuffConfig, MAX_CODEWORD_BITS};
pub use container::{Container, ContainerInfo, MIN_CONTAINER_SIZE, inspect, write_container};
pub use data::{Data, DataType, Decoded};
pub use decoder::HuffDecoder;
pub use encoder::HuffEncoder;
pub use error::{HuffError, Result};
pub use symbol::Symbol;
pub use tree::{HuffmanTree, Node, count_frequencies};

/// Compress text or bytes with the given configuration.
///
/// # Example
///
/// ```rust
/// use oxihuff_core::{compress_with, HuffConfig, HuffError};
///
/// let err = compress_with("", HuffConfig::STRICT).unwrap_err();
/// assert!(matches!(err, HuffError::EmptyInput));
/// ```
pub fn compress_with<'a>(data: impl Into<Data<'a>>, config: HuffConfig) -> Result<Vec<u8>> {
    HuffEncoder::new(config).encode(data)
}

/// Compress text or bytes with the default configuration.
///
/// `&str` and `&String` are compressed as text; byte slices, arrays and
/// `&Vec<u8>` as binary.
///
/// # Example
///
/// ```rust
/// use oxihuff_core::compress;
///
/// let text = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaabbbbc";
/// let compressed = compress(text).unwrap();
/// assert!(compressed.len() < text.len());
/// ```
pub fn compress<'a>(data: impl Into<Data<'a>>) -> Result<Vec<u8>> {
    compress_with(data, HuffConfig::DEFAULT)
}

/// Decompress a container with the given configuration.
pub fn decompress_with(container: &[u8], config: HuffConfig) -> Result<Decoded> {
    HuffDecoder::new(config).decode(container)
}

/// Decompress a container with the default configuration.
///
/// The result has the data type recorded in the container.
///
/// # Example
///
/// ```rust
/// use oxihuff_core::{compress, decompress, DataType};
///
/// let compressed = compress(b"\x00\x01\x01").unwrap();
/// let decoded = decompress(&compressed).unwrap();
/// assert_eq!(decoded.data_type(), DataType::Binary);
/// ```
pub fn decompress(container: &[u8]) -> Result<Decoded> {
    decompress_with(container, HuffConfig::DEFAULT)
}

/// Compress text (convenience function).
pub fn compress_text(text: &str) -> Result<Vec<u8>> {
    compress(text)
}

/// Compress bytes (convenience function).
pub fn compress_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    compress(bytes)
}

/// Decompress a container that must hold text.
///
/// Fails with [`HuffError::DataTypeMismatch`] for a binary container.
pub fn decompress_text(container: &[u8]) -> Result<String> {
    match decompress(container)? {
        Decoded::Text(text) => Ok(text),
        Decoded::Binary(_) => Err(HuffError::DataTypeMismatch {
            expected: DataType::Text,
            found: DataType::Binary,
        }),
    }
}

/// Decompress a container that must hold bytes.
///
/// Fails with [`HuffError::DataTypeMismatch`] for a text container.
pub fn decompress_bytes(container: &[u8]) -> Result<Vec<u8>> {
    match decompress(container)? {
        Decoded::Binary(bytes) => Ok(bytes),
        Decoded::Text(_) => Err(HuffError::DataTypeMismatch {
            expected: DataType::Binary,
            found: DataType::Text,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_text() {
        let original = "she sells sea shells by the sea shore";
        let compressed = compress(original).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_bytes() {
        let original: Vec<u8> = (0..=255).collect();
        let compressed = compress(&original).unwrap();
        assert_eq!(decompress_bytes(&compressed).unwrap(), original);
    }

    #[test]
    fn test_type_is_preserved() {
        // Same bytes, different data types
        let as_text = compress("abc").unwrap();
        let as_bytes = compress(b"abc").unwrap();
        assert_eq!(as_text[0], DataType::Text.tag());
        assert_eq!(as_bytes[0], DataType::Binary.tag());
        assert_eq!(as_text[1..], as_bytes[1..]);

        assert_eq!(decompress(&as_text).unwrap(), Decoded::Text("abc".into()));
        assert_eq!(
            decompress(&as_bytes).unwrap(),
            Decoded::Binary(b"abc".to_vec())
        );
    }

    #[test]
    fn test_typed_decompress_mismatch() {
        let text = compress_text("abc").unwrap();
        let bytes = compress_bytes(b"abc").unwrap();
        assert!(matches!(
            decompress_bytes(&text),
            Err(HuffError::DataTypeMismatch {
                expected: DataType::Binary,
                found: DataType::Text,
            })
        ));
        assert!(matches!(
            decompress_text(&bytes),
            Err(HuffError::DataTypeMismatch {
                expected: DataType::Text,
                found: DataType::Binary,
            })
        ));
    }

    #[test]
    fn test_empty_input() {
        let compressed = compress_bytes(b"").unwrap();
        assert_eq!(compressed.len(), MIN_CONTAINER_SIZE);
        assert_eq!(decompress_bytes(&compressed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_repeating_pattern() {
        let original = vec![b'X'; 1000];
        let compressed = compress(&original).unwrap();

        // One bit per symbol
        assert!(compressed.len() < original.len() / 4);
        assert_eq!(decompress_bytes(&compressed).unwrap(), original);
    }

    #[test]
    fn test_inspect_reexport() {
        let compressed = compress("hello").unwrap();
        let info = inspect(&compressed).unwrap();
        assert_eq!(info.data_type, DataType::Text);
        assert_eq!(info.symbol_count, 4);
    }
}
