//! Symbol alphabets.
//!
//! A symbol is the unit that receives a codeword: a `char` for text input and
//! a `u8` for binary input. Each alphabet knows its container tag and how to
//! write itself into the codeword table.

use crate::data::DataType;
use std::fmt::Debug;
use std::hash::Hash;

/// An alphabet symbol that can be Huffman coded.
///
/// `Ord` fixes the order of leaves in the tree builder and of entries in the
/// serialized table, which makes encoding deterministic.
pub trait Symbol: Copy + Ord + Hash + Debug + Send + Sync + 'static {
    /// Container tag for values made of this symbol.
    const DATA_TYPE: DataType;

    /// Longest serialized form in bytes.
    const MAX_ENCODED_LEN: usize;

    /// Append the serialized form of the symbol to `out`.
    fn encode_into(self, out: &mut Vec<u8>);

    /// Parse a serialized symbol. `bytes` must be exactly one symbol.
    fn decode_from(bytes: &[u8]) -> Option<Self>;
}

impl Symbol for u8 {
    const DATA_TYPE: DataType = DataType::Binary;
    const MAX_ENCODED_LEN: usize = 1;

    fn encode_into(self, out: &mut Vec<u8>) {
        out.push(self);
    }

    fn decode_from(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [byte] => Some(*byte),
            _ => None,
        }
    }
}

impl Symbol for char {
    const DATA_TYPE: DataType = DataType::Text;
    const MAX_ENCODED_LEN: usize = 4;

    fn encode_into(self, out: &mut Vec<u8>) {
        let mut buf = [0u8; 4];
        out.extend_from_slice(self.encode_utf8(&mut buf).as_bytes());
    }

    fn decode_from(bytes: &[u8]) -> Option<Self> {
        let text = std::str::from_utf8(bytes).ok()?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<S: Symbol>(symbol: S) -> Option<S> {
        let mut out = Vec::new();
        symbol.encode_into(&mut out);
        assert!(out.len() <= S::MAX_ENCODED_LEN);
        S::decode_from(&out)
    }

    #[test]
    fn test_byte_symbol() {
        assert_eq!(roundtrip(0u8), Some(0));
        assert_eq!(roundtrip(255u8), Some(255));
        assert_eq!(u8::decode_from(&[]), None);
        assert_eq!(u8::decode_from(&[1, 2]), None);
        assert_eq!(u8::DATA_TYPE, DataType::Binary);
    }

    #[test]
    fn test_char_symbol() {
        for c in ['a', 'é', '圧', '🦀'] {
            assert_eq!(roundtrip(c), Some(c));
        }
        assert_eq!(char::DATA_TYPE, DataType::Text);
    }

    #[test]
    fn test_char_rejects_bad_encodings() {
        assert_eq!(char::decode_from(b"ab"), None);
        assert_eq!(char::decode_from(&[0xC3]), None);
        assert_eq!(char::decode_from(&[]), None);
    }
}
