//! Input and output value types, and the data-type tag that selects between them.

use crate::error::{HuffError, Result};
use std::fmt;

/// Kind of value carried by a container.
///
/// The tag decides how decoded symbols are reassembled: characters into a
/// `String`, bytes into a `Vec<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataType {
    /// UTF-8 text, coded one character at a time.
    Text = 0,
    /// Raw bytes, coded one byte at a time.
    Binary = 1,
}

impl DataType {
    /// Tag byte written to the container header.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Parse a container tag byte.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::Text),
            1 => Ok(Self::Binary),
            other => Err(HuffError::UnsupportedDataType(other)),
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Borrowed input to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Data<'a> {
    /// Text input; symbols are characters.
    Text(&'a str),
    /// Binary input; symbols are bytes.
    Binary(&'a [u8]),
}

impl<'a> Data<'a> {
    /// Interpret raw bytes as the given data type.
    ///
    /// Requesting [`DataType::Text`] for bytes that are not valid UTF-8 fails
    /// with [`HuffError::UnsupportedInputType`].
    pub fn from_bytes(bytes: &'a [u8], data_type: DataType) -> Result<Self> {
        match data_type {
            DataType::Binary => Ok(Self::Binary(bytes)),
            DataType::Text => std::str::from_utf8(bytes).map(Self::Text).map_err(|e| {
                HuffError::unsupported_input(format!("input is not valid UTF-8 text: {e}"))
            }),
        }
    }

    /// Data type of this input.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Text(_) => DataType::Text,
            Self::Binary(_) => DataType::Binary,
        }
    }

    /// Raw byte view of the input.
    pub fn as_bytes(&self) -> &'a [u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }

    /// Whether the input holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl<'a> From<&'a str> for Data<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Data<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for Data<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Binary(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Data<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Binary(bytes.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Data<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Binary(bytes.as_slice())
    }
}

/// Owned output of the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Reassembled text.
    Text(String),
    /// Reassembled bytes.
    Binary(Vec<u8>),
}

impl Decoded {
    /// Data type recorded in the container.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Text(_) => DataType::Text,
            Self::Binary(_) => DataType::Binary,
        }
    }

    /// Raw byte view (UTF-8 for text).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }

    /// Consume and return the raw bytes (UTF-8 for text).
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }

    /// Text view, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq<str> for Decoded {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Decoded {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<[u8]> for Decoded {
    fn eq(&self, other: &[u8]) -> bool {
        matches!(self, Self::Binary(bytes) if bytes.as_slice() == other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        assert_eq!(DataType::from_tag(DataType::Text.tag()).unwrap(), DataType::Text);
        assert_eq!(
            DataType::from_tag(DataType::Binary.tag()).unwrap(),
            DataType::Binary
        );
        assert!(matches!(
            DataType::from_tag(2),
            Err(HuffError::UnsupportedDataType(2))
        ));
    }

    #[test]
    fn test_from_bytes() {
        let data = Data::from_bytes("héllo".as_bytes(), DataType::Text).unwrap();
        assert_eq!(data, Data::Text("héllo"));

        let data = Data::from_bytes(&[0xFF, 0xFE], DataType::Binary).unwrap();
        assert_eq!(data.data_type(), DataType::Binary);

        let err = Data::from_bytes(&[0xFF, 0xFE], DataType::Text).unwrap_err();
        assert!(matches!(err, HuffError::UnsupportedInputType { .. }));
    }

    #[test]
    fn test_conversions() {
        let owned = String::from("abc");
        assert_eq!(Data::from(&owned), Data::Text("abc"));
        assert_eq!(Data::from(b"abc"), Data::Binary(b"abc"));
        assert!(Data::from("").is_empty());
    }

    #[test]
    fn test_decoded_accessors() {
        let text = Decoded::Text("añb".to_string());
        assert_eq!(text.data_type(), DataType::Text);
        assert_eq!(text.len(), 4);
        assert_eq!(text, "añb");
        assert_eq!(text.clone().into_bytes(), "añb".as_bytes());

        let bin = Decoded::Binary(vec![1, 2, 3]);
        assert_eq!(bin.as_text(), None);
        assert!(bin == [1u8, 2, 3][..]);
        assert!(!bin.is_empty());
    }
}
