//! Command implementations for OxiHuff CLI.

pub mod compress;
pub mod decompress;
pub mod info;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use info::cmd_info;
pub use test::cmd_test;

use clap::ValueEnum;
use oxihuff_core::{Data, DataType, HuffError};

/// How file contents are handed to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum InputMode {
    /// Text if the file is valid UTF-8, binary otherwise
    #[default]
    Auto,
    /// UTF-8 text, coded per character
    Text,
    /// Raw bytes, coded per byte
    Binary,
}

impl InputMode {
    /// Interpret file contents according to the mode.
    pub fn resolve(self, bytes: &[u8]) -> Result<Data<'_>, HuffError> {
        match self {
            InputMode::Auto => {
                Ok(Data::from_bytes(bytes, DataType::Text).unwrap_or(Data::Binary(bytes)))
            }
            InputMode::Text => Data::from_bytes(bytes, DataType::Text),
            InputMode::Binary => Data::from_bytes(bytes, DataType::Binary),
        }
    }
}
