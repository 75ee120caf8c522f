//! Huffman decoder (decompression).

use crate::bitstream::MsbBitReader;
use crate::codebook::Codebook;
use crate::config::HuffConfig;
use crate::container::Container;
use crate::data::{DataType, Decoded};
use crate::error::{HuffError, Result};
use crate::symbol::Symbol;
use log::debug;

/// Huffman decoder for decompression.
#[derive(Debug, Clone, Default)]
pub struct HuffDecoder {
    config: HuffConfig,
}

impl HuffDecoder {
    /// Create a new decoder with the given configuration.
    pub fn new(config: HuffConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &HuffConfig {
        &self.config
    }

    /// Decode a container back into text or bytes.
    ///
    /// The payload is read bit by bit up to the declared bit length. Bits
    /// accumulate until they equal a codeword from the table, at which point
    /// the symbol is emitted and the accumulator cleared. Because the table is
    /// prefix-free the first match is the only possible one.
    pub fn decode(&self, input: &[u8]) -> Result<Decoded> {
        let container = Container::parse(input)?;

        let decoded = match container.data_type {
            DataType::Text => {
                let mut text = String::new();
                self.decode_symbols::<char>(&container, |c| text.push(c))?;
                Decoded::Text(text)
            }
            DataType::Binary => {
                let mut bytes = Vec::with_capacity(container.bit_len as usize / 2);
                self.decode_symbols::<u8>(&container, |b| bytes.push(b))?;
                Decoded::Binary(bytes)
            }
        };

        debug!(
            "decoded {} bits into {} bytes of {}",
            container.bit_len,
            decoded.len(),
            container.data_type
        );

        Ok(decoded)
    }

    fn decode_symbols<S: Symbol>(
        &self,
        container: &Container<'_>,
        mut emit: impl FnMut(S),
    ) -> Result<()> {
        let codebook = Codebook::<S>::parse(
            container.table,
            container.table_offset,
            self.config.max_codeword_bits,
        )?;
        if codebook.is_empty() {
            return Ok(());
        }

        let table = codebook.decode_table();
        let max_len = table.max_len();
        let mut reader = MsbBitReader::with_limit(container.payload, u64::from(container.bit_len));

        let mut acc = 0u64;
        let mut acc_len = 0u8;

        while let Some(bit) = reader.read_bit() {
            acc = (acc << 1) | u64::from(bit);
            acc_len += 1;

            if let Some(symbol) = table.lookup(acc, acc_len) {
                emit(symbol);
                acc = 0;
                acc_len = 0;
            } else if acc_len >= max_len {
                return Err(HuffError::corrupt(
                    reader.position() - u64::from(acc_len),
                    format!("{} bits match no codeword", acc_len),
                ));
            }
        }

        if acc_len > 0 {
            return Err(HuffError::corrupt(
                reader.position() - u64::from(acc_len),
                format!("{} trailing bits do not form a codeword", acc_len),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::write_container;
    use crate::encoder::HuffEncoder;

    fn binary_table() -> Vec<u8> {
        // 'a' -> 0, 'b' -> 10, 'c' -> 11
        vec![1, b'a', 1, 0x00, 1, b'b', 2, 0x80, 1, b'c', 2, 0xC0]
    }

    #[test]
    fn test_decode_simple() {
        // a b c a = 0 10 11 0
        let bytes = write_container(DataType::Binary, &binary_table(), 6, &[0b0101_1000]).unwrap();
        let decoded = HuffDecoder::default().decode(&bytes).unwrap();
        assert_eq!(decoded, Decoded::Binary(b"abca".to_vec()));
    }

    #[test]
    fn test_padding_is_ignored() {
        // Padding bits that would decode as 'a' must not be emitted
        let bytes = write_container(DataType::Binary, &binary_table(), 2, &[0b1000_0000]).unwrap();
        let decoded = HuffDecoder::default().decode(&bytes).unwrap();
        assert_eq!(decoded, Decoded::Binary(b"b".to_vec()));
    }

    #[test]
    fn test_residual_bits() {
        // a then a dangling '1'
        let bytes = write_container(DataType::Binary, &binary_table(), 2, &[0b0100_0000]).unwrap();
        let err = HuffDecoder::default().decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            HuffError::CorruptPayload {
                bit_position: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_unmatched_bits() {
        // Incomplete table: only 'a' -> 0, 'b' -> 10; "11" never matches
        let table = vec![1, b'a', 1, 0x00, 1, b'b', 2, 0x80];
        let bytes = write_container(DataType::Binary, &table, 3, &[0b0110_0000]).unwrap();
        let err = HuffDecoder::default().decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            HuffError::CorruptPayload {
                bit_position: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_text_container() {
        let compressed = HuffEncoder::default().encode("héllo wörld").unwrap();
        let decoded = HuffDecoder::default().decode(&compressed).unwrap();
        assert_eq!(decoded.as_text(), Some("héllo wörld"));
    }

    #[test]
    fn test_decode_empty_containers() {
        let text = write_container(DataType::Text, &[], 0, &[]).unwrap();
        assert_eq!(
            HuffDecoder::default().decode(&text).unwrap(),
            Decoded::Text(String::new())
        );

        let bin = write_container(DataType::Binary, &[], 0, &[]).unwrap();
        assert_eq!(
            HuffDecoder::default().decode(&bin).unwrap(),
            Decoded::Binary(Vec::new())
        );
    }

    #[test]
    fn test_decoder_codeword_limit() {
        let compressed = HuffEncoder::default().encode("aaabbc").unwrap();
        // Longest codeword is 2 bits
        let err = HuffDecoder::new(HuffConfig::new(1))
            .decode(&compressed)
            .unwrap_err();
        assert!(matches!(err, HuffError::MalformedContainer { .. }));
        assert!(HuffDecoder::new(HuffConfig::new(2)).decode(&compressed).is_ok());
    }
}
