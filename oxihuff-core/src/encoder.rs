//! Huffman encoder (compression).

use crate::bitstream::MsbBitWriter;
use crate::codebook::Codebook;
use crate::config::HuffConfig;
use crate::container::write_container;
use crate::data::Data;
use crate::error::{HuffError, Result};
use crate::symbol::Symbol;
use crate::tree::count_frequencies;
use log::{debug, trace};

/// Huffman encoder for compression.
#[derive(Debug, Clone, Default)]
pub struct HuffEncoder {
    config: HuffConfig,
}

impl HuffEncoder {
    /// Create a new encoder with the given configuration.
    pub fn new(config: HuffConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &HuffConfig {
        &self.config
    }

    /// Encode text or bytes into a container.
    ///
    /// # Algorithm
    ///
    /// 1. Count symbol frequencies (characters for text, bytes for binary)
    /// 2. Build the Huffman tree and derive one codeword per symbol
    /// 3. Pack every symbol's codeword MSB-first, zero-padding the last byte
    /// 4. Write tag, table, exact bit length and payload
    ///
    /// Empty input yields a container with an empty table and zero bits,
    /// unless `reject_empty` is set.
    pub fn encode<'a>(&self, data: impl Into<Data<'a>>) -> Result<Vec<u8>> {
        match data.into() {
            Data::Text(text) => self.encode_symbols(text.chars()),
            Data::Binary(bytes) => self.encode_symbols(bytes.iter().copied()),
        }
    }

    fn encode_symbols<S, I>(&self, symbols: I) -> Result<Vec<u8>>
    where
        S: Symbol,
        I: Iterator<Item = S> + Clone,
    {
        let frequencies = count_frequencies(symbols.clone());

        if frequencies.is_empty() {
            if self.config.reject_empty {
                return Err(HuffError::EmptyInput);
            }
            debug!("encoding empty {} input", S::DATA_TYPE);
            return write_container(S::DATA_TYPE, &[], 0, &[]);
        }

        let codebook = Codebook::from_frequencies(&frequencies, self.config.max_codeword_bits)?;
        for (symbol, code) in codebook.iter() {
            trace!("{:?} x{} -> {}", symbol, frequencies[&symbol], code);
        }

        let bit_len = codebook.encoded_bit_len(&frequencies);
        if bit_len > u64::from(u32::MAX) {
            return Err(HuffError::length_overflow("payload bit", bit_len));
        }

        let mut writer = MsbBitWriter::with_capacity(bit_len.div_ceil(8) as usize);
        codebook.pack(symbols, &mut writer)?;
        let (payload, bit_count) = writer.finish();
        debug_assert_eq!(bit_count, bit_len);

        let table = codebook.to_bytes();
        let container = write_container(S::DATA_TYPE, &table, bit_count, &payload)?;

        debug!(
            "encoded {} {} symbols ({} distinct, codewords {}..={} bits) into {} bits; container {} bytes",
            frequencies.values().sum::<u64>(),
            S::DATA_TYPE,
            codebook.len(),
            codebook.min_codeword_len(),
            codebook.max_codeword_len(),
            bit_count,
            container.len()
        );

        Ok(container)
    }
}
