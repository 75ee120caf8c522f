//! Codec configuration.

/// Longest codeword the container format can carry.
pub const MAX_CODEWORD_BITS: u8 = 64;

/// Huffman codec configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffConfig {
    /// Fail with [`HuffError::EmptyInput`](crate::HuffError::EmptyInput)
    /// instead of emitting an empty container.
    pub reject_empty: bool,
    /// Maximum codeword length in bits (1-64).
    ///
    /// The encoder fails if the tree is deeper; the decoder rejects tables
    /// containing longer codewords.
    pub max_codeword_bits: u8,
}

impl HuffConfig {
    /// Default configuration.
    ///
    /// - Empty input encodes to a valid empty container
    /// - Codewords up to 64 bits
    pub const DEFAULT: Self = Self {
        reject_empty: false,
        max_codeword_bits: MAX_CODEWORD_BITS,
    };

    /// Strict configuration: empty input is an error.
    pub const STRICT: Self = Self {
        reject_empty: true,
        max_codeword_bits: MAX_CODEWORD_BITS,
    };

    /// Create a configuration with the given codeword limit.
    ///
    /// The limit is clamped to `1..=64`.
    pub fn new(max_codeword_bits: u8) -> Self {
        Self {
            reject_empty: false,
            max_codeword_bits: max_codeword_bits.clamp(1, MAX_CODEWORD_BITS),
        }
    }

    /// Return a copy with `reject_empty` set.
    pub fn with_reject_empty(mut self, reject_empty: bool) -> Self {
        self.reject_empty = reject_empty;
        self
    }
}

impl Default for HuffConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HuffConfig::default();
        assert_eq!(config, HuffConfig::DEFAULT);
        assert!(!config.reject_empty);
        assert_eq!(config.max_codeword_bits, 64);
    }

    #[test]
    fn test_strict_config() {
        let config = HuffConfig::STRICT;
        assert!(config.reject_empty);
        assert_eq!(config.max_codeword_bits, MAX_CODEWORD_BITS);
    }

    #[test]
    fn test_new_clamps_limit() {
        assert_eq!(HuffConfig::new(0).max_codeword_bits, 1);
        assert_eq!(HuffConfig::new(200).max_codeword_bits, 64);
        assert_eq!(HuffConfig::new(12).max_codeword_bits, 12);
        assert!(HuffConfig::new(12).with_reject_empty(true).reject_empty);
    }
}
