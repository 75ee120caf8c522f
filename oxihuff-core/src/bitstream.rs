//! MSB-first bit stream operations for the packed payload.
//!
//! Codewords are written most significant bit first, so the byte stream reads
//! left to right in the same order as the `0`/`1` path from the tree root.
//! The final byte is padded with zero bits; the exact number of meaningful
//! bits travels separately in the container header.

use crate::codebook::Codeword;

/// MSB-first bit writer for payload packing.
#[derive(Debug)]
pub struct MsbBitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit buffer (MSB-first).
    buffer: u64,
    /// Number of pending bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written, excluding padding.
    total_bits: u64,
}

impl MsbBitWriter {
    /// Create a new MSB bit writer.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a writer with room for `bytes` output bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            buffer: 0,
            bits_in_buffer: 0,
            total_bits: 0,
        }
    }

    /// Write up to 32 bits to the stream (MSB-first).
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        if count == 0 {
            return;
        }

        let mask = if count == 32 {
            u32::MAX
        } else {
            (1u32 << count) - 1
        };

        // Shift left to make room; stale high bits fall off the top
        self.buffer = (self.buffer << count) | u64::from(value & mask);
        self.bits_in_buffer += count;
        self.total_bits += u64::from(count);

        // Flush complete bytes (from MSB side)
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
    }

    /// Write a codeword of up to 64 bits.
    #[inline]
    pub fn write_codeword(&mut self, codeword: Codeword) {
        let len = codeword.bit_len();
        if len > 32 {
            self.write_bits((codeword.bits() >> 32) as u32, len - 32);
            self.write_bits(codeword.bits() as u32, 32);
        } else {
            self.write_bits(codeword.bits() as u32, len);
        }
    }

    /// Number of meaningful bits written so far.
    pub fn bit_count(&self) -> u64 {
        self.total_bits
    }

    /// Pad the last byte with zeros and return `(bytes, bit_count)`.
    pub fn finish(mut self) -> (Vec<u8>, u64) {
        if self.bits_in_buffer > 0 {
            let remaining = 8 - self.bits_in_buffer;
            let byte = (self.buffer << remaining) as u8;
            self.output.push(byte);
            self.bits_in_buffer = 0;
        }
        (self.output, self.total_bits)
    }
}

impl Default for MsbBitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// MSB-first bit reader bounded by a declared bit length.
///
/// Bits past the limit (the zero padding) are never returned.
#[derive(Debug)]
pub struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Number of readable bits.
    limit: u64,
    /// Next bit to read.
    position: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a reader over all bits of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_limit(data, data.len() as u64 * 8)
    }

    /// Create a reader that stops after `bit_len` bits.
    ///
    /// The limit is capped at the number of bits actually present.
    pub fn with_limit(data: &'a [u8], bit_len: u64) -> Self {
        Self {
            data,
            limit: bit_len.min(data.len() as u64 * 8),
            position: 0,
        }
    }

    /// Read one bit, or `None` once the limit is reached.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.position >= self.limit {
            return None;
        }
        let byte = self.data[(self.position / 8) as usize];
        let shift = 7 - (self.position % 8) as u8;
        self.position += 1;
        Some((byte >> shift) & 1 == 1)
    }

    /// Bit position of the next read.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Bits left before the limit.
    pub fn remaining(&self) -> u64 {
        self.limit - self.position
    }
}
