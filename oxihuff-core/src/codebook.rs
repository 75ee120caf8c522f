//! Codeword derivation and the serialized codeword table.
//!
//! A [`Codebook`] maps every symbol of the input to the path from the tree
//! root to its leaf: `0` for each left branch, `1` for each right branch.
//! Because symbols only sit on leaves, the resulting code is prefix-free.
//!
//! # Table format
//!
//! The table is a sequence of entries in ascending symbol order, read until
//! the enclosing length field is exhausted:
//!
//! ```text
//! +---------+-----------+-----------+----------------------------+
//! | sym len | symbol    | code bits | codeword, MSB-first, padded |
//! | 1 byte  | 1-4 bytes | 1 byte    | ceil(code bits / 8) bytes   |
//! +---------+-----------+-----------+----------------------------+
//! ```

use crate::bitstream::MsbBitWriter;
use crate::config::MAX_CODEWORD_BITS;
use crate::error::{HuffError, Result};
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A codeword of 1 to 64 bits.
///
/// The first path decision is the most significant of the `bit_len` low bits
/// of `bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codeword {
    bits: u64,
    len: u8,
}

impl Codeword {
    /// Codeword given to the only symbol of a single-symbol input.
    pub const SOLE: Self = Self { bits: 0, len: 1 };

    /// Create a codeword from its low `len` bits.
    ///
    /// Returns `None` if `len` is outside `1..=64` or `bits` has bits set
    /// above `len`.
    pub fn new(bits: u64, len: u8) -> Option<Self> {
        if len == 0 || len > MAX_CODEWORD_BITS {
            return None;
        }
        if len < 64 && bits >> len != 0 {
            return None;
        }
        Some(Self { bits, len })
    }

    /// The codeword bits, right-aligned.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Length in bits.
    pub fn bit_len(&self) -> u8 {
        self.len
    }

    /// Whether `self` is a prefix of (or equal to) `other`.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }

    /// Bits shifted to the top of a `u64`, for lexicographic ordering.
    fn left_aligned(&self) -> u64 {
        self.bits << (64 - u32::from(self.len))
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shift in (0..self.len).rev() {
            let bit = if (self.bits >> shift) & 1 == 1 { '1' } else { '0' };
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Symbol to codeword mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codebook<S> {
    codes: BTreeMap<S, Codeword>,
}

impl<S: Symbol> Codebook<S> {
    /// Derive codewords from a tree by walking root to every leaf.
    ///
    /// A single-leaf tree has no path; its symbol gets [`Codeword::SOLE`].
    /// Fails with [`HuffError::CodewordTooLong`] if a leaf is deeper than
    /// `max_bits`.
    pub fn from_tree(tree: &HuffmanTree<S>, max_bits: u8) -> Result<Self> {
        let mut codes = BTreeMap::new();
        let max_bits = max_bits.min(MAX_CODEWORD_BITS);

        if let Node::Leaf { symbol, .. } = *tree.node(tree.root()) {
            if max_bits < Codeword::SOLE.len {
                return Err(HuffError::CodewordTooLong {
                    length: usize::from(Codeword::SOLE.len),
                    max: max_bits,
                });
            }
            codes.insert(symbol, Codeword::SOLE);
            return Ok(Self { codes });
        }

        let mut stack = vec![(tree.root(), 0u64, 0u8)];

        while let Some((index, bits, depth)) = stack.pop() {
            match *tree.node(index) {
                Node::Leaf { symbol, .. } => {
                    codes.insert(symbol, Codeword { bits, len: depth });
                }
                Node::Internal { left, right, .. } => {
                    if depth >= max_bits {
                        return Err(HuffError::CodewordTooLong {
                            length: usize::from(depth) + 1,
                            max: max_bits,
                        });
                    }
                    stack.push((right, (bits << 1) | 1, depth + 1));
                    stack.push((left, bits << 1, depth + 1));
                }
            }
        }

        Ok(Self { codes })
    }

    /// Build the tree for `frequencies` and derive its codewords.
    pub fn from_frequencies(frequencies: &BTreeMap<S, u64>, max_bits: u8) -> Result<Self> {
        let tree = HuffmanTree::build(frequencies)?;
        Self::from_tree(&tree, max_bits)
    }

    /// An empty codebook (for empty input).
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// Codeword for `symbol`.
    pub fn get(&self, symbol: &S) -> Option<Codeword> {
        self.codes.get(symbol).copied()
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the codebook has no symbols.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (S, Codeword)> + '_ {
        self.codes.iter().map(|(&s, &c)| (s, c))
    }

    /// Shortest codeword length, or 0 when empty.
    pub fn min_codeword_len(&self) -> u8 {
        self.codes.values().map(Codeword::bit_len).min().unwrap_or(0)
    }

    /// Longest codeword length, or 0 when empty.
    pub fn max_codeword_len(&self) -> u8 {
        self.codes.values().map(Codeword::bit_len).max().unwrap_or(0)
    }

    /// Payload bits needed to code symbols with these frequencies.
    pub fn encoded_bit_len(&self, frequencies: &BTreeMap<S, u64>) -> u64 {
        frequencies
            .iter()
            .filter_map(|(s, &n)| self.get(s).map(|c| n * u64::from(c.bit_len())))
            .sum()
    }

    /// Whether no codeword is a prefix of another.
    ///
    /// After lexicographic sorting, a prefix sits directly before the
    /// codewords it prefixes, so comparing neighbours is enough.
    pub fn is_prefix_free(&self) -> bool {
        let mut sorted: Vec<Codeword> = self.codes.values().copied().collect();
        sorted.sort_unstable_by_key(|c| (c.left_aligned(), c.len));
        sorted
            .windows(2)
            .all(|w| !w[0].is_prefix_of(&w[1]) && !w[1].is_prefix_of(&w[0]))
    }

    /// Append the packed codewords of `symbols` to `writer`.
    ///
    /// Fails with [`HuffError::UnsupportedInputType`] if a symbol has no
    /// codeword in this book.
    pub fn pack(
        &self,
        symbols: impl IntoIterator<Item = S>,
        writer: &mut MsbBitWriter,
    ) -> Result<()> {
        for symbol in symbols {
            let code = self.get(&symbol).ok_or_else(|| {
                HuffError::unsupported_input(format!("symbol {:?} has no codeword", symbol))
            })?;
            writer.write_codeword(code);
        }
        Ok(())
    }

    /// Inverse mapping for the decoder.
    pub fn decode_table(&self) -> DecodeTable<S> {
        DecodeTable {
            symbols: self.codes.iter().map(|(&s, &c)| (c, s)).collect(),
            max_len: self.max_codeword_len(),
        }
    }

    /// Serialize the table (format in the module docs).
    pub fn write_to(&self, out: &mut Vec<u8>) {
        for (&symbol, code) in &self.codes {
            let len_pos = out.len();
            out.push(0);
            symbol.encode_into(out);
            out[len_pos] = (out.len() - len_pos - 1) as u8;

            out.push(code.len);
            let byte_len = usize::from(code.len).div_ceil(8);
            let padded = code.bits << (byte_len * 8 - usize::from(code.len));
            out.extend_from_slice(&padded.to_be_bytes()[8 - byte_len..]);
        }
    }

    /// Serialized table bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.codes.len() * (S::MAX_ENCODED_LEN + 3));
        self.write_to(&mut out);
        out
    }

    /// Parse a serialized table.
    ///
    /// `base_offset` is the position of `table` inside the container and is
    /// only used in error reports. Codewords longer than `max_bits` are
    /// rejected, as are duplicate symbols and tables that are not prefix-free.
    pub fn parse(table: &[u8], base_offset: usize, max_bits: u8) -> Result<Self> {
        let mut codes = BTreeMap::new();
        let mut pos = 0usize;
        let max_bits = max_bits.min(MAX_CODEWORD_BITS);
        let kind = S::DATA_TYPE;

        while pos < table.len() {
            let entry_start = base_offset + pos;

            let symbol_len = usize::from(table[pos]);
            pos += 1;
            if symbol_len == 0 || symbol_len > S::MAX_ENCODED_LEN {
                return Err(HuffError::malformed(
                    entry_start,
                    format!("invalid {} symbol length {}", kind, symbol_len),
                ));
            }
            let symbol_bytes = take(table, pos, symbol_len, base_offset, "symbol")?;
            let symbol = S::decode_from(symbol_bytes).ok_or_else(|| {
                HuffError::malformed(
                    base_offset + pos,
                    format!("invalid {} symbol {:02x?}", kind, symbol_bytes),
                )
            })?;
            pos += symbol_len;

            let code_len = take(table, pos, 1, base_offset, "codeword length")?[0];
            if code_len == 0 || code_len > max_bits {
                return Err(HuffError::malformed(
                    base_offset + pos,
                    format!("codeword length {} outside 1..={}", code_len, max_bits),
                ));
            }
            pos += 1;

            let byte_len = usize::from(code_len).div_ceil(8);
            let code_bytes = take(table, pos, byte_len, base_offset, "codeword")?;
            let padded = code_bytes
                .iter()
                .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
            let pad_bits = byte_len * 8 - usize::from(code_len);
            if pad_bits > 0 && padded & ((1u64 << pad_bits) - 1) != 0 {
                return Err(HuffError::malformed(
                    base_offset + pos,
                    "non-zero codeword padding",
                ));
            }
            pos += byte_len;

            let code = Codeword {
                bits: padded >> pad_bits,
                len: code_len,
            };
            if codes.insert(symbol, code).is_some() {
                return Err(HuffError::malformed(
                    entry_start,
                    format!("duplicate symbol {:?}", symbol),
                ));
            }
        }

        let book = Self { codes };
        if !book.is_prefix_free() {
            return Err(HuffError::malformed(
                base_offset,
                "codeword table is not prefix-free",
            ));
        }
        Ok(book)
    }
}

/// Borrow `n` table bytes at `pos`, or report where the table ran out.
fn take<'t>(
    table: &'t [u8],
    pos: usize,
    n: usize,
    base_offset: usize,
    what: &str,
) -> Result<&'t [u8]> {
    table.get(pos..pos + n).ok_or_else(|| {
        HuffError::malformed(
            base_offset + pos,
            format!(
                "{} truncated: need {} bytes, have {}",
                what,
                n,
                table.len().saturating_sub(pos)
            ),
        )
    })
}

/// Codeword to symbol mapping used while unpacking.
#[derive(Debug, Clone)]
pub struct DecodeTable<S> {
    symbols: HashMap<Codeword, S>,
    max_len: u8,
}

impl<S: Symbol> DecodeTable<S> {
    /// Symbol whose codeword is exactly the low `len` bits of `bits`.
    #[inline]
    pub fn lookup(&self, bits: u64, len: u8) -> Option<S> {
        self.symbols.get(&Codeword { bits, len }).copied()
    }

    /// Longest codeword length in the table.
    pub fn max_len(&self) -> u8 {
        self.max_len
    }
}
