//! Self-describing container format.
//!
//! ```text
//! +-----+-----------+-----------------+-----------+---------------------+
//! | tag | table len | codeword table  | bit len   | payload (padded)    |
//! | u8  | u32 BE    | table len bytes | u32 BE    | ceil(bit len / 8) B |
//! +-----+-----------+-----------------+-----------+---------------------+
//! ```
//!
//! The payload runs to the end of the container. Its byte count must match
//! the declared bit length exactly; anything else means the container was
//! truncated or has trailing garbage.

use crate::codebook::Codebook;
use crate::config::MAX_CODEWORD_BITS;
use crate::data::DataType;
use crate::error::{HuffError, Result};
use crate::symbol::Symbol;

/// Size of the data-type tag.
pub const TAG_SIZE: usize = 1;

/// Size of each length field.
pub const LENGTH_FIELD_SIZE: usize = 4;

/// Smallest valid container: tag plus two zero length fields.
pub const MIN_CONTAINER_SIZE: usize = TAG_SIZE + 2 * LENGTH_FIELD_SIZE;

/// Borrowed view of a parsed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container<'a> {
    /// Data type from the tag byte.
    pub data_type: DataType,
    /// Serialized codeword table.
    pub table: &'a [u8],
    /// Byte offset of the table within the container.
    pub table_offset: usize,
    /// Number of meaningful payload bits.
    pub bit_len: u32,
    /// Packed payload including padding.
    pub payload: &'a [u8],
}

impl<'a> Container<'a> {
    /// Parse the container fields in order.
    ///
    /// Only the framing is validated here; the table is parsed by the
    /// decoder once the symbol type is known.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(bytes);

        let data_type = DataType::from_tag(cursor.read_u8("data-type tag")?)?;

        let table_len = cursor.read_u32_be("table length")? as usize;
        let table_offset = cursor.position();
        let table = cursor.take(table_len, "codeword table")?;

        let bit_len = cursor.read_u32_be("payload bit length")?;
        let payload_offset = cursor.position();
        let payload = cursor.rest();

        let expected = (bit_len as usize).div_ceil(8);
        if payload.len() != expected {
            return Err(HuffError::malformed(
                payload_offset,
                format!(
                    "payload is {} bytes, bit length {} needs {}",
                    payload.len(),
                    bit_len,
                    expected
                ),
            ));
        }

        if table.is_empty() && bit_len != 0 {
            return Err(HuffError::malformed(
                table_offset,
                format!("{} payload bits but empty codeword table", bit_len),
            ));
        }

        Ok(Self {
            data_type,
            table,
            table_offset,
            bit_len,
            payload,
        })
    }

    /// Total container size in bytes.
    pub fn encoded_len(&self) -> usize {
        MIN_CONTAINER_SIZE + self.table.len() + self.payload.len()
    }
}

/// Serialize a container.
///
/// Fails with [`HuffError::LengthOverflow`] if the table or the bit length
/// does not fit its 32-bit field.
pub fn write_container(
    data_type: DataType,
    table: &[u8],
    bit_len: u64,
    payload: &[u8],
) -> Result<Vec<u8>> {
    let table_len = u32::try_from(table.len())
        .map_err(|_| HuffError::length_overflow("codeword table", table.len() as u64))?;
    let bit_len =
        u32::try_from(bit_len).map_err(|_| HuffError::length_overflow("payload bit", bit_len))?;
    debug_assert_eq!(payload.len(), (bit_len as usize).div_ceil(8));

    let mut out = Vec::with_capacity(MIN_CONTAINER_SIZE + table.len() + payload.len());
    out.push(data_type.tag());
    out.extend_from_slice(&table_len.to_be_bytes());
    out.extend_from_slice(table);
    out.extend_from_slice(&bit_len.to_be_bytes());
    out.extend_from_slice(payload);
    Ok(out)
}

/// Summary of a container, for inspection tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    /// Data type from the tag byte.
    pub data_type: DataType,
    /// Total container size in bytes.
    pub container_len: usize,
    /// Serialized table size in bytes.
    pub table_len: usize,
    /// Number of distinct symbols in the table.
    pub symbol_count: usize,
    /// Shortest codeword length (0 for an empty table).
    pub min_codeword_len: u8,
    /// Longest codeword length (0 for an empty table).
    pub max_codeword_len: u8,
    /// Meaningful payload bits.
    pub bit_len: u32,
    /// Payload size in bytes, including padding.
    pub payload_len: usize,
}

impl ContainerInfo {
    /// Zero bits appended to fill the last payload byte.
    pub fn padding_bits(&self) -> usize {
        self.payload_len * 8 - self.bit_len as usize
    }
}

/// Parse a container's framing and table without decoding the payload.
pub fn inspect(bytes: &[u8]) -> Result<ContainerInfo> {
    let container = Container::parse(bytes)?;
    let (symbol_count, min_codeword_len, max_codeword_len) = match container.data_type {
        DataType::Text => table_stats::<char>(&container)?,
        DataType::Binary => table_stats::<u8>(&container)?,
    };

    Ok(ContainerInfo {
        data_type: container.data_type,
        container_len: bytes.len(),
        table_len: container.table.len(),
        symbol_count,
        min_codeword_len,
        max_codeword_len,
        bit_len: container.bit_len,
        payload_len: container.payload.len(),
    })
}

fn table_stats<S: Symbol>(container: &Container<'_>) -> Result<(usize, u8, u8)> {
    let book = Codebook::<S>::parse(container.table, container.table_offset, MAX_CODEWORD_BITS)?;
    Ok((book.len(), book.min_codeword_len(), book.max_codeword_len()))
}

/// Forward-only reader over the container bytes.
struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, n: usize, field: &str) -> Result<&'a [u8]> {
        let available = self.data.len() - self.pos;
        if n > available {
            return Err(HuffError::malformed(
                self.pos,
                format!("{} truncated: need {} bytes, have {}", field, n, available),
            ));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u8(&mut self, field: &str) -> Result<u8> {
        Ok(self.take(1, field)?[0])
    }

    fn read_u32_be(&mut self, field: &str) -> Result<u32> {
        let bytes = self.take(LENGTH_FIELD_SIZE, field)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn rest(&mut self) -> &'a [u8] {
        let slice = &self.data[self.pos..];
        self.pos = self.data.len();
        slice
    }
}
