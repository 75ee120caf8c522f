//! Info command implementation.

use crate::utils::savings_percent;
use oxihuff_core::{ContainerInfo, inspect};
use serde::Serialize;
use std::path::Path;

/// JSON view of a container.
#[derive(Debug, Serialize)]
struct InfoOutput {
    file: String,
    data_type: &'static str,
    container_size: usize,
    table_size: usize,
    symbols: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    codeword_bits: Option<[u8; 2]>,
    payload_bits: u32,
    payload_size: usize,
    padding_bits: usize,
}

impl InfoOutput {
    fn new(path: &Path, info: &ContainerInfo) -> Self {
        Self {
            file: path.display().to_string(),
            data_type: info.data_type.name(),
            container_size: info.container_len,
            table_size: info.table_len,
            symbols: info.symbol_count,
            codeword_bits: (info.symbol_count > 0)
                .then_some([info.min_codeword_len, info.max_codeword_len]),
            payload_bits: info.bit_len,
            payload_size: info.payload_len,
            padding_bits: info.padding_bits(),
        }
    }
}

pub fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(input)?;
    let info = inspect(&bytes)?;

    if json {
        let output = InfoOutput::new(input, &info);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Container Information");
    println!("=====================");
    println!("File: {}", input.display());
    println!("Data type: {}", info.data_type);
    println!("Size: {} bytes", info.container_len);
    println!();
    println!("Codeword table:");
    println!("  Size: {} bytes", info.table_len);
    println!("  Symbols: {}", info.symbol_count);
    if info.symbol_count > 0 {
        println!(
            "  Codeword length: {}..={} bits",
            info.min_codeword_len, info.max_codeword_len
        );
    }
    println!();
    println!("Payload:");
    println!("  Bits: {}", info.bit_len);
    println!(
        "  Size: {} bytes ({} padding bits)",
        info.payload_len,
        info.padding_bits()
    );
    println!(
        "  Share of container: {:.1}%",
        100.0 - savings_percent(info.container_len, info.payload_len)
    );

    Ok(())
}
