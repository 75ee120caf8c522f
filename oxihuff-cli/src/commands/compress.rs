//! Compress command implementation.

use super::InputMode;
use crate::utils::{compressed_path, savings_percent};
use log::info;
use oxihuff_core::{HuffConfig, compress_with};
use std::path::Path;

pub fn cmd_compress(
    input: &Path,
    output: Option<&Path>,
    mode: InputMode,
    reject_empty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(input)?;
    let data = mode.resolve(&bytes)?;
    let config = HuffConfig::DEFAULT.with_reject_empty(reject_empty);

    info!("compressing {} as {}", input.display(), data.data_type());
    let compressed = compress_with(data, config)?;

    let output = output.map_or_else(|| compressed_path(input), Path::to_path_buf);
    std::fs::write(&output, &compressed)?;

    println!(
        "{} -> {} ({}, {} -> {} bytes, {:.1}% saved)",
        input.display(),
        output.display(),
        data.data_type(),
        bytes.len(),
        compressed.len(),
        savings_percent(bytes.len(), compressed.len())
    );

    Ok(())
}
