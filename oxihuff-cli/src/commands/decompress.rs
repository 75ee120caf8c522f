//! Decompress command implementation.

use crate::utils::decompressed_path;
use log::info;
use oxihuff_core::decompress;
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let container = std::fs::read(input)?;
    let decoded = decompress(&container)?;
    info!(
        "decoded {} bytes of {} from {}",
        decoded.len(),
        decoded.data_type(),
        input.display()
    );

    let output = output.map_or_else(|| decompressed_path(input), Path::to_path_buf);
    std::fs::write(&output, decoded.as_bytes())?;

    println!(
        "{} -> {} ({}, {} bytes)",
        input.display(),
        output.display(),
        decoded.data_type(),
        decoded.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxihuff_core::compress;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("oxihuff-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_decompress_appends_out_suffix() {
        let input = temp_path("cmd-container.bin");
        std::fs::write(&input, compress(b"\x00\x00\x07").unwrap()).unwrap();

        cmd_decompress(&input, None).unwrap();
        let output = decompressed_path(&input);
        assert!(output.to_string_lossy().ends_with(".bin.out"));
        assert_eq!(std::fs::read(&output).unwrap(), vec![0, 0, 7]);

        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_decompress_explicit_output() {
        let input = temp_path("cmd-explicit.huff");
        let output = temp_path("cmd-explicit.txt");
        std::fs::write(&input, compress("héllo").unwrap()).unwrap();

        cmd_decompress(&input, Some(output.as_path())).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "héllo");

        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_decompress_rejects_garbage() {
        let input = temp_path("cmd-garbage.huff");
        std::fs::write(&input, b"not a container").unwrap();
        assert!(cmd_decompress(&input, None).is_err());
        assert!(!decompressed_path(&input).exists());
        std::fs::remove_file(&input).unwrap();
    }
}
