//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension given to container files.
pub const CONTAINER_EXTENSION: &str = "huff";

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    let template = "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";
    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }
    pb
}

/// Default output path for `compress`: `<input>.huff`.
pub fn compressed_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(CONTAINER_EXTENSION);
    PathBuf::from(name)
}

/// Default output path for `decompress`: strip `.huff`, or append `.out`.
pub fn decompressed_path(input: &Path) -> PathBuf {
    match input.extension() {
        Some(ext) if ext == CONTAINER_EXTENSION => input.with_extension(""),
        _ => {
            let mut name = OsString::from(input.as_os_str());
            name.push(".out");
            PathBuf::from(name)
        }
    }
}

/// Space saved, as a percentage of the original size.
pub fn savings_percent(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        assert_eq!(
            compressed_path(Path::new("dir/notes.txt")),
            PathBuf::from("dir/notes.txt.huff")
        );
        assert_eq!(
            decompressed_path(Path::new("dir/notes.txt.huff")),
            PathBuf::from("dir/notes.txt")
        );
        assert_eq!(
            decompressed_path(Path::new("blob.bin")),
            PathBuf::from("blob.bin.out")
        );
    }

    #[test]
    fn test_savings_percent() {
        assert_eq!(savings_percent(0, 9), 0.0);
        assert!((savings_percent(100, 25) - 75.0).abs() < 1e-9);
        assert!(savings_percent(10, 20) < 0.0);
    }
}
