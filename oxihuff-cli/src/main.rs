//! OxiHuff CLI - Huffman compression from the command line
//!
//! Compresses files into self-describing Huffman containers, restores them,
//! inspects container headers and round-trips sample files.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{InputMode, cmd_compress, cmd_decompress, cmd_info, cmd_test};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "Huffman compression - Pure Rust codec utility")]
#[command(long_about = "
OxiHuff compresses text and binary files with a Huffman code and stores them in
a self-describing container carrying the data type and codeword table.

Examples:
  oxihuff compress notes.txt
  oxihuff compress image.bmp -m binary -o image.huff
  oxihuff decompress notes.txt.huff
  oxihuff info notes.txt.huff --json
  oxihuff test samples/*.txt -v
  oxihuff completions bash
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a Huffman container
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (default: <INPUT>.huff)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How to interpret the input
        #[arg(short, long, value_enum, default_value = "auto")]
        mode: InputMode,

        /// Fail on empty input instead of writing an empty container
        #[arg(long)]
        reject_empty: bool,
    },

    /// Restore the original file from a Huffman container
    #[command(alias = "d")]
    Decompress {
        /// Container file
        input: PathBuf,

        /// Output file (default: INPUT without .huff, or INPUT.out)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show container header and codeword table summary
    #[command(alias = "i")]
    Info {
        /// Container file to inspect
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Round-trip files in memory and report compression ratios
    #[command(alias = "t")]
    Test {
        /// Files to test
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// How to interpret the inputs
        #[arg(short, long, value_enum, default_value = "auto")]
        mode: InputMode,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: u8) {
    let mut builder = match verbose {
        0 => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")),
        n => {
            let level = match n {
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            };
            let mut builder = env_logger::Builder::new();
            builder.filter_level(level);
            builder
        }
    };
    builder.format_timestamp(None);
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            mode,
            reject_empty,
        } => cmd_compress(&input, output.as_deref(), mode, reject_empty),
        Commands::Decompress { input, output } => cmd_decompress(&input, output.as_deref()),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Test { files, mode } => cmd_test(&files, mode, cli.verbose > 0),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "oxihuff", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compress() {
        let cli = Cli::try_parse_from(["oxihuff", "-vv", "compress", "in.txt", "-m", "binary"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Compress {
                input,
                output,
                mode,
                reject_empty,
            } => {
                assert_eq!(input, PathBuf::from("in.txt"));
                assert!(output.is_none());
                assert_eq!(mode, InputMode::Binary);
                assert!(!reject_empty);
            }
            _ => panic!("expected compress"),
        }
    }

    #[test]
    fn test_test_requires_files() {
        assert!(Cli::try_parse_from(["oxihuff", "test"]).is_err());
    }
}
