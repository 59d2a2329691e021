//! OxiHuff CLI - The Oxidized Huffman coder
//!
//! Compresses and decompresses files with tree-header Huffman coding.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_compress, cmd_decompress, cmd_info, cmd_test};
use std::path::PathBuf;

/// Default suffix for compressed files.
const DEFAULT_SUFFIX: &str = ".hf";

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "The Oxidized Huffman coder - Pure Rust Huffman compressor")]
#[command(long_about = "
OxiHuff compresses files with a per-file Huffman code. The code tree is
stored at the start of each compressed file, so no side information is
needed to decompress.

Examples:
  oxihuff compress notes.txt              # writes notes.txt.hf
  oxihuff compress -o out/ a.bin b.bin    # parallel, into out/
  oxihuff decompress notes.txt.hf         # writes notes.txt
  oxihuff test notes.txt.hf
  oxihuff info --codes notes.txt.hf

Set RUST_LOG (e.g. RUST_LOG=oxihuff_codec=trace) for detailed logs.
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress files
    #[command(alias = "c")]
    Compress {
        /// Files to compress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory (next to each input if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suffix appended to compressed file names
        #[arg(short, long, default_value = DEFAULT_SUFFIX)]
        suffix: String,

        /// Overwrite existing output files
        #[arg(short, long)]
        force: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Decompress files
    #[command(alias = "d", alias = "x")]
    Decompress {
        /// Files to decompress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory (next to each input if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suffix stripped from compressed file names
        #[arg(short, long, default_value = DEFAULT_SUFFIX)]
        suffix: String,

        /// Overwrite existing output files
        #[arg(short, long)]
        force: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Verify that compressed files decode completely
    #[command(alias = "t")]
    Test {
        /// Files to test
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show the code tree stored in a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        file: PathBuf,

        /// Print the code of every symbol
        #[arg(short, long)]
        codes: bool,

        /// Print the tree structure
        #[arg(long)]
        tree: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            files,
            output,
            suffix,
            force,
            progress,
        } => cmd_compress(&files, output.as_deref(), &suffix, force, progress),
        Commands::Decompress {
            files,
            output,
            suffix,
            force,
            progress,
        } => cmd_decompress(&files, output.as_deref(), &suffix, force, progress),
        Commands::Test { files } => cmd_test(&files),
        Commands::Info {
            file,
            codes,
            tree,
            json,
        } => cmd_info(&file, codes, tree, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
