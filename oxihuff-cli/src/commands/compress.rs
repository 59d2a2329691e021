//! Compress command implementation.

use crate::utils::{
    FileReport, JobError, check_output_paths, check_overwrite, compressed_path, discard_output,
    run_parallel, summarize,
};
use oxihuff_codec::HuffEncoder;
use oxihuff_core::{BitReader, BitWriter};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn cmd_compress(
    files: &[PathBuf],
    output_dir: Option<&Path>,
    suffix: &str,
    force: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    check_output_paths(files, |input| compressed_path(input, output_dir, suffix))?;

    let results = run_parallel(files, progress, |input| {
        let output = compressed_path(input, output_dir, suffix);
        compress_file(input, &output, force)
    });
    summarize("compress", results)
}

fn compress_file(input: &Path, output: &Path, force: bool) -> Result<FileReport, JobError> {
    check_overwrite(output, force)?;

    let bytes_in = input.metadata()?.len();
    let mut reader = BitReader::new(BufReader::new(File::open(input)?));
    let mut writer = BitWriter::new(BufWriter::new(File::create(output)?));

    let stats = match HuffEncoder::new().compress(&mut reader, &mut writer) {
        Ok(stats) => stats,
        Err(e) => {
            drop(writer);
            discard_output(output);
            return Err(e.into());
        }
    };

    info!(
        input = %input.display(),
        symbols = stats.symbols,
        leaves = stats.leaves,
        header_bits = stats.header_bits,
        body_bits = stats.body_bits,
        "compressed"
    );

    Ok(FileReport {
        input: input.to_path_buf(),
        output: Some(output.to_path_buf()),
        bytes_in,
        bytes_out: stats.output_bytes(),
    })
}
