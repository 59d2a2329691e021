//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Error type for per-file jobs, which run on rayon worker threads.
pub type JobError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of processing one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// File that was read.
    pub input: PathBuf,
    /// File that was written, if any.
    pub output: Option<PathBuf>,
    /// Size of the input in bytes.
    pub bytes_in: u64,
    /// Size of the output in bytes.
    pub bytes_out: u64,
}

impl FileReport {
    /// Output size as a percentage of input size.
    pub fn ratio(&self) -> f64 {
        if self.bytes_in == 0 {
            0.0
        } else {
            self.bytes_out as f64 / self.bytes_in as f64 * 100.0
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Only fails if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Run `job` on every file in parallel.
///
/// Each file is an independent compress or decompress call, so nothing is
/// shared between jobs. Results come back in input order.
pub fn run_parallel<F>(
    files: &[PathBuf],
    progress: bool,
    job: F,
) -> Vec<(PathBuf, Result<FileReport, JobError>)>
where
    F: Fn(&Path) -> Result<FileReport, JobError> + Sync,
{
    let pb = create_progress_bar(files.len() as u64, progress);
    let results = files
        .par_iter()
        .map(|file| {
            let result = job(file);
            pb.inc(1);
            (file.clone(), result)
        })
        .collect();
    pb.finish_and_clear();
    results
}

/// Print per-file results and turn any failure into an error.
pub fn summarize(
    verb: &str,
    results: Vec<(PathBuf, Result<FileReport, JobError>)>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut failed = 0usize;
    for (file, result) in &results {
        match result {
            Ok(report) => {
                let target = report
                    .output
                    .as_deref()
                    .map(|p| format!(" -> {}", p.display()))
                    .unwrap_or_default();
                println!(
                    "{}{}: {} -> {} bytes ({:.1}%)",
                    report.input.display(),
                    target,
                    report.bytes_in,
                    report.bytes_out,
                    report.ratio()
                );
            }
            Err(e) => {
                failed += 1;
                eprintln!("  FAILED: {} - {}", file.display(), e);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} files failed to {}", failed, results.len(), verb).into());
    }
    Ok(())
}

/// Output path for compressing `input`: the file name plus `suffix`.
pub fn compressed_path(input: &Path, output_dir: Option<&Path>, suffix: &str) -> PathBuf {
    let mut name = input.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    place(input, output_dir, name.into())
}

/// Output path for decompressing `input`: the file name without `suffix`,
/// or with `.out` appended if it does not end in `suffix`.
pub fn decompressed_path(input: &Path, output_dir: Option<&Path>, suffix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match name.strip_suffix(suffix) {
        Some(stem) if !stem.is_empty() && !suffix.is_empty() => stem.to_string(),
        _ => format!("{name}.out"),
    };
    place(input, output_dir, stem.into())
}

fn place(input: &Path, output_dir: Option<&Path>, name: PathBuf) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Refuse to clobber an existing file unless `force` is set.
pub fn check_overwrite(path: &Path, force: bool) -> Result<(), JobError> {
    if !force && path.exists() {
        return Err(format!("{} already exists (use --force to overwrite)", path.display()).into());
    }
    Ok(())
}

/// Check the output paths of a whole batch before any job runs.
///
/// Fails if an output would replace one of the inputs, or if two inputs map
/// to the same output.
pub fn check_output_paths<F>(
    files: &[PathBuf],
    output_for: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Fn(&Path) -> PathBuf,
{
    let inputs: HashSet<PathBuf> = files.iter().map(|f| resolve(f)).collect();
    let mut outputs = HashSet::with_capacity(files.len());
    for input in files {
        let output = output_for(input);
        let key = resolve(&output);
        if inputs.contains(&key) {
            return Err(format!(
                "{} would overwrite an input file (check --suffix)",
                output.display()
            )
            .into());
        }
        if !outputs.insert(key) {
            return Err(format!(
                "{} would be written by more than one input",
                output.display()
            )
            .into());
        }
    }
    Ok(())
}

/// Best-effort absolute form of `path`. Paths that do not exist yet are
/// resolved through their parent directory.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(full) = path.canonicalize() {
        return full;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            parent
                .canonicalize()
                .map(|dir| dir.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// Remove a partially written output after a failure.
pub fn discard_output(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        tracing::warn!(path = %path.display(), error = %e, "could not remove partial output");
    }
}
