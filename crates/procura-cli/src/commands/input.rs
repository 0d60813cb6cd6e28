//! Quote file loading shared by the extract, recommend and draft commands.

use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use procura_core::models::quote::{RawQuote, SubmissionMethod};

/// Expand files and glob patterns into quote paths, in argument order.
///
/// Plain paths are kept as given; patterns only contribute `.txt` files.
pub fn expand_inputs(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }

        let before = files.len();
        files.extend(
            glob(input)?
                .filter_map(|r| r.ok())
                .filter(|p| {
                    p.is_file()
                        && p.extension()
                            .and_then(|e| e.to_str())
                            .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
                }),
        );

        if files.len() == before {
            anyhow::bail!("No matching files found for pattern: {}", input);
        }
    }

    Ok(files)
}

/// Read quote files. Each quote's id is its file stem.
pub fn load_quotes(inputs: &[String], user: &str) -> anyhow::Result<Vec<RawQuote>> {
    let files = expand_inputs(inputs)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} quotes")?
            .progress_chars("=>-"),
    );

    let mut quotes = Vec::with_capacity(files.len());
    for path in &files {
        quotes.push(read_quote(path, user)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    debug!("Loaded {} quote files", quotes.len());
    Ok(quotes)
}

fn read_quote(path: &Path, user: &str) -> anyhow::Result<RawQuote> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;

    let id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(id);

    Ok(RawQuote::new(id, text)
        .with_filename(filename)
        .with_method(SubmissionMethod::Upload)
        .with_uploaded_by(user))
}
