use std::io::{BufRead, Write};

use anyhow::Result;

use crate::cli::Cli;
use crate::core::{WalkOptions, choose_format, validate_root, walk_dir, write_entries, write_error};
use crate::fs::FileSystem;

pub const NO_RESULTS: &str = "No files or folders found.";

/// Runs one invocation: validate, walk, report, then print in the chosen format.
///
/// Data goes to `out`; the prompt and directory access errors go to `diag`.
/// An invalid root is reported on `out` and is not an `Err`.
pub async fn run<F, R, W, D>(
    fs: &F,
    cli: &Cli,
    input: &mut R,
    out: &mut W,
    diag: &mut D,
) -> Result<()>
where
    F: FileSystem,
    R: BufRead,
    W: Write,
    D: Write,
{
    if let Err(err) = validate_root(fs, &cli.folder).await {
        tracing::debug!(root = %cli.folder.display(), "root rejected");
        return write_error(out, &err);
    }

    let listing = walk_dir(fs, &cli.folder, &WalkOptions::from(cli)).await;
    for error in &listing.errors {
        write_error(diag, error)?;
    }

    if listing.is_empty() {
        writeln!(out, "{NO_RESULTS}")?;
        return Ok(());
    }

    let format = match cli.format {
        Some(format) => format,
        None => choose_format(input, diag)?,
    };
    write_entries(out, &listing.entries, format)?;
    out.flush()?;
    Ok(())
}
