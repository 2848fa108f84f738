use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde_json::json;

use crate::error::Error;
use crate::models::{Entry, EntryKind};

/// How a listing is printed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of {name, path, type}
    #[value(alias = "json")]
    Structured,
    /// One `[D]`/`[F]` line per entry
    List,
}

pub fn write_entries<W: Write>(
    writer: &mut W,
    entries: &[Entry],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Structured => write_structured(writer, entries),
        OutputFormat::List => write_list(writer, entries),
    }
}

pub fn write_structured<W: Write>(writer: &mut W, entries: &[Entry]) -> Result<()> {
    // Serialized up front so a failure never leaves half an array on the writer.
    let json = serde_json::to_string_pretty(entries).context("failed to serialize entries")?;
    writeln!(writer, "{json}")?;
    Ok(())
}

pub fn write_list<W: Write>(writer: &mut W, entries: &[Entry]) -> Result<()> {
    for entry in entries {
        let marker = match entry.kind {
            EntryKind::Folder => "[D]",
            EntryKind::File => "[F]",
        };
        writeln!(writer, "{marker} {}", entry.path.display())?;
    }
    Ok(())
}

/// Writes `error` as a JSON object; access errors also name the directory.
pub fn write_error<W: Write>(writer: &mut W, error: &Error) -> Result<()> {
    let value = match error {
        Error::InvalidRoot(_) => json!({ "error": error.to_string() }),
        Error::DirectoryAccess { path, message } => json!({
            "error": message,
            "path": path.to_string_lossy(),
        }),
    };
    serde_json::to_writer_pretty(&mut *writer, &value).context("failed to serialize error")?;
    writeln!(writer)?;
    Ok(())
}
