use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs::DirEntry;
use std::io;
use std::path::Path;
use tokio::task;

use crate::models::{Entry, EntryKind};

use super::FileSystem;

/// `std::fs` backed filesystem. Children come back sorted by file name.
pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<Entry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || -> Result<Vec<Entry>> {
            let entries = std::fs::read_dir(&dir)?.map(|res| res.map(|entry| to_entry(&entry)));
            Ok(collect_sorted(entries)?)
        })
        .await
        .context("directory listing task failed")?
    }

    async fn is_dir(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }
}

/// Collects a listing in file-name order. Any entry that fails to read fails
/// the whole listing, so the directory is reported rather than half-listed.
fn collect_sorted<I>(entries: I) -> io::Result<Vec<Entry>>
where
    I: IntoIterator<Item = io::Result<Entry>>,
{
    let mut entries = entries.into_iter().collect::<io::Result<Vec<_>>>()?;
    entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(entries)
}

fn to_entry(entry: &DirEntry) -> Entry {
    Entry {
        name: entry.file_name().to_string_lossy().into_owned(),
        path: entry.path(),
        kind: entry_kind(entry),
    }
}

// Symlinks are classified by their target; dangling links count as files.
fn entry_kind(entry: &DirEntry) -> EntryKind {
    let is_dir = match entry.file_type() {
        Ok(file_type) if file_type.is_symlink() => std::fs::metadata(entry.path())
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false),
        Ok(file_type) => file_type.is_dir(),
        Err(_) => false,
    };

    if is_dir {
        EntryKind::Folder
    } else {
        EntryKind::File
    }
}
