use std::path::Path;
use std::vec;

use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::models::{Entry, EntryKind, Listing};

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct WalkOptions {
    /// Whether to list entries whose name starts with '.'
    pub include_hidden: bool,
    /// Whether to descend into subdirectories
    pub recursive: bool,
    /// Whether to leave folder records out (folders are still descended into)
    pub files_only: bool,
}

/// Checks that `root` exists and is a directory before any walk starts.
pub async fn validate_root<F: FileSystem>(fs: &F, root: &Path) -> Result<()> {
    if fs.is_dir(root).await {
        Ok(())
    } else {
        Err(Error::InvalidRoot(root.to_path_buf()))
    }
}

/// Walk `root` depth-first, collecting entries in traversal order.
///
/// A directory that cannot be listed is recorded in [`Listing::errors`] and
/// skipped; everything collected before and after it is kept.
pub async fn walk_dir<F: FileSystem>(fs: &F, root: &Path, options: &WalkOptions) -> Listing {
    let mut listing = Listing::default();
    let mut pending: Vec<vec::IntoIter<Entry>> = Vec::new();

    if let Some(children) = list_children(fs, root, &mut listing).await {
        pending.push(children);
    }

    // The top of the stack is the directory currently being read; pushing a
    // subdirectory's children finishes that subtree before the next sibling.
    while let Some(children) = pending.last_mut() {
        let Some(entry) = children.next() else {
            pending.pop();
            continue;
        };

        if !options.include_hidden && entry.is_hidden() {
            continue;
        }

        match entry.kind {
            EntryKind::File => listing.entries.push(entry),
            EntryKind::Folder => {
                let dir = entry.path.clone();
                if !options.files_only {
                    listing.entries.push(entry);
                }

                if options.recursive
                    && let Some(grandchildren) = list_children(fs, &dir, &mut listing).await
                {
                    pending.push(grandchildren);
                }
            }
        }
    }

    tracing::info!(
        root = %root.display(),
        entries = listing.entries.len(),
        errors = listing.errors.len(),
        "walk finished"
    );
    listing
}

async fn list_children<F: FileSystem>(
    fs: &F,
    dir: &Path,
    listing: &mut Listing,
) -> Option<vec::IntoIter<Entry>> {
    tracing::debug!(dir = %dir.display(), "listing directory");

    match fs.read_dir(dir).await {
        Ok(entries) => Some(entries.into_iter()),
        Err(err) => {
            tracing::debug!(dir = %dir.display(), error = %err, "directory could not be listed");
            listing.errors.push(Error::DirectoryAccess {
                path: dir.to_path_buf(),
                message: err.to_string(),
            });
            None
        }
    }
}
