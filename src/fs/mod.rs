mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::Entry;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Lists the immediate children of `dir`.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<Entry>>;

    /// True when `path` exists and is (or links to) a directory.
    async fn is_dir(&self, path: &Path) -> bool;
}
