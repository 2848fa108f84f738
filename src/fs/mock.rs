use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::Entry;

use super::FileSystem;

/// What a scripted directory yields when listed.
#[derive(Clone, Debug)]
enum Script {
    Entries(Vec<Entry>),
    Unreadable(String),
    /// Some children read fine, then the listing broke off.
    Interrupted { read: Vec<Entry>, message: String },
}

/// Scripted filesystem for walker tests.
///
/// Only directories are modelled: every path given a listing is a directory
/// and every other path is treated as a file.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    dirs: HashMap<PathBuf, Script>,
    listed: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<Entry>) {
        self.script(dir.into(), Script::Entries(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        self.script(dir.into(), Script::Unreadable(message.into()));
    }

    /// `dir` yields `read` and then fails, the way a directory removed or
    /// revoked mid-read behaves.
    pub fn set_interrupted(
        &self,
        dir: impl Into<PathBuf>,
        read: Vec<Entry>,
        message: impl Into<String>,
    ) {
        let message = message.into();
        self.script(dir.into(), Script::Interrupted { read, message });
    }

    /// Directories passed to `read_dir`, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.state.lock().expect("mock fs lock").listed.clone()
    }

    fn script(&self, dir: PathBuf, script: Script) {
        let mut state = self.state.lock().expect("mock fs lock");
        state.dirs.insert(dir, script);
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<Entry>> {
        let mut state = self.state.lock().expect("mock fs lock");
        state.listed.push(dir.to_path_buf());

        match state.dirs.get(dir) {
            Some(Script::Entries(entries)) => Ok(entries.clone()),
            Some(Script::Unreadable(message)) => Err(anyhow!("{message}")),
            // Partially read children are dropped, as RealFileSystem does.
            Some(Script::Interrupted { read, message }) => Err(anyhow!(
                "{message} after {} entries",
                read.len()
            )),
            None => Err(anyhow!("no mock listing for {}", dir.display())),
        }
    }

    /// True for any path scripted with a listing, including unreadable ones.
    async fn is_dir(&self, path: &Path) -> bool {
        let state = self.state.lock().expect("mock fs lock");
        state.dirs.contains_key(path)
    }
}
