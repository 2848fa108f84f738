use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

/// One file or folder found during a walk.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Entry {
    pub name: String,
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl Entry {
    /// Builds an entry whose name is the last component of `path`.
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.as_os_str().to_string_lossy().into_owned());
        Self { name, path, kind }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::File)
    }

    pub fn folder(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::Folder)
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

// Non-UTF-8 bytes become U+FFFD, matching how `name` is built.
fn serialize_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}
