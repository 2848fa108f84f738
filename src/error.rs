use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The root is missing or is not a directory. Ends the run.
    #[error("Provided path is not a directory")]
    InvalidRoot(PathBuf),
    /// A directory could not be listed mid-walk. The walk carries on.
    #[error("cannot read directory {}: {message}", path.display())]
    DirectoryAccess { path: PathBuf, message: String },
}

