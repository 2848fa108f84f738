use crate::error::Error;

use super::Entry;

/// Result of a walk: entries in traversal order plus the directories that
/// could not be read.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Listing {
    pub entries: Vec<Entry>,
    pub errors: Vec<Error>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
