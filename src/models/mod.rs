mod entry;
mod listing;

pub use entry::{Entry, EntryKind};
pub use listing::Listing;
