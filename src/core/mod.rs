pub mod prompt;
pub mod render;
pub mod walk;

pub use prompt::choose_format;
pub use render::{OutputFormat, write_entries, write_error};
pub use walk::{WalkOptions, validate_root, walk_dir};
