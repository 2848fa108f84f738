pub mod app;
pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod logging;
pub mod models;

pub use app::run;
pub use cli::Cli;
pub use error::Error;
