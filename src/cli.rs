use clap::Parser;
use std::path::PathBuf;

use crate::core::{OutputFormat, WalkOptions};

#[derive(Parser, Debug)]
#[command(name = "dirlist")]
#[command(about = "List files and folders in a directory", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the folder
    pub folder: PathBuf,

    /// Include subdirectories
    #[arg(short = 'R', long)]
    pub recursive: bool,

    /// Include hidden files and folders
    #[arg(short = 'H', long)]
    pub hidden: bool,

    /// Leave folders out of the output (they are still searched with -R)
    #[arg(short = 'F', long = "files-only")]
    pub files_only: bool,

    /// Output format; asked interactively when omitted
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl From<&Cli> for WalkOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            include_hidden: cli.hidden,
            recursive: cli.recursive,
            files_only: cli.files_only,
        }
    }
}
