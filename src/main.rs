use std::io;
use std::process::ExitCode;

use clap::Parser;
use dirlist::Cli;
use dirlist::fs::RealFileSystem;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dirlist::logging::init_logging();
    let cli = Cli::parse();

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    let mut diag = io::stderr().lock();

    match dirlist::run(&RealFileSystem, &cli, &mut input, &mut out, &mut diag).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dirlist: {err:#}");
            ExitCode::from(1)
        }
    }
}
