//! Binary entry point: logging setup, base-directory resolution, exit code.

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flowtag=info".into()),
        )
        .init();

    // Base directory is the first argument if given, else the current
    // directory. Inputs and outputs live at fixed paths beneath it.
    let base = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    match flowtag::run(&base) {
        Ok(summary) => {
            println!(
                "Tag counts and port/protocol counts generated: {} records classified, {} untagged.",
                summary.accepted_records(),
                summary.untagged_count
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
