//! Main entry point for the stampack CLI app

use stampack::{cli, pipeline};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::run();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = pipeline::process_archive(&args.archive, &args.filter, args.keep_temp) {
        eprintln!("Error: {}", e);
        return ExitCode::from(e.exit_code());
    }
    ExitCode::SUCCESS
}
