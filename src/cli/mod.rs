use clap::Parser;
use std::path::PathBuf;

const EXIT_CODES_HELP: &str = "Exit codes:
  0  success
  1  I/O error
  2  usage error (historical note: the original tool used 1)
  3  scratch workspace could not be created
  4  unsupported or missing archive suffix
  5  external archiver tool failed
  6  swap failed, original archive intact
  7  swap failed after the original was removed; the rebuilt archive
     remains at <archive>_temp";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_long_help = EXIT_CODES_HELP)]
pub struct Args {
    /// Path to the archive to normalize (.tar, .zip or .gz).
    #[arg(required = true)]
    pub archive: PathBuf,

    /// Substring matched against file names; every file whose name contains
    /// it is stamped with the newest matched modification time.
    #[arg(required = true)]
    pub filter: String,

    /// Keep the scratch workspace on disk after the run for diagnosis.
    #[arg(long)]
    pub keep_temp: bool,

    /// Enable debug-level diagnostics on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command-line arguments using `clap`.
///
/// On a usage error clap prints the message to stderr and exits the process
/// with code 2, so this never returns in that case.
pub fn run() -> Args {
    Args::parse()
}
