use std::path::PathBuf;
use std::process::ExitStatus;

/// The primary error type for all operations in the `stampack` crate.
#[derive(Debug)]
pub enum StampackError {
    /// An I/O error occurred, typically while reading or writing a file.
    /// Includes the path where the error happened.
    Io { source: std::io::Error, path: PathBuf },

    /// The archive's filename suffix is missing or is not one of the
    /// supported formats (`.tar`, `.zip`, `.gz`).
    UnsupportedFormat(PathBuf),

    /// The scratch workspace could not be created.
    Workspace(std::io::Error),

    /// An external archiver tool could not be spawned at all, usually
    /// because it is not installed or not on PATH.
    ToolSpawn { tool: &'static str, source: std::io::Error },

    /// An external archiver tool ran but exited with a nonzero status.
    ToolFailed { tool: &'static str, status: ExitStatus },

    /// The original archive could not be removed during the swap.
    /// The original archive is still intact on disk.
    Commit { path: PathBuf, source: std::io::Error },

    /// The original archive was deleted but the rebuilt archive could not be
    /// renamed into its place. The normalized data still exists at `rebuilt`;
    /// the original name is vacated.
    CommitVacated { original: PathBuf, rebuilt: PathBuf, source: std::io::Error },
}

impl StampackError {
    /// Maps each failure kind to a distinct nonzero process exit code.
    /// Code 2 is reserved for usage errors reported by clap.
    pub fn exit_code(&self) -> u8 {
        match self {
            StampackError::Io { .. } => 1,
            StampackError::Workspace(_) => 3,
            StampackError::UnsupportedFormat(_) => 4,
            StampackError::ToolSpawn { .. } | StampackError::ToolFailed { .. } => 5,
            StampackError::Commit { .. } => 6,
            StampackError::CommitVacated { .. } => 7,
        }
    }
}

impl std::fmt::Display for StampackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StampackError::Io { source, path } => write!(f, "I/O error on path '{}': {}", path.display(), source),
            StampackError::UnsupportedFormat(path) => write!(f, "Unsupported or missing archive suffix on '{}' (expected .tar, .zip or .gz)", path.display()),
            StampackError::Workspace(e) => write!(f, "Could not create scratch workspace: {}", e),
            StampackError::ToolSpawn { tool, source } => write!(f, "Could not spawn '{}' (is it installed?): {}", tool, source),
            StampackError::ToolFailed { tool, status } => write!(f, "'{}' exited with {}", tool, status),
            StampackError::Commit { path, source } => write!(f, "Could not remove original archive '{}' (original left intact): {}", path.display(), source),
            StampackError::CommitVacated { original, rebuilt, source } => write!(
                f,
                "Original archive '{}' was removed but the rebuilt archive could not be renamed into its place: {}. The normalized archive still exists at '{}'",
                original.display(),
                source,
                rebuilt.display()
            ),
        }
    }
}

impl std::error::Error for StampackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StampackError::Io { source, .. } => Some(source),
            StampackError::Workspace(e) => Some(e),
            StampackError::ToolSpawn { source, .. } => Some(source),
            StampackError::Commit { source, .. } => Some(source),
            StampackError::CommitVacated { source, .. } => Some(source),
            _ => None,
        }
    }
}
