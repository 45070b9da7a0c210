//! Scratch workspace management.
//!
//! Each run stages archive contents in a unique directory under the platform
//! temp dir, so concurrent invocations never collide. The directory is
//! removed on every exit path (success or failure) by `TempDir`'s Drop,
//! unless the caller explicitly opts to keep it for diagnosis.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::debug;

use crate::error::StampackError;

/// An exclusively-owned scratch directory for one pipeline run.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Creates a fresh, empty, uniquely-named workspace.
    pub fn create() -> Result<Self, StampackError> {
        let dir = tempfile::Builder::new()
            .prefix("stampack-")
            .tempdir()
            .map_err(StampackError::Workspace)?;
        debug!(path = %dir.path().display(), "created scratch workspace");
        Ok(Workspace { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Persists the workspace on disk instead of deleting it on drop and
    /// returns its path.
    pub fn keep(self) -> PathBuf {
        self.dir.into_path()
    }
}
