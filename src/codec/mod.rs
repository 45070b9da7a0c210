//! # Archive Codec Dispatcher
//!
//! Maps an archive path to one of the supported container formats and knows
//! how to decode it into a workspace directory and encode a workspace back
//! into an archive. The actual (de)compression is delegated to the well-known
//! external tools (`tar`, `unzip`/`zip`, `gzip`); this module's only real
//! logic is suffix-based format inference and strict exit-status gating.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::StampackError;
use crate::exec;

/// A supported archive container format, inferred from the filename's final
/// suffix only (`foo.tar.gz` is Gzip, not Tar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Tar,
    Zip,
    Gzip,
}

impl ArchiveFormat {
    /// Infers the format from the final filename suffix.
    ///
    /// This is the only gate into the pipeline: an unsupported or missing
    /// suffix fails here, before any workspace is created or any subprocess
    /// is spawned.
    pub fn from_path(path: &Path) -> Result<Self, StampackError> {
        match path.extension().and_then(OsStr::to_str) {
            Some("tar") => Ok(ArchiveFormat::Tar),
            Some("zip") => Ok(ArchiveFormat::Zip),
            Some("gz") => Ok(ArchiveFormat::Gzip),
            _ => Err(StampackError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Extracts `archive` into `workspace`, which must already exist and be
    /// empty. Succeeds only if the external tool exits with status 0.
    pub fn decode(&self, archive: &Path, workspace: &Path) -> Result<(), StampackError> {
        match self {
            ArchiveFormat::Tar => exec::run_tool(
                "tar",
                Command::new("tar").arg("-xf").arg(archive).arg("-C").arg(workspace),
            ),
            ArchiveFormat::Zip => exec::run_tool(
                "unzip",
                Command::new("unzip").arg("-q").arg("-o").arg(archive).arg("-d").arg(workspace),
            ),
            ArchiveFormat::Gzip => {
                // gzip is a single-file format: stage a copy of the archive
                // inside the workspace and decompress it in place there, so
                // the original is never touched.
                let name = archive
                    .file_name()
                    .ok_or_else(|| StampackError::UnsupportedFormat(archive.to_path_buf()))?;
                let staged = workspace.join(name);
                fs::copy(archive, &staged)
                    .map_err(|source| StampackError::Io { source, path: staged.clone() })?;
                exec::run_tool("gzip", Command::new("gzip").arg("-d").arg(&staged))
            }
        }
    }

    /// Rebuilds an archive at `output` from the contents of `workspace`.
    ///
    /// The workspace's own directory entry is excluded from the result: tar
    /// and zip are both invoked from inside the workspace so that entry names
    /// are workspace-relative.
    pub fn encode(&self, workspace: &Path, output: &Path) -> Result<(), StampackError> {
        match self {
            ArchiveFormat::Tar => exec::run_tool(
                "tar",
                Command::new("tar")
                    .arg("-cf")
                    .arg(output)
                    .arg("-C")
                    .arg(workspace)
                    .arg("."),
            ),
            ArchiveFormat::Zip => {
                // zip resolves the output relative to its working directory,
                // which we point at the workspace, so the output path must be
                // absolute.
                let output = absolutize(output)
                    .map_err(|source| StampackError::Io { source, path: output.to_path_buf() })?;
                exec::run_tool(
                    "zip",
                    Command::new("zip")
                        .arg("-q")
                        .arg("-r")
                        .arg(&output)
                        .arg(".")
                        .current_dir(workspace),
                )
            }
            ArchiveFormat::Gzip => {
                let inner = single_workspace_file(workspace)?;
                exec::run_tool("gzip", Command::new("gzip").arg(&inner))?;

                let mut compressed = inner.into_os_string();
                compressed.push(".gz");
                // Copy rather than rename: the workspace may live on a
                // different filesystem than the archive.
                fs::copy(&compressed, output)
                    .map_err(|source| StampackError::Io { source, path: output.to_path_buf() })?;
                Ok(())
            }
        }
    }
}

/// Locates the single regular file a gzip decode left in the workspace.
fn single_workspace_file(workspace: &Path) -> Result<PathBuf, StampackError> {
    let entries = fs::read_dir(workspace)
        .map_err(|source| StampackError::Io { source, path: workspace.to_path_buf() })?;
    for entry in entries {
        let entry = entry
            .map_err(|source| StampackError::Io { source, path: workspace.to_path_buf() })?;
        if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            return Ok(entry.path());
        }
    }
    Err(StampackError::Io {
        source: io::Error::new(io::ErrorKind::NotFound, "workspace holds no file to recompress"),
        path: workspace.to_path_buf(),
    })
}

fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_supported_formats() {
        assert_eq!(ArchiveFormat::from_path(Path::new("a.tar")).unwrap(), ArchiveFormat::Tar);
        assert_eq!(ArchiveFormat::from_path(Path::new("b.zip")).unwrap(), ArchiveFormat::Zip);
        assert_eq!(ArchiveFormat::from_path(Path::new("c.gz")).unwrap(), ArchiveFormat::Gzip);
    }

    #[test]
    fn final_suffix_wins() {
        // Only the last suffix counts: a .tar.gz is handled as gzip.
        assert_eq!(
            ArchiveFormat::from_path(Path::new("artifacts.tar.gz")).unwrap(),
            ArchiveFormat::Gzip
        );
    }

    #[test]
    fn rejects_unknown_suffix() {
        let err = ArchiveFormat::from_path(Path::new("archive.rar")).unwrap_err();
        assert!(matches!(err, StampackError::UnsupportedFormat(_)));
    }

    #[test]
    fn rejects_missing_suffix() {
        let err = ArchiveFormat::from_path(Path::new("archive")).unwrap_err();
        assert!(matches!(err, StampackError::UnsupportedFormat(_)));
    }
}
