//! # Processing Pipeline
//!
//! The strictly sequential run: infer format → create workspace → decode →
//! scan → normalize → encode → swap. The original archive is never touched
//! until a rebuilt archive exists and the encode step reported success.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::codec::ArchiveFormat;
use crate::error::StampackError;
use crate::normalize;
use crate::workspace::Workspace;

/// Suffix of the rebuilt archive before it is swapped into place.
const TEMP_SUFFIX: &str = "_temp";

/// Normalizes the timestamps of all files in `archive` whose names contain
/// `filter`, rewriting the archive in place on success.
///
/// With `keep_temp` the scratch workspace is retained on disk for diagnosis
/// instead of being removed when the run ends.
pub fn process_archive(archive: &Path, filter: &str, keep_temp: bool) -> Result<(), StampackError> {
    // Format inference is the only step allowed to run before any side
    // effect: an unsupported suffix must fail with zero spawns and zero
    // filesystem writes.
    let format = ArchiveFormat::from_path(archive)?;

    let workspace = Workspace::create()?;
    let result = run(archive, filter, format, workspace.path());

    if keep_temp {
        let kept = workspace.keep();
        info!(path = %kept.display(), "scratch workspace retained");
    }
    result
}

fn run(
    archive: &Path,
    filter: &str,
    format: ArchiveFormat,
    workspace: &Path,
) -> Result<(), StampackError> {
    format.decode(archive, workspace)?;

    match normalize::compute_reference_time(workspace, filter) {
        Some(reference) => {
            info!(
                filter,
                reference_unix_secs = reference.unix_seconds(),
                "stamping matched files with reference time"
            );
            normalize::apply_reference_time(workspace, filter, reference);
        }
        None => info!(filter, "no file matched the filter, timestamps left as-is"),
    }

    let rebuilt = temp_archive_path(archive);
    format.encode(workspace, &rebuilt)?;
    debug!(path = %rebuilt.display(), "rebuilt archive written");

    commit(&rebuilt, archive)
}

/// Replaces `original` with `rebuilt`: delete the original, then rename the
/// rebuilt archive into its place.
///
/// Only called after a successful encode. A rename failure after the delete
/// succeeded is surfaced as the distinct [`StampackError::CommitVacated`]:
/// the original name is vacated but the normalized data survives under the
/// temp name.
fn commit(rebuilt: &Path, original: &Path) -> Result<(), StampackError> {
    fs::remove_file(original)
        .map_err(|source| StampackError::Commit { path: original.to_path_buf(), source })?;
    fs::rename(rebuilt, original).map_err(|source| StampackError::CommitVacated {
        original: original.to_path_buf(),
        rebuilt: rebuilt.to_path_buf(),
        source,
    })?;
    info!(path = %original.display(), "archive replaced with normalized rebuild");
    Ok(())
}

fn temp_archive_path(archive: &Path) -> PathBuf {
    let mut name = archive.as_os_str().to_os_string();
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}
