//! Recursive directory walker with substring file matching.

use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

/// Calls `visit` with the full path of every regular file under `root` whose
/// file name contains `filter` as a plain substring (not a glob).
///
/// Sibling ordering is directory-listing order; callers must not rely on it.
/// Unreadable entries are logged and skipped so one bad entry never hides the
/// rest of the tree.
pub fn walk_matched<F>(root: &Path, filter: &str, mut visit: F)
where
    F: FnMut(&Path),
{
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().contains(filter) {
            visit(entry.path());
        }
    }
}
