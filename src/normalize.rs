//! # Timestamp Normalizer
//!
//! Two passes over the extracted workspace: first gather the maximum
//! modification time among matched files, then stamp every matched file with
//! it. A file whose timestamp cannot be read or written is logged and
//! skipped; one bad file never blocks normalization of the rest.

use std::fs;
use std::path::Path;

use filetime::FileTime;
use tracing::warn;

use crate::walk::walk_matched;

/// Returns the maximum modification time among regular files under `root`
/// whose names contain `filter`, or `None` if nothing matched.
///
/// `None` means "no normalization needed" and is never a valid reference
/// time.
pub fn compute_reference_time(root: &Path, filter: &str) -> Option<FileTime> {
    let mut max: Option<FileTime> = None;
    walk_matched(root, filter, |path| match fs::metadata(path) {
        Ok(meta) => {
            let mtime = FileTime::from_last_modification_time(&meta);
            if max.map_or(true, |current| mtime > current) {
                max = Some(mtime);
            }
        }
        Err(e) => warn!(path = %path.display(), "could not read modification time: {e}"),
    });
    max
}

/// Stamps the access and modification time of every matched file under
/// `root` with `time`. Unmatched files are untouched.
pub fn apply_reference_time(root: &Path, filter: &str, time: FileTime) {
    walk_matched(root, filter, |path| {
        if let Err(e) = filetime::set_file_times(path, time, time) {
            warn!(path = %path.display(), "could not set file times: {e}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_with_mtime(path: &Path, unix_secs: i64) {
        fs::write(path, b"data").unwrap();
        filetime::set_file_mtime(path, FileTime::from_unix_time(unix_secs, 0)).unwrap();
    }

    fn mtime_of(path: &Path) -> FileTime {
        FileTime::from_last_modification_time(&fs::metadata(path).unwrap())
    }

    #[test]
    fn reference_time_is_the_maximum_mtime() {
        let root = tempdir().unwrap();
        create_with_mtime(&root.path().join("a.log"), 100);
        create_with_mtime(&root.path().join("b.log"), 200);
        create_with_mtime(&root.path().join("c.txt"), 300);

        let reference = compute_reference_time(root.path(), ".log").unwrap();
        assert_eq!(reference, FileTime::from_unix_time(200, 0));
    }

    #[test]
    fn no_match_yields_none() {
        let root = tempdir().unwrap();
        create_with_mtime(&root.path().join("c.txt"), 300);
        assert_eq!(compute_reference_time(root.path(), ".log"), None);
    }

    #[test]
    fn matched_files_are_stamped_and_unmatched_untouched() {
        let root = tempdir().unwrap();
        create_with_mtime(&root.path().join("a.log"), 100);
        create_with_mtime(&root.path().join("b.log"), 200);
        create_with_mtime(&root.path().join("c.txt"), 300);

        let reference = compute_reference_time(root.path(), ".log").unwrap();
        apply_reference_time(root.path(), ".log", reference);

        assert_eq!(mtime_of(&root.path().join("a.log")), FileTime::from_unix_time(200, 0));
        assert_eq!(mtime_of(&root.path().join("b.log")), FileTime::from_unix_time(200, 0));
        assert_eq!(mtime_of(&root.path().join("c.txt")), FileTime::from_unix_time(300, 0));
    }

    #[test]
    fn nested_files_participate() {
        let root = tempdir().unwrap();
        let nested = root.path().join("sub/dir");
        fs::create_dir_all(&nested).unwrap();
        create_with_mtime(&root.path().join("top.log"), 50);
        create_with_mtime(&nested.join("deep.log"), 500);

        let reference = compute_reference_time(root.path(), ".log").unwrap();
        assert_eq!(reference, FileTime::from_unix_time(500, 0));

        apply_reference_time(root.path(), ".log", reference);
        assert_eq!(mtime_of(&root.path().join("top.log")), FileTime::from_unix_time(500, 0));
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let root = tempdir().unwrap();
        create_with_mtime(&root.path().join("a.log"), 100);
        create_with_mtime(&root.path().join("b.log"), 200);

        let first = compute_reference_time(root.path(), ".log").unwrap();
        apply_reference_time(root.path(), ".log", first);
        let second = compute_reference_time(root.path(), ".log").unwrap();
        assert_eq!(first, second);
    }
}
