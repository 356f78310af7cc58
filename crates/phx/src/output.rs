//! Writing the finished document to disk.
//!
//! Certification tools keep the project file open while it is loaded, and on
//! some platforms that locks it. If the destination cannot be written because
//! permission is denied, the document goes to a timestamped sibling instead.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, warn};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Writes `text` to `path`, falling back to a timestamped file name when the
/// destination is locked. Returns the path actually written.
pub fn write_with_fallback(path: &Path, text: &str) -> io::Result<PathBuf> {
    write_with(path, text, Local::now().naive_local(), |target, contents| {
        fs::write(target, contents)
    })
}

fn write_with<F>(path: &Path, text: &str, now: NaiveDateTime, mut write: F) -> io::Result<PathBuf>
where
    F: FnMut(&Path, &str) -> io::Result<()>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    match write(path, text) {
        Ok(()) => {
            debug!(path = %path.display(), bytes = text.len(), "Wrote output file");
            Ok(path.to_path_buf())
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            let alternative = timestamped_path(path, now);
            warn!(
                path = %path.display(),
                fallback = %alternative.display(),
                error = %e,
                "Output file is locked, writing to alternative path"
            );
            write(&alternative, text)?;
            Ok(alternative)
        }
        Err(e) => Err(e),
    }
}

/// `<dir>/<stem>_<YYYYmmdd_HHMMSS>.<ext>` next to `path`.
pub fn timestamped_path(path: &Path, now: NaiveDateTime) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let stamp = now.format(TIMESTAMP_FORMAT);
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}_{}", stem, stamp),
    };
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(12, 5, 7))
            .unwrap()
    }

    #[test]
    fn test_timestamped_path() {
        assert_eq!(
            timestamped_path(Path::new("out/house.xml"), noon()),
            PathBuf::from("out/house_20240309_120507.xml")
        );
        assert_eq!(
            timestamped_path(Path::new("house"), noon()),
            PathBuf::from("house_20240309_120507")
        );
    }

    #[test]
    fn test_writes_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("house.xml");

        let written = write_with_fallback(&path, "<WUFIplusProject/>").unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<WUFIplusProject/>");
    }

    #[test]
    fn test_locked_destination_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("house.xml");

        let written = write_with(&path, "<A/>", noon(), |target, contents| {
            if target == path.as_path() {
                Err(io::Error::from(io::ErrorKind::PermissionDenied))
            } else {
                fs::write(target, contents)
            }
        })
        .unwrap();

        assert_eq!(written, dir.path().join("house_20240309_120507.xml"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "<A/>");
        assert!(!path.exists());
    }

    #[test]
    fn test_other_errors_are_returned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("house.xml");

        let err = write_with(&path, "<A/>", noon(), |_, _| {
            Err(io::Error::from(io::ErrorKind::StorageFull))
        })
        .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
    }
}
