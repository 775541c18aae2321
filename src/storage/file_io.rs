//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Read a text file, returning `None` if it does not exist or cannot be opened
///
/// Content that is not valid UTF-8 is an error rather than "no data", so a
/// damaged file is never silently replaced.
pub fn read_text_if_present<P: AsRef<Path>>(path: P) -> Result<Option<String>, TrackerError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) if e.kind() == ErrorKind::InvalidData => Err(TrackerError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not open file, treating as empty");
            Ok(None)
        }
    }
}

/// Sibling path used while writing `path`
fn temp_path_for(path: &Path) -> Result<PathBuf, TrackerError> {
    let file_name = path.file_name().ok_or_else(|| {
        TrackerError::Storage(format!("Not a file path: {}", path.display()))
    })?;
    let mut temp_name = OsString::from(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), TrackerError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path)?;

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| TrackerError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");

        assert_eq!(read_text_if_present(&path).unwrap(), None);
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.txt");

        write_text_atomic(&path, "Food|1.00 0\n").unwrap();
        assert_eq!(
            read_text_if_present(&path).unwrap().as_deref(),
            Some("Food|1.00 0\n")
        );

        write_text_atomic(&path, "").unwrap();
        assert_eq!(read_text_if_present(&path).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.txt");

        write_text_atomic(&path, "data").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("budgets.txt.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("budgets.txt");

        write_text_atomic(&path, "data").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(read_text_if_present(&path).is_err());
    }

    #[test]
    fn test_directory_path_is_treated_as_missing() {
        let temp_dir = TempDir::new().unwrap();

        // Reading a directory fails with a kind other than NotFound/InvalidData
        assert_eq!(read_text_if_present(temp_dir.path()).unwrap(), None);
    }
}
