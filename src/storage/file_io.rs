//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{SpendwiseError, SpendwiseResult};

/// Open a file for reading, returning `None` if it does not exist
///
/// Any failure other than "not found" is reported as a store error.
pub fn open_if_exists<P: AsRef<Path>>(path: P) -> SpendwiseResult<Option<File>> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SpendwiseError::StoreUnavailable(format!(
            "Failed to open {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Temp file used while replacing `path`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the contents of `path` atomically (write to temp, then rename)
///
/// The closure receives a buffered writer for the temp file. The target is
/// either completely rewritten or left untouched.
pub fn write_atomic<P, F>(path: P, write: F) -> SpendwiseResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> SpendwiseResult<()>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            SpendwiseError::StoreUnavailable(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path(path);

    let result = (|| {
        let file = File::create(&temp_path).map_err(|e| {
            SpendwiseError::StoreUnavailable(format!("Failed to create temp file: {}", e))
        })?;

        let mut writer = BufWriter::new(file);
        write(&mut writer)?;

        writer
            .flush()
            .map_err(|e| SpendwiseError::StoreUnavailable(format!("Failed to flush data: {}", e)))?;

        writer
            .get_ref()
            .sync_all()
            .map_err(|e| SpendwiseError::StoreUnavailable(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, path).map_err(|e| {
            SpendwiseError::StoreUnavailable(format!("Failed to rename temp file: {}", e))
        })
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        assert!(open_if_exists(&path).unwrap().is_none());
    }

    #[test]
    fn test_open_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "Date\n").unwrap();

        let mut contents = String::new();
        open_if_exists(&path)
            .unwrap()
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "Date\n");
    }

    #[test]
    fn test_write_atomic_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        write_atomic(&path, |w| {
            w.write_all(b"hello")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert!(!temp_dir.path().join("ledger.csv.tmp").exists());
    }

    #[test]
    fn test_failed_write_leaves_target_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "original").unwrap();

        let result = write_atomic(&path, |w| {
            w.write_all(b"partial")?;
            Err(SpendwiseError::StoreUnavailable("boom".into()))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(!temp_dir.path().join("ledger.csv.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("ledger.csv");

        write_atomic(&path, |w| {
            w.write_all(b"x")?;
            Ok(())
        })
        .unwrap();
        assert!(path.exists());
    }
}
