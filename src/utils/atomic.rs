//! Atomic file replacement
//!
//! The JSONL store rewrites its file on every bulk insert. Writes go to a
//! sibling `.tmp` file, are synced, then renamed over the target, so a
//! reader sees either the old batch set or the new one, never a mix.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Path of the temp file used while replacing `path`
pub fn temp_path_for(path: &Path) -> PathBuf {
    path.with_extension("tmp")
}

/// Atomically replace `path` with whatever `write_fn` writes
///
/// On error the temp file is removed and `path` is left untouched.
pub fn atomic_write_with<P, F>(path: P, write_fn: F) -> io::Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let result = (|| -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        write_fn(&mut writer)?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Remove a temp file left behind by an interrupted replacement of `path`
///
/// Returns `true` if a stale file was found and removed.
pub fn cleanup_stale_temp(path: &Path) -> io::Result<bool> {
    let temp_path = temp_path_for(path);
    if !temp_path.exists() {
        return Ok(false);
    }
    fs::remove_file(&temp_path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_with() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.jsonl");

        atomic_write_with(&path, |w| {
            writeln!(w, "Line 1")?;
            writeln!(w, "Line 2")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Line 1\nLine 2\n");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_failed_write_keeps_original() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.jsonl");
        fs::write(&path, "original\n").unwrap();

        let result = atomic_write_with(&path, |w| {
            writeln!(w, "partial")?;
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original\n");
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("events.jsonl");

        atomic_write_with(&path, |w| w.write_all(b"x")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn test_cleanup_stale_temp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.jsonl");
        fs::write(temp_path_for(&path), "half written").unwrap();

        assert!(cleanup_stale_temp(&path).unwrap());
        assert!(!temp_path_for(&path).exists());
        assert!(!cleanup_stale_temp(&path).unwrap());
    }
}
