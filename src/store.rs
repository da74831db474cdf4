//! Byte storage the pipeline reads from and writes to.

use std::fs;
use std::io;
use std::path::Path;

/// Reads whole files and replaces them wholesale.
pub trait Store {
    /// Reads every byte stored at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replaces whatever is stored at `path` with `contents`.
    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// [`Store`] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl Store for FsStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_store_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hosts.csv");

        let mut store = FsStore;
        store.write(&path, b"priority;host\n").unwrap();
        assert_eq!(store.read(&path).unwrap(), b"priority;host\n");

        store.write(&path, b"").unwrap();
        assert!(store.read(&path).unwrap().is_empty());
    }

    #[test]
    fn test_fs_store_missing_file() {
        let dir = TempDir::new().unwrap();
        let error = FsStore.read(&dir.path().join("missing.csv")).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }
}
