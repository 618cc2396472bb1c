//! File access used by the parser.

use std::io;
use std::path::Path;

/// Whole-file read and write capability.
///
/// Implementations return the full content or an error; the parser never
/// treats a failed read as empty content.
pub trait Storage: Send + Sync {
    /// Read the entire file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate the file at `path` and write `contents`.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Local filesystem access through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}
