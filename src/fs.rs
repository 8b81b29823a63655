//! File system access
//!
//! Re-exports the `FileSystem` port and its local implementation, plus an
//! in-memory mock for unit tests.

pub use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
pub use crate::infrastructure::fs::LocalFs;

#[cfg(test)]
use std::path::{Path, PathBuf};

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
/// Files stored as `None` exist but fail to read or write, like a file
/// without permissions.
#[cfg(test)]
#[derive(Clone)]
pub struct MockFileSystem {
    pub files:
        std::sync::Arc<std::sync::Mutex<std::collections::HashMap<PathBuf, Option<String>>>>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: std::sync::Arc::new(std::sync::Mutex::new(std::collections::HashMap::new())),
        }
    }

    /// Builder-style insert of a readable file
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), Some(content.to_string()));
        self
    }

    /// Builder-style insert of a file that exists but cannot be read or written
    pub fn with_unreadable(self, path: impl Into<PathBuf>) -> Self {
        self.files.lock().unwrap().insert(path.into(), None);
        self
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned().flatten()
    }
}

#[cfg(test)]
impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<String> {
        let files = self.files.lock().unwrap();
        match files.get(path) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(FsError::PermissionDenied(path.to_path_buf())),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut files = self.files.lock().unwrap();
        if let Some(None) = files.get(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        files.insert(path.to_path_buf(), Some(content.to_string()));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let mut files = self.files.lock().unwrap();
        match files.remove(path) {
            Some(_) => Ok(()),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }
}
