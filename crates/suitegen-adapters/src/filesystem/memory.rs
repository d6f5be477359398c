//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use suitegen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SuitegenResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn write_file(&self, path: &Path, content: &str) -> SuitegenResult<()> {
        let mut files = self.files.write().map_err(|_| lock_error(path))?;
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> SuitegenResult<String> {
        let files = self.files.read().map_err(|_| lock_error(path))?;
        files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.read().unwrap();
        files.contains_key(path)
    }
}

fn lock_error(path: &Path) -> suitegen_core::error::SuitegenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "Filesystem lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_exists() {
        let fs = MemoryFilesystem::new();
        let path = Path::new("basic.js");

        assert!(!fs.exists(path));
        fs.write_file(path, "content").unwrap();
        assert!(fs.exists(path));
        assert_eq!(fs.read_to_string(path).unwrap(), "content");
    }

    #[test]
    fn missing_file_read_errors() {
        let fs = MemoryFilesystem::new();
        assert!(fs.read_to_string(Path::new("missing.txt")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let clone = fs.clone();
        fs.write_file(Path::new("a.js"), "x").unwrap();
        assert!(clone.exists(Path::new("a.js")));
    }

    #[test]
    fn overwrite_replaces_content() {
        let fs = MemoryFilesystem::new();
        let path = Path::new("a.js");
        fs.write_file(path, "old").unwrap();
        fs.write_file(path, "new").unwrap();
        assert_eq!(fs.read_to_string(path).unwrap(), "new");
    }
}
