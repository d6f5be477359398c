//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::{debug, instrument};

use suitegen_core::{application::ports::Filesystem, error::SuitegenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    #[instrument(skip(self, content), fields(path = %path.display()))]
    fn write_file(&self, path: &Path, content: &str) -> SuitegenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))?;
        debug!(bytes = content.len(), "File written");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn read_to_string(&self, path: &Path) -> SuitegenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> suitegen_core::error::SuitegenError {
    use suitegen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
