//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `suitegen-adapters` crate provides implementations.

use crate::error::SuitegenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `suitegen_adapters::filesystem::LocalFilesystem` (production)
/// - `suitegen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The core performs no I/O itself; the single write of the rendered
/// document and the read of a copyright companion file both go through
/// this trait.
pub trait Filesystem: Send + Sync {
    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SuitegenResult<()>;

    /// Read a text file's full contents.
    fn read_to_string(&self, path: &Path) -> SuitegenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
