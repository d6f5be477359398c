//! Infrastructure adapters for suitegen.
//!
//! This crate implements the ports defined in
//! `suitegen_core::application::ports`. It contains all I/O operations.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
