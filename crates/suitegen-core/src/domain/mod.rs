//! Core domain layer for suitegen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O lives behind ports (traits) defined in the application layer.
//!
//! ## Pipeline
//!
//! - **No async**: generation is a single synchronous computation
//! - **No I/O**: copyright text arrives as a string, output leaves as a string
//! - **Immutable tables**: the registries are static for the process lifetime
//! - **Fail-fast**: all rejection happens in [`normalize`]; the fragment
//!   builders and [`assemble`] are total

pub mod assemble;
pub mod error;
pub mod fragments;
pub mod normalize;
pub mod registry;
pub mod request;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use registry::{
    API_VERSION_REGISTRY, ApiVersionEntry, DEFAULT_API_VERSION, MODULE_REGISTRY, ModuleEntry,
    SCRIPT_TYPE_REGISTRY, ScriptTypeEntry,
};
pub use request::{GeneratedDocument, GenerationRequest};
