//! Suitegen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the suitegen
//! skeleton generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          suitegen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    suitegen-adapters (Infrastructure)   │
//! │    (LocalFilesystem, MemoryFilesystem)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Registries, Normalizer, Fragments,    │
//! │   Assembler — No External Dependencies) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use suitegen_core::domain::GenerationRequest;
//! use suitegen_core::application::generate_document;
//!
//! let request = GenerationRequest::new("basic.js")
//!     .with_script_type("MapReduce")
//!     .with_modules(["record", "search"]);
//!
//! let document = generate_document(&request).unwrap();
//! assert!(document.render().contains("@NScriptType MapReduceScript"));
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{GenerateService, generate_document, ports::Filesystem};
    pub use crate::domain::{
        API_VERSION_REGISTRY, ApiVersionEntry, DEFAULT_API_VERSION, GeneratedDocument,
        GenerationRequest, MODULE_REGISTRY, ModuleEntry, SCRIPT_TYPE_REGISTRY, ScriptTypeEntry,
    };
    pub use crate::error::{SuitegenError, SuitegenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
