//! Generate Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Normalize the raw request against the registries
//! 2. Build each fragment
//! 3. Assemble the document
//! 4. Write it through the filesystem port
//!
//! Steps 1-3 are pure and exposed as [`GenerateService::generate`]; only
//! step 4 touches the port, so a normalization failure can never leave a
//! partial file behind.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        DomainError, GeneratedDocument, GenerationRequest, assemble::assemble,
        fragments, normalize,
    },
    error::SuitegenResult,
};

/// Main generation service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Run the pure pipeline: normalize, build fragments, assemble.
    ///
    /// No I/O happens here. Any invalid field aborts the whole operation
    /// before a single output character is produced.
    #[instrument(skip_all, fields(filename = %request.filename))]
    pub fn generate(&self, request: &GenerationRequest) -> SuitegenResult<GeneratedDocument> {
        generate_document(request).map_err(Into::into)
    }

    /// Generate and write the skeleton to `request.filename`.
    ///
    /// Overwrite policy belongs to the caller: with `force` unset an
    /// existing file is an error and nothing is written.
    #[instrument(skip_all, fields(filename = %request.filename, force))]
    pub fn generate_to_file(
        &self,
        request: &GenerationRequest,
        force: bool,
    ) -> SuitegenResult<GeneratedDocument> {
        let document = self.generate(request)?;

        let path = Path::new(&request.filename);
        if self.filesystem.exists(path) && !force {
            return Err(ApplicationError::FileExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        self.filesystem.write_file(path, &document.render())?;
        info!(path = %path.display(), "Skeleton written");
        Ok(document)
    }
}

/// The core pipeline as a free function, independent of any adapter.
pub fn generate_document(request: &GenerationRequest) -> Result<GeneratedDocument, DomainError> {
    // Defensive: the CLI validates the filename long before this point.
    if request.filename.trim().is_empty() {
        return Err(DomainError::MissingFilename);
    }

    // 1. Normalize — the only place anything can fail.
    let script_type = normalize::resolve_script_type(request.script_type.as_deref())?;
    let api_version = normalize::resolve_api_version(&request.api_version)?;
    let modules = normalize::resolve_modules(&request.modules)?;

    debug!(
        script_type = script_type.map(|t| t.display_name).unwrap_or("none"),
        api_version = api_version.display_value,
        modules = modules.len(),
        "Request normalized"
    );

    // 2-3. Build fragments and assemble.
    Ok(assemble(
        fragments::build_copyright(request.copyright_text.as_deref()),
        fragments::build_type_annotation(script_type),
        fragments::build_version_annotation(api_version),
        fragments::build_dependency_preamble(&modules),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── pure pipeline ─────────────────────────────────────────────────────

    #[test]
    fn minimal_request_yields_version_and_empty_wrapper() {
        let doc = generate_document(&GenerationRequest::new("basic.js")).unwrap();
        assert_eq!(
            doc.render(),
            "/**\n * @NApiVersion 2.1\n */\n\ndefine([], () => {\n\n});\n"
        );
    }

    #[test]
    fn mangled_script_type_emits_canonical_form() {
        let req = GenerationRequest::new("a.js").with_script_type("mApReDuCe");
        let text = generate_document(&req).unwrap().render();
        assert!(text.contains("@NScriptType MapReduceScript"));
        assert!(!text.contains("mApReDuCe"));
    }

    #[test]
    fn modules_emit_paths_and_parameters_in_order() {
        let req = GenerationRequest::new("a.js").with_modules(["record", "search"]);
        let text = generate_document(&req).unwrap().render();
        assert!(text.contains("define([\n  'N/record',\n  'N/search',\n], (record, search) => {"));
    }

    #[test]
    fn unknown_api_version_fails_whole_operation() {
        let req = GenerationRequest::new("a.js").with_api_version("3.0");
        let err = generate_document(&req).unwrap_err();
        assert_eq!(err, DomainError::UnknownApiVersion("3.0".into()));
    }

    #[test]
    fn one_bad_module_produces_no_output_at_all() {
        let req = GenerationRequest::new("a.js").with_modules(["record", "bogus"]);
        let err = generate_document(&req).unwrap_err();
        assert_eq!(err, DomainError::UnknownModule("bogus".into()));
    }

    #[test]
    fn empty_filename_is_rejected_defensively() {
        let err = generate_document(&GenerationRequest::new("")).unwrap_err();
        assert_eq!(err, DomainError::MissingFilename);
    }

    #[test]
    fn copyright_appears_before_annotations() {
        let req = GenerationRequest::new("a.js")
            .with_copyright_text("Copyright (c) 2021 Example Corp")
            .with_script_type("Scheduled");
        let text = generate_document(&req).unwrap().render();
        assert!(text.starts_with("/**\nCopyright (c) 2021 Example Corp\n*/\n\n/**\n"));
    }
}
