//! Integration tests for suitegen-core.
//!
//! Exercise the full pipeline through `GenerateService`, including the
//! write path, using a stub filesystem (the real adapters live in
//! `suitegen-adapters` and are tested there).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use suitegen_core::application::{ApplicationError, GenerateService, ports::Filesystem};
use suitegen_core::domain::{DomainError, GenerationRequest};
use suitegen_core::error::{SuitegenError, SuitegenResult};

/// Minimal in-memory filesystem stub.
#[derive(Clone, Default)]
struct StubFs {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl StubFs {
    fn new() -> Self {
        Self::default()
    }

    fn read(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl Filesystem for StubFs {
    fn write_file(&self, path: &Path, content: &str) -> SuitegenResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> SuitegenResult<String> {
        self.read(path.to_str().unwrap()).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not found".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

fn service_with(fs: &StubFs) -> GenerateService {
    GenerateService::new(Box::new(fs.clone()))
}

#[test]
fn full_generation_writes_complete_skeleton() {
    let fs = StubFs::new();
    let service = service_with(&fs);

    let request = GenerationRequest::new("skeleton.js")
        .with_copyright_text("Copyright (c) 2021 Example Corp\nAll Rights Reserved.")
        .with_script_type("mapreduce")
        .with_api_version("2.1")
        .with_modules(["record", "search"]);

    service.generate_to_file(&request, false).unwrap();

    let written = fs.read("skeleton.js").unwrap();
    assert_eq!(
        written,
        "/**\n\
         Copyright (c) 2021 Example Corp\n\
         All Rights Reserved.\n\
         */\n\
         \n\
         /**\n\
         \u{20}* @NScriptType MapReduceScript\n\
         \u{20}* @NApiVersion 2.1\n\
         \u{20}*/\n\
         \n\
         define([\n\
         \u{20} 'N/record',\n\
         \u{20} 'N/search',\n\
         ], (record, search) => {\n\
         \n\
         });\n"
    );
}

#[test]
fn minimal_request_writes_version_only_skeleton() {
    let fs = StubFs::new();
    let service = service_with(&fs);

    service
        .generate_to_file(&GenerationRequest::new("basic.js"), false)
        .unwrap();

    let written = fs.read("basic.js").unwrap();
    assert!(written.contains("@NApiVersion 2.1"));
    assert!(written.contains("define([], () => {"));
    assert!(!written.contains("@NScriptType"));
    assert!(!written.contains("Copyright"));
}

#[test]
fn normalization_failure_writes_nothing() {
    let fs = StubFs::new();
    let service = service_with(&fs);

    let request = GenerationRequest::new("bad.js").with_modules(["record", "bogus"]);
    let err = service.generate_to_file(&request, false).unwrap_err();

    assert_eq!(
        err,
        SuitegenError::Domain(DomainError::UnknownModule("bogus".into()))
    );
    assert_eq!(fs.file_count(), 0, "no partial file may be produced");
}

#[test]
fn existing_file_is_not_overwritten_without_force() {
    let fs = StubFs::new();
    fs.write_file(Path::new("taken.js"), "original").unwrap();
    let service = service_with(&fs);

    let err = service
        .generate_to_file(&GenerationRequest::new("taken.js"), false)
        .unwrap_err();
    assert!(matches!(
        err,
        SuitegenError::Application(ApplicationError::FileExists { .. })
    ));
    assert_eq!(fs.read("taken.js").unwrap(), "original");
}

#[test]
fn force_overwrites_existing_file() {
    let fs = StubFs::new();
    fs.write_file(Path::new("taken.js"), "original").unwrap();
    let service = service_with(&fs);

    service
        .generate_to_file(&GenerationRequest::new("taken.js"), true)
        .unwrap();
    assert!(fs.read("taken.js").unwrap().contains("@NApiVersion"));
}

#[test]
fn generate_is_pure_and_repeatable() {
    let fs = StubFs::new();
    let service = service_with(&fs);
    let request = GenerationRequest::new("a.js").with_modules(["query"]);

    let first = service.generate(&request).unwrap();
    let second = service.generate(&request).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs.file_count(), 0, "generate() must not touch the port");
}
