//! Fragment builders: each produces one textual section of the output.
//!
//! Every builder is a pure function over already-validated data and returns
//! an empty string when its section is not requested. Failure never happens
//! here — anything invalid was rejected by the normalizer.

use crate::domain::registry::{ApiVersionEntry, ModuleEntry, ScriptTypeEntry};

/// Wrap copyright text in a block comment.
///
/// The text is reproduced verbatim between the delimiters — internal line
/// breaks preserved, nothing escaped or re-wrapped. `None` yields no
/// section at all.
pub fn build_copyright(text: Option<&str>) -> String {
    match text {
        Some(text) => format!("/**\n{text}\n*/"),
        None => String::new(),
    }
}

/// The `@NScriptType` annotation line, or nothing when no type was asked for.
pub fn build_type_annotation(entry: Option<&ScriptTypeEntry>) -> String {
    match entry {
        Some(entry) => format!(" * @NScriptType {}", entry.annotation),
        None => String::new(),
    }
}

/// The `@NApiVersion` annotation line. Always emitted — the version always
/// resolves to something (the default if nothing else).
pub fn build_version_annotation(entry: &ApiVersionEntry) -> String {
    format!(" * @NApiVersion {}", entry.display_value)
}

/// The AMD module-loader boilerplate.
///
/// Dependency paths and function parameters come from the same ordered
/// slice, so the two lists stay in lock-step by construction. The wrapper
/// is emitted even with zero modules: a script-type annotation means
/// nothing to the loader without it.
pub fn build_dependency_preamble(modules: &[&ModuleEntry]) -> String {
    if modules.is_empty() {
        return "define([], () => {\n\n});".to_string();
    }

    let mut out = String::from("define([\n");
    for entry in modules {
        out.push_str(&format!("  'N/{}',\n", entry.path));
    }
    out.push_str("], (");
    let params: Vec<&str> = modules.iter().map(|e| e.parameter).collect();
    out.push_str(&params.join(", "));
    out.push_str(") => {\n\n});");
    out
}
