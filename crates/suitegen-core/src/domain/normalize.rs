//! The normalizer: resolves raw user strings against the registries.
//!
//! Matching is case-insensitive and trims surrounding whitespace, nothing
//! more — no whitespace removal inside the token, no partial or fuzzy
//! matching. Mangled casing like `mApReDuCe` is a supported input and
//! resolves to the canonical entry.

use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::registry::{
    self, ApiVersionEntry, DEFAULT_API_VERSION, ModuleEntry, ScriptTypeEntry,
};

/// Lowercase + trim, the only normalisation applied before lookup.
fn normalize_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Resolve a raw script type.
///
/// `None` or an empty/blank string means "no type annotation" and is not
/// an error. A present-but-unknown value fails with the offending raw
/// string.
pub fn resolve_script_type(
    raw: Option<&str>,
) -> Result<Option<&'static ScriptTypeEntry>, DomainError> {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Ok(None),
    };

    registry::find_script_type(&normalize_key(raw))
        .map(Some)
        .ok_or_else(|| DomainError::UnknownScriptType(raw.to_string()))
}

/// Resolve a raw API version, substituting the default when blank.
pub fn resolve_api_version(raw: &str) -> Result<&'static ApiVersionEntry, DomainError> {
    let effective = if raw.trim().is_empty() {
        DEFAULT_API_VERSION
    } else {
        raw
    };

    registry::find_api_version(&normalize_key(effective))
        .ok_or_else(|| DomainError::UnknownApiVersion(raw.to_string()))
}

/// Resolve raw module tokens, preserving input order and duplicates.
///
/// Fail-fast: the first unknown token aborts the whole call — partial
/// resolution is never returned, so no file content can be built from a
/// request containing any invalid module.
pub fn resolve_modules(raw: &[String]) -> Result<Vec<&'static ModuleEntry>, DomainError> {
    let mut resolved = Vec::with_capacity(raw.len());
    for token in raw {
        let entry = registry::find_module(&normalize_key(token))
            .ok_or_else(|| DomainError::UnknownModule(token.clone()))?;
        resolved.push(entry);
    }
    debug!(count = resolved.len(), "Modules resolved");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── resolve_script_type ───────────────────────────────────────────────

    #[test]
    fn absent_script_type_is_not_an_error() {
        assert_eq!(resolve_script_type(None).unwrap(), None);
        assert_eq!(resolve_script_type(Some("")).unwrap(), None);
        assert_eq!(resolve_script_type(Some("   ")).unwrap(), None);
    }

    #[test]
    fn mangled_casing_resolves_to_canonical_entry() {
        let entry = resolve_script_type(Some("mApReDuCe")).unwrap().unwrap();
        assert_eq!(entry.display_name, "MapReduce");
        assert_eq!(entry.annotation, "MapReduceScript");
    }

    #[test]
    fn all_case_variants_resolve_to_identical_entry() {
        let canonical = resolve_script_type(Some("MapReduce")).unwrap().unwrap();
        for variant in ["mapreduce", "MAPREDUCE", "mapReduce", " MapReduce "] {
            let entry = resolve_script_type(Some(variant)).unwrap().unwrap();
            assert!(std::ptr::eq(entry, canonical), "variant: {variant}");
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        // Re-normalizing a canonical display name yields the same entry.
        let first = resolve_script_type(Some("restlet")).unwrap().unwrap();
        let again = resolve_script_type(Some(first.display_name))
            .unwrap()
            .unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn unknown_script_type_carries_raw_string() {
        let err = resolve_script_type(Some("Bundle")).unwrap_err();
        assert_eq!(err, DomainError::UnknownScriptType("Bundle".into()));
    }

    // ── resolve_api_version ───────────────────────────────────────────────

    #[test]
    fn blank_version_falls_back_to_default() {
        assert_eq!(resolve_api_version("").unwrap().display_value, "2.1");
    }

    #[test]
    fn version_lookup_is_case_insensitive() {
        assert_eq!(resolve_api_version("2.X").unwrap().display_value, "2.x");
    }

    #[test]
    fn unknown_version_carries_raw_string() {
        let err = resolve_api_version("3.0").unwrap_err();
        assert_eq!(err, DomainError::UnknownApiVersion("3.0".into()));
    }

    #[test]
    fn deprecated_bare_versions_are_rejected() {
        assert!(resolve_api_version("2").is_err());
        assert!(resolve_api_version("1").is_err());
    }

    // ── resolve_modules ───────────────────────────────────────────────────

    #[test]
    fn modules_resolve_in_input_order() {
        let raw = vec!["search".to_string(), "record".to_string()];
        let entries = resolve_modules(&raw).unwrap();
        assert_eq!(entries[0].path, "search");
        assert_eq!(entries[1].path, "record");
    }

    #[test]
    fn duplicate_tokens_are_preserved() {
        let raw = vec!["record".to_string(), "record".to_string()];
        let entries = resolve_modules(&raw).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn case_mangled_module_resolves_to_cased_path() {
        let raw = vec!["currentrecord".to_string()];
        let entries = resolve_modules(&raw).unwrap();
        assert_eq!(entries[0].path, "currentRecord");
        assert_eq!(entries[0].parameter, "currentRecord");
    }

    #[test]
    fn nested_module_path_resolves() {
        let raw = vec!["ui/serverwidget".to_string()];
        let entries = resolve_modules(&raw).unwrap();
        assert_eq!(entries[0].path, "ui/serverWidget");
        assert_eq!(entries[0].parameter, "serverWidget");
    }

    #[test]
    fn any_unknown_token_fails_the_whole_call() {
        let raw = vec!["record".to_string(), "bogus".to_string()];
        let err = resolve_modules(&raw).unwrap_err();
        assert_eq!(err, DomainError::UnknownModule("bogus".into()));
    }

    #[test]
    fn empty_module_list_resolves_to_empty() {
        assert!(resolve_modules(&[]).unwrap().is_empty());
    }

    #[test]
    fn interior_whitespace_is_not_stripped() {
        // Only surrounding whitespace is trimmed; "ui / dialog" stays unknown.
        let raw = vec!["ui / dialog".to_string()];
        assert!(resolve_modules(&raw).is_err());
    }
}
