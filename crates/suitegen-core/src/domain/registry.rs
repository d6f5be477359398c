//! Enumeration registries for script types, API versions, and modules.
//!
//! # Design Rationale
//!
//! All fixed vocabulary lives in three static tables, each entry described
//! exactly once. Resolution is an O(n) table walk against the entry's
//! lowercase `lookup_key`; the correctly-cased output forms travel with the
//! entry so no call-site ever re-derives casing.
//!
//! # Adding a New Script Type
//!
//! 1. Add one [`ScriptTypeEntry`] to [`SCRIPT_TYPE_REGISTRY`]
//! 2. That's it — resolution, listing, and emission all derive from the table
//!
//! The same applies to API versions and modules.

// ── Script types ─────────────────────────────────────────────────────────────

/// One recognised SuiteScript entry-point category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptTypeEntry {
    /// Lowercase key the normalizer matches raw input against.
    pub lookup_key: &'static str,

    /// Canonical user-facing spelling (shown by `list`, error messages).
    pub display_name: &'static str,

    /// Exact token emitted after `@NScriptType`.
    ///
    /// NetSuite expects e.g. `MapReduceScript`, not `MapReduce` — the
    /// `Script` suffix applies to some types and not others, so the full
    /// token lives here rather than being synthesised at emit time.
    pub annotation: &'static str,
}

/// Single source of truth for recognised script types.
pub static SCRIPT_TYPE_REGISTRY: &[ScriptTypeEntry] = &[
    ScriptTypeEntry {
        lookup_key: "mapreduce",
        display_name: "MapReduce",
        annotation: "MapReduceScript",
    },
    ScriptTypeEntry {
        lookup_key: "client",
        display_name: "Client",
        annotation: "ClientScript",
    },
    ScriptTypeEntry {
        lookup_key: "userevent",
        display_name: "UserEvent",
        annotation: "UserEventScript",
    },
    ScriptTypeEntry {
        lookup_key: "scheduled",
        display_name: "Scheduled",
        annotation: "ScheduledScript",
    },
    ScriptTypeEntry {
        lookup_key: "suitelet",
        display_name: "Suitelet",
        annotation: "Suitelet",
    },
    ScriptTypeEntry {
        lookup_key: "restlet",
        display_name: "RESTlet",
        annotation: "Restlet",
    },
    ScriptTypeEntry {
        lookup_key: "portlet",
        display_name: "Portlet",
        annotation: "Portlet",
    },
    ScriptTypeEntry {
        lookup_key: "massupdate",
        display_name: "MassUpdate",
        annotation: "MassUpdateScript",
    },
    ScriptTypeEntry {
        lookup_key: "workflowaction",
        display_name: "WorkflowAction",
        annotation: "WorkflowActionScript",
    },
];

// ── API versions ─────────────────────────────────────────────────────────────

/// One accepted `@NApiVersion` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersionEntry {
    /// Lowercase key the normalizer matches raw input against.
    pub lookup_key: &'static str,

    /// Exact value emitted after `@NApiVersion`.
    pub display_value: &'static str,
}

/// Accepted API versions.
///
/// Deliberately the narrow 2.x set: historical variants also accepted bare
/// `2` and `1`, which are treated as deprecated and rejected here.
pub static API_VERSION_REGISTRY: &[ApiVersionEntry] = &[
    ApiVersionEntry {
        lookup_key: "2.0",
        display_value: "2.0",
    },
    ApiVersionEntry {
        lookup_key: "2.x",
        display_value: "2.x",
    },
    ApiVersionEntry {
        lookup_key: "2.1",
        display_value: "2.1",
    },
];

/// Version substituted when the user supplies none.
pub const DEFAULT_API_VERSION: &str = "2.1";

// ── Modules ──────────────────────────────────────────────────────────────────

/// One importable `N/*` framework module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleEntry {
    /// Lowercase key the normalizer matches raw input against.
    pub lookup_key: &'static str,

    /// Correctly-cased path token; emitted as `N/<path>` in the dependency
    /// list. Case matters to the NetSuite module loader.
    pub path: &'static str,

    /// AMD function-parameter identifier, kept in lock-step with `path`
    /// (always the last path segment).
    pub parameter: &'static str,
}

const fn module(lookup_key: &'static str, path: &'static str, parameter: &'static str) -> ModuleEntry {
    ModuleEntry {
        lookup_key,
        path,
        parameter,
    }
}

/// All known SuiteScript 2.x API modules.
pub static MODULE_REGISTRY: &[ModuleEntry] = &[
    module("action", "action", "action"),
    module("auth", "auth", "auth"),
    module("cache", "cache", "cache"),
    module("certificatecontrol", "certificateControl", "certificateControl"),
    module("commerce", "commerce", "commerce"),
    module("compress", "compress", "compress"),
    module("config", "config", "config"),
    module("crypto", "crypto", "crypto"),
    module("crypto/certificate", "crypto/certificate", "certificate"),
    module("currency", "currency", "currency"),
    module("currentrecord", "currentRecord", "currentRecord"),
    module("dataset", "dataset", "dataset"),
    module("datasetlink", "datasetLink", "datasetLink"),
    module("email", "email", "email"),
    module("encode", "encode", "encode"),
    module("error", "error", "error"),
    module("file", "file", "file"),
    module("format", "format", "format"),
    module("format/i18n", "format/i18n", "i18n"),
    module("http", "http", "http"),
    module("https", "https", "https"),
    module("https/clientcertificate", "https/clientCertificate", "clientCertificate"),
    module("keycontrol", "keyControl", "keyControl"),
    module("log", "log", "log"),
    module("piremoval", "piremoval", "piremoval"),
    module("plugin", "plugin", "plugin"),
    module("portlet", "portlet", "portlet"),
    module("query", "query", "query"),
    module("record", "record", "record"),
    module("recordcontext", "recordContext", "recordContext"),
    module("redirect", "redirect", "redirect"),
    module("render", "render", "render"),
    module("runtime", "runtime", "runtime"),
    module("search", "search", "search"),
    module("sftp", "sftp", "sftp"),
    module("sso", "sso", "sso"),
    module("suiteappinfo", "suiteAppInfo", "suiteAppInfo"),
    module("task", "task", "task"),
    module("task/accounting/recognition", "task/accounting/recognition", "recognition"),
    module("transaction", "transaction", "transaction"),
    module("translation", "translation", "translation"),
    module("ui/dialog", "ui/dialog", "dialog"),
    module("ui/message", "ui/message", "message"),
    module("ui/serverwidget", "ui/serverWidget", "serverWidget"),
    module("url", "url", "url"),
    module("util", "util", "util"),
    module("workbook", "workbook", "workbook"),
    module("xml", "xml", "xml"),
];

// ── Lookups ──────────────────────────────────────────────────────────────────

/// Find a script type by its exact lookup key (already lowercased).
pub fn find_script_type(key: &str) -> Option<&'static ScriptTypeEntry> {
    SCRIPT_TYPE_REGISTRY.iter().find(|e| e.lookup_key == key)
}

/// Find an API version by its exact lookup key (already lowercased).
pub fn find_api_version(key: &str) -> Option<&'static ApiVersionEntry> {
    API_VERSION_REGISTRY.iter().find(|e| e.lookup_key == key)
}

/// Find a module by its exact lookup key (already lowercased).
pub fn find_module(key: &str) -> Option<&'static ModuleEntry> {
    MODULE_REGISTRY.iter().find(|e| e.lookup_key == key)
}
