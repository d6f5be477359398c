//! Domain errors: every way normalization can reject a request.
//!
//! All failure happens here, before any output text is constructed. The
//! fragment builders and the assembler are total functions.

use thiserror::Error;

use crate::domain::registry::{API_VERSION_REGISTRY, SCRIPT_TYPE_REGISTRY};

/// Root domain error type.
///
/// Every variant carries the original offending raw string so the caller
/// can present an actionable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required filename absent. Normally caught by the CLI layer before
    /// the core is invoked; kept as a defensive check.
    #[error("no output filename was provided")]
    MissingFilename,

    #[error("unknown script type '{0}'")]
    UnknownScriptType(String),

    #[error("unknown API version '{0}'")]
    UnknownApiVersion(String),

    #[error("unknown module '{0}'")]
    UnknownModule(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingFilename => vec![
                "Pass the output file with -f / --filename".into(),
                "Example: suitegen new -f basic.js".into(),
            ],
            Self::UnknownScriptType(raw) => {
                let mut out = vec![
                    format!("'{raw}' is not a recognised script type"),
                    "Known script types:".into(),
                ];
                for entry in SCRIPT_TYPE_REGISTRY {
                    out.push(format!("  • {}", entry.display_name));
                }
                out.push("Matching is case-insensitive: 'mapreduce' works too".into());
                out
            }
            Self::UnknownApiVersion(raw) => {
                let accepted: Vec<&str> = API_VERSION_REGISTRY
                    .iter()
                    .map(|e| e.display_value)
                    .collect();
                vec![
                    format!("'{raw}' is not an accepted API version"),
                    format!("Accepted versions: {}", accepted.join(", ")),
                    "Omit -a / --apiversion to use the default (2.1)".into(),
                ]
            }
            Self::UnknownModule(raw) => vec![
                format!("'{raw}' is not a known N/* module"),
                "Pass the module name without the N/ prefix, e.g. 'record'".into(),
                "List all known modules: suitegen list modules".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingFilename => ErrorCategory::Validation,
            Self::UnknownScriptType(_) | Self::UnknownApiVersion(_) | Self::UnknownModule(_) => {
                ErrorCategory::UnknownValue
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    UnknownValue,
}
