//! Request and document types: the core's input and output.
//!
//! Both are immutable after construction. A request flows through the
//! normalizer and fragment builders exactly once per invocation; nothing
//! persists between invocations.

use crate::domain::registry::DEFAULT_API_VERSION;

/// Validated input to the generation pipeline.
///
/// Assembled by the CLI layer from parsed flags. Raw string fields are
/// resolved against the registries by the normalizer; the core only
/// defensively re-checks that `filename` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Output file name; must end in `.js` (enforced upstream).
    pub filename: String,

    /// Raw contents of the companion copyright `.txt` file, if any.
    pub copyright_text: Option<String>,

    /// Raw user-supplied script type, if any. Absence is not an error —
    /// the type annotation is simply omitted.
    pub script_type: Option<String>,

    /// Raw user-supplied API version. Defaults to [`DEFAULT_API_VERSION`].
    pub api_version: String,

    /// Raw module tokens, in the order given. Order determines both the
    /// dependency-path order and the parameter order; duplicates are
    /// preserved as given.
    pub modules: Vec<String>,
}

impl GenerationRequest {
    /// Start a request for the given output file with all optional parts
    /// absent and the default API version.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            copyright_text: None,
            script_type: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            modules: Vec::new(),
        }
    }

    pub fn with_copyright_text(mut self, text: impl Into<String>) -> Self {
        self.copyright_text = Some(text.into());
        self
    }

    pub fn with_script_type(mut self, raw: impl Into<String>) -> Self {
        self.script_type = Some(raw.into());
        self
    }

    pub fn with_api_version(mut self, raw: impl Into<String>) -> Self {
        self.api_version = raw.into();
        self
    }

    pub fn with_modules<I, S>(mut self, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modules = raw.into_iter().map(Into::into).collect();
        self
    }
}

/// The generated output: an ordered sequence of non-empty text sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    sections: Vec<String>,
}

impl GeneratedDocument {
    /// Build a document from candidate sections, dropping empty ones so
    /// omitted sections contribute no separators.
    pub fn from_sections<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections
                .into_iter()
                .map(Into::into)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// The retained (non-empty) sections, in emission order.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Render the final file content: sections separated by exactly one
    /// blank line, with a single trailing newline.
    pub fn render(&self) -> String {
        let mut out = self.sections.join("\n\n");
        out.push('\n');
        out
    }
}
