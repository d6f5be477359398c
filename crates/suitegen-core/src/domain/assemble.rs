//! The assembler: concatenates fragments into a [`GeneratedDocument`].
//!
//! Total function — it never fails. All failure happened earlier in the
//! normalizer; by the time fragments exist they are valid by construction.

use crate::domain::request::GeneratedDocument;

/// Assemble the final document from the four fragments, in fixed order:
/// copyright block, annotation block, dependency preamble.
///
/// The two annotation lines share one JSDoc block; an empty type line
/// contributes nothing to it. Empty sections contribute no separators, so
/// the rendered output never contains two consecutive blank lines.
pub fn assemble(
    copyright: String,
    type_annotation: String,
    version_annotation: String,
    dependency_preamble: String,
) -> GeneratedDocument {
    let annotation_block = build_annotation_block(&type_annotation, &version_annotation);

    GeneratedDocument::from_sections([copyright, annotation_block, dependency_preamble])
}

/// Wrap the non-empty annotation lines in a single `/** ... */` block.
fn build_annotation_block(type_annotation: &str, version_annotation: &str) -> String {
    let lines: Vec<&str> = [type_annotation, version_annotation]
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return String::new();
    }

    format!("/**\n{}\n */", lines.join("\n"))
}
