//! HTML fragment rendering
//!
//! The two-stage conversion core: classify paragraphs into tagged HTML
//! lines, then group each heading's body run behind a read-more fold.

pub(crate) mod escape;

pub mod classify;
pub mod group;
pub mod ids;

pub use classify::{classify_paragraphs, TaggedLine};
pub use group::group_sections;
pub use ids::SectionIds;

use crate::document::Document;

/// Run the full pipeline: document in, ordered HTML fragments out.
///
/// Pure except for the injected id source; two runs over the same document
/// produce identical output up to the generated section identifiers.
pub fn convert_document(document: &Document, ids: &mut SectionIds) -> Vec<String> {
    let lines = classify_paragraphs(document);
    group_sections(lines, ids)
}
