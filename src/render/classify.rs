//! Paragraph classification
//!
//! This module walks a document's paragraph list and emits one HTML-tagged
//! line per non-empty paragraph: headings become `<h3>`, everything else
//! becomes `<p>`. Empty paragraphs are dropped entirely (they do not even
//! act as section separators downstream).

use crate::document::Document;

use super::escape::escape_html;

/// A classified paragraph carrying its rendered HTML.
///
/// The variant is the classification; downstream code matches on it rather
/// than re-deriving the kind from the rendered markup. Heading level is not
/// carried: every level renders as `<h3>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaggedLine {
    Heading(String),
    Body(String),
}

impl TaggedLine {
    /// The rendered HTML, independent of classification.
    pub fn html(&self) -> &str {
        match self {
            TaggedLine::Heading(html) | TaggedLine::Body(html) => html,
        }
    }
}

/// Detect whether a Word style name denotes a heading, any level.
///
/// Word names its built-in heading styles "Heading1" through "Heading9";
/// some producers emit a lowercase variant.
fn is_heading_style(style: &str) -> bool {
    style.starts_with("Heading") || style.starts_with("heading")
}

/// Classify every paragraph of a document into tagged HTML lines.
///
/// Pure transformation: trims each paragraph's text, skips empties, escapes
/// HTML-special characters, and collapses all heading levels to `<h3>`.
pub fn classify_paragraphs(document: &Document) -> Vec<TaggedLine> {
    let mut lines = Vec::new();

    for paragraph in &document.paragraphs {
        let text = paragraph.text.trim();
        if text.is_empty() {
            continue;
        }

        let text = escape_html(text);
        if is_heading_style(&paragraph.style) {
            lines.push(TaggedLine::Heading(format!("<h3>{text}</h3>")));
        } else {
            lines.push(TaggedLine::Body(format!("<p>{text}</p>")));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, DocumentMetadata, Paragraph};

    fn doc(paragraphs: Vec<Paragraph>) -> Document {
        Document {
            title: "test".to_string(),
            metadata: DocumentMetadata {
                source: "test.docx".to_string(),
                file_size: 0,
                word_count: 0,
                paragraph_count: paragraphs.len(),
            },
            paragraphs,
        }
    }

    #[test]
    fn test_heading_styles_any_level_collapse_to_h3() {
        let document = doc(vec![
            Paragraph::new("Heading1", "One"),
            Paragraph::new("Heading2", "Two"),
            Paragraph::new("Heading9", "Nine"),
            Paragraph::new("heading 4", "Lower"),
        ]);

        let lines = classify_paragraphs(&document);
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert!(matches!(line, TaggedLine::Heading(_)));
            assert!(line.html().starts_with("<h3>"), "got {}", line.html());
        }
    }

    #[test]
    fn test_body_and_unstyled_paragraphs_become_p() {
        let document = doc(vec![
            Paragraph::new("Normal", "Body text"),
            Paragraph::new("", "Unstyled"),
        ]);

        let lines = classify_paragraphs(&document);
        assert_eq!(
            lines,
            vec![
                TaggedLine::Body("<p>Body text</p>".to_string()),
                TaggedLine::Body("<p>Unstyled</p>".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_and_whitespace_paragraphs_are_dropped() {
        let document = doc(vec![
            Paragraph::new("Normal", ""),
            Paragraph::new("Normal", "   \t "),
            Paragraph::new("Heading1", "  "),
        ]);

        assert!(classify_paragraphs(&document).is_empty());
    }

    #[test]
    fn test_text_is_html_escaped() {
        let document = doc(vec![Paragraph::new(
            "Normal",
            "<script>alert('x')</script> & co",
        )]);

        let lines = classify_paragraphs(&document);
        assert_eq!(
            lines[0].html(),
            "<p>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; co</p>"
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let document = doc(vec![Paragraph::new("Heading1", "  Intro  ")]);

        let lines = classify_paragraphs(&document);
        assert_eq!(lines[0].html(), "<h3>Intro</h3>");
    }
}
