//! Document loading
//!
//! This module turns .docx bytes into our internal `Document`
//! representation: an ordered list of paragraphs, each carrying its Word
//! style name and extracted text. Classification into headings and body
//! paragraphs happens later, in the render pipeline.

use anyhow::Result;
use std::path::Path;

use super::io::validate_docx_file;
use super::models::*;

/// Load a document from a .docx file on disk.
///
/// Validates the file (extension plus ZIP structure) before parsing, so a
/// renamed spreadsheet fails with a useful message instead of a parser
/// error deep inside docx-rs.
pub fn load_document(file_path: &Path) -> Result<Document> {
    validate_docx_file(file_path)?;

    let file_data = std::fs::read(file_path)?;
    let source = file_path.to_string_lossy().to_string();

    let title = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled Document")
        .to_string();

    parse_document_inner(&file_data, source, title)
}

/// Parse a document from in-memory .docx bytes.
///
/// Used by the upload endpoint, which never touches the filesystem:
/// docx-rs reads the ZIP container straight from the byte slice.
pub fn parse_document(data: &[u8], source_name: &str) -> Result<Document> {
    let title = Path::new(source_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled Document")
        .to_string();

    parse_document_inner(data, source_name.to_string(), title)
}

fn parse_document_inner(data: &[u8], source: String, title: String) -> Result<Document> {
    let docx = docx_rs::read_docx(data)?;

    let mut paragraphs = Vec::new();
    let mut word_count = 0;

    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let style = para
                .property
                .style
                .as_ref()
                .map(|s| s.val.clone())
                .unwrap_or_default();
            let text = extract_paragraph_text(para);

            word_count += text.split_whitespace().count();
            paragraphs.push(Paragraph { style, text });
        }
        // Tables, section properties and the rest are out of scope here:
        // the converter only deals in headings and body paragraphs.
    }

    let metadata = DocumentMetadata {
        source,
        file_size: data.len() as u64,
        word_count,
        paragraph_count: paragraphs.len(),
    };

    Ok(Document {
        title,
        metadata,
        paragraphs,
    })
}

/// Extract plain text from a paragraph, handling various child elements
pub(crate) fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                text.push_str(&extract_run_text(run));
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                // Tracked-change insertions still belong to the visible text
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        text.push_str(&extract_run_text(run));
                    }
                }
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Skip deletions (track changes)
            }
            _ => {}
        }
    }

    text
}

/// Extract text from a run using docx-rs features
fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}
