//! Core data structures for document representation
//!
//! This module defines the public types used to represent a parsed document:
//! an ordered list of styled paragraphs plus source metadata.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub metadata: DocumentMetadata,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Where the bytes came from: a file path or an uploaded filename.
    pub source: String,
    pub file_size: u64,
    pub word_count: usize,
    pub paragraph_count: usize,
}

/// A single paragraph as Word stored it: the style name (empty when the
/// paragraph carries no explicit style) and the raw extracted text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    pub style: String,
    pub text: String,
}

impl Paragraph {
    pub fn new(style: impl Into<String>, text: impl Into<String>) -> Self {
        Paragraph {
            style: style.into(),
            text: text.into(),
        }
    }
}
