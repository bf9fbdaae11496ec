//! docfrag: Convert .docx documents into embeddable HTML fragments
//!
//! This library parses Microsoft Word documents into a paragraph list,
//! classifies each paragraph as a heading or body text, and groups each
//! heading's body run behind a client-side "Read More" fold. An axum-based
//! upload service and a small CLI sit on top of the same pipeline.

pub mod config;
pub mod document;
pub mod observability;
pub mod render;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use document::{load_document, parse_document, Document, Paragraph};
pub use render::{convert_document, SectionIds, TaggedLine};
pub use server::{build_router, sanitize_filename};
