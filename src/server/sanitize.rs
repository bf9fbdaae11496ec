//! Upload filename sanitization
//!
//! Uploaded filenames are attacker-controlled; the sanitized form is safe
//! to echo back in responses or use as a path component. Mirrors the usual
//! secure-filename rules: basename only, whitespace collapsed to
//! underscores, anything outside `[A-Za-z0-9_.-]` removed.

use once_cell::sync::Lazy;
use regex::Regex;

static FILENAME_STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").unwrap());

pub fn sanitize_filename(filename: &str) -> String {
    // Basename across both separator conventions
    let normalized = filename.replace('\\', "/");
    let basename = normalized.rsplit('/').next().unwrap_or("");

    let joined = basename.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = FILENAME_STRIP.replace_all(&joined, "");
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        "document".to_string()
    } else {
        trimmed.to_string()
    }
}
