//! Input utilities for terminal applications
//!
//! This module provides utilities for handling user input: text sanitization
//! for pasted content and detection of image-looking references.

/// Sanitize text input to prevent TUI corruption
///
/// This function:
/// - Converts tabs to 4 spaces
/// - Converts carriage returns to newlines
/// - Filters out control characters except newlines
///
/// This is used by both the paste path and the attach prompt to ensure
/// consistent text handling across the application.
pub fn sanitize_text_input(text: &str) -> String {
    let mut sanitized = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\t' => sanitized.push_str("    "),
            '\r' => sanitized.push('\n'),
            '\n' => sanitized.push(c),
            _ if !c.is_control() => sanitized.push(c),
            _ => {}
        }
    }

    sanitized
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

/// Whether a path or URL looks like an image reference. Detection is by file
/// extension, with any query or fragment suffix ignored.
pub fn is_image_reference(reference: &str) -> bool {
    let base = reference
        .trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    match base.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e))
        }
        _ => false,
    }
}

/// Collect the whitespace-separated tokens of pasted text that look like
/// image references.
pub fn extract_image_refs(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|tok| is_image_reference(tok))
        .map(|tok| tok.to_string())
        .collect()
}
