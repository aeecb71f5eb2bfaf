//! Deriving filesystem-safe names from context strings.
//!
//! The context string is usually a URL; the result is a name fragment with no
//! path separators or reserved characters, bounded in length.

use std::path::Path;

/// Name used when no context is available.
pub const FALLBACK_NAME: &str = "unknown_source";

/// Maximum length of a sanitized name, in characters.
pub const MAX_NAME_CHARS: usize = 200;

/// Characters that never appear in a sanitized name.
const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maps a context string to a filesystem-safe filename fragment.
///
/// Empty input yields [`FALLBACK_NAME`]. Every reserved character becomes one
/// underscore (one per character, runs are not collapsed) and the result is
/// cut to [`MAX_NAME_CHARS`] characters. Pure; applying it to its own output
/// changes nothing.
pub fn sanitize_context(raw: &str) -> String {
    if raw.is_empty() {
        return FALLBACK_NAME.to_string();
    }
    raw.chars()
        .take(MAX_NAME_CHARS)
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect()
}

/// Destination file name: `base` plus the source file's extension, or the
/// bare `base` when the source has none.
pub fn target_file_name(base: &str, source: &Path) -> String {
    match source.extension() {
        Some(ext) => format!("{}.{}", base, ext.to_string_lossy()),
        None => base.to_string(),
    }
}
