//! Path cleaning and default output naming shared by every file operation.
use std::path::MAIN_SEPARATOR;

use crate::compression::Algorithm;
use crate::constants::{ARCHIVE_INFIX, DECOMPRESSED_SUFFIX};

/// Normalize a user supplied path string.
///
/// Trims surrounding whitespace, strips one matching pair of enclosing `"` or
/// `'`, then rewrites `/` to the platform separator.
pub fn clean_path(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = strip_matching_quotes(trimmed);
    unquoted.replace('/', &MAIN_SEPARATOR.to_string())
}

fn strip_matching_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// `<input>.<tag>`
pub fn default_compressed_path(input: &str, algorithm: Algorithm) -> String {
    format!("{input}{}", algorithm.extension())
}

/// `<dir>.archive.<tag>`
pub fn default_archive_path(directory: &str, algorithm: Algorithm) -> String {
    format!("{directory}{ARCHIVE_INFIX}{}", algorithm.extension())
}

/// Replace a trailing `.<tag>` with `.decompressed`, or append `.decompressed`
/// when the input does not carry the algorithm's extension.
pub fn default_decompressed_path(input: &str, algorithm: Algorithm) -> String {
    let stem = input.strip_suffix(&algorithm.extension()).unwrap_or(input);
    format!("{stem}{DECOMPRESSED_SUFFIX}")
}

/// Cleaned explicit output path, or `fallback` when none (or an empty one) was given.
pub fn resolve_output_path(explicit: Option<&str>, fallback: impl FnOnce() -> String) -> String {
    match explicit.map(clean_path) {
        Some(path) if !path.is_empty() => path,
        _ => fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn native(s: &str) -> String {
        s.replace('/', &MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn clean_path_strips_quotes_and_whitespace() {
        assert_eq!(clean_path("  \"/tmp/a b.txt\"  "), native("/tmp/a b.txt"));
        assert_eq!(clean_path("'data/x'"), native("data/x"));
        assert_eq!(clean_path("plain"), "plain");
    }

    #[test]
    fn clean_path_keeps_unmatched_quotes() {
        assert_eq!(clean_path("\"half"), "\"half");
        assert_eq!(clean_path("'mixed\""), "'mixed\"");
        assert_eq!(clean_path("\""), "\"");
    }

    #[test]
    fn default_names() {
        assert_eq!(default_compressed_path("note.txt", Algorithm::Zstd), "note.txt.zstd");
        assert_eq!(default_archive_path("docs", Algorithm::Lz4), "docs.archive.lz4");
        assert_eq!(
            default_decompressed_path("note.txt.zstd", Algorithm::Zstd),
            "note.txt.decompressed"
        );
    }

    #[test]
    fn decompressed_name_only_strips_its_own_extension() {
        assert_eq!(
            default_decompressed_path("note.txt.zstd", Algorithm::Brotli),
            "note.txt.zstd.decompressed"
        );
        assert_eq!(default_decompressed_path("blob", Algorithm::Lz4), "blob.decompressed");
        assert_eq!(default_decompressed_path("xzstd", Algorithm::Zstd), "xzstd.decompressed");
    }

    #[test]
    fn explicit_output_wins_unless_empty() {
        assert_eq!(resolve_output_path(Some(" 'out/x' "), || "fallback".into()), native("out/x"));
        assert_eq!(resolve_output_path(Some(""), || "fallback".into()), "fallback");
        assert_eq!(resolve_output_path(None, || "fallback".into()), "fallback");
    }
}
