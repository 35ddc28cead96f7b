/// Result of a normalization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeStats {
    pub text: String,
    pub lines: usize,
    pub removed_bytes: usize,
}

/// Strips leading and trailing whitespace from every line.
///
/// Lines are split on `\n` and joined back with a single `\n`, so a trailing
/// `\r` is dropped along with the rest of the line's edge whitespace.
pub fn normalize(text: &str) -> String {
    text.split('\n').map(str::trim).collect::<Vec<_>>().join("\n")
}

/// Like [`normalize`], also counting lines and removed whitespace.
pub fn normalize_with_stats(text: &str) -> NormalizeStats {
    let normalized = normalize(text);

    NormalizeStats {
        lines: normalized.split('\n').count(),
        removed_bytes: text.len() - normalized.len(),
        text: normalized,
    }
}
