use std::sync::LazyLock;

use regex::Regex;

/// Opening `---` line, lazily matched body, closing `---` line with its line ending.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A---\r?\n(?s:.*?)\r?\n---(?:\r?\n|\z)").expect("FRONTMATTER_RE should compile")
});

const DELIMITER: &str = "---";

/// Remove a leading `---` delimited frontmatter block.
///
/// The strict pass requires both delimiters on their own lines (`\n` or `\r\n`).
/// When it does not match but the content still opens with `---`, everything up
/// to and including the next `---` is dropped and the rest is trimmed. Content
/// without a closing delimiter is returned unchanged.
pub fn strip_frontmatter(content: &str) -> &str {
    if !content.starts_with(DELIMITER) {
        return content;
    }
    if let Some(m) = FRONTMATTER_RE.find(content) {
        return &content[m.end()..];
    }
    match content[DELIMITER.len()..].find(DELIMITER) {
        Some(rel) => {
            tracing::trace!("frontmatter closed by loose delimiter at byte {}", rel + DELIMITER.len());
            content[rel + 2 * DELIMITER.len()..].trim()
        }
        None => content,
    }
}
