use std::sync::LazyLock;

use regex::Regex;

use crate::frontmatter::strip_frontmatter;

/// A single Markdown rewrite applied by [`strip_html`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkdownPass {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
}

const fn pass(name: &'static str, pattern: &'static str, replacement: &'static str) -> MarkdownPass {
    MarkdownPass {
        name,
        pattern,
        replacement,
    }
}

/// Markdown passes in application order. Patterns overlap (images before links,
/// bold before italic), so the order is part of the output contract.
pub const MARKDOWN_PASSES: &[MarkdownPass] = &[
    pass("image", r"!\[[^\]]*\]\([^)]*\)", ""),
    pass("link", r"\[([^\]]*)\]\([^)]*\)", "${1}"),
    pass("heading", r"(?m)^#{1,6}\s+", ""),
    pass("bold_asterisk", r"\*\*(.+?)\*\*", "${1}"),
    pass("bold_underscore", r"__(.+?)__", "${1}"),
    pass("italic_asterisk", r"\*(.+?)\*", "${1}"),
    pass("italic_underscore", r"_(.+?)_", "${1}"),
    pass("strikethrough", r"~~(.+?)~~", "${1}"),
    pass("inline_code", r"`([^`\n]+)`", "${1}"),
    pass("fenced_code", r"```(?s:.*?)```", ""),
    pass("blockquote", r"(?m)^[ \t]*> ?", ""),
    pass("horizontal_rule", r"(?mR)^-{3,}[ \t]*$", ""),
    pass("unordered_list", r"(?m)^[ \t]*[-*+]\s+", ""),
    pass("ordered_list", r"(?m)^[ \t]*\d+\.\s+", ""),
];

/// Entities decoded after markup removal, in replacement order.
pub const HTML_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("TAG_RE should compile"));

static COMPILED_PASSES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    MARKDOWN_PASSES
        .iter()
        .map(|p| Regex::new(p.pattern).expect("markdown pass regex should compile"))
        .collect()
});

/// Flatten a document into plain text: frontmatter, HTML tags and Markdown
/// syntax removed, entities decoded, whitespace collapsed.
pub fn strip_html(content: &str) -> String {
    let body = strip_frontmatter(content);
    let mut text = strip_tags(body);
    for (re, pass) in COMPILED_PASSES.iter().zip(MARKDOWN_PASSES) {
        text = re.replace_all(&text, pass.replacement).into_owned();
    }
    let text = decode_entities(&text);
    collapse_whitespace(&text)
}

/// Replace every HTML tag with a single space.
pub fn strip_tags(content: &str) -> String {
    TAG_RE.replace_all(content, " ").into_owned()
}

/// Run one named Markdown pass on its own. Returns `None` for an unknown name.
pub fn apply_pass(name: &str, text: &str) -> Option<String> {
    let idx = MARKDOWN_PASSES.iter().position(|p| p.name == name)?;
    let pass = &MARKDOWN_PASSES[idx];
    Some(COMPILED_PASSES[idx].replace_all(text, pass.replacement).into_owned())
}

/// Decode the supported entities with one ordered replace each.
pub fn decode_entities(text: &str) -> String {
    HTML_ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, literal)| acc.replace(entity, literal))
}

/// Collapse whitespace runs (including newlines and tabs) to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !prev_space {
                result.push(' ');
                prev_space = true;
            }
        } else {
            result.push(c);
            prev_space = false;
        }
    }
    result.trim().to_string()
}
