use std::sync::LazyLock;

use regex::Regex;

use crate::frontmatter::strip_frontmatter;
use crate::types::PLACEHOLDER_IMAGE_PREFIX;

static IMG_SRC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img\b[^>]*?\ssrc\s*=\s*["']([^"']+)["']"#).expect("IMG_SRC_RE should compile")
});
static MD_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[[^\]]*\]\(\s*([^)\s]+)[^)]*\)").expect("MD_IMAGE_RE should compile")
});

/// First image URL in `content` usable as a thumbnail.
///
/// HTML `<img src>` tags are searched before Markdown `![alt](url)` images.
/// URLs under the `/images/` placeholder path are skipped.
pub fn extract_first_image(content: &str) -> Option<String> {
    first_image_excluding(content, PLACEHOLDER_IMAGE_PREFIX)
}

/// Like [`extract_first_image`] with a caller-chosen placeholder prefix.
/// An empty prefix disables the placeholder filter.
pub fn first_image_excluding(content: &str, placeholder_prefix: &str) -> Option<String> {
    let body = strip_frontmatter(content);
    let usable = |url: &str| placeholder_prefix.is_empty() || !url.starts_with(placeholder_prefix);

    html_image_sources(body)
        .find(|url| usable(url))
        .or_else(|| markdown_image_sources(body).find(|url| usable(url)))
        .map(str::to_string)
}

/// `src` values of every `<img>` tag, in document order.
pub fn html_image_sources(content: &str) -> impl Iterator<Item = &str> {
    IMG_SRC_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Target URLs of every Markdown image, in document order.
pub fn markdown_image_sources(content: &str) -> impl Iterator<Item = &str> {
    MD_IMAGE_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}
