use std::sync::LazyLock;

use regex::Regex;

use crate::tokenization::strip_accents;

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("NON_SLUG_RE should compile"));
static HYPHEN_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("HYPHEN_RUN_RE should compile"));

/// Longest slug produced by [`generate_slug`] and accepted by [`is_valid_slug`].
pub const MAX_SLUG_LEN: usize = 200;

/// Derive a URL path segment from a title.
///
/// Lowercases, strips diacritics, turns every run of characters outside
/// `[a-z0-9]` into one hyphen and trims hyphens from both ends. Slugs longer
/// than [`MAX_SLUG_LEN`] are cut at the last hyphen that fits. Titles with no
/// letters or digits produce an empty string.
pub fn generate_slug(title: &str) -> String {
    let lower = title.to_lowercase();
    let plain = strip_accents(lower.trim());
    let hyphenated = NON_SLUG_RE.replace_all(&plain, "-");
    let collapsed = HYPHEN_RUN_RE.replace_all(&hyphenated, "-");
    cap_length(collapsed.trim_matches('-')).to_string()
}

/// Cut an ASCII slug to `MAX_SLUG_LEN` bytes, preferring a hyphen boundary.
/// A single word longer than the cap is hard-cut.
fn cap_length(slug: &str) -> &str {
    if slug.len() <= MAX_SLUG_LEN {
        return slug;
    }
    if slug.as_bytes()[MAX_SLUG_LEN] == b'-' {
        return &slug[..MAX_SLUG_LEN];
    }
    let head = &slug[..MAX_SLUG_LEN];
    match head.rfind('-') {
        Some(idx) => &head[..idx],
        None => head,
    }
}

/// Slug for `title`, or the slugified `fallback` when the title yields nothing.
pub fn slug_or(title: &str, fallback: &str) -> String {
    let slug = generate_slug(title);
    if slug.is_empty() {
        generate_slug(fallback)
    } else {
        slug
    }
}

/// Check that a stored slug has the shape [`generate_slug`] produces.
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return false;
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
