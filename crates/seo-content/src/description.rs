use crate::normalization::strip_html;
use crate::types::SeoConfig;

const ELLIPSIS: &str = "...";

/// Meta description for `content` using the default limits.
pub fn generate_meta_description(content: &str) -> String {
    summarize(&strip_html(content), &SeoConfig::default())
}

/// Summarize already-normalized text to at most `description_max_chars` chars.
///
/// Text that fits is returned verbatim. Longer text is cut at the last space
/// that still leaves room for `...`, provided that space sits past
/// `description_min_boundary`; otherwise it is hard-cut so the result is
/// exactly `description_max_chars` long.
pub fn summarize(text: &str, config: &SeoConfig) -> String {
    let max_chars = config.description_max_chars;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let budget = max_chars.saturating_sub(ELLIPSIS.len());
    if budget == 0 {
        return ELLIPSIS.chars().take(max_chars).collect();
    }

    // Window of `budget + 1` chars: a space at index `budget` still fits.
    let window = truncate_to_chars(text, budget + 1);
    if let Some(byte_idx) = window.rfind(' ') {
        if window[..byte_idx].chars().count() > config.description_min_boundary {
            return format!("{}{}", &window[..byte_idx], ELLIPSIS);
        }
    }
    format!("{}{}", truncate_to_chars(text, budget), ELLIPSIS)
}

fn truncate_to_chars(s: &str, max_chars: usize) -> &str {
    let byte_idx = s
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len());
    &s[..byte_idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_multibyte_chars() {
        assert_eq!(truncate_to_chars("caf\u{00E9}s", 4), "caf\u{00E9}");
        assert_eq!(truncate_to_chars("abc", 10), "abc");
    }

    #[test]
    fn tiny_limit_never_panics() {
        let config = SeoConfig {
            description_max_chars: 2,
            ..SeoConfig::default()
        };
        assert_eq!(summarize("hello world", &config), "..");
    }
}
