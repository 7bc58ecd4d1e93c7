use crate::description::summarize;
use crate::extraction::first_image_excluding;
use crate::keywords::top_keywords;
use crate::normalization::strip_html;
use crate::reading_time::{count_words, minutes_for_words};
use crate::slug::generate_slug;
use crate::types::{SeoConfig, SeoFields};

/// Derive all SEO fields for a post with the default limits.
pub fn process_seo(title: &str, content: &str) -> SeoFields {
    process_seo_with(title, content, &SeoConfig::default())
}

/// Derive all SEO fields for a post.
///
/// The body is normalized once; description, reading time and keywords all
/// read that text. The featured image is searched in the raw body.
pub fn process_seo_with(title: &str, content: &str, config: &SeoConfig) -> SeoFields {
    let text = strip_html(content);
    let words = count_words(&text);

    let fields = SeoFields {
        slug: generate_slug(title),
        meta_description: summarize(&text, config),
        reading_time: minutes_for_words(words, config.words_per_minute),
        keywords: top_keywords(&text, config.max_keywords),
        featured_image: first_image_excluding(content, &config.placeholder_image_prefix),
    };

    tracing::debug!(
        slug = %fields.slug,
        words,
        keywords = fields.keywords.len(),
        has_image = fields.featured_image.is_some(),
        "processed seo fields"
    );
    fields
}
