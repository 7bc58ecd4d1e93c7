mod fixtures;

use seo_content::description::generate_meta_description;
use seo_content::extraction::extract_first_image;
use seo_content::keywords::extract_keywords;
use seo_content::reading_time::calculate_reading_time;
use seo_content::slug::generate_slug;
use seo_content::{process_seo, process_seo_with, SeoConfig, SeoFields};

#[test]
fn end_to_end_blog_post() {
    let fields = process_seo(
        "My Amazing Café Post!",
        "<h1>Intro</h1><p>This is a **great** post about coffee, coffee, and more coffee in Jakarta.</p>",
    );
    assert_eq!(fields.slug, "my-amazing-cafe-post");
    assert_eq!(fields.reading_time, 1);
    assert_eq!(fields.keywords, vec!["coffee", "intro", "great", "post", "jakarta"]);
    assert_eq!(fields.featured_image, None);
    assert_eq!(
        fields.meta_description,
        "Intro This is a great post about coffee, coffee, and more coffee in Jakarta."
    );
}

#[test]
fn empty_input() {
    let fields = process_seo("", "");
    assert_eq!(
        fields,
        SeoFields {
            slug: String::new(),
            meta_description: String::new(),
            reading_time: 1,
            keywords: vec![],
            featured_image: None,
        }
    );
}

#[test]
fn frontmatter_excluded_from_all_text_fields() {
    let doc = "---\ntitle: x\n---\n\nHello world";
    let fields = process_seo("Hello", doc);
    assert_eq!(fields.meta_description, "Hello world");
    assert_eq!(fields.reading_time, 1);
    assert_eq!(fields.keywords, vec!["hello", "world"]);
}

#[test]
fn matches_individual_producers() {
    let title = "Panduan Kopi Nusantara";
    let doc = fixtures::mixed_post();
    let fields = process_seo(title, &doc);
    assert_eq!(fields.slug, generate_slug(title));
    assert_eq!(fields.meta_description, generate_meta_description(&doc));
    assert_eq!(fields.reading_time, calculate_reading_time(&doc));
    assert_eq!(fields.keywords, extract_keywords(&doc));
    assert_eq!(fields.featured_image, extract_first_image(&doc));
}

#[test]
fn mixed_post_fields() {
    let fields = process_seo("Panduan Kopi", &fixtures::mixed_post());
    assert_eq!(fields.slug, "panduan-kopi");
    assert_eq!(fields.keywords[0], "kopi");
    assert_eq!(
        fields.featured_image.as_deref(),
        Some("https://cdn.example.com/beans.jpg")
    );
}

#[test]
fn custom_config() {
    let config = SeoConfig {
        words_per_minute: 100,
        max_keywords: 2,
        placeholder_image_prefix: "/uploads/".to_string(),
        ..SeoConfig::default()
    };
    let body = format!(
        "{} ![a](/uploads/a.png) ![b](/images/b.png)",
        fixtures::repeat_word("rust", 150)
    );
    let fields = process_seo_with("Rust", &body, &config);
    assert_eq!(fields.reading_time, 2);
    assert_eq!(fields.keywords, vec!["rust"]);
    assert_eq!(fields.featured_image.as_deref(), Some("/images/b.png"));
}

#[test]
fn default_config_matches_process_seo() {
    let doc = fixtures::mixed_post();
    assert_eq!(
        process_seo("Title", &doc),
        process_seo_with("Title", &doc, &SeoConfig::default())
    );
}
