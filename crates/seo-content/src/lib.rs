//! SEO field derivation for blog posts: slug, meta description, reading time,
//! keywords and featured image.
//!
//! Every function is pure and total over `&str` input. Content may mix
//! frontmatter, HTML and Markdown; it is flattened once by
//! [`normalization::strip_html`] and the flattened text feeds the description,
//! reading-time and keyword producers. The featured image is read from the raw
//! content because flattening removes image references.

pub mod description;
pub mod extraction;
pub mod frontmatter;
pub mod hashing;
pub mod keywords;
pub mod normalization;
pub mod pipeline;
pub mod reading_time;
pub mod slug;
pub mod tokenization;
pub mod types;

pub use pipeline::{process_seo, process_seo_with};
pub use types::{SeoConfig, SeoFields};
