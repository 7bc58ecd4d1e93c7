use serde::{Deserialize, Serialize};

pub const DEFAULT_DESCRIPTION_MAX_CHARS: usize = 155;
pub const DEFAULT_DESCRIPTION_MIN_BOUNDARY: usize = 100;
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;
pub const DEFAULT_MAX_KEYWORDS: usize = 5;

/// Path prefix of seeded placeholder images that must never become a featured image.
pub const PLACEHOLDER_IMAGE_PREFIX: &str = "/images/";

/// SEO fields derived from a post title and body.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeoFields {
    pub slug: String,
    pub meta_description: String,
    pub reading_time: u32,
    pub keywords: Vec<String>,
    pub featured_image: Option<String>,
}

impl SeoFields {
    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        ciborium::ser::into_writer(self, &mut buf).expect("CBOR serialization failed");
        buf
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        ciborium::de::from_reader(bytes).ok()
    }
}

/// Limits used by the pipeline. Missing fields take their defaults when
/// deserialized, so a config file only lists what it overrides.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeoConfig {
    pub description_max_chars: usize,
    pub description_min_boundary: usize,
    pub words_per_minute: u32,
    pub max_keywords: usize,
    pub placeholder_image_prefix: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            description_max_chars: DEFAULT_DESCRIPTION_MAX_CHARS,
            description_min_boundary: DEFAULT_DESCRIPTION_MIN_BOUNDARY,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            placeholder_image_prefix: PLACEHOLDER_IMAGE_PREFIX.to_string(),
        }
    }
}
