use sha2::{Digest, Sha256};

use crate::types::SeoFields;

/// Fingerprint of a set of SEO fields.
///
/// sha256 over length-prefixed fields in declaration order. Keywords are
/// hashed as a count followed by each length-prefixed word, and the featured
/// image carries a presence byte so `None` and `Some("")` differ.
pub fn fields_hash(fields: &SeoFields) -> [u8; 32] {
    let mut hasher = Sha256::new();
    update_str(&mut hasher, &fields.slug);
    update_str(&mut hasher, &fields.meta_description);
    hasher.update(fields.reading_time.to_be_bytes());
    hasher.update((fields.keywords.len() as u64).to_be_bytes());
    for keyword in &fields.keywords {
        update_str(&mut hasher, keyword);
    }
    match &fields.featured_image {
        Some(url) => {
            hasher.update([1u8]);
            update_str(&mut hasher, url);
        }
        None => hasher.update([0u8]),
    }
    hasher.finalize().into()
}

/// True when `fields` differ from the fingerprint stored with a post.
pub fn fields_changed(fields: &SeoFields, stored: &[u8; 32]) -> bool {
    fields_hash(fields) != *stored
}

fn update_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_be_bytes());
    hasher.update(s.as_bytes());
}
