use std::collections::HashMap;

use crate::normalization::strip_html;
use crate::tokenization::tokenize;
use crate::types::DEFAULT_MAX_KEYWORDS;

/// Up to five most frequent meaningful words in `content`.
pub fn extract_keywords(content: &str) -> Vec<String> {
    top_keywords(&strip_html(content), DEFAULT_MAX_KEYWORDS)
}

/// Rank the tokens of already-normalized text by frequency.
///
/// Ties keep the order in which words first appear.
pub fn top_keywords(text: &str, limit: usize) -> Vec<String> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text) {
        match positions.get(&token) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }
    // Stable sort: equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(limit).map(|(word, _)| word).collect()
}
