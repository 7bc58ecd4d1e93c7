use crate::normalization::strip_html;
use crate::types::DEFAULT_WORDS_PER_MINUTE;

/// Estimated minutes to read `content` at 200 words per minute, never below 1.
pub fn calculate_reading_time(content: &str) -> u32 {
    minutes_for_words(count_words(&strip_html(content)), DEFAULT_WORDS_PER_MINUTE)
}

/// Number of whitespace-separated words left after normalization.
pub fn word_count(content: &str) -> usize {
    count_words(&strip_html(content))
}

/// Count whitespace-separated words in already-normalized text.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// `ceil(words / words_per_minute)`, floored at one minute.
/// A zero rate is treated as one word per minute.
pub fn minutes_for_words(words: usize, words_per_minute: u32) -> u32 {
    let wpm = words_per_minute.max(1) as usize;
    let minutes = words.div_ceil(wpm).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}
