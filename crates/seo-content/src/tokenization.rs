use unicode_normalization::UnicodeNormalization;

/// Shortest token kept by [`tokenize`], in chars.
pub const MIN_TOKEN_CHARS: usize = 3;

/// English and Indonesian function words excluded from keyword ranking.
pub const STOP_WORDS: &[&str] = &[
    // English
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "even",
    "few", "for", "from", "further", "get", "got", "had", "has", "have", "having", "he", "her",
    "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "itself", "just", "let", "like", "made", "make", "many", "may",
    "me", "might", "more", "most", "much", "must", "my", "myself", "no", "nor", "not", "now",
    "of", "off", "on", "once", "one", "only", "or", "other", "our", "ours", "ourselves", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "use", "used", "very", "was", "we", "well",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your", "yours", "yourself", "yourselves",
    // Indonesian
    "ada", "adalah", "agar", "akan", "atau", "bagi", "bahwa", "banyak", "belum", "bisa",
    "dalam", "dan", "dapat", "dari", "dengan", "di", "hanya", "harus", "ini", "itu", "jika",
    "juga", "kami", "karena", "ke", "kita", "lebih", "mereka", "namun", "oleh", "pada", "para",
    "saat", "saja", "sangat", "saya", "sebagai", "secara", "seperti", "sudah", "telah",
    "tersebut", "tidak", "untuk", "yang",
];

/// Split already-normalized text into lowercase keyword candidates.
///
/// Tokens are maximal runs of ASCII letters, digits and Latin-1 Supplement /
/// Latin Extended-A/B letters. Short, purely numeric and stop-word tokens are
/// dropped; accents are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_token_char(c))
        .filter(|s| s.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|s| !is_numeric(s))
        .filter(|s| !is_stop_word(s))
        .map(str::to_string)
        .collect()
}

/// Check if a word is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{00C0}'..='\u{024F}').contains(&c)
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Decompose to NFD and drop combining diacritical marks, so `é` becomes `e`.
pub fn strip_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

fn is_combining_mark(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F)
}
