//! Text cleaning and tokenising.
//!
//! `clean_text` lowercases, strips ASCII punctuation, replaces digit runs with
//! a space, and drops English stopwords. `tokenize` splits the cleaned text on
//! whitespace.

use std::collections::HashSet;
use std::sync::OnceLock;

/// NLTK English stopword list.
pub const STOPWORDS: [&str; 179] = [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

fn stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.into_iter().collect())
}

#[must_use]
pub fn is_stopword(word: &str) -> bool {
    stopwords().contains(word)
}

/// Lowercase, strip punctuation and digits, and drop stopwords.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_punctuation() {
            continue;
        }
        if ch.is_ascii_digit() {
            if !stripped.ends_with(' ') {
                stripped.push(' ');
            }
            continue;
        }
        stripped.push(ch);
    }

    stripped
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace tokens of [`clean_text`].
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    clean_text(text)
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Lowercased words for scoring: stopwords kept, apostrophes inside words kept.
pub(crate) fn scoring_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|w| w.trim_matches(|c| c == '\'' || c == '\u{2019}'))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase().replace('\u{2019}', "'"))
}
