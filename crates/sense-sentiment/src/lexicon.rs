//! Word-level sentiment lexicon.
//!
//! Entries carry a polarity in `[-1, 1]` and a subjectivity in `[0, 1]`.
//! Negations flip the next assessment and intensifiers scale it. A JSON file
//! can extend or override the built-in table:
//!
//! ```json
//! {
//!   "words": { "roguelike": { "polarity": 0.1, "subjectivity": 0.3 } },
//!   "negations": ["nary"],
//!   "intensifiers": { "mega": 1.4 }
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SentimentError;

/// Polarity and subjectivity of one word.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl LexiconEntry {
    #[must_use]
    pub const fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }

    fn check(&self, word: &str) -> Result<(), SentimentError> {
        if !(-1.0..=1.0).contains(&self.polarity) {
            return Err(SentimentError::InvalidEntry {
                word: word.to_string(),
                reason: format!("polarity {} outside [-1, 1]", self.polarity),
            });
        }
        if !(0.0..=1.0).contains(&self.subjectivity) {
            return Err(SentimentError::InvalidEntry {
                word: word.to_string(),
                reason: format!("subjectivity {} outside [0, 1]", self.subjectivity),
            });
        }
        Ok(())
    }
}

// (word, polarity, subjectivity)
pub(crate) const WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("beautifully", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("brilliant", 0.9, 1.0),
    ("captivating", 0.7, 0.9),
    ("charming", 0.5, 1.0),
    ("clever", 0.5, 0.8),
    ("compelling", 0.5, 0.7),
    ("cool", 0.35, 0.65),
    ("creative", 0.5, 0.7),
    ("cute", 0.5, 1.0),
    ("delightful", 1.0, 1.0),
    ("enjoy", 0.4, 0.5),
    ("enjoyable", 0.4, 0.5),
    ("epic", 0.5, 0.6),
    ("excellent", 1.0, 1.0),
    ("exciting", 0.3, 0.8),
    ("fantastic", 0.4, 0.9),
    ("fascinating", 0.6, 0.9),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.7, 1.0),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("immersive", 0.5, 0.7),
    ("incredible", 0.9, 0.9),
    ("innovative", 0.5, 0.6),
    ("interesting", 0.5, 0.5),
    ("love", 0.5, 0.6),
    ("lovely", 0.5, 0.75),
    ("masterpiece", 0.9, 0.9),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("polished", 0.4, 0.6),
    ("popular", 0.6, 0.8),
    ("relaxing", 0.4, 0.6),
    ("rewarding", 0.5, 0.6),
    ("rich", 0.375, 0.625),
    ("satisfying", 0.5, 0.7),
    ("smooth", 0.4, 0.7),
    ("spectacular", 0.8, 0.9),
    ("stunning", 0.5, 1.0),
    ("success", 0.3, 0.3),
    ("superb", 1.0, 1.0),
    ("thrilling", 0.6, 0.8),
    ("unique", 0.375, 1.0),
    ("wonderful", 1.0, 1.0),
    ("win", 0.8, 0.4),
    // negative
    ("annoying", -0.8, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("buggy", -0.5, 0.6),
    ("clunky", -0.5, 0.7),
    ("dark", -0.15, 0.4),
    ("dead", -0.2, 0.4),
    ("disappointing", -0.6, 0.7),
    ("dull", -0.3, 0.6),
    ("evil", -1.0, 1.0),
    ("frustrating", -0.4, 0.7),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("lame", -0.5, 0.75),
    ("mediocre", -0.4, 0.7),
    ("mess", -0.3, 0.5),
    ("messy", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("repetitive", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("scary", -0.5, 1.0),
    ("stupid", -0.8, 1.0),
    ("tedious", -0.5, 0.8),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("unfair", -0.5, 0.75),
    ("unplayable", -0.8, 0.8),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    // mildly descriptive
    ("challenging", 0.1, 0.5),
    ("classic", 0.17, 0.2),
    ("difficult", -0.25, 0.8),
    ("easy", 0.43, 0.83),
    ("hard", -0.29, 0.54),
    ("new", 0.14, 0.45),
    ("old", 0.1, 0.2),
    ("simple", 0.0, 0.36),
    ("strange", -0.1, 0.5),
    ("vast", 0.1, 0.3),
];

pub(crate) const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing", "none", "cannot", "cant", "don't",
    "dont", "doesn't", "doesnt", "didn't", "didnt", "won't", "wont", "wouldn't", "isn't", "isnt",
    "aren't", "wasn't", "weren't", "hardly", "barely",
];

pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("really", 1.2),
    ("truly", 1.2),
    ("super", 1.3),
    ("highly", 1.3),
    ("absolutely", 1.4),
    ("quite", 1.1),
    ("fairly", 0.8),
    ("somewhat", 0.7),
    ("slightly", 0.5),
];

/// Word tables driving the lexicon scorer.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, LexiconEntry>,
    negations: HashSet<String>,
    intensifiers: HashMap<String, f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LexiconFile {
    words: HashMap<String, LexiconEntry>,
    negations: Vec<String>,
    intensifiers: HashMap<String, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The built-in English table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            words: WORDS
                .iter()
                .map(|&(w, p, s)| (w.to_string(), LexiconEntry::new(p, s)))
                .collect(),
            negations: NEGATIONS.iter().map(|w| (*w).to_string()).collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|&(w, m)| (w.to_string(), m))
                .collect(),
        }
    }

    /// The built-in table with the entries of a JSON file merged over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an entry
    /// lies outside the valid ranges.
    pub fn from_json_file(path: &Path) -> Result<Self, SentimentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SentimentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: LexiconFile =
            serde_json::from_str(&raw).map_err(|source| SentimentError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut lexicon = Self::builtin();
        for (word, entry) in file.words {
            entry.check(&word)?;
            lexicon.words.insert(word.to_lowercase(), entry);
        }
        lexicon
            .negations
            .extend(file.negations.into_iter().map(|w| w.to_lowercase()));
        for (word, factor) in file.intensifiers {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(SentimentError::InvalidEntry {
                    word,
                    reason: format!("intensifier factor {factor} must be positive"),
                });
            }
            lexicon.intensifiers.insert(word.to_lowercase(), factor);
        }
        tracing::debug!(
            path = %path.display(),
            words = lexicon.words.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Entry for an already-lowercased word.
    #[must_use]
    pub fn entry(&self, word: &str) -> Option<LexiconEntry> {
        self.words.get(word).copied()
    }

    #[must_use]
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    #[must_use]
    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn builtin_entries_are_in_range() {
        for &(word, p, s) in WORDS {
            assert!(LexiconEntry::new(p, s).check(word).is_ok(), "{word}");
        }
    }

    #[test]
    fn builtin_word_lists_are_distinct() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.len(), WORDS.len());
        for word in NEGATIONS {
            assert!(lexicon.entry(word).is_none(), "{word} is also scored");
        }
    }

    #[test]
    fn json_file_merges_over_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"words": {{"roguelike": {{"polarity": 0.2, "subjectivity": 0.3}},
                           "boring": {{"polarity": -0.5, "subjectivity": 0.5}}}},
                "intensifiers": {{"mega": 1.4}}}}"#
        )
        .unwrap();

        let lexicon = Lexicon::from_json_file(file.path()).unwrap();
        assert_eq!(lexicon.entry("roguelike"), Some(LexiconEntry::new(0.2, 0.3)));
        assert_eq!(lexicon.entry("boring"), Some(LexiconEntry::new(-0.5, 0.5)));
        assert_eq!(lexicon.intensifier("mega"), Some(1.4));
        assert!(lexicon.entry("terrible").is_some());
    }

    #[test]
    fn json_file_rejects_out_of_range_entry() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"words": {{"meh": {{"polarity": -3.0, "subjectivity": 0.5}}}}}}"#)
            .unwrap();

        let err = Lexicon::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, SentimentError::InvalidEntry { ref word, .. } if word == "meh"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Lexicon::from_json_file(Path::new("/nonexistent/lexicon.json")).unwrap_err();
        assert!(matches!(err, SentimentError::Io { .. }));
    }
}
