use sense_config::SentimentConfig;
use sense_core::{GameRecord, ScoredGame, SentimentScore};

use crate::error::SentimentError;
use crate::lexicon::Lexicon;
use crate::text::{scoring_words, tokenize};

/// Words after a negation that its effect still reaches.
const NEGATION_WINDOW: usize = 3;

/// Maps a text to a polarity/subjectivity pair.
///
/// Implementations must be deterministic and must return
/// [`SentimentScore::NEUTRAL`] for empty or whitespace-only text.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> SentimentScore;
}

/// Averages lexicon assessments with negation and intensifier handling.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Lexicon,
    negation_factor: f64,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(Lexicon::builtin(), -0.5)
    }
}

impl LexiconScorer {
    #[must_use]
    pub const fn new(lexicon: Lexicon, negation_factor: f64) -> Self {
        Self {
            lexicon,
            negation_factor,
        }
    }

    /// Scorer for the configured lexicon file, or the built-in table.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured lexicon file cannot be loaded.
    pub fn from_config(config: &SentimentConfig) -> Result<Self, SentimentError> {
        let lexicon = match &config.lexicon_path {
            Some(path) => Lexicon::from_json_file(path)?,
            None => Lexicon::builtin(),
        };
        Ok(Self::new(lexicon, config.negation_factor))
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut assessments = 0_u32;

        // Words remaining in the current negation's reach.
        let mut negation_reach = 0_usize;
        let mut intensity = 1.0_f64;

        for word in scoring_words(text) {
            if self.lexicon.is_negation(&word) {
                negation_reach = NEGATION_WINDOW;
                continue;
            }
            if let Some(factor) = self.lexicon.intensifier(&word) {
                intensity *= factor;
                continue;
            }

            match self.lexicon.entry(&word) {
                Some(entry) => {
                    let mut polarity = (entry.polarity * intensity).clamp(-1.0, 1.0);
                    if negation_reach > 0 {
                        polarity *= self.negation_factor;
                    }
                    polarity_sum += polarity;
                    subjectivity_sum += (entry.subjectivity * intensity).min(1.0);
                    assessments += 1;
                    negation_reach = 0;
                }
                None => {
                    negation_reach = negation_reach.saturating_sub(1);
                }
            }
            intensity = 1.0;
        }

        if assessments == 0 {
            return SentimentScore::NEUTRAL;
        }
        let n = f64::from(assessments);
        SentimentScore::new(polarity_sum / n, subjectivity_sum / n)
    }
}

/// Score every record's description.
///
/// Records without a non-blank description score neutral with zero tokens.
pub fn score_games<S: SentimentScorer + ?Sized>(
    scorer: &S,
    records: Vec<GameRecord>,
) -> Vec<ScoredGame> {
    let scored: Vec<ScoredGame> = records
        .into_iter()
        .map(|record| {
            let (score, token_count) = match record.description.as_deref() {
                Some(text) if record.has_description() => {
                    (scorer.score(text), tokenize(text).len())
                }
                _ => (SentimentScore::NEUTRAL, 0),
            };
            ScoredGame {
                record,
                score,
                token_count,
            }
        })
        .collect();
    tracing::debug!(games = scored.len(), "scored descriptions");
    scored
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::lexicon::{INTENSIFIERS, NEGATIONS, WORDS};

    fn scorer() -> LexiconScorer {
        LexiconScorer::default()
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t ")]
    #[case("A game about boxes and corridors.")]
    #[case("12345 !!! ???")]
    fn unassessed_text_is_neutral(#[case] text: &str) {
        assert_eq!(scorer().score(text), SentimentScore::NEUTRAL);
    }

    #[test]
    fn positive_beats_negative() {
        let s = scorer();
        let good = s.score("An amazing, delightful adventure");
        let bad = s.score("A terrible, frustrating mess");
        assert!(good.polarity > bad.polarity, "{good:?} vs {bad:?}");
        assert!(good.polarity > 0.0);
        assert!(bad.polarity < 0.0);
    }

    #[test]
    fn negation_flips_and_damps() {
        let s = scorer();
        let great = s.score("a great game").polarity;
        let negated = s.score("not a great game").polarity;
        assert!(great > 0.0);
        assert!((negated - great * -0.5).abs() < 1e-12);
    }

    #[test]
    fn negation_reach_is_bounded() {
        let s = scorer();
        let far = s.score("not one of the many levels is great").polarity;
        assert!(far > 0.0);
    }

    #[test]
    fn intensifier_scales_next_word() {
        let s = scorer();
        let plain = s.score("an interesting story");
        let boosted = s.score("a very interesting story");
        assert!(boosted.polarity > plain.polarity);
        assert!(boosted.subjectivity > plain.subjectivity);
    }

    fn assert_in_range(s: &LexiconScorer, text: &str) {
        let score = s.score(text);
        assert!((-1.0..=1.0).contains(&score.polarity), "{text}: {score:?}");
        assert!((0.0..=1.0).contains(&score.subjectivity), "{text}: {score:?}");
    }

    #[test]
    fn scores_stay_in_range() {
        let s = scorer();
        let prefixes: Vec<String> = NEGATIONS
            .iter()
            .map(ToString::to_string)
            .chain(INTENSIFIERS.iter().map(|(word, _)| (*word).to_string()))
            .chain(
                INTENSIFIERS
                    .iter()
                    .map(|(word, _)| format!("{word} {word} {word}")),
            )
            .chain(NEGATIONS.iter().flat_map(|negation| {
                INTENSIFIERS
                    .iter()
                    .map(move |(word, _)| format!("{negation} {word} {word}"))
            }))
            .chain(std::iter::once(String::new()))
            .collect();

        for (word, _, _) in WORDS {
            for prefix in &prefixes {
                assert_in_range(&s, &format!("{prefix} {word}"));
            }
        }

        let every_word: Vec<&str> = WORDS.iter().map(|(word, _, _)| *word).collect();
        let stacked: String = INTENSIFIERS
            .iter()
            .map(|(word, _)| *word)
            .collect::<Vec<_>>()
            .join(" ");
        assert_in_range(&s, &every_word.join(" "));
        let separator = format!(" {stacked} ");
        assert_in_range(
            &s,
            &format!("{stacked} {}", every_word.join(separator.as_str())),
        );
        assert_in_range(&s, &format!("{} {}", NEGATIONS.join(" "), every_word.join(" ")));
    }

    #[test]
    fn blank_description_is_not_scored() {
        let mut blank = GameRecord::new(3, "Blank");
        blank.description = Some(" \n\t ".into());
        let scored = score_games(&scorer(), vec![blank]);
        assert_eq!(scored[0].score, SentimentScore::NEUTRAL);
        assert_eq!(scored[0].token_count, 0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let s = scorer();
        let text = "A beautifully crafted, but sometimes tedious, puzzle game.";
        assert_eq!(s.score(text), s.score(text));
    }

    #[test]
    fn score_games_keeps_order_and_counts_tokens() {
        let mut with_text = GameRecord::new(1, "Shiny");
        with_text.description = Some("A wonderful, relaxing farming game".into());
        let without_text = GameRecord::new(2, "Blank");

        let scored = score_games(&scorer(), vec![with_text, without_text]);
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].record.id, 1);
        assert_eq!(scored[0].token_count, 4);
        assert!(scored[0].score.polarity > 0.0);
        assert_eq!(scored[1].score, SentimentScore::NEUTRAL);
        assert_eq!(scored[1].token_count, 0);
    }

    #[test]
    fn from_config_uses_negation_factor() {
        let config = SentimentConfig {
            lexicon_path: None,
            negation_factor: -1.0,
        };
        let s = LexiconScorer::from_config(&config).unwrap();
        let great = s.score("great").polarity;
        assert_eq!(s.score("never great").polarity, -great);
    }
}
