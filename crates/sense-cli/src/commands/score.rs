use anyhow::Context;
use serde::Serialize;
use sense_core::SentimentLevel;
use sense_sentiment::{LexiconScorer, SentimentScorer, tokenize};

use crate::bootstrap;
use crate::cli::{GlobalFlags, ScoreArgs};
use crate::output::output;

#[derive(Debug, Serialize)]
struct ScoreRow {
    text: String,
    polarity: f64,
    subjectivity: f64,
    level: SentimentLevel,
    tokens: usize,
}

fn score_rows<S: SentimentScorer>(scorer: &S, texts: &[String]) -> Vec<ScoreRow> {
    texts
        .iter()
        .map(|text| {
            let score = scorer.score(text);
            ScoreRow {
                text: text.clone(),
                polarity: score.polarity,
                subjectivity: score.subjectivity,
                level: score.level(),
                tokens: tokenize(text).len(),
            }
        })
        .collect()
}

/// Handle `steamsense score`.
pub fn handle(args: &ScoreArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags, None)?;
    let scorer = LexiconScorer::from_config(&config.sentiment).context("failed to load lexicon")?;
    output(&score_rows(&scorer, &args.text), flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rows_follow_argument_order() {
        let texts = vec![
            "An amazing, delightful adventure".to_string(),
            String::new(),
            "A terrible, frustrating mess".to_string(),
        ];
        let rows = score_rows(&LexiconScorer::default(), &texts);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].level, SentimentLevel::VeryPositive);
        assert_eq!(rows[1].polarity, 0.0);
        assert_eq!(rows[1].level, SentimentLevel::Neutral);
        assert!(rows[2].polarity < 0.0);
        assert_eq!(rows[2].tokens, 3);
    }
}
