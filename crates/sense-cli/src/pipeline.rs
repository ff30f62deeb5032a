//! The analysis pipeline behind `steamsense run`:
//! load → join → score → describe → aggregate → correlate → fit → chart.
//!
//! Each stage consumes the previous stage's output; nothing is shared or
//! persisted between runs.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sense_config::SenseConfig;
use sense_core::{AggregateRow, GameRecord, GroupKey, ScoredGame, SuccessProxy};
use sense_data::{CsvLoader, JoinReport};
use sense_sentiment::{LexiconScorer, score_games};
use sense_stats::{
    AggregateOptions, CorrelationMatrix, ModelReport, Predictor, StatsError, Summary, aggregate,
    correlation_matrix, describe_games,
};
use sense_viz::{ChartInputs, ChartSize};

use crate::progress::Progress;

const SCORE_CHUNK: usize = 512;

/// Summary of one numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Everything one run produces.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub data_dir: PathBuf,
    pub join: JoinReport,
    pub games: usize,
    pub group_by: GroupKey,
    pub success_proxy: SuccessProxy,
    pub describe: Vec<ColumnSummary>,
    /// Groups after ordering and the `top_n` cut.
    pub aggregates: Vec<AggregateRow>,
    /// Groups before the `top_n` cut.
    pub total_groups: usize,
    pub correlation: CorrelationMatrix,
    pub model: Option<ModelReport>,
    /// Why no model was fitted, when `model` is absent.
    pub model_skipped: Option<String>,
    pub charts: Vec<PathBuf>,
}

/// Run every stage with `config` and collect the results.
pub fn run(config: &SenseConfig) -> anyhow::Result<RunReport> {
    let spinner = Progress::spinner("loading CSV files");
    let loader = CsvLoader::new(&config.data.encodings).context("failed to open DuckDB")?;
    let joined = match sense_data::load_joined(&loader, &config.data) {
        Ok(joined) => joined,
        Err(error) => {
            spinner.finish_err("loading failed");
            return Err(error).context("failed to load dataset");
        }
    };
    spinner.finish_clear();

    let scorer = LexiconScorer::from_config(&config.sentiment).context("failed to load lexicon")?;
    let scored = score_with_progress(&scorer, joined.records);

    let describe = describe_games(&scored)
        .into_iter()
        .map(|(column, summary)| ColumnSummary { column, summary })
        .collect();

    let analysis = &config.analysis;
    let mut aggregates = aggregate(
        &scored,
        analysis.group_by,
        analysis.success_proxy,
        AggregateOptions {
            order: analysis.order,
            min_group_size: analysis.min_group_size,
        },
    );
    let total_groups = aggregates.len();
    if analysis.top_n > 0 {
        aggregates.truncate(analysis.top_n);
    }

    let correlation = correlation_matrix(&scored);
    let (model, model_skipped) = fit_model(config, &scored)?;

    let charts = if config.output.charts {
        let spinner = Progress::spinner("rendering charts");
        let paths = sense_viz::render_all(
            &config.output.dir,
            &ChartInputs {
                games: &scored,
                rows: &aggregates,
                matrix: &correlation,
                key: analysis.group_by,
                proxy: analysis.success_proxy,
            },
            ChartSize {
                width: config.output.width,
                height: config.output.height,
            },
        );
        spinner.finish_clear();
        paths.context("failed to render charts")?
    } else {
        Vec::new()
    };

    Ok(RunReport {
        generated_at: Utc::now(),
        data_dir: config.data.dir.clone(),
        join: joined.report,
        games: scored.len(),
        group_by: analysis.group_by,
        success_proxy: analysis.success_proxy,
        describe,
        aggregates,
        total_groups,
        correlation,
        model,
        model_skipped,
        charts,
    })
}

fn score_with_progress(scorer: &LexiconScorer, records: Vec<GameRecord>) -> Vec<ScoredGame> {
    let bar = Progress::bar(records.len() as u64, "scoring descriptions");
    let mut scored = Vec::with_capacity(records.len());
    let mut rest = records;
    while !rest.is_empty() {
        let tail = rest.split_off(SCORE_CHUNK.min(rest.len()));
        let chunk = std::mem::replace(&mut rest, tail);
        bar.inc(chunk.len() as u64);
        scored.extend(score_games(scorer, chunk));
    }
    bar.finish_clear();
    scored
}

/// A dataset too small or too degenerate to model is reported, not fatal.
fn fit_model(
    config: &SenseConfig,
    scored: &[ScoredGame],
) -> anyhow::Result<(Option<ModelReport>, Option<String>)> {
    let predictor = Predictor::new(config.analysis.ridge, config.analysis.test_fraction)
        .context("invalid model settings")?;
    match predictor.fit(scored, config.analysis.success_proxy) {
        Ok(report) => Ok((Some(report), None)),
        Err(error @ (StatsError::InsufficientData { .. } | StatsError::Singular)) => {
            tracing::warn!(%error, "skipping success model");
            Ok((None, Some(error.to_string())))
        }
        Err(error) => Err(error).context("failed to fit success model"),
    }
}
