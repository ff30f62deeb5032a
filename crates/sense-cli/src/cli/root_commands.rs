use clap::{Args, Subcommand};
use sense_core::{GroupKey, GroupOrder, SuccessProxy};

/// Top-level command tree. Without a command, `run` executes with defaults.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load, score, aggregate and chart the dataset.
    Run(RunArgs),
    /// Show shape, columns and first rows of every CSV in the data directory.
    Inspect(InspectArgs),
    /// Score ad-hoc text with the configured lexicon.
    Score(ScoreArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct RunArgs {
    /// Grouping key: genre, publisher, developer, price_tier, sentiment_level
    #[arg(long)]
    pub group_by: Option<GroupKey>,

    /// Group ordering: count (descending) or key
    #[arg(long)]
    pub order: Option<GroupOrder>,

    /// Success proxy: owners or rating
    #[arg(long)]
    pub proxy: Option<SuccessProxy>,

    /// Drop groups with fewer members
    #[arg(long)]
    pub min_group_size: Option<usize>,

    /// Number of groups to report and chart (0 for all)
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Skip writing SVG charts
    #[arg(long)]
    pub no_charts: bool,
}

#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    /// Rows to preview per file
    #[arg(long, default_value_t = 5)]
    pub head: usize,
}

#[derive(Clone, Debug, Args)]
pub struct ScoreArgs {
    /// Texts to score
    #[arg(required = true)]
    pub text: Vec<String>,
}
