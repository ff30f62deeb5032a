use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, InspectArgs, RunArgs, ScoreArgs};

/// Top-level CLI parser for the `steamsense` binary.
#[derive(Debug, Parser)]
#[command(
    name = "steamsense",
    version,
    about = "Sentiment of Steam game descriptions against market success"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the CSV files (overrides data.dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory for charts (overrides output.dir)
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            data_dir: self.data_dir.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use sense_core::{GroupKey, GroupOrder, SuccessProxy};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["steamsense"]).expect("cli should parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "steamsense",
            "--format",
            "json",
            "--data-dir",
            "/tmp/steam",
            "--verbose",
            "inspect",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        let flags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some(Path::new("/tmp/steam")));
        assert!(matches!(cli.command, Some(Commands::Inspect(ref a)) if a.head == 5));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["steamsense", "run", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn run_flags_parse_domain_enums() {
        let cli = Cli::try_parse_from([
            "steamsense",
            "run",
            "--group-by",
            "price-tier",
            "--order",
            "key",
            "--proxy",
            "rating",
            "--no-charts",
        ])
        .expect("cli should parse");

        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.group_by, Some(GroupKey::PriceTier));
        assert_eq!(args.order, Some(GroupOrder::Key));
        assert_eq!(args.proxy, Some(SuccessProxy::Rating));
        assert!(args.no_charts);
    }

    #[test]
    fn run_rejects_unknown_group_key() {
        let parsed = Cli::try_parse_from(["steamsense", "run", "--group-by", "colour"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["steamsense", "--format", "xml"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn score_requires_text() {
        assert!(Cli::try_parse_from(["steamsense", "score"]).is_err());
        let cli = Cli::try_parse_from(["steamsense", "score", "great fun", "dull"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Some(Commands::Score(ref a)) if a.text.len() == 2));
    }
}
