use crate::bootstrap;
use crate::cli::{GlobalFlags, OutputFormat, RunArgs};
use crate::output::{output, report, table_options};
use crate::pipeline;

/// Handle `steamsense run`.
pub fn handle(args: &RunArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags, Some(args))?;
    let report = pipeline::run(&config)?;

    tracing::info!(
        games = report.games,
        groups = report.total_groups,
        charts = report.charts.len(),
        "run complete"
    );

    match flags.format {
        OutputFormat::Table => {
            println!("{}", report::render_run_report(&report, table_options())?);
            Ok(())
        }
        format => output(&report, format),
    }
}
