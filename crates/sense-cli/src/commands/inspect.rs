use std::fmt::Write;

use anyhow::Context;
use sense_data::{CsvLoader, TableSummary};

use crate::bootstrap;
use crate::cli::{GlobalFlags, InspectArgs, OutputFormat};
use crate::output::table::render_entity_table;
use crate::output::{output, table_options};

/// Handle `steamsense inspect`.
pub fn handle(args: &InspectArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags, None)?;
    let loader = CsvLoader::new(&config.data.encodings).context("failed to open DuckDB")?;
    let summaries = loader
        .inspect_dir(&config.data.dir, args.head)
        .context("failed to inspect data directory")?;

    match flags.format {
        OutputFormat::Table => {
            println!("{}", render_summaries(&summaries));
            Ok(())
        }
        format => output(&summaries, format),
    }
}

fn render_summaries(summaries: &[TableSummary]) -> String {
    let options = table_options();
    let mut out = String::new();
    for summary in summaries {
        if !out.is_empty() {
            out.push('\n');
        }
        if let Some(error) = &summary.error {
            let _ = writeln!(out, "== {} == unreadable: {error}", summary.file);
            continue;
        }
        let _ = writeln!(
            out,
            "== {} == {} rows x {} columns",
            summary.file,
            summary.rows,
            summary.columns.len()
        );
        let headers: Vec<&str> = summary.columns.iter().map(String::as_str).collect();
        let rows: Vec<Vec<String>> = summary
            .head
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.clone().unwrap_or_else(|| String::from("-")))
                    .collect()
            })
            .collect();
        out.push_str(&render_entity_table(&headers, &rows, options));
        out.push('\n');
    }
    if out.is_empty() {
        out.push_str("(no CSV files)");
    }
    out.trim_end().to_string()
}
