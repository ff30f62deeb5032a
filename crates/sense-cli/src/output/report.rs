//! Sectioned table view of a [`RunReport`].

use std::fmt::Write;

use crate::output::table::{TableOptions, render_entity_table};
use crate::output::{format_float, format_opt, render_table};
use crate::pipeline::RunReport;

fn section(out: &mut String, title: &str, body: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "== {title} ==");
    out.push_str(body);
    out.push('\n');
}

pub fn render_run_report(report: &RunReport, options: TableOptions) -> anyhow::Result<String> {
    let mut out = String::new();

    section(
        &mut out,
        "dataset",
        &format!(
            "{} games from {} (generated {})",
            report.games,
            report.data_dir.display(),
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        ),
    );
    section(&mut out, "join", &render_table(&report.join)?);

    let describe_rows: Vec<Vec<String>> = report
        .describe
        .iter()
        .map(|c| {
            let s = &c.summary;
            vec![
                c.column.clone(),
                s.count.to_string(),
                format_float(s.mean),
                format_float(s.std),
                format_float(s.min),
                format_float(s.p25),
                format_float(s.median),
                format_float(s.p75),
                format_float(s.max),
            ]
        })
        .collect();
    section(
        &mut out,
        "describe",
        &render_entity_table(
            &["column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"],
            &describe_rows,
            options,
        ),
    );

    let group_rows: Vec<Vec<String>> = report
        .aggregates
        .iter()
        .map(|r| {
            vec![
                r.key.clone(),
                r.count.to_string(),
                format_float(r.mean_polarity),
                format_float(r.mean_subjectivity),
                format_opt(r.mean_success),
                format_opt(r.correlation),
            ]
        })
        .collect();
    let success_header = format!("mean {}", report.success_proxy);
    section(
        &mut out,
        &format!(
            "groups by {} ({} of {})",
            report.group_by,
            report.aggregates.len(),
            report.total_groups
        ),
        &render_entity_table(
            &[
                report.group_by.as_str(),
                "count",
                "polarity",
                "subjectivity",
                &success_header,
                "corr",
            ],
            &group_rows,
            options,
        ),
    );

    let mut corr_headers = vec![""];
    corr_headers.extend(report.correlation.labels.iter().map(String::as_str));
    let corr_rows: Vec<Vec<String>> = report
        .correlation
        .labels
        .iter()
        .zip(&report.correlation.values)
        .map(|(label, values)| {
            std::iter::once(label.clone())
                .chain(values.iter().map(|v| format_opt(*v)))
                .collect()
        })
        .collect();
    section(
        &mut out,
        "correlation",
        &render_entity_table(&corr_headers, &corr_rows, options),
    );

    let model = match (&report.model, &report.model_skipped) {
        (Some(model), _) => {
            let mut rows: Vec<Vec<String>> = model
                .features
                .iter()
                .zip(&model.coefficients)
                .map(|(name, coef)| vec![name.clone(), format_float(*coef)])
                .collect();
            rows.push(vec!["intercept".into(), format_float(model.intercept)]);
            format!(
                "target {}, {} train / {} test rows\nr2 train {}, r2 test {}, rmse test {}\n{}",
                model.target,
                model.n_train,
                model.n_test,
                format_opt(model.r2_train),
                format_opt(model.r2_test),
                format_opt(model.rmse_test),
                render_entity_table(&["feature", "coefficient"], &rows, options),
            )
        }
        (None, Some(reason)) => format!("skipped: {reason}"),
        (None, None) => String::from("skipped"),
    };
    section(&mut out, "model", &model);

    let charts = if report.charts.is_empty() {
        String::from("(none)")
    } else {
        report
            .charts
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    };
    section(&mut out, "charts", &charts);

    Ok(out.trim_end().to_string())
}
