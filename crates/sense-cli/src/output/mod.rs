use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod report;
pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

pub fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

pub fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&["key", "value"], &rows, options))
        }
        scalar => {
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&["value"], &rows, options))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    let options = table_options();

    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v
            .as_f64()
            .filter(|_| v.is_f64())
            .map_or_else(|| v.to_string(), format_float),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

/// Three decimals, `-` for NaN.
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.3}")
    } else {
        String::from("-")
    }
}

#[must_use]
pub fn format_opt(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("-"), format_float)
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{format_opt, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        text: &'static str,
        polarity: f64,
        tokens: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            text: "x",
            polarity: 0.25,
            tokens: 7,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["text"], "x");
        assert_eq!(parsed["tokens"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            text: "x",
            polarity: 0.25,
            tokens: 7,
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_rows_formats_floats() {
        let rows = vec![
            Example {
                text: "great",
                polarity: 0.8,
                tokens: 1,
            },
            Example {
                text: "dull",
                polarity: -0.3,
                tokens: 1,
            },
        ];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().unwrap_or_default();
        assert!(header.starts_with("polarity"));
        assert!(out.contains("0.800"));
        assert!(out.contains("-0.300"));
    }

    #[test]
    fn missing_values_render_as_dash() {
        assert_eq!(format_opt(None), "-");
        assert_eq!(format_opt(Some(f64::NAN)), "-");
        assert_eq!(format_opt(Some(1.0 / 3.0)), "0.333");
    }
}
