//! Output renderers and formatting helpers for CLI commands.

use std::io::Write;

use anyhow::anyhow;
use flowdeck_catalog::{FilterOutcome, FilterSummary, ItemRecord, encode_catalog_pretty};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::categories::CategoryRow;
use crate::error::{CliError, CliResult};

pub(crate) fn render_filtered<W: Write>(
    outcome: &FilterOutcome<ItemRecord>,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let text = encode_catalog_pretty(&outcome.data)?;
            write_line(out, &text)
        }
        OutputFormat::Table => {
            for (category, items) in &outcome.data {
                let names = if items.is_empty() {
                    "-".to_string()
                } else {
                    items.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
                };
                write_line(out, &format!("{category} ({}): {names}", items.len()))?;
            }
            write_line(out, &summary_line(&outcome.summary))
        }
    }
}

pub(crate) fn render_categories<W: Write>(
    rows: &[CategoryRow],
    format: OutputFormat,
    out: &mut W,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, rows),
        OutputFormat::Table => {
            write_line(
                out,
                &format!("{:<24} {:>5} {:>6} {:>4}", "CATEGORY", "TOTAL", "LEGACY", "BETA"),
            )?;
            for row in rows {
                write_line(
                    out,
                    &format!(
                        "{:<24} {:>5} {:>6} {:>4}",
                        row.name, row.total, row.legacy, row.beta
                    ),
                )?;
            }
            Ok(())
        }
    }
}

#[must_use]
pub(crate) fn summary_line(summary: &FilterSummary) -> String {
    format!(
        "shown {} of {} items across {} categories",
        summary.items_out, summary.items_in, summary.categories_out
    )
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    write_line(out, &text)
}

fn write_line<W: Write>(out: &mut W, line: &str) -> CliResult<()> {
    writeln!(out, "{line}").map_err(|err| CliError::failure(anyhow!("failed to write output: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_catalog::{FilterPipeline, decode_catalog};
    use serde_json::{Value, json};

    fn outcome() -> FilterOutcome<ItemRecord> {
        let catalog = decode_catalog(
            r#"{"inputs":{"ChatInput":{},"Old":{"legacy":true}},"deprecated":{"Gone":{"legacy":true}}}"#,
        )
        .expect("catalog decodes");
        FilterPipeline::default().run(&catalog)
    }

    fn rendered<F>(render: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> CliResult<()>,
    {
        let mut buffer = Vec::new();
        render(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn table_lists_categories_and_summary() {
        let text = rendered(|out| render_filtered(&outcome(), OutputFormat::Table, out));
        assert_eq!(
            text,
            "inputs (1): ChatInput\ndeprecated (0): -\nshown 1 of 3 items across 2 categories\n"
        );
    }

    #[test]
    fn json_renders_filtered_catalog() {
        let text = rendered(|out| render_filtered(&outcome(), OutputFormat::Json, out));
        let value: Value = serde_json::from_str(&text).expect("json output");
        assert_eq!(value, json!({ "inputs": { "ChatInput": {} }, "deprecated": {} }));
    }

    #[test]
    fn category_table_aligns_columns() {
        let rows = vec![CategoryRow {
            name: "inputs".into(),
            total: 3,
            legacy: 1,
            beta: 0,
        }];
        let text = rendered(|out| render_categories(&rows, OutputFormat::Table, out));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("CATEGORY"));
        assert!(lines[1].starts_with("inputs "));
        assert!(lines[1].ends_with("    3      1    0"));
    }

    #[test]
    fn category_json_is_an_array() {
        let rows = vec![CategoryRow {
            name: "helpers".into(),
            total: 0,
            legacy: 0,
            beta: 0,
        }];
        let text = rendered(|out| render_categories(&rows, OutputFormat::Json, out));
        let value: Value = serde_json::from_str(&text).expect("json output");
        assert_eq!(
            value,
            json!([{ "name": "helpers", "total": 0, "legacy": 0, "beta": 0 }])
        );
    }
}
