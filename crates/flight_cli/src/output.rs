//! Rendering lookup results for the terminal.

use clap::ValueEnum;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use flight_db::Record;
use owo_colors::OwoColorize;

/// Columns shown in table output unless overridden.
pub const DEFAULT_COLUMNS: &[&str] = &[
    "FLIGHT_ID",
    "origin_airport",
    "destination_airport",
    "airline",
    "DELAY",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Table of `records` restricted to `columns`. Missing values print blank.
pub fn render_table(records: &[Record], columns: &[String], highlight_delays: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(columns.iter().map(|c| Cell::new(c)));

    for record in records {
        let delayed = highlight_delays && record.is_delayed();
        table.add_row(columns.iter().map(|column| {
            let text = record
                .get(column)
                .map(ToString::to_string)
                .unwrap_or_default();
            let cell = Cell::new(text);
            if delayed && column == "DELAY" {
                cell.fg(Color::Red)
            } else {
                cell
            }
        }));
    }
    table
}

pub fn render_json(records: &[Record]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Print records in the requested format.
pub fn print_records(
    records: &[Record],
    format: OutputFormat,
    columns: &[String],
    highlight_delays: bool,
) -> serde_json::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", render_json(records)?),
        OutputFormat::Table if records.is_empty() => {
            println!("{}", "No flights found.".yellow());
        }
        OutputFormat::Table => {
            println!("{}", render_table(records, columns, highlight_delays));
            println!("{}", format!("{} flight(s) found.", records.len()).bold());
        }
    }
    Ok(())
}
