//! `officekit` CLI -- column conversion, free-slot reports, and HTML tables
//! from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Column number to letters, and back
//! officekit col 28     # AB
//! officekit col ab     # 28
//!
//! # Free-slot report from a JSON appointment list (stdin or -i)
//! officekit slots -i appointments.json --duration 30
//!
//! # Compare slot boundaries as full instants instead of hour-of-day
//! officekit slots -i appointments.json --strict-bounds
//!
//! # HTML table from a JSON array of rows
//! echo '[["Region","Total"],["East",42]]' | officekit table
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use officekit_core::{
    decode_column, encode_column, find_open_slots, render_free_ranges, rows_to_table, Appointment,
    BoundaryPolicy, SlotConfig, TableStyle,
};

#[derive(Parser)]
#[command(
    name = "officekit",
    version,
    about = "Desk automation helpers: column letters, free slots, HTML tables"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a column number to letters, or letters to a number
    Col {
        /// A 1-based column number (prints the letters) or a letter label
        /// (prints the number)
        value: String,
    },
    /// Report merged free time ranges from a JSON appointment list
    Slots {
        /// Input file with a JSON array of {"start", "end"} RFC 3339 instants
        /// (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Slot length in minutes
        #[arg(long, default_value_t = 30)]
        duration: u32,
        /// Hour at which the working day opens (0-23)
        #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u32).range(0..=23))]
        day_start: u32,
        /// Hour at which the working day closes (0-23)
        #[arg(long, default_value_t = 18, value_parser = clap::value_parser!(u32).range(0..=23))]
        day_end: u32,
        /// Check slot boundaries against the full window instants instead of
        /// hour-of-day only
        #[arg(long)]
        strict_bounds: bool,
    },
    /// Build a styled HTML table from a JSON array of rows
    Table {
        /// Input file with a JSON array of arrays (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Treat the first row as data instead of a header row
        #[arg(long)]
        no_header: bool,
        /// Header background color (default "#1F77B4")
        #[arg(long)]
        header_bg: Option<String>,
        /// Header text color (default "#FFFFFF")
        #[arg(long)]
        header_fg: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Col { value } => {
            println!("{}", convert_column(&value)?);
        }
        Commands::Slots {
            input,
            output,
            duration,
            day_start,
            day_end,
            strict_bounds,
        } => {
            let json = read_input(input.as_deref())?;
            let appointments: Vec<Appointment> = serde_json::from_str(&json)
                .context("Failed to parse input as a JSON appointment list")?;

            let config = SlotConfig {
                slot_minutes: duration,
                day_start_hour: day_start,
                day_end_hour: day_end,
                boundary: if strict_bounds {
                    BoundaryPolicy::Instant
                } else {
                    BoundaryPolicy::HourOfDay
                },
            };
            let ranges =
                find_open_slots(&appointments, config).context("Failed to compute free slots")?;

            let mut report = render_free_ranges(&ranges).join("\n");
            report.push('\n');
            write_output(output.as_deref(), &report)?;
        }
        Commands::Table {
            input,
            output,
            no_header,
            header_bg,
            header_fg,
        } => {
            let json = read_input(input.as_deref())?;
            let rows = parse_rows(&json)?;

            let style = TableStyle {
                header_bg,
                header_fg,
                ..TableStyle::default()
            };
            let table = rows_to_table(&rows, !no_header, &style);
            write_output(output.as_deref(), &table)?;
        }
    }

    Ok(())
}

/// Digits convert index -> letters; anything else converts letters -> index.
fn convert_column(value: &str) -> Result<String> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        let index: u32 = value
            .parse()
            .with_context(|| format!("Column number out of range: {value}"))?;
        Ok(encode_column(index)?)
    } else {
        Ok(decode_column(value)?.to_string())
    }
}

/// Parse a JSON array of arrays into rows of cell text. String cells are
/// taken verbatim; other JSON values keep their literal rendering.
fn parse_rows(json: &str) -> Result<Vec<Vec<String>>> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("Failed to parse input as JSON")?;
    let rows = value
        .as_array()
        .context("Table input must be a JSON array of rows")?;

    rows.iter()
        .map(|row| {
            let cells = row
                .as_array()
                .context("Each table row must be a JSON array")?;
            Ok(cells
                .iter()
                .map(|cell| match cell {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect())
        })
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
