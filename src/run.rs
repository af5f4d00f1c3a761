//! Line-by-line driver used by the command-line tool.

use anyhow::{Context, Result};
use csv_types::RowCodec;
use row_core::TypedValue;
use serde_json::Value;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// What to write for each decoded row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One JSON array per row; NaN and infinities become strings
    Json,
    /// The row re-encoded with the codec's format
    Csv,
}

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Non-blank input lines seen
    pub lines: usize,
    /// Rows decoded and written
    pub rows: usize,
    /// Lines dropped under `skip_invalid`
    pub skipped: usize,
}

/// Decode every non-blank line of `input` and write the result to `output`.
///
/// Each physical line is one record. With `skip_invalid`, lines that fail to
/// decode are logged and counted; otherwise the first failure is returned
/// with its 1-based line number.
pub fn process_lines<R, W>(
    codec: &RowCodec,
    input: R,
    mut output: W,
    mode: OutputMode,
    skip_invalid: bool,
) -> Result<Summary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = Summary::default();

    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = line.with_context(|| format!("Failed to read input line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }
        summary.lines += 1;

        let row = match codec.decode_line(&line) {
            Ok(row) => row,
            Err(e) if skip_invalid => {
                warn!("Skipping line {line_no}: {e}");
                summary.skipped += 1;
                continue;
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to decode line {line_no}")),
        };

        match mode {
            OutputMode::Json => {
                let values = row
                    .iter()
                    .map(json_value)
                    .collect::<serde_json::Result<Vec<_>>>()
                    .with_context(|| format!("Failed to convert row for line {line_no}"))?;
                serde_json::to_writer(&mut output, &values)
                    .with_context(|| format!("Failed to write row for line {line_no}"))?;
                output.write_all(b"\n")?;
            }
            OutputMode::Csv => {
                let encoded = codec
                    .encode_row(&row)
                    .with_context(|| format!("Failed to encode line {line_no}"))?;
                output.write_all(encoded.as_bytes())?;
            }
        }
        summary.rows += 1;
    }

    output.flush().context("Failed to flush output")?;
    info!(
        lines = summary.lines,
        rows = summary.rows,
        skipped = summary.skipped,
        "Finished processing input"
    );
    Ok(summary)
}

/// JSON has no NaN or infinity; those are written as their canonical text.
fn json_value(value: &TypedValue) -> serde_json::Result<Value> {
    match value {
        TypedValue::Float(v) if !v.is_finite() => Ok(Value::String(value.to_string())),
        TypedValue::Double(v) if !v.is_finite() => Ok(Value::String(value.to_string())),
        other => serde_json::to_value(other),
    }
}
