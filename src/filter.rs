use std::io::{BufRead, Write};

use anyhow::{anyhow, Context};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    convert::{Converter, FieldOutcome},
    stats::ConvertStats,
};

/// Runs `converter` over newline-delimited JSON read from `reader`.
///
/// Every input line produces exactly one output line. Lines that are not JSON
/// objects, and records rejected by the converter, are written back unchanged
/// and reported through `errors`.
pub fn filter_records<R, W>(
    reader: R,
    mut writer: W,
    converter: &Converter,
    stats: &mut ConvertStats,
    errors: &mut Vec<anyhow::Error>,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("error reading line {line_no}"))?;
        if line.trim().is_empty() {
            writeln!(writer)?;
            continue;
        }

        let mut record = match serde_json::from_str::<Value>(&line) {
            Ok(Value::Object(record)) => record,
            Ok(other) => {
                debug!(line = line_no, kind = kind_of(&other), "not a record, passing through");
                stats.passed_through += 1;
                writeln!(writer, "{line}")?;
                continue;
            }
            Err(err) => {
                warn!(line = line_no, error = %err, "invalid JSON, passing through");
                errors.push(anyhow!("line {line_no}: invalid JSON: {err}"));
                stats.passed_through += 1;
                writeln!(writer, "{line}")?;
                continue;
            }
        };

        match converter.convert(&mut record) {
            Ok(outcomes) => {
                for outcome in &outcomes {
                    if let FieldOutcome::Failed(err) = outcome {
                        errors.push(anyhow!("line {line_no}: {err}"));
                    }
                }
                stats.apply_record(&outcomes);
                serde_json::to_writer(&mut writer, &record)?;
                writeln!(writer)?;
            }
            Err(err) => {
                warn!(line = line_no, field = err.field(), error = %err, "record rejected");
                errors.push(anyhow!(
                    "line {line_no}: record rejected at field '{}': {err}",
                    err.field()
                ));
                stats.records += 1;
                stats.rejected_records += 1;
                writeln!(writer, "{line}")?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
