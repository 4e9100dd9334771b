//! Application of parsed operations to a column.
//!
//! Operations run strictly in sequence, each seeing the output of the
//! previous one. String operations rewrite `Text` cells and let `Missing`
//! pass through; numeric and date operations define their own sentinel for
//! values that fail to parse. No operation ever drops a row.

use recast_model::{CellValue, Column, FindingKind, QualityLog};
use tracing::debug;

use crate::datetime;
use crate::numeric::{format_float, format_int, parse_f64};
use crate::op::Op;

/// Run an operation sequence over one column, in place.
pub fn apply_ops(column: &mut Column, ops: &[Op], log: &mut QualityLog) {
    for op in ops {
        debug!(column = %column.name, op = op.display_name(), "applying operation");
        apply_op(column, op, log);
    }
}

/// Apply a single operation to a column, in place.
pub fn apply_op(column: &mut Column, op: &Op, log: &mut QualityLog) {
    match op {
        Op::Trim => map_text(column, |s| s.trim().to_string()),
        Op::Upper => map_text(column, str::to_uppercase),
        Op::Capitalize => map_text(column, capitalize),
        Op::Left { width } => map_text(column, |s| s.chars().take(*width).collect()),
        Op::Lpad { width, fill } => map_text(column, |s| lpad(s, *width, *fill)),
        Op::Replace { from, to } => map_text(column, |s| s.replace(from, to)),
        Op::CleanPhone => map_text(column, |s| s.chars().filter(char::is_ascii_digit).collect()),
        Op::Coalesce { default } => coalesce(column, default),
        Op::CastInt => cast_numeric(column, log, format_int),
        Op::CastFloat => cast_numeric(column, log, format_float),
        Op::Divide { divisor } => divide(column, *divisor),
        Op::DtToYymmdd => reformat_dates(column, log),
        Op::ValidateNumeric => validate_numeric(column, log),
        Op::ValidateNotNull => validate_not_null(column, log),
    }
}

/// Rewrite every text cell; missing cells pass through untouched.
fn map_text<F>(column: &mut Column, f: F)
where
    F: Fn(&str) -> String,
{
    for value in &mut column.values {
        if let CellValue::Text(text) = value {
            let updated = f(text);
            *value = CellValue::Text(updated);
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}

fn lpad(value: &str, width: usize, fill: char) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let mut out = String::with_capacity(width);
    for _ in 0..width - len {
        out.push(fill);
    }
    out.push_str(value);
    out
}

/// Null-like text representations that COALESCE replaces along with
/// true-missing cells.
const NULL_LIKE: [&str; 4] = ["", "nan", "None", "NaN"];

fn coalesce(column: &mut Column, default: &str) {
    for value in &mut column.values {
        let replace = match value {
            CellValue::Missing => true,
            CellValue::Text(text) => NULL_LIKE.contains(&text.as_str()),
        };
        if replace {
            *value = CellValue::Text(default.to_string());
        }
    }
}

/// Shared body of CAST:INT and CAST:FLOAT; `render` decides the output shape.
/// Missing and blank cells become the zero sentinel silently; a non-empty
/// value that fails to parse additionally reports a finding.
fn cast_numeric(column: &mut Column, log: &mut QualityLog, render: fn(f64) -> String) {
    let mut lossy = false;
    for value in &mut column.values {
        let parsed = match value.as_text() {
            Some(text) if !text.trim().is_empty() => {
                let parsed = parse_f64(text);
                if parsed.is_none() {
                    lossy = true;
                }
                parsed
            }
            _ => None,
        };
        *value = CellValue::Text(render(parsed.unwrap_or(0.0)));
    }
    if lossy {
        log.record(&column.name, FindingKind::UnparseableNumber);
    }
}

// Parse failures stay silent here; the sentinel is missing, not zero.
fn divide(column: &mut Column, divisor: f64) {
    for value in &mut column.values {
        let next = match value.as_text().and_then(parse_f64) {
            Some(parsed) => CellValue::Text(format_float(parsed / divisor)),
            None => CellValue::Missing,
        };
        *value = next;
    }
}

fn reformat_dates(column: &mut Column, log: &mut QualityLog) {
    let mut lossy = false;
    for value in &mut column.values {
        let next = match value.as_text() {
            None => CellValue::Missing,
            Some(text) if text.trim().is_empty() => CellValue::Missing,
            Some(text) => match datetime::parse_date(text) {
                Some(date) => CellValue::Text(datetime::format_yymmdd(date)),
                None => {
                    lossy = true;
                    CellValue::Missing
                }
            },
        };
        *value = next;
    }
    if lossy {
        log.record(&column.name, FindingKind::UnparseableDate);
    }
}

fn validate_numeric(column: &Column, log: &mut QualityLog) {
    let failing = column.values.iter().any(|value| match value {
        CellValue::Missing => true,
        CellValue::Text(text) => parse_f64(text).is_none(),
    });
    if failing {
        log.record(&column.name, FindingKind::NonNumeric);
    }
}

fn validate_not_null(column: &Column, log: &mut QualityLog) {
    let failing = column.values.iter().any(|value| match value {
        CellValue::Missing => true,
        CellValue::Text(text) => text.is_empty(),
    });
    if failing {
        log.record(&column.name, FindingKind::NullOrBlank);
    }
}
