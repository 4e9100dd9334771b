//! Column-level behavior of the transform engine.

use recast_model::{CellValue, Column, FindingKind, QualityLog};
use recast_transform::{apply_ops, parse_sequence};

fn run(column: &mut Column, tokens: &[&str]) -> QualityLog {
    let ops = parse_sequence(tokens).expect("parse ops");
    let mut log = QualityLog::default();
    apply_ops(column, &ops, &mut log);
    log
}

fn texts(column: &Column) -> Vec<&str> {
    column.values.iter().map(CellValue::render).collect()
}

#[test]
fn clean_phone_strips_everything_but_digits() {
    let mut column = Column::from_text("phone", ["(555) 123-4567"]);
    run(&mut column, &["CLEAN_PHONE"]);
    assert_eq!(texts(&column), vec!["5551234567"]);
}

#[test]
fn cast_float_zeroes_unparseable_values() {
    let mut column = Column::from_text("price", ["", "12.5", "abc"]);
    let log = run(&mut column, &["CAST:FLOAT"]);
    assert_eq!(texts(&column), vec!["0.0", "12.5", "0.0"]);
    // Only the non-empty garbage value counts as lossy.
    assert_eq!(log.findings().len(), 1);
    assert_eq!(log.findings()[0].kind, FindingKind::UnparseableNumber);
}

#[test]
fn cast_int_truncates() {
    let mut column = Column::from_text("qty", ["1.9", "-2.7", "x", "10"]);
    run(&mut column, &["CAST:INT"]);
    assert_eq!(texts(&column), vec!["1", "-2", "0", "10"]);
}

#[test]
fn trim_then_upper_chains_in_order() {
    let mut column = Column::from_text("name", ["  bob  "]);
    run(&mut column, &["TRIM", "UPPER"]);
    assert_eq!(texts(&column), vec!["BOB"]);
}

#[test]
fn capitalize_uppercases_first_and_lowercases_rest() {
    let mut column = Column::from_text("city", ["nEW yORK"]);
    run(&mut column, &["CAPITALIZE"]);
    assert_eq!(texts(&column), vec!["New york"]);
}

#[test]
fn left_truncates_and_lpad_justifies() {
    let mut column = Column::from_text("id", ["a1", "b2", "longer"]);
    run(&mut column, &["LPAD:5|0"]);
    assert_eq!(texts(&column), vec!["000a1", "000b2", "longer"]);

    let mut column = Column::from_text("code", ["abcdef"]);
    run(&mut column, &["LEFT:3"]);
    assert_eq!(texts(&column), vec!["abc"]);
}

#[test]
fn replace_is_literal_and_global() {
    let mut column = Column::from_text("sku", ["a-b-c"]);
    run(&mut column, &["REPLACE:-|."]);
    assert_eq!(texts(&column), vec!["a.b.c"]);
}

#[test]
fn coalesce_fills_null_like_values() {
    let mut column = Column::new(
        "status",
        vec![
            CellValue::text(""),
            CellValue::text("nan"),
            CellValue::text("None"),
            CellValue::text("NaN"),
            CellValue::Missing,
            CellValue::text("OK"),
        ],
    );
    run(&mut column, &["COALESCE:UNKNOWN"]);
    assert_eq!(
        texts(&column),
        vec!["UNKNOWN", "UNKNOWN", "UNKNOWN", "UNKNOWN", "UNKNOWN", "OK"]
    );
}

#[test]
fn divide_scales_and_silently_drops_garbage() {
    let mut column = Column::from_text("cents", ["150", "abc", "25"]);
    let log = run(&mut column, &["DIVIDE:100"]);
    assert_eq!(column.values[0], CellValue::text("1.5"));
    assert_eq!(column.values[1], CellValue::Missing);
    assert_eq!(column.values[2], CellValue::text("0.25"));
    assert!(log.is_empty());
}

#[test]
fn dates_reformat_to_yymmdd() {
    let mut column = Column::from_text("dt", ["2024-01-05", "garbage"]);
    let log = run(&mut column, &["DT_TO_YYMMDD"]);
    assert_eq!(column.values[0], CellValue::text("240105"));
    assert_eq!(column.values[1], CellValue::Missing);
    assert_eq!(log.findings().len(), 1);
    assert_eq!(log.findings()[0].kind, FindingKind::UnparseableDate);
}

#[test]
fn validate_not_null_reports_once_and_leaves_values_alone() {
    let mut column = Column::from_text("status", ["", "OK"]);
    let before = column.clone();
    let log = run(&mut column, &["VALIDATE:NOT_NULL", "VALIDATE:NOT_NULL"]);
    assert_eq!(column, before);
    let findings = log.into_findings();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].column, "status");
    assert_eq!(findings[0].message, "Field 'status': NULL/Blank values found.");
}

#[test]
fn validate_numeric_counts_missing_as_failure() {
    let mut column = Column::new(
        "qty",
        vec![CellValue::text("12"), CellValue::Missing],
    );
    let before = column.clone();
    let log = run(&mut column, &["VALIDATE:NUMERIC"]);
    assert_eq!(column, before);
    assert_eq!(log.findings().len(), 1);
    assert_eq!(log.findings()[0].message, "Field 'qty': Non-numeric data found.");
}

#[test]
fn validate_numeric_is_quiet_on_clean_columns() {
    let mut column = Column::from_text("qty", ["1", "2.5", "-3"]);
    let log = run(&mut column, &["VALIDATE:NUMERIC"]);
    assert!(log.is_empty());
}

#[test]
fn missing_cells_pass_through_string_operations() {
    let mut column = Column::new(
        "name",
        vec![CellValue::Missing, CellValue::text("  ada  ")],
    );
    run(&mut column, &["TRIM", "UPPER", "LPAD:5|_"]);
    assert_eq!(column.values[0], CellValue::Missing);
    assert_eq!(column.values[1], CellValue::text("__ADA"));
}
