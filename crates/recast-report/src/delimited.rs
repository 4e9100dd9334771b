//! Delimited-file writing.

use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use recast_model::Table;

/// Write a table back to disk. Missing cells render as empty fields.
pub fn write_delimited_table(table: &Table, path: &Path, delimiter: u8) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("create output file: {}", path.display()))?;

    writer
        .write_record(table.column_names())
        .with_context(|| format!("write header row: {}", path.display()))?;

    for row in 0..table.height() {
        let record = table
            .columns
            .iter()
            .map(|column| column.values[row].render());
        writer
            .write_record(record)
            .with_context(|| format!("write row {row}: {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("flush output file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_delimited_table;
    use recast_model::{CellValue, Column, Table};

    #[test]
    fn writes_with_alternate_delimiter_and_empty_missing_fields() {
        let table = Table::new(vec![
            Column::from_text("CUSTOMER_NAME", ["BOB", "ANN"]),
            Column::new(
                "PHONE",
                vec![CellValue::text("5551234567"), CellValue::Missing],
            ),
        ]);

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.txt");
        write_delimited_table(&table, &path, b'|').expect("write");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "CUSTOMER_NAME|PHONE\nBOB|5551234567\nANN|\n");
    }

    #[test]
    fn empty_table_still_gets_a_header_row() {
        let table = Table::new(vec![Column::new("A", Vec::new())]);
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.txt");
        write_delimited_table(&table, &path, b',').expect("write");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "A\n");
    }
}
