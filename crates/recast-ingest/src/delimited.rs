//! Delimited-file reading.
//!
//! The reader is header-driven: the first row names the columns, every data
//! row is padded or truncated to the header width. Cell text is kept as-is
//! (cleanup belongs to the transform operations); only genuinely empty
//! fields become missing cells.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use recast_model::{CellValue, Column, Table};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn cell_from_field(raw: &str) -> CellValue {
    if raw.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(raw.to_string())
    }
}

/// Read a delimited file into a column-major table.
pub fn read_delimited_table(path: &Path, delimiter: u8) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read delimited file: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header row: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut columns: Vec<Column> = headers
        .iter()
        .map(|name| Column::new(name.clone(), Vec::new()))
        .collect();

    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        for (idx, column) in columns.iter_mut().enumerate() {
            let field = record.get(idx).unwrap_or("");
            column.values.push(cell_from_field(field));
        }
    }

    let table = Table::new(columns);
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "loaded delimited table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::read_delimited_table;
    use recast_model::CellValue;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn reads_tab_delimited_input() {
        let file = write_temp("name\tprice\n  bob  \t12.5\nann\t\n");
        let table = read_delimited_table(file.path(), b'\t').expect("read");

        assert_eq!(table.height(), 2);
        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, vec!["name", "price"]);
        // Whitespace survives ingestion; TRIM is an explicit operation.
        assert_eq!(
            table.column("name").unwrap().values[0],
            CellValue::text("  bob  ")
        );
        assert_eq!(table.column("price").unwrap().values[1], CellValue::Missing);
    }

    #[test]
    fn reads_comma_delimited_input() {
        let file = write_temp("a,b\n1,2\n");
        let table = read_delimited_table(file.path(), b',').expect("read");
        assert_eq!(table.height(), 1);
        assert_eq!(table.column("b").unwrap().values[0], CellValue::text("2"));
    }

    #[test]
    fn short_rows_pad_with_missing() {
        let file = write_temp("a\tb\tc\n1\t2\n");
        let table = read_delimited_table(file.path(), b'\t').expect("read");
        assert_eq!(table.column("c").unwrap().values[0], CellValue::Missing);
    }

    #[test]
    fn bom_is_stripped_from_headers() {
        let file = write_temp("\u{feff}a\tb\n1\t2\n");
        let table = read_delimited_table(file.path(), b'\t').expect("read");
        assert!(table.has_column("a"));
    }

    #[test]
    fn blank_rows_are_skipped() {
        let file = write_temp("a\tb\n1\t2\n\n3\t4\n");
        let table = read_delimited_table(file.path(), b'\t').expect("read");
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = read_delimited_table(std::path::Path::new("no/such/file.tsv"), b'\t');
        assert!(result.is_err());
    }
}
