//! In-memory table model.
//!
//! A [`Table`] is an ordered collection of named columns; each [`Column`]
//! holds one [`CellValue`] per row, aligned by index. Cells are untyped at
//! rest: operations reinterpret the text as numeric or date-like as needed.

/// A single cell. Empty input fields ingest as `Missing`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Text content, or `None` for a missing cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Missing => None,
        }
    }

    /// Rendering used when the cell is written to a delimited file.
    pub fn render(&self) -> &str {
        self.as_text().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column of text cells, for tests and builders.
    pub fn from_text<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            values.into_iter().map(|v| CellValue::Text(v.into())).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered collection of named columns, aligned by row index.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Number of rows. All columns are aligned, so the first column decides.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }
}

#[cfg(test)]
mod tests {
    use super::{CellValue, Column, Table};

    #[test]
    fn height_follows_first_column() {
        let table = Table::new(vec![
            Column::from_text("a", ["1", "2", "3"]),
            Column::from_text("b", ["x", "y", "z"]),
        ]);
        assert_eq!(table.height(), 3);
        assert_eq!(table.width(), 2);
        assert!(Table::default().height() == 0);
    }

    #[test]
    fn missing_cells_render_empty() {
        assert_eq!(CellValue::Missing.render(), "");
        assert_eq!(CellValue::text("x").render(), "x");
        assert!(CellValue::Missing.as_text().is_none());
    }
}
