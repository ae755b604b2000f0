//! In-memory table with ordered, named columns

use super::Value;

/// A rectangular table: every row has exactly one value per column
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Column names in output order
    pub columns: Vec<String>,
    /// Row values, aligned with `columns`
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with the given columns
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table with `row_count` rows of nulls
    pub fn with_null_rows(columns: Vec<String>, row_count: usize) -> Self {
        let width = columns.len();
        Table {
            columns,
            rows: vec![vec![Value::Null; width]; row_count],
        }
    }

    /// Append a row, padding with nulls or truncating to the column count
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate over the values of one column, top to bottom
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Overwrite a column with a constant, or append it if it doesn't exist yet.
    /// Returns the column index.
    pub fn set_constant_column(&mut self, name: &str, value: Value) -> usize {
        match self.column_index(name) {
            Some(index) => {
                for row in &mut self.rows {
                    row[index] = value.clone();
                }
                index
            }
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.push(value.clone());
                }
                self.columns.len() - 1
            }
        }
    }

    /// Names of columns where every row is null.
    /// A table without rows reports no such column.
    pub fn all_null_columns(&self) -> Vec<&str> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        self.columns
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.column_values(*idx).all(Value::is_null))
            .map(|(_, name)| name.as_str())
            .collect()
    }
}
