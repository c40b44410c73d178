//! Boundary between tabular input and the induction core
//!
//! Ingestion (file parsing, header handling, type coercion) happens before
//! this point. The core only needs row count, column names, the designated
//! decision column and per-row cell access.

use super::value::Value;
use crate::error::{Error, Result};

/// An already-materialized table the core can read
pub trait TableSource {
    /// Number of rows
    fn row_count(&self) -> usize;

    /// Column names in table order
    fn column_names(&self) -> &[String];

    /// Name of the column holding the decision attribute
    fn decision_column(&self) -> &str;

    /// Cell at `row` and column index `column`; `None` is a missing value
    fn cell(&self, row: usize, column: usize) -> Option<&Value>;
}

/// In-memory rows with named columns
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    columns: Vec<String>,
    decision: String,
    rows: Vec<Vec<Option<Value>>>,
}

impl RawTable {
    /// Build a table whose decision column is the last column
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<Value>>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: columns.len(),
                    got: row.len(),
                });
            }
        }
        let decision = columns.last().cloned().unwrap_or_default();
        Ok(RawTable {
            columns,
            decision,
            rows,
        })
    }

    /// Build from string tokens, coercing with [`Value::parse`]; empty tokens
    /// become missing cells
    pub fn from_strs(columns: &[&str], rows: &[&[&str]]) -> Result<Self> {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|token| (!token.is_empty()).then(|| Value::parse(token)))
                    .collect()
            })
            .collect();
        Self::new(columns, rows)
    }

    /// Designate another column as the decision attribute
    ///
    /// The name is checked when the table is converted, so an unknown column
    /// surfaces as a data-integrity error for this table only.
    pub fn with_decision(mut self, column: impl Into<String>) -> Self {
        self.decision = column.into();
        self
    }
}

impl TableSource for RawTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_names(&self) -> &[String] {
        &self.columns
    }

    fn decision_column(&self) -> &str {
        &self.decision
    }

    fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row)?.get(column)?.as_ref()
    }
}

impl<T: TableSource + ?Sized> TableSource for &T {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_names(&self) -> &[String] {
        (**self).column_names()
    }

    fn decision_column(&self) -> &str {
        (**self).decision_column()
    }

    fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        (**self).cell(row, column)
    }
}
