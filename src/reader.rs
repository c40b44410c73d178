//! Delimited-file reader
//!
//! Turns a CSV (or other single-byte delimited) file into a [`RawTable`].
//! Empty fields become missing cells; the conversion to a decision table
//! reports them as integrity errors.
//!
//! ```text
//! f1,f2,f3
//! a,x,yes
//! b,x,no
//! ```

use crate::error::{Error, Result};
use crate::table::{RawTable, Value};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// How a delimited file is read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReaderOptions {
    /// Field delimiter (single ASCII character)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// First record holds column names; otherwise columns are `f1..fN`
    #[serde(default = "default_true")]
    pub header: bool,

    /// Decision column; defaults to the last column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,

    /// Strip surrounding whitespace from fields and headers
    #[serde(default = "default_true")]
    pub trim: bool,
}

fn default_delimiter() -> char {
    ','
}

fn default_true() -> bool {
    true
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            header: true,
            decision: None,
            trim: true,
        }
    }
}

/// Read a delimited file from disk
pub fn read_csv(path: &Path, options: &ReaderOptions) -> Result<RawTable> {
    let file = File::open(path).map_err(Error::Io)?;
    read_csv_from(file, options)
}

/// Read delimited data from any reader
pub fn read_csv_from<R: Read>(reader: R, options: &ReaderOptions) -> Result<RawTable> {
    if !options.delimiter.is_ascii() {
        return Err(Error::Config(format!(
            "Delimiter must be a single ASCII character, got '{}'",
            options.delimiter
        )));
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter as u8)
        .has_headers(options.header)
        .flexible(true)
        .trim(if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let mut columns: Vec<String> = if options.header {
        csv_reader.headers()?.iter().map(str::to_string).collect()
    } else {
        Vec::new()
    };

    let mut rows = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        if !options.header && row == 0 {
            columns = (1..=record.len()).map(|i| format!("f{}", i)).collect();
        }
        if record.len() != columns.len() {
            return Err(Error::RaggedRow {
                row,
                expected: columns.len(),
                got: record.len(),
            });
        }
        rows.push(
            record
                .iter()
                .map(|field| (!field.is_empty()).then(|| Value::parse(field)))
                .collect(),
        );
    }

    let table = RawTable::new(columns, rows)?;
    Ok(match &options.decision {
        Some(column) => table.with_decision(column.clone()),
        None => table,
    })
}
