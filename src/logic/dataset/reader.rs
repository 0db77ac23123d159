//! Dataset Reloading for the Analysis Stage
//!
//! Parses the persisted CSV back into a column-addressable table of strings.
//! Numeric coercion happens later in `stats`; at this layer every cell stays
//! text, including whatever hand edits were made to `is_malicious`.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum DatasetError {
    /// The dataset file does not exist. The only fatal, user-visible failure
    /// of the analysis stage.
    Missing(PathBuf),
    Io(io::Error),
    Malformed { line: usize, reason: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Missing(path) => {
                write!(f, "dataset file '{}' not found", path.display())
            }
            DatasetError::Io(err) => write!(f, "dataset read failed: {}", err),
            DatasetError::Malformed { line, reason } => {
                write!(f, "malformed dataset at line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<io::Error> for DatasetError {
    fn from(err: io::Error) -> Self {
        DatasetError::Io(err)
    }
}

/// Header plus row-major cells, all as text.
#[derive(Debug, Clone)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of one column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Load the persisted dataset, failing fast when the file is absent.
pub fn load_table(path: &Path) -> Result<DataTable, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::Missing(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let mut records = parse_csv(&content).into_iter();

    let columns = records.next().ok_or(DatasetError::Malformed {
        line: 1,
        reason: "missing header row".to_string(),
    })?;

    let mut rows = Vec::new();
    for (i, row) in records.enumerate() {
        if row.len() != columns.len() {
            return Err(DatasetError::Malformed {
                line: i + 2,
                reason: format!("expected {} fields, found {}", columns.len(), row.len()),
            });
        }
        rows.push(row);
    }

    Ok(DataTable { columns, rows })
}

/// Quote-aware CSV parse of the whole file. Handles doubled quotes and
/// newlines inside quoted fields; trailing newline does not produce an
/// empty record.
fn parse_csv(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}
