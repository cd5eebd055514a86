use std::path::PathBuf;
use thiserror::Error;

use crate::table::data::Value;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Column '{column}' not found in table '{table}'")]
    MissingColumn { column: String, table: String },

    #[error("Duplicate column name found: '{0}' (every header name must be unique)")]
    DuplicateColumn(String),

    #[error("Error parsing value in column '{column}' (row {row}): {message}")]
    Parse {
        column: String,
        row: usize,
        message: String,
    },

    #[error("Cannot compare {found} in column '{column}' (row {row}) with {expected}: not a number")]
    Type {
        column: String,
        row: usize,
        found: String,
        expected: String,
    },
}

impl PipelineError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn type_mismatch(column: &str, row: usize, found: &Value, expected: &Value) -> Self {
        PipelineError::Type {
            column: column.to_string(),
            row,
            found: describe(found),
            expected: describe(expected),
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Text(s) => format!("'{}'", s),
        Value::Null => "NULL".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
