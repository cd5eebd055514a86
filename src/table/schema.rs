use std::collections::HashSet;

use crate::error::{PipelineError, Result};
use crate::table::data::{Column, DataType, Table, Value};

impl Table {
    pub fn validate_schema(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for col in &self.columns {
            if !seen.insert(&col.name) {
                return Err(PipelineError::DuplicateColumn(col.name.clone()));
            }
        }
        Ok(())
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| PipelineError::MissingColumn {
                column: name.to_string(),
                table: self.name.clone(),
            })
    }
}

impl DataType {
    /// Narrowest type that every non-empty cell fits. Columns with no data are `Text`.
    /// Surrounding spaces do not stop a cell from counting as a number.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> DataType {
        let mut inferred: Option<DataType> = None;
        for cell in cells.into_iter().map(str::trim).filter(|c| !c.is_empty()) {
            let fits = if cell.parse::<i64>().is_ok() {
                DataType::Int
            } else if cell.parse::<f64>().is_ok() {
                DataType::Float
            } else {
                return DataType::Text;
            };
            inferred = Some(match (inferred, fits) {
                (Some(DataType::Float), _) | (_, DataType::Float) => DataType::Float,
                _ => DataType::Int,
            });
        }
        inferred.unwrap_or(DataType::Text)
    }
}

impl Column {
    pub fn new(name: &str, datatype: DataType) -> Self {
        Column {
            name: name.to_string(),
            datatype,
        }
    }
}

impl Value {
    /// Parse a raw cell for a column of type `dtype`. Blank cells are `Null`.
    /// Numbers are parsed with surrounding spaces removed; text keeps them.
    pub fn from_str(s: &str, dtype: &DataType) -> std::result::Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Value::Null);
        }
        match dtype {
            DataType::Int => trimmed
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| format!("Invalid integer '{}': {}", s, e)),
            DataType::Float => trimmed
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| format!("Invalid float '{}': {}", s, e)),
            DataType::Text => Ok(Value::Text(s.to_string())),
        }
    }
}
