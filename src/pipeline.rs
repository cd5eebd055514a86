use log::info;
use std::path::PathBuf;

use crate::error::Result;
use crate::table::data::{FilterExpr, Table, Value};
use crate::table::io::ensure_parent_dir;

pub const INPUT_PATH: &str = "dados/entrada.csv";
pub const OUTPUT_PATH: &str = "resultados/saida.csv";
pub const FILTER_COLUMN: &str = "valor";
pub const THRESHOLD: i64 = 100;

/// Where to read, where to write, and which rows to keep.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub column: String,
    pub threshold: Value,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            input: PathBuf::from(INPUT_PATH),
            output: PathBuf::from(OUTPUT_PATH),
            column: FILTER_COLUMN.to_string(),
            threshold: Value::Int(THRESHOLD),
        }
    }
}

impl PipelineConfig {
    /// Same column and threshold, different files.
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        PipelineConfig {
            input: input.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    pub fn filter(&self) -> FilterExpr {
        FilterExpr::Gt(self.column.clone(), self.threshold.clone())
    }
}

/// Read, filter, then write. Nothing touches the output side until the
/// filtered table exists, so a bad input leaves the output directory as it was.
pub fn run(config: &PipelineConfig) -> Result<Table> {
    let table = Table::load_from_file(&config.input)?;
    info!(
        "Read {} rows from '{}'",
        table.rows.len(),
        config.input.display()
    );

    let filtered = table.select_where(&config.filter())?;

    ensure_parent_dir(&config.output)?;
    filtered.save_to_file(&config.output)?;
    info!(
        "Wrote {} of {} rows to '{}'",
        filtered.rows.len(),
        table.rows.len(),
        config.output.display()
    );

    Ok(filtered)
}
