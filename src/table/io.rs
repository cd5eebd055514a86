use crate::error::{PipelineError, Result};
use crate::table::data::{Column, DBRows, DataType, Table, Value};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use log::debug;
use std::fs::{self, File};
use std::path::Path;

impl Table {
    /// Load a comma-delimited file whose first line names the columns.
    /// Column types are inferred from the data once the whole file is read.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let csv_err = |source| PipelineError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(|e| PipelineError::io("Failed to open file", path, e))?;
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

        let headers = rdr.headers().map_err(csv_err)?.clone();
        let records = rdr
            .records()
            .collect::<std::result::Result<Vec<StringRecord>, _>>()
            .map_err(csv_err)?;

        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let datatype = DataType::infer(records.iter().filter_map(|r| r.get(i)));
                Column::new(name, datatype)
            })
            .collect();
        debug!("Inferred columns for '{}': {:?}", path.display(), columns);

        let mut rows = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            rows.push(parse_record(&columns, record, i + 1)?);
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut table = Table::new(&name, columns);
        table.rows = rows;
        table.validate_schema()?;

        Ok(table)
    }

    /// Write the header and every row to `path`, replacing any existing file.
    /// No index column is emitted.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let csv_err = |source| PipelineError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let file =
            File::create(path).map_err(|e| PipelineError::io("Failed to create file", path, e))?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        writer.write_record(self.column_names()).map_err(csv_err)?;
        for row in &self.rows {
            writer.serialize(row).map_err(csv_err)?;
        }
        writer
            .flush()
            .map_err(|e| PipelineError::io("Failed to write file", path, e))?;

        Ok(())
    }
}

/// Turn one CSV record into a row typed by `columns`. `row` is the 1-based data row.
pub fn parse_record(columns: &[Column], record: &StringRecord, row: usize) -> Result<DBRows> {
    columns
        .iter()
        .zip(record.iter())
        .map(|(col, raw)| {
            Value::from_str(raw, &col.datatype).map_err(|message| PipelineError::Parse {
                column: col.name.clone(),
                row,
                message,
            })
        })
        .collect()
}

/// Create the parent directory of `path` and any missing ancestors.
/// An existing directory is left alone.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(dir_path) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if !dir_path.is_dir() {
        debug!("Creating directory '{}'", dir_path.display());
        fs::create_dir_all(dir_path)
            .map_err(|e| PipelineError::io("Failed to create directory", dir_path, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn record_is_typed_by_column() {
        let columns = vec![
            Column::new("nome", DataType::Text),
            Column::new("valor", DataType::Int),
        ];
        let record = StringRecord::from(vec!["Ana", " 150"]);
        assert_eq!(
            parse_record(&columns, &record, 1).unwrap(),
            vec![Value::Text("Ana".to_string()), Value::Int(150)]
        );
    }

    #[test]
    fn record_that_does_not_fit_column_type_is_an_error() {
        let columns = vec![Column::new("valor", DataType::Int)];
        let record = StringRecord::from(vec!["muito"]);
        let err = parse_record(&columns, &record, 3).unwrap_err();
        match err {
            PipelineError::Parse { column, row, .. } => {
                assert_eq!(column, "valor");
                assert_eq!(row, 3);
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn parent_dir_is_created_with_ancestors() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("a/b/c/saida.csv");
        ensure_parent_dir(&out).unwrap();
        assert!(tmp.path().join("a/b/c").is_dir());
        ensure_parent_dir(&out).unwrap();
    }

    #[test]
    fn bare_file_name_needs_no_directory() {
        ensure_parent_dir(Path::new("saida.csv")).unwrap();
    }

    #[test]
    fn parent_that_is_a_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("resultados"), "not a dir").unwrap();
        let err = ensure_parent_dir(&tmp.path().join("resultados/saida.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }
}
