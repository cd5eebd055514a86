use std::cmp::Ordering;

use log::debug;

use crate::error::{PipelineError, Result};
pub use crate::table::data::FilterExpr;
use crate::table::data::{DBRows, Table, Value};

/// Row predicate produced by [`FilterExpr::to_predicate`]. Takes the 1-based row number
/// (for error reporting) and the row.
pub type RowPredicate<'a> = Box<dyn Fn(usize, &DBRows) -> Result<bool> + 'a>;

impl FilterExpr {
    pub fn value(&self) -> &Value {
        match self {
            FilterExpr::Gt(_, v) => v,
        }
    }

    pub fn column(&self) -> &String {
        match self {
            FilterExpr::Gt(col, _) => col,
        }
    }

    /// Resolve the column against `table` and build the per-row test.
    /// Fails up front when the column does not exist.
    pub fn to_predicate(&self, table: &Table) -> Result<RowPredicate<'_>> {
        let col_index = table.column_index(self.column())?;
        let col_name = self.column().as_str();
        let val = self.value();

        // Null and text cells never compare against a number.
        let ordered = move |row_num: usize, row: &DBRows| -> Result<Ordering> {
            let cell = &row[col_index];
            cell.compare_numeric(val)
                .ok_or_else(|| PipelineError::type_mismatch(col_name, row_num, cell, val))
        };

        let predicate: RowPredicate<'_> = match self {
            FilterExpr::Gt(_, _) => {
                Box::new(move |n: usize, row: &DBRows| Ok(ordered(n, row)? == Ordering::Greater))
            }
        };
        Ok(predicate)
    }
}

impl Table {
    /// New table with the rows matching `expr`, in their original order.
    /// The first row that cannot be compared aborts the whole selection.
    pub fn select_where(&self, expr: &FilterExpr) -> Result<Table> {
        let predicate = expr.to_predicate(self)?;

        let mut rows = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            if predicate(i + 1, row)? {
                rows.push(row.clone());
            }
        }
        debug!(
            "{:?} kept {} of {} rows from '{}'",
            expr,
            rows.len(),
            self.rows.len(),
            self.name
        );

        Ok(Table {
            name: self.name.clone(),
            columns: self.columns.clone(),
            rows,
        })
    }
}
