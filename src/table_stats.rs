use std::fmt;

use prettytable as pt;

use error::*;
use series::Series;
use table::Table;
use util::{default_keep, is_missing};

/// Structure containing general statistics of a `Table`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    nrows: usize,
    columns: Vec<ColumnStats>,
}

/// Structure containing statistics of a single column of a `Table`. Numeric statistics are
/// computed over the present (non-missing) values, and are `None` if any present value does not
/// coerce to a number.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    /// Column name.
    pub name: String,
    /// Number of present values.
    pub present: usize,
    /// Number of missing values.
    pub missing: usize,
    /// Smallest present value.
    pub min: Option<f64>,
    /// Largest present value.
    pub max: Option<f64>,
    /// Mean of the present values.
    pub mean: Option<f64>,
    /// Sample standard deviation of the present values.
    pub std: Option<f64>,
}

// numeric coercion failures mean "not a numeric column" here
fn numeric<T>(result: Result<Option<T>>) -> Result<Option<T>> {
    match result {
        Err(TabulaError::NumericCoercion { .. }) => Ok(None),
        other => other,
    }
}

fn column_stats(name: &str, series: &Series) -> Result<ColumnStats> {
    let keep = default_keep();
    let present = series.drop_missing(&keep);
    Ok(ColumnStats {
        name: name.to_string(),
        present: present.len(),
        missing: series.iter().filter(|value| is_missing(value, &keep)).count(),
        min: numeric(present.min())?,
        max: numeric(present.max())?,
        mean: numeric(present.mean())?,
        std: numeric(present.std())?,
    })
}

impl Table {
    /// Compute and return summary statistics for every column of this `Table`.
    pub fn describe(&self) -> Result<TableStats> {
        Ok(TableStats {
            nrows: self.len(),
            columns: self
                .columns
                .iter()
                .map(|name| column_stats(name, &*self.column(name)?))
                .collect::<Result<_>>()?,
        })
    }
}

impl TableStats {
    /// Number of rows in the described table.
    pub fn nrows(&self) -> usize {
        self.nrows
    }
    /// Per-column statistics, in column order.
    pub fn columns(&self) -> &[ColumnStats] {
        &self.columns
    }
    /// Statistics for the column `name`, if it exists.
    pub fn get(&self, name: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|stats| stats.name == name)
    }
}

fn opt_cell(value: Option<f64>) -> pt::Cell {
    pt::Cell::new(&value.map(|v| format!("{:.4}", v)).unwrap_or_default())
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Table with {} rows, {} columns",
            self.nrows,
            self.columns.len()
        )?;

        let mut table = pt::Table::new();
        table.set_titles(pt::Row::new(
            ["Column", "Present", "Missing", "Min", "Max", "Mean", "StDev"]
                .iter()
                .map(|title| pt::Cell::new(title))
                .collect(),
        ));
        for stats in &self.columns {
            table.add_row(pt::Row::new(vec![
                pt::Cell::new(&stats.name),
                pt::Cell::new(&stats.present.to_string()),
                pt::Cell::new(&stats.missing.to_string()),
                opt_cell(stats.min),
                opt_cell(stats.max),
                opt_cell(stats.mean),
                opt_cell(stats.std),
            ]));
        }
        table.set_format(*pt::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        fmt::Display::fmt(&table, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::*;
    use value::Value;

    #[test]
    fn describe_numeric_and_text() {
        let stats = sample_emp_table_extra().describe().unwrap();
        assert_eq!(stats.nrows(), 7);
        assert_eq!(stats.columns().len(), 6);

        let names = stats.get("EmpName").unwrap();
        assert_eq!(names.present, 7);
        assert_eq!(names.mean, None);

        let offsets = stats.get("SalaryOffset").unwrap();
        assert_eq!(offsets.min, Some(-33.0));
        assert_eq!(offsets.max, Some(12.0));
        // zero is a kept falsy value
        assert_eq!(offsets.present, 7);
    }

    #[test]
    fn describe_counts_missing() {
        let mut table = sample_emp_table();
        table.set(1, "EmpName", Value::Na).unwrap();
        table.set(2, "EmpName", "").unwrap();
        let stats = table.describe().unwrap();
        let names = stats.get("EmpName").unwrap();
        assert_eq!(names.present, 5);
        assert_eq!(names.missing, 2);

        let rendered = stats.to_string();
        assert!(rendered.starts_with("Table with 7 rows, 3 columns"));
        assert!(rendered.contains("EmpName"));
    }
}
