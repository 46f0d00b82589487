/*!
Text rendering of tables, series, and pivot tables as fixed-width grids.
*/

use std::fmt::{self, Display, Formatter};

use prettytable as pt;

use pivot::PivotTable;
use series::Series;
use table::Table;
use value::Value;

/// Maximum number of characters displayed in a single cell.
pub const MAX_CELL_WIDTH: usize = 42;
/// Maximum number of rows (or pivot leaves) displayed.
pub const MAX_DISPLAY_ROWS: usize = 25;

fn truncated(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        text.to_string()
    } else {
        let mut out = text.chars().take(MAX_CELL_WIDTH - 3).collect::<String>();
        out.push_str("...");
        out
    }
}

fn cell(value: &Value) -> pt::Cell {
    pt::Cell::new(&truncated(&value.to_string()))
}

fn titles<'a, I>(names: I) -> pt::Row
where
    I: IntoIterator<Item = &'a String>,
{
    pt::Row::new(names.into_iter().map(|name| pt::Cell::new(&truncated(name))).collect())
}

fn render(table: &mut pt::Table, f: &mut Formatter) -> fmt::Result {
    table.set_format(*pt::format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    Display::fmt(&*table, f)
}

fn elided(f: &mut Formatter, shown: usize, total: usize) -> fmt::Result {
    if shown < total {
        writeln!(f, "... ({} more)", total - shown)?;
    }
    Ok(())
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "Empty Table");
        }
        let mut table = pt::Table::new();
        table.set_titles(titles(&self.columns));
        for row in self.rows.iter().take(MAX_DISPLAY_ROWS) {
            table.add_row(pt::Row::new(row.values().map(cell).collect()));
        }
        render(&mut table, f)?;
        elided(f, self.len().min(MAX_DISPLAY_ROWS), self.len())?;
        write!(
            f,
            "Table of length {}, columns: [{}]",
            self.len(),
            self.columns.join(", ")
        )
    }
}

impl Display for Series {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty Series");
        }
        let mut table = pt::Table::new();
        for (i, value) in self.items().take(MAX_DISPLAY_ROWS) {
            table.add_row(pt::Row::new(vec![pt::Cell::new(&i.to_string()), cell(value)]));
        }
        render(&mut table, f)?;
        elided(f, self.len().min(MAX_DISPLAY_ROWS), self.len())?;
        write!(f, "Series of length {}", self.len())
    }
}

impl Display for PivotTable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let leaves = self.leaves();
        let mut header = self.pivot_columns().to_vec();
        header.push("rows".to_string());
        let mut table = pt::Table::new();
        table.set_titles(titles(&header));
        for (path, leaf) in leaves.iter().take(MAX_DISPLAY_ROWS) {
            let mut cells = path.iter().map(|value| cell(value)).collect::<Vec<_>>();
            cells.push(pt::Cell::new(&leaf.len().to_string()));
            table.add_row(pt::Row::new(cells));
        }
        render(&mut table, f)?;
        elided(f, leaves.len().min(MAX_DISPLAY_ROWS), leaves.len())?;
        write!(
            f,
            "PivotTable with {} leaves, pivot columns: [{}], value columns: [{}]",
            leaves.len(),
            self.pivot_columns().join(", "),
            self.value_columns().join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::*;

    #[test]
    fn table_display() {
        let emp = sample_emp_table();
        let out = emp.to_string();
        assert!(out.contains("EmpName"));
        assert!(out.contains("Louise"));
        assert!(out.ends_with("Table of length 7, columns: [EmpId, DeptId, EmpName]"));
        assert_eq!(Table::new().to_string(), "Empty Table");
    }

    #[test]
    fn long_tables_are_elided() {
        let table = Table::from_records((0..30).map(|i| record!["i" => i]).collect::<Vec<_>>());
        let out = table.to_string();
        assert!(out.contains("... (5 more)"));
        assert!(out.contains("24"));
        assert!(!out.contains("29"));
    }

    #[test]
    fn wide_cells_are_truncated() {
        let long = "x".repeat(100);
        let table = Table::from_records(vec![record!["text" => long.as_str()]]);
        let out = table.to_string();
        assert!(!out.contains(&long));
        assert!(out.contains(&format!("{}...", "x".repeat(MAX_CELL_WIDTH - 3))));
    }

    #[test]
    fn series_and_pivot_display() {
        let s = Series::from_values(vec![Value::from(1.5), Value::Na]);
        let out = s.to_string();
        assert!(out.contains("1.5"));
        assert!(out.contains("NA"));
        assert!(out.ends_with("Series of length 2"));

        let pivot = sample_emp_table().pivot(&["DeptId"]).unwrap();
        let out = pivot.to_string();
        assert!(out.contains("rows"));
        assert!(out.ends_with(
            "PivotTable with 4 leaves, pivot columns: [DeptId], value columns: [EmpId, EmpName]"
        ));
    }
}
