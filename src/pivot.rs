/*!
Pivot tables: a [Table](../table/struct.Table.html)'s rows partitioned into a tree keyed by the
values of one or more pivot columns, with rollup aggregation back into a flat table.

A `PivotTable` is built once from a sorted snapshot of its source table and never changes
afterwards; later mutations of the source are not observed, and every rollup produces a new
`Table`.
*/

use indexmap::IndexMap;

use error::*;
use record::Record;
use series::Series;
use table::Table;
use util::capitalize;
use value::Value;

/// A level of the pivot tree: either a further grouping by the next pivot column, or a leaf table
/// holding the rows which share one full combination of pivot values.
#[derive(Debug, Clone, PartialEq)]
pub enum PivotNode {
    /// Child nodes keyed by the value of this level's pivot column, in ascending key order.
    Branch(IndexMap<Value, PivotNode>),
    /// Rows sharing one full key path, with the pivot columns removed.
    Leaf(Table),
}

/// A table grouped by one or more pivot columns (outer to inner).
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    pivot_columns: Vec<String>,
    value_columns: Vec<String>,
    tree: PivotNode,
}

/// Partition `rows` (sorted by the pivot columns) into a tree keyed by `remaining` pivot columns.
fn build_node(rows: Vec<Record>, remaining: &[String], value_columns: &[String]) -> PivotNode {
    match remaining.split_first() {
        None => PivotNode::Leaf(Table::from_parts(value_columns.to_vec(), rows)),
        Some((column, rest)) => {
            let mut groups: IndexMap<Value, Vec<Record>> = IndexMap::new();
            for mut row in rows {
                let key = row.shift_remove(column.as_str()).unwrap_or(Value::Na);
                groups.entry(key).or_insert_with(Vec::new).push(row);
            }
            PivotNode::Branch(
                groups
                    .into_iter()
                    .map(|(key, rows)| (key, build_node(rows, rest, value_columns)))
                    .collect(),
            )
        }
    }
}

fn collect_leaves<'a>(
    node: &'a PivotNode,
    path: &mut Vec<&'a Value>,
    out: &mut Vec<(Vec<&'a Value>, &'a Table)>,
) {
    match *node {
        PivotNode::Leaf(ref table) => out.push((path.clone(), table)),
        PivotNode::Branch(ref children) => {
            for (key, child) in children {
                path.push(key);
                collect_leaves(child, path, out);
                path.pop();
            }
        }
    }
}

impl Table {
    /// Group the rows of this table by the values of `columns` (outer to inner). The rows are
    /// sorted by the pivot columns first, so keys at every level are in ascending order and each
    /// leaf keeps the sorted row order.
    ///
    /// Fails if `columns` is empty, names an unknown column, or names a column twice.
    pub fn pivot(&self, columns: &[&str]) -> Result<PivotTable> {
        if columns.is_empty() {
            return Err(TabulaError::invalid("pivot: no pivot columns given"));
        }
        for (i, name) in columns.iter().enumerate() {
            self.require_column("pivot", name)?;
            if columns[..i].contains(name) {
                return Err(TabulaError::invalid(format!(
                    "pivot: column '{}' given more than once",
                    name
                )));
            }
        }
        let sorted = self.sort(columns, false)?;
        let pivot_columns = columns.iter().map(|name| name.to_string()).collect::<Vec<_>>();
        let value_columns = self
            .columns
            .iter()
            .filter(|name| !pivot_columns.contains(name))
            .cloned()
            .collect::<Vec<_>>();
        let tree = build_node(sorted.rows, &pivot_columns, &value_columns);
        let pivot = PivotTable {
            pivot_columns,
            value_columns,
            tree,
        };
        debug!(
            "pivoted {} rows on {:?} into {} leaves",
            self.len(),
            pivot.pivot_columns,
            pivot.nleaves()
        );
        Ok(pivot)
    }
}

impl PivotTable {
    /// The pivot columns, outer to inner.
    pub fn pivot_columns(&self) -> &[String] {
        &self.pivot_columns
    }
    /// The columns of every leaf table (the source columns minus the pivot columns).
    pub fn value_columns(&self) -> &[String] {
        &self.value_columns
    }
    /// The root of the pivot tree.
    pub fn tree(&self) -> &PivotNode {
        &self.tree
    }

    /// `(key path, leaf table)` pairs in tree order. Each key path holds one value per pivot
    /// column.
    pub fn leaves(&self) -> Vec<(Vec<&Value>, &Table)> {
        let mut out = vec![];
        collect_leaves(&self.tree, &mut vec![], &mut out);
        out
    }
    /// Number of leaf tables.
    pub fn nleaves(&self) -> usize {
        self.leaves().len()
    }

    fn try_rollup<F>(&self, mut f: F, name: &str) -> Result<Table>
    where
        F: FnMut(&Table) -> Result<Value>,
    {
        if self.pivot_columns.iter().any(|col| col == name) {
            return Err(TabulaError::invalid(format!(
                "rollup: name '{}' clashes with a pivot column",
                name
            )));
        }
        let mut columns = self.pivot_columns.clone();
        columns.push(name.to_string());
        let mut rows = vec![];
        for (path, leaf) in self.leaves() {
            let mut row = self
                .pivot_columns
                .iter()
                .cloned()
                .zip(path.into_iter().cloned())
                .collect::<Record>();
            row.insert(name.to_string(), f(leaf)?);
            rows.push(row);
        }
        Ok(Table::from_parts(columns, rows))
    }

    /// Reduce every leaf table to a single value with `f`, and flatten the tree into a table with
    /// one row per leaf: the leaf's pivot values followed by column `name` holding `f(leaf)`.
    ///
    /// Fails if `name` is one of the pivot columns.
    pub fn rollup<F, V>(&self, mut f: F, name: &str) -> Result<Table>
    where
        F: FnMut(&Table) -> V,
        V: Into<Value>,
    {
        self.try_rollup(|leaf| Ok(f(leaf).into()), name)
    }

    /// Rollup of the number of rows in each leaf, in column `count`.
    pub fn count(&self) -> Result<Table> {
        self.rollup(|leaf| leaf.len(), "count")
    }

    fn aggregate<F, V>(&self, operation: &str, column: &str, mut f: F) -> Result<Table>
    where
        F: FnMut(&Series) -> Result<V>,
        V: Into<Value>,
    {
        if self.pivot_columns.iter().any(|col| col == column) {
            return Err(TabulaError::invalid(format!(
                "{}: cannot aggregate pivot column '{}'",
                operation, column
            )));
        }
        if !self.value_columns.iter().any(|col| col == column) {
            return Err(TabulaError::unknown_column(operation, column));
        }
        let name = format!("{}{}", operation, capitalize(column));
        self.try_rollup(|leaf| Ok(f(&*leaf.column(column)?)?.into()), &name)
    }

    /// Rollup of the sum of `column` in each leaf, in column `sum<Column>`.
    ///
    /// Fails if `column` is a pivot column or unknown, or if any value fails numeric coercion.
    pub fn sum(&self, column: &str) -> Result<Table> {
        self.aggregate("sum", column, Series::sum)
    }
    /// Rollup of the minimum of `column` in each leaf, in column `min<Column>`.
    pub fn min(&self, column: &str) -> Result<Table> {
        self.aggregate("min", column, Series::min)
    }
    /// Rollup of the maximum of `column` in each leaf, in column `max<Column>`.
    pub fn max(&self, column: &str) -> Result<Table> {
        self.aggregate("max", column, Series::max)
    }
    /// Rollup of the mean of `column` in each leaf, in column `mean<Column>`.
    pub fn mean(&self, column: &str) -> Result<Table> {
        self.aggregate("mean", column, Series::mean)
    }
    /// Rollup of the median of `column` in each leaf, in column `median<Column>`.
    pub fn median(&self, column: &str) -> Result<Table> {
        self.aggregate("median", column, Series::median)
    }
    /// Rollup of the sample standard deviation of `column` in each leaf, in column
    /// `std<Column>`. Leaves with fewer than two rows hold `Value::Na`.
    pub fn std(&self, column: &str) -> Result<Table> {
        self.aggregate("std", column, Series::std)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::*;

    fn sv() -> Table {
        Table::from_records(vec![
            record!["s" => "B", "v" => 5],
            record!["s" => "A", "v" => 1],
            record!["s" => "A", "v" => 3],
        ])
    }

    #[test]
    fn tree_structure() {
        let emp = sample_emp_table();
        let pivot = emp.pivot(&["DeptId"]).unwrap();
        assert_eq!(pivot.pivot_columns(), &["DeptId"]);
        assert_eq!(pivot.nleaves(), 4);
        let leaves = pivot.leaves();
        assert_eq!(leaves[0].0, vec![&Value::from(1)]);
        assert_eq!(leaves[0].1.columns(), &["EmpId", "EmpName"]);
        assert_column_eq(leaves[0].1, "EmpName", vec!["Sally", "Bob", "Cara"]);
        assert_eq!(leaves[3].0, vec![&Value::from(4)]);
    }

    #[test]
    fn nested_pivot() {
        let table = Table::from_records(vec![
            record!["a" => 2, "b" => "y", "v" => 1],
            record!["a" => 10, "b" => "x", "v" => 2],
            record!["a" => 2, "b" => "x", "v" => 3],
            record!["a" => 2, "b" => "y", "v" => 4],
        ]);
        let pivot = table.pivot(&["a", "b"]).unwrap();
        let paths = pivot
            .leaves()
            .into_iter()
            .map(|(path, _)| path.into_iter().cloned().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        // numeric keys order numerically, not lexically
        assert_eq!(
            paths,
            vec![
                vec![Value::from(2), Value::from("x")],
                vec![Value::from(2), Value::from("y")],
                vec![Value::from(10), Value::from("x")],
            ]
        );
        match *pivot.tree() {
            PivotNode::Branch(ref children) => assert_eq!(children.len(), 2),
            PivotNode::Leaf(_) => panic!("expected a branch at the root"),
        }
        let counts = pivot.count().unwrap();
        assert_eq!(counts.columns(), &["a", "b", "count"]);
        assert_column_eq(&counts, "count", vec![1, 2, 1]);
    }

    #[test]
    fn repeated_pivot_column() {
        match sv().pivot(&["s", "s"]) {
            Err(TabulaError::InvalidArgument(msg)) => assert!(msg.contains("'s'")),
            other => panic!("expected invalid argument, got {:?}", other),
        }
        let sums = sv().pivot(&["s"]).unwrap().sum("v").unwrap();
        assert_eq!(sums.columns(), &["s", "sumV"]);
        assert!(sums.to_csv(b',').is_ok());
    }

    #[test]
    fn rollup_sum() {
        let sums = sv().pivot(&["s"]).unwrap().sum("v").unwrap();
        assert_eq!(
            sums.to_array(),
            vec![record!["s" => "A", "sumV" => 4], record!["s" => "B", "sumV" => 5]]
        );
    }

    #[test]
    fn rollup_aggregates() {
        let pivot = sv().pivot(&["s"]).unwrap();
        assert_column_eq(&pivot.mean("v").unwrap(), "meanV", vec![2, 5]);
        assert_column_eq(&pivot.min("v").unwrap(), "minV", vec![1, 5]);
        assert_column_eq(&pivot.max("v").unwrap(), "maxV", vec![3, 5]);
        assert_column_eq(&pivot.median("v").unwrap(), "medianV", vec![2, 5]);
        let std = pivot.std("v").unwrap();
        assert_eq!(std[1]["stdV"], Value::Na);

        let custom = pivot
            .rollup(|leaf| leaf.first().map(|row| row["v"].clone()), "firstV")
            .unwrap();
        assert_column_eq(&custom, "firstV", vec![1, 5]);
    }

    #[test]
    fn invalid_pivots() {
        let table = sv();
        assert!(table.pivot(&["nope"]).is_err());
        assert!(table.pivot(&[]).is_err());
        let pivot = table.pivot(&["s"]).unwrap();
        match pivot.sum("s") {
            Err(TabulaError::InvalidArgument(_)) => {}
            other => panic!("expected invalid argument, got {:?}", other),
        }
        assert!(pivot.sum("nope").is_err());
        assert!(pivot.rollup(|leaf| leaf.len(), "s").is_err());

        let text = Table::from_records(vec![record!["s" => "A", "v" => "x"]]);
        match text.pivot(&["s"]).unwrap().sum("v") {
            Err(TabulaError::NumericCoercion { .. }) => {}
            other => panic!("expected coercion failure, got {:?}", other),
        }
    }

    #[test]
    fn snapshot_of_source() {
        let mut table = sv();
        let pivot = table.pivot(&["s"]).unwrap();
        table.set(0, "v", 100).unwrap();
        assert_column_eq(&pivot.sum("v").unwrap(), "sumV", vec![4, 5]);
    }
}
