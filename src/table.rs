/*!
The [Table](struct.Table.html) struct: an ordered list of uniform records plus an ordered list of
unique column names.

Every record in a `Table` holds exactly the table's columns, in column order; absent fields are
filled with `Value::Na`. Per-column [Series](../series/struct.Series.html) views are materialized
on demand and cached; any mutation invalidates the cache, so a read after a mutation always
observes the current rows.

Operations follow the crate-wide copy/in-place convention: `op(&self, ..)` returns a new `Table`
and leaves the receiver untouched, while `op_in_place(&mut self, ..)` mutates the receiver and
returns it for chaining. `append` and `insert` always mutate. Validation happens before any
mutation, so a failed `_in_place` call leaves the table unchanged.

Values are coerced at ingestion only: text which parses cleanly as a number becomes a
`Value::Number` when a table is built from records (or deserialized, or read from CSV). Mutators
such as `append`, `set`, and `replace` store values exactly as given.
*/

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::iter::Enumerate;
use std::ops::Index;
use std::slice;
use std::sync::Arc;

use bit_vec::BitVec;

use error::*;
use options::{Axis, DropNa};
use record::{conform, Record};
use series::Series;
use util::{deep_equal, is_missing, resolve_range};
use value::Value;

/// An ordered collection of records sharing one ordered set of column names.
pub struct Table {
    pub(crate) rows: Vec<Record>,
    pub(crate) columns: Vec<String>,
    views: RefCell<HashMap<String, Arc<Series>>>,
}

/// Data for a new column: either a single value broadcast to every row, or one value per row.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// A value copied into every row.
    Scalar(Value),
    /// Values assigned to rows in order.
    Values(Vec<Value>),
}

impl From<Value> for ColumnData {
    fn from(value: Value) -> ColumnData {
        ColumnData::Scalar(value)
    }
}
impl From<Vec<Value>> for ColumnData {
    fn from(values: Vec<Value>) -> ColumnData {
        ColumnData::Values(values)
    }
}
impl From<Series> for ColumnData {
    fn from(series: Series) -> ColumnData {
        ColumnData::Values(series.values)
    }
}
impl<'a> From<&'a Series> for ColumnData {
    fn from(series: &'a Series) -> ColumnData {
        ColumnData::Values(series.to_vec())
    }
}
macro_rules! impl_column_scalar {
    ($($t:ty)*) => {$(
        impl From<$t> for ColumnData {
            fn from(value: $t) -> ColumnData {
                ColumnData::Scalar(Value::from(value))
            }
        }
    )*}
}
impl_column_scalar![bool f64 i64 i32 u64 usize String];
impl<'a> From<&'a str> for ColumnData {
    fn from(value: &'a str) -> ColumnData {
        ColumnData::Scalar(Value::from(value))
    }
}

/// Union of the keys of `records`, in first-seen order.
fn key_union<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut seen = HashSet::new();
    let mut columns = vec![];
    for record in records {
        for key in record.keys() {
            if seen.insert(key.as_str()) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

fn ingest_record(record: Record) -> Record {
    record
        .into_iter()
        .map(|(key, value)| (key, value.ingest()))
        .collect()
}

impl Table {
    /// Create a new, empty `Table` (no rows, no columns).
    pub fn new() -> Table {
        Table::from_parts(vec![], vec![])
    }

    /// Build a table directly from already-conformed parts.
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Record>) -> Table {
        Table {
            rows,
            columns,
            views: RefCell::new(HashMap::new()),
        }
    }

    /// Build a table from records. The columns are the union of all record keys, in first-seen
    /// order; absent fields become `Value::Na`. Text which parses cleanly as a number is coerced to
    /// a number.
    pub fn from_records<I>(records: I) -> Table
    where
        I: IntoIterator<Item = Record>,
    {
        let records = records.into_iter().map(ingest_record).collect::<Vec<_>>();
        let columns = key_union(&records);
        let rows = records
            .into_iter()
            .map(|record| conform(record, &columns))
            .collect::<Vec<_>>();
        debug!(
            "constructed table with {} rows and {} columns",
            rows.len(),
            columns.len()
        );
        Table::from_parts(columns, rows)
    }

    /// Build a table from records with an explicit column list. Record fields outside `columns`
    /// are discarded and absent fields become `Value::Na`.
    ///
    /// Fails with a `StructuralViolation` if `columns` contains a duplicate name.
    pub fn with_columns<I, S>(records: I, columns: Vec<S>) -> Result<Table>
    where
        I: IntoIterator<Item = Record>,
        S: Into<String>,
    {
        let columns = columns.into_iter().map(Into::into).collect::<Vec<String>>();
        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(TabulaError::structural(format!(
                    "with_columns: duplicate column name '{}'",
                    name
                )));
            }
        }
        let rows = records
            .into_iter()
            .map(|record| conform(ingest_record(record), &columns))
            .collect();
        Ok(Table::from_parts(columns, rows))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    /// Whether this table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }
    /// The column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    /// Whether a column named `name` exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|col| col == name)
    }

    pub(crate) fn require_column(&self, operation: &str, name: &str) -> Result<()> {
        if self.has_column(name) {
            Ok(())
        } else {
            Err(TabulaError::unknown_column(operation, name))
        }
    }

    pub(crate) fn invalidate(&mut self) {
        let views = self.views.get_mut();
        if !views.is_empty() {
            trace!("invalidating {} cached column views", views.len());
            views.clear();
        }
    }

    /// The row at `index`.
    ///
    /// Fails if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<&Record> {
        self.rows.get(index).ok_or_else(|| {
            TabulaError::invalid(format!(
                "get: index {} out of range for table of length {}",
                index,
                self.len()
            ))
        })
    }
    /// The first row, if any.
    pub fn first(&self) -> Option<&Record> {
        self.rows.first()
    }
    /// The last row, if any.
    pub fn last(&self) -> Option<&Record> {
        self.rows.last()
    }
    /// The first row matching `predicate`, if any.
    pub fn find<P>(&self, mut predicate: P) -> Option<&Record>
    where
        P: FnMut(&Record) -> bool,
    {
        self.rows.iter().find(|row| predicate(row))
    }

    /// Set the cell at row `index`, column `column` to `value`. Always mutates.
    ///
    /// Fails if `index` is out of range or `column` does not exist.
    pub fn set<V: Into<Value>>(
        &mut self,
        index: usize,
        column: &str,
        value: V,
    ) -> Result<&mut Table> {
        self.require_column("set", column)?;
        if index >= self.len() {
            return Err(TabulaError::invalid(format!(
                "set: index {} out of range for table of length {}",
                index,
                self.len()
            )));
        }
        if let Some(cell) = self.rows[index].get_mut(column) {
            *cell = value.into();
        }
        if self.views.get_mut().remove(column).is_some() {
            trace!("invalidated cached view of column '{}'", column);
        }
        Ok(self)
    }

    fn view(&self, name: &str) -> Arc<Series> {
        if let Some(series) = self.views.borrow().get(name) {
            return Arc::clone(series);
        }
        let series = Arc::new(Series::from_values(
            self.rows
                .iter()
                .map(|row| row.get(name).cloned().unwrap_or(Value::Na)),
        ));
        self.views
            .borrow_mut()
            .insert(name.to_string(), Arc::clone(&series));
        series
    }

    /// The values of column `name` across all rows, as a `Series`. The view is cached until the
    /// table is next mutated.
    ///
    /// Fails if the column does not exist.
    pub fn column(&self, name: &str) -> Result<Arc<Series>> {
        self.require_column("column", name)?;
        Ok(self.view(name))
    }

    /// Iterator over `(index, row)` pairs. Restartable by calling again.
    pub fn rows(&self) -> Enumerate<slice::Iter<Record>> {
        self.rows.iter().enumerate()
    }
    /// Copy the rows of this table into a `Vec` of records.
    pub fn to_array(&self) -> Vec<Record> {
        self.rows.clone()
    }

    fn with_rows(&self, rows: Vec<Record>) -> Table {
        Table::from_parts(self.columns.clone(), rows)
    }

    /// The rows in `start..end`, as a new table. Negative indices count back from the end.
    pub fn slice(&self, start: isize, end: Option<isize>) -> Table {
        let (start, end) = resolve_range(self.len(), start, end);
        self.with_rows(self.rows[start..end].to_vec())
    }
    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Table {
        let n = n.min(self.len());
        self.with_rows(self.rows[..n].to_vec())
    }
    /// The last `n` rows.
    pub fn tail(&self, n: usize) -> Table {
        let n = n.min(self.len());
        self.with_rows(self.rows[self.len() - n..].to_vec())
    }

    fn row_mask<P>(&self, mut predicate: P) -> BitVec
    where
        P: FnMut(&Record) -> bool,
    {
        let mut mask = BitVec::from_elem(self.len(), false);
        for (i, row) in self.rows.iter().enumerate() {
            if predicate(row) {
                mask.set(i, true);
            }
        }
        mask
    }
    pub(crate) fn retain_rows(&mut self, mask: &BitVec) {
        let mut idx = 0;
        self.rows.retain(|_| {
            let keep = mask.get(idx).unwrap_or(false);
            idx += 1;
            keep
        });
        self.invalidate();
    }
    fn retain_columns(&mut self, keep: Vec<String>) {
        {
            let keep = keep.iter().collect::<HashSet<_>>();
            for row in &mut self.rows {
                row.retain(|key, _| keep.contains(key));
            }
        }
        if keep.len() != self.columns.len() {
            debug!(
                "narrowed columns from {} to {}",
                self.columns.len(),
                keep.len()
            );
        }
        self.columns = keep;
        self.invalidate();
    }

    /// Returns a new table holding only the rows matching `predicate`. All columns are kept.
    pub fn filter<P>(&self, predicate: P) -> Table
    where
        P: FnMut(&Record) -> bool,
    {
        let mask = self.row_mask(predicate);
        let mut out = self.clone();
        out.retain_rows(&mask);
        out
    }
    /// Retain only the rows matching `predicate`.
    pub fn filter_in_place<P>(&mut self, predicate: P) -> &mut Table
    where
        P: FnMut(&Record) -> bool,
    {
        let mask = self.row_mask(predicate);
        self.retain_rows(&mask);
        self
    }
    /// Returns a new table holding only the columns whose names match `predicate`. All rows are
    /// kept.
    pub fn filter_columns<P>(&self, predicate: P) -> Table
    where
        P: FnMut(&str) -> bool,
    {
        let mut out = self.clone();
        out.filter_columns_in_place(predicate);
        out
    }
    /// Retain only the columns whose names match `predicate`.
    pub fn filter_columns_in_place<P>(&mut self, mut predicate: P) -> &mut Table
    where
        P: FnMut(&str) -> bool,
    {
        let keep = self
            .columns
            .iter()
            .filter(|name| predicate(name))
            .cloned()
            .collect();
        self.retain_columns(keep);
        self
    }

    fn validate_names(&self, operation: &str, names: &[&str]) -> Result<()> {
        names
            .iter()
            .map(|name| self.require_column(operation, name))
            .collect()
    }

    /// Returns a new table holding only the listed columns, in their current order.
    ///
    /// Fails if any listed column does not exist.
    pub fn select(&self, names: &[&str]) -> Result<Table> {
        self.validate_names("select", names)?;
        Ok(self.filter_columns(|name| names.iter().any(|n| *n == name)))
    }
    /// Retain only the listed columns.
    ///
    /// Fails (leaving the table untouched) if any listed column does not exist.
    pub fn select_in_place(&mut self, names: &[&str]) -> Result<&mut Table> {
        self.validate_names("select", names)?;
        Ok(self.filter_columns_in_place(|name| names.iter().any(|n| *n == name)))
    }

    /// Returns a new table without the rows matching `predicate`.
    pub fn drop_where<P>(&self, mut predicate: P) -> Table
    where
        P: FnMut(&Record) -> bool,
    {
        self.filter(|row| !predicate(row))
    }
    /// Remove the rows matching `predicate`.
    pub fn drop_where_in_place<P>(&mut self, mut predicate: P) -> &mut Table
    where
        P: FnMut(&Record) -> bool,
    {
        self.filter_in_place(|row| !predicate(row))
    }
    /// Returns a new table without the columns whose names match `predicate`.
    pub fn drop_columns_where<P>(&self, mut predicate: P) -> Table
    where
        P: FnMut(&str) -> bool,
    {
        self.filter_columns(|name| !predicate(name))
    }
    /// Remove the columns whose names match `predicate`.
    pub fn drop_columns_where_in_place<P>(&mut self, mut predicate: P) -> &mut Table
    where
        P: FnMut(&str) -> bool,
    {
        self.filter_columns_in_place(|name| !predicate(name))
    }
    /// Returns a new table without the listed columns.
    ///
    /// Fails if any listed column does not exist.
    pub fn drop_columns(&self, names: &[&str]) -> Result<Table> {
        self.validate_names("drop_columns", names)?;
        Ok(self.drop_columns_where(|name| names.iter().any(|n| *n == name)))
    }
    /// Remove the listed columns.
    ///
    /// Fails (leaving the table untouched) if any listed column does not exist.
    pub fn drop_columns_in_place(&mut self, names: &[&str]) -> Result<&mut Table> {
        self.validate_names("drop_columns", names)?;
        Ok(self.drop_columns_where_in_place(|name| names.iter().any(|n| *n == name)))
    }

    /// Returns a new table with every cell equal to `old` replaced by `new`. When `columns` is
    /// given, only those columns are touched.
    ///
    /// Fails if any listed column does not exist.
    pub fn replace<O, N>(&self, old: O, new: N, columns: Option<&[&str]>) -> Result<Table>
    where
        O: Into<Value>,
        N: Into<Value>,
    {
        let mut out = self.clone();
        out.replace_in_place(old, new, columns)?;
        Ok(out)
    }
    /// Replace every cell equal to `old` with `new`, optionally restricted to `columns`.
    ///
    /// Fails (leaving the table untouched) if any listed column does not exist.
    pub fn replace_in_place<O, N>(
        &mut self,
        old: O,
        new: N,
        columns: Option<&[&str]>,
    ) -> Result<&mut Table>
    where
        O: Into<Value>,
        N: Into<Value>,
    {
        if let Some(names) = columns {
            self.validate_names("replace", names)?;
        }
        let (old, new) = (old.into(), new.into());
        let mut replaced = 0;
        for row in &mut self.rows {
            for (key, cell) in row.iter_mut() {
                let in_scope = columns.map_or(true, |names| names.iter().any(|name| name == key));
                if in_scope && *cell == old {
                    *cell = new.clone();
                    replaced += 1;
                }
            }
        }
        trace!("replace: {} cells replaced", replaced);
        self.invalidate();
        Ok(self)
    }

    /// Add the keys of `records` missing from this table's columns, backfilling existing rows with
    /// `Value::Na`.
    fn extend_columns(&mut self, records: &[Record]) {
        let added = key_union(records)
            .into_iter()
            .filter(|key| !self.has_column(key))
            .collect::<Vec<_>>();
        if added.is_empty() {
            return;
        }
        debug!("extending columns with {:?}", added);
        for row in &mut self.rows {
            for key in &added {
                row.insert(key.clone(), Value::Na);
            }
        }
        self.columns.extend(added);
    }

    fn incoming_rows<I>(&mut self, rows: I, extend: bool) -> Vec<Record>
    where
        I: IntoIterator<Item = Record>,
    {
        let rows = rows.into_iter().collect::<Vec<_>>();
        if extend {
            self.extend_columns(&rows);
        }
        let columns = &self.columns;
        rows.into_iter().map(|row| conform(row, columns)).collect()
    }

    /// Append `rows` to the end of this table. Always mutates.
    ///
    /// Without `extend`, only existing columns are populated: unknown keys are dropped and absent
    /// keys become `Value::Na`. With `extend`, new keys become new columns and every other row is
    /// backfilled with `Value::Na`.
    pub fn append<I>(&mut self, rows: I, extend: bool) -> &mut Table
    where
        I: IntoIterator<Item = Record>,
    {
        let incoming = self.incoming_rows(rows, extend);
        self.rows.extend(incoming);
        self.invalidate();
        self
    }

    /// Insert `rows` before row `at`. Always mutates. `extend` behaves as in
    /// [append](#method.append).
    ///
    /// Fails if `at` is greater than the number of rows.
    pub fn insert<I>(&mut self, rows: I, at: usize, extend: bool) -> Result<&mut Table>
    where
        I: IntoIterator<Item = Record>,
    {
        if at > self.len() {
            return Err(TabulaError::invalid(format!(
                "insert: index {} out of range for table of length {}",
                at,
                self.len()
            )));
        }
        let incoming = self.incoming_rows(rows, extend);
        let tail = self.rows.split_off(at);
        self.rows.extend(incoming);
        self.rows.extend(tail);
        self.invalidate();
        Ok(self)
    }

    /// Returns a new table with the rows of `other` appended. `extend` behaves as in
    /// [append](#method.append).
    pub fn concat(&self, other: &Table, extend: bool) -> Table {
        let mut out = self.clone();
        out.concat_in_place(other, extend);
        out
    }
    /// Append the rows of `other`.
    pub fn concat_in_place(&mut self, other: &Table, extend: bool) -> &mut Table {
        self.append(other.rows.iter().cloned(), extend)
    }

    /// Returns a new table with an added column `name`. A scalar is broadcast to every row;
    /// per-row values fill rows in order, with `Value::Na` for rows past the end of the values.
    /// With `extend`, values past the end of the table become new rows (other columns `Value::Na`);
    /// otherwise they are discarded.
    ///
    /// Fails if a column named `name` already exists.
    pub fn add_column<D>(&self, name: &str, data: D, extend: bool) -> Result<Table>
    where
        D: Into<ColumnData>,
    {
        let mut out = self.clone();
        out.add_column_in_place(name, data, extend)?;
        Ok(out)
    }
    /// Add a column `name` to this table.
    ///
    /// Fails (leaving the table untouched) if a column named `name` already exists.
    pub fn add_column_in_place<D>(&mut self, name: &str, data: D, extend: bool) -> Result<&mut Table>
    where
        D: Into<ColumnData>,
    {
        if self.has_column(name) {
            return Err(TabulaError::invalid(format!(
                "add_column: column '{}' already exists",
                name
            )));
        }
        self.columns.push(name.to_string());
        match data.into() {
            ColumnData::Scalar(value) => {
                for row in &mut self.rows {
                    row.insert(name.to_string(), value.clone());
                }
            }
            ColumnData::Values(values) => {
                let mut values = values.into_iter();
                for row in &mut self.rows {
                    row.insert(name.to_string(), values.next().unwrap_or(Value::Na));
                }
                if extend {
                    for value in values {
                        let mut row = self
                            .columns
                            .iter()
                            .map(|col| (col.clone(), Value::Na))
                            .collect::<Record>();
                        row.insert(name.to_string(), value);
                        self.rows.push(row);
                    }
                }
            }
        }
        debug!("added column '{}'", name);
        self.invalidate();
        Ok(self)
    }

    fn renamed_columns(&self, pairs: &[(&str, &str)]) -> Result<Vec<String>> {
        let mut columns = self.columns.clone();
        for &(from, to) in pairs {
            let pos = self
                .columns
                .iter()
                .position(|col| col == from)
                .ok_or_else(|| TabulaError::unknown_column("rename", from))?;
            columns[pos] = to.to_string();
        }
        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(TabulaError::invalid(format!(
                    "rename: duplicate column name '{}'",
                    name
                )));
            }
        }
        Ok(columns)
    }

    /// Returns a new table with columns renamed according to `(from, to)` pairs. Columns keep
    /// their positions and values travel with their renamed column.
    ///
    /// Fails if a source column does not exist or the renaming produces duplicate names.
    pub fn rename(&self, pairs: &[(&str, &str)]) -> Result<Table> {
        let mut out = self.clone();
        out.rename_in_place(pairs)?;
        Ok(out)
    }
    /// Rename columns according to `(from, to)` pairs.
    ///
    /// Fails (leaving the table untouched) if a source column does not exist or the renaming
    /// produces duplicate names.
    pub fn rename_in_place(&mut self, pairs: &[(&str, &str)]) -> Result<&mut Table> {
        let columns = self.renamed_columns(pairs)?;
        let old = ::std::mem::replace(&mut self.columns, columns);
        for row in &mut self.rows {
            *row = old
                .iter()
                .zip(self.columns.iter())
                .map(|(from, to)| (to.clone(), row.get(from).cloned().unwrap_or(Value::Na)))
                .collect();
        }
        debug!("renamed columns {:?} to {:?}", old, self.columns);
        self.invalidate();
        Ok(self)
    }

    fn check_permutation(&self, names: &[&str]) -> Result<()> {
        self.validate_names("reorder", names)?;
        let distinct = names.iter().collect::<HashSet<_>>();
        if names.len() != self.ncols() || distinct.len() != names.len() {
            return Err(TabulaError::structural(format!(
                "reorder: {:?} is not a permutation of columns {:?}",
                names, self.columns
            )));
        }
        Ok(())
    }

    /// Returns a new table with columns in the order given by `names`.
    ///
    /// Fails with an `InvalidArgument` if a name is unknown, or with a `StructuralViolation` if
    /// `names` is not exactly a permutation of the current columns.
    pub fn reorder(&self, names: &[&str]) -> Result<Table> {
        let mut out = self.clone();
        out.reorder_in_place(names)?;
        Ok(out)
    }
    /// Reorder columns to the order given by `names`.
    pub fn reorder_in_place(&mut self, names: &[&str]) -> Result<&mut Table> {
        self.check_permutation(names)?;
        self.columns = names.iter().map(|name| name.to_string()).collect();
        self.reconform();
        Ok(self)
    }

    /// Rebuild every row to match the current column order.
    pub(crate) fn reconform(&mut self) {
        let columns = &self.columns;
        for row in &mut self.rows {
            let taken = ::std::mem::replace(row, Record::new());
            *row = conform(taken, columns);
        }
        self.invalidate();
    }

    /// Returns a new table without missing values: along `Axis::Rows`, rows holding any missing
    /// value are dropped; along `Axis::Columns`, columns holding any missing value are dropped.
    /// Falsy values in `options.keep` are not missing.
    pub fn drop_na(&self, options: &DropNa) -> Table {
        let mut out = self.clone();
        out.drop_na_in_place(options);
        out
    }
    /// Remove missing values along `options.axis`.
    pub fn drop_na_in_place(&mut self, options: &DropNa) -> &mut Table {
        let keep = &options.keep;
        match options.axis {
            Axis::Rows => {
                self.filter_in_place(|row| !row.values().any(|value| is_missing(value, keep)))
            }
            Axis::Columns => {
                let present = self
                    .columns
                    .iter()
                    .filter(|name| self.view(name).all(|value| !is_missing(value, keep)))
                    .cloned()
                    .collect();
                self.retain_columns(present);
                self
            }
        }
    }
}

impl Default for Table {
    fn default() -> Table {
        Table::new()
    }
}

impl Clone for Table {
    fn clone(&self) -> Table {
        Table::from_parts(self.columns.clone(), self.rows.clone())
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Table) -> bool {
        self.columns == other.columns
            && self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .zip(other.rows.iter())
                .all(|(left, right)| deep_equal(left, right))
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .finish()
    }
}

impl Index<usize> for Table {
    type Output = Record;
    fn index(&self, index: usize) -> &Record {
        &self.rows[index]
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Table {
        Table::from_records(records)
    }
}

#[cfg(feature = "serialize")]
impl ::serde::Serialize for Table {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        ::serde::Serialize::serialize(&self.rows, serializer)
    }
}

#[cfg(feature = "serialize")]
impl<'de> ::serde::Deserialize<'de> for Table {
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Table, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        let records = <Vec<Record> as ::serde::Deserialize>::deserialize(deserializer)?;
        Ok(Table::from_records(records))
    }
}
