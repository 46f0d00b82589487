/*!
Single-column equality joins between two [Table](../table/struct.Table.html)s.

Each row is matched against the *first* row on the other side holding an equal join key; later
rows with the same key are never matched (this is a first-match join, not a relational
cross-product on duplicate keys). `Value::Na` keys never match. A matched pair merges into one row
in which fields of the right table overwrite those of the left. The joined table's columns are the
union of both sides (left columns first), and duplicate rows are removed before returning.
*/

use std::collections::HashMap;

use error::*;
use options::JoinKind;
use record::{conform, merged, Record};
use table::Table;
use value::Value;

/// Index of the first row holding each non-`Na` value of `column`.
fn first_match_index<'a>(table: &'a Table, column: &str) -> HashMap<&'a Value, usize> {
    let mut index = HashMap::new();
    for (i, row) in table.rows() {
        let key = &row[column];
        if !key.is_na() {
            index.entry(key).or_insert(i);
        }
    }
    index
}

fn lookup<'a>(
    index: &HashMap<&Value, usize>,
    table: &'a Table,
    row: &Record,
    column: &str,
) -> Option<&'a Record> {
    index.get(&row[column]).map(|&i| &table.rows[i])
}

impl Table {
    /// Returns the join of this table with `other` on the shared column `column`.
    ///
    /// * `JoinKind::Inner`: rows of this table with a match in `other`, merged with their match.
    /// * `JoinKind::Left`: every row of this table; matched rows are merged, unmatched rows keep
    ///   their own fields.
    /// * `JoinKind::Right`: every row of `other`, merged with its match in this table if any.
    /// * `JoinKind::Outer`: the left join plus the rows of `other` with no match in this table.
    ///
    /// Fails if `column` is missing from either table.
    pub fn join(&self, other: &Table, column: &str, how: JoinKind) -> Result<Table> {
        self.require_column("join", column)?;
        other.require_column("join", column)?;

        let left_index = first_match_index(self, column);
        let right_index = first_match_index(other, column);

        let mut joined: Vec<Record> = vec![];
        if how != JoinKind::Right {
            for (_, row) in self.rows() {
                match lookup(&right_index, other, row, column) {
                    Some(matched) => joined.push(merged(row, matched)),
                    None if how != JoinKind::Inner => joined.push(row.clone()),
                    None => {}
                }
            }
        }
        if how == JoinKind::Right || how == JoinKind::Outer {
            for (_, row) in other.rows() {
                match lookup(&left_index, self, row, column) {
                    Some(matched) if how == JoinKind::Right => joined.push(merged(matched, row)),
                    // matched pairs were already emitted by the left pass
                    Some(_) => {}
                    None => joined.push(row.clone()),
                }
            }
        }

        let mut columns = self.columns.clone();
        columns.extend(
            other
                .columns
                .iter()
                .filter(|name| !self.has_column(name))
                .cloned(),
        );
        let rows = joined
            .into_iter()
            .map(|row| conform(row, &columns))
            .collect();
        let mut out = Table::from_parts(columns, rows);
        out.drop_duplicates_in_place(None)?;
        debug!(
            "{:?} join on '{}': {} x {} rows -> {} rows",
            how,
            column,
            self.len(),
            other.len(),
            out.len()
        );
        Ok(out)
    }

    /// Replace this table with its join with `other` on `column`.
    ///
    /// Fails (leaving the table untouched) if `column` is missing from either table.
    pub fn join_in_place(&mut self, other: &Table, column: &str, how: JoinKind) -> Result<&mut Table> {
        let joined = self.join(other, column, how)?;
        *self = joined;
        Ok(self)
    }
}
