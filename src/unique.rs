/*!
`Series` and `Table` methods for finding unique values and removing duplicates.

Equality is structural (see [Value](../value/enum.Value.html)): the first occurrence of each
distinct value or row is kept, and first-occurrence order is preserved.
*/

use std::collections::HashSet;

use bit_vec::BitVec;
use indexmap::IndexMap;

use error::*;
use options::CountOptions;
use series::Series;
use table::Table;
use value::Value;

impl Series {
    /// Returns a `Vec` of indices that point to the first occurrence of each distinct value.
    pub fn unique_indices(&self) -> Vec<usize> {
        let mut set = HashSet::new();
        let mut indices = vec![];
        for (i, value) in self.values.iter().enumerate() {
            if set.insert(value) {
                indices.push(i);
            }
        }
        indices
    }

    /// Returns the distinct values of this series, in first-occurrence order.
    pub fn unique(&self) -> Series {
        Series {
            values: self
                .unique_indices()
                .into_iter()
                .map(|i| self.values[i].clone())
                .collect(),
        }
    }

    /// Returns a new series without repeated values; the first occurrence of each value is kept.
    pub fn drop_duplicates(&self) -> Series {
        self.unique()
    }
    /// Remove repeated values, keeping the first occurrence of each.
    pub fn drop_duplicates_in_place(&mut self) -> &mut Series {
        let mut set = HashSet::new();
        self.values.retain(|value| set.insert(value.clone()));
        self
    }

    /// Number of occurrences of each distinct value. With `options.sort`, entries are ordered by
    /// count (descending unless `options.ascending`), ties in first-occurrence order; otherwise
    /// entries are in first-occurrence order.
    pub fn counts(&self, options: CountOptions) -> IndexMap<Value, usize> {
        let mut counts = IndexMap::new();
        for value in &self.values {
            *counts.entry(value.clone()).or_insert(0) += 1;
        }
        if options.sort {
            if options.ascending {
                counts.sort_by(|_, lcount, _, rcount| lcount.cmp(rcount));
            } else {
                counts.sort_by(|_, lcount, _, rcount| rcount.cmp(lcount));
            }
        }
        counts
    }

    /// Share of the series held by each distinct value (`count / len`), ordered as in
    /// [counts](#method.counts).
    pub fn frequencies(&self, options: CountOptions) -> IndexMap<Value, f64> {
        let len = self.len() as f64;
        self.counts(options)
            .into_iter()
            .map(|(value, count)| (value, count as f64 / len))
            .collect()
    }
}

impl Table {
    /// Returns a `Vec` of indices of the first row holding each distinct combination of values in
    /// `columns`.
    ///
    /// Fails if any column does not exist.
    pub fn unique_indices(&self, columns: &[&str]) -> Result<Vec<usize>> {
        for name in columns {
            self.require_column("drop_duplicates", name)?;
        }
        let mut set = HashSet::new();
        let mut indices = vec![];
        for (i, row) in self.rows.iter().enumerate() {
            let projection = columns.iter().map(|name| &row[*name]).collect::<Vec<_>>();
            if set.insert(projection) {
                indices.push(i);
            }
        }
        Ok(indices)
    }

    fn unique_mask(&self, columns: Option<&[&str]>) -> Result<BitVec> {
        let all = self.columns.iter().map(String::as_str).collect::<Vec<_>>();
        let indices = self.unique_indices(columns.unwrap_or(&all))?;
        let mut mask = BitVec::from_elem(self.len(), false);
        for i in indices {
            mask.set(i, true);
        }
        Ok(mask)
    }

    /// Returns a new table without duplicate rows, comparing the projection onto `columns` (all
    /// columns when `None`). The first occurrence is kept and row order is preserved.
    ///
    /// Fails if any column does not exist.
    pub fn drop_duplicates(&self, columns: Option<&[&str]>) -> Result<Table> {
        let mask = self.unique_mask(columns)?;
        let mut out = self.clone();
        out.retain_rows(&mask);
        Ok(out)
    }
    /// Remove duplicate rows, comparing the projection onto `columns` (all columns when `None`).
    ///
    /// Fails (leaving the table untouched) if any column does not exist.
    pub fn drop_duplicates_in_place(&mut self, columns: Option<&[&str]>) -> Result<&mut Table> {
        let mask = self.unique_mask(columns)?;
        self.retain_rows(&mask);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::*;

    #[test]
    fn series_unique() {
        let s = Series::from_values(vec![
            Value::from(3),
            Value::from("3"),
            Value::from(3.0),
            Value::from(1),
            Value::from("3"),
        ]);
        // text and numbers are distinct values
        assert_eq!(
            s.unique(),
            Series::from_values(vec![Value::from(3), Value::from("3"), Value::from(1)])
        );
        let mut s2 = s.clone();
        s2.drop_duplicates_in_place();
        assert_eq!(s2, s.unique());
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn counts_and_frequencies() {
        let s = Series::from_values(vec!["a", "b", "b", "c", "b", "c"]);
        let counts = s.counts(CountOptions::default());
        assert_eq!(
            counts.into_iter().collect::<Vec<_>>(),
            vec![
                (Value::from("b"), 3),
                (Value::from("c"), 2),
                (Value::from("a"), 1)
            ]
        );

        let unsorted = s.counts(CountOptions {
            sort: false,
            ..CountOptions::default()
        });
        assert_eq!(
            unsorted.keys().cloned().collect::<Vec<_>>(),
            vec![Value::from("a"), Value::from("b"), Value::from("c")]
        );

        let ascending = s.frequencies(CountOptions {
            sort: true,
            ascending: true,
        });
        assert_eq!(ascending.get_index(0), Some((&Value::from("a"), &(1.0 / 6.0))));
        assert_eq!(ascending[&Value::from("b")], 0.5);
    }

    #[test]
    fn table_drop_duplicates() {
        let emp = sample_emp_table();
        let firsts = emp.drop_duplicates(Some(&["DeptId"])).unwrap();
        assert_column_eq(&firsts, "EmpName", vec!["Sally", "Jamie", "Louis", "Louise"]);

        let mut doubled = emp.clone();
        doubled.concat_in_place(&emp, false);
        assert_eq!(doubled.len(), 14);
        let deduped = doubled.drop_duplicates(None).unwrap();
        assert_eq!(deduped, emp);
        assert_eq!(deduped.drop_duplicates(None).unwrap(), deduped);

        assert!(emp.drop_duplicates(Some(&["Nope"])).is_err());
    }
}
