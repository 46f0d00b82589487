/*!
Sorting and shuffling of [Series](../series/struct.Series.html) and
[Table](../table/struct.Table.html) data.

Both are computed as a permutation order (a `Vec<usize>` of source indices) which is then applied
to the underlying values, rows, or columns. Sorts are stable (equal elements keep their original
relative order); shuffles are uniform (Fisher-Yates, via `rand`).
*/
use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use error::*;
use options::Axis;
use series::Series;
use table::Table;

/// Rearrange `items` so that position `i` holds the element previously at `order[i]`. `order`
/// must be a permutation of `0..items.len()`.
pub(crate) fn apply_order<T>(items: Vec<T>, order: &[usize]) -> Vec<T> {
    debug_assert_eq!(items.len(), order.len());
    let mut slots = items.into_iter().map(Some).collect::<Vec<_>>();
    order.iter().filter_map(|&idx| slots[idx].take()).collect()
}

/// A uniformly random permutation order of length `len`.
fn shuffled_order<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order = (0..len).collect::<Vec<_>>();
    order.shuffle(rng);
    order
}

/// Numeric comparison where numbers sort before values which do not coerce to numbers. Two
/// non-numeric values compare equal, so they keep their original relative order.
fn sort_numeric(left: Option<f64>, right: Option<f64>, reverse: bool) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => {
            let ord = l.partial_cmp(&r).unwrap_or(Ordering::Equal);
            if reverse {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Series {
    /// Stable numeric sort order. Values which do not coerce to numbers are placed last, in their
    /// original order.
    pub fn sort_order(&self, reverse: bool) -> Vec<usize> {
        let keys = self.values.iter().map(|v| v.as_number()).collect::<Vec<_>>();
        let non_numeric = keys.iter().filter(|key| key.is_none()).count();
        if non_numeric > 0 {
            warn!(
                "sort: {} of {} values do not coerce to numbers and are placed last",
                non_numeric,
                keys.len()
            );
        }
        let mut order = (0..keys.len()).collect::<Vec<_>>();
        order.sort_by(|&left, &right| sort_numeric(keys[left], keys[right], reverse));
        order
    }

    /// Returns a new series sorted numerically, ascending unless `reverse` is set. This is not a
    /// lexical sort: values which do not coerce to numbers are placed last in their original
    /// order, and a warning is logged.
    pub fn sort(&self, reverse: bool) -> Series {
        let mut out = self.clone();
        out.sort_in_place(reverse);
        out
    }
    /// Sort this series numerically, ascending unless `reverse` is set.
    pub fn sort_in_place(&mut self, reverse: bool) -> &mut Series {
        let order = self.sort_order(reverse);
        let values = ::std::mem::replace(&mut self.values, vec![]);
        self.values = apply_order(values, &order);
        self
    }

    /// Returns a new series with the values in uniformly random order.
    pub fn shuffle(&self) -> Series {
        self.shuffle_with(&mut thread_rng())
    }
    /// Shuffle the values of this series into uniformly random order.
    pub fn shuffle_in_place(&mut self) -> &mut Series {
        let order = shuffled_order(self.len(), &mut thread_rng());
        let values = ::std::mem::replace(&mut self.values, vec![]);
        self.values = apply_order(values, &order);
        self
    }
    /// Returns a new series shuffled using the provided random number generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Series {
        let order = shuffled_order(self.len(), rng);
        Series {
            values: apply_order(self.values.clone(), &order),
        }
    }
}

impl Table {
    /// Stable multi-key sort order over the columns in `by`, first column primary. Cells compare
    /// by the total order of `Value`; `reverse` flips every key.
    ///
    /// Fails if `by` is empty or names an unknown column.
    pub fn sort_order(&self, by: &[&str], reverse: bool) -> Result<Vec<usize>> {
        if by.is_empty() {
            return Err(TabulaError::invalid("sort: no sort columns given"));
        }
        for name in by {
            self.require_column("sort", name)?;
        }
        let mut order = (0..self.len()).collect::<Vec<_>>();
        order.sort_by(|&left, &right| {
            let (left, right) = (&self.rows[left], &self.rows[right]);
            for key in by {
                let ord = left[*key].cmp(&right[*key]);
                if ord != Ordering::Equal {
                    return if reverse { ord.reverse() } else { ord };
                }
            }
            Ordering::Equal
        });
        Ok(order)
    }

    /// Returns a new table with rows stably sorted by the columns in `by` (first column primary),
    /// ascending unless `reverse` is set.
    ///
    /// Fails if `by` is empty or names an unknown column.
    pub fn sort(&self, by: &[&str], reverse: bool) -> Result<Table> {
        let order = self.sort_order(by, reverse)?;
        Ok(Table::from_parts(
            self.columns.clone(),
            apply_order(self.rows.clone(), &order),
        ))
    }
    /// Stably sort the rows of this table by the columns in `by`.
    ///
    /// Fails (leaving the table untouched) if `by` is empty or names an unknown column.
    pub fn sort_in_place(&mut self, by: &[&str], reverse: bool) -> Result<&mut Table> {
        let order = self.sort_order(by, reverse)?;
        self.permute_rows(&order);
        Ok(self)
    }

    fn permute_rows(&mut self, order: &[usize]) {
        let rows = ::std::mem::replace(&mut self.rows, vec![]);
        self.rows = apply_order(rows, order);
        self.invalidate();
    }
    fn permute_columns(&mut self, order: &[usize]) {
        let columns = ::std::mem::replace(&mut self.columns, vec![]);
        self.columns = apply_order(columns, order);
        trace!("shuffled column order to {:?}", self.columns);
        self.reconform();
    }

    /// Returns a new table with rows (`Axis::Rows`) or columns (`Axis::Columns`) in uniformly
    /// random order. Shuffling columns changes only the column order, not row data.
    pub fn shuffle(&self, axis: Axis) -> Table {
        self.shuffle_with(axis, &mut thread_rng())
    }
    /// Shuffle the rows or columns of this table.
    pub fn shuffle_in_place(&mut self, axis: Axis) -> &mut Table {
        let mut rng = thread_rng();
        match axis {
            Axis::Rows => {
                let order = shuffled_order(self.len(), &mut rng);
                self.permute_rows(&order);
            }
            Axis::Columns => {
                let order = shuffled_order(self.ncols(), &mut rng);
                self.permute_columns(&order);
            }
        }
        self
    }
    /// Returns a new table shuffled along `axis` using the provided random number generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&self, axis: Axis, rng: &mut R) -> Table {
        let mut out = self.clone();
        match axis {
            Axis::Rows => {
                let order = shuffled_order(out.len(), rng);
                out.permute_rows(&order);
            }
            Axis::Columns => {
                let order = shuffled_order(out.ncols(), rng);
                out.permute_columns(&order);
            }
        }
        out
    }
}
