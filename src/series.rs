/*!
The [Series](struct.Series.html) struct: an ordered sequence of scalar values.

Every `Series` method either returns a new `Series` or, through its `_in_place` twin, mutates the
receiver -- never both. The exceptions are [append](struct.Series.html#method.append) and
[insert](struct.Series.html#method.insert), which always mutate (mirroring `Vec::extend`) and
return the mutated series.

Numeric aggregates live in the `stats` module, sorting and shuffling in `permute`, and
duplicate handling in `unique`.
*/

use std::iter::FromIterator;
use std::ops::Index;
use std::slice;
use std::vec;

use error::*;
use util::{default_keep, is_missing, resolve_range};
use value::{Value, MAX_FIXED_DIGITS};

/// An ordered sequence of scalar values. Values are always owned copies of their source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    pub(crate) values: Vec<Value>,
}

impl Series {
    /// Create a new, empty `Series`.
    pub fn new() -> Series {
        Series { values: vec![] }
    }
    /// Create a `Series` from anything convertible into values.
    pub fn from_values<I, V>(values: I) -> Series
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Series {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of values in this series.
    pub fn len(&self) -> usize {
        self.values.len()
    }
    /// Whether this series holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// The value at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
    /// Iterator over the values of this series.
    pub fn iter(&self) -> slice::Iter<Value> {
        self.values.iter()
    }
    /// Iterator over `(index, value)` pairs. Restartable by calling again.
    pub fn items(&self) -> ::std::iter::Enumerate<slice::Iter<Value>> {
        self.values.iter().enumerate()
    }
    /// The values of this series as a slice.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    /// Copy the values of this series into a new `Vec`.
    pub fn to_vec(&self) -> Vec<Value> {
        self.values.clone()
    }

    /// Returns the values in `start..end` as a new series. Negative indices count back from the
    /// end of the series; `end` of `None` means the end of the series.
    pub fn slice(&self, start: isize, end: Option<isize>) -> Series {
        let (start, end) = resolve_range(self.len(), start, end);
        Series {
            values: self.values[start..end].to_vec(),
        }
    }
    /// The first `n` values.
    pub fn head(&self, n: usize) -> Series {
        let n = n.min(self.len());
        Series {
            values: self.values[..n].to_vec(),
        }
    }
    /// The last `n` values.
    pub fn tail(&self, n: usize) -> Series {
        let n = n.min(self.len());
        Series {
            values: self.values[self.len() - n..].to_vec(),
        }
    }

    /// Returns a new series with `f` applied to each value.
    pub fn map<F, V>(&self, mut f: F) -> Series
    where
        F: FnMut(&Value) -> V,
        V: Into<Value>,
    {
        Series {
            values: self.values.iter().map(|value| f(value).into()).collect(),
        }
    }
    /// Calls `f` on each value, in order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Value),
    {
        self.values.iter().for_each(f)
    }

    /// Returns a new series holding only the values matching `predicate`.
    pub fn filter<P>(&self, predicate: P) -> Series
    where
        P: FnMut(&Value) -> bool,
    {
        let mut out = self.clone();
        out.filter_in_place(predicate);
        out
    }
    /// Retain only the values matching `predicate`.
    pub fn filter_in_place<P>(&mut self, mut predicate: P) -> &mut Series
    where
        P: FnMut(&Value) -> bool,
    {
        self.values.retain(|value| predicate(value));
        self
    }
    /// Returns a new series without the values matching `predicate`.
    pub fn drop_where<P>(&self, mut predicate: P) -> Series
    where
        P: FnMut(&Value) -> bool,
    {
        self.filter(|value| !predicate(value))
    }
    /// Remove the values matching `predicate`.
    pub fn drop_where_in_place<P>(&mut self, mut predicate: P) -> &mut Series
    where
        P: FnMut(&Value) -> bool,
    {
        self.filter_in_place(|value| !predicate(value))
    }

    /// Append `values` to the end of this series. Always mutates.
    pub fn append<I, V>(&mut self, values: I) -> &mut Series
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }
    /// Insert `values` before position `at`. Always mutates.
    ///
    /// Fails if `at` is greater than the length of the series.
    pub fn insert<I, V>(&mut self, values: I, at: usize) -> Result<&mut Series>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        if at > self.len() {
            return Err(TabulaError::invalid(format!(
                "insert: index {} out of range for series of length {}",
                at,
                self.len()
            )));
        }
        let incoming = values.into_iter().map(Into::into).collect::<Vec<Value>>();
        let tail = self.values.split_off(at);
        self.values.extend(incoming);
        self.values.extend(tail);
        Ok(self)
    }

    /// Returns a new series without missing values. Falsy values listed in `keep` are retained
    /// (see [default_keep](../util/fn.default_keep.html)).
    pub fn drop_missing(&self, keep: &[Value]) -> Series {
        self.drop_where(|value| is_missing(value, keep))
    }
    /// Remove missing values, retaining falsy values listed in `keep`.
    pub fn drop_missing_in_place(&mut self, keep: &[Value]) -> &mut Series {
        self.drop_where_in_place(|value| is_missing(value, keep))
    }

    /// Whether any value matches `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Value) -> bool,
    {
        self.values.iter().any(predicate)
    }
    /// Whether every value matches `predicate`. `true` for an empty series.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Value) -> bool,
    {
        self.values.iter().all(predicate)
    }
    /// Whether any value is present (not missing under the default allow-list).
    pub fn any_present(&self) -> bool {
        let keep = default_keep();
        self.any(|value| !is_missing(value, &keep))
    }
    /// Whether every value is present (not missing under the default allow-list).
    pub fn all_present(&self) -> bool {
        let keep = default_keep();
        self.all(|value| !is_missing(value, &keep))
    }

    /// Left fold over the values of this series. Without an `initial` accumulator, the first
    /// value seeds the accumulator and folding starts at the second value.
    ///
    /// Fails if the series is empty and no `initial` value is given.
    pub fn reduce<F>(&self, mut f: F, initial: Option<Value>) -> Result<Value>
    where
        F: FnMut(Value, &Value) -> Value,
    {
        let mut values = self.values.iter();
        let seed = match initial {
            Some(init) => init,
            None => match values.next() {
                Some(first) => first.clone(),
                None => {
                    return Err(TabulaError::invalid(
                        "reduce: empty series with no initial value",
                    ));
                }
            },
        };
        Ok(values.fold(seed, |acc, value| f(acc, value)))
    }

    /// Returns a new series with every value formatted as text with `digits` digits after the
    /// decimal point.
    ///
    /// Fails if `digits` exceeds 100 or any value cannot be coerced to a number.
    pub fn round(&self, digits: usize) -> Result<Series> {
        if digits > MAX_FIXED_DIGITS {
            return Err(TabulaError::invalid(format!(
                "round: digits {} out of range (0..={})",
                digits, MAX_FIXED_DIGITS
            )));
        }
        let values = self
            .values
            .iter()
            .map(|value| value.to_fixed(digits))
            .collect::<Result<Vec<_>>>()?;
        Ok(Series { values })
    }
    /// Format every value as fixed-point text with `digits` digits after the decimal point.
    ///
    /// Fails (leaving the series untouched) if any value cannot be coerced to a number.
    pub fn round_in_place(&mut self, digits: usize) -> Result<&mut Series> {
        let rounded = self.round(digits)?;
        self.values = rounded.values;
        Ok(self)
    }
}

impl Index<usize> for Series {
    type Output = Value;
    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl<V: Into<Value>> FromIterator<V> for Series {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Series {
        Series::from_values(iter)
    }
}
impl<V: Into<Value>> From<Vec<V>> for Series {
    fn from(orig: Vec<V>) -> Series {
        Series::from_values(orig)
    }
}

impl IntoIterator for Series {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
impl<'a> IntoIterator for &'a Series {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(feature = "serialize")]
impl ::serde::Serialize for Series {
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: ::serde::Serializer,
    {
        ::serde::Serialize::serialize(&self.values, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Series {
        Series::from_values(vec![3, 1, 4, 1, 5])
    }

    #[test]
    fn deep_copies_source() {
        let mut source = vec![Value::from("a"), Value::from("b")];
        let series = Series::from_values(source.clone());
        source[0] = Value::from("z");
        assert_eq!(series[0], Value::from("a"));
    }

    #[test]
    fn slicing() {
        let s = sample();
        assert_eq!(s.slice(1, Some(3)), Series::from_values(vec![1, 4]));
        assert_eq!(s.slice(-2, None), Series::from_values(vec![1, 5]));
        assert_eq!(s.head(2), Series::from_values(vec![3, 1]));
        assert_eq!(s.tail(2), Series::from_values(vec![1, 5]));
        assert_eq!(s.tail(10).len(), 5);
        assert!(s.tail(0).is_empty());
    }

    #[test]
    fn filter_copy_and_in_place() {
        let s = sample();
        let big = s.filter(|v| v.as_number().unwrap() > 2.0);
        assert_eq!(big, Series::from_values(vec![3, 4, 5]));
        // the original is unchanged
        assert_eq!(s.len(), 5);

        let mut s2 = sample();
        s2.drop_where_in_place(|v| *v == Value::from(1));
        assert_eq!(s2, Series::from_values(vec![3, 4, 5]));
    }

    #[test]
    fn append_and_insert_always_mutate() {
        let mut s = Series::from_values(vec![1, 2]);
        s.append(vec![3]).append(vec![4, 5]);
        assert_eq!(s, Series::from_values(vec![1, 2, 3, 4, 5]));

        s.insert(vec![10, 11], 1).unwrap();
        assert_eq!(s, Series::from_values(vec![1, 10, 11, 2, 3, 4, 5]));

        match s.insert(vec![0], 100) {
            Err(TabulaError::InvalidArgument(_)) => {}
            other => panic!("expected invalid argument, got {:?}", other),
        }
    }

    #[test]
    fn drop_missing_keeps_allow_list() {
        let s = Series::from_values(vec![
            Value::from(0),
            Value::Na,
            Value::from(""),
            Value::from(false),
            Value::from("x"),
        ]);
        assert_eq!(
            s.drop_missing(&default_keep()),
            Series::from_values(vec![Value::from(0), Value::from(false), Value::from("x")])
        );
        assert_eq!(s.drop_missing(&[]), Series::from_values(vec!["x"]));
    }

    #[test]
    fn any_all() {
        let s = Series::from_values(vec![Value::from(1), Value::Na]);
        assert!(s.any_present());
        assert!(!s.all_present());
        assert!(s.all(|v| v.is_na() || v.as_number().is_some()));
        assert!(Series::new().all_present());
    }

    #[test]
    fn reduce_folds_left() {
        let s = Series::from_values(vec![1, 2, 3]);
        let sum = s
            .reduce(
                |acc, v| Value::from(acc.as_number().unwrap() + v.as_number().unwrap()),
                None,
            )
            .unwrap();
        assert_eq!(sum, Value::from(6));

        let joined = s
            .reduce(
                |acc, v| Value::from(format!("{}{}", acc, v)),
                Some(Value::from(">")),
            )
            .unwrap();
        assert_eq!(joined, Value::from(">123"));

        assert!(Series::new().reduce(|acc, _| acc, None).is_err());
        assert_eq!(
            Series::new().reduce(|acc, _| acc, Some(Value::from(7))).unwrap(),
            Value::from(7)
        );
    }

    #[test]
    fn round_formats_fixed_point() {
        let s = Series::from_values(vec![1.005, 2.0, 3.14159]);
        let rounded = s.round(2).unwrap();
        assert_eq!(rounded[1], Value::from("2.00"));
        assert_eq!(rounded[2], Value::from("3.14"));

        let mut bad = Series::from_values(vec![Value::from(1), Value::from("x")]);
        assert!(bad.round_in_place(1).is_err());
        // failed validation leaves the series untouched
        assert_eq!(bad[0], Value::from(1));
    }

    #[test]
    fn round_rejects_huge_digit_counts() {
        let mut s = Series::from_values(vec![1.5]);
        match s.round(70_000) {
            Err(TabulaError::InvalidArgument(msg)) => assert!(msg.contains("70000")),
            other => panic!("expected invalid argument, got {:?}", other),
        }
        assert!(s.round_in_place(101).is_err());
        assert_eq!(s[0], Value::from(1.5));
        assert_eq!(s.round(100).unwrap()[0].to_string().len(), 102);
    }

    #[test]
    fn map_values() {
        let doubled = sample().map(|v| v.as_number().unwrap() * 2.0);
        assert_eq!(doubled, Series::from_values(vec![6, 2, 8, 2, 10]));
    }
}
