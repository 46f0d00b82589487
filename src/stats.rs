//! Numeric aggregates over a `Series`.
//!
//! Every aggregate first coerces each value to a number and fails with a `NumericCoercion` error
//! if any value refuses; there is no silent skipping of non-numeric values.

use std::cmp::Ordering;

use error::*;
use series::Series;

fn cmp_f64(left: &f64, right: &f64) -> Ordering {
    // coerced numbers are never NaN
    left.partial_cmp(right).unwrap_or(Ordering::Equal)
}

impl Series {
    /// Coerce every value to a number, failing on the first value which refuses.
    pub fn numbers(&self, operation: &str) -> Result<Vec<f64>> {
        self.values
            .iter()
            .map(|value| value.coerce_number(operation))
            .collect()
    }

    /// Sum of the values. `0` for an empty series.
    pub fn sum(&self) -> Result<f64> {
        Ok(self.numbers("sum")?.iter().fold(0.0, |sum, n| sum + n))
    }

    /// Smallest value, or `None` for an empty series.
    pub fn min(&self) -> Result<Option<f64>> {
        Ok(self
            .numbers("min")?
            .into_iter()
            .min_by(|l, r| cmp_f64(l, r)))
    }

    /// Largest value, or `None` for an empty series.
    pub fn max(&self) -> Result<Option<f64>> {
        Ok(self
            .numbers("max")?
            .into_iter()
            .max_by(|l, r| cmp_f64(l, r)))
    }

    /// `(min, max)` of the values, or `None` for an empty series.
    pub fn extent(&self) -> Result<Option<(f64, f64)>> {
        let numbers = self.numbers("extent")?;
        Ok(numbers.iter().fold(None, |bounds, &n| match bounds {
            None => Some((n, n)),
            Some((lo, hi)) => Some((lo.min(n), hi.max(n))),
        }))
    }

    /// Arithmetic mean, or `None` for an empty series.
    pub fn mean(&self) -> Result<Option<f64>> {
        let numbers = self.numbers("mean")?;
        Ok(mean_of(&numbers))
    }

    /// Median (mean of the two middle values for an even count), or `None` for an empty series.
    pub fn median(&self) -> Result<Option<f64>> {
        let mut numbers = self.numbers("median")?;
        if numbers.is_empty() {
            return Ok(None);
        }
        numbers.sort_by(cmp_f64);
        let mid = numbers.len() / 2;
        if numbers.len() % 2 == 0 {
            Ok(Some((numbers[mid - 1] + numbers[mid]) / 2.0))
        } else {
            Ok(Some(numbers[mid]))
        }
    }

    /// Sample standard deviation (`n - 1` denominator), or `None` for fewer than two values.
    pub fn std(&self) -> Result<Option<f64>> {
        let numbers = self.numbers("std")?;
        if numbers.len() < 2 {
            return Ok(None);
        }
        let nexists = numbers.len() as f64;
        // mean_of is Some for non-empty input
        let mean = mean_of(&numbers).unwrap_or(0.0);
        let sum_sq_dev = numbers
            .iter()
            .fold(0.0, |sum, n| sum + (n - mean) * (n - mean));
        Ok(Some((sum_sq_dev / (nexists - 1.0)).sqrt()))
    }
}

fn mean_of(numbers: &[f64]) -> Option<f64> {
    match numbers.len() {
        0 => None,
        len => Some(numbers.iter().sum::<f64>() / len as f64),
    }
}
