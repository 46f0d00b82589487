/*!
Stateless helpers shared by series, tables, and pivot tables: the missing-value policy,
structural equality of records, and slice range resolution.
*/

use record::Record;
use value::Value;

/// Default allow-list of falsy values which are *not* considered missing: `0` and `false`.
pub fn default_keep() -> Vec<Value> {
    vec![Value::Number(0.0), Value::Boolean(false)]
}

/// Returns `true` if `value` is considered missing: it is falsy (NA, `0`, NaN, `false`, or the
/// empty string) and does not appear in the `keep` allow-list.
pub fn is_missing(value: &Value, keep: &[Value]) -> bool {
    value.is_falsy() && !keep.contains(value)
}

/// Structural equality of two records: same keys, in the same order, with equal values. Table
/// equality compares rows with this.
pub fn deep_equal(left: &Record, right: &Record) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right.iter())
            .all(|((lkey, lval), (rkey, rval))| lkey == rkey && lval == rval)
}

/// Resolve a `start..end` slice request against a sequence of length `len`. Negative indices
/// count back from the end; a missing `end` means the end of the sequence. Out-of-range bounds
/// are clamped, and an inverted range is empty.
pub(crate) fn resolve_range(len: usize, start: isize, end: Option<isize>) -> (usize, usize) {
    let clamp = |idx: isize| -> usize {
        if idx < 0 {
            let back = idx.unsigned_abs();
            len.saturating_sub(back)
        } else {
            (idx as usize).min(len)
        }
    };
    let start = clamp(start);
    let end = end.map(clamp).unwrap_or(len);
    if end < start {
        (start, start)
    } else {
        (start, end)
    }
}

/// Upper-case the first character of `s`.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
