/*!
Records: ordered mappings from column name to [Value](../value/enum.Value.html).
*/

use indexmap::IndexMap;

use value::Value;

/// A single table row: an ordered mapping from column name to value. Within a `Table`, every
/// record holds exactly the table's columns, in column order.
pub type Record = IndexMap<String, Value>;

/// Construct a [Record](record/type.Record.html) from `key => value` pairs. Values are converted
/// with `Value::from`.
///
/// ```
/// # #[macro_use] extern crate tabula;
/// # fn main() {
/// let rec = record!["name" => "Marvin", "age" => 42];
/// assert_eq!(rec["age"], tabula::Value::from(42));
/// # }
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)*) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        record
    }};
}

/// Rebuild `record` so that it holds exactly `columns`, in order. Absent fields are filled with
/// `Value::Na`; fields for unknown columns are discarded.
pub(crate) fn conform(mut record: Record, columns: &[String]) -> Record {
    let mut out = Record::with_capacity(columns.len());
    for column in columns {
        let value = record.swap_remove(column.as_str()).unwrap_or(Value::Na);
        out.insert(column.clone(), value);
    }
    out
}

/// Merge `incoming` into `base`: fields of `incoming` overwrite or extend those of `base`.
pub(crate) fn merged(base: &Record, incoming: &Record) -> Record {
    let mut out = base.clone();
    for (key, value) in incoming {
        out.insert(key.clone(), value.clone());
    }
    out
}
