/*!
Option types shared by table, series, and source operations.
*/

use util::{capitalize, default_keep};
use value::Value;

/// Axis along which an operation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Operate on rows (records).
    Rows,
    /// Operate on columns.
    Columns,
}
impl Default for Axis {
    fn default() -> Axis {
        Axis::Rows
    }
}

/// The kind of join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    /// Inner join: only left rows with a matching right row survive.
    Inner,
    /// Left join: all left rows survive, merged with their first right match (if any).
    Left,
    /// Right join: all right rows survive, merged with their first left match (if any).
    Right,
    /// Full outer join: rows from both sides, matched rows merged once.
    Outer,
}
impl Default for JoinKind {
    fn default() -> JoinKind {
        JoinKind::Inner
    }
}

/// Column name rewriting policy applied to CSV headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prettify {
    /// Leave names as-is.
    None,
    /// Join space-separated words in camelCase (`"Country Name"` → `"countryName"`).
    CamelCase,
    /// Lower-case, with runs of whitespace replaced by underscores (`"Country Name"` →
    /// `"country_name"`).
    SnakeCase,
}
impl Default for Prettify {
    fn default() -> Prettify {
        Prettify::None
    }
}
impl Prettify {
    /// Rewrite a column name according to this policy.
    pub fn apply(self, name: &str) -> String {
        match self {
            Prettify::None => name.to_string(),
            Prettify::CamelCase => {
                let mut out = String::with_capacity(name.len());
                for (i, word) in name.split_whitespace().enumerate() {
                    let lower = word.to_lowercase();
                    if i == 0 {
                        out.push_str(&lower);
                    } else {
                        out.push_str(&capitalize(&lower));
                    }
                }
                out
            }
            Prettify::SnakeCase => name
                .split_whitespace()
                .map(|word| word.to_lowercase())
                .collect::<Vec<_>>()
                .join("_"),
        }
    }
}

/// Options for dropping missing values from a table.
#[derive(Debug, Clone, PartialEq)]
pub struct DropNa {
    /// `Axis::Rows` drops rows holding any missing value; `Axis::Columns` drops columns holding
    /// any missing value.
    pub axis: Axis,
    /// Falsy values which are retained rather than treated as missing. Defaults to `[0, false]`.
    pub keep: Vec<Value>,
}
impl Default for DropNa {
    fn default() -> DropNa {
        DropNa {
            axis: Axis::Rows,
            keep: default_keep(),
        }
    }
}
impl DropNa {
    /// Drop rows, with the default allow-list.
    pub fn rows() -> DropNa {
        DropNa::default()
    }
    /// Drop columns, with the default allow-list.
    pub fn columns() -> DropNa {
        DropNa {
            axis: Axis::Columns,
            ..DropNa::default()
        }
    }
    /// Replace the allow-list of retained falsy values.
    pub fn keep<I, V>(mut self, keep: I) -> DropNa
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.keep = keep.into_iter().map(Into::into).collect();
        self
    }
}

/// Options for `Series::counts` and `Series::frequencies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOptions {
    /// Order entries by count (`true`, the default) or keep first-occurrence order.
    pub sort: bool,
    /// When sorting, order by ascending count instead of the default descending count.
    pub ascending: bool,
}
impl Default for CountOptions {
    fn default() -> CountOptions {
        CountOptions {
            sort: true,
            ascending: false,
        }
    }
}
