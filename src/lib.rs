/*!
In-memory tabular data library for Rust. Provides a labeled, row-oriented [Table](table/struct.Table.html)
of uniform records, a companion one-dimensional [Series](series/struct.Series.html) of scalar
values, and [PivotTable](pivot/struct.PivotTable.html) grouping with rollup aggregation.

Every transforming operation comes as a pair: `op(&self, ..)` returns a new value and leaves the
receiver untouched, while `op_in_place(&mut self, ..)` mutates the receiver. `append` and `insert`
always mutate.

```
# #[macro_use] extern crate tabula;
# fn main() {
use tabula::{JoinKind, Table};

let emp = Table::from_records(vec![
    record!["name" => "Sally", "dept" => 1, "salary" => "5100"],
    record!["name" => "Jamie", "dept" => 2, "salary" => "4300"],
    record!["name" => "Bob", "dept" => 1, "salary" => "3900"],
]);
let dept = Table::from_records(vec![
    record!["dept" => 1, "deptName" => "Marketing"],
    record!["dept" => 2, "deptName" => "Sales"],
]);

let joined = emp.join(&dept, "dept", JoinKind::Inner).unwrap();
let totals = joined.pivot(&["deptName"]).unwrap().sum("salary").unwrap();
assert_eq!(totals[0]["sumSalary"], tabula::Value::from(9000));
# }
```
*/

#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

extern crate bit_vec;
extern crate csv;
extern crate indexmap;
extern crate num_traits;
extern crate prettytable;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

#[cfg(test)]
extern crate serde_json;

#[macro_use]
pub mod record;
pub use record::Record;
pub mod error;
pub use error::{Result, TabulaError};
pub mod value;
pub use value::Value;
pub mod util;
pub mod options;
pub use options::{Axis, CountOptions, DropNa, JoinKind, Prettify};
pub mod series;
pub use series::Series;
pub mod stats;
pub mod table;
pub use table::{ColumnData, Table};
pub mod permute;
pub mod unique;
pub mod join;
pub mod pivot;
pub use pivot::{PivotNode, PivotTable};
pub mod display;
mod table_stats;
pub use table_stats::{ColumnStats, TableStats};
pub mod source;
pub use source::{CsvOptions, CsvOptionsBuilder, CsvReader};

#[cfg(test)]
pub(crate) mod test_utils;
