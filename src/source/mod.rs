//! Data sources.

mod csv;
pub use self::csv::{CsvOptions, CsvOptionsBuilder, CsvReader};
