//! CSV reading into tables, and CSV export of tables.

use std::io::{self, Read};

use csv;

use error::*;
use options::Prettify;
use record::Record;
use table::Table;
use value::Value;

/// Options for reading CSV text.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvOptions {
    /// CSV delimiter (default `b','`)
    pub delimiter: u8,
    /// Rewriting policy applied to the header row's column names (default `Prettify::None`)
    pub prettify: Prettify,
}
impl Default for CsvOptions {
    fn default() -> CsvOptions {
        CsvOptionsBuilder::new().build()
    }
}

/// Builder for a `CsvOptions` object.
#[derive(Debug, Clone, Default)]
pub struct CsvOptionsBuilder {
    delimiter: Option<u8>,
    prettify: Option<Prettify>,
}
impl CsvOptionsBuilder {
    /// Start building a `CsvOptions` object.
    pub fn new() -> CsvOptionsBuilder {
        CsvOptionsBuilder::default()
    }
    /// Update this builder with the delimiter used in the CSV text. If not specified, will default
    /// the value to `b','` (a comma).
    pub fn delimiter<T: Into<u8>>(&mut self, delimiter: T) -> &mut CsvOptionsBuilder {
        self.delimiter = Some(delimiter.into());
        self
    }
    /// Update this builder with the column-name rewriting policy. If not specified, will default
    /// to `Prettify::None`.
    pub fn prettify(&mut self, prettify: Prettify) -> &mut CsvOptionsBuilder {
        self.prettify = Some(prettify);
        self
    }
    /// Finalize building, producing a `CsvOptions`.
    pub fn build(&self) -> CsvOptions {
        CsvOptions {
            delimiter: self.delimiter.unwrap_or(b','),
            prettify: self.prettify.unwrap_or_default(),
        }
    }
}

/// Reader object responsible for converting CSV text into a `Table`. The first row holds the
/// column names.
#[derive(Debug)]
pub struct CsvReader<R> {
    reader: csv::Reader<R>,
    columns: Vec<String>,
}

fn decode(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|err| TabulaError::Decode(format!("invalid UTF-8 in CSV input: {}", err)))
}

impl<R: Read> CsvReader<R> {
    /// Create a new CSV reader over `source`, processing the header row.
    pub fn new(source: R, options: &CsvOptions) -> Result<CsvReader<R>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(options.delimiter)
            .from_reader(source);
        let columns = reader
            .byte_headers()?
            .iter()
            .map(|header| decode(header).map(|name| options.prettify.apply(name.trim())))
            .collect::<Result<Vec<_>>>()?;
        debug!("reading CSV with columns {:?}", columns);
        Ok(CsvReader { reader, columns })
    }

    /// The (prettified) column names from the header row.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Read the remaining rows into a `Table`. Numeric-looking cells become numbers.
    ///
    /// Fails with a `StructuralViolation` if two header names coincide (after prettifying).
    pub fn read(&mut self) -> Result<Table> {
        let mut records = vec![];
        for row in self.reader.byte_records() {
            let row = row?;
            let mut record = Record::with_capacity(self.columns.len());
            for (name, cell) in self.columns.iter().zip(row.iter()) {
                record.insert(name.clone(), Value::from(decode(cell)?));
            }
            records.push(record);
        }
        trace!("read {} CSV rows", records.len());
        Table::with_columns(records, self.columns.clone())
    }
}

fn cell_text(value: &Value) -> String {
    match *value {
        Value::Na => String::new(),
        ref other => other.to_string(),
    }
}

impl Table {
    /// Read a `Table` from CSV data. The first row holds the column names.
    pub fn from_csv_reader<R: Read>(source: R, options: &CsvOptions) -> Result<Table> {
        CsvReader::new(source, options)?.read()
    }
    /// Read a `Table` from CSV text.
    pub fn from_csv_str(text: &str, options: &CsvOptions) -> Result<Table> {
        Table::from_csv_reader(text.as_bytes(), options)
    }

    /// Render this table as CSV text: a header row, then one line per row. Cells holding the
    /// delimiter, quotes, or line breaks are quoted; `Value::Na` is written as an empty cell.
    pub fn to_csv(&self, delimiter: u8) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(vec![]);
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.values().map(cell_text))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| TabulaError::Io(io::Error::new(io::ErrorKind::Other, err.to_string())))?;
        decode(&bytes)
    }
}
