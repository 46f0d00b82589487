#[macro_use]
extern crate tabula;

mod common;

use tabula::{CsvOptions, CsvOptionsBuilder, Prettify, Table, Value};

#[test]
fn load_sample_file() {
    let table = common::load_csv_file("sample1.csv", &CsvOptions::default());
    assert_eq!(table.columns(), &["state", "val1", "val2"]);
    assert_eq!(table.len(), 8);
    assert_eq!(table[0]["state"], Value::from("OH"));
    assert_eq!(table.column("val1").unwrap().sum().unwrap(), 352.0);
    assert_eq!(table.column("val2").unwrap().max().unwrap(), Some(94.4));
}

#[test]
fn csv_round_trip() {
    let table = common::load_csv_file("sample1.csv", &CsvOptions::default());
    let text = table.to_csv(b';').unwrap();
    let options = CsvOptionsBuilder::new().delimiter(b';').build();
    let back = Table::from_csv_str(&text, &options).unwrap();
    assert_eq!(back, table);
}

#[test]
fn prettified_headers() {
    let text = "Employee Name,Dept Id\nSally,1\n";
    let camel = CsvOptionsBuilder::new().prettify(Prettify::CamelCase).build();
    let table = Table::from_csv_str(text, &camel).unwrap();
    assert_eq!(table.columns(), &["employeeName", "deptId"]);
    assert_eq!(table[0], record!["employeeName" => "Sally", "deptId" => 1]);
}

#[test]
fn export_quotes_delimiters() {
    let table = Table::from_records(vec![record!["city" => "Paris, France", "pop" => 2.1]]);
    assert_eq!(table.to_csv(b',').unwrap(), "city,pop\n\"Paris, France\",2.1\n");
}
