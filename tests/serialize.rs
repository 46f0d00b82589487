#![cfg(feature = "serialize")]

#[macro_use]
extern crate tabula;
#[macro_use]
extern crate serde_json;

mod common;

use tabula::{Series, Table, Value};

#[test]
fn table_serializes_as_records() {
    let table = Table::from_records(vec![
        record!["name" => "Marvin", "age" => 42, "height" => 1.8],
        record!["name" => "Arthur", "age" => Value::Na, "height" => 1.75],
    ]);
    let json: serde_json::Value = serde_json::to_value(&table).unwrap();
    assert_eq!(
        json,
        json!([
            {"name": "Marvin", "age": 42, "height": 1.8},
            {"name": "Arthur", "age": null, "height": 1.75}
        ])
    );
}

#[test]
fn table_round_trips() {
    let table = common::emp_table();
    let text = serde_json::to_string(&table).unwrap();
    let back: Table = serde_json::from_str(&text).unwrap();
    assert_eq!(back, table);
    assert_eq!(back.columns(), table.columns());
}

#[test]
fn deserialize_ingests_numeric_text() {
    let table: Table = serde_json::from_str(r#"[{"a": "1", "b": true}, {"c": "x"}]"#).unwrap();
    assert_eq!(table.columns(), &["a", "b", "c"]);
    assert_eq!(table[0]["a"], Value::from(1));
    assert_eq!(table[1]["a"], Value::Na);
    assert_eq!(table[1]["c"], Value::from("x"));
}

#[test]
fn series_serializes_as_array() {
    let series = Series::from_values(vec![Value::from(1), Value::from("two"), Value::Na]);
    assert_eq!(
        serde_json::to_value(&series).unwrap(),
        json!([1, "two", null])
    );
}
