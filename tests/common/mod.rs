#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

use tabula::{CsvOptions, Table, Value};

pub fn data_path(filename: &str) -> PathBuf {
    Path::new(file!()) // start as this file
        .parent()
        .unwrap() // navigate up to common directory
        .parent()
        .unwrap() // navigate up to tests directory
        .join("data") // navigate into data directory
        .join(filename) // navigate to target file
}

pub fn load_csv_file(filename: &str, options: &CsvOptions) -> Table {
    let file = File::open(data_path(filename)).unwrap();
    Table::from_csv_reader(file, options).unwrap()
}

pub fn emp_table() -> Table {
    Table::from_records(vec![
        record!["EmpId" => 0, "DeptId" => 1, "EmpName" => "Sally"],
        record!["EmpId" => 2, "DeptId" => 2, "EmpName" => "Jamie"],
        record!["EmpId" => 5, "DeptId" => 1, "EmpName" => "Bob"],
        record!["EmpId" => 6, "DeptId" => 1, "EmpName" => "Cara"],
        record!["EmpId" => 8, "DeptId" => 3, "EmpName" => "Louis"],
        record!["EmpId" => 9, "DeptId" => 4, "EmpName" => "Louise"],
        record!["EmpId" => 10, "DeptId" => 4, "EmpName" => "Ann"],
    ])
}

pub fn dept_table() -> Table {
    Table::from_records(vec![
        record!["DeptId" => 1, "DeptName" => "Marketing"],
        record!["DeptId" => 2, "DeptName" => "Sales"],
        record!["DeptId" => 3, "DeptName" => "Manufacturing"],
        record!["DeptId" => 4, "DeptName" => "R&D"],
    ])
}

pub fn column<V: Into<Value>>(values: Vec<V>) -> Vec<Value> {
    values.into_iter().map(Into::into).collect()
}
