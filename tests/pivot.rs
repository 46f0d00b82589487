#[macro_use]
extern crate tabula;

mod common;

use tabula::{JoinKind, Table, TabulaError, Value};

#[test]
fn rollup_sum() {
    let table = Table::from_records(vec![
        record!["s" => "A", "v" => 1],
        record!["s" => "A", "v" => 3],
        record!["s" => "B", "v" => 5],
    ]);
    let sums = table.pivot(&["s"]).unwrap().sum("v").unwrap();
    let expected = Table::from_records(vec![
        record!["s" => "A", "sumV" => 4],
        record!["s" => "B", "sumV" => 5],
    ]);
    assert_eq!(sums, expected);
}

#[test]
fn pivot_joined_tables() {
    let joined = common::emp_table()
        .join(&common::dept_table(), "DeptId", JoinKind::Inner)
        .unwrap();
    let pivot = joined.pivot(&["DeptName"]).unwrap();
    let counts = pivot.count().unwrap();
    assert_eq!(counts.columns(), &["DeptName", "count"]);
    assert_eq!(
        counts.column("DeptName").unwrap().to_vec(),
        common::column(vec!["Manufacturing", "Marketing", "R&D", "Sales"])
    );
    assert_eq!(
        counts.column("count").unwrap().to_vec(),
        common::column(vec![1, 3, 2, 1])
    );

    let max_ids = pivot.max("EmpId").unwrap();
    assert_eq!(
        max_ids.column("maxEmpId").unwrap().to_vec(),
        common::column(vec![8, 6, 10, 2])
    );
}

#[test]
fn leaves_drop_pivot_columns() {
    let pivot = common::emp_table().pivot(&["DeptId", "EmpId"]).unwrap();
    assert_eq!(pivot.nleaves(), 7);
    for (path, leaf) in pivot.leaves() {
        assert_eq!(path.len(), 2);
        assert_eq!(leaf.columns(), &["EmpName"]);
        assert_eq!(leaf.len(), 1);
    }
}

#[test]
fn aggregate_on_pivot_column_fails() {
    let pivot = common::emp_table().pivot(&["DeptId"]).unwrap();
    match pivot.mean("DeptId") {
        Err(TabulaError::InvalidArgument(msg)) => assert!(msg.contains("DeptId")),
        other => panic!("expected invalid argument, got {:?}", other),
    }
    match pivot.sum("EmpName") {
        Err(TabulaError::NumericCoercion { value, .. }) => {
            assert_eq!(value, Value::from("Sally"))
        }
        other => panic!("expected coercion failure, got {:?}", other),
    }
}
