use record::Record;
use table::Table;
use value::Value;

pub(crate) fn sample_emp_table() -> Table {
    emp_table(
        vec![0, 2, 5, 6, 8, 9, 10],
        vec![1, 2, 1, 1, 3, 4, 4],
        vec!["Sally", "Jamie", "Bob", "Cara", "Louis", "Louise", "Ann"],
    )
}
pub(crate) fn emp_table(empids: Vec<i64>, deptids: Vec<i64>, names: Vec<&str>) -> Table {
    Table::from_records(
        empids
            .into_iter()
            .zip(deptids)
            .zip(names)
            .map(|((empid, deptid), name)| {
                record!["EmpId" => empid, "DeptId" => deptid, "EmpName" => name]
            })
            .collect::<Vec<Record>>(),
    )
}
pub(crate) fn sample_emp_table_extra() -> Table {
    let offsets = vec![-5, 4, 12, -33, 10, 0, -1];
    let training = vec![false, false, true, true, true, false, true];
    let vacation = vec![47.3, 54.1, 98.3, 12.2, -1.2, 5.4, 22.5];
    let mut table = sample_emp_table();
    for (i, ((offset, trained), hours)) in offsets
        .into_iter()
        .zip(training)
        .zip(vacation)
        .enumerate()
    {
        table.rows[i].insert("SalaryOffset".into(), Value::from(offset));
        table.rows[i].insert("DidTraining".into(), Value::from(trained));
        table.rows[i].insert("VacationHrs".into(), Value::from(hours));
    }
    table
        .columns
        .extend(vec!["SalaryOffset".into(), "DidTraining".into(), "VacationHrs".into()]);
    table
}

pub(crate) fn sample_dept_table() -> Table {
    dept_table(vec![1, 2, 3, 4], vec!["Marketing", "Sales", "Manufacturing", "R&D"])
}
pub(crate) fn dept_table(deptids: Vec<i64>, names: Vec<&str>) -> Table {
    Table::from_records(
        deptids
            .into_iter()
            .zip(names)
            .map(|(deptid, name)| record!["DeptId" => deptid, "DeptName" => name])
            .collect::<Vec<Record>>(),
    )
}

/// Assert that `column` of `table` holds exactly `expected`, in order.
pub(crate) fn assert_column_eq<V: Into<Value>>(table: &Table, column: &str, expected: Vec<V>) {
    let actual = table.column(column).unwrap().to_vec();
    let expected = expected.into_iter().map(Into::into).collect::<Vec<Value>>();
    assert_eq!(actual, expected, "column '{}'", column);
}
