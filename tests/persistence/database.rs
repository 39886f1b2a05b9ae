use std::collections::HashSet;

use tabula_engine::persistence::{ColumnType, Database, PersistenceError, Schema, Value};

fn _prepare_database() -> Database {
    Database::new()
}

fn _schema(columns: Vec<(&str, ColumnType)>) -> Schema {
    Schema::new(
        columns
            .into_iter()
            .map(|(name, column_type)| (name.to_string(), column_type))
            .collect(),
    )
    .expect("invalid column definitions")
}

fn _create_table(
    database: &mut Database,
    name: &str,
    columns: Vec<(&str, ColumnType)>,
    data: Vec<Vec<Value>>,
) -> Result<(), PersistenceError> {
    let table = database.create_table(name, _schema(columns))?;
    for row in data {
        table.add_row(row)?;
    }
    Ok(())
}

fn _ids(ids: &[i64]) -> Vec<Vec<Value>> {
    ids.iter().map(|id| vec![Value::Integer(*id)]).collect()
}

#[test]
fn database_create_table() {
    let mut database = _prepare_database();

    let created = _create_table(
        &mut database,
        "test_tb1",
        vec![("id", ColumnType::Integer), ("name", ColumnType::Text)],
        vec![
            vec![Value::Integer(1), Value::from("Jansen")],
            vec![Value::Integer(2), Value::from("Bonega")],
        ],
    );

    assert!(created.is_ok());
    assert!(database.contains_table("test_tb1"));
    assert_eq!(database.get_table("test_tb1").unwrap().row_count(), 2);
}

#[test]
fn database_create_table_starts_empty() {
    let mut database = _prepare_database();

    let table = database
        .create_table("empty", _schema(vec![("id", ColumnType::Integer)]))
        .unwrap();

    assert_eq!(table.row_count(), 0);
}

#[test]
fn database_create_table_rejects_duplicate_name() {
    let mut database = _prepare_database();
    _create_table(&mut database, "t", vec![("id", ColumnType::Integer)], _ids(&[1, 2])).unwrap();

    let result = database.create_table("t", _schema(vec![("other", ColumnType::Text)]));
    assert!(matches!(result, Err(PersistenceError::DuplicateTable(ref name)) if name == "t"));

    // The original table is untouched.
    let table = database.get_table("t").unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.schema().column_names().collect::<Vec<_>>(), vec!["id"]);
}

#[test]
fn database_table_names_are_case_sensitive() {
    let mut database = _prepare_database();
    _create_table(&mut database, "People", vec![("id", ColumnType::Integer)], vec![]).unwrap();
    _create_table(&mut database, "people", vec![("id", ColumnType::Integer)], vec![]).unwrap();

    assert_eq!(database.len(), 2);
    assert!(!database.contains_table("PEOPLE"));
    assert!(matches!(
        database.get_table("PEOPLE"),
        Err(PersistenceError::UnknownTable(_))
    ));
}

#[test]
fn database_drop_table() {
    let mut database = _prepare_database();
    _create_table(&mut database, "t", vec![("id", ColumnType::Integer)], _ids(&[1, 2, 3])).unwrap();

    let dropped = database.drop_table("t").unwrap();

    assert_eq!(dropped.row_count(), 3);
    assert!(!database.contains_table("t"));
    assert!(database.is_empty());
}

#[test]
fn database_drop_unknown_table_fails() {
    let mut database = _prepare_database();
    _create_table(&mut database, "t", vec![("id", ColumnType::Integer)], vec![]).unwrap();

    assert_eq!(
        database.drop_table("missing").unwrap_err(),
        PersistenceError::UnknownTable("missing".to_string())
    );
    assert_eq!(database.len(), 1);
}

#[test]
fn database_recreate_after_drop_is_fresh() {
    let mut database = _prepare_database();
    _create_table(&mut database, "t", vec![("id", ColumnType::Integer)], _ids(&[1])).unwrap();
    database.drop_table("t").unwrap();

    _create_table(&mut database, "t", vec![("name", ColumnType::Text)], vec![]).unwrap();

    let table = database.get_table("t").unwrap();
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.schema().column_type("name"), Some(ColumnType::Text));
}

#[test]
fn database_list_tables_visits_each_table_once() {
    let mut database = _prepare_database();
    for name in ["a", "b", "c"] {
        _create_table(&mut database, name, vec![("id", ColumnType::Integer)], vec![]).unwrap();
    }
    database.drop_table("b").unwrap();

    let names: Vec<&str> = database.list_tables().map(|(name, _)| name).collect();
    let unique: HashSet<&str> = names.iter().copied().collect();

    assert_eq!(names.len(), 2);
    assert_eq!(unique, HashSet::from(["a", "c"]));
    assert_eq!(database.list_tables().len(), 2);
}

#[test]
fn database_table_names_follow_creation_order() {
    let mut database = _prepare_database();
    for name in ["b", "a", "c"] {
        _create_table(&mut database, name, vec![("id", ColumnType::Integer)], vec![]).unwrap();
    }
    database.drop_table("a").unwrap();

    assert_eq!(database.get_table_names(), vec!["b", "c"]);
}

#[test]
fn database_list_tables_is_restartable() {
    let mut database = _prepare_database();
    _create_table(&mut database, "a", vec![("id", ColumnType::Integer)], vec![]).unwrap();
    _create_table(&mut database, "b", vec![("id", ColumnType::Integer)], vec![]).unwrap();

    let first: HashSet<&str> = database.list_tables().map(|(name, _)| name).collect();
    let second: HashSet<&str> = database.list_tables().map(|(name, _)| name).collect();

    assert_eq!(first, second);
}

#[test]
fn database_round_trip_through_list_tables() {
    let mut database = _prepare_database();
    database
        .create_table("people", _schema(vec![("Name", ColumnType::Text)]))
        .unwrap();

    {
        let table = database.get_table_mut("people").unwrap();
        table.add_column("Age", ColumnType::Integer).unwrap();
        table.add_column("IsStudent", ColumnType::Boolean).unwrap();

        table
            .add_row(vec![Value::from("Alice"), Value::Integer(25), Value::from(false)])
            .unwrap();
        table
            .add_row(vec![Value::from("Bob"), Value::Integer(30), Value::from(true)])
            .unwrap();
    }

    let (name, table) = database.list_tables().next().unwrap();
    assert_eq!(name, "people");

    let rows: Vec<Vec<Value>> = table
        .scan()
        .map(|view| view.row().values().to_vec())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec![Value::from("Alice"), Value::Integer(25), Value::from(false)],
            vec![Value::from("Bob"), Value::Integer(30), Value::from(true)],
        ]
    );
}

#[test]
fn database_failed_row_leaves_table_unchanged() {
    let mut database = Database::with_demo_table().unwrap();
    let before = database.get_table("Table1").unwrap().clone();

    let table = database.get_table_mut("Table1").unwrap();
    let result = table.add_row(vec![
        Value::from("Alice"),
        Value::from("25"),
        Value::from("NYC"),
        Value::from(false),
    ]);

    assert!(matches!(result, Err(PersistenceError::TypeMismatch { .. })));
    assert_eq!(database.get_table("Table1").unwrap(), &before);
}

#[test]
fn database_demo_table_has_the_duplicate_row() {
    let mut database = Database::with_demo_table().unwrap();
    let table = database.get_table_mut("Table1").unwrap();

    assert_eq!(table.row_count(), 4);
    assert_eq!(table.remove_duplicates(), 1);
    assert_eq!(table.row_count(), 3);
}

#[test]
fn database_snapshot_mirrors_table() {
    let database = Database::with_demo_table().unwrap();

    let snapshot = database.snapshot("Table1").unwrap();
    assert_eq!(snapshot.table_name, "Table1");
    assert_eq!(snapshot.column_info.len(), 4);
    assert_eq!(snapshot.column_info[3].column_type, ColumnType::Boolean);
    assert_eq!(snapshot.rows[1]["Name"], Value::from("Bob"));

    assert!(database.snapshot("Table2").is_none());
    assert_eq!(database.snapshots().len(), 1);
}

#[test]
fn database_snapshot_serializes_like_the_api() {
    let mut database = _prepare_database();
    _create_table(
        &mut database,
        "t",
        vec![("id", ColumnType::Integer), ("ok", ColumnType::Boolean)],
        vec![vec![Value::Integer(7), Value::from(true)]],
    )
    .unwrap();
    database
        .get_table_mut("t")
        .unwrap()
        .add_column("note", ColumnType::Text)
        .unwrap();

    let json = serde_json::to_value(database.snapshot("t").unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "table_name": "t",
            "column_info": [
                {"column_name": "id", "column_type": "int"},
                {"column_name": "ok", "column_type": "bool"},
                {"column_name": "note", "column_type": "str"}
            ],
            "rows": [{"id": 7, "ok": true, "note": null}]
        })
    );
}

#[test]
fn database_display_lists_every_table() {
    let database = Database::with_demo_table().unwrap();

    let rendered = format!("{}", database);

    assert!(rendered.contains("Table: Table1"));
    assert!(rendered.contains("Name (str) | Age (int) | City (str) | IsStudent (bool)"));
    assert!(rendered.contains("Charlie | 22 | Los Angeles | true"));
}
