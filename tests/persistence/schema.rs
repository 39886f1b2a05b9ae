use tabula_engine::persistence::{ColumnType, PersistenceError, Schema, Value};

fn _schema() -> Schema {
    Schema::new(vec![
        ("Name".to_string(), ColumnType::Text),
        ("Age".to_string(), ColumnType::Integer),
        ("IsStudent".to_string(), ColumnType::Boolean),
    ])
    .unwrap()
}

#[test]
fn schema_keeps_declared_order() {
    let schema = _schema();

    assert_eq!(
        schema.column_names().collect::<Vec<_>>(),
        vec!["Name", "Age", "IsStudent"]
    );
    assert_eq!(schema.position("Age"), Some(1));
    assert_eq!(schema.get(2), Some(&("IsStudent".to_string(), ColumnType::Boolean)));
    assert!(schema.get(3).is_none());
}

#[test]
fn schema_rejects_duplicate_names() {
    let result = Schema::new(vec![
        ("Name".to_string(), ColumnType::Text),
        ("Name".to_string(), ColumnType::Integer),
    ]);

    assert_eq!(result, Err(PersistenceError::DuplicateColumn("Name".to_string())));
}

#[test]
fn schema_without_columns_is_allowed() {
    let schema = Schema::new(vec![]).unwrap();

    assert!(schema.is_empty());
    assert_eq!(schema, Schema::empty());
    assert!(schema.validate_values(&[]).is_ok());
}

#[test]
fn column_type_validators_match_kinds_exactly() {
    assert!(ColumnType::Text.accepts(&Value::from("25")));
    assert!(!ColumnType::Text.accepts(&Value::Integer(25)));
    assert!(ColumnType::Integer.accepts(&Value::Integer(-3)));
    assert!(!ColumnType::Integer.accepts(&Value::from(true)));
    assert!(ColumnType::Boolean.accepts(&Value::from(false)));
    assert!(!ColumnType::Boolean.accepts(&Value::from("false")));

    for column_type in [ColumnType::Text, ColumnType::Integer, ColumnType::Boolean] {
        assert!(!column_type.accepts(&Value::Null));
    }
}

#[test]
fn schema_validate_values_reports_first_mismatch() {
    let schema = _schema();

    let result = schema.validate_values(&[
        Value::from("Alice"),
        Value::from("25"),
        Value::from("yes"),
    ]);

    assert_eq!(
        result,
        Err(PersistenceError::TypeMismatch {
            column: "Age".to_string(),
            expected: ColumnType::Integer,
            actual: Value::from("25"),
        })
    );
}

#[test]
fn schema_validate_values_checks_arity_first() {
    let schema = _schema();

    assert_eq!(
        schema.validate_values(&[Value::Integer(1)]),
        Err(PersistenceError::ArityMismatch {
            expected: 3,
            actual: 1
        })
    );
}

#[test]
fn schema_display_names_types() {
    assert_eq!(
        format!("{}", _schema()),
        "Name (str) | Age (int) | IsStudent (bool)"
    );
}
