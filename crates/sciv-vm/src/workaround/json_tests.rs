use crate::DataError;
use crate::engine::Operation;

use super::*;

#[test]
fn parse_table() {
    let table = WorkaroundTable::from_json(
        r#"{
            "object_reference_test": 2000,
            "entries": [
                { "operation": "comparison", "script": 64990, "object": "Sound", "method": "pause", "value": 0 },
                { "operation": "modulo", "script": 12, "room": 3, "value": -1 }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(table.object_reference_test(), Some(2000));
    assert_eq!(table.len(), 2);

    let entries: Vec<_> = table.entries().collect();
    assert_eq!(entries[0].object.as_deref(), Some("Sound"));
    assert_eq!(entries[0].game, None);
    assert_eq!(entries[1].operation, Operation::Modulo);
    assert_eq!(entries[1].room, Some(3));
    assert_eq!(entries[1].verdict(), Verdict::LESS);
}

#[test]
fn empty_object_is_empty_table() {
    let table = WorkaroundTable::from_json("{}").unwrap();
    assert_eq!(table, WorkaroundTable::new());
}

#[test]
fn unknown_operation_is_rejected() {
    let err = WorkaroundTable::from_json(
        r#"{ "entries": [ { "operation": "exponent", "script": 1, "value": 0 } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, DataError::Json(_)));
}

#[test]
fn missing_value_is_rejected() {
    let err = WorkaroundTable::from_json(
        r#"{ "entries": [ { "operation": "addition", "script": 1 } ] }"#,
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("JSON parse error: missing field `value`"));
}
