use super::*;
use crate::dictionary::DICTIONARY;

const CODES: SpecCodes = SpecCodes {
    company_name: 1,
    car_name: 2,
    car_type: 3,
};

fn record(cells: &[&str]) -> RawRecord {
    RawRecord::from_cells("test.csv", 1, cells.iter().map(|c| c.to_string())).unwrap()
}

fn full_record() -> RawRecord {
    // One value per dictionary column, numerics where the schema wants them
    let cells: Vec<&str> = vec![
        "DBA-NZE161",
        "Corolla",
        "G",
        "5",
        "4400",
        "1695",
        "1460",
        "1130",
        "1.5",
        "23.4",
        "1980000",
    ];
    assert_eq!(cells.len(), DICTIONARY.len());
    record(&cells)
}

fn value_of<'a>(row: &'a [(&'static str, SqlValue)], column: &str) -> &'a SqlValue {
    &row.iter().find(|(name, _)| *name == column).unwrap().1
}

#[test]
fn test_normalize_full_row() {
    let row = normalize_spec_row(&full_record(), &CODES).unwrap();
    assert_eq!(row.len(), schema::SPECS.columns.len());
    assert_eq!(value_of(&row, "grade"), &SqlValue::Text("G".to_string()));
    assert_eq!(value_of(&row, "capacity"), &SqlValue::Integer(5));
    assert_eq!(value_of(&row, "displacement"), &SqlValue::Float(1.5));
    assert_eq!(value_of(&row, "price"), &SqlValue::Integer(1_980_000));
}

#[test]
fn test_normalize_attaches_codes_and_strips_names() {
    let row = normalize_spec_row(&full_record(), &CODES).unwrap();
    assert_eq!(
        value_of(&row, schema::COMPANY_NAME_CODE),
        &SqlValue::Integer(1)
    );
    assert_eq!(value_of(&row, schema::CAR_NAME_CODE), &SqlValue::Integer(2));
    assert_eq!(value_of(&row, schema::CAR_TYPE_CODE), &SqlValue::Integer(3));
    assert!(!row.iter().any(|(name, _)| *name == "car_name"));
    assert!(!row.iter().any(|(name, _)| *name == "car_type"));
}

#[test]
fn test_absent_fields_get_class_defaults() {
    // Only the first four columns present; everything after is absent
    let row = normalize_spec_row(&record(&["DBA-1", "X1", "G1", "4"]), &CODES).unwrap();
    assert_eq!(value_of(&row, "length"), &SqlValue::Integer(-1));
    assert_eq!(value_of(&row, "mileage"), &SqlValue::Float(-1.0));
    assert_eq!(value_of(&row, "price"), &SqlValue::Integer(-1));
}

#[test]
fn test_absent_grade_defaults_to_none() {
    let row = normalize_spec_row(&record(&["DBA-1", "X1"]), &CODES).unwrap();
    assert_eq!(
        value_of(&row, "grade"),
        &SqlValue::Text("none".to_string())
    );
}

#[test]
fn test_absent_capacity_defaults_to_minus_one() {
    let row = normalize_spec_row(&record(&["DBA-1", "X1", "G1"]), &CODES).unwrap();
    assert_eq!(value_of(&row, "capacity"), &SqlValue::Integer(-1));
}

#[test]
fn test_garbage_numeric_value_is_fatal() {
    let err = normalize_spec_row(&record(&["DBA-1", "X1", "G1", "four"]), &CODES).unwrap_err();
    match err {
        CoreError::InvalidNumber { column, value } => {
            assert_eq!(column, "capacity");
            assert_eq!(value, "four");
        }
        other => panic!("Expected InvalidNumber, got {other:?}"),
    }
}

#[test]
fn test_numeric_values_tolerate_surrounding_whitespace() {
    let row = normalize_spec_row(&record(&["DBA-1", "X1", "G1", " 4 "]), &CODES).unwrap();
    assert_eq!(value_of(&row, "capacity"), &SqlValue::Integer(4));
}
