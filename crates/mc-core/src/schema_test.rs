use super::*;

#[test]
fn test_catalog_covers_all_six_tables() {
    let names: Vec<&str> = CATALOG.iter().map(|t| t.name).collect();
    assert_eq!(
        names,
        vec![
            "company_names",
            "car_names",
            "car_types",
            "specs",
            "stocks",
            "terms"
        ]
    );
}

#[test]
fn test_lookup_tables_have_surrogate_keys() {
    assert!(COMPANY_NAMES.is_lookup());
    assert!(CAR_NAMES.is_lookup());
    assert!(CAR_TYPES.is_lookup());
    assert!(!SPECS.is_lookup());
    assert!(!STOCKS.is_lookup());
    assert!(!TERMS.is_lookup());
}

#[test]
fn test_specs_code_columns_are_integers() {
    for name in [COMPANY_NAME_CODE, CAR_NAME_CODE, CAR_TYPE_CODE] {
        let col = SPECS.column(name).expect("code column present");
        assert_eq!(col.class, ColumnClass::Integer);
    }
    assert_eq!(SPECS.foreign_keys.len(), 3);
}

#[test]
fn test_lookup_create_sql() {
    let sql = CAR_NAMES.create_sql();
    assert!(sql.contains("CREATE SEQUENCE car_names_code_seq;"));
    assert!(sql.contains("code INTEGER PRIMARY KEY DEFAULT nextval('car_names_code_seq')"));
    assert!(sql.contains("name VARCHAR NOT NULL UNIQUE"));
}

#[test]
fn test_specs_create_sql_declares_foreign_keys() {
    let sql = SPECS.create_sql();
    assert!(sql.contains("FOREIGN KEY (company_name_code) REFERENCES company_names (code)"));
    assert!(sql.contains("FOREIGN KEY (car_name_code) REFERENCES car_names (code)"));
    assert!(sql.contains("FOREIGN KEY (car_type_code) REFERENCES car_types (code)"));
    assert!(sql.contains("displacement DOUBLE"));
    assert!(!sql.contains("CREATE SEQUENCE"));
}

#[test]
fn test_reset_sql_drops_before_creating() {
    let sql = reset_sql();
    let first_drop = sql.find("DROP TABLE IF EXISTS terms;").unwrap();
    let first_create = sql.find("CREATE TABLE").unwrap();
    assert!(first_drop < first_create);
    // Fact tables are dropped before the lookup tables they reference
    let drop_specs = sql.find("DROP TABLE IF EXISTS specs;").unwrap();
    let drop_companies = sql.find("DROP TABLE IF EXISTS company_names;").unwrap();
    assert!(drop_specs < drop_companies);
}

#[test]
fn test_default_values_by_class() {
    assert_eq!(
        ColumnClass::Text.default_value(),
        SqlValue::Text("none".to_string())
    );
    assert_eq!(ColumnClass::Integer.default_value(), SqlValue::Integer(-1));
    assert_eq!(ColumnClass::Float.default_value(), SqlValue::Float(-1.0));
}
