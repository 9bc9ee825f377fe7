//! Schema description for the catalog tables
//!
//! One static catalog shared by the schema resetter (DDL generation) and
//! the spec-row normalizer (per-class default values). Column typing
//! lives here so neither side introspects the live database.

/// Type class of a column, as seen by default-value substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnClass {
    Text,
    Integer,
    Float,
}

impl ColumnClass {
    /// DuckDB type name used in generated DDL.
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnClass::Text => "VARCHAR",
            ColumnClass::Integer => "INTEGER",
            ColumnClass::Float => "DOUBLE",
        }
    }

    /// Value substituted for an absent field of this class.
    pub fn default_value(&self) -> SqlValue {
        match self {
            ColumnClass::Text => SqlValue::Text("none".to_string()),
            ColumnClass::Integer => SqlValue::Integer(-1),
            ColumnClass::Float => SqlValue::Float(-1.0),
        }
    }
}

/// A typed value bound into an INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// One column of a catalog table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub name: &'static str,
    pub class: ColumnClass,
}

impl ColumnDef {
    const fn new(name: &'static str, class: ColumnClass) -> Self {
        Self { name, class }
    }
}

/// Foreign key from a fact-table column to a lookup table's code column.
#[derive(Debug, Clone, Copy)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references: &'static str,
}

/// One catalog table.
#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    pub name: &'static str,

    /// Generated surrogate-key column; present on lookup tables only.
    pub surrogate_key: Option<&'static str>,

    /// Persisted columns, excluding the surrogate key.
    pub columns: &'static [ColumnDef],

    pub foreign_keys: &'static [ForeignKey],
}

use ColumnClass::{Float, Integer, Text};

/// Specs column carrying the manufacturer surrogate key.
pub const COMPANY_NAME_CODE: &str = "company_name_code";

/// Specs/stocks column carrying the model-name surrogate key.
pub const CAR_NAME_CODE: &str = "car_name_code";

/// Specs column carrying the model-type surrogate key.
pub const CAR_TYPE_CODE: &str = "car_type_code";

pub static COMPANY_NAMES: TableDef = TableDef {
    name: "company_names",
    surrogate_key: Some("code"),
    columns: &[ColumnDef::new("name", Text)],
    foreign_keys: &[],
};

pub static CAR_NAMES: TableDef = TableDef {
    name: "car_names",
    surrogate_key: Some("code"),
    columns: &[ColumnDef::new("name", Text)],
    foreign_keys: &[],
};

pub static CAR_TYPES: TableDef = TableDef {
    name: "car_types",
    surrogate_key: Some("code"),
    columns: &[ColumnDef::new("name", Text)],
    foreign_keys: &[],
};

pub static SPECS: TableDef = TableDef {
    name: "specs",
    surrogate_key: None,
    columns: &[
        ColumnDef::new("grade", Text),
        ColumnDef::new("capacity", Integer),
        ColumnDef::new("length", Integer),
        ColumnDef::new("width", Integer),
        ColumnDef::new("height", Integer),
        ColumnDef::new("weight", Integer),
        ColumnDef::new("displacement", Float),
        ColumnDef::new("mileage", Float),
        ColumnDef::new("price", Integer),
        ColumnDef::new(COMPANY_NAME_CODE, Integer),
        ColumnDef::new(CAR_NAME_CODE, Integer),
        ColumnDef::new(CAR_TYPE_CODE, Integer),
    ],
    foreign_keys: &[
        ForeignKey {
            column: COMPANY_NAME_CODE,
            references: "company_names",
        },
        ForeignKey {
            column: CAR_NAME_CODE,
            references: "car_names",
        },
        ForeignKey {
            column: CAR_TYPE_CODE,
            references: "car_types",
        },
    ],
};

pub static STOCKS: TableDef = TableDef {
    name: "stocks",
    surrogate_key: None,
    columns: &[
        ColumnDef::new(CAR_NAME_CODE, Integer),
        ColumnDef::new("grade", Text),
        ColumnDef::new("capacity", Integer),
        ColumnDef::new("num", Integer),
    ],
    foreign_keys: &[ForeignKey {
        column: CAR_NAME_CODE,
        references: "car_names",
    }],
};

pub static TERMS: TableDef = TableDef {
    name: "terms",
    surrogate_key: None,
    columns: &[
        ColumnDef::new("abbrev_name", Text),
        ColumnDef::new("formal_name", Text),
    ],
    foreign_keys: &[],
};

/// All catalog tables, in creation (dependency) order.
pub static CATALOG: &[&TableDef] = &[&COMPANY_NAMES, &CAR_NAMES, &CAR_TYPES, &SPECS, &STOCKS, &TERMS];

impl TableDef {
    /// Whether this is a lookup table with a generated surrogate key.
    pub fn is_lookup(&self) -> bool {
        self.surrogate_key.is_some()
    }

    /// Find a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Name of the sequence backing the surrogate key, if any.
    fn sequence_name(&self) -> Option<String> {
        self.surrogate_key
            .map(|key| format!("{}_{}_seq", self.name, key))
    }

    /// CREATE statements (sequence + table) for this table.
    ///
    /// Lookup tables get a sequence-backed surrogate key and a unique
    /// natural-key column; fact tables declare their foreign keys.
    pub fn create_sql(&self) -> String {
        let mut prelude = String::new();
        let mut parts = Vec::new();

        if let Some(key) = self.surrogate_key {
            let seq = format!("{}_{}_seq", self.name, key);
            prelude = format!("CREATE SEQUENCE {seq};\n");
            parts.push(format!(
                "{key} INTEGER PRIMARY KEY DEFAULT nextval('{seq}')"
            ));
        }

        for col in self.columns {
            let mut def = format!("{} {}", col.name, col.class.sql_type());
            if self.is_lookup() {
                def.push_str(" NOT NULL UNIQUE");
            }
            parts.push(def);
        }

        for fk in self.foreign_keys {
            parts.push(format!(
                "FOREIGN KEY ({}) REFERENCES {} (code)",
                fk.column, fk.references
            ));
        }

        format!("{prelude}CREATE TABLE {} (\n  {}\n);", self.name, parts.join(",\n  "))
    }

    /// DROP statements for this table and its sequence.
    pub fn drop_sql(&self) -> String {
        let mut sql = format!("DROP TABLE IF EXISTS {};", self.name);
        if let Some(seq) = self.sequence_name() {
            sql.push_str(&format!("\nDROP SEQUENCE IF EXISTS {seq};"));
        }
        sql
    }
}

/// Full reset script: drop everything in reverse dependency order, then
/// recreate in dependency order.
pub fn reset_sql() -> String {
    let mut sql = String::new();
    for table in CATALOG.iter().rev() {
        sql.push_str(&table.drop_sql());
        sql.push('\n');
    }
    for table in CATALOG {
        sql.push_str(&table.create_sql());
        sql.push('\n');
    }
    sql
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
