//! Spec-row normalization
//!
//! Turns a raw CSV record into the typed column values persisted in the
//! specs table: absent fields get their column-class default, numeric
//! fields are parsed, and the manufacturer/model/type names are replaced
//! by their resolved lookup codes. Pure with respect to the database, so
//! the whole step is testable against the schema description alone.

use crate::corpus::RawRecord;
use crate::error::{CoreError, CoreResult};
use crate::schema::{self, ColumnClass, SqlValue};

/// Resolved surrogate keys for one spec row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecCodes {
    pub company_name: i64,
    pub car_name: i64,
    pub car_type: i64,
}

/// Build the full specs-table row for one raw record.
///
/// Columns come from the schema description, in schema order. The
/// original name/type strings never reach the table: the schema lists
/// only the code columns, which are filled from `codes`.
pub fn normalize_spec_row(
    record: &RawRecord,
    codes: &SpecCodes,
) -> CoreResult<Vec<(&'static str, SqlValue)>> {
    let mut row = Vec::with_capacity(schema::SPECS.columns.len());

    for col in schema::SPECS.columns {
        let value = match col.name {
            schema::COMPANY_NAME_CODE => SqlValue::Integer(codes.company_name),
            schema::CAR_NAME_CODE => SqlValue::Integer(codes.car_name),
            schema::CAR_TYPE_CODE => SqlValue::Integer(codes.car_type),
            name => match record.get(name) {
                None => col.class.default_value(),
                Some(raw) => parse_value(name, raw, col.class)?,
            },
        };
        row.push((col.name, value));
    }

    Ok(row)
}

/// Parse a present cell value according to its column class.
fn parse_value(column: &str, raw: &str, class: ColumnClass) -> CoreResult<SqlValue> {
    match class {
        ColumnClass::Text => Ok(SqlValue::Text(raw.to_string())),
        ColumnClass::Integer => raw
            .trim()
            .parse::<i64>()
            .map(SqlValue::Integer)
            .map_err(|_| CoreError::InvalidNumber {
                column: column.to_string(),
                value: raw.to_string(),
            }),
        ColumnClass::Float => raw
            .trim()
            .parse::<f64>()
            .map(SqlValue::Float)
            .map_err(|_| CoreError::InvalidNumber {
                column: column.to_string(),
                value: raw.to_string(),
            }),
    }
}

#[cfg(test)]
#[path = "spec_test.rs"]
mod tests;
