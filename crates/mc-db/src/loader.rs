//! The staged load pipeline
//!
//! Six ordered stages, one transaction each: manufacturers, model names,
//! model types, specs, stocks, glossary terms. Stages 4-5 read the
//! surrogate keys assigned in stages 1-3, so the order is a correctness
//! dependency, not a convention.

use crate::duckdb::DuckDbStore;
use crate::error::{DbError, DbResult};
use duckdb::types::{ToSql, ToSqlOutput};
use duckdb::{params, params_from_iter, Transaction};
use mc_core::corpus::{Corpus, RawRecord};
use mc_core::schema::{self, SqlValue};
use mc_core::spec::{normalize_spec_row, SpecCodes};
use mc_core::{dictionary, glossary};
use rand::Rng;

/// One stage of the load pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CompanyNames,
    CarNames,
    CarTypes,
    Specs,
    Stocks,
    Terms,
}

impl Stage {
    /// Fixed execution order.
    pub const ORDER: [Stage; 6] = [
        Stage::CompanyNames,
        Stage::CarNames,
        Stage::CarTypes,
        Stage::Specs,
        Stage::Stocks,
        Stage::Terms,
    ];

    /// Target table of this stage
    pub fn table(&self) -> &'static str {
        match self {
            Stage::CompanyNames => "company_names",
            Stage::CarNames => "car_names",
            Stage::CarTypes => "car_types",
            Stage::Specs => "specs",
            Stage::Stocks => "stocks",
            Stage::Terms => "terms",
        }
    }
}

/// Row counts per stage for a completed load.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub stages: Vec<StageResult>,
}

/// Result of one committed stage.
#[derive(Debug)]
pub struct StageResult {
    pub stage: Stage,
    pub rows: usize,
}

impl LoadSummary {
    /// Total rows inserted across all stages.
    pub fn total_rows(&self) -> usize {
        self.stages.iter().map(|s| s.rows).sum()
    }
}

/// Stock row carried from stage 4 to stage 5.
///
/// Grade and capacity are the post-normalization values, so a spec row
/// missing either still yields a stock row with the class default.
#[derive(Debug)]
struct StockSeed {
    car_name_code: i64,
    grade: String,
    capacity: i64,
}

/// Run the whole pipeline against a freshly reset schema.
///
/// Each stage runs inside its own transaction: either every row of the
/// stage commits or none do. The first failure rolls the current stage
/// back and aborts the run.
pub fn load(store: &mut DuckDbStore, corpus: &Corpus) -> DbResult<LoadSummary> {
    let mut summary = LoadSummary::default();
    let mut stocks: Vec<StockSeed> = Vec::new();

    for stage in Stage::ORDER {
        log::debug!("Running load stage: {}", stage.table());
        let tx = store.transaction()?;
        let rows = match stage {
            Stage::CompanyNames => {
                let names: Vec<&str> = corpus.manufacturers().collect();
                insert_names(&tx, "company_names", &names)?
            }
            Stage::CarNames => insert_names(
                &tx,
                "car_names",
                &corpus.distinct_field_values(dictionary::CAR_NAME),
            )?,
            Stage::CarTypes => insert_names(
                &tx,
                "car_types",
                &corpus.distinct_field_values(dictionary::CAR_TYPE),
            )?,
            Stage::Specs => {
                stocks = insert_specs(&tx, corpus)?;
                stocks.len()
            }
            Stage::Stocks => insert_stocks(&tx, &stocks)?,
            Stage::Terms => insert_terms(&tx, glossary::TERMS)?,
        };
        tx.commit()?;
        summary.stages.push(StageResult { stage, rows });
    }

    Ok(summary)
}

/// Insert one lookup row per name.
///
/// Callers pass deduplicated, first-seen-ordered values; the unique
/// constraint on `name` turns any slip into a fatal insert error.
fn insert_names(tx: &Transaction, table: &str, names: &[&str]) -> DbResult<usize> {
    let mut stmt = tx.prepare(&format!("INSERT INTO {table} (name) VALUES (?)"))?;
    for name in names {
        stmt.execute(params![name]).map_err(|e| DbError::Insert {
            table: table.to_string(),
            message: e.to_string(),
        })?;
    }
    Ok(names.len())
}

/// Resolve the surrogate key for a lookup-table name.
///
/// Exactly one match is required; zero or several is fatal because the
/// spec and stock stages assume the codes are unambiguous.
fn lookup_code(tx: &Transaction, table: &str, name: &str) -> DbResult<i64> {
    let mut stmt = tx.prepare(&format!("SELECT code FROM {table} WHERE name = ?"))?;
    let codes: Vec<i64> = stmt
        .query_map(params![name], |row| row.get(0))?
        .collect::<Result<_, _>>()?;

    match codes.as_slice() {
        [code] => Ok(*code),
        _ => Err(DbError::LookupResolution {
            table: table.to_string(),
            name: name.to_string(),
            matches: codes.len(),
        }),
    }
}

/// Resolve a record's field value against a lookup table.
fn lookup_field_code(
    tx: &Transaction,
    table: &str,
    record: &RawRecord,
    field: &str,
) -> DbResult<i64> {
    match record.get(field) {
        Some(value) => lookup_code(tx, table, value),
        None => Err(DbError::LookupResolution {
            table: table.to_string(),
            name: format!("<missing {field}>"),
            matches: 0,
        }),
    }
}

/// Binds a schema value into a DuckDB statement.
struct BoundValue<'a>(&'a SqlValue);

impl ToSql for BoundValue<'_> {
    fn to_sql(&self) -> duckdb::Result<ToSqlOutput<'_>> {
        match self.0 {
            SqlValue::Text(s) => s.as_str().to_sql(),
            SqlValue::Integer(i) => i.to_sql(),
            SqlValue::Float(f) => f.to_sql(),
        }
    }
}

/// Stage 4: normalize and insert every raw record, in corpus order,
/// collecting the seeds for stage 5.
fn insert_specs(tx: &Transaction, corpus: &Corpus) -> DbResult<Vec<StockSeed>> {
    let columns: Vec<&str> = schema::SPECS.columns.iter().map(|c| c.name).collect();
    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!(
        "INSERT INTO specs ({}) VALUES ({placeholders})",
        columns.join(", ")
    );
    let mut stmt = tx.prepare(&sql)?;

    let mut seeds = Vec::new();
    for (manufacturer, records) in corpus.iter() {
        // One resolution per manufacturer, not per row
        let company_code = lookup_code(tx, "company_names", manufacturer)?;

        for record in records {
            let codes = SpecCodes {
                company_name: company_code,
                car_name: lookup_field_code(tx, "car_names", record, dictionary::CAR_NAME)?,
                car_type: lookup_field_code(tx, "car_types", record, dictionary::CAR_TYPE)?,
            };
            let row = normalize_spec_row(record, &codes)?;

            stmt.execute(params_from_iter(row.iter().map(|(_, v)| BoundValue(v))))
                .map_err(|e| DbError::Insert {
                    table: "specs".to_string(),
                    message: e.to_string(),
                })?;

            seeds.push(stock_seed(&row, &codes));
        }
    }

    Ok(seeds)
}

/// Pull the stage-5 fields out of a normalized spec row.
fn stock_seed(row: &[(&'static str, SqlValue)], codes: &SpecCodes) -> StockSeed {
    let mut grade = "none".to_string();
    let mut capacity = -1;
    for (name, value) in row {
        match (*name, value) {
            (dictionary::GRADE, SqlValue::Text(s)) => grade = s.clone(),
            (dictionary::CAPACITY, SqlValue::Integer(i)) => capacity = *i,
            _ => {}
        }
    }
    StockSeed {
        car_name_code: codes.car_name,
        grade,
        capacity,
    }
}

/// Stage 5: one stock row per spec row, with a fresh random quantity.
fn insert_stocks(tx: &Transaction, seeds: &[StockSeed]) -> DbResult<usize> {
    let mut stmt =
        tx.prepare("INSERT INTO stocks (car_name_code, grade, capacity, num) VALUES (?, ?, ?, ?)")?;
    let mut rng = rand::rng();

    for seed in seeds {
        let num: i64 = rng.random_range(0..=100);
        stmt.execute(params![seed.car_name_code, seed.grade, seed.capacity, num])
            .map_err(|e| DbError::Insert {
                table: "stocks".to_string(),
                message: e.to_string(),
            })?;
    }

    Ok(seeds.len())
}

/// Stage 6: glossary terms, verbatim.
fn insert_terms(tx: &Transaction, terms: &[(&str, &str)]) -> DbResult<usize> {
    let mut stmt = tx.prepare("INSERT INTO terms (abbrev_name, formal_name) VALUES (?, ?)")?;
    for (abbrev, formal) in terms {
        stmt.execute(params![abbrev, formal])
            .map_err(|e| DbError::Insert {
                table: "terms".to_string(),
                message: e.to_string(),
            })?;
    }
    Ok(terms.len())
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
