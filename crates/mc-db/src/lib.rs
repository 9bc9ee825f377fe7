//! mc-db - Database layer for Motorcade
//!
//! This crate owns the DuckDB store, schema reset, and the staged load
//! pipeline that turns an assembled CSV corpus into catalog rows.

pub mod duckdb;
pub mod error;
pub mod loader;

pub use duckdb::DuckDbStore;
pub use error::{DbError, DbResult};
pub use loader::{load, LoadSummary, Stage, StageResult};
