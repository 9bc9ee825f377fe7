//! mc-core - Core library for Motorcade
//!
//! This crate provides the database-free half of the catalog seeder:
//! project configuration, the fixed CSV column dictionary and glossary,
//! corpus assembly from manufacturer CSV files, the static schema
//! description, and spec-row normalization.

pub mod config;
pub mod corpus;
pub mod dictionary;
pub mod error;
pub mod glossary;
pub mod schema;
pub mod spec;

pub use config::{Config, DatabaseConfig};
pub use corpus::{assemble_corpus, parse_csv_file, Corpus, RawRecord};
pub use error::{CoreError, CoreResult};
pub use schema::{ColumnClass, ColumnDef, SqlValue, TableDef};
pub use spec::{normalize_spec_row, SpecCodes};
