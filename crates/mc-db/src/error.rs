//! Error types for mc-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    Connection(String),

    /// Query execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    Execution(String),

    /// Schema reset error (D003)
    #[error("[D003] Schema reset failed: {0}")]
    SchemaReset(String),

    /// Lookup resolution error (D004)
    #[error("[D004] Expected exactly one {table} row named '{name}', found {matches}")]
    LookupResolution {
        table: String,
        name: String,
        matches: usize,
    },

    /// Insert error (D005)
    #[error("[D005] Insert into {table} failed: {message}")]
    Insert { table: String, message: String },

    /// Normalization error propagated from mc-core
    #[error(transparent)]
    Core(#[from] mc_core::CoreError),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        DbError::Execution(err.to_string())
    }
}
