//! DuckDB store for the catalog schema

use crate::error::{DbError, DbResult};
use duckdb::{Connection, Transaction};
use mc_core::schema;
use std::path::Path;

/// Owned DuckDB connection for the catalog database.
///
/// The load pipeline is single-threaded and synchronous; the store hands
/// out one stage transaction at a time via [`transaction`](Self::transaction).
pub struct DuckDbStore {
    conn: Connection,
}

impl DuckDbStore {
    /// Open an in-memory database
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::Connection(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Open a database file
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::Connection(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Open from a path string (handles the :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    /// Drop and recreate every catalog table.
    ///
    /// When this returns the tables exist, are empty, and match the
    /// schema description's column classes. Any failure here is fatal to
    /// the run; no data load starts against a partially reset schema.
    pub fn reset_schema(&self) -> DbResult<()> {
        self.conn
            .execute_batch(&schema::reset_sql())
            .map_err(|e| DbError::SchemaReset(e.to_string()))
    }

    /// Begin a stage transaction.
    ///
    /// Commits via [`Transaction::commit`]; rolls back when dropped
    /// uncommitted.
    pub fn transaction(&mut self) -> DbResult<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    /// Row count of one table
    pub fn table_count(&self, table: &str) -> DbResult<usize> {
        self.query_count(&format!("SELECT * FROM {table}"))
    }

    /// Execute a query and return its row count
    pub fn query_count(&self, sql: &str) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM ({sql})"), [], |row| {
                row.get(0)
            })?;
        Ok(count as usize)
    }

    /// Execute a query and return the first column of every row as text
    pub fn query_strings(&self, sql: &str) -> DbResult<Vec<String>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<_, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
