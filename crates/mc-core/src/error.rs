//! Error types for mc-core

use thiserror::Error;

/// Core error type for Motorcade
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: CSV input directory not found
    #[error("[E003] CSV input directory not found: {path}")]
    InputDirNotFound { path: String },

    /// E004: IO error with file path context
    #[error("[E004] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E005: CSV reader error
    #[error("[E005] CSV parse error in {file}: {source}")]
    CsvParse { file: String, source: csv::Error },

    /// E006: A row carries more columns than the dictionary defines
    #[error("[E006] Row {line} in {file} has {found} columns, the dictionary defines {expected}")]
    RowTooWide {
        file: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// E007: A numeric spec column holds a non-numeric value
    #[error("[E007] Invalid numeric value '{value}' for column '{column}'")]
    InvalidNumber { column: String, value: String },

    /// E008: IO error
    #[error("[E008] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E009: YAML parse error
    #[error("[E009] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
