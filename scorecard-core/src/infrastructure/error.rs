// scorecard-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(scorecard::infra::database::duckdb),
        help("An error occurred inside the DuckDB workbook.")
    )]
    DuckDB(#[from] duckdb::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(scorecard::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CSV WORKBOOK ---
    #[error("CSV Error: {0}")]
    #[diagnostic(
        code(scorecard::infra::csv),
        help("Check that the worksheet file is valid comma-separated text.")
    )]
    Csv(#[from] csv::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(scorecard::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    // --- JSON (view export) ---
    #[error("JSON Serialization Error: {0}")]
    #[diagnostic(code(scorecard::infra::json))]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(code(scorecard::infra::config_missing))]
    ConfigNotFound(String),

    #[error("Backend '{0}' is unavailable")]
    #[diagnostic(
        code(scorecard::infra::unavailable),
        help("The dashboard keeps working from the last loaded snapshot.")
    )]
    BackendUnavailable(String),
}

impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}
