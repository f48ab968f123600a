//! Error handling module for the calculator
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The catalog, query, selection and aggregation operations are total and never
//! produce these; they come from the outer surfaces (config files, the terminal,
//! command line input).

use thiserror::Error;

/// Main error type for the calculator
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog integrity errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    /// A record id that is not in the catalog
    #[error("Unknown laptop id: {0}")]
    UnknownId(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalculatorError>;

impl CalculatorError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unknown id error
    pub fn unknown_id(id: impl Into<String>) -> Self {
        Self::UnknownId(id.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
