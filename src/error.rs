//! Error types for the report run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// The database could not be reached (bad host, auth failure, missing file).
    #[error("Connection error: {0}")]
    Connection(String),

    /// The engine rejected or failed a statement.
    #[error("Query error: {0}")]
    Query(String),

    /// Invalid command line or environment settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing a report to the output stream failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl ReportError {
    pub fn connection(e: impl std::fmt::Display) -> Self {
        Self::Connection(e.to_string())
    }

    pub fn query(e: impl std::fmt::Display) -> Self {
        Self::Query(e.to_string())
    }

    pub fn config(e: impl std::fmt::Display) -> Self {
        Self::Config(e.to_string())
    }

    /// Label used when the error is shown on the diagnostic stream.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Connection(_) => "Connection Error",
            Self::Query(_) => "Query Error",
            Self::Config(_) => "Configuration Error",
            Self::Output(_) => "Output Error",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
