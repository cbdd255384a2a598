//! Error types for page composition.

use thiserror::Error;

/// Conditions callers can match on after downcasting an `anyhow::Error`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("Template `{0}` is required but was not provided")]
    MissingTemplate(&'static str),

    #[error("At least one year-month is required to render the years page")]
    EmptyYearMonths,

    #[error("Invalid year-month: {0}")]
    InvalidYearMonth(String),

    #[error("Config validation error: {0}")]
    InvalidConfig(String),
}
