//! Boundary errors.

use sf_solver::DesignError;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request shape is wrong (missing/extra design inputs, bad ranges).
    #[error("Validation error: {what}")]
    Validation { what: String },

    #[error(transparent)]
    Design(#[from] DesignError),
}

impl ApiError {
    pub fn validation(what: impl Into<String>) -> Self {
        Self::Validation { what: what.into() }
    }
}

impl From<sf_column::ColumnError> for ApiError {
    fn from(err: sf_column::ColumnError) -> Self {
        Self::Design(err.into())
    }
}
