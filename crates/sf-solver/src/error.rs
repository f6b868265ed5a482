//! Solver errors.

use sf_column::ColumnError;
use sf_props::PropsError;
use thiserror::Error;

pub type DesignResult<T> = Result<T, DesignError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    #[error("Validation error: {what}")]
    Validation { what: String },

    #[error(transparent)]
    Props(#[from] PropsError),

    #[error(transparent)]
    Column(#[from] ColumnError),
}

impl DesignError {
    pub fn validation(what: impl Into<String>) -> Self {
        Self::Validation { what: what.into() }
    }
}
