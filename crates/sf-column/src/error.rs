//! Column physics errors.

use sf_props::PropsError;
use thiserror::Error;

pub type ColumnResult<T> = Result<T, ColumnError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColumnError {
    /// Bad input caught before any computation; fatal to the request.
    #[error("Validation error: {what}")]
    Validation { what: String },

    /// Non-physical intermediate value (negative velocity, NaN, ...).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    #[error(transparent)]
    Props(#[from] PropsError),
}

impl ColumnError {
    pub fn validation(what: impl Into<String>) -> Self {
        Self::Validation { what: what.into() }
    }
}
