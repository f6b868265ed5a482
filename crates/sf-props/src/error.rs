//! Registry lookup errors.

use thiserror::Error;

pub type PropsResult<T> = Result<T, PropsError>;

/// Errors raised when a registry lookup comes up empty.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropsError {
    #[error("Unsupported species: '{name}' not found in registry")]
    UnsupportedSpecies { name: String },

    #[error("Unsupported packing: '{name}' not found in registry")]
    UnsupportedPacking { name: String },

    #[error("No Henry's-law data for acid gas '{species}'")]
    MissingHenryData { species: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_name() {
        let err = PropsError::UnsupportedPacking {
            name: "Mellapak 9000".into(),
        };
        assert!(err.to_string().contains("Mellapak 9000"));
    }
}
