//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur while constructing a vial tag.
///
/// Construction either yields a fully valid tag or one of these; no
/// partially valid tag is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The vial name is empty or whitespace-only.
    #[error("vial name cannot be empty or whitespace")]
    EmptyVialName,

    /// The test type is empty or whitespace-only.
    #[error("test type cannot be empty or whitespace")]
    EmptyTestType,

    /// A `Nameable` type resolved to an empty or whitespace-only name.
    #[error("vial type {type_name} resolved to an empty name")]
    UnresolvedIdentity { type_name: &'static str },
}

/// Convenience type alias for Results with ValidationError
pub type VialResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyVialName.to_string(),
            "vial name cannot be empty or whitespace"
        );
        assert_eq!(
            ValidationError::EmptyTestType.to_string(),
            "test type cannot be empty or whitespace"
        );

        let err = ValidationError::UnresolvedIdentity {
            type_name: "my_crate::BlankVial",
        };
        assert!(err.to_string().contains("my_crate::BlankVial"));
    }
}
