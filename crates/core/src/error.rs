//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic validation failures raised while building
/// domain values. Storage and transport concerns belong to outer layers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A raw value was rejected by a value object constructor.
    #[error("invalid argument: {field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },
}

impl DomainError {
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the rejected field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidArgument { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_renders_field_and_reason() {
        let err = DomainError::invalid_argument("title", "must not be blank");
        assert_eq!(err.to_string(), "invalid argument: title: must not be blank");
        assert_eq!(err.field(), "title");
    }
}
