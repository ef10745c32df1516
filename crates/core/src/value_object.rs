//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity**. They are defined
//! entirely by the primitive they wrap, and they validate that primitive once,
//! at construction time. Anything holding a value object can rely on it being
//! valid.

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Constructors return [`DomainResult`] instead of panicking,
/// so malformed input surfaces as [`DomainError::InvalidArgument`] before it
/// reaches an aggregate.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Title(String);
///
/// impl ValueObject for Title {
///     type Raw = String;
///     fn value(&self) -> &String { &self.0 }
/// }
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Primitive representation wrapped by this value object.
    type Raw;

    /// Borrow the wrapped primitive.
    fn value(&self) -> &Self::Raw;
}

/// Validate that `raw` contains at least one non-whitespace character.
///
/// The original string is returned untouched; callers decide whether to trim.
pub fn non_blank(field: &'static str, raw: impl Into<String>) -> DomainResult<String> {
    let raw = raw.into();
    if raw.trim().is_empty() {
        return Err(DomainError::invalid_argument(
            field,
            "must not be null or empty",
        ));
    }
    Ok(raw)
}
