//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Aggregate roots in this workspace are plain entities: they carry an identity
/// assigned by the repository and are otherwise ordinary values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
