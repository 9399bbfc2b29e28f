//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two titles with the
/// same text are the same title. A value object validates itself on construction,
/// so holding one is proof that its invariants hold.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Title(String);
///
/// impl ValueObject for Title {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
