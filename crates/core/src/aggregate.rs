//! Aggregate root trait for domain models that own and guard their entities.

/// Aggregate root marker + minimal interface.
///
/// The root is the only entry point for mutating the entities it owns. Every
/// successful mutation bumps `version()`; a rejected mutation leaves it alone.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Starts at 0 for a freshly constructed aggregate.
    fn version(&self) -> u64;
}
