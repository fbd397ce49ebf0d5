// ABOUTME: Sealed trait pattern for runtime traits.
// ABOUTME: Only adapters defined in this crate may implement the capability traits.

/// Supertrait of every runtime capability trait.
///
/// New methods can be added to the traits without breaking downstream code,
/// since nothing outside this crate can implement them.
pub trait Sealed {}
