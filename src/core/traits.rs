//! Core capability traits for seqfold.

/// Values with an additive identity and an associative `+`.
///
/// This is the bound behind [`crate::sum`]. Numbers add, strings concatenate.
/// Implement it for your own types to make them summable.
pub trait Summable: Sized {
    /// The identity element: `x.plus(Self::zero()) == x`.
    fn zero() -> Self;
    /// Combine two values.
    fn plus(self, rhs: Self) -> Self;
}
