//! Matrix module: nested-row matrices, shape validation and transposition.
//!
//! A matrix here is a slice of rows, where each row is anything viewable as a
//! slice (`Vec<T>`, `[T; N]`, `&[T]`). Row 0, the zero row, fixes the
//! column count every other row must match.

pub mod shape;
pub use shape::{Shape, shape};

pub mod transpose;
pub use transpose::{must_transpose, transpose};

#[cfg(feature = "faer")]
pub mod dense;
#[cfg(feature = "faer")]
pub use dense::{from_dense, to_dense};
