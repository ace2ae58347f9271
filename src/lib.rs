//! seqfold: generic filter, map, reduce, sum and transpose over slices
//!
//! This crate lets callers express common iteration patterns declaratively.
//! Every transform and predicate is an ordinary closure checked against the
//! element type at compile time; for example mapping `str::to_lowercase` over
//! a slice of integers is rejected by the type checker.
//!
//! ```compile_fail
//! let out = seqfold::map(&[1, 2, 3, 4], |s: &&str| s.to_lowercase());
//! ```
//!
//! All operations are pure: inputs are borrowed, outputs are freshly allocated.

pub mod core;
pub mod error;
pub mod matrix;
pub mod sequence;

// Re-exports for convenience
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
pub use sequence::*;
