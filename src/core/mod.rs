//! Core traits for seqfold.

pub mod traits;
pub mod wrappers;

pub use traits::Summable;
