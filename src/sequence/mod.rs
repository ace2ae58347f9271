//! Higher-order operations over ordered slices.
//!
//! Every operation makes a single left-to-right pass, borrows its input and
//! returns freshly allocated output. The supplied closure is called exactly
//! once per element, in order. Empty input is always valid.
//!
//! [`reduce`] is the foundational primitive: [`sum`] is defined through it, and
//! [`map`] and [`filter`] are expressible with it (see the tests), though they
//! are implemented directly.

pub mod filter;
pub use filter::{filter, filter_with_index};

pub mod map;
pub use map::map;

pub mod reduce;
pub use reduce::{reduce, sum};
