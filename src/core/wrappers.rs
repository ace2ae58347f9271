//! `Summable` implementations for primitive numbers and strings.
//!
//! Numeric identities come from `num_traits::Zero`; addition is the native `+`,
//! so overflow follows the usual debug/release arithmetic rules.
//!
//! # References
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::Summable;
use num_traits::Zero;

macro_rules! impl_summable_num {
    ($($t:ty),* $(,)?) => {
        $(
            impl Summable for $t {
                #[inline]
                fn zero() -> Self {
                    <$t as Zero>::zero()
                }
                #[inline]
                fn plus(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_summable_num!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Concatenation with the empty string as identity.
impl Summable for String {
    fn zero() -> Self {
        String::new()
    }
    fn plus(mut self, rhs: Self) -> Self {
        self.push_str(&rhs);
        self
    }
}
