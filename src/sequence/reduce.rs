//! Left fold and the sum built on it.

use crate::core::traits::Summable;

/// Left fold: start from `initial` and replace the accumulator with
/// `combine(acc, item)` for each element in order.
///
/// Empty input returns `initial` unchanged.
///
/// ```
/// assert_eq!(seqfold::reduce(&[2, 3, 4, 5], 0, |acc, n| acc + n), 14);
/// ```
pub fn reduce<T1, T2, F>(seq: &[T1], initial: T2, mut combine: F) -> T2
where
    F: FnMut(T2, &T1) -> T2,
{
    let mut acc = initial;
    for item in seq {
        acc = combine(acc, item);
    }
    acc
}

/// Add the elements together, starting from the identity of `T`.
///
/// Numbers add and strings concatenate; empty input yields `T::zero()`.
///
/// ```
/// assert_eq!(seqfold::sum(&[1, 2, 3]), 6);
/// assert_eq!(seqfold::sum(&["a".to_string(), "b".to_string()]), "ab");
/// ```
pub fn sum<T>(seq: &[T]) -> T
where
    T: Summable + Clone,
{
    reduce(seq, T::zero(), |acc, next| acc.plus(next.clone()))
}
