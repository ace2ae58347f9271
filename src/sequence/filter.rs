//! Order-preserving selection.

/// Keep the elements for which `test` returns true, in their original order.
///
/// Defined by delegation to [`filter_with_index`] with a predicate that
/// ignores the index.
///
/// ```
/// let evens = seqfold::filter(&[2, 3, 4, 5, 6, 7, 8, 9], |i| i % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6, 8]);
/// ```
pub fn filter<T, F>(seq: &[T], mut test: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    filter_with_index(seq, |_, item| test(item))
}

/// Like [`filter`], but the predicate also receives the zero-based position of
/// the element in `seq`.
///
/// ```
/// let odd_slots = seqfold::filter_with_index(&["a", "b", "c", "d"], |i, _| i % 2 == 1);
/// assert_eq!(odd_slots, vec!["b", "d"]);
/// ```
pub fn filter_with_index<T, F>(seq: &[T], mut test: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, &T) -> bool,
{
    let mut out = Vec::with_capacity(seq.len());
    for (i, item) in seq.iter().enumerate() {
        if test(i, item) {
            out.push(item.clone());
        }
    }
    out
}
