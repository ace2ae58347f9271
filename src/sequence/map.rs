//! Element-wise transformation.

/// Run every element through `transform`, returning the results in order.
///
/// The output has the same length as `seq`; the element type may change.
///
/// ```
/// let lower = seqfold::map(&["BAT", "CaT", "haT"], |s| s.to_lowercase());
/// assert_eq!(lower, vec!["bat", "cat", "hat"]);
/// ```
///
/// Fallible transforms are wrapped by the caller, e.g. parsing with a
/// fallback, or by mapping into `Result` and collecting afterwards.
pub fn map<T1, T2, F>(seq: &[T1], mut transform: F) -> Vec<T2>
where
    F: FnMut(&T1) -> T2,
{
    let mut out = Vec::with_capacity(seq.len());
    for item in seq {
        out.push(transform(item));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_doubles_ints() {
        assert_eq!(map(&[2, 3, 4, 5], |i| i * 2), vec![4, 6, 8, 10]);
    }

    #[test]
    fn map_strings_to_ints() {
        let input = ["1", "3", "5", "7", "9", "11"];
        let out: Vec<i32> = map(&input, |s| s.parse().unwrap());
        assert_eq!(out, vec![1, 3, 5, 7, 9, 11]);
    }

    #[test]
    fn map_empty_has_len_zero() {
        let input: Vec<String> = Vec::new();
        let out = map(&input, |s| s.len());
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn transform_called_once_per_element_in_order() {
        let mut seen = Vec::new();
        let out = map(&[3, 1, 2], |v| {
            seen.push(*v);
            v * 10
        });
        assert_eq!(seen, vec![3, 1, 2]);
        assert_eq!(out, vec![30, 10, 20]);
    }
}
