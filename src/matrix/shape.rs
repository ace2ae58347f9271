//! Rectangularity checks against the zero row.

use crate::error::SeqError;

/// Dimensions of a rectangular matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub nrows: usize,
    pub ncols: usize,
}

impl Shape {
    /// Dimensions after transposition.
    pub fn transposed(self) -> Self {
        Self { nrows: self.ncols, ncols: self.nrows }
    }
}

/// Validate that every row has the zero row's length and return the shape.
///
/// A matrix with no rows is 0x0. Validation stops at the first row whose
/// length differs; later rows are not inspected.
pub fn shape<T, R>(matrix: &[R]) -> Result<Shape, SeqError>
where
    R: AsRef<[T]>,
{
    let Some(zero_row) = matrix.first() else {
        return Ok(Shape { nrows: 0, ncols: 0 });
    };
    let ncols = zero_row.as_ref().len();
    for (i, row) in matrix.iter().enumerate().skip(1) {
        let len = row.as_ref().len();
        if len != ncols {
            log::debug!("row {i} has len {len}, zero row has len {ncols}");
            return Err(SeqError::JaggedMatrix { expected: ncols, row: i, actual: len });
        }
    }
    Ok(Shape { nrows: matrix.len(), ncols })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_of_rectangle() {
        let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let s = shape(&m).unwrap();
        assert_eq!(s, Shape { nrows: 2, ncols: 3 });
        assert_eq!(s.transposed(), Shape { nrows: 3, ncols: 2 });
    }

    #[test]
    fn shape_of_empty() {
        let m: Vec<Vec<u8>> = Vec::new();
        assert_eq!(shape(&m).unwrap(), Shape { nrows: 0, ncols: 0 });
    }

    #[test]
    fn first_mismatch_wins() {
        let m = vec![vec![1, 2], vec![3, 4], vec![5], vec![]];
        let err = shape(&m).unwrap_err();
        assert_eq!(err, SeqError::JaggedMatrix { expected: 2, row: 2, actual: 1 });
    }
}
