//! Row/column transposition of nested-row matrices.

use crate::error::SeqError;
use crate::matrix::shape::{Shape, shape};

/// Convert an R x C matrix into a C x R one: `out[j][i] == matrix[i][j]`.
///
/// Two degenerate inputs are returned unchanged: a matrix with no rows, and a
/// matrix made of a single empty row. Anything else must be rectangular with
/// respect to the zero row, otherwise [`SeqError::JaggedMatrix`] names the
/// first offending row.
///
/// ```
/// let t = seqfold::transpose(&[[1, 2, 3], [4, 5, 6]]).unwrap();
/// assert_eq!(t, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
///
/// let err = seqfold::transpose(&[vec![1, 2, 3], vec![4, 5]]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "All rows must be the same size as the zero row (len == 3). Row 1 is not the same size (len == 2)."
/// );
/// ```
pub fn transpose<T, R>(matrix: &[R]) -> Result<Vec<Vec<T>>, SeqError>
where
    T: Clone,
    R: AsRef<[T]>,
{
    let nrows = matrix.len();
    let ncols = matrix.first().map_or(0, |row| row.as_ref().len());
    // Nothing to do.
    if nrows == 0 || (nrows == 1 && ncols == 0) {
        return Ok(matrix.iter().map(|row| row.as_ref().to_vec()).collect());
    }

    let Shape { nrows, ncols } = shape(matrix)?;
    log::trace!("transposing {nrows}x{ncols} matrix");

    let mut out: Vec<Vec<T>> = (0..ncols).map(|_| Vec::with_capacity(nrows)).collect();
    for row in matrix {
        for (col, item) in out.iter_mut().zip(row.as_ref()) {
            col.push(item.clone());
        }
    }
    Ok(out)
}

/// [`transpose`] for callers that have already guaranteed a rectangular
/// matrix.
///
/// # Panics
/// Panics with the [`SeqError::JaggedMatrix`] message if `matrix` is jagged.
pub fn must_transpose<T, R>(matrix: &[R]) -> Vec<Vec<T>>
where
    T: Clone,
    R: AsRef<[T]>,
{
    match transpose(matrix) {
        Ok(out) => out,
        Err(err) => {
            log::error!("must_transpose: {err}");
            panic!("{err}");
        }
    }
}
