//! Conversions between nested-row matrices and `faer` dense matrices.
//!
//! `to_dense` applies the same zero-row validation as [`crate::transpose`], so
//! a jagged input is rejected with the same error.

use crate::error::SeqError;
use crate::matrix::shape::{Shape, shape};
use faer::{Mat, MatRef};

/// Build a `faer::Mat` from row-major nested rows.
pub fn to_dense<T, R>(matrix: &[R]) -> Result<Mat<T>, SeqError>
where
    T: Copy,
    R: AsRef<[T]>,
{
    let Shape { nrows, ncols } = shape(matrix)?;
    Ok(Mat::from_fn(nrows, ncols, |i, j| matrix[i].as_ref()[j]))
}

/// Read a dense matrix (or a view of one, e.g. `mat.transpose()`) back into rows.
pub fn from_dense<T: Copy>(mat: MatRef<'_, T>) -> Vec<Vec<T>> {
    (0..mat.nrows())
        .map(|i| (0..mat.ncols()).map(|j| mat[(i, j)]).collect())
        .collect()
}
