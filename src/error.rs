use thiserror::Error;

// Unified error type for seqfold

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    #[error(
        "All rows must be the same size as the zero row (len == {expected}). Row {row} is not the same size (len == {actual})."
    )]
    JaggedMatrix {
        /// Column count taken from row 0.
        expected: usize,
        /// Zero-based index of the first offending row.
        row: usize,
        /// Length of the offending row.
        actual: usize,
    },
}
