use thiserror::Error;

/// An error type for the algebra module.
#[derive(Error, Debug, PartialEq)]
pub enum AlgebraError {
    /// The matrix determinant is too close to zero to invert.
    #[error("Matrix is not invertible (determinant {0:e})")]
    SingularMatrix(f64),

    /// A flat buffer did not hold the expected number of elements.
    #[error("Invalid buffer length. Expected {expected} elements, got {actual}")]
    InvalidBufferLength {
        /// Number of elements required.
        expected: usize,
        /// Number of elements provided.
        actual: usize,
    },
}
