mod mat4;

pub use mat4::Matrix4;

/// How a set of vectors is laid out when building a matrix from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorLayout {
    /// Each vector is a row of the matrix.
    Rows,
    /// Each vector is a column of the matrix.
    Columns,
}
