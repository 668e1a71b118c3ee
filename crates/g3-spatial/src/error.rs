use crate::vector::Vector3i;
use thiserror::Error;

/// An error type for voxel grids.
#[derive(Error, Debug, PartialEq)]
pub enum VoxelError {
    /// A grid extent is negative or the voxel count does not fit in memory indexing.
    #[error("Invalid grid dimensions {0:?}. Extents must be non-negative and the voxel count addressable")]
    InvalidDimensions(Vector3i),

    /// A coordinate lies outside the grid bounds.
    #[error("Coordinate {coord:?} is out of bounds for grid dimensions {dims:?}")]
    OutOfBounds {
        /// The offending coordinate.
        coord: Vector3i,
        /// The grid dimensions.
        dims: Vector3i,
    },

    /// A linear index lies outside `[0, volume)`.
    #[error("Linear index {0} is out of bounds ({1})")]
    LinearIndexOutOfBounds(usize, usize),
}
