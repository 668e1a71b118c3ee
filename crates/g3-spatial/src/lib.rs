#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Dense bit-packed voxel grid.
pub mod bitmap;

/// Integer axis aligned boxes.
pub mod bounds;

/// Error types for the spatial module.
pub mod error;

/// Integer vectors used as grid coordinates.
pub mod vector;

/// The binary voxel grid capability.
pub mod voxel_grid;

pub use crate::bitmap::{Bitmap3, Indices};
pub use crate::bounds::AxisAlignedBox3i;
pub use crate::error::VoxelError;
pub use crate::vector::Vector3i;
pub use crate::voxel_grid::BinaryVoxelGrid;
