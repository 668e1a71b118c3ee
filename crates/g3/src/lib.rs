#![deny(missing_docs)]
#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

/// Affine 4x4 matrices, vectors and quaternions in `f32` and `f64`.
#[doc(inline)]
pub use g3_algebra as algebra;

/// Dense voxel bitmaps and the binary voxel grid capability.
#[doc(inline)]
pub use g3_spatial as spatial;
