use crate::bounds::AxisAlignedBox3i;
use crate::vector::Vector3i;

/// A grid of boolean voxels.
///
/// This is the contract spatial algorithms program against, so dense and sparse grid
/// representations can be used interchangeably. The trait is object safe and is usually
/// consumed as `&dyn BinaryVoxelGrid`.
pub trait BinaryVoxelGrid {
    /// Grid bounds, lower-inclusive and upper-exclusive.
    fn grid_bounds(&self) -> AxisAlignedBox3i;

    /// Whether the voxel at `coord` is set. `coord` must lie inside [`Self::grid_bounds`].
    fn get(&self, coord: Vector3i) -> bool;

    /// Lazily enumerate the coordinates of every set voxel.
    fn non_zeros(&self) -> Box<dyn Iterator<Item = Vector3i> + '_>;

    /// Like [`Self::get`] but reports `false` outside the grid bounds.
    fn is_occupied(&self, coord: Vector3i) -> bool {
        self.grid_bounds().contains(coord) && self.get(coord)
    }

    /// Number of set voxels.
    fn count_non_zeros(&self) -> usize {
        self.non_zeros().count()
    }

    /// Tightest half-open box around the set voxels, `None` if no voxel is set.
    fn non_zero_bounds(&self) -> Option<AxisAlignedBox3i> {
        let mut it = self.non_zeros();
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), p| {
            (
                Vector3i::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Vector3i::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        });
        Some(AxisAlignedBox3i::new(min, max + Vector3i::ONE))
    }
}
