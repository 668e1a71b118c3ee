use crate::vector::Vector3i;

/// Axis aligned box over integer grid coordinates.
///
/// Grid bounds are half-open: `min` is inclusive and `max` is exclusive on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisAlignedBox3i {
    /// Inclusive lower corner.
    pub min: Vector3i,
    /// Exclusive upper corner.
    pub max: Vector3i,
}

impl AxisAlignedBox3i {
    /// Create a new box from its corners.
    #[inline]
    pub fn new(min: Vector3i, max: Vector3i) -> Self {
        Self { min, max }
    }

    /// Extent along each axis, zero for an empty axis.
    #[inline]
    pub fn size(&self) -> Vector3i {
        let extent = |lo: i32, hi: i32| hi.saturating_sub(lo).max(0);
        Vector3i::new(
            extent(self.min.x, self.max.x),
            extent(self.min.y, self.max.y),
            extent(self.min.z, self.max.z),
        )
    }

    /// Number of cells inside the box, saturating at `usize::MAX`.
    #[inline]
    pub fn volume(&self) -> usize {
        let size = self.size();
        (size.x as usize)
            .saturating_mul(size.y as usize)
            .saturating_mul(size.z as usize)
    }

    /// True if the box holds no cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.volume() == 0
    }

    /// True if `p` lies in `[min, max)` on every axis.
    #[inline]
    pub fn contains(&self, p: Vector3i) -> bool {
        (self.min.x..self.max.x).contains(&p.x)
            && (self.min.y..self.max.y).contains(&p.y)
            && (self.min.z..self.max.z).contains(&p.z)
    }
}
