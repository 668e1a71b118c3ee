use bitvec::prelude::{BitSlice, BitVec, Lsb0};

use crate::bounds::AxisAlignedBox3i;
use crate::error::VoxelError;
use crate::vector::Vector3i;
use crate::voxel_grid::BinaryVoxelGrid;

/// A dense 3D grid of boolean voxels with bit-packed storage.
///
/// Voxel `(x, y, z)` is stored at linear index `z * (X * Y) + y * X + x` where `(X, Y, Z)` are
/// the grid dimensions. The dimensions are fixed at construction.
///
/// Accessors fail fast: coordinate or index arguments outside the grid panic, the same way
/// slice indexing does. The `try_*` variants report a [`VoxelError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap3 {
    bits: BitVec,
    dims: Vector3i,
    row_size: usize,
    slab_size: usize,
}

impl Bitmap3 {
    /// Creates a new `Bitmap3` with every voxel cleared.
    ///
    /// # Arguments
    /// * `dims` - The number of voxels along x, y and z.
    ///
    /// # Errors
    /// Returns [`VoxelError::InvalidDimensions`] if any extent is negative or the voxel count
    /// exceeds what a bit vector can address.
    pub fn new(dims: Vector3i) -> Result<Self, VoxelError> {
        if dims.x < 0 || dims.y < 0 || dims.z < 0 {
            return Err(VoxelError::InvalidDimensions(dims));
        }

        let row_size = dims.x as usize;
        let slab_size = row_size.checked_mul(dims.y as usize);
        let size = slab_size.and_then(|slab| slab.checked_mul(dims.z as usize));
        let (Some(slab_size), Some(size)) = (slab_size, size) else {
            return Err(VoxelError::InvalidDimensions(dims));
        };
        if size > BitSlice::<usize, Lsb0>::MAX_BITS {
            return Err(VoxelError::InvalidDimensions(dims));
        }

        log::debug!("Allocating Bitmap3 {dims:?} ({size} voxels)");

        Ok(Self {
            bits: BitVec::repeat(false, size),
            dims,
            row_size,
            slab_size,
        })
    }

    /// The grid dimensions.
    #[inline]
    pub fn dimensions(&self) -> Vector3i {
        self.dims
    }

    /// Total number of voxels.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if the grid holds no voxel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The backing bit store, in linear index order.
    #[inline]
    pub fn bits(&self) -> &BitSlice {
        &self.bits
    }

    /// True if `coord` lies inside the grid.
    #[inline]
    pub fn contains(&self, coord: Vector3i) -> bool {
        (0..self.dims.x).contains(&coord.x)
            && (0..self.dims.y).contains(&coord.y)
            && (0..self.dims.z).contains(&coord.z)
    }

    /// Linear index of `coord`.
    ///
    /// # Errors
    /// Returns [`VoxelError::OutOfBounds`] if `coord` lies outside the grid.
    #[inline]
    pub fn try_to_linear(&self, coord: Vector3i) -> Result<usize, VoxelError> {
        if !self.contains(coord) {
            return Err(VoxelError::OutOfBounds {
                coord,
                dims: self.dims,
            });
        }
        Ok(coord.z as usize * self.slab_size + coord.y as usize * self.row_size + coord.x as usize)
    }

    /// Linear index of `coord`, `z * (X * Y) + y * X + x`.
    ///
    /// # Panics
    /// Panics if `coord` lies outside the grid.
    #[inline]
    pub fn to_linear(&self, coord: Vector3i) -> usize {
        match self.try_to_linear(coord) {
            Ok(i) => i,
            Err(e) => panic!("{e}"),
        }
    }

    /// Coordinate of the linear index `index`.
    ///
    /// # Errors
    /// Returns [`VoxelError::LinearIndexOutOfBounds`] if `index` is not below [`Self::len`].
    #[inline]
    pub fn try_to_index(&self, index: usize) -> Result<Vector3i, VoxelError> {
        if index >= self.len() {
            return Err(VoxelError::LinearIndexOutOfBounds(index, self.len()));
        }
        Ok(self.coord_of(index))
    }

    /// Coordinate of the linear index `index`, the inverse of [`Self::to_linear`].
    ///
    /// # Panics
    /// Panics if `index` is not below [`Self::len`].
    #[inline]
    pub fn to_index(&self, index: usize) -> Vector3i {
        match self.try_to_index(index) {
            Ok(coord) => coord,
            Err(e) => panic!("{e}"),
        }
    }

    // recover (x, y, z) by successive division, index must be in range
    #[inline]
    fn coord_of(&self, index: usize) -> Vector3i {
        let z = index / self.slab_size;
        let rem = index - z * self.slab_size;
        let y = rem / self.row_size;
        let x = rem - y * self.row_size;
        Vector3i::new(x as i32, y as i32, z as i32)
    }

    /// Value of the voxel at `coord`.
    ///
    /// # Panics
    /// Panics if `coord` lies outside the grid.
    #[inline]
    pub fn get(&self, coord: Vector3i) -> bool {
        self.bits[self.to_linear(coord)]
    }

    /// Set the voxel at `coord` to `value`.
    ///
    /// # Panics
    /// Panics if `coord` lies outside the grid.
    #[inline]
    pub fn set(&mut self, coord: Vector3i, value: bool) {
        let i = self.to_linear(coord);
        self.bits.set(i, value);
    }

    /// Value of the voxel at `coord`.
    ///
    /// # Errors
    /// Returns [`VoxelError::OutOfBounds`] if `coord` lies outside the grid.
    #[inline]
    pub fn try_get(&self, coord: Vector3i) -> Result<bool, VoxelError> {
        Ok(self.bits[self.try_to_linear(coord)?])
    }

    /// Set the voxel at `coord` to `value`.
    ///
    /// # Errors
    /// Returns [`VoxelError::OutOfBounds`] if `coord` lies outside the grid.
    #[inline]
    pub fn try_set(&mut self, coord: Vector3i, value: bool) -> Result<(), VoxelError> {
        let i = self.try_to_linear(coord)?;
        self.bits.set(i, value);
        Ok(())
    }

    /// Value of the voxel at linear index `index`.
    ///
    /// # Panics
    /// Panics if `index` is not below [`Self::len`].
    #[inline]
    pub fn get_linear(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Set the voxel at linear index `index` to `value`.
    ///
    /// # Panics
    /// Panics if `index` is not below [`Self::len`].
    #[inline]
    pub fn set_linear(&mut self, index: usize, value: bool) {
        self.bits.set(index, value);
    }

    /// Set every voxel to `value`.
    #[inline]
    pub fn fill(&mut self, value: bool) {
        self.bits.fill(value);
    }

    /// Clear every voxel.
    #[inline]
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Number of set voxels.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Every coordinate of the grid, z-major then y then x.
    ///
    /// Each call starts a fresh traversal.
    #[inline]
    pub fn indices(&self) -> Indices {
        Indices {
            next: 0,
            len: self.len(),
            row_size: self.row_size,
            slab_size: self.slab_size,
        }
    }

    /// Coordinates of the set voxels, in increasing linear index order.
    ///
    /// Each call re-scans the bit store.
    #[inline]
    pub fn non_zeros(&self) -> impl Iterator<Item = Vector3i> + '_ {
        self.bits.iter_ones().map(move |i| self.coord_of(i))
    }
}

impl BinaryVoxelGrid for Bitmap3 {
    fn grid_bounds(&self) -> AxisAlignedBox3i {
        AxisAlignedBox3i::new(Vector3i::ZERO, self.dims)
    }

    fn get(&self, coord: Vector3i) -> bool {
        Bitmap3::get(self, coord)
    }

    fn non_zeros(&self) -> Box<dyn Iterator<Item = Vector3i> + '_> {
        Box::new(Bitmap3::non_zeros(self))
    }

    fn count_non_zeros(&self) -> usize {
        self.count_ones()
    }
}

impl std::ops::Index<usize> for Bitmap3 {
    type Output = bool;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl std::ops::Index<Vector3i> for Bitmap3 {
    type Output = bool;

    #[inline]
    fn index(&self, coord: Vector3i) -> &Self::Output {
        &self.bits[self.to_linear(coord)]
    }
}

/// Iterator over every coordinate of a [`Bitmap3`], see [`Bitmap3::indices`].
#[derive(Debug, Clone)]
pub struct Indices {
    next: usize,
    len: usize,
    row_size: usize,
    slab_size: usize,
}

impl Iterator for Indices {
    type Item = Vector3i;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let i = self.next;
        self.next += 1;

        let z = i / self.slab_size;
        let rem = i - z * self.slab_size;
        let y = rem / self.row_size;
        let x = rem - y * self.row_size;
        Some(Vector3i::new(x as i32, y as i32, z as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Indices {}

impl std::iter::FusedIterator for Indices {}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_234() -> Bitmap3 {
        Bitmap3::new(Vector3i::new(2, 3, 4)).unwrap()
    }

    #[test]
    fn test_new_is_cleared() {
        let bitmap = grid_234();
        assert_eq!(bitmap.len(), 24);
        assert_eq!(bitmap.dimensions(), Vector3i::new(2, 3, 4));
        assert_eq!(bitmap.count_ones(), 0);
        assert!(bitmap.indices().all(|c| !bitmap.get(c)));
        assert_eq!(bitmap.non_zeros().count(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Bitmap3::new(Vector3i::new(2, -1, 4)).unwrap_err();
        assert_eq!(err, VoxelError::InvalidDimensions(Vector3i::new(2, -1, 4)));
    }

    #[test]
    fn test_oversized_dimensions() {
        // 2^21 * 2^21 * 2^22 voxels wraps a 64-bit count to zero
        let dims = Vector3i::new(1 << 21, 1 << 21, 1 << 22);
        assert_eq!(Bitmap3::new(dims), Err(VoxelError::InvalidDimensions(dims)));

        let dims = Vector3i::new(i32::MAX, i32::MAX, i32::MAX);
        assert_eq!(Bitmap3::new(dims), Err(VoxelError::InvalidDimensions(dims)));

        // zero along one axis is fine however large the others are
        let flat = Bitmap3::new(Vector3i::new(1 << 15, 1 << 15, 0)).unwrap();
        assert!(flat.is_empty());
        assert!(!flat.contains(Vector3i::new(1, 1, 0)));
    }

    #[test]
    fn test_empty_grid() {
        let bitmap = Bitmap3::new(Vector3i::new(3, 0, 2)).unwrap();
        assert!(bitmap.is_empty());
        assert_eq!(bitmap.indices().count(), 0);
        assert_eq!(bitmap.non_zeros().count(), 0);
    }

    #[test]
    fn test_linear_bijection() {
        let bitmap = grid_234();
        let mut seen = [false; 24];
        for z in 0..4 {
            for y in 0..3 {
                for x in 0..2 {
                    let c = Vector3i::new(x, y, z);
                    let i = bitmap.to_linear(c);
                    assert_eq!(i, (z * 6 + y * 2 + x) as usize);
                    assert!(!seen[i]);
                    seen[i] = true;
                    assert_eq!(bitmap.to_index(i), c);
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_indices_order() {
        let bitmap = grid_234();
        let indices: Vec<Vector3i> = bitmap.indices().collect();
        assert_eq!(indices.len(), 24);
        assert_eq!(indices[0], Vector3i::new(0, 0, 0));
        assert_eq!(indices[1], Vector3i::new(1, 0, 0));
        assert_eq!(indices[2], Vector3i::new(0, 1, 0));
        assert_eq!(indices[6], Vector3i::new(0, 0, 1));
        assert_eq!(indices[23], Vector3i::new(1, 2, 3));
        for (i, c) in indices.iter().enumerate() {
            assert_eq!(bitmap.to_linear(*c), i);
        }

        // restartable, every call is an independent traversal
        let mut it = bitmap.indices();
        assert_eq!(it.len(), 24);
        it.next();
        assert_eq!(it.len(), 23);
        assert_eq!(bitmap.indices().count(), 24);
    }

    #[test]
    fn test_non_zeros() {
        let mut bitmap = grid_234();
        bitmap.set(Vector3i::new(1, 2, 3), true);
        bitmap.set(Vector3i::new(0, 0, 0), true);

        let set: Vec<Vector3i> = bitmap.non_zeros().collect();
        assert_eq!(set, vec![Vector3i::new(0, 0, 0), Vector3i::new(1, 2, 3)]);

        // a fresh enumerator sees later writes
        bitmap.set(Vector3i::new(0, 0, 0), false);
        bitmap.set_linear(7, true);
        let set: Vec<Vector3i> = bitmap.non_zeros().collect();
        assert_eq!(set, vec![Vector3i::new(1, 0, 1), Vector3i::new(1, 2, 3)]);
    }

    #[test]
    fn test_accessors_agree() {
        let mut bitmap = grid_234();
        let c = Vector3i::new(1, 1, 2);
        bitmap.set(c, true);

        let i = bitmap.to_linear(c);
        assert!(bitmap.get(c));
        assert!(bitmap[c]);
        assert!(bitmap[i]);
        assert!(bitmap.get_linear(i));
        assert_eq!(bitmap.try_get(c), Ok(true));
        assert!(bitmap.bits()[i]);
        assert_eq!(bitmap.count_ones(), 1);

        bitmap.set_linear(i, false);
        assert!(!bitmap[c]);
    }

    #[test]
    fn test_fill_and_clear() {
        let mut bitmap = grid_234();
        bitmap.fill(true);
        assert_eq!(bitmap.count_ones(), 24);
        assert_eq!(bitmap.non_zeros().count(), 24);
        bitmap.clear();
        assert_eq!(bitmap.count_ones(), 0);
    }

    #[test]
    fn test_checked_out_of_bounds() {
        let mut bitmap = grid_234();
        let outside = Vector3i::new(2, 0, 0);
        assert_eq!(
            bitmap.try_get(outside),
            Err(VoxelError::OutOfBounds {
                coord: outside,
                dims: Vector3i::new(2, 3, 4)
            })
        );
        // (-1, 1, 0) would alias (1, 0, 0) without the bounds check
        assert!(bitmap.try_set(Vector3i::new(-1, 1, 0), true).is_err());
        assert_eq!(bitmap.count_ones(), 0);
        assert_eq!(
            bitmap.try_to_index(24),
            Err(VoxelError::LinearIndexOutOfBounds(24, 24))
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let bitmap = grid_234();
        bitmap.get(Vector3i::new(0, 3, 0));
    }

    #[test]
    #[should_panic]
    fn test_set_linear_out_of_bounds_panics() {
        let mut bitmap = grid_234();
        bitmap.set_linear(24, true);
    }

    #[test]
    fn test_binary_voxel_grid() {
        let mut bitmap = grid_234();
        bitmap.set(Vector3i::new(0, 1, 1), true);
        bitmap.set(Vector3i::new(1, 2, 2), true);

        let grid: &dyn BinaryVoxelGrid = &bitmap;
        assert_eq!(
            grid.grid_bounds(),
            AxisAlignedBox3i::new(Vector3i::ZERO, Vector3i::new(2, 3, 4))
        );
        assert!(grid.get(Vector3i::new(0, 1, 1)));
        assert!(!grid.get(Vector3i::new(0, 0, 0)));
        assert!(!grid.is_occupied(Vector3i::new(5, 5, 5)));
        assert_eq!(grid.count_non_zeros(), 2);
        assert_eq!(grid.non_zeros().count(), 2);
        assert_eq!(
            grid.non_zero_bounds(),
            Some(AxisAlignedBox3i::new(
                Vector3i::new(0, 1, 1),
                Vector3i::new(2, 3, 3)
            ))
        );

        bitmap.clear();
        let grid: &dyn BinaryVoxelGrid = &bitmap;
        assert_eq!(grid.non_zero_bounds(), None);
    }
}
