use g3::spatial::{AxisAlignedBox3i, BinaryVoxelGrid, Bitmap3, Vector3i, VoxelError};

// A consumer written only against the capability.
fn occupied_fraction(grid: &dyn BinaryVoxelGrid) -> f64 {
    let volume = grid.grid_bounds().volume();
    if volume == 0 {
        return 0.0;
    }
    grid.non_zeros().count() as f64 / volume as f64
}

#[test]
fn dense_grid_through_capability() {
    let mut bitmap = Bitmap3::new(Vector3i::new(2, 3, 4)).unwrap();
    bitmap.set(Vector3i::new(0, 0, 0), true);
    bitmap.set(Vector3i::new(1, 2, 3), true);

    let grid: &dyn BinaryVoxelGrid = &bitmap;
    let set: Vec<Vector3i> = grid.non_zeros().collect();
    assert_eq!(set, vec![Vector3i::new(0, 0, 0), Vector3i::new(1, 2, 3)]);
    assert_eq!(occupied_fraction(grid), 2.0 / 24.0);

    // every enumerator is an independent traversal
    let mut a = grid.non_zeros();
    let mut b = grid.non_zeros();
    assert_eq!(a.next(), b.next());
    assert_eq!(a.next(), Some(Vector3i::new(1, 2, 3)));
    assert_eq!(b.next(), Some(Vector3i::new(1, 2, 3)));
    assert_eq!(a.next(), None);
}

#[test]
fn bounds_and_membership() {
    let bitmap = Bitmap3::new(Vector3i::new(4, 4, 4)).unwrap();
    let bounds = bitmap.grid_bounds();
    assert_eq!(bounds, AxisAlignedBox3i::new(Vector3i::ZERO, Vector3i::new(4, 4, 4)));
    assert!(bitmap.indices().all(|c| bounds.contains(c)));
    assert!(!bounds.contains(Vector3i::new(4, 0, 0)));
    assert_eq!(bitmap.indices().len(), bounds.volume());
}

#[test]
fn linear_index_round_trip() {
    let bitmap = Bitmap3::new(Vector3i::new(5, 7, 3)).unwrap();
    for i in 0..bitmap.len() {
        assert_eq!(bitmap.to_linear(bitmap.to_index(i)), i);
    }
    assert_eq!(
        bitmap.try_to_index(bitmap.len()),
        Err(VoxelError::LinearIndexOutOfBounds(105, 105))
    );
}
