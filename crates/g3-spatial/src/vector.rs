/// Integer 3D vector, used as a grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Vector3i {
    /// x coordinate
    pub x: i32,
    /// y coordinate
    pub y: i32,
    /// z coordinate
    pub z: i32,
}

impl Vector3i {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Vector with all components set to one.
    pub const ONE: Self = Self { x: 1, y: 1, z: 1 };

    /// Create a new Vector3i from its components.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Create a new Vector3i from an array of 3 i32 values.
    #[inline]
    pub fn from_array(array: [i32; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }

    /// Convert to an array.
    #[inline]
    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[i32; 3]> for Vector3i {
    #[inline]
    fn from(array: [i32; 3]) -> Self {
        Self::from_array(array)
    }
}

impl std::ops::Add for Vector3i {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3i {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector3i_from_array() {
        let v = Vector3i::from([1, 2, 3]);
        assert_eq!(v, Vector3i::new(1, 2, 3));
        assert_eq!(v.to_array(), [1, 2, 3]);
    }

    #[test]
    fn test_vector3i_arithmetic() {
        let v = Vector3i::new(1, 2, 3);
        assert_eq!(v + Vector3i::ONE, Vector3i::new(2, 3, 4));
        assert_eq!(v - v, Vector3i::ZERO);
    }
}
