//! Quaternion generic over the scalar precision.

use crate::scalar::Scalar;
use crate::vector::{Vector3, Vector4};

/// Rotation quaternion stored as `(x, y, z, w)` with `w` the real part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    /// i component.
    pub x: T,
    /// j component.
    pub y: T,
    /// k component.
    pub z: T,
    /// Real component.
    pub w: T,
}

impl<T: Scalar> Quaternion<T> {
    /// Create a new quaternion from x, y, z, w components.
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Identity quaternion.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Rotation of `angle` radians about `axis`. The axis is normalized first.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let axis = axis.normalized();
        let half = angle * T::from_f64(0.5);
        let s = half.sin();
        Self::new(axis.x * s, axis.y * s, axis.z * s, half.cos())
    }

    /// Decompose into a unit rotation axis and an angle in `[0, 2π]`.
    ///
    /// A rotation with no well defined axis (the identity up to [`Scalar::zero_tolerance`])
    /// reports the x axis.
    pub fn to_axis_angle(&self) -> (Vector3<T>, T) {
        let q = if self.w.abs() > T::one() {
            self.normalized()
        } else {
            *self
        };

        let w = q.w.max(-T::one()).min(T::one());
        let angle = T::from_f64(2.0) * w.acos();
        let den = (T::one() - w * w).sqrt();
        let axis = if den > T::zero_tolerance() {
            Vector3::new(q.x / den, q.y / den, q.z / den)
        } else {
            Vector3::new(T::one(), T::zero(), T::zero())
        };

        (axis, angle)
    }

    /// Components as a 4D vector `(x, y, z, w)`.
    #[inline]
    pub fn to_vector4(self) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, self.w)
    }

    /// Dot product of the quaternions seen as 4D vectors.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.to_vector4().dot(rhs.to_vector4())
    }

    /// Quaternion norm.
    #[inline]
    pub fn length(self) -> T {
        self.to_vector4().length()
    }

    /// Unit-length copy. Degenerate quaternions normalize to the identity.
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length > T::zero_tolerance() {
            Self::new(
                self.x / length,
                self.y / length,
                self.z / length,
                self.w / length,
            )
        } else {
            Self::identity()
        }
    }

    /// Normalize in place, see [`Self::normalized`].
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Conjugate `(-x, -y, -z, w)`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// True if every component is within `epsilon` of `other`.
    #[inline]
    pub fn epsilon_equal(self, other: Self, epsilon: T) -> bool {
        self.to_vector4()
            .epsilon_equal(other.to_vector4(), epsilon)
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// Hamilton product.
impl<T: Scalar> std::ops::Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

#[cfg(feature = "approx")]
impl<T: Scalar + approx::AbsDiffEq<Epsilon = T>> approx::AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_vector4().abs_diff_eq(&other.to_vector4(), epsilon)
    }
}

#[cfg(feature = "approx")]
impl<T: Scalar + approx::RelativeEq<Epsilon = T>> approx::RelativeEq for Quaternion<T> {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.to_vector4()
            .relative_eq(&other.to_vector4(), epsilon, max_relative)
    }
}

macro_rules! impl_glam_conversions {
    ($scalar:ty, $glam_type:ty) => {
        impl From<$glam_type> for Quaternion<$scalar> {
            #[inline]
            fn from(q: $glam_type) -> Self {
                Self::new(q.x, q.y, q.z, q.w)
            }
        }

        impl From<Quaternion<$scalar>> for $glam_type {
            #[inline]
            fn from(q: Quaternion<$scalar>) -> Self {
                <$glam_type>::from_xyzw(q.x, q.y, q.z, q.w)
            }
        }
    };
}

impl_glam_conversions!(f32, glam::Quat);
impl_glam_conversions!(f64, glam::DQuat);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_axis_angle_roundtrip() {
        let axis = Vector3::new(1.0f64, 2.0, -0.5).normalized();
        let q = Quaternion::from_axis_angle(axis, 1.2);
        assert_relative_eq!(q.length(), 1.0, epsilon = EPSILON);

        let (axis_out, angle_out) = q.to_axis_angle();
        assert_relative_eq!(angle_out, 1.2, epsilon = EPSILON);
        assert_relative_eq!(axis_out.x, axis.x, epsilon = EPSILON);
        assert_relative_eq!(axis_out.y, axis.y, epsilon = EPSILON);
        assert_relative_eq!(axis_out.z, axis.z, epsilon = EPSILON);
    }

    #[test]
    fn test_identity_axis_angle() {
        let (axis, angle) = Quaternion::<f32>::identity().to_axis_angle();
        assert_eq!(angle, 0.0);
        assert_eq!(axis, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_normalize() {
        let mut q = Quaternion::new(0.0f64, 0.0, 3.0, 4.0);
        q.normalize();
        assert_relative_eq!(q.z, 0.6, epsilon = EPSILON);
        assert_relative_eq!(q.w, 0.8, epsilon = EPSILON);

        let degenerate = Quaternion::new(0.0f32, 0.0, 0.0, 0.0).normalized();
        assert_eq!(degenerate, Quaternion::identity());
    }

    #[test]
    fn test_mul_matches_glam() {
        let a = Quaternion::from_axis_angle(Vector3::new(0.0f64, 0.0, 1.0), 0.3);
        let b = Quaternion::from_axis_angle(Vector3::new(1.0f64, 1.0, 0.0), -0.7);
        let ours = a * b;
        let theirs = glam::DQuat::from(a) * glam::DQuat::from(b);
        assert!(ours.epsilon_equal(Quaternion::from(theirs), EPSILON));

        // q * conj(q) is the identity for unit quaternions
        assert!((a * a.conjugate()).epsilon_equal(Quaternion::identity(), EPSILON));
    }

    #[cfg(feature = "approx")]
    #[test]
    fn test_approx_traits() {
        use approx::{abs_diff_eq, assert_abs_diff_eq};

        let axis = Vector3::new(0.0f64, 0.6, 0.8);
        let ours = Quaternion::from_axis_angle(axis, 0.9);
        let theirs = Quaternion::from(glam::DQuat::from_axis_angle(axis.into(), 0.9));
        assert_abs_diff_eq!(ours, theirs, epsilon = EPSILON);
        assert_relative_eq!(ours, theirs, max_relative = EPSILON);
        assert!(!abs_diff_eq!(ours, ours.conjugate(), epsilon = 1e-6));
    }
}
