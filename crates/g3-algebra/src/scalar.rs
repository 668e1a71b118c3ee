//! Floating point scalar abstraction shared by every algebraic type.
//!
//! All vector, quaternion and matrix types are generic over [`Scalar`], which is implemented
//! for `f32` and `f64`. The numeric kernels are written once and instantiated per precision.

use num_traits::Float;
use std::fmt::Debug;

/// A floating point type usable as matrix and vector element.
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
    /// Smallest positive representable value (the first subnormal).
    ///
    /// Used as the singularity threshold for matrix inversion.
    fn smallest_positive() -> Self;

    /// Length below which a vector is considered degenerate and normalizes to zero.
    ///
    /// This is the machine epsilon of the precision, so any vector long enough to have a
    /// meaningful direction is normalized.
    fn zero_tolerance() -> Self;

    /// Lossy conversion from a `f64` literal.
    fn from_f64(value: f64) -> Self;

    /// Widening conversion to `f64`, used for error reporting.
    fn as_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($scalar:ty, $bits:ty, $tolerance:expr) => {
        impl Scalar for $scalar {
            #[inline]
            fn smallest_positive() -> Self {
                <$scalar>::from_bits(1 as $bits)
            }

            #[inline]
            fn zero_tolerance() -> Self {
                $tolerance
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $scalar
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_scalar!(f32, u32, f32::EPSILON);
impl_scalar!(f64, u64, f64::EPSILON);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smallest_positive() {
        assert!(f64::smallest_positive() > 0.0);
        assert!(!f64::smallest_positive().is_normal());
        assert_eq!(f64::smallest_positive() / 2.0, 0.0);

        assert!(f32::smallest_positive() > 0.0);
        assert_eq!(f32::smallest_positive() / 2.0, 0.0);
    }

    #[test]
    fn test_zero_tolerance() {
        assert_eq!(f64::zero_tolerance(), f64::EPSILON);
        assert_eq!(f32::zero_tolerance(), f32::EPSILON);
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(f32::from_f64(0.25), 0.25f32);
        assert_eq!(f64::from_f64(0.25), 0.25f64);
    }
}
