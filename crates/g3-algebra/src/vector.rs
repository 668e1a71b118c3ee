//! Small fixed-size vectors generic over the scalar precision.
//!
//! The common surface (construction, arithmetic, dot product, length) is generated by
//! `define_vector_type!` so that the 3 and 4 component vectors stay in lockstep. Conversions
//! to and from the corresponding `glam` types are generated per precision.

use crate::scalar::Scalar;

/// Macro to define a vector type generic over [`Scalar`].
///
/// # Arguments
///
/// * `name`   - The name of the vector type.
/// * `len`    - The number of components.
/// * `fields` - The component names, in storage order.
macro_rules! define_vector_type {
    ($(#[$meta:meta])* $name:ident, $len:literal, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name<T> {
            $(
            #[allow(missing_docs)]
            pub $field: T,
            )+
        }

        impl<T: Scalar> $name<T> {
            /// Create a new vector from its components.
            #[inline]
            pub fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Zero vector.
            #[inline]
            pub fn zero() -> Self {
                Self { $($field: T::zero()),+ }
            }

            /// Vector with every component set to `value`.
            #[inline]
            pub fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            /// Create a vector from an array.
            #[inline]
            pub fn from_array(arr: [T; $len]) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert the vector to an array.
            #[inline]
            pub fn to_array(self) -> [T; $len] {
                [$(self.$field),+]
            }

            /// Dot product between two vectors.
            #[inline]
            pub fn dot(self, rhs: Self) -> T {
                T::zero() $(+ self.$field * rhs.$field)+
            }

            /// Squared Euclidean length.
            #[inline]
            pub fn length_squared(self) -> T {
                self.dot(self)
            }

            /// Euclidean length (magnitude) of the vector.
            #[inline]
            pub fn length(self) -> T {
                self.length_squared().sqrt()
            }

            /// Unit-length copy of the vector.
            ///
            /// Vectors shorter than [`Scalar::zero_tolerance`] normalize to the zero vector
            /// instead of producing NaNs.
            #[inline]
            pub fn normalized(self) -> Self {
                let length = self.length();
                if length > T::zero_tolerance() {
                    self / length
                } else {
                    Self::zero()
                }
            }

            /// Normalize the vector in place, see [`Self::normalized`].
            #[inline]
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }

            /// True if every component is within `epsilon` of the matching component of `other`.
            #[inline]
            pub fn epsilon_equal(self, other: Self, epsilon: T) -> bool {
                true $(&& (self.$field - other.$field).abs() <= epsilon)+
            }

            /// Check if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$field.is_finite())+
            }
        }

        impl<T: Scalar> From<[T; $len]> for $name<T> {
            #[inline]
            fn from(arr: [T; $len]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: Scalar> From<$name<T>> for [T; $len] {
            #[inline]
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T> std::ops::Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                let mut i = 0usize;
                $(
                if index == i {
                    return &self.$field;
                }
                i += 1;
                )+
                panic!("index out of bounds: the len is {} but the index is {}", i, index)
            }
        }

        impl<T> std::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                let mut i = 0usize;
                $(
                if index == i {
                    return &mut self.$field;
                }
                i += 1;
                )+
                panic!("index out of bounds: the len is {} but the index is {}", i, index)
            }
        }

        impl<T: Scalar> std::ops::Add for $name<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Scalar> std::ops::Sub for $name<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Scalar> std::ops::Mul<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Scalar> std::ops::Div<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Scalar> std::ops::Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Scalar> std::ops::AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> std::ops::SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar> std::ops::DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        #[cfg(feature = "approx")]
        impl<T: Scalar + approx::AbsDiffEq<Epsilon = T>> approx::AbsDiffEq for $name<T> {
            type Epsilon = T;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                true $(&& self.$field.abs_diff_eq(&other.$field, epsilon))+
            }
        }

        #[cfg(feature = "approx")]
        impl<T: Scalar + approx::RelativeEq<Epsilon = T>> approx::RelativeEq for $name<T> {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            #[inline]
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                true $(&& self.$field.relative_eq(&other.$field, epsilon, max_relative))+
            }
        }
    };
}

define_vector_type!(
    /// 3D vector.
    Vector3,
    3,
    [x, y, z]
);

define_vector_type!(
    /// 4D vector, used for matrix rows and homogeneous points.
    Vector4,
    4,
    [x, y, z, w]
);

impl<T: Scalar> Vector3<T> {
    /// Cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Extend to a 4D vector with the given `w` component.
    #[inline]
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl<T: Scalar> Vector4<T> {
    /// The `(x, y, z)` part of the vector.
    #[inline]
    pub fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

// Conversions to and from the glam vector of the same precision.
macro_rules! impl_glam_conversions {
    ($name:ident<$scalar:ty>, $glam_type:ty, [$($field:ident),+]) => {
        impl From<$glam_type> for $name<$scalar> {
            #[inline]
            fn from(v: $glam_type) -> Self {
                Self { $($field: v.$field),+ }
            }
        }

        impl From<$name<$scalar>> for $glam_type {
            #[inline]
            fn from(v: $name<$scalar>) -> Self {
                <$glam_type>::new($(v.$field),+)
            }
        }
    };
}

impl_glam_conversions!(Vector3<f32>, glam::Vec3, [x, y, z]);
impl_glam_conversions!(Vector3<f64>, glam::DVec3, [x, y, z]);
impl_glam_conversions!(Vector4<f32>, glam::Vec4, [x, y, z, w]);
impl_glam_conversions!(Vector4<f64>, glam::DVec4, [x, y, z, w]);
