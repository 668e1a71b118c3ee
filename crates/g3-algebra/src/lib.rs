#![deny(missing_docs)]
//! Affine matrix algebra for g3.
//!
//! This crate provides:
//! - A [`Scalar`] abstraction over `f32` and `f64`
//! - Small vector and quaternion types ([`Vector3`], [`Vector4`], [`Quaternion`])
//! - A 4x4 matrix ([`Matrix4`]) with closed-form determinant and inverse, and
//!   translation / rotation / scale (TRS) composition and decomposition
//!
//! Every type is generic over the precision; the `F32` / `F64` aliases name the two
//! instantiations.

/// Error types for the algebra module.
pub mod error;

mod matrix;
mod quat;
mod scalar;
mod vector;

pub use error::AlgebraError;
pub use matrix::{Matrix4, VectorLayout};
pub use quat::Quaternion;
pub use scalar::Scalar;
pub use vector::{Vector3, Vector4};

// Type aliases for explicit precision (single precision / f32)
/// 3D vector (single precision).
pub type Vector3F32 = Vector3<f32>;
/// 4D vector (single precision).
pub type Vector4F32 = Vector4<f32>;
/// Quaternion (single precision).
pub type QuaternionF32 = Quaternion<f32>;
/// 4x4 matrix (single precision).
pub type Matrix4F32 = Matrix4<f32>;

// Type aliases for explicit precision (double precision / f64)
/// 3D vector (double precision).
pub type Vector3F64 = Vector3<f64>;
/// 4D vector (double precision).
pub type Vector4F64 = Vector4<f64>;
/// Quaternion (double precision).
pub type QuaternionF64 = Quaternion<f64>;
/// 4x4 matrix (double precision).
pub type Matrix4F64 = Matrix4<f64>;
