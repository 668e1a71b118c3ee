//! 4x4 matrix generic over the scalar precision.
//!
//! The matrix is stored as four row vectors. Vectors are transformed as columns on the right,
//! `result = M * v`, so each output component is the dot product of a matrix row with `v`.
//! When the matrix is used as an affine transform the rotation and scale live in the upper-left
//! 3x3 block and the translation in the first three components of row 3.
//!
//! The flat layout used by [`Matrix4::to_buffer`], [`Matrix4::from_array`] and linear indexing is
//! row-major: element `(row, col)` is at `4 * row + col`.

use super::VectorLayout;
use crate::error::AlgebraError;
use crate::quat::Quaternion;
use crate::scalar::Scalar;
use crate::vector::{Vector3, Vector4};

/// 4x4 matrix with row-major storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4<T> {
    rows: [Vector4<T>; 4],
}

impl<T: Scalar> Matrix4<T> {
    /// Create a matrix from sixteen elements given in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        m00: T,
        m01: T,
        m02: T,
        m03: T,
        m10: T,
        m11: T,
        m12: T,
        m13: T,
        m20: T,
        m21: T,
        m22: T,
        m23: T,
        m30: T,
        m31: T,
        m32: T,
        m33: T,
    ) -> Self {
        Self::from_rows(
            Vector4::new(m00, m01, m02, m03),
            Vector4::new(m10, m11, m12, m13),
            Vector4::new(m20, m21, m22, m23),
            Vector4::new(m30, m31, m32, m33),
        )
    }

    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        let l = T::one();
        Self::from_diagonal(l, l, l, l)
    }

    /// Zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self {
            rows: [Vector4::zero(); 4],
        }
    }

    /// Create a diagonal matrix. Off-diagonal entries are zero.
    #[inline]
    pub fn from_diagonal(m00: T, m11: T, m22: T, m33: T) -> Self {
        let o = T::zero();
        Self::new(m00, o, o, o, o, m11, o, o, o, o, m22, o, o, o, o, m33)
    }

    /// Create a matrix from its four rows.
    #[inline]
    pub fn from_rows(row0: Vector4<T>, row1: Vector4<T>, row2: Vector4<T>, row3: Vector4<T>) -> Self {
        Self {
            rows: [row0, row1, row2, row3],
        }
    }

    /// Create a matrix from its four columns.
    #[inline]
    pub fn from_cols(col0: Vector4<T>, col1: Vector4<T>, col2: Vector4<T>, col3: Vector4<T>) -> Self {
        Self::from_rows(col0, col1, col2, col3).transpose()
    }

    /// Create a matrix from four vectors interpreted as rows or columns.
    #[inline]
    pub fn from_vectors(vectors: [Vector4<T>; 4], layout: VectorLayout) -> Self {
        let [v0, v1, v2, v3] = vectors;
        match layout {
            VectorLayout::Rows => Self::from_rows(v0, v1, v2, v3),
            VectorLayout::Columns => Self::from_cols(v0, v1, v2, v3),
        }
    }

    /// Create a matrix from a row-major array of 16 elements.
    #[inline]
    pub fn from_array(arr: &[T; 16]) -> Self {
        Self::from_fn_linear(|i| arr[i])
    }

    /// Create a matrix from a `[row][col]` array.
    #[inline]
    pub fn from_rows_2d(arr: &[[T; 4]; 4]) -> Self {
        Self::from_fn(|r, c| arr[r][c])
    }

    /// Create a matrix from a row-major slice holding exactly 16 elements.
    pub fn from_slice(slice: &[T]) -> Result<Self, AlgebraError> {
        let arr: &[T; 16] =
            slice
                .try_into()
                .map_err(|_| AlgebraError::InvalidBufferLength {
                    expected: 16,
                    actual: slice.len(),
                })?;
        Ok(Self::from_array(arr))
    }

    /// Create a matrix by calling `f` with every row-major linear index `0..16`.
    #[inline]
    pub fn from_fn_linear(mut f: impl FnMut(usize) -> T) -> Self {
        Self::from_fn(|r, c| f(4 * r + c))
    }

    /// Create a matrix by calling `f` with every `(row, col)` pair, row by row.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut row = |r: usize| Vector4::new(f(r, 0), f(r, 1), f(r, 2), f(r, 3));
        let row0 = row(0);
        let row1 = row(1);
        let row2 = row(2);
        let row3 = row(3);
        Self::from_rows(row0, row1, row2, row3)
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..4`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.rows[row][col]
    }

    /// Set the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..4`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.rows[row][col] = value;
    }

    /// Element at row-major linear index `index` (`4 * row + col`).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..16`.
    #[inline]
    pub fn get_linear(&self, index: usize) -> T {
        self[index]
    }

    /// Set the element at row-major linear index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..16`.
    #[inline]
    pub fn set_linear(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    /// The `i`-th row.
    #[inline]
    pub fn row(&self, i: usize) -> Vector4<T> {
        self.rows[i]
    }

    /// The `i`-th column.
    #[inline]
    pub fn column(&self, i: usize) -> Vector4<T> {
        Vector4::new(
            self.rows[0][i],
            self.rows[1][i],
            self.rows[2][i],
            self.rows[3][i],
        )
    }

    /// The elements in row-major order.
    #[inline]
    pub fn to_buffer(&self) -> [T; 16] {
        let mut buf = [T::zero(); 16];
        self.write_to_buffer(&mut buf);
        buf
    }

    /// Write the elements in row-major order into `buf`.
    #[inline]
    pub fn write_to_buffer(&self, buf: &mut [T; 16]) {
        for (chunk, row) in buf.chunks_exact_mut(4).zip(self.rows.iter()) {
            chunk.copy_from_slice(&row.to_array());
        }
    }

    /// The elements as a `[row][col]` array.
    #[inline]
    pub fn to_rows_2d(&self) -> [[T; 4]; 4] {
        self.rows.map(Vector4::to_array)
    }

    /// Transform `v`, equivalent to `self * v`.
    #[inline]
    pub fn transform(&self, v: Vector4<T>) -> Vector4<T> {
        Vector4::new(
            self.rows[0].dot(v),
            self.rows[1].dot(v),
            self.rows[2].dot(v),
            self.rows[3].dot(v),
        )
    }

    /// Transform `v` and write the result into `out`.
    #[inline]
    pub fn transform_into(&self, v: &Vector4<T>, out: &mut Vector4<T>) {
        out.x = self.rows[0].dot(*v);
        out.y = self.rows[1].dot(*v);
        out.z = self.rows[2].dot(*v);
        out.w = self.rows[3].dot(*v);
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let [m00, m01, m02, m03] = self.rows[0].to_array();
        let [m10, m11, m12, m13] = self.rows[1].to_array();
        let [m20, m21, m22, m23] = self.rows[2].to_array();
        let [m30, m31, m32, m33] = self.rows[3].to_array();

        // 2x2 minors of the bottom two rows
        let s23 = m22 * m33 - m23 * m32;
        let s13 = m21 * m33 - m23 * m31;
        let s12 = m21 * m32 - m22 * m31;
        let s03 = m20 * m33 - m23 * m30;
        let s02 = m20 * m32 - m22 * m30;
        let s01 = m20 * m31 - m21 * m30;

        m00 * (m11 * s23 - m12 * s13 + m13 * s12) - m01 * (m10 * s23 - m12 * s03 + m13 * s02)
            + m02 * (m10 * s13 - m11 * s03 + m13 * s01)
            - m03 * (m10 * s12 - m11 * s02 + m12 * s01)
    }

    /// Transpose the matrix. Exact, only permutes entries.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_fn(|r, c| self.rows[c][r])
    }

    /// Inverse via the adjugate and the determinant.
    ///
    /// This is a closed-form inverse without pivoting or refinement: a matrix whose
    /// determinant is small but not below the threshold inverts to a poorly conditioned result.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::SingularMatrix`] if the magnitude of the determinant is below
    /// [`Scalar::smallest_positive`].
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        let [m00, m01, m02, m03] = self.rows[0].to_array();
        let [m10, m11, m12, m13] = self.rows[1].to_array();
        let [m20, m21, m22, m23] = self.rows[2].to_array();
        let [m30, m31, m32, m33] = self.rows[3].to_array();

        // adjugate, i.e. the transposed cofactor matrix
        let a00 = m11 * m22 * m33 - m11 * m23 * m32 - m21 * m12 * m33 + m21 * m13 * m32
            + m31 * m12 * m23
            - m31 * m13 * m22;
        let a01 = -m01 * m22 * m33 + m01 * m23 * m32 + m21 * m02 * m33 - m21 * m03 * m32
            - m31 * m02 * m23
            + m31 * m03 * m22;
        let a02 = m01 * m12 * m33 - m01 * m13 * m32 - m11 * m02 * m33 + m11 * m03 * m32
            + m31 * m02 * m13
            - m31 * m03 * m12;
        let a03 = -m01 * m12 * m23 + m01 * m13 * m22 + m11 * m02 * m23 - m11 * m03 * m22
            - m21 * m02 * m13
            + m21 * m03 * m12;

        let a10 = -m10 * m22 * m33 + m10 * m23 * m32 + m20 * m12 * m33 - m20 * m13 * m32
            - m30 * m12 * m23
            + m30 * m13 * m22;
        let a11 = m00 * m22 * m33 - m00 * m23 * m32 - m20 * m02 * m33 + m20 * m03 * m32
            + m30 * m02 * m23
            - m30 * m03 * m22;
        let a12 = -m00 * m12 * m33 + m00 * m13 * m32 + m10 * m02 * m33 - m10 * m03 * m32
            - m30 * m02 * m13
            + m30 * m03 * m12;
        let a13 = m00 * m12 * m23 - m00 * m13 * m22 - m10 * m02 * m23 + m10 * m03 * m22
            + m20 * m02 * m13
            - m20 * m03 * m12;

        let a20 = m10 * m21 * m33 - m10 * m23 * m31 - m20 * m11 * m33 + m20 * m13 * m31
            + m30 * m11 * m23
            - m30 * m13 * m21;
        let a21 = -m00 * m21 * m33 + m00 * m23 * m31 + m20 * m01 * m33 - m20 * m03 * m31
            - m30 * m01 * m23
            + m30 * m03 * m21;
        let a22 = m00 * m11 * m33 - m00 * m13 * m31 - m10 * m01 * m33 + m10 * m03 * m31
            + m30 * m01 * m13
            - m30 * m03 * m11;
        let a23 = -m00 * m11 * m23 + m00 * m13 * m21 + m10 * m01 * m23 - m10 * m03 * m21
            - m20 * m01 * m13
            + m20 * m03 * m11;

        let a30 = -m10 * m21 * m32 + m10 * m22 * m31 + m20 * m11 * m32 - m20 * m12 * m31
            - m30 * m11 * m22
            + m30 * m12 * m21;
        let a31 = m00 * m21 * m32 - m00 * m22 * m31 - m20 * m01 * m32 + m20 * m02 * m31
            + m30 * m01 * m22
            - m30 * m02 * m21;
        let a32 = -m00 * m11 * m32 + m00 * m12 * m31 + m10 * m01 * m32 - m10 * m02 * m31
            - m30 * m01 * m12
            + m30 * m02 * m11;
        let a33 = m00 * m11 * m22 - m00 * m12 * m21 - m10 * m01 * m22 + m10 * m02 * m21
            + m20 * m01 * m12
            - m20 * m02 * m11;

        let det = m00 * a00 + m01 * a10 + m02 * a20 + m03 * a30;

        if det.abs() < T::smallest_positive() {
            log::debug!("Rejecting inverse of singular matrix: determinant {:e}", det.as_f64());
            return Err(AlgebraError::SingularMatrix(det.as_f64()));
        }

        let inv_det = T::one() / det;

        Ok(Self::new(
            a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33,
        ) * inv_det)
    }

    /// True if every row is componentwise within `epsilon` of the matching row of `other`.
    #[inline]
    pub fn epsilon_equal(&self, other: &Self, epsilon: T) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.epsilon_equal(*b, epsilon))
    }

    /// Divide every element by the determinant, in place.
    ///
    /// This is a uniform rescale by `1 / det`, not an orthonormalization. A singular matrix
    /// yields non-finite elements.
    pub fn normalize(&mut self) {
        let det = self.determinant();
        for row in self.rows.iter_mut() {
            *row /= det;
        }
    }

    /// Copy of the matrix divided by its determinant, see [`Self::normalize`].
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut m = *self;
        m.normalize();
        m
    }

    /// Check if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.rows.iter().all(|r| r.is_finite())
    }

    // ---- translation ----

    /// Translation by `v`: the identity with row 3's `(x, y, z)` set to `v`.
    #[inline]
    pub fn from_translation(v: Vector3<T>) -> Self {
        let mut m = Self::identity();
        m.rows[3] = v.extend(T::one());
        m
    }

    /// Row 3's `(x, y, z)`.
    #[inline]
    pub fn extract_translation(&self) -> Vector3<T> {
        self.rows[3].xyz()
    }

    /// Zero row 3's `(x, y, z)` in place.
    #[inline]
    pub fn clear_translation(&mut self) {
        let w = self.rows[3].w;
        self.rows[3] = Vector4::new(T::zero(), T::zero(), T::zero(), w);
    }

    /// Copy with the translation cleared, see [`Self::clear_translation`].
    #[inline]
    pub fn without_translation(&self) -> Self {
        let mut m = *self;
        m.clear_translation();
        m
    }

    // ---- scale ----

    /// Uniform scale by `scale` along the three axes.
    #[inline]
    pub fn from_uniform_scale(scale: T) -> Self {
        Self::from_scale(Vector3::splat(scale))
    }

    /// Per-axis scale: the identity with the first three diagonal entries set to `scale`.
    #[inline]
    pub fn from_scale(scale: Vector3<T>) -> Self {
        Self::from_diagonal(scale.x, scale.y, scale.z, T::one())
    }

    /// Per-axis scale magnitude: the length of each of the first three rows' `(x, y, z)`.
    ///
    /// Sign and shear are not recovered.
    #[inline]
    pub fn extract_scale(&self) -> Vector3<T> {
        Vector3::new(
            self.rows[0].xyz().length(),
            self.rows[1].xyz().length(),
            self.rows[2].xyz().length(),
        )
    }

    /// Normalize the `(x, y, z)` part of the first three rows in place, keeping each row's `w`.
    pub fn clear_scale(&mut self) {
        for row in self.rows.iter_mut().take(3) {
            *row = row.xyz().normalized().extend(row.w);
        }
    }

    /// Copy with the scale cleared, see [`Self::clear_scale`].
    #[inline]
    pub fn without_scale(&self) -> Self {
        let mut m = *self;
        m.clear_scale();
        m
    }

    // ---- rotation ----

    /// Rotation about `axis` built with the Rodrigues formula for the negated `angle`.
    ///
    /// The axis is normalized first. Because vectors multiply on the right, the negated angle
    /// makes the result act on row vectors (`v * M`) as a rotation by `angle`, and it is the
    /// transform [`Self::extract_rotation`] maps back to the quaternion of `(axis, angle)`.
    #[rustfmt::skip]
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let axis = axis.normalized();
        let (sin, cos) = (-angle).sin_cos();
        let t = T::one() - cos;

        let txx = t * axis.x * axis.x;
        let txy = t * axis.x * axis.y;
        let txz = t * axis.x * axis.z;
        let tyy = t * axis.y * axis.y;
        let tyz = t * axis.y * axis.z;
        let tzz = t * axis.z * axis.z;

        let sinx = sin * axis.x;
        let siny = sin * axis.y;
        let sinz = sin * axis.z;

        let (o, l) = (T::zero(), T::one());
        Self::new(
            txx + cos, txy - sinz, txz + siny, o,
            txy + sinz, tyy + cos, tyz - sinx, o,
            txz - siny, tyz + sinx, tzz + cos, o,
            o, o, o, l,
        )
    }

    /// Rotation equivalent to the unit quaternion `q`, through its axis-angle form.
    #[inline]
    pub fn from_quaternion(q: Quaternion<T>) -> Self {
        let (axis, angle) = q.to_axis_angle();
        Self::from_axis_angle(axis, angle)
    }

    /// Recover the rotation of the upper-left 3x3 block as a unit quaternion.
    ///
    /// Rows are normalized first so that a positive per-axis scale does not affect the result.
    /// The block is assumed to be orthonormal after that, other input gives an unspecified
    /// (but finite) quaternion. When the trace is not positive, the branch is chosen by the
    /// largest diagonal entry so the divisor stays away from zero.
    ///
    /// The branch is picked on the sign of the trace alone. A half turn about a coordinate axis
    /// has an exactly zero trace and takes the diagonal branches, but a half turn about any
    /// other axis usually leaves a tiny positive trace after rounding. The trace branch then
    /// divides by a value near zero and the result can be far from the true rotation. Rotations
    /// a little short of a half turn are recovered accurately.
    pub fn extract_rotation(&self) -> Quaternion<T> {
        let r0 = self.rows[0].xyz().normalized();
        let r1 = self.rows[1].xyz().normalized();
        let r2 = self.rows[2].xyz().normalized();

        let quarter = T::from_f64(0.25);
        let two = T::from_f64(2.0);

        let trace = quarter * (r0.x + r1.y + r2.z + T::one());

        let q = if trace > T::zero() {
            let sq = trace.sqrt();
            let inv = T::one() / (T::from_f64(4.0) * sq);
            Quaternion::new(
                (r1.z - r2.y) * inv,
                (r2.x - r0.z) * inv,
                (r0.y - r1.x) * inv,
                sq,
            )
        } else if r0.x > r1.y && r0.x > r2.z {
            let s = two * (T::one() + r0.x - r1.y - r2.z).sqrt();
            let inv = T::one() / s;
            Quaternion::new(
                quarter * s,
                (r0.y + r1.x) * inv,
                (r0.z + r2.x) * inv,
                (r1.z - r2.y) * inv,
            )
        } else if r1.y > r2.z {
            let s = two * (T::one() + r1.y - r0.x - r2.z).sqrt();
            let inv = T::one() / s;
            Quaternion::new(
                (r0.y + r1.x) * inv,
                quarter * s,
                (r1.z + r2.y) * inv,
                (r2.x - r0.z) * inv,
            )
        } else {
            let s = two * (T::one() + r2.z - r0.x - r1.y).sqrt();
            let inv = T::one() / s;
            Quaternion::new(
                (r0.z + r2.x) * inv,
                (r1.z + r2.y) * inv,
                quarter * s,
                (r0.y - r1.x) * inv,
            )
        };

        q.normalized()
    }

    /// Replace the first three diagonal entries by the length of their row's `(x, y, z)`,
    /// in place. Off-diagonal entries are left untouched.
    pub fn clear_rotation(&mut self) {
        let scale = self.extract_scale();
        self.rows[0].x = scale.x;
        self.rows[1].y = scale.y;
        self.rows[2].z = scale.z;
    }

    /// Copy with the rotation cleared, see [`Self::clear_rotation`].
    #[inline]
    pub fn without_rotation(&self) -> Self {
        let mut m = *self;
        m.clear_rotation();
        m
    }
}

impl<T: Scalar> Default for Matrix4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> std::ops::Index<(usize, usize)> for Matrix4<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Matrix4<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}

impl<T> std::ops::Index<usize> for Matrix4<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index / 4][index % 4]
    }
}

impl<T> std::ops::IndexMut<usize> for Matrix4<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index / 4][index % 4]
    }
}

impl<T: Scalar> From<[T; 16]> for Matrix4<T> {
    #[inline]
    fn from(arr: [T; 16]) -> Self {
        Self::from_array(&arr)
    }
}

impl<T: Scalar> From<Matrix4<T>> for [T; 16] {
    #[inline]
    fn from(m: Matrix4<T>) -> Self {
        m.to_buffer()
    }
}

// Matrix-matrix multiplication, (AB)_ij = sum_k A_ik B_kj.
impl<T: Scalar> std::ops::Mul<Matrix4<T>> for Matrix4<T> {
    type Output = Matrix4<T>;

    #[inline]
    fn mul(self, rhs: Matrix4<T>) -> Self::Output {
        let cols = [rhs.column(0), rhs.column(1), rhs.column(2), rhs.column(3)];
        Self::from_fn(|r, c| self.rows[r].dot(cols[c]))
    }
}

// Matrix-vector multiplication.
impl<T: Scalar> std::ops::Mul<Vector4<T>> for Matrix4<T> {
    type Output = Vector4<T>;

    #[inline]
    fn mul(self, rhs: Vector4<T>) -> Self::Output {
        self.transform(rhs)
    }
}

impl<T: Scalar> std::ops::Mul<T> for Matrix4<T> {
    type Output = Matrix4<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self {
            rows: self.rows.map(|r| r * rhs),
        }
    }
}

impl<T: Scalar> std::ops::Add<Matrix4<T>> for Matrix4<T> {
    type Output = Matrix4<T>;

    #[inline]
    fn add(self, rhs: Matrix4<T>) -> Self::Output {
        let [a0, a1, a2, a3] = self.rows;
        let [b0, b1, b2, b3] = rhs.rows;
        Self::from_rows(a0 + b0, a1 + b1, a2 + b2, a3 + b3)
    }
}

impl<T: Scalar> std::ops::Sub<Matrix4<T>> for Matrix4<T> {
    type Output = Matrix4<T>;

    #[inline]
    fn sub(self, rhs: Matrix4<T>) -> Self::Output {
        let [a0, a1, a2, a3] = self.rows;
        let [b0, b1, b2, b3] = rhs.rows;
        Self::from_rows(a0 - b0, a1 - b1, a2 - b2, a3 - b3)
    }
}

#[cfg(feature = "approx")]
impl<T: Scalar + approx::AbsDiffEq<Epsilon = T>> approx::AbsDiffEq for Matrix4<T> {
    type Epsilon = T;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: Scalar + approx::RelativeEq<Epsilon = T>> approx::RelativeEq for Matrix4<T> {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

// Scalar multiplication (reverse) and glam interop, per precision.
macro_rules! impl_precision {
    ($scalar:ty, $glam_mat:ty) => {
        impl std::ops::Mul<Matrix4<$scalar>> for $scalar {
            type Output = Matrix4<$scalar>;

            #[inline]
            fn mul(self, rhs: Matrix4<$scalar>) -> Self::Output {
                rhs * self
            }
        }

        // glam matrices are column-major, the element at (row, col) is preserved.
        impl From<$glam_mat> for Matrix4<$scalar> {
            #[inline]
            fn from(m: $glam_mat) -> Self {
                Self::from_cols(
                    m.x_axis.into(),
                    m.y_axis.into(),
                    m.z_axis.into(),
                    m.w_axis.into(),
                )
            }
        }

        impl From<Matrix4<$scalar>> for $glam_mat {
            #[inline]
            fn from(m: Matrix4<$scalar>) -> Self {
                <$glam_mat>::from_cols(
                    m.column(0).into(),
                    m.column(1).into(),
                    m.column(2).into(),
                    m.column(3).into(),
                )
            }
        }
    };
}

impl_precision!(f32, glam::Mat4);
impl_precision!(f64, glam::DMat4);
