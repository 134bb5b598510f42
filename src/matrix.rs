//! Matrices.

use crate::num::Float;
use crate::quaternion::Quaternion;
use crate::vector::{Vector3, Vector4};
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

/// A 4x4 matrix with row-major storage: row `r`, column `c` sits at flat
/// offset `r * 4 + c`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix4<T: Float> {
    rows: [Vector4<T>; 4],
}

// Safety: `repr(C)` over a `repr(C)` array of vectors whose fields are all
// the same scalar type, so there is no padding.
unsafe impl<T: Float + Zeroable> Zeroable for Matrix4<T> {}
unsafe impl<T: Float + Pod> Pod for Matrix4<T> {}

impl<T: Float> Matrix4<T> {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_rows(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::unit_w(),
        )
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self {
            rows: [Vector4::zeros(); 4],
        }
    }

    /// Creates the all-NaN sentinel matrix used to signal that an operation
    /// has no well-defined result for its input.
    #[inline]
    pub const fn nan() -> Self {
        Self {
            rows: [Vector4::same(T::NAN); 4],
        }
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(
        row_1: Vector4<T>,
        row_2: Vector4<T>,
        row_3: Vector4<T>,
        row_4: Vector4<T>,
    ) -> Self {
        Self {
            rows: [row_1, row_2, row_3, row_4],
        }
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4<T>) -> Self {
        Self::from_rows(
            Vector4::new(diagonal.x(), T::ZERO, T::ZERO, T::ZERO),
            Vector4::new(T::ZERO, diagonal.y(), T::ZERO, T::ZERO),
            Vector4::new(T::ZERO, T::ZERO, diagonal.z(), T::ZERO),
            Vector4::new(T::ZERO, T::ZERO, T::ZERO, diagonal.w()),
        )
    }

    /// Creates the outer product of the two given vectors, with element
    /// `(i, j)` equal to `a[i] * b[j]`.
    #[inline]
    pub fn from_outer_product(a: &Vector4<T>, b: &Vector4<T>) -> Self {
        Self::from_rows(b.mul(a.x()), b.mul(a.y()), b.mul(a.z()), b.mul(a.w()))
    }

    /// Creates a homogeneous transform translating by the given vector.
    #[inline]
    pub const fn from_translation(translation: &Vector3<T>) -> Self {
        Self::from_rows(
            Vector4::new(T::ONE, T::ZERO, T::ZERO, translation.x()),
            Vector4::new(T::ZERO, T::ONE, T::ZERO, translation.y()),
            Vector4::new(T::ZERO, T::ZERO, T::ONE, translation.z()),
            Vector4::unit_w(),
        )
    }

    /// Creates a homogeneous transform scaling each axis by the corresponding
    /// component of the given vector.
    #[inline]
    pub const fn from_scaling(scaling: &Vector3<T>) -> Self {
        Self::from_diagonal(&Vector4::new(
            scaling.x(),
            scaling.y(),
            scaling.z(),
            T::ONE,
        ))
    }

    /// Creates a homogeneous transform rotating by the given angle around the
    /// given axis (Rodrigues' rotation formula).
    ///
    /// The axis must be a unit vector.
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let t = T::ONE - c;
        let (x, y, z) = (axis.x(), axis.y(), axis.z());
        Self::from_rows(
            Vector4::new(t * x * x + c, t * x * y - s * z, t * x * z + s * y, T::ZERO),
            Vector4::new(t * x * y + s * z, t * y * y + c, t * y * z - s * x, T::ZERO),
            Vector4::new(t * x * z - s * y, t * y * z + s * x, t * z * z + c, T::ZERO),
            Vector4::unit_w(),
        )
    }

    /// Creates a homogeneous transform rotating by the given quaternion.
    ///
    /// The quaternion must be a unit quaternion (versor).
    pub fn from_quaternion(quaternion: &Quaternion<T>) -> Self {
        let r = quaternion.real();
        let imag = quaternion.imag();
        let (i, j, k) = (imag.x(), imag.y(), imag.z());
        let two = T::TWO;
        Self::from_rows(
            Vector4::new(
                T::ONE - two * (j * j + k * k),
                two * (i * j - k * r),
                two * (i * k + j * r),
                T::ZERO,
            ),
            Vector4::new(
                two * (i * j + k * r),
                T::ONE - two * (i * i + k * k),
                two * (j * k - i * r),
                T::ZERO,
            ),
            Vector4::new(
                two * (i * k - j * r),
                two * (j * k + i * r),
                T::ONE - two * (i * i + j * j),
                T::ZERO,
            ),
            Vector4::unit_w(),
        )
    }

    /// Creates a right-handed view transform looking from `eye` towards `at`,
    /// with `up` indicating the rough upward direction.
    ///
    /// The forward axis is the normalized `at - eye`, the right axis is the
    /// normalized cross product of forward and `up`, and the true up axis is
    /// derived from those two. The camera position enters the translation
    /// column through dot products with the new axes.
    pub fn look_at(eye: &Vector3<T>, at: &Vector3<T>, up: &Vector3<T>) -> Self {
        let forward = (at - eye).normalized();
        let right = forward.cross(up).normalized();
        let true_up = right.cross(&forward);
        Self::from_rows(
            right.extended(-right.dot(eye)),
            true_up.extended(-true_up.dot(eye)),
            (-forward).extended(forward.dot(eye)),
            Vector4::unit_w(),
        )
    }

    /// The row at the given index, as a reference aliasing the internal
    /// storage.
    ///
    /// # Panics
    /// If the index is outside the matrix.
    #[inline]
    pub fn row(&self, i: usize) -> &Vector4<T> {
        &self.rows[i]
    }

    /// A mutable reference to the row at the given index.
    ///
    /// # Panics
    /// If the index is outside the matrix.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut Vector4<T> {
        &mut self.rows[i]
    }

    /// The column at the given index, materialized as a new vector since the
    /// storage is row-major.
    ///
    /// # Panics
    /// If the index is outside the matrix.
    #[inline]
    pub fn column(&self, j: usize) -> Vector4<T> {
        Vector4::new(
            self.rows[0][j],
            self.rows[1][j],
            self.rows[2][j],
            self.rows[3][j],
        )
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> T {
        self.rows[i][j]
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.rows[i][j]
    }

    /// Returns the diagonal of this matrix as a vector.
    #[inline]
    pub fn diagonal(&self) -> Vector4<T> {
        Vector4::new(
            self.rows[0].x(),
            self.rows[1].y(),
            self.rows[2].z(),
            self.rows[3].w(),
        )
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::from_rows(
            self.column(0),
            self.column(1),
            self.column(2),
            self.column(3),
        )
    }

    /// Whether this matrix is the all-NaN sentinel.
    ///
    /// Only the first stored element is tested. This is a deliberate cheap
    /// approximation: sentinel matrices produced by this crate are NaN in
    /// every entry, so checking one suffices, and a full scan is not worth
    /// its cost on this hot path.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.rows[0].x().is_nan()
    }

    /// Computes the determinant via cofactor expansion along the first row of
    /// the transposed matrix, sharing the 2x2 sub-products between cofactors.
    pub fn determinant(&self) -> T {
        let src: [T; 16] = self.transposed().into();

        // Pairs of 2x2 sub-determinant products shared by the four cofactors.
        let tmp = [
            src[10] * src[15],
            src[11] * src[14],
            src[9] * src[15],
            src[11] * src[13],
            src[9] * src[14],
            src[10] * src[13],
        ];

        let c0 = tmp[0] * src[5] + tmp[3] * src[6] + tmp[4] * src[7]
            - (tmp[1] * src[5] + tmp[2] * src[6] + tmp[5] * src[7]);
        let c1 = tmp[1] * src[4] + (src[8] * src[15]) * src[6] + (src[10] * src[12]) * src[7]
            - (tmp[0] * src[4] + (src[11] * src[12]) * src[6] + (src[8] * src[14]) * src[7]);
        let c2 = tmp[2] * src[4] + (src[11] * src[12]) * src[5] + (src[8] * src[13]) * src[7]
            - (tmp[3] * src[4] + (src[8] * src[15]) * src[5] + (src[9] * src[12]) * src[7]);
        let c3 = tmp[5] * src[4] + (src[8] * src[14]) * src[5] + (src[9] * src[12]) * src[6]
            - (tmp[4] * src[4] + (src[10] * src[12]) * src[5] + (src[8] * src[13]) * src[6]);

        src[0] * c0 + src[1] * c1 + src[2] * c2 + src[3] * c3
    }

    /// Returns the inverse of this matrix, computed as adjugate over
    /// determinant with the cofactor structure of [`Self::determinant`]
    /// (the scalar form of Intel's AP-928 Cramer's-rule algorithm).
    ///
    /// If the determinant is exactly zero, the [NaN sentinel](Self::nan) is
    /// returned instead of a matrix with non-finite entries.
    #[inline]
    pub fn inverted(&self) -> Self {
        self.inverted_and_determinant().0
    }

    /// Like [`Self::inverted`], but also returns the raw determinant computed
    /// before the singularity check.
    pub fn inverted_and_determinant(&self) -> (Self, T) {
        let src: [T; 16] = self.transposed().into();
        let mut dst = [T::ZERO; 16];

        // Pairs for the first eight cofactors.
        let tmp = [
            src[10] * src[15],
            src[11] * src[14],
            src[9] * src[15],
            src[11] * src[13],
            src[9] * src[14],
            src[10] * src[13],
            src[8] * src[15],
            src[11] * src[12],
            src[8] * src[14],
            src[10] * src[12],
            src[8] * src[13],
            src[9] * src[12],
        ];

        dst[0] = tmp[0] * src[5] + tmp[3] * src[6] + tmp[4] * src[7]
            - (tmp[1] * src[5] + tmp[2] * src[6] + tmp[5] * src[7]);
        dst[1] = tmp[1] * src[4] + tmp[6] * src[6] + tmp[9] * src[7]
            - (tmp[0] * src[4] + tmp[7] * src[6] + tmp[8] * src[7]);
        dst[2] = tmp[2] * src[4] + tmp[7] * src[5] + tmp[10] * src[7]
            - (tmp[3] * src[4] + tmp[6] * src[5] + tmp[11] * src[7]);
        dst[3] = tmp[5] * src[4] + tmp[8] * src[5] + tmp[11] * src[6]
            - (tmp[4] * src[4] + tmp[9] * src[5] + tmp[10] * src[6]);
        dst[4] = tmp[1] * src[1] + tmp[2] * src[2] + tmp[5] * src[3]
            - (tmp[0] * src[1] + tmp[3] * src[2] + tmp[4] * src[3]);
        dst[5] = tmp[0] * src[0] + tmp[7] * src[2] + tmp[8] * src[3]
            - (tmp[1] * src[0] + tmp[6] * src[2] + tmp[9] * src[3]);
        dst[6] = tmp[3] * src[0] + tmp[6] * src[1] + tmp[11] * src[3]
            - (tmp[2] * src[0] + tmp[7] * src[1] + tmp[10] * src[3]);
        dst[7] = tmp[4] * src[0] + tmp[9] * src[1] + tmp[10] * src[2]
            - (tmp[5] * src[0] + tmp[8] * src[1] + tmp[11] * src[2]);

        // Pairs for the second eight cofactors.
        let tmp = [
            src[2] * src[7],
            src[3] * src[6],
            src[1] * src[7],
            src[3] * src[5],
            src[1] * src[6],
            src[2] * src[5],
            src[0] * src[7],
            src[3] * src[4],
            src[0] * src[6],
            src[2] * src[4],
            src[0] * src[5],
            src[1] * src[4],
        ];

        dst[8] = tmp[0] * src[13] + tmp[3] * src[14] + tmp[4] * src[15]
            - (tmp[1] * src[13] + tmp[2] * src[14] + tmp[5] * src[15]);
        dst[9] = tmp[1] * src[12] + tmp[6] * src[14] + tmp[9] * src[15]
            - (tmp[0] * src[12] + tmp[7] * src[14] + tmp[8] * src[15]);
        dst[10] = tmp[2] * src[12] + tmp[7] * src[13] + tmp[10] * src[15]
            - (tmp[3] * src[12] + tmp[6] * src[13] + tmp[11] * src[15]);
        dst[11] = tmp[5] * src[12] + tmp[8] * src[13] + tmp[11] * src[14]
            - (tmp[4] * src[12] + tmp[9] * src[13] + tmp[10] * src[14]);
        dst[12] = tmp[2] * src[10] + tmp[5] * src[11] + tmp[1] * src[9]
            - (tmp[4] * src[11] + tmp[0] * src[9] + tmp[3] * src[10]);
        dst[13] = tmp[8] * src[11] + tmp[0] * src[8] + tmp[7] * src[10]
            - (tmp[6] * src[10] + tmp[9] * src[11] + tmp[1] * src[8]);
        dst[14] = tmp[6] * src[9] + tmp[11] * src[11] + tmp[3] * src[8]
            - (tmp[10] * src[11] + tmp[2] * src[8] + tmp[7] * src[9]);
        dst[15] = tmp[10] * src[10] + tmp[4] * src[8] + tmp[9] * src[9]
            - (tmp[8] * src[9] + tmp[11] * src[10] + tmp[5] * src[8]);

        let det = src[0] * dst[0] + src[1] * dst[1] + src[2] * dst[2] + src[3] * dst[3];

        if det.is_zero() {
            return (Self::nan(), det);
        }

        let inv_det = det.recip();
        for element in &mut dst {
            *element *= inv_det;
        }
        (Self::from(dst), det)
    }

    /// Computes the Cholesky decomposition of this matrix: the
    /// upper-triangular factor `U` such that `A = Uᵀ·U` for a symmetric
    /// positive-definite `A`.
    ///
    /// A row whose remaining diagonal value is not strictly positive counts
    /// toward the nullity of the matrix and has its remainder left
    /// zero-filled. If the nullity is nonzero after all four rows, the matrix
    /// is not positive-definite and the [NaN sentinel](Self::nan) is returned
    /// instead of the partial factor.
    pub fn cholesky(&self) -> Self {
        // Rows that turn out rank-deficient stay zero-filled.
        let mut factor = Self::zeros();
        let mut nullity = 0;

        for i in 0..4 {
            let mut sum = self.element(i, i);
            for k in 0..i {
                sum = sum - factor.element(k, i) * factor.element(k, i);
            }
            if sum > T::ZERO {
                let diag = sum.sqrt();
                *factor.element_mut(i, i) = diag;
                for j in (i + 1)..4 {
                    let mut sum = self.element(i, j);
                    for k in 0..i {
                        sum = sum - factor.element(k, i) * factor.element(k, j);
                    }
                    *factor.element_mut(i, j) = sum / diag;
                }
            } else {
                nullity += 1;
            }
        }

        if nullity > 0 { Self::nan() } else { factor }
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(T) -> T) -> Self {
        let mut mapped = *self;
        for row in &mut mapped.rows {
            *row = row.mapped(&mut f);
        }
        mapped
    }
}

impl<T: Float> From<[T; 16]> for Matrix4<T> {
    /// Interprets the array as the 16 elements in row-major order.
    #[inline]
    fn from(elements: [T; 16]) -> Self {
        let [e0, e1, e2, e3, e4, e5, e6, e7, e8, e9, e10, e11, e12, e13, e14, e15] = elements;
        Self::from_rows(
            Vector4::new(e0, e1, e2, e3),
            Vector4::new(e4, e5, e6, e7),
            Vector4::new(e8, e9, e10, e11),
            Vector4::new(e12, e13, e14, e15),
        )
    }
}

impl<T: Float> From<Matrix4<T>> for [T; 16] {
    /// Returns the 16 elements in row-major order.
    #[inline]
    fn from(matrix: Matrix4<T>) -> Self {
        let [r0, r1, r2, r3] = matrix.rows;
        [
            r0.x(),
            r0.y(),
            r0.z(),
            r0.w(),
            r1.x(),
            r1.y(),
            r1.z(),
            r1.w(),
            r2.x(),
            r2.y(),
            r2.z(),
            r2.w(),
            r3.x(),
            r3.y(),
            r3.z(),
            r3.w(),
        ]
    }
}

impl_binop!(Add, add, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_rows(
        a.rows[0] + b.rows[0],
        a.rows[1] + b.rows[1],
        a.rows[2] + b.rows[2],
        a.rows[3] + b.rows[3],
    )
});

impl_binop!(Sub, sub, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_rows(
        a.rows[0] - b.rows[0],
        a.rows[1] - b.rows[1],
        a.rows[2] - b.rows[2],
        a.rows[3] - b.rows[3],
    )
});

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    let mut product = Matrix4::zeros();
    for r in 0..4 {
        for c in 0..4 {
            *product.element_mut(r, c) = a.row(r).dot(&b.column(c));
        }
    }
    product
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, b| {
    Vector4::new(
        a.row(0).dot(b),
        a.row(1).dot(b),
        a.row(2).dot(b),
        a.row(3).dot(b),
    )
});

impl_scalar_binop!(Mul, mul, Matrix4, |a, b| {
    Matrix4::from_rows(
        a.rows[0] * b,
        a.rows[1] * b,
        a.rows[2] * b,
        a.rows[3] * b,
    )
});

impl_scalar_binop!(Div, div, Matrix4, |a, b| { a.mul(b.recip()) });

impl_scalar_lhs_mul!(f32, Matrix4);
impl_scalar_lhs_mul!(f64, Matrix4);

impl_binop_assign!(AddAssign, add_assign, Matrix4, Matrix4, |a, b| {
    for (row, rhs_row) in a.rows.iter_mut().zip(&b.rows) {
        *row += rhs_row;
    }
});

impl_binop_assign!(SubAssign, sub_assign, Matrix4, Matrix4, |a, b| {
    for (row, rhs_row) in a.rows.iter_mut().zip(&b.rows) {
        *row -= rhs_row;
    }
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, Matrix4, |a, b| {
    let product = (&*a).mul(b);
    *a = product;
});

impl_scalar_binop_assign!(MulAssign, mul_assign, Matrix4, |a, b| {
    for row in &mut a.rows {
        *row *= b;
    }
});

impl_scalar_binop_assign!(DivAssign, div_assign, Matrix4, |a, b| {
    for row in &mut a.rows {
        *row /= b;
    }
});

impl_unary_op!(Neg, neg, Matrix4, Matrix4, |val| {
    Matrix4::from_rows(-val.rows[0], -val.rows[1], -val.rows[2], -val.rows[3])
});

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.rows[0].abs_diff_eq(&b.rows[0], epsilon)
        && a.rows[1].abs_diff_eq(&b.rows[1], epsilon)
        && a.rows[2].abs_diff_eq(&b.rows[2], epsilon)
        && a.rows[3].abs_diff_eq(&b.rows[3], epsilon)
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.rows[0].relative_eq(&b.rows[0], epsilon, max_relative)
        && a.rows[1].relative_eq(&b.rows[1], epsilon, max_relative)
        && a.rows[2].relative_eq(&b.rows[2], epsilon, max_relative)
        && a.rows[3].relative_eq(&b.rows[3], epsilon, max_relative)
});

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EPSILON: f32 = 1e-5;

    fn invertible_matrix() -> Matrix4<f32> {
        Matrix4::from_rows(
            Vector4::new(2.0, 0.0, 1.0, 3.0),
            Vector4::new(1.0, 4.0, 0.0, -1.0),
            Vector4::new(0.0, 2.0, 5.0, 1.0),
            Vector4::new(-1.0, 0.0, 2.0, 2.0),
        )
    }

    #[test]
    fn creating_identity_gives_identity_matrix() {
        let identity = Matrix4::<f32>::identity();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(identity.element(i, j), expected);
            }
        }
    }

    #[test]
    fn creating_zeros_gives_zero_matrix() {
        let zeros = Matrix4::<f32>::zeros();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(zeros.element(i, j), 0.0);
            }
        }
    }

    #[test]
    fn nan_sentinel_is_nan_in_every_element() {
        let sentinel = Matrix4::<f32>::nan();
        for i in 0..4 {
            for j in 0..4 {
                assert!(sentinel.element(i, j).is_nan());
            }
        }
        assert!(sentinel.is_nan());
        assert!(!Matrix4::<f32>::identity().is_nan());
    }

    #[test]
    fn row_and_column_access_follow_row_major_layout() {
        let matrix = Matrix4::from([
            1.0_f32, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        ]);

        assert_eq!(*matrix.row(1), Vector4::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(matrix.column(2), Vector4::new(3.0, 7.0, 11.0, 15.0));
        assert_eq!(matrix.element(2, 3), 12.0);
        assert_eq!(matrix.diagonal(), Vector4::new(1.0, 6.0, 11.0, 16.0));

        let flat: [f32; 16] = matrix.into();
        assert_eq!(flat[2 * 4 + 3], 12.0);
    }

    #[test]
    fn transposing_swaps_rows_and_columns() {
        let matrix = invertible_matrix();
        let transposed = matrix.transposed();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(transposed.element(i, j), matrix.element(j, i));
            }
        }
        assert_eq!(transposed.transposed(), matrix);
    }

    #[test]
    fn multiplying_by_identity_preserves_matrix() {
        let matrix = invertible_matrix();
        assert_eq!(&matrix * &Matrix4::identity(), matrix);
        assert_eq!(&Matrix4::identity() * &matrix, matrix);
    }

    #[test]
    fn matrix_multiplication_composes_in_order() {
        let translate = Matrix4::from_translation(&Vector3::new(1.0, 0.0, 0.0));
        let scale = Matrix4::from_scaling(&Vector3::new(2.0, 2.0, 2.0));

        // Scale-then-translate differs from translate-then-scale.
        let scale_first = &translate * &scale;
        let translate_first = &scale * &translate;
        let point = Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(&scale_first * &point, Vector4::new(3.0, 0.0, 0.0, 1.0));
        assert_eq!(&translate_first * &point, Vector4::new(4.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn translation_moves_homogeneous_point() {
        let translate = Matrix4::from_translation(&Vector3::new(1.0, 2.0, 3.0));
        let origin = Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(&translate * &origin, Vector4::new(1.0, 2.0, 3.0, 1.0));

        // Directions (w = 0) are unaffected by translation.
        let direction = Vector4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(&translate * &direction, direction);
    }

    #[test]
    fn scaling_scales_each_axis_independently() {
        let scale = Matrix4::from_scaling(&Vector3::new(2.0, 3.0, 4.0));
        let point = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(&scale * &point, Vector4::new(2.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn outer_product_has_rank_one_structure() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
        let outer = Matrix4::from_outer_product(&a, &b);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(outer.element(i, j), a[i] * b[j]);
            }
        }
        assert_eq!(outer.determinant(), 0.0);
    }

    #[test]
    fn determinant_of_identity_is_one() {
        assert_eq!(Matrix4::<f32>::identity().determinant(), 1.0);
    }

    #[test]
    fn determinant_of_diagonal_matrix_is_product_of_diagonal() {
        let matrix = Matrix4::from_diagonal(&Vector4::new(2.0_f32, 3.0, 4.0, 5.0));
        assert_abs_diff_eq!(matrix.determinant(), 120.0, epsilon = EPSILON);
    }

    #[test]
    fn determinant_of_matrix_with_identical_rows_is_zero() {
        let row = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let matrix = Matrix4::from_rows(row, row, Vector4::unit_z(), Vector4::unit_w());
        assert_eq!(matrix.determinant(), 0.0);
    }

    #[test]
    fn inverting_identity_gives_identity() {
        let inverted = Matrix4::<f32>::identity().inverted();
        assert_abs_diff_eq!(inverted, Matrix4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn inverse_times_original_gives_identity() {
        let matrix = invertible_matrix();
        let inverted = matrix.inverted();
        assert!(!inverted.is_nan());
        assert_abs_diff_eq!(&matrix * &inverted, Matrix4::identity(), epsilon = EPSILON);
        assert_abs_diff_eq!(&inverted * &matrix, Matrix4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn inverting_twice_gives_original() {
        let matrix = invertible_matrix();
        assert_abs_diff_eq!(matrix.inverted().inverted(), matrix, epsilon = EPSILON);
    }

    #[test]
    fn inverting_singular_matrix_gives_nan_sentinel() {
        let row = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let singular = Matrix4::from_rows(row, row, Vector4::unit_z(), Vector4::unit_w());
        let inverted = singular.inverted();
        assert!(inverted.is_nan());
    }

    #[test]
    fn inverted_and_determinant_reports_raw_determinant() {
        let matrix = Matrix4::from_diagonal(&Vector4::new(2.0, 2.0, 2.0, 2.0));
        let (inverted, det) = matrix.inverted_and_determinant();
        assert_abs_diff_eq!(det, 16.0, epsilon = EPSILON);
        assert_abs_diff_eq!(
            inverted,
            Matrix4::from_diagonal(&Vector4::same(0.5)),
            epsilon = EPSILON
        );

        let row = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let singular = Matrix4::from_rows(row, row, Vector4::unit_z(), Vector4::unit_w());
        let (sentinel, det) = singular.inverted_and_determinant();
        assert!(sentinel.is_nan());
        assert_eq!(det, 0.0);
    }

    #[test]
    fn cholesky_factor_reproduces_positive_definite_matrix() {
        // A = Bᵀ·B + I for a full-rank B is symmetric positive-definite.
        let matrix = Matrix4::from_rows(
            Vector4::new(4.0, 1.0, 0.5, 0.0),
            Vector4::new(1.0, 5.0, 1.0, 0.5),
            Vector4::new(0.5, 1.0, 6.0, 1.0),
            Vector4::new(0.0, 0.5, 1.0, 7.0),
        );
        let factor = matrix.cholesky();
        assert!(!factor.is_nan());
        assert_abs_diff_eq!(&factor.transposed() * &factor, matrix, epsilon = EPSILON);
    }

    #[test]
    fn cholesky_factor_of_identity_is_identity() {
        let factor = Matrix4::<f32>::identity().cholesky();
        assert_abs_diff_eq!(factor, Matrix4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn cholesky_factor_is_upper_triangular() {
        let matrix = Matrix4::from_rows(
            Vector4::new(4.0, 1.0, 0.5, 0.0),
            Vector4::new(1.0, 5.0, 1.0, 0.5),
            Vector4::new(0.5, 1.0, 6.0, 1.0),
            Vector4::new(0.0, 0.5, 1.0, 7.0),
        );
        let factor = matrix.cholesky();
        for i in 0..4 {
            for j in 0..i {
                assert_eq!(factor.element(i, j), 0.0);
            }
        }
    }

    #[test]
    fn cholesky_of_non_positive_definite_matrix_gives_nan_sentinel() {
        let negative_diagonal = Matrix4::from_diagonal(&Vector4::new(1.0, -1.0, 1.0, 1.0));
        assert!(negative_diagonal.cholesky().is_nan());

        let rank_deficient = Matrix4::<f32>::zeros();
        assert!(rank_deficient.cholesky().is_nan());
    }

    #[test]
    fn axis_angle_rotation_is_orthogonal() {
        let rotation = Matrix4::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), 0.3_f32);
        assert_abs_diff_eq!(
            &rotation.transposed() * &rotation,
            Matrix4::identity(),
            epsilon = EPSILON
        );
        assert_relative_eq!(rotation.determinant(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn quarter_turn_around_z_axis_maps_x_to_y() {
        let rotation = Matrix4::from_axis_angle(&Vector3::unit_z(), std::f32::consts::FRAC_PI_2);
        let rotated = &rotation * &Vector4::unit_x();
        assert_abs_diff_eq!(rotated, Vector4::unit_y(), epsilon = EPSILON);
    }

    #[test]
    fn identity_quaternion_gives_identity_rotation() {
        let rotation = Matrix4::from_quaternion(&Quaternion::<f32>::identity());
        assert_abs_diff_eq!(rotation, Matrix4::identity(), epsilon = EPSILON);
    }

    #[test]
    fn unit_quaternion_rotation_is_orthogonal_with_unit_determinant() {
        let quaternion =
            Quaternion::from_axis_angle(&Vector3::new(1.0, 2.0, 2.0).normalized(), 0.7_f32);
        let rotation = Matrix4::from_quaternion(&quaternion);
        assert_abs_diff_eq!(
            &rotation.transposed() * &rotation,
            Matrix4::identity(),
            epsilon = EPSILON
        );
        assert_relative_eq!(rotation.determinant(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn quaternion_and_axis_angle_rotations_agree() {
        let axis = Vector3::new(1.0, -1.0, 0.5).normalized();
        let angle = 1.1_f32;
        let from_quaternion = Matrix4::from_quaternion(&Quaternion::from_axis_angle(&axis, angle));
        let from_axis_angle = Matrix4::from_axis_angle(&axis, angle);
        assert_abs_diff_eq!(from_quaternion, from_axis_angle, epsilon = EPSILON);
    }

    #[test]
    fn look_at_maps_eye_to_origin() {
        let eye = Vector3::new(1.0, 2.0, 3.0);
        let view = Matrix4::look_at(&eye, &Vector3::zeros(), &Vector3::unit_y());
        let transformed = &view * &eye.extended(1.0);
        assert_abs_diff_eq!(
            transformed,
            Vector4::new(0.0, 0.0, 0.0, 1.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn look_at_points_forward_axis_down_negative_z() {
        let eye = Vector3::new(0.0, 0.0, 5.0);
        let at = Vector3::zeros();
        let view = Matrix4::look_at(&eye, &at, &Vector3::unit_y());
        // The look target lies on the negative z-axis in view space.
        let transformed = &view * &at.extended(1.0);
        assert_abs_diff_eq!(
            transformed,
            Vector4::new(0.0, 0.0, -5.0, 1.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn matrix_arithmetic_operations_work() {
        let a = Matrix4::from_diagonal(&Vector4::new(1.0, 2.0, 3.0, 4.0));
        let b = Matrix4::from_diagonal(&Vector4::new(4.0, 3.0, 2.0, 1.0));

        assert_eq!(&a + &b, Matrix4::from_diagonal(&Vector4::same(5.0)));
        assert_eq!(
            &a - &b,
            Matrix4::from_diagonal(&Vector4::new(-3.0, -1.0, 1.0, 3.0))
        );
        assert_eq!(
            &a * 2.0,
            Matrix4::from_diagonal(&Vector4::new(2.0, 4.0, 6.0, 8.0))
        );
        assert_eq!(2.0 * &a, &a * 2.0);
        assert_eq!(
            &a / 2.0,
            Matrix4::from_diagonal(&Vector4::new(0.5, 1.0, 1.5, 2.0))
        );
        assert_eq!(-&a, Matrix4::from_diagonal(&Vector4::new(-1.0, -2.0, -3.0, -4.0)));
    }

    #[test]
    fn matrix_assignment_operations_work() {
        let mut matrix = Matrix4::from_diagonal(&Vector4::same(1.0));
        matrix += Matrix4::from_diagonal(&Vector4::same(1.0));
        assert_eq!(matrix, Matrix4::from_diagonal(&Vector4::same(2.0)));
        matrix *= 2.0;
        assert_eq!(matrix, Matrix4::from_diagonal(&Vector4::same(4.0)));
        matrix *= Matrix4::from_diagonal(&Vector4::same(0.5));
        assert_eq!(matrix, Matrix4::from_diagonal(&Vector4::same(2.0)));
        matrix /= 2.0;
        matrix -= Matrix4::from_diagonal(&Vector4::same(1.0));
        assert_eq!(matrix, Matrix4::zeros());
    }

    #[test]
    fn mutating_rows_and_elements_works() {
        let mut matrix = Matrix4::<f32>::zeros();
        *matrix.row_mut(0) = Vector4::new(1.0, 2.0, 3.0, 4.0);
        *matrix.element_mut(3, 3) = 5.0;
        assert_eq!(matrix.element(0, 1), 2.0);
        assert_eq!(matrix.element(3, 3), 5.0);
    }

    #[test]
    fn inversion_works_for_f64() {
        let matrix = Matrix4::<f64>::from_rows(
            Vector4::new(2.0, 0.0, 1.0, 3.0),
            Vector4::new(1.0, 4.0, 0.0, -1.0),
            Vector4::new(0.0, 2.0, 5.0, 1.0),
            Vector4::new(-1.0, 0.0, 2.0, 2.0),
        );
        assert_abs_diff_eq!(
            &matrix * &matrix.inverted(),
            Matrix4::identity(),
            epsilon = 1e-12
        );
    }
}
