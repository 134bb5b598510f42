//! Quaternions.

use crate::num::Float;
use crate::vector::Vector3;
use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

/// A quaternion `r + i·î + j·ĵ + k·k̂` with scalar components of type `T`.
///
/// A unit quaternion (versor) represents a 3D rotation. Non-unit quaternions
/// are valid algebraic values but not valid rotations.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion<T: Float> {
    r: T,
    i: T,
    j: T,
    k: T,
}

// Safety: `repr(C)` with four fields of the same scalar type, so there is no
// padding.
unsafe impl<T: Float + Zeroable> Zeroable for Quaternion<T> {}
unsafe impl<T: Float + Pod> Pod for Quaternion<T> {}

impl<T: Float> Quaternion<T> {
    /// Creates a new quaternion with the given real and imaginary components.
    #[inline]
    pub const fn new(r: T, i: T, j: T, k: T) -> Self {
        Self { r, i, j, k }
    }

    /// Creates the multiplicative identity quaternion (pure real one).
    #[inline]
    pub const fn identity() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO)
    }

    /// Creates a quaternion with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO)
    }

    /// Creates the all-NaN sentinel quaternion.
    #[inline]
    pub const fn nan() -> Self {
        Self::new(T::NAN, T::NAN, T::NAN, T::NAN)
    }

    /// Creates a new quaternion from a real component and a vector of
    /// imaginary components.
    #[inline]
    pub const fn from_parts(real: T, imag: &Vector3<T>) -> Self {
        Self::new(real, imag.x(), imag.y(), imag.z())
    }

    /// Creates a pure real quaternion.
    #[inline]
    pub const fn from_real(real: T) -> Self {
        Self::new(real, T::ZERO, T::ZERO, T::ZERO)
    }

    /// Creates a pure imaginary quaternion.
    #[inline]
    pub const fn from_imag(imag: &Vector3<T>) -> Self {
        Self::from_parts(T::ZERO, imag)
    }

    /// Creates the versor rotating by the given angle around the given axis.
    ///
    /// The axis must be a unit vector.
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let (s, c) = (angle * T::ONE_HALF).sin_cos();
        Self::new(c, s * axis.x(), s * axis.y(), s * axis.z())
    }

    /// The real component.
    #[inline]
    pub const fn real(&self) -> T {
        self.r
    }

    /// The imaginary components as a vector.
    #[inline]
    pub const fn imag(&self) -> Vector3<T> {
        Vector3::new(self.i, self.j, self.k)
    }

    /// Returns the conjugate of this quaternion, with the imaginary
    /// components negated.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.r, -self.i, -self.j, -self.k)
    }

    /// Computes the squared norm of this quaternion (the sum of squares of
    /// all four components).
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.r * self.r + self.i * self.i + self.j * self.j + self.k * self.k
    }

    /// Computes the norm of this quaternion.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Returns the multiplicative inverse of this quaternion, the conjugate
    /// divided by the squared norm.
    ///
    /// If this quaternion is zero, the result has non-finite components.
    #[inline]
    pub fn inverted(&self) -> Self {
        self.conjugate() / self.norm_squared()
    }

    /// Returns the versor of this quaternion, the unit quaternion
    /// representing the same rotation.
    ///
    /// If this quaternion is zero, the result has non-finite components.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the homogeneous rotation matrix corresponding to this
    /// quaternion.
    ///
    /// The quaternion must be a versor for the result to be a rotation.
    #[inline]
    pub fn to_rotation_matrix(&self) -> crate::matrix::Matrix4<T> {
        crate::matrix::Matrix4::from_quaternion(self)
    }

    /// Whether any component of this quaternion is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.r.is_nan() || self.i.is_nan() || self.j.is_nan() || self.k.is_nan()
    }

    /// Casts each component to the given scalar type.
    #[inline]
    pub fn cast<U: Float>(&self) -> Quaternion<U>
    where
        T: num_traits::AsPrimitive<U>,
    {
        Quaternion::new(self.r.as_(), self.i.as_(), self.j.as_(), self.k.as_())
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.r + b.r, a.i + b.i, a.j + b.j, a.k + b.k)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.r - b.r, a.i - b.i, a.j - b.j, a.k - b.k)
});

// Hamilton product.
impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(
        a.r * b.r - a.i * b.i - a.j * b.j - a.k * b.k,
        a.r * b.i + a.i * b.r + a.j * b.k - a.k * b.j,
        a.r * b.j - a.i * b.k + a.j * b.r + a.k * b.i,
        a.r * b.k + a.i * b.j - a.j * b.i + a.k * b.r,
    )
});

impl_scalar_binop!(Mul, mul, Quaternion, |a, b| {
    Quaternion::new(a.r * b, a.i * b, a.j * b, a.k * b)
});

impl_scalar_binop!(Div, div, Quaternion, |a, b| { a.mul(b.recip()) });

impl_scalar_lhs_mul!(f32, Quaternion);
impl_scalar_lhs_mul!(f64, Quaternion);

impl_binop_assign!(AddAssign, add_assign, Quaternion, Quaternion, |a, b| {
    a.r += b.r;
    a.i += b.i;
    a.j += b.j;
    a.k += b.k;
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, Quaternion, |a, b| {
    a.r -= b.r;
    a.i -= b.i;
    a.j -= b.j;
    a.k -= b.k;
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |a, b| {
    let product = (&*a).mul(b);
    *a = product;
});

impl_scalar_binop_assign!(MulAssign, mul_assign, Quaternion, |a, b| {
    a.r *= b;
    a.i *= b;
    a.j *= b;
    a.k *= b;
});

impl_scalar_binop_assign!(DivAssign, div_assign, Quaternion, |a, b| {
    let inv = b.recip();
    a.r *= inv;
    a.i *= inv;
    a.j *= inv;
    a.k *= inv;
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |val| {
    Quaternion::new(-val.r, -val.i, -val.j, -val.k)
});

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.r.abs_diff_eq(&b.r, epsilon)
        && a.i.abs_diff_eq(&b.i, epsilon)
        && a.j.abs_diff_eq(&b.j, epsilon)
        && a.k.abs_diff_eq(&b.k, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.r.relative_eq(&b.r, epsilon, max_relative)
        && a.i.relative_eq(&b.i, epsilon, max_relative)
        && a.j.relative_eq(&b.j, epsilon, max_relative)
        && a.k.relative_eq(&b.k, epsilon, max_relative)
});
