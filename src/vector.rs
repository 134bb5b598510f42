//! Vectors.

use crate::num::Float;
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use std::ops::{Index, IndexMut, Mul};

/// A 2-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2<T: Float> {
    x: T,
    y: T,
}

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3<T: Float> {
    x: T,
    y: T,
    z: T,
}

/// A 4-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4<T: Float> {
    x: T,
    y: T,
    z: T,
    w: T,
}

// Safety: the vector types are `repr(C)` with every field of the same scalar
// type, so they contain no padding.
unsafe impl<T: Float + Zeroable> Zeroable for Vector2<T> {}
unsafe impl<T: Float + Pod> Pod for Vector2<T> {}
unsafe impl<T: Float + Zeroable> Zeroable for Vector3<T> {}
unsafe impl<T: Float + Pod> Pod for Vector3<T> {}
unsafe impl<T: Float + Zeroable> Zeroable for Vector4<T> {}
unsafe impl<T: Float + Pod> Pod for Vector4<T> {}

impl<T: Float> Vector2<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::new(value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }

    /// Converts each component to the given scalar type.
    #[inline]
    pub fn cast<U: Float>(&self) -> Vector2<U>
    where
        T: AsPrimitive<U>,
    {
        Vector2::new(self.x.as_(), self.y.as_())
    }

    /// Computes the normalized version of the vector.
    ///
    /// The input must have nonzero norm; for a zero vector the result has
    /// non-finite components.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    pub fn component_abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    /// Returns a vector where each component is the minimum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Returns a vector where each component is the maximum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(T) -> T) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> T {
        self.x.min(self.y)
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> T {
        self.x.max(self.y)
    }
}

impl<T: Float> Vector2<T> {
    impl_swizzle2!(Vector2, [x, y], [x, y]);
    impl_swizzle3!(Vector3, [x, y], [x, y], [x, y]);
    impl_swizzle4!(Vector4, [x, y], [x, y], [x, y], [x, y]);
}

impl<T: Float> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T: Float> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(vector: Vector2<T>) -> Self {
        [vector.x, vector.y]
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x + b.x, a.y + b.y)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x - b.x, a.y - b.y)
});

impl_scalar_binop!(Mul, mul, Vector2, |a, b| {
    Vector2::new(a.x * b, a.y * b)
});

impl_scalar_binop!(Div, div, Vector2, |a, b| { a.mul(b.recip()) });

impl_scalar_lhs_mul!(f32, Vector2);
impl_scalar_lhs_mul!(f64, Vector2);

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    a.x += b.x;
    a.y += b.y;
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
});

impl_scalar_binop_assign!(MulAssign, mul_assign, Vector2, |a, b| {
    a.x *= b;
    a.y *= b;
});

impl_scalar_binop_assign!(DivAssign, div_assign, Vector2, |a, b| {
    a.x /= b;
    a.y /= b;
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::new(-val.x, -val.y)
});

impl<T: Float> Index<usize> for Vector2<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl<T: Float> IndexMut<usize> for Vector2<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector2, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon) && a.y.abs_diff_eq(&b.y, epsilon)
});

impl_relative_eq!(Vector2, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
});

impl<T: Float> Vector3<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut T {
        &mut self.z
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Converts each component to the given scalar type.
    #[inline]
    pub fn cast<U: Float>(&self) -> Vector3<U>
    where
        T: AsPrimitive<U>,
    {
        Vector3::new(self.x.as_(), self.y.as_(), self.z.as_())
    }

    /// Computes the normalized version of the vector.
    ///
    /// The input must have nonzero norm; for a zero vector the result has
    /// non-finite components.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    pub fn component_abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Returns a vector where each component is the minimum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Returns a vector where each component is the maximum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(T) -> T) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> T {
        self.x.min(self.y).min(self.z)
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> T {
        self.x.max(self.y).max(self.z)
    }
}

impl<T: Float> Vector3<T> {
    impl_swizzle2!(Vector2, [x, y, z], [x, y, z]);
    impl_swizzle3!(Vector3, [x, y, z], [x, y, z], [x, y, z]);
    impl_swizzle4!(Vector4, [x, y, z], [x, y, z], [x, y, z], [x, y, z]);
}

impl<T: Float> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Float> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_scalar_binop!(Mul, mul, Vector3, |a, b| {
    Vector3::new(a.x * b, a.y * b, a.z * b)
});

impl_scalar_binop!(Div, div, Vector3, |a, b| { a.mul(b.recip()) });

impl_scalar_lhs_mul!(f32, Vector3);
impl_scalar_lhs_mul!(f64, Vector3);

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_scalar_binop_assign!(MulAssign, mul_assign, Vector3, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_scalar_binop_assign!(DivAssign, div_assign, Vector3, |a, b| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl<T: Float> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl<T: Float> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});

impl<T: Float> Vector4<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> T {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut T {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut T {
        &mut self.w
    }

    /// Converts each component to the given scalar type.
    #[inline]
    pub fn cast<U: Float>(&self) -> Vector4<U>
    where
        T: AsPrimitive<U>,
    {
        Vector4::new(self.x.as_(), self.y.as_(), self.z.as_(), self.w.as_())
    }

    /// Computes the normalized version of the vector.
    ///
    /// The input must have nonzero norm; for a zero vector the result has
    /// non-finite components.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.norm()
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    pub fn component_abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Self {
        Self::new(
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
            self.w / other.w,
        )
    }

    /// Returns a vector where each component is the minimum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    /// Returns a vector where each component is the maximum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(T) -> T) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> T {
        self.x.min(self.y).min(self.z).min(self.w)
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> T {
        self.x.max(self.y).max(self.z).max(self.w)
    }
}

impl<T: Float> Vector4<T> {
    impl_swizzle2!(Vector2, [x, y, z, w], [x, y, z, w]);
    impl_swizzle3!(Vector3, [x, y, z, w], [x, y, z, w], [x, y, z, w]);
    impl_swizzle4!(Vector4, [x, y, z, w], [x, y, z, w], [x, y, z, w], [x, y, z, w]);
}

impl<T: Float> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: Float> From<Vector4<T>> for [T; 4] {
    #[inline]
    fn from(vector: Vector4<T>) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_scalar_binop!(Mul, mul, Vector4, |a, b| {
    Vector4::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_scalar_binop!(Div, div, Vector4, |a, b| { a.mul(b.recip()) });

impl_scalar_lhs_mul!(f32, Vector4);
impl_scalar_lhs_mul!(f64, Vector4);

impl_binop_assign!(AddAssign, add_assign, Vector4, Vector4, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
    a.w += b.w;
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, Vector4, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
    a.w -= b.w;
});

impl_scalar_binop_assign!(MulAssign, mul_assign, Vector4, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
    a.w *= b;
});

impl_scalar_binop_assign!(DivAssign, div_assign, Vector4, |a, b| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
    a.w /= b;
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl<T: Float> Index<usize> for Vector4<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl<T: Float> IndexMut<usize> for Vector4<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_abs_diff_eq!(Vector4, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
        && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(Vector4, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
        && a.w.relative_eq(&b.w, epsilon, max_relative)
});
