//! Compile-time dispatch from dimension to concrete math types.

use crate::matrix::Matrix4;
use crate::num::Float;
use crate::quaternion::Quaternion;
use crate::vector::{Vector2, Vector3, Vector4};

/// Marker type for dimension one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum D1 {}

/// Marker type for dimension two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum D2 {}

/// Marker type for dimension three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum D3 {}

/// Marker type for dimension four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum D4 {}

/// Maps a dimension marker to the vector type of that dimension over a given
/// scalar type. The mapping is resolved entirely at compile time and carries
/// no runtime state.
pub trait Dimension: Copy + 'static {
    /// The number of components in the vector type for this dimension.
    const RANK: usize;

    /// The vector type for this dimension. Dimension one maps to the bare
    /// scalar.
    type Vector<T: Float>: Copy;
}

impl Dimension for D1 {
    const RANK: usize = 1;
    type Vector<T: Float> = T;
}

impl Dimension for D2 {
    const RANK: usize = 2;
    type Vector<T: Float> = Vector2<T>;
}

impl Dimension for D3 {
    const RANK: usize = 3;
    type Vector<T: Float> = Vector3<T>;
}

impl Dimension for D4 {
    const RANK: usize = 4;
    type Vector<T: Float> = Vector4<T>;
}

/// Maps a dimension marker to the rotation representation for that dimension.
pub trait RotationDimension: Dimension {
    type Rotation<T: Float>: Copy;
}

impl RotationDimension for D3 {
    type Rotation<T: Float> = Quaternion<T>;
}

/// Maps a dimension marker to the square matrix type used for homogeneous
/// transforms in that dimension.
pub trait HomogeneousDimension: Dimension {
    type Matrix<T: Float>: Copy;
}

impl HomogeneousDimension for D4 {
    type Matrix<T: Float> = Matrix4<T>;
}
