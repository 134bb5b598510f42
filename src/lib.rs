//! Math utilities.

#[macro_use]
mod macros;

pub mod dim;
pub mod matrix;
pub mod num;
pub mod quaternion;
pub mod vector;

pub use dim::{D1, D2, D3, D4, Dimension, HomogeneousDimension, RotationDimension};
pub use matrix::Matrix4;
pub use num::Float;
pub use quaternion::Quaternion;
pub use vector::{Vector2, Vector3, Vector4};
