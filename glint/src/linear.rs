//! Aliases types used to make it easier using long linear algebra types.
//!
//! Matrices are stored column-major, the way they are uploaded to the driver (untransposed).
//! `cgmath` matrices convert into [`M44`] with `.into()`.

use cgmath::{Matrix, Matrix4, SquareMatrix};

/// 3D floating vector.
pub type V3 = [f32; 3];

/// 4D floating vector.
pub type V4 = [f32; 4];

/// 4x4 floating matrix.
pub type M44 = [[f32; 4]; 4];

/// 4x4 identity matrix.
pub const IDENTITY44: M44 = [
  [1., 0., 0., 0.],
  [0., 1., 0., 0.],
  [0., 0., 1., 0.],
  [0., 0., 0., 1.],
];

/// Inverse of the transpose of a matrix, typically used to transform normals.
///
/// A singular matrix has no inverse; in that case the transposed matrix is returned as-is.
pub fn inverse_transpose(m: M44) -> M44 {
  let transposed = Matrix4::from(m).transpose();
  transposed.invert().unwrap_or(transposed).into()
}
