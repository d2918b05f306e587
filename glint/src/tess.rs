//! Drawable geometry interface.
//!
//! glint doesn’t build meshes. Geometry lives in types implementing [`Drawable`], which know how to
//! bind their own vertex and index buffers and report what to draw. A [`Program`] borrows a
//! [`Drawable`] for the duration of a single draw call and wires the bound buffers to its vertex
//! attributes.
//!
//! [`Program`]: crate::shader::Program

/// Vertices can be connected via several modes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
  /// A single point.
  ///
  /// Points are left unconnected from each other and represent a _point cloud_.
  Point,
  /// A line, defined by two points.
  Line,
  /// A strip line, defined by at least two points and zero or many other ones.
  ///
  /// The first two vertices create a line, and every new vertex extends the previous line.
  LineStrip,
  /// A triangle, defined by three points.
  Triangle,
  /// A triangle fan, defined by at least three points and zero or many other ones.
  ///
  /// The first vertex is the center of the fan; every new vertex creates a triangle with the center
  /// and the very previous vertex.
  TriangleFan,
  /// A triangle strip, defined by at least three points and zero or many other ones.
  ///
  /// Every new vertex creates a triangle with the two previous vertices.
  TriangleStrip,
}

/// Type of the indices read by an indexed draw.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IndexType {
  /// 8-bit unsigned integer.
  U8,
  /// 16-bit unsigned integer.
  U16,
  /// 32-bit unsigned integer.
  U32,
}

/// Number of components of a vertex attribute.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VertexAttribDim {
  /// 1D.
  Dim1,
  /// 2D.
  Dim2,
  /// 3D.
  Dim3,
  /// 4D.
  Dim4,
}

impl VertexAttribDim {
  /// Number of components.
  pub fn size(self) -> usize {
    match self {
      VertexAttribDim::Dim1 => 1,
      VertexAttribDim::Dim2 => 2,
      VertexAttribDim::Dim3 => 3,
      VertexAttribDim::Dim4 => 4,
    }
  }
}

/// How a vertex attribute is read from a vertex buffer.
///
/// Components are always 32-bit floating-point numbers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VertexAttribDesc {
  /// Number of components.
  pub dim: VertexAttribDim,
  /// Whether the components are normalized when read.
  pub normalized: bool,
  /// Byte distance between two consecutive attributes; `0` means tightly packed.
  pub stride: usize,
  /// Byte offset of the first attribute in the buffer.
  pub offset: usize,
}

impl VertexAttribDesc {
  /// Four tightly packed floats per vertex, starting at the beginning of the buffer.
  pub const PACKED_VEC4: Self = VertexAttribDesc {
    dim: VertexAttribDim::Dim4,
    normalized: false,
    stride: 0,
    offset: 0,
  };
}

/// Geometry that can be drawn by a [`Program`](crate::shader::Program).
///
/// `B` is the backend the geometry lives on. The `bind_*` methods are called right before the
/// matching vertex attribute is described, so they must leave their buffer bound.
pub trait Drawable<B>
where
  B: ?Sized,
{
  /// Bind the position buffer. Returns `false` if the geometry has no positions.
  fn bind_positions(&self, backend: &mut B) -> bool;

  /// Bind the normal buffer. Returns `false` if the geometry has no normals.
  fn bind_normals(&self, backend: &mut B) -> bool;

  /// Bind the index buffer.
  fn bind_indices(&self, backend: &mut B);

  /// Primitive mode used to connect the vertices.
  fn mode(&self) -> Mode;

  /// Number of indices to draw.
  fn index_count(&self) -> usize;

  /// Type of the indices stored in the index buffer.
  fn index_type(&self) -> IndexType {
    IndexType::U32
  }
}
