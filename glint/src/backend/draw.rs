//! Draw backend interface.
//!
//! Vertex attribute arrays and indexed draw calls. The vertex and index buffers themselves are
//! bound by [`Drawable`](crate::tess::Drawable) implementors before these functions are called.

use crate::tess::{IndexType, Mode, VertexAttribDesc};

/// Indexed draw support on the backend.
pub unsafe trait Draw {
  /// Enable the vertex attribute array at `index`.
  unsafe fn enable_vertex_attrib(&mut self, index: u32);

  /// Describe how the vertex attribute at `index` is read from the currently bound vertex buffer.
  unsafe fn vertex_attrib_pointer(&mut self, index: u32, desc: &VertexAttribDesc);

  /// Disable the vertex attribute array at `index`.
  unsafe fn disable_vertex_attrib(&mut self, index: u32);

  /// Draw `count` indices read from the currently bound index buffer, starting at the byte
  /// `offset`.
  unsafe fn draw_elements(
    &mut self,
    mode: Mode,
    count: usize,
    index_type: IndexType,
    offset: usize,
  );
}
