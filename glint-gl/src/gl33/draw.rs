use crate::gl33::GL33;
use gl::{self, types::*};
use glint::{
  backend::draw::Draw,
  tess::{IndexType, Mode, VertexAttribDesc, VertexAttribDim},
};
use std::ffi::c_void;

unsafe impl Draw for GL33 {
  unsafe fn enable_vertex_attrib(&mut self, index: u32) {
    gl::EnableVertexAttribArray(index);
  }

  unsafe fn vertex_attrib_pointer(&mut self, index: u32, desc: &VertexAttribDesc) {
    let normalized = if desc.normalized { gl::TRUE } else { gl::FALSE };

    gl::VertexAttribPointer(
      index,
      dim_as_size(desc.dim),
      gl::FLOAT,
      normalized,
      desc.stride as GLsizei,
      desc.offset as *const c_void,
    );
  }

  unsafe fn disable_vertex_attrib(&mut self, index: u32) {
    gl::DisableVertexAttribArray(index);
  }

  unsafe fn draw_elements(
    &mut self,
    mode: Mode,
    count: usize,
    index_type: IndexType,
    offset: usize,
  ) {
    gl::DrawElements(
      opengl_mode(mode),
      index_count_to_glsizei(count),
      index_type_to_glenum(index_type),
      offset as *const c_void,
    );
  }
}

fn dim_as_size(d: VertexAttribDim) -> GLint {
  d.size() as GLint
}

// GL takes a signed count; larger counts are clamped
fn index_count_to_glsizei(count: usize) -> GLsizei {
  GLsizei::try_from(count).unwrap_or_else(|_| {
    log::warn!("index count {} doesn’t fit in a GLsizei; clamping", count);
    GLsizei::MAX
  })
}

fn opengl_mode(mode: Mode) -> GLenum {
  match mode {
    Mode::Point => gl::POINTS,
    Mode::Line => gl::LINES,
    Mode::LineStrip => gl::LINE_STRIP,
    Mode::Triangle => gl::TRIANGLES,
    Mode::TriangleFan => gl::TRIANGLE_FAN,
    Mode::TriangleStrip => gl::TRIANGLE_STRIP,
  }
}

fn index_type_to_glenum(ty: IndexType) -> GLenum {
  match ty {
    IndexType::U8 => gl::UNSIGNED_BYTE,
    IndexType::U16 => gl::UNSIGNED_SHORT,
    IndexType::U32 => gl::UNSIGNED_INT,
  }
}
