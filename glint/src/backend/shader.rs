//! Shader backend interface.
//!
//! This interface defines the low-level API backends must implement to compile shader stages, link
//! programs, reflect their vertex attributes and uniforms, and update uniforms.

use std::fmt;

use crate::shader::{ProgramError, StageError, StageType};

/// Shader support on the backend.
pub unsafe trait Shader {
  /// Backend representation of a compiled shader stage.
  type StageRepr;

  /// Backend representation of a linked shader program.
  type ProgramRepr;

  /// Backend representation of a uniform location.
  type UniformRepr: fmt::Debug;

  /// Identity of a program, used to know which program is currently in use.
  ///
  /// Two live programs must never share the same handle. A context keeps the handle of the
  /// program it last used even after that program is dropped, so a handle must not be given to
  /// a new program while a context may still hold it; otherwise call
  /// [`Context::invalidate_program`](crate::context::Context::invalidate_program) after dropping
  /// the program in use.
  type ProgramHandle: Copy + fmt::Debug + Eq;

  /// Create and compile a shader stage.
  ///
  /// On failure, the backend must release whatever it allocated and return
  /// [`StageError::CompilationFailed`] carrying the driver log.
  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError>;

  /// Release a shader stage.
  unsafe fn destroy_stage(stage: &mut Self::StageRepr);

  /// Create a program, attach all the stages to it and link it.
  ///
  /// On failure, the backend must release the program and return [`ProgramError::LinkFailed`]
  /// carrying the driver log.
  unsafe fn new_program(
    &mut self,
    stages: &[&Self::StageRepr],
  ) -> Result<Self::ProgramRepr, ProgramError>;

  /// Release a shader program.
  unsafe fn destroy_program(program: &mut Self::ProgramRepr);

  /// Identity of a program.
  fn program_handle(program: &Self::ProgramRepr) -> Self::ProgramHandle;

  /// Index of an active vertex attribute, if the linked program exposes it.
  unsafe fn ask_vertex_attrib(&mut self, program: &Self::ProgramRepr, name: &str) -> Option<u32>;

  /// Location of an active uniform, if the linked program exposes it.
  unsafe fn ask_uniform(
    &mut self,
    program: &Self::ProgramRepr,
    name: &str,
  ) -> Option<Self::UniformRepr>;

  /// Make the program the one used by subsequent uniform updates and draw calls.
  ///
  /// This must always reach the driver; caching is done on the frontend side.
  unsafe fn use_program(&mut self, program: &Self::ProgramRepr);
}

/// Types that can be uploaded to a uniform of a backend.
///
/// The update targets the program currently in use. The setters of
/// [`Program`](crate::shader::Program) need `f32`, `i32`, `V3`, `V4` and `M44` implementations.
pub unsafe trait Uniformable<S>: Sized
where
  S: ?Sized + Shader,
{
  /// Upload the value to the uniform.
  unsafe fn update(self, backend: &mut S, uniform: &S::UniformRepr);
}
