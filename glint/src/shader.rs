//! Shader stages and programs.
//!
//! A shader [`Stage`] is a compiled piece of shading code for a given step of the pipeline (vertex
//! or fragment processing). Stages are linked together into a [`Program`], which is what the
//! driver runs when drawing.
//!
//! Building a [`Program`] also resolves, once and for all, the vertex attributes and uniforms it
//! exposes (see [`names`]). Each of them ends up in a [`Slot`]: either [`Slot::Present`] with the
//! driver location, or [`Slot::Absent`] if the linked program doesn’t expose it.

use std::error;
use std::fmt;
use std::marker::PhantomData;

use crate::backend::shader::Shader;
use crate::backend::Backend;
use crate::context::Context;

pub mod names;
mod program;
mod slot;

pub use self::program::{Attributes, Program, Uniforms};
pub use self::slot::Slot;

/// A shader stage type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StageType {
  /// Vertex shader.
  VertexShader,
  /// Fragment shader.
  FragmentShader,
}

impl fmt::Display for StageType {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageType::VertexShader => f.write_str("vertex shader"),
      StageType::FragmentShader => f.write_str("fragment shader"),
    }
  }
}

/// Errors that shader stages can emit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StageError {
  /// Occurs when a shader fails to compile. The `String` is the driver log.
  CompilationFailed(StageType, String),
}

impl StageError {
  /// Create a compilation failure.
  pub fn compilation_failed<R>(ty: StageType, reason: R) -> Self
  where
    R: Into<String>,
  {
    StageError::CompilationFailed(ty, reason.into())
  }
}

impl fmt::Display for StageError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageError::CompilationFailed(ref ty, ref r) => write!(f, "{} compilation error: {}", ty, r),
    }
  }
}

impl error::Error for StageError {}

/// Errors that a [`Program`] can generate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProgramError {
  /// A shader stage failed to compile.
  StageError(StageError),
  /// Program link failed. You can inspect the reason by looking at the contained `String`.
  LinkFailed(String),
}

impl ProgramError {
  /// Create a link failure.
  pub fn link_failed<R>(reason: R) -> Self
  where
    R: Into<String>,
  {
    ProgramError::LinkFailed(reason.into())
  }
}

impl fmt::Display for ProgramError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ProgramError::StageError(ref e) => write!(f, "shader program has stage error: {}", e),

      ProgramError::LinkFailed(ref s) => write!(f, "shader program failed to link: {}", s),
    }
  }
}

impl error::Error for ProgramError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      ProgramError::StageError(e) => Some(e),
      ProgramError::LinkFailed(_) => None,
    }
  }
}

impl From<StageError> for ProgramError {
  fn from(e: StageError) -> Self {
    ProgramError::StageError(e)
  }
}

/// A compiled shader stage.
///
/// Stages are consumed by [`Program::new`]; the program keeps them alive as long as it lives.
pub struct Stage<S>
where
  S: ?Sized + Shader,
{
  pub(crate) repr: S::StageRepr,
  ty: StageType,
}

impl<S> Stage<S>
where
  S: Backend,
{
  /// Compile a new shader stage from its type and source code.
  pub fn new<R>(ctx: &mut Context<S>, ty: StageType, src: R) -> Result<Self, StageError>
  where
    R: AsRef<str>,
  {
    let repr = unsafe { ctx.backend().new_stage(ty, src.as_ref()) }.map_err(|e| {
      log::error!("{}", e);
      e
    })?;

    log::debug!("compiled {}", ty);

    Ok(Stage { repr, ty })
  }
}

impl<S> Stage<S>
where
  S: ?Sized + Shader,
{
  /// Type of the stage.
  pub fn ty(&self) -> StageType {
    self.ty
  }
}

impl<S> Drop for Stage<S>
where
  S: ?Sized + Shader,
{
  fn drop(&mut self) {
    unsafe { S::destroy_stage(&mut self.repr) }
  }
}

/// A uniform location resolved from a linked program.
///
/// `T` is the type of the values the uniform accepts.
pub struct Uniform<S, T>
where
  S: ?Sized + Shader,
{
  repr: S::UniformRepr,
  _t: PhantomData<*const T>,
}

impl<S, T> Uniform<S, T>
where
  S: ?Sized + Shader,
{
  pub(crate) fn new(repr: S::UniformRepr) -> Self {
    Uniform {
      repr,
      _t: PhantomData,
    }
  }

  /// Backend location of the uniform.
  pub fn repr(&self) -> &S::UniformRepr {
    &self.repr
  }
}

impl<S, T> fmt::Debug for Uniform<S, T>
where
  S: ?Sized + Shader,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    f.debug_tuple("Uniform").field(&self.repr).finish()
  }
}
