//! Backend interfacing.
//!
//! Backends implement the traits of the submodules. [`Backend`] gathers them so that frontend code
//! only has to name a single bound.

pub mod draw;
pub mod shader;

/// Everything a type must implement to drive glint.
pub trait Backend: shader::Shader + draw::Draw {}

impl<B> Backend for B where B: ?Sized + shader::Shader + draw::Draw {}
