//! OpenGL backends.
//!
//! This crate exports [OpenGL](https://www.khronos.org/opengl/) backends for glint. Pick the
//! backend type, build it once the windowing layer made a GL context current, and wrap it in a
//! [`glint::Context`].

pub mod gl33;

pub use gl33::GL33;
