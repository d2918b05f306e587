//! OpenGL 3.3 backend.
//!
//! This module implements an OpenGL 3.3 backend for glint. The backend type is [`GL33`].

mod draw;
mod shader;

pub use self::shader::{Program, Stage};

use gl::types::*;
use std::ffi::{c_void, CStr};
use std::marker::PhantomData;

/// An OpenGL 3.3 backend.
///
/// This type is to be used as a glint backend type. It implements the whole backend interface by
/// forwarding to the GL functions loaded in the current thread’s context.
#[derive(Debug)]
pub struct GL33 {
  _a: PhantomData<*const ()>, // !Send and !Sync
}

impl GL33 {
  /// Load the GL function pointers with `loader` and create the backend.
  ///
  /// The GL context the functions are loaded from must be current on the calling thread, and stay
  /// current as long as the backend is in use.
  pub fn load_with<F>(loader: F) -> Self
  where
    F: FnMut(&'static str) -> *const c_void,
  {
    gl::load_with(loader);

    log::info!("OpenGL version: {}", get_string(gl::VERSION));
    log::info!(
      "GLSL version: {}",
      get_string(gl::SHADING_LANGUAGE_VERSION)
    );

    GL33 { _a: PhantomData }
  }
}

fn get_string(name: GLenum) -> String {
  unsafe {
    let s = gl::GetString(name);

    if s.is_null() {
      String::from("unknown")
    } else {
      CStr::from_ptr(s as *const _).to_string_lossy().into_owned()
    }
  }
}
