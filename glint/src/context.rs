//! Render context.
//!
//! A [`Context`] owns a backend value and the little state glint keeps on its side of the driver:
//! the program currently in use. Every frontend operation takes the context explicitly, so several
//! independent contexts (one per graphics context, or one per test) never share that state.
//!
//! # On context and threads
//!
//! Graphics contexts are usually bound to the thread that created them. Backends are expected to
//! be `!Send` and `!Sync` in that case, which makes the owning [`Context`] `!Send` and `!Sync` too.

use crate::backend::Backend;
use crate::cache::Cached;

/// Render context wrapping a backend.
#[derive(Debug)]
pub struct Context<B>
where
  B: Backend,
{
  backend: B,
  current_program: Cached<B::ProgramHandle>,
}

impl<B> Context<B>
where
  B: Backend,
{
  /// Wrap a backend.
  ///
  /// Nothing is assumed about the program the driver currently uses: the first
  /// [`Program::use_program`](crate::shader::Program::use_program) always reaches the driver.
  pub fn new(backend: B) -> Self {
    Context {
      backend,
      current_program: Cached::empty(),
    }
  }

  /// Access the backend.
  pub fn backend(&mut self) -> &mut B {
    &mut self.backend
  }

  /// Handle of the program the context believes is in use, if any.
  pub fn current_program(&self) -> Option<B::ProgramHandle> {
    self.current_program.get().copied()
  }

  /// Forget which program is in use.
  ///
  /// Call this after binding a program without going through glint; the next
  /// [`Program::use_program`](crate::shader::Program::use_program) will reach the driver
  /// unconditionally.
  pub fn invalidate_program(&mut self) {
    self.current_program.invalidate();
  }

  /// Use a program if it’s not already in use.
  pub(crate) fn use_program(&mut self, program: &B::ProgramRepr) {
    let handle = B::program_handle(program);

    if self.current_program.is_invalid(&handle) {
      log::trace!("using program {:?}", handle);

      unsafe { self.backend.use_program(program) };
      self.current_program.set(handle);
    }
  }
}
