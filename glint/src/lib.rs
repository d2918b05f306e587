//! # Typed shader programs over pluggable graphics backends
//!
//! glint wraps the lifecycle of a shader program: compiling shader [`Stage`]s, linking them into a
//! [`Program`], resolving the program’s vertex attributes and uniforms _once_, and exposing setters
//! that push matrices, colors and scalars before issuing indexed draw calls.
//!
//! The crate doesn’t talk to any graphics API by itself. Every driver call goes through the traits
//! of the [`backend`] module, which a backend crate implements (see `glint-gl` for OpenGL). This
//! crate only contains the frontend types and the logic gluing them together.
//!
//! # Binding contract
//!
//! Programs look up a fixed set of names, listed in [`shader::names`]. Shaders are free to declare
//! any subset of them. A name that the linked program doesn’t expose resolves to [`Slot::Absent`]
//! and the matching setter silently becomes a no-op; that is how shader variants omit what they
//! don’t use.
//!
//! # Context and program binding
//!
//! A [`Context`] owns the backend value and remembers which program is currently bound. Binding
//! through [`Program::use_program`] only reaches the driver when the bound program actually
//! changes, so chaining several setters on the same program costs a single bind. Binding a
//! program behind the context’s back desynchronizes that cache; call
//! [`Context::invalidate_program`] afterwards.
//!
//! # Quick tour
//!
//! ```ignore
//! let mut ctx = Context::new(backend);
//! let program = Program::from_sources(&mut ctx, VS, FS)?;
//!
//! // every frame
//! program.set_view_proj_matrix(&mut ctx, view_proj);
//! program.set_timer(&mut ctx, t);
//!
//! for object in &objects {
//!   program.set_model_matrix(&mut ctx, object.model);
//!   program.set_geometry_color(&mut ctx, object.color);
//!   program.draw(&mut ctx, &object.mesh);
//! }
//! ```

pub mod backend;
mod cache;
pub mod context;
pub mod linear;
pub mod shader;
pub mod tess;

pub use crate::context::Context;
pub use crate::shader::{Program, ProgramError, Slot, Stage, StageError, StageType, Uniform};
pub use crate::tess::{Drawable, IndexType, Mode};
