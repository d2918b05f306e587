//! Linked shader programs.

use std::fmt;

use crate::backend::shader::{Shader, Uniformable};
use crate::backend::Backend;
use crate::context::Context;
use crate::linear::{inverse_transpose, M44, V3, V4};
use crate::shader::names;
use crate::shader::{ProgramError, Slot, Stage, StageType, Uniform};
use crate::tess::{Drawable, VertexAttribDesc};

/// Vertex attributes resolved from a linked program.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Attributes {
  /// [`names::POSITION`].
  pub position: Slot<u32>,
  /// [`names::NORMAL`].
  pub normal: Slot<u32>,
  /// [`names::COLOR`]. Resolved, but never fed by [`Program::draw`].
  pub color: Slot<u32>,
}

impl Attributes {
  fn resolve<B>(backend: &mut B, program: &B::ProgramRepr) -> Self
  where
    B: ?Sized + Shader,
  {
    let mut ask = |name: &str| unsafe { Slot::from(backend.ask_vertex_attrib(program, name)) };

    Attributes {
      position: ask(names::POSITION),
      normal: ask(names::NORMAL),
      color: ask(names::COLOR),
    }
  }

  fn absent(&self) -> impl Iterator<Item = &'static str> {
    [
      (names::POSITION, self.position.is_present()),
      (names::NORMAL, self.normal.is_present()),
      (names::COLOR, self.color.is_present()),
    ]
    .into_iter()
    .filter_map(|(name, present)| if present { None } else { Some(name) })
  }
}

/// Uniforms resolved from a linked program.
pub struct Uniforms<B>
where
  B: ?Sized + Shader,
{
  /// [`names::MODEL`].
  pub model: Slot<Uniform<B, M44>>,
  /// [`names::MODEL_INV_TR`].
  pub model_inv_tr: Slot<Uniform<B, M44>>,
  /// [`names::VIEW_PROJ`].
  pub view_proj: Slot<Uniform<B, M44>>,
  /// [`names::GEOMETRY_COLOR`].
  pub color: Slot<Uniform<B, V4>>,
  /// [`names::TIME`].
  pub time: Slot<Uniform<B, f32>>,
  /// [`names::COLOR1`].
  pub color1: Slot<Uniform<B, V3>>,
  /// [`names::COLOR2`].
  pub color2: Slot<Uniform<B, V3>>,
  /// [`names::COLOR3`].
  pub color3: Slot<Uniform<B, V3>>,
  /// [`names::WIDTH`].
  pub width: Slot<Uniform<B, f32>>,
  /// [`names::HEIGHT`].
  pub height: Slot<Uniform<B, f32>>,
  /// [`names::ANIMATION_STAGE`].
  pub animation_stage: Slot<Uniform<B, i32>>,
  /// [`names::SCREEN_ROT`].
  pub screen_rot: Slot<Uniform<B, f32>>,
}

impl<B> Uniforms<B>
where
  B: ?Sized + Shader,
{
  fn resolve(backend: &mut B, program: &B::ProgramRepr) -> Self {
    fn ask<B, T>(backend: &mut B, program: &B::ProgramRepr, name: &str) -> Slot<Uniform<B, T>>
    where
      B: ?Sized + Shader,
    {
      Slot::from(unsafe { backend.ask_uniform(program, name) }.map(Uniform::new))
    }

    Uniforms {
      model: ask(backend, program, names::MODEL),
      model_inv_tr: ask(backend, program, names::MODEL_INV_TR),
      view_proj: ask(backend, program, names::VIEW_PROJ),
      color: ask(backend, program, names::GEOMETRY_COLOR),
      time: ask(backend, program, names::TIME),
      color1: ask(backend, program, names::COLOR1),
      color2: ask(backend, program, names::COLOR2),
      color3: ask(backend, program, names::COLOR3),
      width: ask(backend, program, names::WIDTH),
      height: ask(backend, program, names::HEIGHT),
      animation_stage: ask(backend, program, names::ANIMATION_STAGE),
      screen_rot: ask(backend, program, names::SCREEN_ROT),
    }
  }

  fn absent(&self) -> impl Iterator<Item = &'static str> {
    [
      (names::MODEL, self.model.is_present()),
      (names::MODEL_INV_TR, self.model_inv_tr.is_present()),
      (names::VIEW_PROJ, self.view_proj.is_present()),
      (names::GEOMETRY_COLOR, self.color.is_present()),
      (names::TIME, self.time.is_present()),
      (names::COLOR1, self.color1.is_present()),
      (names::COLOR2, self.color2.is_present()),
      (names::COLOR3, self.color3.is_present()),
      (names::WIDTH, self.width.is_present()),
      (names::HEIGHT, self.height.is_present()),
      (names::ANIMATION_STAGE, self.animation_stage.is_present()),
      (names::SCREEN_ROT, self.screen_rot.is_present()),
    ]
    .into_iter()
    .filter_map(|(name, present)| if present { None } else { Some(name) })
  }
}

impl<B> fmt::Debug for Uniforms<B>
where
  B: ?Sized + Shader,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    f.debug_struct("Uniforms")
      .field("model", &self.model)
      .field("model_inv_tr", &self.model_inv_tr)
      .field("view_proj", &self.view_proj)
      .field("color", &self.color)
      .field("time", &self.time)
      .field("color1", &self.color1)
      .field("color2", &self.color2)
      .field("color3", &self.color3)
      .field("width", &self.width)
      .field("height", &self.height)
      .field("animation_stage", &self.animation_stage)
      .field("screen_rot", &self.screen_rot)
      .finish()
  }
}

// upload a value if the uniform is present
fn upload<B, T>(backend: &mut B, slot: &Slot<Uniform<B, T>>, value: T)
where
  B: ?Sized + Shader,
  T: Uniformable<B>,
{
  if let Slot::Present(ref uniform) = *slot {
    unsafe { value.update(backend, uniform.repr()) };
  }
}

/// A linked shader program.
///
/// The program owns the stages it was linked from and releases everything when dropped.
pub struct Program<B>
where
  B: ?Sized + Shader,
{
  repr: B::ProgramRepr,
  attributes: Attributes,
  uniforms: Uniforms<B>,
  _stages: Vec<Stage<B>>,
}

impl<B> Drop for Program<B>
where
  B: ?Sized + Shader,
{
  fn drop(&mut self) {
    unsafe { B::destroy_program(&mut self.repr) }
  }
}

impl<B> Program<B>
where
  B: Backend,
{
  /// Link stages into a new program and resolve its vertex attributes and uniforms.
  ///
  /// Inputs the linked program doesn’t expose end up [`Slot::Absent`]; that is not an error.
  pub fn new<I>(ctx: &mut Context<B>, stages: I) -> Result<Self, ProgramError>
  where
    I: IntoIterator<Item = Stage<B>>,
  {
    let stages: Vec<_> = stages.into_iter().collect();
    let reprs: Vec<_> = stages.iter().map(|stage| &stage.repr).collect();
    let backend = ctx.backend();

    let repr = unsafe { backend.new_program(&reprs) }.map_err(|e| {
      log::error!("{}", e);
      e
    })?;

    let attributes = Attributes::resolve(backend, &repr);
    let uniforms = Uniforms::resolve(backend, &repr);

    log::debug!(
      "linked program {:?} from {} stage(s); absent inputs: {:?}",
      B::program_handle(&repr),
      stages.len(),
      attributes.absent().chain(uniforms.absent()).collect::<Vec<_>>()
    );

    Ok(Program {
      repr,
      attributes,
      uniforms,
      _stages: stages,
    })
  }

  /// Compile a vertex and a fragment stage and link them into a new program.
  pub fn from_sources<V, F>(
    ctx: &mut Context<B>,
    vertex: V,
    fragment: F,
  ) -> Result<Self, ProgramError>
  where
    V: AsRef<str>,
    F: AsRef<str>,
  {
    let vertex = Stage::new(ctx, StageType::VertexShader, vertex)?;
    let fragment = Stage::new(ctx, StageType::FragmentShader, fragment)?;

    Self::new(ctx, vec![vertex, fragment])
  }

  /// Handle of the program.
  pub fn handle(&self) -> B::ProgramHandle {
    B::program_handle(&self.repr)
  }

  /// Vertex attributes of the program.
  pub fn attributes(&self) -> &Attributes {
    &self.attributes
  }

  /// Uniforms of the program.
  pub fn uniforms(&self) -> &Uniforms<B> {
    &self.uniforms
  }

  /// Use the program, unless the context already does.
  pub fn use_program(&self, ctx: &mut Context<B>) {
    ctx.use_program(&self.repr);
  }

  /// Draw a piece of geometry with the program.
  ///
  /// Positions and normals are read as four packed floats per vertex, if both the program exposes
  /// the attribute and the geometry binds a buffer for it. The attribute arrays enabled here are
  /// disabled again once the draw call is issued.
  pub fn draw<D>(&self, ctx: &mut Context<B>, drawable: &D)
  where
    D: ?Sized + Drawable<B>,
  {
    self.use_program(ctx);
    let backend = ctx.backend();

    let position = self
      .attributes
      .position
      .present()
      .filter(|_| drawable.bind_positions(backend));

    if let Some(index) = position {
      unsafe {
        backend.enable_vertex_attrib(index);
        backend.vertex_attrib_pointer(index, &VertexAttribDesc::PACKED_VEC4);
      }
    }

    let normal = self
      .attributes
      .normal
      .present()
      .filter(|_| drawable.bind_normals(backend));

    if let Some(index) = normal {
      unsafe {
        backend.enable_vertex_attrib(index);
        backend.vertex_attrib_pointer(index, &VertexAttribDesc::PACKED_VEC4);
      }
    }

    drawable.bind_indices(backend);

    unsafe {
      backend.draw_elements(
        drawable.mode(),
        drawable.index_count(),
        drawable.index_type(),
        0,
      );

      for index in position.into_iter().chain(normal) {
        backend.disable_vertex_attrib(index);
      }
    }
  }
}

impl<B> Program<B>
where
  B: Backend,
  f32: Uniformable<B>,
  i32: Uniformable<B>,
  V3: Uniformable<B>,
  V4: Uniformable<B>,
  M44: Uniformable<B>,
{
  /// Set the model matrix.
  ///
  /// If the program exposes [`names::MODEL_INV_TR`], the inverse transpose of `model` is computed
  /// and uploaded as well.
  pub fn set_model_matrix(&self, ctx: &mut Context<B>, model: M44) {
    self.use_program(ctx);
    let backend = ctx.backend();

    upload(backend, &self.uniforms.model, model);

    if self.uniforms.model_inv_tr.is_present() {
      upload(backend, &self.uniforms.model_inv_tr, inverse_transpose(model));
    }
  }

  /// Set the view-projection matrix.
  pub fn set_view_proj_matrix(&self, ctx: &mut Context<B>, view_proj: M44) {
    self.use_program(ctx);
    upload(ctx.backend(), &self.uniforms.view_proj, view_proj);
  }

  /// Set the geometry color.
  pub fn set_geometry_color(&self, ctx: &mut Context<B>, color: V4) {
    self.use_program(ctx);
    upload(ctx.backend(), &self.uniforms.color, color);
  }

  /// Set the elapsed time, in seconds.
  pub fn set_timer(&self, ctx: &mut Context<B>, time: f32) {
    self.use_program(ctx);
    upload(ctx.backend(), &self.uniforms.time, time);
  }

  /// Set the three cube colors. Each one is uploaded independently of the others.
  pub fn set_cube_colors(&self, ctx: &mut Context<B>, color1: V3, color2: V3, color3: V3) {
    self.use_program(ctx);
    let backend = ctx.backend();

    upload(backend, &self.uniforms.color1, color1);
    upload(backend, &self.uniforms.color2, color2);
    upload(backend, &self.uniforms.color3, color3);
  }

  /// Set the screen resolution.
  pub fn set_resolution(&self, ctx: &mut Context<B>, width: f32, height: f32) {
    self.use_program(ctx);
    let backend = ctx.backend();

    upload(backend, &self.uniforms.width, width);
    upload(backend, &self.uniforms.height, height);
  }

  /// Set the animation stage index.
  pub fn set_animation_stage(&self, ctx: &mut Context<B>, stage: i32) {
    self.use_program(ctx);
    upload(ctx.backend(), &self.uniforms.animation_stage, stage);
  }

  /// Set the screen rotation, in radians.
  pub fn set_screen_rot(&self, ctx: &mut Context<B>, radians: f32) {
    self.use_program(ctx);
    upload(ctx.backend(), &self.uniforms.screen_rot, radians);
  }
}
