//! A recording backend.
//!
//! Shader sources are “compiled” by scanning their `in`, `out` and `uniform` declarations, one per
//! line. Every driver call lands in a shared log that tests inspect afterwards.

#![allow(dead_code)]

use glint::backend::draw::Draw;
use glint::backend::shader::{Shader, Uniformable};
use glint::linear::{M44, V3, V4};
use glint::shader::{ProgramError, StageError, StageType};
use glint::tess::{Drawable, IndexType, Mode, VertexAttribDesc};
use glint::Context;
use std::cell::RefCell;
use std::rc::Rc;

pub const VS: &str = r#"
in vec4 vs_Pos;
in vec4 vs_Nor;
in vec4 vs_Col;

out vec4 fs_Nor;
out vec4 fs_Col;

uniform mat4 u_Model;
uniform mat4 u_ModelInvTr;
uniform mat4 u_ViewProj;

void main() {
  fs_Nor = u_ModelInvTr * vs_Nor;
  fs_Col = vs_Col;
  gl_Position = u_ViewProj * u_Model * vs_Pos;
}
"#;

pub const FS: &str = r#"
in vec4 fs_Nor;
in vec4 fs_Col;

out vec4 out_Col;

uniform vec4 u_Color;
uniform float u_Time;

void main() {
  out_Col = u_Color * fs_Col;
}
"#;

pub const VS_FLAT: &str = r#"
in vec4 vs_Pos;

uniform mat4 u_Model;
uniform mat4 u_ViewProj;

void main() {
  gl_Position = u_ViewProj * u_Model * vs_Pos;
}
"#;

pub const FS_FLAT: &str = r#"
out vec4 out_Col;

uniform vec4 u_Color;

void main() {
  out_Col = u_Color;
}
"#;

pub const FS_SCREEN: &str = r#"
out vec4 out_Col;

uniform vec3 u_Color1;
uniform vec3 u_Color3;
uniform float u_Width;
uniform float u_Height;
uniform int u_AnimationStage;
uniform float u_ScreenRot;
uniform float u_Time;

void main() {
  out_Col = vec4(u_Color1 * gl_FragCoord.x / u_Width + u_Color3 * gl_FragCoord.y / u_Height, 1.);
}
"#;

/// A value uploaded to a uniform.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
  F32(f32),
  I32(i32),
  V3(V3),
  V4(V4),
  M44(M44),
}

/// A recorded driver call.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
  CompileStage(StageType, u32),
  DeleteStage(u32),
  LinkProgram(u32),
  DeleteProgram(u32),
  UseProgram(u32),
  Uniform(String, Value),
  EnableAttrib(u32),
  AttribPointer(u32, VertexAttribDesc),
  DisableAttrib(u32),
  BindPositions,
  BindNormals,
  BindIndices,
  DrawElements(Mode, usize, IndexType, usize),
}

pub type Log = Rc<RefCell<Vec<Call>>>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Qualifier {
  In,
  Out,
  Uniform,
}

#[derive(Clone, Debug)]
struct Decl {
  qualifier: Qualifier,
  name: String,
}

fn declarations(src: &str) -> Vec<Decl> {
  src
    .lines()
    .filter_map(|line| {
      let mut words = line.trim().trim_end_matches(';').split_whitespace();

      let qualifier = match words.next()? {
        "in" => Qualifier::In,
        "out" => Qualifier::Out,
        "uniform" => Qualifier::Uniform,
        _ => return None,
      };
      let _ty = words.next()?;
      let name = words.next()?.to_owned();

      Some(Decl { qualifier, name })
    })
    .collect()
}

fn balanced_braces(src: &str) -> bool {
  let mut depth = 0i32;

  for c in src.chars() {
    match c {
      '{' => depth += 1,
      '}' => depth -= 1,
      _ => (),
    }

    if depth < 0 {
      return false;
    }
  }

  depth == 0
}

fn names(decls: &[Decl], qualifier: Qualifier) -> impl Iterator<Item = &str> {
  decls
    .iter()
    .filter(move |decl| decl.qualifier == qualifier)
    .map(|decl| decl.name.as_str())
}

fn find_stage<'a>(stages: &[&'a MockStage], ty: StageType) -> Option<&'a MockStage> {
  stages.iter().copied().find(|stage| stage.ty == ty)
}

#[derive(Debug)]
pub struct Mock {
  log: Log,
  next_handle: u32,
}

impl Mock {
  pub fn new() -> Self {
    Mock {
      log: Rc::new(RefCell::new(Vec::new())),
      next_handle: 1,
    }
  }

  pub fn log(&self) -> Log {
    self.log.clone()
  }

  fn record(&self, call: Call) {
    self.log.borrow_mut().push(call);
  }

  fn gen_handle(&mut self) -> u32 {
    let handle = self.next_handle;
    self.next_handle += 1;
    handle
  }
}

#[derive(Debug)]
pub struct MockStage {
  handle: u32,
  ty: StageType,
  decls: Vec<Decl>,
  log: Log,
}

#[derive(Debug)]
pub struct MockProgram {
  handle: u32,
  attribs: Vec<String>,
  uniforms: Vec<String>,
  log: Log,
}

unsafe impl Shader for Mock {
  type StageRepr = MockStage;

  type ProgramRepr = MockProgram;

  type UniformRepr = String;

  type ProgramHandle = u32;

  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError> {
    if !balanced_braces(src) {
      return Err(StageError::compilation_failed(ty, "unbalanced braces"));
    }

    let handle = self.gen_handle();
    self.record(Call::CompileStage(ty, handle));

    Ok(MockStage {
      handle,
      ty,
      decls: declarations(src),
      log: self.log(),
    })
  }

  unsafe fn destroy_stage(stage: &mut Self::StageRepr) {
    stage.log.borrow_mut().push(Call::DeleteStage(stage.handle));
  }

  unsafe fn new_program(
    &mut self,
    stages: &[&Self::StageRepr],
  ) -> Result<Self::ProgramRepr, ProgramError> {
    let vertex = find_stage(stages, StageType::VertexShader)
      .ok_or_else(|| ProgramError::link_failed("no vertex shader"))?;
    let fragment = find_stage(stages, StageType::FragmentShader)
      .ok_or_else(|| ProgramError::link_failed("no fragment shader"))?;

    let varyings: Vec<_> = names(&vertex.decls, Qualifier::Out).collect();
    let missing = names(&fragment.decls, Qualifier::In).find(|name| !varyings.contains(name));

    if let Some(missing) = missing {
      return Err(ProgramError::link_failed(format!(
        "fragment input {} is not written by the vertex shader",
        missing
      )));
    }

    let attribs = names(&vertex.decls, Qualifier::In).map(str::to_owned).collect();

    let mut uniforms: Vec<String> = Vec::new();
    for stage in stages {
      for name in names(&stage.decls, Qualifier::Uniform) {
        if !uniforms.iter().any(|u| u == name) {
          uniforms.push(name.to_owned());
        }
      }
    }

    let handle = self.gen_handle();
    self.record(Call::LinkProgram(handle));

    Ok(MockProgram {
      handle,
      attribs,
      uniforms,
      log: self.log(),
    })
  }

  unsafe fn destroy_program(program: &mut Self::ProgramRepr) {
    program
      .log
      .borrow_mut()
      .push(Call::DeleteProgram(program.handle));
  }

  fn program_handle(program: &Self::ProgramRepr) -> Self::ProgramHandle {
    program.handle
  }

  unsafe fn ask_vertex_attrib(&mut self, program: &Self::ProgramRepr, name: &str) -> Option<u32> {
    program
      .attribs
      .iter()
      .position(|attrib| attrib == name)
      .map(|index| index as u32)
  }

  unsafe fn ask_uniform(
    &mut self,
    program: &Self::ProgramRepr,
    name: &str,
  ) -> Option<Self::UniformRepr> {
    program.uniforms.iter().find(|u| *u == name).cloned()
  }

  unsafe fn use_program(&mut self, program: &Self::ProgramRepr) {
    self.record(Call::UseProgram(program.handle));
  }
}

unsafe impl Draw for Mock {
  unsafe fn enable_vertex_attrib(&mut self, index: u32) {
    self.record(Call::EnableAttrib(index));
  }

  unsafe fn vertex_attrib_pointer(&mut self, index: u32, desc: &VertexAttribDesc) {
    self.record(Call::AttribPointer(index, *desc));
  }

  unsafe fn disable_vertex_attrib(&mut self, index: u32) {
    self.record(Call::DisableAttrib(index));
  }

  unsafe fn draw_elements(
    &mut self,
    mode: Mode,
    count: usize,
    index_type: IndexType,
    offset: usize,
  ) {
    self.record(Call::DrawElements(mode, count, index_type, offset));
  }
}

macro_rules! impl_uniformable {
  ($t:ty, $variant:ident) => {
    unsafe impl Uniformable<Mock> for $t {
      unsafe fn update(self, backend: &mut Mock, uniform: &String) {
        backend.record(Call::Uniform(uniform.clone(), Value::$variant(self)));
      }
    }
  };
}

impl_uniformable!(f32, F32);
impl_uniformable!(i32, I32);
impl_uniformable!(V3, V3);
impl_uniformable!(V4, V4);
impl_uniformable!(M44, M44);

/// Geometry whose buffers are only pretend-bound.
#[derive(Clone, Copy, Debug)]
pub struct Mesh {
  pub positions: bool,
  pub normals: bool,
  pub mode: Mode,
  pub index_count: usize,
}

impl Mesh {
  pub fn cube() -> Self {
    Mesh {
      positions: true,
      normals: true,
      mode: Mode::Triangle,
      index_count: 36,
    }
  }
}

impl Drawable<Mock> for Mesh {
  fn bind_positions(&self, backend: &mut Mock) -> bool {
    backend.record(Call::BindPositions);
    self.positions
  }

  fn bind_normals(&self, backend: &mut Mock) -> bool {
    backend.record(Call::BindNormals);
    self.normals
  }

  fn bind_indices(&self, backend: &mut Mock) {
    backend.record(Call::BindIndices);
  }

  fn mode(&self) -> Mode {
    self.mode
  }

  fn index_count(&self) -> usize {
    self.index_count
  }
}

/// Create a context over a fresh mock backend, along with the backend’s call log.
pub fn context() -> (Context<Mock>, Log) {
  let _ = env_logger::builder().is_test(true).try_init();

  let backend = Mock::new();
  let log = backend.log();

  (Context::new(backend), log)
}

/// Take every call recorded so far, leaving the log empty.
pub fn drain(log: &Log) -> Vec<Call> {
  log.borrow_mut().drain(..).collect()
}

/// Handles of the programs bound so far.
pub fn uses(log: &Log) -> Vec<u32> {
  log
    .borrow()
    .iter()
    .filter_map(|call| match *call {
      Call::UseProgram(handle) => Some(handle),
      _ => None,
    })
    .collect()
}

/// Uniform uploads recorded so far.
pub fn uploads(log: &Log) -> Vec<(String, Value)> {
  log
    .borrow()
    .iter()
    .filter_map(|call| match call {
      Call::Uniform(name, value) => Some((name.clone(), value.clone())),
      _ => None,
    })
    .collect()
}

pub fn assert_m44_near(a: &M44, b: &M44) {
  for col in 0..4 {
    for row in 0..4 {
      assert!(
        (a[col][row] - b[col][row]).abs() < 1e-6,
        "{:?} != {:?}",
        a,
        b
      );
    }
  }
}
