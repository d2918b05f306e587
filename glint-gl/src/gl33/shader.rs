use crate::gl33::GL33;
use gl::{self, types::*};
use glint::{
  backend::shader::{Shader, Uniformable},
  linear::{M44, V3, V4},
  shader::{ProgramError, StageError, StageType},
};
use std::{ffi::CString, ptr::null};

/// Compiled shader stage.
#[derive(Debug)]
pub struct Stage {
  handle: GLuint,
}

/// Linked shader program.
#[derive(Debug)]
pub struct Program {
  handle: GLuint,
}

unsafe impl Shader for GL33 {
  type StageRepr = Stage;

  type ProgramRepr = Program;

  type UniformRepr = GLint;

  type ProgramHandle = GLuint;

  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError> {
    let c_src = CString::new(src.as_bytes())
      .map_err(|_| StageError::compilation_failed(ty, "source contains a nul byte"))?;

    let handle = gl::CreateShader(opengl_shader_type(ty));

    if handle == 0 {
      return Err(StageError::compilation_failed(
        ty,
        "unable to create shader stage",
      ));
    }

    gl::ShaderSource(handle, 1, [c_src.as_ptr()].as_ptr(), null());
    gl::CompileShader(handle);

    let mut compiled = GLint::from(gl::FALSE);
    gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut compiled);

    if compiled == GLint::from(gl::TRUE) {
      Ok(Stage { handle })
    } else {
      let log = shader_info_log(handle);
      gl::DeleteShader(handle);

      Err(StageError::compilation_failed(ty, log))
    }
  }

  unsafe fn destroy_stage(stage: &mut Self::StageRepr) {
    gl::DeleteShader(stage.handle);
  }

  unsafe fn new_program(
    &mut self,
    stages: &[&Self::StageRepr],
  ) -> Result<Self::ProgramRepr, ProgramError> {
    let handle = gl::CreateProgram();

    if handle == 0 {
      return Err(ProgramError::link_failed("unable to create shader program"));
    }

    for stage in stages {
      gl::AttachShader(handle, stage.handle);
    }

    gl::LinkProgram(handle);

    let mut linked = GLint::from(gl::FALSE);
    gl::GetProgramiv(handle, gl::LINK_STATUS, &mut linked);

    if linked == GLint::from(gl::TRUE) {
      Ok(Program { handle })
    } else {
      let log = program_info_log(handle);
      gl::DeleteProgram(handle);

      Err(ProgramError::link_failed(log))
    }
  }

  unsafe fn destroy_program(program: &mut Self::ProgramRepr) {
    gl::DeleteProgram(program.handle);
  }

  fn program_handle(program: &Self::ProgramRepr) -> Self::ProgramHandle {
    program.handle
  }

  unsafe fn ask_vertex_attrib(&mut self, program: &Self::ProgramRepr, name: &str) -> Option<u32> {
    let c_name = CString::new(name.as_bytes()).ok()?;
    let location = gl::GetAttribLocation(program.handle, c_name.as_ptr() as *const GLchar);

    // negative locations are inactive attributes
    if location < 0 {
      None
    } else {
      Some(location as u32)
    }
  }

  unsafe fn ask_uniform(
    &mut self,
    program: &Self::ProgramRepr,
    name: &str,
  ) -> Option<Self::UniformRepr> {
    let c_name = CString::new(name.as_bytes()).ok()?;
    let location = gl::GetUniformLocation(program.handle, c_name.as_ptr() as *const GLchar);

    if location < 0 {
      None
    } else {
      Some(location)
    }
  }

  unsafe fn use_program(&mut self, program: &Self::ProgramRepr) {
    gl::UseProgram(program.handle);
  }
}

fn opengl_shader_type(t: StageType) -> GLenum {
  match t {
    StageType::VertexShader => gl::VERTEX_SHADER,
    StageType::FragmentShader => gl::FRAGMENT_SHADER,
  }
}

unsafe fn shader_info_log(handle: GLuint) -> String {
  let mut log_len: GLint = 0;
  gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

  let mut log = vec![0u8; log_len.max(0) as usize];
  let mut written: GLsizei = 0;
  gl::GetShaderInfoLog(
    handle,
    log_len,
    &mut written,
    log.as_mut_ptr() as *mut GLchar,
  );

  log.truncate(written.max(0) as usize);
  String::from_utf8_lossy(&log).into_owned()
}

unsafe fn program_info_log(handle: GLuint) -> String {
  let mut log_len: GLint = 0;
  gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

  let mut log = vec![0u8; log_len.max(0) as usize];
  let mut written: GLsizei = 0;
  gl::GetProgramInfoLog(
    handle,
    log_len,
    &mut written,
    log.as_mut_ptr() as *mut GLchar,
  );

  log.truncate(written.max(0) as usize);
  String::from_utf8_lossy(&log).into_owned()
}

unsafe impl Uniformable<GL33> for f32 {
  unsafe fn update(self, _: &mut GL33, uniform: &GLint) {
    gl::Uniform1f(*uniform, self);
  }
}

unsafe impl Uniformable<GL33> for i32 {
  unsafe fn update(self, _: &mut GL33, uniform: &GLint) {
    gl::Uniform1i(*uniform, self);
  }
}

unsafe impl Uniformable<GL33> for V3 {
  unsafe fn update(self, _: &mut GL33, uniform: &GLint) {
    gl::Uniform3fv(*uniform, 1, self.as_ptr());
  }
}

unsafe impl Uniformable<GL33> for V4 {
  unsafe fn update(self, _: &mut GL33, uniform: &GLint) {
    gl::Uniform4fv(*uniform, 1, self.as_ptr());
  }
}

unsafe impl Uniformable<GL33> for M44 {
  unsafe fn update(self, _: &mut GL33, uniform: &GLint) {
    gl::UniformMatrix4fv(*uniform, 1, gl::FALSE, self.as_ptr() as *const GLfloat);
  }
}
