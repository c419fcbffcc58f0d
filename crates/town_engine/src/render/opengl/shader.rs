//! GLSL program compilation and uniform upload

use std::collections::HashMap;
use std::ffi::CString;
use std::fmt;
use std::path::Path;

use gl::types::{GLchar, GLenum, GLint, GLuint};

use super::{GlError, GlResult};
use crate::core::config::ShaderConfig;
use crate::foundation::math::{Mat4, Vec3};
use crate::render::uniforms::UniformSink;

/// Programmable pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl ShaderStage {
    fn gl_enum(self) -> GLenum {
        match self {
            Self::Vertex => gl::VERTEX_SHADER,
            Self::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// Linked vertex + fragment program
///
/// Uniform locations are looked up by name on first use and cached. Unknown
/// names resolve to `-1`, which GL silently ignores, so writing a uniform the
/// program optimised away is harmless.
pub struct ShaderProgram {
    id: GLuint,
    locations: HashMap<String, GLint>,
}

impl ShaderProgram {
    /// Compile and link the program described by `config`
    pub fn from_config(config: &ShaderConfig) -> GlResult<Self> {
        Self::from_files(&config.vertex_shader_path, &config.fragment_shader_path)
    }

    /// Read, compile and link a program from GLSL source files
    pub fn from_files(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> GlResult<Self> {
        let vertex_source = read_source(vertex_path.as_ref())?;
        let fragment_source = read_source(fragment_path.as_ref())?;

        let program = Self::from_sources(&vertex_source, &fragment_source)?;
        log::info!(
            "Linked shader program {} from {:?} + {:?}",
            program.id,
            vertex_path.as_ref(),
            fragment_path.as_ref()
        );
        Ok(program)
    }

    /// Compile and link a program from in-memory GLSL
    pub fn from_sources(vertex_source: &str, fragment_source: &str) -> GlResult<Self> {
        let vertex = compile_stage(ShaderStage::Vertex, vertex_source)?;
        let fragment = match compile_stage(ShaderStage::Fragment, fragment_source) {
            Ok(fragment) => fragment,
            Err(e) => {
                // SAFETY: `vertex` is a shader object created above.
                unsafe { gl::DeleteShader(vertex) };
                return Err(e);
            }
        };

        // SAFETY: both shader objects compiled successfully on the current context;
        // they are flagged for deletion once the program no longer references them.
        let id = unsafe {
            let id = gl::CreateProgram();
            gl::AttachShader(id, vertex);
            gl::AttachShader(id, fragment);
            gl::LinkProgram(id);
            gl::DetachShader(id, vertex);
            gl::DetachShader(id, fragment);
            gl::DeleteShader(vertex);
            gl::DeleteShader(fragment);
            id
        };

        let mut status = GLint::from(gl::FALSE);
        // SAFETY: `id` is the program created above.
        unsafe { gl::GetProgramiv(id, gl::LINK_STATUS, &mut status) };
        if status != GLint::from(gl::TRUE) {
            let info = program_info_log(id);
            log::error!("Shader program link failed:\n{}", info);
            // SAFETY: the failed program is not used again.
            unsafe { gl::DeleteProgram(id) };
            return Err(GlError::LinkFailed(info));
        }

        Ok(Self { id, locations: HashMap::new() })
    }

    /// Make this the active program
    pub fn use_program(&self) {
        // SAFETY: `self.id` is a linked program owned by this wrapper.
        unsafe { gl::UseProgram(self.id) };
    }

    /// Location of `name`, `-1` when the program has no such active uniform
    pub fn uniform_location(&mut self, name: &str) -> GlResult<GLint> {
        if let Some(&location) = self.locations.get(name) {
            return Ok(location);
        }

        let c_name = CString::new(name)?;
        // SAFETY: `c_name` is NUL-terminated and outlives the call.
        let location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };
        if location < 0 {
            log::debug!("Uniform '{}' is not active in program {}", name, self.id);
        }
        self.locations.insert(name.to_owned(), location);
        Ok(location)
    }

    fn location_or_skip(&mut self, name: &str) -> Option<GLint> {
        match self.uniform_location(name) {
            Ok(location) if location >= 0 => Some(location),
            Ok(_) => None,
            Err(e) => {
                log::warn!("Skipping uniform '{}': {}", name.escape_debug(), e);
                None
            }
        }
    }
}

impl UniformSink for ShaderProgram {
    fn set_vec3(&mut self, name: &str, value: &Vec3) {
        if let Some(location) = self.location_or_skip(name) {
            // SAFETY: `value` points at three contiguous f32s.
            unsafe { gl::Uniform3fv(location, 1, value.as_ptr()) };
        }
    }

    fn set_float(&mut self, name: &str, value: f32) {
        if let Some(location) = self.location_or_skip(name) {
            // SAFETY: scalar upload to a valid location.
            unsafe { gl::Uniform1f(location, value) };
        }
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        if let Some(location) = self.location_or_skip(name) {
            // SAFETY: scalar upload to a valid location.
            unsafe { gl::Uniform1i(location, GLint::from(value)) };
        }
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        if let Some(location) = self.location_or_skip(name) {
            // SAFETY: nalgebra stores matrices column-major, as GL expects without transposition.
            unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, value.as_ptr()) };
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        // SAFETY: the program is owned by this wrapper and not used after drop.
        unsafe { gl::DeleteProgram(self.id) };
    }
}

fn read_source(path: &Path) -> GlResult<String> {
    std::fs::read_to_string(path).map_err(|source| GlError::SourceRead {
        path: path.to_path_buf(),
        source,
    })
}

fn compile_stage(stage: ShaderStage, source: &str) -> GlResult<GLuint> {
    let c_source = CString::new(source)?;

    // SAFETY: `c_source` is NUL-terminated; a null length array means "read to NUL".
    let id = unsafe {
        let id = gl::CreateShader(stage.gl_enum());
        gl::ShaderSource(id, 1, &c_source.as_ptr(), std::ptr::null());
        gl::CompileShader(id);
        id
    };

    let mut status = GLint::from(gl::FALSE);
    // SAFETY: `id` is the shader created above.
    unsafe { gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status) };
    if status != GLint::from(gl::TRUE) {
        let info = shader_info_log(id);
        log::error!("{} shader compilation failed:\n{}", stage, info);
        // SAFETY: the failed shader is not used again.
        unsafe { gl::DeleteShader(id) };
        return Err(GlError::CompileFailed { stage, log: info });
    }

    log::debug!("Compiled {} shader {}", stage, id);
    Ok(id)
}

fn shader_info_log(id: GLuint) -> String {
    let mut length: GLint = 0;
    // SAFETY: `id` is a valid shader object.
    unsafe { gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut length) };

    let mut buffer = vec![0u8; length.max(1) as usize];
    let mut written: GLint = 0;
    // SAFETY: `buffer` has room for `length` bytes including the terminator.
    unsafe {
        gl::GetShaderInfoLog(id, length, &mut written, buffer.as_mut_ptr().cast::<GLchar>());
    }
    buffer.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buffer).into_owned()
}

fn program_info_log(id: GLuint) -> String {
    let mut length: GLint = 0;
    // SAFETY: `id` is a valid program object.
    unsafe { gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut length) };

    let mut buffer = vec![0u8; length.max(1) as usize];
    let mut written: GLint = 0;
    // SAFETY: `buffer` has room for `length` bytes including the terminator.
    unsafe {
        gl::GetProgramInfoLog(id, length, &mut written, buffer.as_mut_ptr().cast::<GLchar>());
    }
    buffer.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buffer).into_owned()
}
