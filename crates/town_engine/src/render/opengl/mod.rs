//! OpenGL 3.3 core backend
//!
//! Thin RAII wrappers over the handful of GL objects the townscape needs: two
//! shader programs, three vertex arrays and one texture. Every wrapper deletes
//! its GL object on drop, so all of them must be dropped while the context that
//! created them is still current.

pub mod buffer;
pub mod shader;
pub mod texture;

pub use buffer::GpuMesh;
pub use shader::{ShaderProgram, ShaderStage};
pub use texture::Texture2D;

use std::path::PathBuf;
use thiserror::Error;

/// OpenGL backend errors
#[derive(Error, Debug)]
pub enum GlError {
    /// A shader stage failed to compile
    #[error("{stage} shader failed to compile: {log}")]
    CompileFailed {
        /// Stage that failed
        stage: ShaderStage,
        /// Driver info log
        log: String,
    },

    /// The program failed to link
    #[error("Shader program failed to link: {0}")]
    LinkFailed(String),

    /// Shader source could not be read
    #[error("Failed to read shader source {path:?}: {source}")]
    SourceRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A string handed to GL contained an interior NUL byte
    #[error("String passed to OpenGL contains a NUL byte: {0}")]
    NulByte(#[from] std::ffi::NulError),
}

/// Result alias for the OpenGL backend
pub type GlResult<T> = Result<T, GlError>;

/// Fixed pipeline state for the townscape: depth testing on
pub fn init_pipeline_state() {
    // SAFETY: called with a current context after the function pointers are loaded.
    unsafe {
        gl::Enable(gl::DEPTH_TEST);
    }
}

/// Clear colour and depth buffers
pub fn clear(color: [f32; 3]) {
    let [r, g, b] = color;
    // SAFETY: plain state calls on the current context.
    unsafe {
        gl::ClearColor(r, g, b, 1.0);
        gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
    }
}

/// Resize the viewport to cover the framebuffer
pub fn set_viewport(width: i32, height: i32) {
    // SAFETY: plain state call on the current context.
    unsafe {
        gl::Viewport(0, 0, width, height);
    }
}
