//! Vertex array upload

use std::mem::{offset_of, size_of};

use gl::types::{GLsizei, GLsizeiptr, GLuint};

use crate::render::primitives::mesh::{Mesh, Vertex};

/// Mesh resident on the GPU as a VAO with its vertex (and optional index) buffer
///
/// Attribute locations: 0 = position, 1 = normal, 2 = texture coordinate.
pub struct GpuMesh {
    vao: GLuint,
    vbo: GLuint,
    ebo: Option<GLuint>,
    draw_count: GLsizei,
}

impl GpuMesh {
    /// Upload `mesh` with `STATIC_DRAW` usage
    pub fn upload(mesh: &Mesh) -> Self {
        let vertex_bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices);
        let stride = size_of::<Vertex>() as GLsizei;

        let mut vao = 0;
        let mut vbo = 0;
        // SAFETY: buffers are sized from the slices they are filled from and the
        // attribute offsets come from the `#[repr(C)]` vertex layout.
        let ebo = unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                vertex_bytes.len() as GLsizeiptr,
                vertex_bytes.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            let ebo = if mesh.is_indexed() {
                let index_bytes: &[u8] = bytemuck::cast_slice(&mesh.indices);
                let mut ebo = 0;
                gl::GenBuffers(1, &mut ebo);
                gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
                gl::BufferData(
                    gl::ELEMENT_ARRAY_BUFFER,
                    index_bytes.len() as GLsizeiptr,
                    index_bytes.as_ptr().cast(),
                    gl::STATIC_DRAW,
                );
                Some(ebo)
            } else {
                None
            };

            enable_attribute(0, 3, stride, offset_of!(Vertex, position));
            enable_attribute(1, 3, stride, offset_of!(Vertex, normal));
            enable_attribute(2, 2, stride, offset_of!(Vertex, tex_coord));

            gl::BindVertexArray(0);
            ebo
        };

        log::debug!(
            "Uploaded mesh: VAO {}, {} vertices, {} indices",
            vao,
            mesh.vertices.len(),
            mesh.indices.len()
        );

        Self {
            vao,
            vbo,
            ebo,
            draw_count: mesh.draw_count() as GLsizei,
        }
    }

    /// Draw the whole mesh as triangles with the currently bound program
    pub fn draw(&self) {
        // SAFETY: the VAO and its buffers are owned by this wrapper.
        unsafe {
            gl::BindVertexArray(self.vao);
            if self.ebo.is_some() {
                gl::DrawElements(gl::TRIANGLES, self.draw_count, gl::UNSIGNED_INT, std::ptr::null());
            } else {
                gl::DrawArrays(gl::TRIANGLES, 0, self.draw_count);
            }
        }
    }
}

impl Drop for GpuMesh {
    fn drop(&mut self) {
        // SAFETY: all names are owned by this wrapper.
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            if let Some(ebo) = self.ebo {
                gl::DeleteBuffers(1, &ebo);
            }
        }
    }
}

unsafe fn enable_attribute(location: GLuint, components: i32, stride: GLsizei, offset: usize) {
    gl::VertexAttribPointer(location, components, gl::FLOAT, gl::FALSE, stride, offset as *const _);
    gl::EnableVertexAttribArray(location);
}
