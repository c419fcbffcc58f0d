//! Mesh representation for the fixed scene geometry
//!
//! Pure CPU-side vertex data. The OpenGL backend uploads it once at startup
//! (see `render::opengl::buffer`).

/// 3D vertex with position, normal, and texture coordinate
///
/// # Memory Layout
/// `#[repr(C)]` keeps the 8-float interleaved layout the vertex attribute pointers
/// expect: location 0 = position, 1 = normal, 2 = texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in object space
    pub position: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],

    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

// Safe to implement Pod and Zeroable for Vertex since it only contains f32 arrays
unsafe impl bytemuck::Pod for Vertex {}
unsafe impl bytemuck::Zeroable for Vertex {}

impl Vertex {
    /// Create a vertex
    pub const fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self { position, normal, tex_coord }
    }
}

/// Triangle-list mesh, optionally indexed
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Triangle indices; empty for non-indexed meshes drawn with `glDrawArrays`
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a mesh from raw data
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Whether the mesh is drawn through an index buffer
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Number of vertices submitted per draw call
    pub fn draw_count(&self) -> usize {
        if self.is_indexed() {
            self.indices.len()
        } else {
            self.vertices.len()
        }
    }

    /// Unit cube spanning [0, 1]³ with per-face normals and texture coordinates
    ///
    /// The origin sits on a corner rather than the centre, so a model matrix of
    /// `translate(t) * scale(s)` places the box's minimum corner at `t`.
    pub fn cube() -> Self {
        const N_BACK: [f32; 3] = [0.0, 0.0, -1.0];
        const N_RIGHT: [f32; 3] = [1.0, 0.0, 0.0];
        const N_FRONT: [f32; 3] = [0.0, 0.0, 1.0];
        const N_LEFT: [f32; 3] = [-1.0, 0.0, 0.0];
        const N_TOP: [f32; 3] = [0.0, 1.0, 0.0];
        const N_BOTTOM: [f32; 3] = [0.0, -1.0, 0.0];

        let vertices = vec![
            // Back (z = 0)
            Vertex::new([0.0, 0.0, 0.0], N_BACK, [0.0, 1.0]),
            Vertex::new([1.0, 0.0, 0.0], N_BACK, [1.0, 1.0]),
            Vertex::new([1.0, 1.0, 0.0], N_BACK, [1.0, 0.0]),
            Vertex::new([0.0, 1.0, 0.0], N_BACK, [0.0, 0.0]),
            // Right (x = 1)
            Vertex::new([1.0, 0.0, 0.0], N_RIGHT, [0.0, 1.0]),
            Vertex::new([1.0, 1.0, 0.0], N_RIGHT, [0.0, 0.0]),
            Vertex::new([1.0, 0.0, 1.0], N_RIGHT, [1.0, 1.0]),
            Vertex::new([1.0, 1.0, 1.0], N_RIGHT, [1.0, 0.0]),
            // Front (z = 1)
            Vertex::new([0.0, 0.0, 1.0], N_FRONT, [0.0, 1.0]),
            Vertex::new([1.0, 0.0, 1.0], N_FRONT, [1.0, 1.0]),
            Vertex::new([1.0, 1.0, 1.0], N_FRONT, [1.0, 0.0]),
            Vertex::new([0.0, 1.0, 1.0], N_FRONT, [0.0, 0.0]),
            // Left (x = 0)
            Vertex::new([0.0, 0.0, 1.0], N_LEFT, [0.0, 1.0]),
            Vertex::new([0.0, 1.0, 1.0], N_LEFT, [0.0, 0.0]),
            Vertex::new([0.0, 1.0, 0.0], N_LEFT, [1.0, 0.0]),
            Vertex::new([0.0, 0.0, 0.0], N_LEFT, [1.0, 1.0]),
            // Top (y = 1)
            Vertex::new([1.0, 1.0, 1.0], N_TOP, [0.0, 0.0]),
            Vertex::new([1.0, 1.0, 0.0], N_TOP, [0.0, 0.0]),
            Vertex::new([0.0, 1.0, 0.0], N_TOP, [0.0, 0.0]),
            Vertex::new([0.0, 1.0, 1.0], N_TOP, [0.0, 0.0]),
            // Bottom (y = 0)
            Vertex::new([0.0, 0.0, 0.0], N_BOTTOM, [0.0, 0.0]),
            Vertex::new([1.0, 0.0, 0.0], N_BOTTOM, [0.0, 0.0]),
            Vertex::new([1.0, 0.0, 1.0], N_BOTTOM, [0.0, 0.0]),
            Vertex::new([0.0, 0.0, 1.0], N_BOTTOM, [0.0, 0.0]),
        ];

        let indices = vec![
            0, 3, 2, 2, 1, 0, //
            4, 5, 7, 7, 6, 4, //
            8, 9, 10, 10, 11, 8, //
            12, 13, 14, 14, 15, 12, //
            16, 17, 18, 18, 19, 16, //
            20, 21, 22, 22, 23, 20,
        ];

        Self::new(vertices, indices)
    }

    /// Unit triangle (base [0, 1] on x, apex at (0.5, 1)) extruded from z = 0 to z = -1
    ///
    /// Non-indexed: 8 triangles, 24 vertices. The slanted faces carry the
    /// unnormalized face normals `(±1, 1, 0)`; the shader normalizes after the
    /// normal-matrix transform.
    pub fn triangle_prism() -> Self {
        const FRONT: [f32; 3] = [0.0, 0.0, 1.0];
        const BACK: [f32; 3] = [0.0, 0.0, -1.0];
        const RIGHT_SLOPE: [f32; 3] = [1.0, 1.0, 0.0];
        const LEFT_SLOPE: [f32; 3] = [-1.0, 1.0, 0.0];
        const BOTTOM: [f32; 3] = [0.0, -1.0, 0.0];

        let corners: [([f32; 3], [f32; 3]); 24] = [
            // Front cap
            ([0.0, 0.0, 0.0], FRONT),
            ([1.0, 0.0, 0.0], FRONT),
            ([0.5, 1.0, 0.0], FRONT),
            // Back cap
            ([0.0, 0.0, -1.0], BACK),
            ([1.0, 0.0, -1.0], BACK),
            ([0.5, 1.0, -1.0], BACK),
            // Right slope
            ([1.0, 0.0, 0.0], RIGHT_SLOPE),
            ([1.0, 0.0, -1.0], RIGHT_SLOPE),
            ([0.5, 1.0, -1.0], RIGHT_SLOPE),
            ([1.0, 0.0, 0.0], RIGHT_SLOPE),
            ([0.5, 1.0, -1.0], RIGHT_SLOPE),
            ([0.5, 1.0, 0.0], RIGHT_SLOPE),
            // Left slope
            ([0.0, 0.0, 0.0], LEFT_SLOPE),
            ([0.5, 1.0, 0.0], LEFT_SLOPE),
            ([0.0, 0.0, -1.0], LEFT_SLOPE),
            ([0.5, 1.0, 0.0], LEFT_SLOPE),
            ([0.5, 1.0, -1.0], LEFT_SLOPE),
            ([0.0, 0.0, -1.0], LEFT_SLOPE),
            // Bottom
            ([0.0, 0.0, 0.0], BOTTOM),
            ([1.0, 0.0, 0.0], BOTTOM),
            ([1.0, 0.0, -1.0], BOTTOM),
            ([1.0, 0.0, -1.0], BOTTOM),
            ([0.0, 0.0, -1.0], BOTTOM),
            ([0.0, 0.0, 0.0], BOTTOM),
        ];

        let vertices = corners
            .iter()
            .map(|&(position, normal)| Vertex::new(position, normal, [0.0, 0.0]))
            .collect();

        Self::new(vertices, Vec::new())
    }
}
