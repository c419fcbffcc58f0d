//! Frame renderer
//!
//! Owns every GL resource and draws one frame from a [`SceneState`]:
//! clear, lit pass (camera position, lights, projection/view, objects) and
//! finally the unlit lamp markers.

use crate::assets::ImageData;
use crate::core::config::RenderConfig;
use crate::render::opengl::{self, GlResult, GpuMesh, ShaderProgram, Texture2D};
use crate::render::primitives::Mesh;
use crate::render::uniforms::UniformSink;
use crate::scene::{lamp_color, lamp_models, MeshKind, SceneState};

/// GL resources and per-frame draw sequence
pub struct Renderer {
    lighting_program: ShaderProgram,
    lamp_program: ShaderProgram,
    cube: GpuMesh,
    prism: GpuMesh,
    wall_texture: Texture2D,
    clear_color: [f32; 3],
}

impl Renderer {
    /// Compile both programs and upload meshes and the wall texture
    ///
    /// Requires a current GL context. A missing or undecodable wall texture is
    /// not fatal: textured objects fall back to plain white.
    pub fn new(config: &RenderConfig) -> GlResult<Self> {
        let lighting_program = ShaderProgram::from_config(&config.lighting_shader)?;
        let lamp_program = ShaderProgram::from_config(&config.lamp_shader)?;

        let wall_texture = match ImageData::from_file(&config.wall_texture) {
            Ok(image) => Texture2D::from_image(&image),
            Err(e) => {
                log::warn!("Failed to load wall texture, using plain white: {}", e);
                Texture2D::white()
            }
        };

        Ok(Self {
            lighting_program,
            lamp_program,
            cube: GpuMesh::upload(&Mesh::cube()),
            prism: GpuMesh::upload(&Mesh::triangle_prism()),
            wall_texture,
            clear_color: config.clear_color,
        })
    }

    /// Draw one frame for a framebuffer of the given aspect ratio
    pub fn render_frame(&mut self, scene: &SceneState, aspect: f32) {
        opengl::clear(self.clear_color);

        let projection = scene.projection(aspect);
        let view = scene.view();

        let program = &mut self.lighting_program;
        program.use_program();
        program.set_vec3("viewPos", &scene.camera.position);
        scene.lights.set_up_lights(&mut *program);
        program.set_mat4("projection", &projection);
        program.set_mat4("view", &view);

        for object in &scene.objects {
            object.set_up_material(&mut *program);
            if object.textured {
                self.wall_texture.bind();
            }
            match object.mesh {
                MeshKind::Cube => self.cube.draw(),
                MeshKind::Prism => self.prism.draw(),
            }
        }

        let program = &mut self.lamp_program;
        program.use_program();
        program.set_mat4("projection", &projection);
        program.set_mat4("view", &view);
        program.set_vec3("color", &lamp_color(scene.lights.point_lights_on()));
        for model in lamp_models(&scene.lights) {
            program.set_mat4("model", &model);
            self.cube.draw();
        }

        log::trace!("Frame drawn: {} objects, aspect {:.3}", scene.objects.len(), aspect);
    }
}
