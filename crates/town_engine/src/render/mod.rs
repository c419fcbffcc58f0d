//! Rendering
//!
//! GL-free pieces (lights, camera, meshes, the uniform contract) sit beside the
//! OpenGL backend, window and frame renderer that consume them.

pub mod lighting;
pub mod opengl;
pub mod primitives;
pub mod renderer;
pub mod uniforms;
pub mod window;

pub use lighting::{Attenuation, DirectionalLight, LightChannels, LightRig, PointLight, MAX_POINT_LIGHTS};
pub use primitives::{Camera, CameraMovement, Mesh, Vertex};
pub use renderer::Renderer;
pub use uniforms::{UniformRecorder, UniformSink, UniformValue};
pub use window::{WindowError, WindowHandle, WindowResult};
