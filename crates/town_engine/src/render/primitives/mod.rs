//! Rendering primitives: camera and CPU-side mesh data

pub mod camera;
pub mod mesh;

pub use camera::{Camera, CameraMovement};
pub use mesh::{Mesh, Vertex};
