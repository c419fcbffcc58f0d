//! # Unified Configuration System
//!
//! Every tunable the townscape reads at startup lives here: window, camera,
//! lighting start state, and render resources. Defaults reproduce the reference
//! scene exactly, so running without a config file gives the canonical view.
//!
//! ## Configuration Categories
//!
//! - **Window Config**: size, title, cursor capture
//! - **Camera Config**: start pose, speeds, zoom range, clip planes
//! - **Lighting Config**: which light groups start switched on
//! - **Render Config**: clear colour, shader and texture paths

use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

pub use crate::config::{Config, ConfigError};

/// Resource directory baked in by the build script
const BUILD_RESOURCE_DIR: &str = env!("TOWN_RESOURCE_DIR");

/// # Shader Configuration
///
/// GLSL source paths for one shading program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderConfig {
    /// Path to the vertex shader source
    pub vertex_shader_path: PathBuf,
    /// Path to the fragment shader source
    pub fragment_shader_path: PathBuf,
}

impl ShaderConfig {
    /// Create a new shader configuration
    pub fn new(vertex_path: impl Into<PathBuf>, fragment_path: impl Into<PathBuf>) -> Self {
        Self {
            vertex_shader_path: vertex_path.into(),
            fragment_shader_path: fragment_path.into(),
        }
    }

    /// Create shader config with automatic path resolution
    ///
    /// Tries the common shader locations relative to the working directory and
    /// falls back to the workspace `resources/shaders` directory.
    pub fn with_path_resolution(base_vertex: &str, base_fragment: &str) -> Self {
        Self {
            vertex_shader_path: resolve_resource("shaders", base_vertex),
            fragment_shader_path: resolve_resource("shaders", base_fragment),
        }
    }

    /// Validate that shader files exist
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.vertex_shader_path.exists() {
            return Err(ConfigError::Invalid(format!(
                "Vertex shader not found: {}",
                self.vertex_shader_path.display()
            )));
        }
        if !self.fragment_shader_path.exists() {
            return Err(ConfigError::Invalid(format!(
                "Fragment shader not found: {}",
                self.fragment_shader_path.display()
            )));
        }
        Ok(())
    }
}

/// Find `file` under one of the usual resource directories
fn resolve_resource(kind: &str, file: &str) -> PathBuf {
    let search_dirs = [
        PathBuf::from("resources").join(kind),
        PathBuf::from(kind),
        PathBuf::from("../resources").join(kind),
    ];

    search_dirs
        .iter()
        .map(|dir| dir.join(file))
        .find(|candidate| candidate.exists())
        .unwrap_or_else(|| Path::new(BUILD_RESOURCE_DIR).join(kind).join(file))
}

/// # Window Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial client width in pixels
    pub width: u32,
    /// Initial client height in pixels
    pub height: u32,
    /// Title bar text
    pub title: String,
    /// Hide and lock the cursor so mouse deltas drive the camera
    pub capture_cursor: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            title: "Townscape".to_string(),
            capture_cursor: true,
        }
    }
}

/// # Camera Configuration
///
/// Angles are in degrees. `zoom` doubles as the vertical field of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting world position
    pub position: [f32; 3],
    /// World up reference
    pub world_up: [f32; 3],
    /// Starting yaw (-90 faces -Z)
    pub yaw: f32,
    /// Starting pitch
    pub pitch: f32,
    /// Units per second for keyboard movement
    pub movement_speed: f32,
    /// Degrees per pixel of mouse movement
    pub mouse_sensitivity: f32,
    /// Starting zoom
    pub zoom: f32,
    /// Smallest zoom reachable by scrolling
    pub min_zoom: f32,
    /// Largest zoom reachable by scrolling
    pub max_zoom: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl CameraConfig {
    /// Check the ranges the camera clamps against
    ///
    /// Zoom bounds must satisfy `0 < min_zoom <= max_zoom`, and the clip planes
    /// `0 < near < far`, all finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_zoom, self.max_zoom);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::Invalid(format!(
                "camera zoom range [{min}, {max}] must satisfy 0 < min_zoom <= max_zoom"
            )));
        }
        if !self.zoom.is_finite() {
            return Err(ConfigError::Invalid(format!("camera zoom {} is not finite", self.zoom)));
        }
        if !(self.near.is_finite() && self.far.is_finite() && self.near > 0.0 && self.near < self.far) {
            return Err(ConfigError::Invalid(format!(
                "camera clip planes near={} far={} must satisfy 0 < near < far",
                self.near, self.far
            )));
        }
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [1.0, 1.5, 14.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: -90.0,
            pitch: 0.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            zoom: 45.0,
            min_zoom: 1.0,
            max_zoom: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// # Lighting Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Whether the directional light starts switched on
    pub directional_on: bool,
    /// Whether the four point lights start switched on
    pub point_lights_on: bool,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            directional_on: false,
            point_lights_on: true,
        }
    }
}

/// # Render Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Framebuffer clear colour
    pub clear_color: [f32; 3],
    /// Texture applied to the buildings
    pub wall_texture: PathBuf,
    /// Phong program used for every scene object
    pub lighting_shader: ShaderConfig,
    /// Flat-colour program used for the lamp markers
    pub lamp_shader: ShaderConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.1, 0.1, 0.1],
            wall_texture: resolve_resource("textures", "wall_color.png"),
            lighting_shader: ShaderConfig::with_path_resolution("phong.vs", "phong.fs"),
            lamp_shader: ShaderConfig::with_path_resolution("lamp.vs", "lamp.fs"),
        }
    }
}

/// # Application Configuration
///
/// Top-level config loaded from `townscape.toml` (or `.ron`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Window settings
    pub window: WindowConfig,
    /// Camera settings
    pub camera: CameraConfig,
    /// Lighting start state
    pub lighting: LightingConfig,
    /// Render resources
    pub render: RenderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            lighting: LightingConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Config for AppConfig {}

impl AppConfig {
    /// Parsed log level, falling back to `Info` for unknown names
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Reject values that would break start-up: camera ranges and shader paths
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.camera.validate()?;
        self.render.lighting_shader.validate()?;
        self.render.lamp_shader.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("town_engine_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_match_reference_scene() {
        let config = AppConfig::default();

        assert_eq!(config.window.width, 1000);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.camera.position, [1.0, 1.5, 14.0]);
        assert_eq!(config.camera.yaw, -90.0);
        assert_eq!(config.camera.min_zoom, 1.0);
        assert_eq!(config.camera.max_zoom, 45.0);
        assert!(!config.lighting.directional_on);
        assert!(config.lighting.point_lights_on);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            log_level = "debug"

            [camera]
            movement_speed = 5.0
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.camera.movement_speed, 5.0);
        assert_eq!(config.camera.mouse_sensitivity, 0.1);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_toml_file_roundtrip() {
        let path = temp_path("roundtrip.toml");
        let mut config = AppConfig::default();
        config.window.title = "Night Town".to_string();
        config.lighting.directional_on = true;

        config.save_to_file(&path).unwrap();
        let loaded = AppConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let loaded = AppConfig::load_or_default(temp_path("does_not_exist.toml")).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("broken.toml");
        std::fs::write(&path, "window = [not valid").unwrap();
        let result = AppConfig::load_or_default(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let result = AppConfig::default().save_to_file(temp_path("settings.yaml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_shipped_config_parses_to_reference_values() {
        let config: AppConfig = toml::from_str(include_str!("../../../../townscape.toml")).unwrap();
        let defaults = AppConfig::default();

        assert_eq!(config.window, defaults.window);
        assert_eq!(config.camera, defaults.camera);
        assert_eq!(config.lighting, defaults.lighting);
        assert_eq!(config.render.clear_color, defaults.render.clear_color);
        assert!(config.render.lighting_shader.fragment_shader_path.ends_with("phong.fs"));
    }

    #[test]
    fn test_default_shader_paths_resolve_to_existing_files() {
        let render = RenderConfig::default();

        assert!(render.lighting_shader.validate().is_ok());
        assert!(render.lamp_shader.validate().is_ok());
        assert!(render.wall_texture.exists());

        let missing = ShaderConfig::new("nowhere/phong.vs", "nowhere/phong.fs");
        match missing.validate() {
            Err(ConfigError::Invalid(message)) => assert!(message.contains("Vertex shader not found")),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_zoom_range_is_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [camera]
            min_zoom = 60.0
            max_zoom = 10.0
            "#,
        )
        .unwrap();

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_finite_or_non_positive_zoom_bounds_are_rejected() {
        for (min, max) in [(f32::NAN, 45.0), (1.0, f32::INFINITY), (0.0, 45.0), (-5.0, 45.0)] {
            let mut camera = CameraConfig::default();
            camera.min_zoom = min;
            camera.max_zoom = max;
            assert!(camera.validate().is_err(), "[{min}, {max}] accepted");
        }
    }

    #[test]
    fn test_bad_clip_planes_are_rejected() {
        let mut camera = CameraConfig::default();
        camera.near = 10.0;
        camera.far = 1.0;
        assert!(matches!(camera.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_shader_fails_app_validation() {
        let mut config = AppConfig::default();
        config.render.lamp_shader = ShaderConfig::new("nowhere/lamp.vs", "nowhere/lamp.fs");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
