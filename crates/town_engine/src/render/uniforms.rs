//! Shader uniform contract
//!
//! Lights, the camera and per-object materials write their state through
//! [`UniformSink`] instead of calling GL directly. The OpenGL shader program is the
//! production implementation; [`UniformRecorder`] captures the same writes in
//! memory so the lighting contract can be inspected without a GL context.

use std::collections::BTreeMap;

use crate::foundation::math::{Mat4, Vec3};

/// Destination for named shader uniforms
///
/// Names follow GLSL addressing, e.g. `"pointLights[0].diffuse"`. Writing a name
/// the program does not declare is silently ignored, matching `glUniform*` with
/// location `-1`.
pub trait UniformSink {
    /// Write a `vec3` uniform
    fn set_vec3(&mut self, name: &str, value: &Vec3);

    /// Write a `float` uniform
    fn set_float(&mut self, name: &str, value: f32);

    /// Write a `bool` uniform
    fn set_bool(&mut self, name: &str, value: bool);

    /// Write a `mat4` uniform
    fn set_mat4(&mut self, name: &str, value: &Mat4);
}

/// A single recorded uniform value
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    /// `vec3`
    Vec3(Vec3),
    /// `float`
    Float(f32),
    /// `bool`
    Bool(bool),
    /// `mat4`
    Mat4(Mat4),
}

/// In-memory [`UniformSink`] keeping the latest value written under each name
#[derive(Debug, Clone, Default)]
pub struct UniformRecorder {
    values: BTreeMap<String, UniformValue>,
    writes: usize,
}

impl UniformRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value written under `name`
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    /// Latest `vec3` written under `name`
    pub fn vec3(&self, name: &str) -> Option<Vec3> {
        match self.get(name) {
            Some(UniformValue::Vec3(v)) => Some(*v),
            _ => None,
        }
    }

    /// Latest `float` written under `name`
    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name) {
            Some(UniformValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// Latest `bool` written under `name`
    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(UniformValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// Latest `mat4` written under `name`
    pub fn mat4(&self, name: &str) -> Option<Mat4> {
        match self.get(name) {
            Some(UniformValue::Mat4(v)) => Some(*v),
            _ => None,
        }
    }

    /// Every distinct uniform name written so far, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Total number of writes, including overwrites
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn record(&mut self, name: &str, value: UniformValue) {
        self.writes += 1;
        self.values.insert(name.to_owned(), value);
    }
}

impl UniformSink for UniformRecorder {
    fn set_vec3(&mut self, name: &str, value: &Vec3) {
        self.record(name, UniformValue::Vec3(*value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, UniformValue::Float(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.record(name, UniformValue::Bool(value));
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.record(name, UniformValue::Mat4(*value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_latest_value() {
        let mut recorder = UniformRecorder::new();
        recorder.set_float("material.shininess", 16.0);
        recorder.set_float("material.shininess", 32.0);

        assert_eq!(recorder.float("material.shininess"), Some(32.0));
        assert_eq!(recorder.write_count(), 2);
        assert_eq!(recorder.names().count(), 1);
    }

    #[test]
    fn test_recorder_typed_getters_reject_other_types() {
        let mut recorder = UniformRecorder::new();
        recorder.set_bool("useTexture", true);

        assert_eq!(recorder.bool("useTexture"), Some(true));
        assert_eq!(recorder.float("useTexture"), None);
        assert_eq!(recorder.vec3("missing"), None);
    }
}
