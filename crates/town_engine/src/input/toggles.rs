//! Discrete light toggles
//!
//! Number-row presses flip lighting flags. The flip itself is a pure reducer so
//! it can be tested without a window; [`crate::render::lighting::LightRig::apply_state`]
//! maps the resulting state onto the lights.

use crate::core::config::LightingConfig;

/// Which lighting flag a key press flips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightKey {
    /// Key 0: the directional light
    Directional,
    /// Key 1: all four point lights
    PointLights,
    /// Key 2: point-light specular channel
    Specular,
    /// Key 3: point-light diffuse channel
    Diffuse,
    /// Key 4: point-light ambient channel
    Ambient,
}

impl LightKey {
    /// Map a number-row key to its toggle
    pub fn from_key(key: glfw::Key) -> Option<Self> {
        match key {
            glfw::Key::Num0 => Some(Self::Directional),
            glfw::Key::Num1 => Some(Self::PointLights),
            glfw::Key::Num2 => Some(Self::Specular),
            glfw::Key::Num3 => Some(Self::Diffuse),
            glfw::Key::Num4 => Some(Self::Ambient),
            _ => None,
        }
    }
}

/// Lighting switches controlled from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightingState {
    /// Directional light on
    pub directional_on: bool,
    /// Point lights on
    pub point_lights_on: bool,
    /// Point-light ambient channel enabled
    pub ambient: bool,
    /// Point-light diffuse channel enabled
    pub diffuse: bool,
    /// Point-light specular channel enabled
    pub specular: bool,
}

impl LightingState {
    /// Start state taken from configuration, every channel enabled
    pub fn from_config(config: &LightingConfig) -> Self {
        Self {
            directional_on: config.directional_on,
            point_lights_on: config.point_lights_on,
            ambient: true,
            diffuse: true,
            specular: true,
        }
    }

    /// State after pressing `key`
    #[must_use]
    pub fn reduce(self, key: LightKey) -> Self {
        let mut next = self;
        match key {
            LightKey::Directional => next.directional_on = !self.directional_on,
            LightKey::PointLights => next.point_lights_on = !self.point_lights_on,
            LightKey::Specular => next.specular = !self.specular,
            LightKey::Diffuse => next.diffuse = !self.diffuse,
            LightKey::Ambient => next.ambient = !self.ambient,
        }
        next
    }
}

impl Default for LightingState {
    fn default() -> Self {
        Self::from_config(&LightingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_start() {
        let state = LightingState::default();
        assert!(!state.directional_on);
        assert!(state.point_lights_on);
        assert!(state.ambient && state.diffuse && state.specular);
    }

    #[test]
    fn test_each_key_flips_only_its_flag() {
        let start = LightingState::default();

        let after = start.reduce(LightKey::Directional);
        assert_eq!(after, LightingState { directional_on: true, ..start });

        let after = start.reduce(LightKey::PointLights);
        assert_eq!(after, LightingState { point_lights_on: false, ..start });

        let after = start.reduce(LightKey::Specular);
        assert_eq!(after, LightingState { specular: false, ..start });

        let after = start.reduce(LightKey::Diffuse);
        assert_eq!(after, LightingState { diffuse: false, ..start });

        let after = start.reduce(LightKey::Ambient);
        assert_eq!(after, LightingState { ambient: false, ..start });
    }

    #[test]
    fn test_double_press_is_identity() {
        let start = LightingState::default();
        for key in [
            LightKey::Directional,
            LightKey::PointLights,
            LightKey::Specular,
            LightKey::Diffuse,
            LightKey::Ambient,
        ] {
            assert_eq!(start.reduce(key).reduce(key), start);
        }
    }

    #[test]
    fn test_number_row_mapping() {
        assert_eq!(LightKey::from_key(glfw::Key::Num0), Some(LightKey::Directional));
        assert_eq!(LightKey::from_key(glfw::Key::Num4), Some(LightKey::Ambient));
        assert_eq!(LightKey::from_key(glfw::Key::Num5), None);
        assert_eq!(LightKey::from_key(glfw::Key::W), None);
    }
}
