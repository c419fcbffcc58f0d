//! Lighting system
//!
//! Phong-style light sources feeding the lighting shader through [`UniformSink`].
//! Each light keeps its configured colours untouched and decides at upload time
//! what the shader actually sees: a switched-off light (or channel) uploads the
//! zero vector, so "off" never destroys the stored colour.

use crate::foundation::math::Vec3;
use crate::input::LightingState;
use crate::render::uniforms::UniformSink;

/// Number of point-light slots declared by the lighting shader
pub const MAX_POINT_LIGHTS: usize = 4;

/// Distance falloff coefficients
///
/// Intensity at distance `d` is scaled by `1 / (constant + linear·d + quadratic·d²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    /// Constant term (k_c), expected > 0
    pub constant: f32,
    /// Linear term (k_l)
    pub linear: f32,
    /// Quadratic term (k_q)
    pub quadratic: f32,
}

impl Attenuation {
    /// Create attenuation coefficients
    pub const fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self { constant, linear, quadratic }
    }

    /// Intensity multiplier at `distance` world units
    pub fn factor_at(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

impl Default for Attenuation {
    /// Roughly 50 units of range
    fn default() -> Self {
        Self::new(1.0, 0.09, 0.032)
    }
}

/// Per-channel enable flags for a point light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightChannels {
    /// Ambient contribution enabled
    pub ambient: bool,
    /// Diffuse contribution enabled
    pub diffuse: bool,
    /// Specular contribution enabled
    pub specular: bool,
}

impl LightChannels {
    /// All three channels enabled
    pub const ALL: Self = Self { ambient: true, diffuse: true, specular: true };
}

impl Default for LightChannels {
    fn default() -> Self {
        Self::ALL
    }
}

fn gated(color: Vec3, enabled: bool) -> Vec3 {
    if enabled { color } else { Vec3::zeros() }
}

/// Attenuated point light occupying one slot of the shader's `pointLights` array
///
/// `index` is 1-based and only selects the uniform slot: light `n` writes to
/// `pointLights[n - 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    position: Vec3,
    ambient: Vec3,
    diffuse: Vec3,
    specular: Vec3,
    falloff: Attenuation,
    index: usize,
    channels: LightChannels,
    on: bool,
}

impl PointLight {
    /// Create a point light, switched on with every channel enabled
    pub fn new(
        position: Vec3,
        ambient: Vec3,
        diffuse: Vec3,
        specular: Vec3,
        falloff: Attenuation,
        index: usize,
    ) -> Self {
        debug_assert!(
            (1..=MAX_POINT_LIGHTS).contains(&index),
            "point light index {index} outside 1..={MAX_POINT_LIGHTS}"
        );
        debug_assert!(falloff.constant > 0.0, "attenuation constant must be positive");

        Self {
            position,
            ambient,
            diffuse,
            specular,
            falloff,
            index,
            channels: LightChannels::ALL,
            on: true,
        }
    }

    /// Move the light
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Replace the stored ambient colour
    pub fn set_ambient(&mut self, color: Vec3) {
        self.ambient = color;
    }

    /// Replace the stored diffuse colour
    pub fn set_diffuse(&mut self, color: Vec3) {
        self.diffuse = color;
    }

    /// Replace the stored specular colour
    pub fn set_specular(&mut self, color: Vec3) {
        self.specular = color;
    }

    /// Replace the falloff coefficients
    pub fn set_falloff(&mut self, falloff: Attenuation) {
        self.falloff = falloff;
    }

    /// Switch the whole light on; channel flags are left as they were
    pub fn turn_on(&mut self) {
        self.on = true;
    }

    /// Switch the whole light off; channel flags and colours are kept
    pub fn turn_off(&mut self) {
        self.on = false;
    }

    /// Enable the ambient channel
    pub fn turn_ambient_on(&mut self) {
        self.channels.ambient = true;
    }

    /// Disable the ambient channel
    pub fn turn_ambient_off(&mut self) {
        self.channels.ambient = false;
    }

    /// Enable the diffuse channel
    pub fn turn_diffuse_on(&mut self) {
        self.channels.diffuse = true;
    }

    /// Disable the diffuse channel
    pub fn turn_diffuse_off(&mut self) {
        self.channels.diffuse = false;
    }

    /// Enable the specular channel
    pub fn turn_specular_on(&mut self) {
        self.channels.specular = true;
    }

    /// Disable the specular channel
    pub fn turn_specular_off(&mut self) {
        self.channels.specular = false;
    }

    /// World position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Falloff coefficients
    pub fn falloff(&self) -> Attenuation {
        self.falloff
    }

    /// 1-based slot index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Overall on/off flag
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Per-channel flags
    pub fn channels(&self) -> LightChannels {
        self.channels
    }

    /// Ambient colour as the shader will see it
    pub fn effective_ambient(&self) -> Vec3 {
        gated(self.ambient, self.on && self.channels.ambient)
    }

    /// Diffuse colour as the shader will see it
    pub fn effective_diffuse(&self) -> Vec3 {
        gated(self.diffuse, self.on && self.channels.diffuse)
    }

    /// Specular colour as the shader will see it
    pub fn effective_specular(&self) -> Vec3 {
        gated(self.specular, self.on && self.channels.specular)
    }

    /// Fully qualified uniform name for `field` in this light's slot
    pub fn uniform_name(&self, field: &str) -> String {
        format!("pointLights[{}].{}", self.index.saturating_sub(1), field)
    }

    /// Write position, gated colours and falloff into the light's uniform slot
    ///
    /// Call once per frame after the lighting program is bound and before drawing.
    pub fn set_up_light(&self, sink: &mut dyn UniformSink) {
        sink.set_vec3(&self.uniform_name("position"), &self.position);
        sink.set_vec3(&self.uniform_name("ambient"), &self.effective_ambient());
        sink.set_vec3(&self.uniform_name("diffuse"), &self.effective_diffuse());
        sink.set_vec3(&self.uniform_name("specular"), &self.effective_specular());
        sink.set_float(&self.uniform_name("k_c"), self.falloff.constant);
        sink.set_float(&self.uniform_name("k_l"), self.falloff.linear);
        sink.set_float(&self.uniform_name("k_q"), self.falloff.quadratic);
    }
}

/// Directional light (like sunlight)
///
/// Unlike [`PointLight`] there are no per-channel toggles: one flag gates all
/// three colours together.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    direction: Vec3,
    ambient: Vec3,
    diffuse: Vec3,
    specular: Vec3,
    on: bool,
}

impl DirectionalLight {
    /// Create a directional light, switched on
    ///
    /// `direction` is the direction the light travels, i.e. pointing away from the
    /// light source. It is stored as given and not normalized.
    pub fn new(direction: Vec3, ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            direction,
            ambient,
            diffuse,
            specular,
            on: true,
        }
    }

    /// Create a light shining from `source` towards the origin
    pub fn from_source_direction(source: Vec3, ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self::new(-source, ambient, diffuse, specular)
    }

    /// Replace the travel direction
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction;
    }

    /// Replace the stored ambient colour
    pub fn set_ambient(&mut self, color: Vec3) {
        self.ambient = color;
    }

    /// Replace the stored diffuse colour
    pub fn set_diffuse(&mut self, color: Vec3) {
        self.diffuse = color;
    }

    /// Replace the stored specular colour
    pub fn set_specular(&mut self, color: Vec3) {
        self.specular = color;
    }

    /// Switch on
    pub fn turn_on(&mut self) {
        self.on = true;
    }

    /// Switch off
    pub fn turn_off(&mut self) {
        self.on = false;
    }

    /// Overall on/off flag
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Stored travel direction
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Ambient colour as the shader will see it
    pub fn effective_ambient(&self) -> Vec3 {
        gated(self.ambient, self.on)
    }

    /// Diffuse colour as the shader will see it
    pub fn effective_diffuse(&self) -> Vec3 {
        gated(self.diffuse, self.on)
    }

    /// Specular colour as the shader will see it
    pub fn effective_specular(&self) -> Vec3 {
        gated(self.specular, self.on)
    }

    /// Write direction and gated colours to `directionalLight.*`
    pub fn set_up_light(&self, sink: &mut dyn UniformSink) {
        sink.set_vec3("directionalLight.direction", &self.direction);
        sink.set_vec3("directionalLight.ambient", &self.effective_ambient());
        sink.set_vec3("directionalLight.diffuse", &self.effective_diffuse());
        sink.set_vec3("directionalLight.specular", &self.effective_specular());
    }
}

/// Every light in the townscape: one directional light and four point lights
#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    /// The single directional light
    pub directional: DirectionalLight,
    /// Point lights, slot `i` holding the light with index `i + 1`
    pub points: [PointLight; MAX_POINT_LIGHTS],
}

impl LightRig {
    /// Positions of the reference scene's point lights
    pub const POINT_LIGHT_POSITIONS: [[f32; 3]; MAX_POINT_LIGHTS] = [
        [-1.0, 1.5, 12.0],
        [1.5, -1.5, 0.0],
        [-1.5, 1.5, 0.0],
        [-1.5, -1.5, 0.0],
    ];

    /// Build the reference rig and bring it to `state`
    pub fn new(state: &LightingState) -> Self {
        let directional = DirectionalLight::from_source_direction(
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::repeat(0.2),
            Vec3::repeat(0.5),
            Vec3::repeat(1.0),
        );

        let points = std::array::from_fn(|slot| {
            let [x, y, z] = Self::POINT_LIGHT_POSITIONS[slot];
            PointLight::new(
                Vec3::new(x, y, z),
                Vec3::repeat(0.05),
                Vec3::repeat(0.8),
                Vec3::repeat(1.0),
                Attenuation::default(),
                slot + 1,
            )
        });

        let mut rig = Self { directional, points };
        rig.apply_state(state);
        rig
    }

    /// Bring every light's flags in line with `state`
    ///
    /// Point-light toggles are shared: every point light gets the same overall
    /// and per-channel flags.
    pub fn apply_state(&mut self, state: &LightingState) {
        if state.directional_on {
            self.directional.turn_on();
        } else {
            self.directional.turn_off();
        }

        for light in &mut self.points {
            if state.point_lights_on {
                light.turn_on();
            } else {
                light.turn_off();
            }
            if state.ambient {
                light.turn_ambient_on();
            } else {
                light.turn_ambient_off();
            }
            if state.diffuse {
                light.turn_diffuse_on();
            } else {
                light.turn_diffuse_off();
            }
            if state.specular {
                light.turn_specular_on();
            } else {
                light.turn_specular_off();
            }
        }
    }

    /// Whether any point light is switched on
    pub fn point_lights_on(&self) -> bool {
        self.points.iter().any(PointLight::is_on)
    }

    /// Push all five lights into the currently bound program
    pub fn set_up_lights(&self, sink: &mut dyn UniformSink) {
        for light in &self.points {
            light.set_up_light(sink);
        }
        self.directional.set_up_light(sink);
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::new(&LightingState::default())
    }
}
