//! The fixed townscape
//!
//! A road, two rows of eleven textured buildings and a small red humanoid, all
//! built from the unit cube with `model = translate * scale`.

use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
use crate::render::lighting::LightRig;
use crate::render::uniforms::UniformSink;

/// Specular reflectance shared by every scene material
pub const MATERIAL_SPECULAR: f32 = 0.5;

/// Phong exponent shared by every scene material
pub const MATERIAL_SHININESS: f32 = 32.0;

/// Uniform scale of the lamp marker cubes
pub const LAMP_SCALE: f32 = 0.2;

/// Which uploaded mesh an object is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Unit cube, indexed
    Cube,
    /// Triangular prism, non-indexed
    Prism,
}

/// One draw in the lit pass
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Mesh to draw
    pub mesh: MeshKind,
    /// Object to world transform
    pub model: Mat4,
    /// Ambient and diffuse reflectance
    pub color: Vec3,
    /// Whether the wall texture modulates the diffuse colour
    pub textured: bool,
}

impl SceneObject {
    /// Cube with its minimum corner at `translation`, stretched by `scale`
    pub fn cube(translation: [f32; 3], scale: [f32; 3], color: [f32; 3], textured: bool) -> Self {
        Self {
            mesh: MeshKind::Cube,
            model: Mat4::translate_scale(translation.into(), scale.into()),
            color: color.into(),
            textured,
        }
    }

    /// Write material, texture switch and model matrix for this draw
    pub fn set_up_material(&self, sink: &mut dyn UniformSink) {
        sink.set_vec3("material.ambient", &self.color);
        sink.set_vec3("material.diffuse", &self.color);
        sink.set_vec3("material.specular", &Vec3::repeat(MATERIAL_SPECULAR));
        sink.set_float("material.shininess", MATERIAL_SHININESS);
        sink.set_bool("useTexture", self.textured);
        sink.set_mat4("model", &self.model);
    }
}

/// Building row x offsets
const RIGHT_ROW_X: f32 = 2.5;
const LEFT_ROW_X: f32 = -1.3;

/// (height, depth, colour) per building, front to back
type BuildingSpec = (f32, f32, [f32; 3]);

const RIGHT_ROW: [BuildingSpec; 11] = [
    (2.5, 0.6, [0.7, 0.0, 1.0]),
    (2.2, 0.6, [0.0, 0.0, 1.0]),
    (2.0, 0.6, [0.0, 1.0, 1.0]),
    (2.3, 0.6, [1.0, 0.0, 1.0]),
    (2.0, 0.6, [0.0, 1.0, 0.0]),
    (2.5, 0.6, [0.0, 0.0, 1.0]),
    (2.2, 0.6, [0.0, 1.7, 0.7]),
    (2.4, 0.6, [1.0, 1.0, 1.0]),
    (2.6, 0.6, [0.0, 1.2, 0.7]),
    (2.1, 0.6, [0.4, 1.3, 1.8]),
    (2.5, 0.8, [0.6, 1.9, 0.5]),
];

const LEFT_ROW: [BuildingSpec; 11] = [
    (2.5, 0.6, [0.6, 1.9, 0.5]),
    (2.7, 0.6, [0.0, 1.2, 0.7]),
    (2.5, 0.6, [0.0, 1.7, 0.7]),
    (1.9, 0.6, [0.4, 1.3, 1.8]),
    (2.3, 0.6, [1.0, 1.0, 1.0]),
    (2.4, 0.6, [1.0, 0.0, 1.0]),
    (2.3, 0.6, [0.0, 1.0, 1.0]),
    (2.4, 0.6, [1.0, 1.0, 1.0]),
    (2.3, 0.6, [0.0, 1.0, 1.0]),
    (2.5, 0.6, [1.5, 0.8, 1.9]),
    (2.4, 0.8, [1.0, 1.0, 1.0]),
];

const BUILDING_WIDTH: f32 = 0.8;

/// (translation, scale) of each humanoid part: head, neck, body, hands, legs
const HUMANOID: [([f32; 3], [f32; 3]); 7] = [
    ([0.7, 1.0, 0.5], [0.5, 0.5, 0.8]),
    ([0.875, 0.8, 0.5], [0.15, 0.2, 0.8]),
    ([0.55, 0.4, 0.5], [0.8, 0.5, 0.8]),
    ([0.1, 0.7, 0.5], [0.8, 0.05, 0.8]),
    ([1.0, 0.7, 0.5], [0.8, 0.05, 0.8]),
    ([0.7, 0.0, 0.5], [0.15, 0.5, 0.8]),
    ([1.0, 0.0, 0.5], [0.15, 0.5, 0.8]),
];

fn building_row(x: f32, row: &[BuildingSpec]) -> impl Iterator<Item = SceneObject> + '_ {
    row.iter().enumerate().map(move |(i, &(height, depth, color))| {
        let z = -0.5 + i as f32;
        SceneObject::cube([x, 0.0, z], [BUILDING_WIDTH, height, depth], color, true)
    })
}

/// Every object of the lit pass in draw order
pub fn town_layout() -> Vec<SceneObject> {
    let road = SceneObject::cube([-0.5, 0.0, 0.3], [3.0, 0.2, 12.0], [0.5, 0.5, 0.5], false);

    std::iter::once(road)
        .chain(building_row(RIGHT_ROW_X, &RIGHT_ROW))
        .chain(building_row(LEFT_ROW_X, &LEFT_ROW))
        .chain(
            HUMANOID
                .iter()
                .map(|&(translation, scale)| SceneObject::cube(translation, scale, [1.0, 0.0, 0.0], false)),
        )
        .collect()
}

/// Model matrices of the small cubes marking each point light
pub fn lamp_models(rig: &LightRig) -> Vec<Mat4> {
    rig.points
        .iter()
        .map(|light| Mat4::translate_scale(light.position(), Vec3::repeat(LAMP_SCALE)))
        .collect()
}

/// Lamp marker colour: bright while the point lights are on, dim otherwise
pub fn lamp_color(point_lights_on: bool) -> Vec3 {
    if point_lights_on {
        Vec3::repeat(0.8)
    } else {
        Vec3::repeat(0.25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec4;
    use crate::input::LightingState;
    use crate::render::uniforms::UniformRecorder;
    use approx::assert_relative_eq;

    fn origin_of(model: &Mat4) -> Vec3 {
        let p = model * Vec4::new(0.0, 0.0, 0.0, 1.0);
        Vec3::new(p.x, p.y, p.z)
    }

    fn far_corner_of(model: &Mat4) -> Vec3 {
        let p = model * Vec4::new(1.0, 1.0, 1.0, 1.0);
        Vec3::new(p.x, p.y, p.z)
    }

    #[test]
    fn test_layout_counts() {
        let layout = town_layout();

        assert_eq!(layout.len(), 1 + 11 + 11 + 7);
        assert!(layout.iter().all(|o| o.mesh == MeshKind::Cube));
        assert_eq!(layout.iter().filter(|o| o.textured).count(), 22);
    }

    #[test]
    fn test_road_spans_the_street() {
        let road = &town_layout()[0];

        assert!(!road.textured);
        assert_relative_eq!(origin_of(&road.model), Vec3::new(-0.5, 0.0, 0.3));
        assert_relative_eq!(far_corner_of(&road.model), Vec3::new(2.5, 0.2, 12.3), epsilon = 1e-5);
        assert_relative_eq!(road.color, Vec3::repeat(0.5));
    }

    #[test]
    fn test_building_rows_step_along_z() {
        let layout = town_layout();
        let right = &layout[1..12];
        let left = &layout[12..23];

        for (i, (r, l)) in right.iter().zip(left).enumerate() {
            let z = -0.5 + i as f32;
            assert_relative_eq!(origin_of(&r.model), Vec3::new(2.5, 0.0, z), epsilon = 1e-5);
            assert_relative_eq!(origin_of(&l.model), Vec3::new(-1.3, 0.0, z), epsilon = 1e-5);
        }

        // Last building on each side is deeper
        assert_relative_eq!(right[10].model[(2, 2)], 0.8);
        assert_relative_eq!(left[10].model[(2, 2)], 0.8);
        assert_relative_eq!(right[0].model[(1, 1)], 2.5);
        assert_relative_eq!(left[3].model[(1, 1)], 1.9);
    }

    #[test]
    fn test_humanoid_is_red_and_untextured() {
        let layout = town_layout();
        let humanoid = &layout[23..];

        assert_eq!(humanoid.len(), 7);
        for part in humanoid {
            assert!(!part.textured);
            assert_relative_eq!(part.color, Vec3::new(1.0, 0.0, 0.0));
        }
        assert_relative_eq!(origin_of(&humanoid[1].model), Vec3::new(0.875, 0.8, 0.5));
    }

    #[test]
    fn test_material_uniforms() {
        let object = SceneObject::cube([1.0, 2.0, 3.0], [1.0, 1.0, 1.0], [0.2, 0.4, 0.6], true);
        let mut recorder = UniformRecorder::new();

        object.set_up_material(&mut recorder);

        assert_eq!(recorder.vec3("material.ambient"), Some(Vec3::new(0.2, 0.4, 0.6)));
        assert_eq!(recorder.vec3("material.diffuse"), Some(Vec3::new(0.2, 0.4, 0.6)));
        assert_eq!(recorder.vec3("material.specular"), Some(Vec3::repeat(0.5)));
        assert_eq!(recorder.float("material.shininess"), Some(32.0));
        assert_eq!(recorder.bool("useTexture"), Some(true));
        assert_eq!(recorder.mat4("model"), Some(object.model));
    }

    #[test]
    fn test_lamp_markers_follow_point_lights() {
        let rig = LightRig::default();
        let models = lamp_models(&rig);

        assert_eq!(models.len(), 4);
        assert_relative_eq!(origin_of(&models[0]), Vec3::new(-1.0, 1.5, 12.0));
        assert_relative_eq!(models[2][(0, 0)], LAMP_SCALE);

        assert_relative_eq!(lamp_color(true), Vec3::repeat(0.8));
        assert_relative_eq!(lamp_color(false), Vec3::repeat(0.25));

        let dark = LightRig::new(&LightingState::default().reduce(crate::input::LightKey::PointLights));
        assert_relative_eq!(lamp_color(dark.point_lights_on()), Vec3::repeat(0.25));
    }
}
