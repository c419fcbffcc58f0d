//! Frame-level scene tests without a GL context
//!
//! Input events drive the scene state; the lit-pass uniforms are captured with a
//! recorder exactly as the renderer would push them.

use approx::assert_relative_eq;

use crate::prelude::*;

fn push_lit_pass(scene: &SceneState, recorder: &mut UniformRecorder, aspect: f32) {
    recorder.set_vec3("viewPos", &scene.camera.position);
    scene.lights.set_up_lights(&mut *recorder);
    recorder.set_mat4("projection", &scene.projection(aspect));
    recorder.set_mat4("view", &scene.view());
}

#[test]
fn test_start_frame_has_points_lit_and_sun_dark() {
    let scene = SceneState::new(&AppConfig::default());
    let mut recorder = UniformRecorder::new();

    push_lit_pass(&scene, &mut recorder, 1000.0 / 800.0);

    for slot in 0..4 {
        assert_eq!(
            recorder.vec3(&format!("pointLights[{slot}].diffuse")),
            Some(Vec3::repeat(0.8))
        );
        assert_eq!(recorder.float(&format!("pointLights[{slot}].k_c")), Some(1.0));
    }
    assert_eq!(recorder.vec3("directionalLight.diffuse"), Some(Vec3::zeros()));
    assert_eq!(recorder.vec3("directionalLight.direction"), Some(Vec3::new(1.0, -1.0, 1.0)));
    assert_eq!(recorder.vec3("viewPos"), Some(Vec3::new(1.0, 1.5, 14.0)));
    // 4 lights * 7 fields + 4 directional fields + viewPos + projection + view
    assert_eq!(recorder.write_count(), 4 * 7 + 4 + 3);
}

#[test]
fn test_key_sequence_reaches_the_shader_values() {
    let mut scene = SceneState::new(&AppConfig::default());

    for key in [LightKey::Directional, LightKey::Specular, LightKey::PointLights, LightKey::PointLights] {
        scene.handle_event(InputEvent::LightToggle(key));
    }

    let mut recorder = UniformRecorder::new();
    push_lit_pass(&scene, &mut recorder, 1.25);

    assert_eq!(recorder.vec3("directionalLight.ambient"), Some(Vec3::repeat(0.2)));
    assert_eq!(recorder.vec3("pointLights[2].ambient"), Some(Vec3::repeat(0.05)));
    assert_eq!(recorder.vec3("pointLights[2].specular"), Some(Vec3::zeros()));

    // Re-enabling specular restores the stored colour
    scene.handle_event(InputEvent::LightToggle(LightKey::Specular));
    scene.lights.set_up_lights(&mut recorder);
    assert_eq!(recorder.vec3("pointLights[2].specular"), Some(Vec3::repeat(1.0)));
}

#[test]
fn test_switched_off_points_write_black_regardless_of_channels() {
    let mut scene = SceneState::new(&AppConfig::default());
    scene.handle_event(InputEvent::LightToggle(LightKey::PointLights));
    scene.handle_event(InputEvent::LightToggle(LightKey::Ambient));
    scene.handle_event(InputEvent::LightToggle(LightKey::Ambient));

    let mut recorder = UniformRecorder::new();
    scene.lights.set_up_lights(&mut recorder);

    for slot in 0..4 {
        for field in ["ambient", "diffuse", "specular"] {
            assert_eq!(recorder.vec3(&format!("pointLights[{slot}].{field}")), Some(Vec3::zeros()));
        }
    }
    assert_eq!(
        recorder.vec3("pointLights[1].position"),
        Some(Vec3::new(1.5, -1.5, 0.0))
    );
}

#[test]
fn test_walking_and_looking_update_view_uniform() {
    let mut scene = SceneState::new(&AppConfig::default());

    scene.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
    scene.handle_event(InputEvent::CursorMoved { x: 0.0, y: -2000.0 });
    assert!(scene.camera.pitch() < 89.0);
    assert!(scene.camera.pitch() > 88.9);

    scene.apply_movement([CameraMovement::Down], 1.0);
    assert_relative_eq!(scene.camera.position.y, 1.5 - 2.5, epsilon = 1e-5);

    let mut recorder = UniformRecorder::new();
    push_lit_pass(&scene, &mut recorder, 1.25);

    let view = recorder.mat4("view").unwrap();
    let eye = scene.camera.position;
    let eye_in_view = view * Vec4::new(eye.x, eye.y, eye.z, 1.0);
    assert_relative_eq!(eye_in_view, Vec4::new(0.0, 0.0, 0.0, 1.0), epsilon = 1e-4);
}

#[test]
fn test_scroll_zoom_changes_projection_within_range() {
    let mut scene = SceneState::new(&AppConfig::default());
    let wide = scene.projection(1.0);

    scene.handle_event(InputEvent::Scrolled { y: 100.0 });
    assert_relative_eq!(scene.camera.zoom(), 1.0);
    let narrow = scene.projection(1.0);
    assert!(narrow[(1, 1)] > wide[(1, 1)]);

    scene.handle_event(InputEvent::Scrolled { y: -100.0 });
    assert_relative_eq!(scene.camera.zoom(), 45.0);
}
