// Host-side tests for orbit camera controls.

use glam::Vec3;
use hotspot_core::{Camera, OrbitControls, Spherical, Viewport};
use std::f32::consts::PI;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn settle(orbit: &mut OrbitControls) {
    for _ in 0..600 {
        orbit.update(FRAME);
    }
}

#[test]
fn default_orbit_matches_default_camera() {
    let orbit = OrbitControls::default();
    let cam = Camera::for_viewport(Viewport::new(800.0, 600.0));
    assert!((orbit.eye() - cam.eye).length() < 1e-5);
    let s = orbit.spherical();
    assert!((s.radius - 5.0).abs() < 1e-5);
    assert!((s.phi - PI / 2.0).abs() < 1e-5);
}

#[test]
fn spherical_round_trips_an_offset() {
    let offset = Vec3::new(1.5, -2.0, 3.0);
    let back = Spherical::from_offset(offset).to_offset();
    assert!((back - offset).length() < 1e-4);
}

#[test]
fn zoom_in_shrinks_radius_and_respects_min_distance() {
    let mut orbit = OrbitControls::default();
    orbit.zoom(1.0);
    orbit.update(FRAME);
    assert!((orbit.spherical().radius - 5.0 * 0.95).abs() < 1e-4);

    orbit.zoom(500.0);
    orbit.update(FRAME);
    assert!((orbit.spherical().radius - orbit.min_distance).abs() < 1e-5);

    orbit.zoom(-5000.0);
    orbit.update(FRAME);
    assert!((orbit.spherical().radius - orbit.max_distance).abs() < 1e-3);
}

#[test]
fn horizontal_drag_of_full_height_is_a_full_turn() {
    let mut orbit = OrbitControls::default();
    orbit.damping = 0.0; // apply immediately
    orbit.rotate(300.0, 0.0, 600.0); // half the height -> half a turn
    assert!(orbit.update(FRAME));
    let eye = orbit.eye();
    assert!((eye - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-3, "{eye:?}");
}

#[test]
fn polar_angle_is_clamped_under_large_vertical_drags() {
    let mut orbit = OrbitControls::default();
    orbit.rotate(0.0, 10_000.0, 600.0);
    settle(&mut orbit);
    let s = orbit.spherical();
    assert!(s.phi > 0.0 && s.phi < PI);
    orbit.rotate(0.0, -50_000.0, 600.0);
    settle(&mut orbit);
    let s = orbit.spherical();
    assert!(s.phi > 0.0 && s.phi < PI);
    assert!(orbit.eye().is_finite());
}

#[test]
fn damped_rotation_eases_in_and_settles() {
    let mut orbit = OrbitControls::default();
    orbit.rotate(60.0, 0.0, 600.0);
    orbit.update(FRAME);
    let first = orbit.spherical().theta;
    // only a fraction of the drag is applied on the first frame
    let full = -2.0 * PI * 60.0 / 600.0;
    assert!(first < 0.0 && first > full);

    settle(&mut orbit);
    assert!((orbit.spherical().theta - full).abs() < 1e-3);
    assert!(!orbit.update(FRAME), "no motion once settled");
}

#[test]
fn apply_writes_eye_and_target_only() {
    let mut cam = Camera::for_viewport(Viewport::new(640.0, 480.0));
    let fov = cam.fovy_radians;
    let mut orbit = OrbitControls::new(Vec3::new(3.0, 1.0, 4.0), Vec3::new(0.0, 0.5, 0.0));
    orbit.zoom(2.0);
    orbit.update(FRAME);
    orbit.apply(&mut cam);
    assert_eq!(cam.target, Vec3::new(0.0, 0.5, 0.0));
    assert!((cam.eye - orbit.eye()).length() < 1e-6);
    assert_eq!(cam.fovy_radians, fov);
}
