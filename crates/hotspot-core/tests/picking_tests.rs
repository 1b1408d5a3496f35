// Host-side tests for ray construction and marker picking.

use glam::{Vec2, Vec3};
use hotspot_core::{
    default_markers, pick_marker, project_with_camera, ray_sphere, screen_ray, Camera, MarkerId,
    Viewport, MARKER_RADIUS,
};

fn setup() -> (Camera, Viewport) {
    let vp = Viewport::new(1280.0, 800.0);
    (Camera::for_viewport(vp), vp)
}

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_ignores_spheres_behind_origin() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
}

#[test]
fn center_ray_points_down_the_view_axis() {
    let (cam, vp) = setup();
    let ray = screen_ray(Vec2::new(640.0, 400.0), cam.view_projection(), vp);
    assert!((ray.dir - Vec3::NEG_Z).length() < 1e-4, "{:?}", ray.dir);
    // origin sits on the near plane in front of the eye
    assert!((ray.origin.z - (cam.eye.z - cam.znear)).abs() < 1e-2);
}

#[test]
fn clicking_a_marker_on_screen_picks_it() {
    let (cam, vp) = setup();
    let markers = default_markers();
    for m in &markers {
        let anchor = project_with_camera(m.position, &cam, vp).expect("marker visible");
        let ray = screen_ray(anchor.to_vec2(), cam.view_projection(), vp);
        assert_eq!(pick_marker(&ray, &markers, MARKER_RADIUS), Some(m.id));
    }
}

#[test]
fn clicking_empty_space_picks_nothing() {
    let (cam, vp) = setup();
    let ray = screen_ray(Vec2::new(5.0, 5.0), cam.view_projection(), vp);
    assert_eq!(pick_marker(&ray, &default_markers(), MARKER_RADIUS), None);
}

#[test]
fn overlapping_markers_pick_the_nearest() {
    let (cam, vp) = setup();
    let mut markers = default_markers();
    markers[0].position = Vec3::new(0.0, 0.0, 1.0);
    markers[1].position = Vec3::new(0.0, 0.0, -1.0);
    let ray = screen_ray(Vec2::new(640.0, 400.0), cam.view_projection(), vp);
    assert_eq!(pick_marker(&ray, &markers, MARKER_RADIUS), Some(MarkerId(0)));
}
