// Host-side tests for the world-to-screen projector.

use glam::{Mat4, Vec3};
use hotspot_core::{project, project_with_camera, Camera, Viewport};

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

fn camera() -> Camera {
    Camera::for_viewport(viewport())
}

#[test]
fn point_on_view_axis_lands_in_viewport_center() {
    let anchor = project_with_camera(Vec3::ZERO, &camera(), viewport()).expect("visible");
    assert!((anchor.x - 400.0).abs() < 1e-3, "x = {}", anchor.x);
    assert!((anchor.y - 300.0).abs() < 1e-3, "y = {}", anchor.y);
}

#[test]
fn point_behind_camera_is_hidden() {
    // default camera sits at z = 5 looking toward -Z
    let behind = Vec3::new(0.0, 0.0, 10.0);
    assert_eq!(project_with_camera(behind, &camera(), viewport()), None);
}

#[test]
fn turning_camera_around_hides_point_in_front() {
    let mut cam = camera();
    let point = Vec3::new(0.3, -0.2, 0.0);
    assert!(project_with_camera(point, &cam, viewport()).is_some());

    // rotate 180 degrees about the eye: look away from the point
    cam.target = cam.eye + (cam.eye - cam.target);
    assert_eq!(project_with_camera(point, &cam, viewport()), None);
}

#[test]
fn projection_is_deterministic() {
    let cam = camera();
    let vp = viewport();
    let vp_mat = cam.view_projection();
    let p = Vec3::new(1.0, 1.2, 1.0);
    let a = project(p, vp_mat, vp);
    for _ in 0..10 {
        assert_eq!(project(p, vp_mat, vp), a);
    }
}

#[test]
fn screen_y_grows_downward_and_x_rightward() {
    let cam = camera();
    let vp = viewport();
    let up = project_with_camera(Vec3::new(0.0, 1.0, 0.0), &cam, vp).unwrap();
    let right = project_with_camera(Vec3::new(1.0, 0.0, 0.0), &cam, vp).unwrap();
    assert!(up.y < 300.0);
    assert!((up.x - 400.0).abs() < 1e-3);
    assert!(right.x > 400.0);
    assert!((right.y - 300.0).abs() < 1e-3);
}

#[test]
fn point_past_far_plane_is_hidden() {
    let far_away = Vec3::new(0.0, 0.0, -2000.0);
    assert_eq!(project_with_camera(far_away, &camera(), viewport()), None);
}

#[test]
fn off_screen_point_in_front_still_gets_an_anchor() {
    // visibility only looks at depth, not at the x/y bounds
    let anchor = project_with_camera(Vec3::new(50.0, 0.0, 0.0), &camera(), viewport()).unwrap();
    assert!(anchor.x > 800.0);
}

#[test]
fn point_at_camera_eye_is_hidden() {
    let cam = camera();
    assert_eq!(project_with_camera(cam.eye, &cam, viewport()), None);
}

#[test]
fn identity_matrix_maps_ndc_corners_to_pixels() {
    let vp = Viewport::new(200.0, 100.0);
    let top_left = project(Vec3::new(-1.0, 1.0, 0.5), Mat4::IDENTITY, vp).unwrap();
    assert_eq!((top_left.x, top_left.y), (0.0, 0.0));
    let bottom_right = project(Vec3::new(1.0, -1.0, 0.5), Mat4::IDENTITY, vp).unwrap();
    assert_eq!((bottom_right.x, bottom_right.y), (200.0, 100.0));
    assert_eq!(project(Vec3::new(0.0, 0.0, 1.0), Mat4::IDENTITY, vp), None);
}
