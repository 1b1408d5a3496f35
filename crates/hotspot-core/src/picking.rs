use crate::marker::{Marker, MarkerId};
use crate::state::Viewport;
use glam::{Mat4, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

#[inline]
/// Compute a world-space ray from viewport pixel coordinates.
///
/// - `screen`: pixel position, origin top-left
/// - `view_proj`: the camera's combined view-projection matrix
///
/// The ray starts on the near plane and points toward the far plane.
pub fn screen_ray(screen: Vec2, view_proj: Mat4, viewport: Viewport) -> Ray {
    let width = viewport.width.max(1.0);
    let height = viewport.height.max(1.0);
    let ndc_x = (2.0 * screen.x / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * screen.y / height);
    let inv = view_proj.inverse();
    let p_near = inv * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p0: Vec3 = p_near.truncate() / p_near.w;
    let p1: Vec3 = p_far.truncate() / p_far.w;
    Ray {
        origin: p0,
        dir: (p1 - p0).normalize(),
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Nearest marker sphere hit by `ray`, if any.
pub fn pick_marker(ray: &Ray, markers: &[Marker], radius: f32) -> Option<MarkerId> {
    let mut best: Option<(MarkerId, f32)> = None;
    for m in markers {
        if let Some(t) = ray_sphere(ray.origin, ray.dir, m.position, radius) {
            if best.map_or(true, |(_, bt)| t < bt) {
                best = Some((m.id, t));
            }
        }
    }
    best.map(|(id, _)| id)
}
