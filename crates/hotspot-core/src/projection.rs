//! World-to-screen projection for overlay anchors.

use crate::state::{Camera, Viewport};
use glam::{Mat4, Vec2, Vec3};

/// Pixel position of an overlay anchor, origin top-left, Y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenAnchor {
    pub x: f32,
    pub y: f32,
}

impl ScreenAnchor {
    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Project a world-space point into viewport pixels.
///
/// The point goes through `view_proj` and the perspective divide, then NDC is
/// mapped to pixels with Y flipped. Returns `None` when the normalized depth is
/// `>= 1`, which covers points behind the camera and past the far plane. This
/// is not a full frustum test: points off to the side still produce an anchor
/// outside the viewport.
#[inline]
pub fn project(world_point: Vec3, view_proj: Mat4, viewport: Viewport) -> Option<ScreenAnchor> {
    let ndc = view_proj.project_point3(world_point);
    // a point on the camera plane divides by w == 0; hide it as well
    if !ndc.is_finite() || ndc.z >= 1.0 {
        return None;
    }
    let half_w = viewport.width * 0.5;
    let half_h = viewport.height * 0.5;
    Some(ScreenAnchor {
        x: ndc.x * half_w + half_w,
        y: -ndc.y * half_h + half_h,
    })
}

#[inline]
pub fn project_with_camera(
    world_point: Vec3,
    camera: &Camera,
    viewport: Viewport,
) -> Option<ScreenAnchor> {
    project(world_point, camera.view_projection(), viewport)
}
