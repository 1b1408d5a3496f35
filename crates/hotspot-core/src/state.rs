//! Camera and viewport types shared with the frontends.
//!
//! These types avoid referencing platform-specific APIs. The native frontend
//! builds them each frame from the window size and the orbit controls, and
//! hands read-only snapshots to the projector.

use crate::constants::{camera_eye_vec3, CAMERA_FOVY_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Default scene camera looking at the origin for the given viewport.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Pixel-space rectangle the scene is rendered into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

impl From<(u32, u32)> for Viewport {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f32, height as f32)
    }
}
