//! Orbit camera controls: drag to rotate around a target, wheel to zoom.
//!
//! Input accumulates into a pending delta; `update` eases it in with
//! exponential damping so the camera keeps gliding briefly after release.

use crate::constants::{
    camera_eye_vec3, ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_SPEED,
};
use crate::state::Camera;
use glam::Vec3;
use std::f32::consts::{PI, TAU};
use std::time::Duration;

const POLAR_EPS: f32 = 1e-6;
const SETTLE_EPS: f32 = 1e-5;

/// Radius / azimuth / polar angle around the orbit target. `theta` is measured
/// from +Z toward +X, `phi` down from +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    spherical: Spherical,
    delta_theta: f32,
    delta_phi: f32,
    zoom_scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(camera_eye_vec3(), Vec3::ZERO)
    }
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            target,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            spherical: Spherical::from_offset(eye - target),
            delta_theta: 0.0,
            delta_phi: 0.0,
            zoom_scale: 1.0,
        }
    }

    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    pub fn eye(&self) -> Vec3 {
        self.target + self.spherical.to_offset()
    }

    /// Queue a rotation from a pointer drag of (`dx`, `dy`) pixels. A drag
    /// across the full viewport height turns the camera a full circle.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * dx_px / h * self.rotate_speed;
        self.delta_phi -= TAU * dy_px / h * self.rotate_speed;
    }

    /// Queue a zoom. Positive steps move toward the target.
    pub fn zoom(&mut self, steps: f32) {
        self.zoom_scale *= 0.95_f32.powf(steps * self.zoom_speed);
    }

    /// Apply part of the pending input for a frame of length `dt`. Returns
    /// whether the camera moved.
    pub fn update(&mut self, dt: Duration) -> bool {
        let frames = dt.as_secs_f32() * 60.0;
        let alpha = if self.damping > 0.0 && self.damping < 1.0 {
            1.0 - (1.0 - self.damping).powf(frames)
        } else {
            1.0
        };
        let before = self.spherical;

        self.spherical.theta += self.delta_theta * alpha;
        self.spherical.phi += self.delta_phi * alpha;
        self.delta_theta *= 1.0 - alpha;
        self.delta_phi *= 1.0 - alpha;

        // zoom snaps immediately, like wheel input on a damped orbit
        self.spherical.radius *= self.zoom_scale;
        self.zoom_scale = 1.0;

        self.spherical.phi = self.spherical.phi.clamp(POLAR_EPS, PI - POLAR_EPS);
        self.spherical.radius = self
            .spherical
            .radius
            .clamp(self.min_distance, self.max_distance);

        if self.delta_theta.abs() < SETTLE_EPS {
            self.delta_theta = 0.0;
        }
        if self.delta_phi.abs() < SETTLE_EPS {
            self.delta_phi = 0.0;
        }
        before != self.spherical
    }

    /// Write eye/target into `camera`, leaving its projection untouched.
    pub fn apply(&self, camera: &mut Camera) {
        camera.eye = self.eye();
        camera.target = self.target;
    }
}
