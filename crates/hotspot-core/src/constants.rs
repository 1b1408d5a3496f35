use glam::Vec3;

// Shared scene/overlay tuning constants used by the frontends.

// Default camera (matches a stock perspective scene camera)
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 5.0];
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Markers
pub const MARKER_RADIUS: f32 = 0.1; // sphere radius, also used for picking
pub const MARKER_POSITIONS: [[f32; 3]; 2] = [[0.0, 0.5, 1.0], [-1.0, 0.5, -1.0]];
pub const MARKER_ANCHORS: [[f32; 3]; 2] = [[1.0, 1.2, 1.0], [-1.0, 0.7, -1.0]];
pub const MARKER_LABELS: [&str; 2] = ["Interactive Point 1", "Interactive Point 2"];

pub const MARKER_RED: [f32; 3] = [1.0, 0.0, 0.0];
pub const MARKER_GREEN: [f32; 3] = [0.0, 0.5, 0.0];

// Cosmetic blink
pub const BLINK_PERIOD_MS: u64 = 500;

// "Look At Point" button target
pub const LOOK_AT_TARGET: [f32; 3] = [10.0, 10.0, 10.0];

// Lighting (ambient + two directionals)
pub const AMBIENT_INTENSITY: f32 = 0.3;
pub const KEY_LIGHT_DIR: [f32; 3] = [5.0, 5.0, 5.0];
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;
pub const FILL_LIGHT_DIR: [f32; 3] = [-5.0, 5.0, 5.0];
pub const FILL_LIGHT_INTENSITY: f32 = 0.5;

// Tooltip overlay, in pixels
pub const TOOLTIP_WIDTH: f32 = 150.0;
pub const TOOLTIP_BUBBLE_HEIGHT: f32 = 37.0;
pub const TOOLTIP_ARROW_SIZE: f32 = 8.0;
pub const TOOLTIP_OFFSET: [f32; 2] = [-75.0, -45.0]; // half width, bubble + arrow height
pub const TOOLTIP_COLOR: [f32; 4] = [42.0 / 255.0, 42.0 / 255.0, 42.0 / 255.0, 0.9];
pub const TOOLTIP_FONT_SIZE: f32 = 14.0;
pub const TOOLTIP_LINE_HEIGHT: f32 = 18.0;
pub const TOOLTIP_TEXT_COLOR: [u8; 4] = [255, 255, 255, 255];

// Orbit controls
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of the pending delta applied per 60 Hz frame
pub const ORBIT_MIN_DISTANCE: f32 = 0.5;
pub const ORBIT_MAX_DISTANCE: f32 = 100.0;

// Pointer: presses that move further than this are drags, not clicks
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 4.0;

// Window defaults
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

// Companion backend
pub const DEFAULT_SERVER_PORT: u16 = 3000;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn look_at_target_vec3() -> Vec3 {
    Vec3::from(LOOK_AT_TARGET)
}
