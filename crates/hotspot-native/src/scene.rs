use crate::body;
use crate::gpu::{FrameData, InstanceData};
use crate::input::{PointerAction, PointerState};
use crate::text::TooltipLabel;
use glam::Vec2;
use hotspot_core::{
    look_at_target_vec3, pick_marker, screen_ray, BlinkTimer, Camera, OrbitControls, SceneHost,
    TooltipLayout, Viewport, MARKER_RADIUS,
};
use std::time::{Duration, Instant};

const WINDOW_TITLE: &str = "hotspot";

/// Frontend-side scene: the host state plus camera controls and the blink
/// timer whose lifetime is tied to this struct.
pub struct Scene {
    pub host: SceneHost,
    orbit: OrbitControls,
    camera: Camera,
    pointer: PointerState,
    last_frame: Instant,
    _blink: BlinkTimer,
}

impl Scene {
    pub fn new(viewport: Viewport, blink_period: Duration) -> anyhow::Result<Self> {
        let host = SceneHost::with_default_markers();
        let blink = BlinkTimer::start(blink_period, host.blink_phase().clone())?;
        let camera = Camera::for_viewport(viewport);
        let orbit = OrbitControls::new(camera.eye, camera.target);
        Ok(Self {
            host,
            orbit,
            camera,
            pointer: PointerState::default(),
            last_frame: Instant::now(),
            _blink: blink,
        })
    }

    pub fn pointer_moved(&mut self, pos: Vec2, viewport: Viewport) {
        if let PointerAction::Drag(delta) = self.pointer.moved(pos) {
            self.orbit.rotate(delta.x, delta.y, viewport.height);
        }
    }

    pub fn pointer_pressed(&mut self) {
        self.pointer.press();
    }

    pub fn pointer_released(&mut self, viewport: Viewport) {
        if let PointerAction::Click(at) = self.pointer.release() {
            self.click(at, viewport);
        }
    }

    fn click(&mut self, at: Vec2, viewport: Viewport) {
        let ray = screen_ray(at, self.camera.view_projection(), viewport);
        match pick_marker(&ray, self.host.markers(), MARKER_RADIUS) {
            Some(id) => {
                if let Err(e) = self.host.on_marker_click(id) {
                    log::warn!("click ignored: {e}");
                }
            }
            None => self.host.on_pointer_missed(),
        }
    }

    pub fn wheel(&mut self, steps: f32) {
        self.orbit.zoom(steps);
    }

    /// "Look At Point" button.
    pub fn look_at_point(&mut self) {
        self.host.look_at(look_at_target_vec3());
    }

    /// Advance camera controls and re-anchor the tooltip for this frame.
    pub fn frame(&mut self, viewport: Viewport) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;

        self.orbit.update(dt);
        self.orbit.apply(&mut self.camera);
        self.camera.aspect = viewport.aspect();
        self.host.on_frame(&self.camera, viewport);
    }

    pub fn instances(&self) -> Vec<InstanceData> {
        let mut out = body::body_instances(self.host.model_matrix());
        let rgb = self.host.marker_color().rgb();
        for m in self.host.markers() {
            out.push(InstanceData {
                pos: m.position.to_array(),
                scale: MARKER_RADIUS * 2.0,
                color: [rgb[0], rgb[1], rgb[2], 1.0],
            });
        }
        out
    }

    pub fn frame_data<'a>(&'a self, instances: &'a [InstanceData]) -> FrameData<'a> {
        FrameData {
            view_proj: self.camera.view_projection(),
            eye: self.camera.eye,
            target: self.camera.target,
            up: self.camera.up,
            instances,
            tooltip: self.host.tooltip().map(|t| TooltipLabel {
                text: t.label,
                layout: TooltipLayout::from_anchor(t.anchor),
            }),
        }
    }
}

pub fn window_title() -> &'static str {
    WINDOW_TITLE
}
