//! Scene host: marker selection and per-frame anchor tracking.
//!
//! All interactive state lives here and changes only through the methods
//! below. The frontend calls `on_marker_click` / `on_pointer_missed` from its
//! input handlers and `on_frame` once per rendered frame.

use crate::blink::BlinkPhase;
use crate::error::SceneError;
use crate::marker::{default_markers, Marker, MarkerColor, MarkerId};
use crate::projection::{project, ScreenAnchor};
use crate::state::{Camera, Viewport};
use glam::{Mat3, Mat4, Quat, Vec3};

/// Tooltip lifecycle.
///
/// `Pending` means a marker was selected but no frame has projected it yet.
/// `Tracking { anchor: None }` means the anchor is currently behind the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipState {
    Hidden,
    Pending {
        marker: MarkerId,
    },
    Tracking {
        marker: MarkerId,
        anchor: Option<ScreenAnchor>,
    },
}

impl TooltipState {
    pub fn marker(&self) -> Option<MarkerId> {
        match *self {
            TooltipState::Hidden => None,
            TooltipState::Pending { marker } | TooltipState::Tracking { marker, .. } => {
                Some(marker)
            }
        }
    }

    pub fn anchor(&self) -> Option<ScreenAnchor> {
        match *self {
            TooltipState::Tracking { anchor, .. } => anchor,
            _ => None,
        }
    }
}

/// Visible tooltip: label plus where to pin it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tooltip<'a> {
    pub marker: MarkerId,
    pub label: &'a str,
    pub anchor: ScreenAnchor,
}

pub struct SceneHost {
    markers: Vec<Marker>,
    tooltip: TooltipState,
    blink: BlinkPhase,
    model_rotation: Quat,
    projections: u64,
}

impl SceneHost {
    pub fn new(mut markers: Vec<Marker>, blink: BlinkPhase) -> Self {
        for m in &mut markers {
            m.active = false;
        }
        Self {
            markers,
            tooltip: TooltipState::Hidden,
            blink,
            model_rotation: Quat::IDENTITY,
            projections: 0,
        }
    }

    pub fn with_default_markers() -> Self {
        Self::new(default_markers(), BlinkPhase::new())
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn blink_phase(&self) -> &BlinkPhase {
        &self.blink
    }

    pub fn marker_color(&self) -> MarkerColor {
        self.blink.color()
    }

    pub fn active_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.active)
    }

    pub fn tooltip_state(&self) -> TooltipState {
        self.tooltip
    }

    /// Label and anchor of the tooltip, if one should be drawn this frame.
    pub fn tooltip(&self) -> Option<Tooltip<'_>> {
        let marker = self.tooltip.marker()?;
        let anchor = self.tooltip.anchor()?;
        let m = self.marker(marker)?;
        Some(Tooltip {
            marker,
            label: &m.label,
            anchor,
        })
    }

    /// Number of projector invocations so far.
    pub fn projections(&self) -> u64 {
        self.projections
    }

    /// Select a marker. Any previously active marker is deactivated and the
    /// anchor becomes unknown until the next frame.
    pub fn on_marker_click(&mut self, id: MarkerId) -> Result<(), SceneError> {
        if self.marker(id).is_none() {
            return Err(SceneError::UnknownMarker(id));
        }
        for m in &mut self.markers {
            m.active = m.id == id;
        }
        self.tooltip = TooltipState::Pending { marker: id };
        log::debug!("marker {} selected", id);
        Ok(())
    }

    /// A click that hit no marker clears the selection.
    pub fn on_pointer_missed(&mut self) {
        if self.tooltip != TooltipState::Hidden {
            log::debug!("selection cleared");
        }
        for m in &mut self.markers {
            m.active = false;
        }
        self.tooltip = TooltipState::Hidden;
    }

    /// Per-frame update. Projects the active marker's anchor (and only that
    /// one) against the current camera and stores the result.
    pub fn on_frame(&mut self, camera: &Camera, viewport: Viewport) -> Option<ScreenAnchor> {
        let (id, world) = {
            let m = self.active_marker()?;
            (m.id, m.anchor)
        };
        let anchor = project(world, camera.view_projection(), viewport);
        self.projections += 1;
        self.tooltip = TooltipState::Tracking { marker: id, anchor };
        anchor
    }

    /// Turn the car model so its local +Z axis faces `target`.
    pub fn look_at(&mut self, target: Vec3) {
        let forward = target.normalize_or_zero();
        if forward == Vec3::ZERO {
            return;
        }
        let mut right = Vec3::Y.cross(forward);
        if right.length_squared() < 1e-8 {
            // target straight above/below: any horizontal right vector works
            right = Vec3::X;
        }
        let right = right.normalize();
        let up = forward.cross(right);
        self.model_rotation = Quat::from_mat3(&Mat3::from_cols(right, up, forward));
        log::debug!("model looking at {:?}", target);
    }

    pub fn model_rotation(&self) -> Quat {
        self.model_rotation
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.model_rotation)
    }
}

impl Default for SceneHost {
    fn default() -> Self {
        Self::with_default_markers()
    }
}
