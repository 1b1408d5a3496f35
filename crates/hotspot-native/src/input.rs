use glam::Vec2;
use hotspot_core::CLICK_DRAG_THRESHOLD_PX;

/// What a pointer event means for the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerAction {
    None,
    /// Orbit by this many pixels since the last move.
    Drag(Vec2),
    /// Press and release without dragging: pick at this position.
    Click(Vec2),
}

/// Left-button tracking that tells clicks from orbit drags.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
    pressed_at: Option<Vec2>,
    dragging: bool,
}

impl PointerState {
    pub fn is_down(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn press(&mut self) {
        self.pressed_at = Some(self.pos);
        self.dragging = false;
    }

    pub fn moved(&mut self, pos: Vec2) -> PointerAction {
        let delta = pos - self.pos;
        self.pos = pos;
        let Some(start) = self.pressed_at else {
            return PointerAction::None;
        };
        if !self.dragging && pos.distance(start) > CLICK_DRAG_THRESHOLD_PX {
            self.dragging = true;
        }
        if self.dragging {
            PointerAction::Drag(delta)
        } else {
            PointerAction::None
        }
    }

    pub fn release(&mut self) -> PointerAction {
        let was_down = self.pressed_at.take().is_some();
        let dragged = std::mem::replace(&mut self.dragging, false);
        if was_down && !dragged {
            PointerAction::Click(self.pos)
        } else {
            PointerAction::None
        }
    }
}
