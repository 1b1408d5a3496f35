//! Tooltip overlay geometry in viewport pixels.
//!
//! The bubble sits above the anchor with a small downward arrow whose tip
//! touches the anchor point. The marker label is drawn centred in the bubble.

use crate::constants::{TOOLTIP_ARROW_SIZE, TOOLTIP_BUBBLE_HEIGHT, TOOLTIP_OFFSET, TOOLTIP_WIDTH};
use crate::projection::ScreenAnchor;
use crate::state::Viewport;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Whole-pixel `[left, top, right, bottom]`, rounded outward.
    pub fn pixel_bounds(&self) -> [i32; 4] {
        [
            self.x.floor() as i32,
            self.y.floor() as i32,
            (self.x + self.w).ceil() as i32,
            (self.y + self.h).ceil() as i32,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipLayout {
    pub bubble: Rect,
    /// left, right, tip
    pub arrow: [Vec2; 3],
}

/// Triangle list for the overlay pass: two for the bubble, one for the arrow.
pub const TOOLTIP_VERTEX_COUNT: usize = 9;

impl TooltipLayout {
    pub fn from_anchor(anchor: ScreenAnchor) -> Self {
        let origin = anchor.to_vec2() + Vec2::from(TOOLTIP_OFFSET);
        let bubble = Rect {
            x: origin.x,
            y: origin.y,
            w: TOOLTIP_WIDTH,
            h: TOOLTIP_BUBBLE_HEIGHT,
        };
        let base_y = bubble.y + bubble.h;
        let mid_x = bubble.x + bubble.w * 0.5;
        Self {
            bubble,
            arrow: [
                Vec2::new(mid_x - TOOLTIP_ARROW_SIZE, base_y),
                Vec2::new(mid_x + TOOLTIP_ARROW_SIZE, base_y),
                Vec2::new(mid_x, base_y + TOOLTIP_ARROW_SIZE),
            ],
        }
    }

    /// Clip rect for the label text.
    pub fn label_bounds(&self) -> Rect {
        self.bubble
    }

    /// Top-left corner for a single line of text of the given size so that it
    /// sits centred in the bubble. Text wider than the bubble starts at its
    /// left edge and is clipped by `label_bounds`.
    pub fn label_origin(&self, text_width: f32, line_height: f32) -> Vec2 {
        let b = self.bubble;
        Vec2::new(
            b.x + ((b.w - text_width) * 0.5).max(0.0),
            b.y + ((b.h - line_height) * 0.5).max(0.0),
        )
    }

    /// Overlay triangles in normalized device coordinates.
    pub fn to_ndc(&self, viewport: Viewport) -> [[f32; 2]; TOOLTIP_VERTEX_COUNT] {
        let to_ndc = |p: Vec2| -> [f32; 2] {
            [
                p.x / viewport.width.max(1.0) * 2.0 - 1.0,
                1.0 - p.y / viewport.height.max(1.0) * 2.0,
            ]
        };
        let b = self.bubble;
        let tl = Vec2::new(b.x, b.y);
        let tr = Vec2::new(b.x + b.w, b.y);
        let bl = Vec2::new(b.x, b.y + b.h);
        let br = Vec2::new(b.x + b.w, b.y + b.h);
        [
            to_ndc(tl),
            to_ndc(bl),
            to_ndc(br),
            to_ndc(tl),
            to_ndc(br),
            to_ndc(tr),
            to_ndc(self.arrow[0]),
            to_ndc(self.arrow[2]),
            to_ndc(self.arrow[1]),
        ]
    }
}
