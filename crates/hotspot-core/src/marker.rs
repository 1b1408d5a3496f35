use crate::constants::{
    MARKER_ANCHORS, MARKER_GREEN, MARKER_LABELS, MARKER_POSITIONS, MARKER_RED,
};
use glam::Vec3;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerId(pub usize);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Clickable sphere in the scene.
///
/// `position` is where the sphere is drawn; `anchor` is the world point the
/// tooltip follows once the marker is active. The two differ for the stock
/// markers.
#[derive(Clone, Debug)]
pub struct Marker {
    pub id: MarkerId,
    pub position: Vec3,
    pub anchor: Vec3,
    pub label: String,
    pub active: bool,
}

impl Marker {
    pub fn new(id: usize, position: Vec3, anchor: Vec3, label: impl Into<String>) -> Self {
        Self {
            id: MarkerId(id),
            position,
            anchor,
            label: label.into(),
            active: false,
        }
    }
}

/// The two stock markers placed around the car body.
pub fn default_markers() -> Vec<Marker> {
    MARKER_POSITIONS
        .iter()
        .zip(MARKER_ANCHORS.iter())
        .zip(MARKER_LABELS.iter())
        .enumerate()
        .map(|(i, ((pos, anchor), label))| {
            Marker::new(i, Vec3::from(*pos), Vec3::from(*anchor), *label)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerColor {
    Red,
    Green,
}

impl MarkerColor {
    pub fn rgb(self) -> [f32; 3] {
        match self {
            MarkerColor::Red => MARKER_RED,
            MarkerColor::Green => MARKER_GREEN,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MarkerColor::Red => MarkerColor::Green,
            MarkerColor::Green => MarkerColor::Red,
        }
    }
}
