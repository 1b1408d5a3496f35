use crate::marker::MarkerId;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("no marker with id {0}")]
    UnknownMarker(MarkerId),
}
