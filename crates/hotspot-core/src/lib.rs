pub mod blink;
pub mod constants;
pub mod error;
pub mod host;
pub mod marker;
pub mod orbit;
pub mod picking;
pub mod projection;
pub mod state;
pub mod tooltip;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static OVERLAY_WGSL: &str = include_str!("../shaders/overlay.wgsl");

pub use blink::*;
pub use constants::*;
pub use error::*;
pub use host::*;
pub use marker::*;
pub use orbit::*;
pub use picking::*;
pub use projection::*;
pub use state::*;
pub use tooltip::*;
