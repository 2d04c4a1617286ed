mod layered;
mod params;
mod polygon;

pub use layered::LayeredRendering;
pub use params::{RenderMode, RenderParams};
pub use polygon::{push, OneSidedPolygon};
