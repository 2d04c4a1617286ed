mod visible_bundle;
mod visible_polygons;

pub use visible_bundle::{VisibleBundle, VisibleSides};
pub use visible_polygons::VisiblePolygons;
