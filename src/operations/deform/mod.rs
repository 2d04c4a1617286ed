//! Pseudo-3D tweaks for the outermost faces of a bundle.
//!
//! A face with nothing on one side of it may be opened towards that side:
//! a free corner is pulled out of the plane, or a free edge gets a bulge
//! point. The renderer downstream copes with one non-coplanar vertex per
//! polygon, so [`RenderParams::max_deformed_vertices`] caps how many
//! tweaks a face receives and the tweaked vertex is always emitted second.
//!
//! [`RenderParams::max_deformed_vertices`]: crate::rendering::RenderParams

mod convex_edge;
mod open_corner;
mod plan;
mod tweak;

pub use convex_edge::{bulge_edge, convexable_edge, EdgeBulge};
pub use open_corner::{openable_corner, opening_distance, pull_corner, CornerPull};
pub use plan::{Deformation, PlanDeformations};
pub use tweak::DeformedBoundary;
