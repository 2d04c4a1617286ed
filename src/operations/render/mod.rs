mod assemble;
mod render_bundle;
mod render_figure;

pub use assemble::{face_polygon, offset_polygon};
pub use render_bundle::RenderBundle;
pub use render_figure::RenderFigure;
