mod layer;
mod make_layers;
mod offsets;

pub use layer::{Layer, SideToRender};
pub use make_layers::MakeLayers;
pub use offsets::layer_offsets;
