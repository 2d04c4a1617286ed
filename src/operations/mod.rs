pub mod coverage;
pub mod deform;
pub mod layering;
pub mod render;
pub mod visibility;
