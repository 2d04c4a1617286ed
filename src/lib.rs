//! Layered rendering of folded paper.
//!
//! A [`figure::Figure`] holds the faces of a folded sheet grouped into
//! bundles of stacked, coplanar faces. The operations turn a bundle into
//! one-sided polygons a renderer can draw: whole faces pushed apart in
//! layers ([`operations::render`]), optionally opened at their free corners,
//! or the visible part of every face seen from one side
//! ([`operations::visibility`]).

pub mod error;
pub mod figure;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod rendering;

#[cfg(test)]
mod fixtures;

pub use error::{RenderError, Result};
