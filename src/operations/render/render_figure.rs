use rayon::prelude::*;

use crate::error::Result;
use crate::figure::{BundleId, Figure};
use crate::rendering::{LayeredRendering, RenderMode, RenderParams};

use super::render_bundle::RenderBundle;

/// Renders every bundle of a figure and merges the results.
///
/// Bundles share no state, so with [`RenderParams::parallel`] set they are
/// rendered on the rayon pool. The merged output keeps bundle order.
pub struct RenderFigure {
    params: RenderParams,
}

impl RenderFigure {
    /// Creates a new `RenderFigure` operation.
    #[must_use]
    pub fn new(params: RenderParams) -> Self {
        Self { params }
    }

    /// Executes the rendering.
    ///
    /// # Errors
    ///
    /// Returns the first error met by any bundle.
    pub fn execute(&self, figure: &Figure) -> Result<LayeredRendering> {
        let usage = match self.params.mode {
            RenderMode::ThreeDimensional => Some(figure.edge_usage()),
            RenderMode::Layered => None,
        };
        let bundles = figure.bundle_ids();
        let render = |&bundle: &BundleId| RenderBundle::new(bundle, self.params).render(figure, usage.as_ref());

        let renderings: Vec<LayeredRendering> = if self.params.parallel {
            bundles.par_iter().map(render).collect::<Result<_>>()?
        } else {
            bundles.iter().map(render).collect::<Result<_>>()?
        };

        let mut merged = LayeredRendering::new();
        for rendering in renderings {
            merged.merge(rendering);
        }
        tracing::debug!(bundles = bundles.len(), polygons = merged.len(), "rendered figure");
        Ok(merged)
    }
}
