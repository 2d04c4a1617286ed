use std::collections::HashMap;

use crate::error::Result;
use crate::figure::{BundleId, EdgeUsage, FaceId, Figure};
use crate::operations::deform::{DeformedBoundary, PlanDeformations};
use crate::operations::layering::{layer_offsets, MakeLayers};
use crate::rendering::{LayeredRendering, RenderMode, RenderParams};

use super::assemble::{face_polygon, offset_polygon};

/// Renders one bundle as whole faces pushed apart in layers.
///
/// Layers come from [`MakeLayers`] and are spread symmetrically about the
/// bundle plane. In [`RenderMode::ThreeDimensional`] the extremal faces are
/// also opened at a free corner or edge.
pub struct RenderBundle {
    bundle: BundleId,
    params: RenderParams,
}

impl RenderBundle {
    /// Creates a new `RenderBundle` operation.
    #[must_use]
    pub fn new(bundle: BundleId, params: RenderParams) -> Self {
        Self { bundle, params }
    }

    /// Executes the rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the stacking order is cyclic or the bundle
    /// references missing or degenerate faces.
    pub fn execute(&self, figure: &Figure) -> Result<LayeredRendering> {
        let usage = match self.params.mode {
            RenderMode::ThreeDimensional => Some(figure.edge_usage()),
            RenderMode::Layered => None,
        };
        self.render(figure, usage.as_ref())
    }

    /// Renders with a precomputed edge usage. `usage` is only read in
    /// three-dimensional mode.
    pub(crate) fn render(&self, figure: &Figure, usage: Option<&EdgeUsage>) -> Result<LayeredRendering> {
        let bundle = figure.bundle(self.bundle)?;
        let layers = MakeLayers::new(self.bundle).execute(figure)?;
        let offsets = layer_offsets(layers.len(), self.params.layer_separation);
        let deformed = self.deformed_boundaries(figure, usage)?;

        let mut rendering = LayeredRendering::new();
        for (layer, &offset) in layers.iter().zip(&offsets) {
            for &(face, sides) in layer.faces() {
                for &side in sides.sides() {
                    let polygon = face_polygon(figure, bundle, face, side, deformed.get(&face))?;
                    let placed = offset_polygon(&polygon, bundle, side, offset, &self.params);
                    rendering.insert(face, placed);
                }
            }
        }
        tracing::debug!(
            bundle = ?self.bundle,
            layers = layers.len(),
            deformed = deformed.len(),
            polygons = rendering.len(),
            "rendered bundle"
        );
        Ok(rendering)
    }

    fn deformed_boundaries(
        &self,
        figure: &Figure,
        usage: Option<&EdgeUsage>,
    ) -> Result<HashMap<FaceId, DeformedBoundary>> {
        let (RenderMode::ThreeDimensional, Some(usage)) = (self.params.mode, usage) else {
            return Ok(HashMap::new());
        };
        let plan = PlanDeformations::new(self.bundle, &self.params).execute(figure, usage)?;
        let mut deformed = HashMap::with_capacity(plan.len());
        for (face, deformation) in &plan {
            let boundary = DeformedBoundary::new(
                figure.face(*face)?,
                &figure.face_points(*face)?,
                deformation,
                self.params.max_deformed_vertices,
            );
            if boundary.deformed().is_some() {
                deformed.insert(*face, boundary);
            }
        }
        Ok(deformed)
    }
}
