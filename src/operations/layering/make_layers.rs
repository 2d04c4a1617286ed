use std::collections::HashSet;

use crate::error::{OperationError, Result};
use crate::figure::{BundleData, BundleId, FaceId, Figure};
use crate::operations::coverage::BundleProjection;

use super::{Layer, SideToRender};

/// Partitions a bundle into layers, bottom to top.
///
/// Greedy topological levelling: each round takes every face whose faces
/// below are already placed. Faces hidden from both sides are placed but
/// not drawn, and a round that leaves nothing to draw emits no layer.
pub struct MakeLayers {
    bundle: BundleId,
}

impl MakeLayers {
    /// Creates a new `MakeLayers` operation.
    #[must_use]
    pub fn new(bundle: BundleId) -> Self {
        Self { bundle }
    }

    /// Executes the partition.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::CyclicStacking` if the stacking order has a
    /// cycle, or an error if the bundle references missing entities.
    pub fn execute(&self, figure: &Figure) -> Result<Vec<Layer>> {
        let bundle = figure.bundle(self.bundle)?;
        let projection = BundleProjection::new(figure, bundle)?;
        let layers = make_bottom_to_top_layers(bundle, &projection)?;
        tracing::debug!(
            faces = bundle.faces().len(),
            layers = layers.len(),
            "partitioned bundle into layers"
        );
        Ok(layers)
    }
}

pub(crate) fn make_bottom_to_top_layers(
    bundle: &BundleData,
    projection: &BundleProjection,
) -> Result<Vec<Layer>> {
    let face_count = bundle.faces().len();
    let mut placed: HashSet<FaceId> = HashSet::with_capacity(face_count);
    let mut layers = Vec::new();

    while placed.len() < face_count {
        let eligible: Vec<FaceId> = bundle
            .faces()
            .iter()
            .copied()
            .filter(|face| !placed.contains(face))
            .filter(|&face| bundle.faces_below(face).all(|below| placed.contains(&below)))
            .collect();
        if eligible.is_empty() {
            return Err(OperationError::CyclicStacking {
                remaining: face_count - placed.len(),
            }
            .into());
        }

        let classified = eligible
            .iter()
            .map(|&face| classify(bundle, projection, face).map(|side| (face, side)))
            .collect::<Result<Vec<_>>>()?;
        placed.extend(eligible);

        match Layer::from_classified(classified) {
            Some(layer) => layers.push(layer),
            None => tracing::trace!("round placed only hidden faces, no layer emitted"),
        }
    }
    Ok(layers)
}

/// Decides which sides of `face` its layer draws.
///
/// Extremal faces always get both sides: they are the ones opened up in
/// 3-D rendering, which exposes their inner surface.
fn classify(bundle: &BundleData, projection: &BundleProjection, face: FaceId) -> Result<SideToRender> {
    if bundle.is_top_face(face) || bundle.is_bottom_face(face) {
        return Ok(SideToRender::Both);
    }
    let hidden_from_above = projection.is_hidden_by(face, bundle.faces_above(face))?;
    let hidden_from_below = projection.is_hidden_by(face, bundle.faces_below(face))?;
    let side = SideToRender::from_hidden(hidden_from_above, hidden_from_below);
    if side == SideToRender::None {
        tracing::trace!(?face, "face hidden from both sides");
    }
    Ok(side)
}
