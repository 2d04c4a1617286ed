use std::collections::BTreeMap;

use crate::error::Result;
use crate::figure::{BundleId, BundleSide, EdgeUsage, FaceId, Figure};
use crate::rendering::RenderParams;

use super::convex_edge::{bulge_edge, EdgeBulge};
use super::open_corner::{pull_corner, CornerPull};

/// Tweaks chosen for one extremal face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deformation {
    /// Side of the bundle the face is opened towards.
    pub side: BundleSide,
    pub corner: Option<CornerPull>,
    pub bulge: Option<EdgeBulge>,
}

/// Picks the tweaks for every extremal face of a bundle.
///
/// Top faces are opened upwards and bottom faces downwards; a face alone on
/// both sides is opened upwards. Triangles and faces with neither an
/// openable corner nor a convexable edge are left out.
pub struct PlanDeformations {
    bundle: BundleId,
    opening_angle: f64,
}

impl PlanDeformations {
    /// Creates a new `PlanDeformations` operation.
    #[must_use]
    pub fn new(bundle: BundleId, params: &RenderParams) -> Self {
        Self {
            bundle,
            opening_angle: params.opening_angle,
        }
    }

    /// Executes the planning against the figure-wide edge usage.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle references missing entities.
    pub fn execute(&self, figure: &Figure, usage: &EdgeUsage) -> Result<BTreeMap<FaceId, Deformation>> {
        let bundle = figure.bundle(self.bundle)?;
        let mut plan = BTreeMap::new();
        for (side, faces) in [
            (BundleSide::Top, bundle.top_faces()),
            (BundleSide::Bottom, bundle.bottom_faces()),
        ] {
            let normal = bundle.normal(side);
            for face_id in faces {
                if plan.contains_key(&face_id) {
                    continue;
                }
                let face = figure.face(face_id)?;
                if face.is_triangle() {
                    continue;
                }
                let points = figure.face_points(face_id)?;
                let corner = pull_corner(face, &points, usage, &normal, self.opening_angle);
                let bulge = bulge_edge(face, &points, usage, &normal, self.opening_angle);
                if corner.is_none() && bulge.is_none() {
                    continue;
                }
                tracing::debug!(
                    face = ?face_id,
                    ?side,
                    corner = corner.is_some(),
                    bulge = bulge.is_some(),
                    "planned deformation"
                );
                plan.insert(face_id, Deformation { side, corner, bulge });
            }
        }
        Ok(plan)
    }
}
