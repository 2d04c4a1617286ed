use crate::error::Result;
use crate::figure::{BundleData, BundleId, BundleSide, Crease, FaceId, Figure};
use crate::math::Point3;
use crate::operations::coverage::BundleProjection;
use crate::rendering::{LayeredRendering, OneSidedPolygon};

/// Computes what can be seen of each face of a bundle from one side.
///
/// A face with nothing on that side is returned whole. Otherwise the union
/// of every face on that side (directly or further out) is subtracted from
/// it and each connected remainder becomes one polygon. Creases are clipped
/// against the same union and all surviving pieces go to the first
/// remainder.
///
/// Every polygon is wound counter-clockwise as seen from `side` and shows
/// the colour of the face side turned that way.
pub struct VisiblePolygons {
    bundle: BundleId,
    side: BundleSide,
}

impl VisiblePolygons {
    /// Creates a new `VisiblePolygons` operation.
    #[must_use]
    pub fn new(bundle: BundleId, side: BundleSide) -> Self {
        Self { bundle, side }
    }

    /// Executes the operation. Faces with no visible area produce nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle references missing entities or holds
    /// a face with no area.
    pub fn execute(&self, figure: &Figure) -> Result<LayeredRendering> {
        let bundle = figure.bundle(self.bundle)?;
        let projection = BundleProjection::new(figure, bundle)?;
        visible_polygons(figure, bundle, &projection, self.side)
    }
}

pub(crate) fn visible_polygons(
    figure: &Figure,
    bundle: &BundleData,
    projection: &BundleProjection,
    side: BundleSide,
) -> Result<LayeredRendering> {
    let mut rendering = LayeredRendering::new();
    for &face in bundle.faces() {
        for polygon in visible_parts_of_face(figure, bundle, projection, face, side)? {
            rendering.insert(face, polygon);
        }
    }
    tracing::debug!(?side, polygons = rendering.len(), "computed visible polygons");
    Ok(rendering)
}

fn visible_parts_of_face(
    figure: &Figure,
    bundle: &BundleData,
    projection: &BundleProjection,
    face: FaceId,
    side: BundleSide,
) -> Result<Vec<OneSidedPolygon>> {
    let data = figure.face(face)?;
    let shows_front = figure.face_normal(face)?.dot(&bundle.normal(side)) > 0.0;
    let covering = bundle.all_faces_on(face, side);

    if covering.is_empty() {
        let points = figure.face_points(face)?;
        let polygon = if shows_front {
            OneSidedPolygon::front_of(&points, data.colors, &data.creases)?
        } else {
            OneSidedPolygon::back_of(&points, data.colors, &data.creases)?
        };
        return Ok(vec![polygon]);
    }

    let cover = projection.cover_set(covering)?;
    let regions = cover.subtract_from(projection.ring(face)?);
    if regions.is_empty() {
        tracing::trace!(?face, ?side, "face fully covered");
        return Ok(Vec::new());
    }

    let creases: Vec<Crease> = data
        .creases
        .iter()
        .flat_map(|crease| {
            cover.segment_outside(
                &projection.project(&crease.start),
                &projection.project(&crease.end),
            )
        })
        .map(|(a, b)| Crease::new(projection.lift(face, &a), projection.lift(face, &b)))
        .collect();

    let color = if shows_front {
        data.colors.front
    } else {
        data.colors.back
    };
    regions
        .iter()
        .enumerate()
        .map(|(i, region)| {
            // Regions come back counter-clockwise about `upwards`.
            let mut boundary: Vec<Point3> = region
                .exterior
                .iter()
                .map(|uv| projection.lift(face, uv))
                .collect();
            if side == BundleSide::Bottom {
                boundary.reverse();
            }
            let polygon = OneSidedPolygon::new(boundary, color)?;
            Ok(if i == 0 {
                polygon.with_creases(&creases)
            } else {
                polygon
            })
        })
        .collect()
}
