use std::collections::HashMap;

use crate::error::{Result, TopologyError};
use crate::figure::{BundleData, FaceId, Figure};
use crate::geometry::Plane;
use crate::math::boolean_2d::CoverSet;
use crate::math::polygon_3d::newell_normal;
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

/// Where a face sits in space: one of its points and its unit normal.
#[derive(Debug, Clone, Copy)]
struct FacePlane {
    anchor: Point3,
    normal: Vector3,
}

/// The faces of one bundle flattened into the bundle plane.
///
/// Covering questions ("is this face hidden by those", "what is left of it")
/// are answered in 2D. Results are lifted back along the bundle normal onto
/// each face's own plane, so points of a face slightly tilted against the
/// bundle stay on the face.
#[derive(Debug, Clone)]
pub struct BundleProjection {
    plane: Plane,
    rings: HashMap<FaceId, Vec<Point2>>,
    face_planes: HashMap<FaceId, FacePlane>,
}

impl BundleProjection {
    /// Projects every face of `bundle`.
    ///
    /// # Errors
    ///
    /// Returns an error if a face or vertex of the bundle is missing, or a
    /// face has no area.
    pub fn new(figure: &Figure, bundle: &BundleData) -> Result<Self> {
        let origin = match bundle.faces().first() {
            Some(&face) => figure.face_points(face)?.first().copied(),
            None => None,
        }
        .unwrap_or_else(Point3::origin);
        let plane = Plane::from_normal(origin, bundle.upwards())?;

        let mut rings = HashMap::with_capacity(bundle.faces().len());
        let mut face_planes = HashMap::with_capacity(bundle.faces().len());
        for &face in bundle.faces() {
            let points = figure.face_points(face)?;
            let normal = newell_normal(&points)?;
            rings.insert(face, points.iter().map(|p| plane.project(p)).collect());
            face_planes.insert(
                face,
                FacePlane {
                    anchor: points[0],
                    normal,
                },
            );
        }
        Ok(Self {
            plane,
            rings,
            face_planes,
        })
    }

    /// The flattened boundary of `face`, in its own boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if `face` is not part of the bundle.
    pub fn ring(&self, face: FaceId) -> Result<&[Point2]> {
        self.rings
            .get(&face)
            .map(Vec::as_slice)
            .ok_or_else(|| TopologyError::EntityNotFound("face in bundle".into()).into())
    }

    /// Union of the areas of `faces`.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the faces is not part of the bundle.
    pub fn cover_set<I>(&self, faces: I) -> Result<CoverSet>
    where
        I: IntoIterator<Item = FaceId>,
    {
        let rings = faces
            .into_iter()
            .map(|face| self.ring(face))
            .collect::<Result<Vec<_>>>()?;
        Ok(CoverSet::from_rings(rings))
    }

    /// Returns `true` if the union of `covering` hides all of `face`'s area.
    /// An empty set hides nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if a face is not part of the bundle.
    pub fn is_hidden_by<I>(&self, face: FaceId, covering: I) -> Result<bool>
    where
        I: IntoIterator<Item = FaceId>,
    {
        let cover = self.cover_set(covering)?;
        Ok(cover.covers(self.ring(face)?))
    }

    /// Lifts a flattened point of `face` back into space: the point where
    /// the line through `uv` along the bundle normal meets the face plane.
    ///
    /// A face standing edge-on to the bundle has no such point; it is lifted
    /// to the height of its anchor instead.
    #[must_use]
    pub fn lift(&self, face: FaceId, uv: &Point2) -> Point3 {
        let Some(face_plane) = self.face_planes.get(&face) else {
            return self.plane.lift(uv);
        };
        let on_bundle = self.plane.lift(uv);
        let slope = self.plane.normal().dot(&face_plane.normal);
        let height = if slope.abs() < TOLERANCE {
            self.plane.height_of(&face_plane.anchor)
        } else {
            (face_plane.anchor - on_bundle).dot(&face_plane.normal) / slope
        };
        self.plane.lift_with_height(uv, height)
    }

    /// Flattens an arbitrary point (crease ends).
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point2 {
        self.plane.project(point)
    }
}
