pub mod bundle;
pub mod color;
pub mod edge;
pub mod face;
pub mod vertex;

pub use bundle::{BundleData, BundleId, BundleSide};
pub use color::{Color, ColorPair};
pub use edge::{Edge, EdgeKind};
pub use face::{Crease, FaceData, FaceId};
pub use vertex::{VertexData, VertexId};

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::{Result, TopologyError};
use crate::math::polygon_3d::newell_normal;
use crate::math::{Point3, Vector3};

/// Central arena that owns a folded figure: vertices, faces and bundles.
///
/// Entities reference each other via typed IDs (generational indices).
/// Faces and bundles are read-only once added; rendering never mutates
/// the figure.
#[derive(Debug, Default)]
pub struct Figure {
    vertices: SlotMap<VertexId, VertexData>,
    faces: SlotMap<FaceId, FaceData>,
    bundles: SlotMap<BundleId, BundleData>,
}

impl Figure {
    /// Creates a new, empty figure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, point: Point3) -> VertexId {
        self.vertices.insert(VertexData::new(point))
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the figure.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()).into())
    }

    // --- Face operations ---

    /// Inserts a face and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the face has fewer than 3 vertices, repeats a
    /// vertex, or references a vertex that is not in the figure.
    pub fn add_face(&mut self, data: FaceData) -> Result<FaceId> {
        if data.vertices.len() < 3 {
            return Err(TopologyError::TooFewVertices {
                count: data.vertices.len(),
            }
            .into());
        }
        for (i, &v) in data.vertices.iter().enumerate() {
            self.vertex(v)?;
            if data.vertices[..i].contains(&v) {
                return Err(TopologyError::InvalidTopology(
                    "face boundary visits a vertex twice".into(),
                )
                .into());
            }
        }
        Ok(self.faces.insert(data))
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the figure.
    pub fn face(&self, id: FaceId) -> Result<&FaceData> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()).into())
    }

    /// Iterates over every face of the figure.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &FaceData)> {
        self.faces.iter()
    }

    /// Boundary positions of a face, in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its vertices is missing.
    pub fn face_points(&self, id: FaceId) -> Result<Vec<Point3>> {
        self.face(id)?
            .vertices
            .iter()
            .map(|&v| self.vertex(v).map(|data| data.point))
            .collect()
    }

    /// Unit normal of the face's front side.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or has no area.
    pub fn face_normal(&self, id: FaceId) -> Result<Vector3> {
        newell_normal(&self.face_points(id)?)
    }

    // --- Bundle operations ---

    /// Inserts a bundle and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle references a face that is not in the
    /// figure.
    pub fn add_bundle(&mut self, data: BundleData) -> Result<BundleId> {
        for &face in data.faces() {
            self.face(face)?;
        }
        Ok(self.bundles.insert(data))
    }

    /// Returns a reference to the bundle data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the figure.
    pub fn bundle(&self, id: BundleId) -> Result<&BundleData> {
        self.bundles
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("bundle".into()).into())
    }

    /// IDs of every bundle, in insertion order.
    #[must_use]
    pub fn bundle_ids(&self) -> Vec<BundleId> {
        self.bundles.keys().collect()
    }

    // --- Edge queries ---

    /// Counts, for every edge of the figure, how many faces use it.
    #[must_use]
    pub fn edge_usage(&self) -> EdgeUsage {
        let mut counts: HashMap<Edge, usize> = HashMap::new();
        for face in self.faces.values() {
            for edge in face.edges() {
                *counts.entry(edge).or_default() += 1;
            }
        }
        EdgeUsage { counts }
    }

    /// Returns `true` if `edge` belongs to a single face of the figure.
    #[must_use]
    pub fn is_free_edge(&self, edge: Edge) -> bool {
        self.edge_usage().is_free(edge)
    }

    /// Returns `true` if `edge` is shared by exactly two faces.
    #[must_use]
    pub fn is_connecting_edge(&self, edge: Edge) -> bool {
        self.edge_usage().is_connecting(edge)
    }
}

/// Per-edge face counts for a whole figure.
///
/// Computed once per rendering; edge classification is a lookup.
#[derive(Debug, Clone, Default)]
pub struct EdgeUsage {
    counts: HashMap<Edge, usize>,
}

impl EdgeUsage {
    /// Number of faces using `edge`.
    #[must_use]
    pub fn count(&self, edge: Edge) -> usize {
        self.counts.get(&edge).copied().unwrap_or(0)
    }

    /// Classifies `edge`, or `None` if no face uses it.
    #[must_use]
    pub fn kind(&self, edge: Edge) -> Option<EdgeKind> {
        match self.count(edge) {
            0 => None,
            1 => Some(EdgeKind::Free),
            2 => Some(EdgeKind::Connecting),
            _ => Some(EdgeKind::Junction),
        }
    }

    #[must_use]
    pub fn is_free(&self, edge: Edge) -> bool {
        self.kind(edge) == Some(EdgeKind::Free)
    }

    #[must_use]
    pub fn is_connecting(&self, edge: Edge) -> bool {
        self.kind(edge) == Some(EdgeKind::Connecting)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn face_with_two_vertices_is_rejected() {
        let mut figure = Figure::new();
        let a = figure.add_vertex(p(0.0, 0.0, 0.0));
        let b = figure.add_vertex(p(1.0, 0.0, 0.0));
        let err = figure.add_face(FaceData::new(vec![a, b])).unwrap_err();
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn face_repeating_a_vertex_is_rejected() {
        let mut figure = Figure::new();
        let a = figure.add_vertex(p(0.0, 0.0, 0.0));
        let b = figure.add_vertex(p(1.0, 0.0, 0.0));
        assert!(figure.add_face(FaceData::new(vec![a, b, a])).is_err());
    }

    #[test]
    fn face_with_unknown_vertex_is_rejected() {
        let mut figure = Figure::new();
        let a = figure.add_vertex(p(0.0, 0.0, 0.0));
        let b = figure.add_vertex(p(1.0, 0.0, 0.0));
        let missing = VertexId::default();
        assert!(figure.add_face(FaceData::new(vec![a, b, missing])).is_err());
    }

    #[test]
    fn bundle_with_unknown_face_is_rejected() {
        let mut figure = Figure::new();
        let bundle = BundleData::new(Vector3::z()).unwrap().with_face(FaceId::default());
        assert!(figure.add_bundle(bundle).is_err());
    }

    #[test]
    fn shared_edge_is_connecting_and_others_free() {
        let mut figure = Figure::new();
        let a = figure.add_vertex(p(0.0, 0.0, 0.0));
        let b = figure.add_vertex(p(1.0, 0.0, 0.0));
        let c = figure.add_vertex(p(1.0, 1.0, 0.0));
        let d = figure.add_vertex(p(0.0, 1.0, 0.0));
        figure.add_face(FaceData::new(vec![a, b, c])).unwrap();
        figure.add_face(FaceData::new(vec![a, c, d])).unwrap();
        let usage = figure.edge_usage();
        assert!(usage.is_connecting(Edge::new(c, a)));
        assert!(usage.is_free(Edge::new(a, b)));
        assert!(usage.is_free(Edge::new(d, a)));
        assert_eq!(usage.kind(Edge::new(b, d)), None);
        assert!(figure.is_free_edge(Edge::new(b, c)));
        assert!(figure.is_connecting_edge(Edge::new(a, c)));
    }

    #[test]
    fn face_normal_follows_vertex_order() {
        let mut figure = Figure::new();
        let a = figure.add_vertex(p(0.0, 0.0, 0.0));
        let b = figure.add_vertex(p(1.0, 0.0, 0.0));
        let c = figure.add_vertex(p(1.0, 1.0, 0.0));
        let up = figure.add_face(FaceData::new(vec![a, b, c])).unwrap();
        let down = figure.add_face(FaceData::new(vec![c, b, a])).unwrap();
        assert!(figure.face_normal(up).unwrap().z > 0.0);
        assert!(figure.face_normal(down).unwrap().z < 0.0);
    }
}
