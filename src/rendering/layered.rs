use std::collections::HashMap;

use crate::figure::FaceId;

use super::OneSidedPolygon;

/// Result of rendering: every polygon plus the face it came from.
///
/// The face lookup lets a GUI map a clicked polygon back to its source face.
#[derive(Debug, Clone, Default)]
pub struct LayeredRendering {
    polygons: Vec<OneSidedPolygon>,
    origins: Vec<FaceId>,
    by_face: HashMap<FaceId, Vec<usize>>,
}

impl LayeredRendering {
    /// Creates an empty rendering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a polygon produced by `face`.
    pub fn insert(&mut self, face: FaceId, polygon: OneSidedPolygon) {
        let index = self.polygons.len();
        self.polygons.push(polygon);
        self.origins.push(face);
        self.by_face.entry(face).or_default().push(index);
    }

    /// Appends another rendering. Bundles never share faces, so entries of
    /// the two never clash.
    pub fn merge(&mut self, other: LayeredRendering) {
        for (polygon, face) in other.polygons.into_iter().zip(other.origins) {
            self.insert(face, polygon);
        }
    }

    /// Every polygon, in insertion order.
    #[must_use]
    pub fn polygons(&self) -> &[OneSidedPolygon] {
        &self.polygons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The face that produced the polygon at `index`.
    #[must_use]
    pub fn face_of(&self, index: usize) -> Option<FaceId> {
        self.origins.get(index).copied()
    }

    /// Polygons produced by `face` (zero, one or two).
    pub fn polygons_of(&self, face: FaceId) -> impl Iterator<Item = &OneSidedPolygon> {
        self.by_face
            .get(&face)
            .into_iter()
            .flatten()
            .map(|&i| &self.polygons[i])
    }

    /// Faces that produced at least one polygon.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.by_face.keys().copied()
    }
}
