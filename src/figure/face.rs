use crate::math::Point3;

use super::color::ColorPair;
use super::edge::Edge;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the figure.
    pub struct FaceId;
}

/// A crease line drawn on a face, as its two end points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crease {
    pub start: Point3,
    pub end: Point3,
}

impl Crease {
    /// Creates a crease between two points lying on the face.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }
}

/// Data associated with a face.
///
/// A face is a planar convex polygon given by its ordered vertex handles.
/// The order fixes the front side by the right-hand rule.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Ordered boundary vertices.
    pub vertices: Vec<VertexId>,
    /// Colours of the front and back sides.
    pub colors: ColorPair,
    /// Creases lying on the face. Never shared with other faces.
    pub creases: Vec<Crease>,
}

impl FaceData {
    /// Creates a white face with no creases.
    #[must_use]
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Self {
            vertices,
            colors: ColorPair::default(),
            creases: Vec::new(),
        }
    }

    /// Sets the side colours.
    #[must_use]
    pub fn with_colors(mut self, colors: ColorPair) -> Self {
        self.colors = colors;
        self
    }

    /// Adds a crease.
    #[must_use]
    pub fn with_crease(mut self, crease: Crease) -> Self {
        self.creases.push(crease);
        self
    }

    /// Boundary edges in order: edge `i` joins vertex `i` and vertex `i + 1`.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Position of `vertex` in the boundary.
    #[must_use]
    pub fn index_of(&self, vertex: VertexId) -> Option<usize> {
        self.vertices.iter().position(|&v| v == vertex)
    }

    #[must_use]
    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }
}
