use super::vertex::VertexId;

/// An unordered pair of vertices.
///
/// `Edge::new(a, b) == Edge::new(b, a)`; the pair is stored sorted so the
/// edge can key hash maps directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    low: VertexId,
    high: VertexId,
}

impl Edge {
    /// Creates the edge joining `a` and `b`.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Both ends, in no particular order.
    #[must_use]
    pub fn vertices(&self) -> [VertexId; 2] {
        [self.low, self.high]
    }

    /// Returns `true` if `vertex` is one of the ends.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.low == vertex || self.high == vertex
    }
}

/// How many faces of a figure use an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Used by exactly one face.
    Free,
    /// Shared with exactly one other face.
    Connecting,
    /// Shared by more than two faces (only possible at folds between bundles
    /// that touch along the same line).
    Junction,
}
