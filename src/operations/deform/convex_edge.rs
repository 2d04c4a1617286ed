use crate::figure::{EdgeUsage, FaceData, VertexId};
use crate::math::polygon_3d::midpoint;
use crate::math::{Point3, Vector3};

/// A point inserted in the middle of a free edge, lifted off the face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeBulge {
    /// Start vertex of the bulging edge; the new point follows it.
    pub after: VertexId,
    /// Position of the inserted point.
    pub position: Point3,
}

/// Index of the first free edge of `face` lying between two connecting
/// edges. Edge `i` runs from vertex `i` to vertex `i + 1`.
#[must_use]
pub fn convexable_edge(face: &FaceData, usage: &EdgeUsage) -> Option<usize> {
    let edges = face.edges();
    let n = edges.len();
    (0..n).find(|&i| {
        usage.is_free(edges[i])
            && usage.is_connecting(edges[(i + n - 1) % n])
            && usage.is_connecting(edges[(i + 1) % n])
    })
}

/// Bulges the first convexable edge of `face` along `normal` by a quarter of
/// the opening-angle fraction of its length.
#[must_use]
pub fn bulge_edge(
    face: &FaceData,
    points: &[Point3],
    usage: &EdgeUsage,
    normal: &Vector3,
    opening_angle: f64,
) -> Option<EdgeBulge> {
    let index = convexable_edge(face, usage)?;
    let start = points[index];
    let end = points[(index + 1) % points.len()];
    let height = (end - start).norm() * opening_angle / 4.0;
    Some(EdgeBulge {
        after: face.vertices[index],
        position: midpoint(&start, &end) + normal.normalize() * height,
    })
}
