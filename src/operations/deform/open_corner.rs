use crate::figure::{EdgeUsage, FaceData, VertexId};
use crate::math::{Point3, Vector3};

/// A corner pulled out of the face plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPull {
    /// The corner being moved.
    pub vertex: VertexId,
    /// Where it is drawn instead.
    pub position: Point3,
}

/// First corner of `face` that can be opened, in boundary order.
///
/// A corner is openable when both of its edges are free and the edges just
/// beyond them are connecting: the corner is a flap tip held on both sides.
/// Triangles are never opened.
#[must_use]
pub fn openable_corner(face: &FaceData, usage: &EdgeUsage) -> Option<usize> {
    if face.is_triangle() {
        return None;
    }
    let edges = face.edges();
    let n = edges.len();
    (0..n).find_map(|i| {
        let edge = edges[i];
        let next = edges[(i + 1) % n];
        let previous = edges[(i + n - 1) % n];
        let after_next = edges[(i + 2) % n];
        let free_pair = usage.is_free(edge) && usage.is_free(next);
        let held = usage.is_connecting(previous) && usage.is_connecting(after_next);
        // edge i and edge i + 1 meet at vertex i + 1
        (free_pair && held).then_some((i + 1) % n)
    })
}

/// How far the corner at `index` moves: the distance to the vertex half way
/// round the boundary times the opening angle (small-angle approximation).
#[must_use]
pub fn opening_distance(points: &[Point3], index: usize, opening_angle: f64) -> f64 {
    let n = points.len();
    let opposite = (index + n / 2) % n;
    (points[index] - points[opposite]).norm() * opening_angle
}

/// Pulls the openable corner of `face`, if any, along `normal`.
#[must_use]
pub fn pull_corner(
    face: &FaceData,
    points: &[Point3],
    usage: &EdgeUsage,
    normal: &Vector3,
    opening_angle: f64,
) -> Option<CornerPull> {
    let index = openable_corner(face, usage)?;
    let distance = opening_distance(points, index, opening_angle);
    Some(CornerPull {
        vertex: face.vertices[index],
        position: points[index] + normal.normalize() * distance,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::figure::{FaceData, Figure};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    /// Two quads sharing a fold line, the upper one with a free flap tip:
    ///
    /// ```text
    ///  d ---- c ---- f
    ///  |  q1  |  q2  |
    ///  a ---- b ---- e
    /// ```
    /// plus a triangle on `d`-`c` so that `q1` has connecting edges on two
    /// opposite sides.
    #[test]
    fn corner_with_two_free_edges_between_connections_is_found() {
        let mut figure = Figure::new();
        let a = figure.add_vertex(p(0.0, 0.0));
        let b = figure.add_vertex(p(1.0, 0.0));
        let c = figure.add_vertex(p(1.0, 1.0));
        let d = figure.add_vertex(p(0.0, 1.0));
        let e = figure.add_vertex(p(2.0, 0.0));
        let f = figure.add_vertex(p(2.0, 1.0));
        let g = figure.add_vertex(p(0.5, 2.0));
        let q2 = figure.add_face(FaceData::new(vec![b, e, f, c])).unwrap();
        figure.add_face(FaceData::new(vec![c, d, g])).unwrap();
        let q1_data = FaceData::new(vec![a, b, c, d]);
        let usage_before = figure.edge_usage();
        // q1 not yet added: every edge of q1 except b-c and c-d is unused
        assert!(openable_corner(&q1_data, &usage_before).is_none());

        figure.add_face(q1_data.clone()).unwrap();
        let usage = figure.edge_usage();
        // q1: a-b free, b-c connecting, c-d connecting, d-a free -> corner a
        assert_eq!(openable_corner(&q1_data, &usage), Some(0));
        // q2: b-e free, e-f free, f-c free, c-b connecting -> nothing held twice
        let q2_data = figure.face(q2).unwrap().clone();
        assert_eq!(openable_corner(&q2_data, &usage), None);
    }

    #[test]
    fn triangles_are_never_opened() {
        let mut figure = Figure::new();
        let a = figure.add_vertex(p(0.0, 0.0));
        let b = figure.add_vertex(p(1.0, 0.0));
        let c = figure.add_vertex(p(0.0, 1.0));
        let tri = FaceData::new(vec![a, b, c]);
        figure.add_face(tri.clone()).unwrap();
        assert_eq!(openable_corner(&tri, &figure.edge_usage()), None);
    }

    #[test]
    fn opening_distance_uses_the_opposite_vertex() {
        let square = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let distance = opening_distance(&square, 2, 0.1);
        assert_relative_eq!(distance, 2.0_f64.sqrt() * 0.1, epsilon = 1e-12);
        let pentagon = vec![p(0.0, 0.0), p(2.0, 0.0), p(3.0, 1.0), p(1.0, 3.0), p(-1.0, 1.0)];
        // 5 / 2 = 2 steps round: vertex 1 faces vertex 3
        let distance = opening_distance(&pentagon, 1, 1.0);
        assert_relative_eq!(distance, (p(2.0, 0.0) - p(1.0, 3.0)).norm(), epsilon = 1e-12);
    }
}
