use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon in its plane coordinates (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Drops the closing point of a ring, consecutive duplicates and collinear
/// middle points.
///
/// Polygon clipping returns closed rings that may carry split points along
/// straight edges; renderers only need the corners.
#[must_use]
pub fn simplify_ring(points: &[Point2]) -> Vec<Point2> {
    let mut ring: Vec<Point2> = Vec::with_capacity(points.len());
    for &pt in points {
        if !matches!(ring.last(), Some(last) if (pt - *last).norm() <= TOLERANCE) {
            ring.push(pt);
        }
    }
    while ring.len() > 1 && (ring[0] - ring[ring.len() - 1]).norm() <= TOLERANCE {
        ring.pop();
    }

    let mut changed = true;
    while changed && ring.len() > 3 {
        changed = false;
        let n = ring.len();
        for i in 0..n {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            if is_collinear(&prev, &ring[i], &next) {
                ring.remove(i);
                changed = true;
                break;
            }
        }
    }
    ring
}

/// Returns `true` if `b` lies on the straight line through `a` and `c`.
#[must_use]
pub fn is_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let ab = b - a;
    let ac = c - a;
    let cross = ab.x * ac.y - ab.y * ac.x;
    cross.abs() <= TOLERANCE * ac.norm().max(1.0)
}

/// Rotates a cyclic list so the element at `index` ends up at `target`.
#[must_use]
pub fn rotate_to_position<T: Clone>(items: &[T], index: usize, target: usize) -> Vec<T> {
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }
    let shift = (index + n - target % n) % n;
    let mut rotated = Vec::with_capacity(n);
    rotated.extend_from_slice(&items[shift..]);
    rotated.extend_from_slice(&items[..shift]);
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area_2d(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn simplify_drops_closing_point_and_split_points() {
        let ring = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(0.0, 0.0),
        ];
        let simple = simplify_ring(&ring);
        assert_eq!(simple.len(), 4);
        assert!(simple.iter().all(|q| (*q - p(1.0, 0.0)).norm() > TOLERANCE));
    }

    #[test]
    fn simplify_keeps_triangle() {
        let ring = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
        assert_eq!(simplify_ring(&ring).len(), 3);
    }

    #[test]
    fn rotate_moves_index_to_target() {
        let items = vec!['a', 'b', 'c', 'd', 'e'];
        assert_eq!(rotate_to_position(&items, 3, 1), vec!['c', 'd', 'e', 'a', 'b']);
        assert_eq!(rotate_to_position(&items, 0, 1), vec!['e', 'a', 'b', 'c', 'd']);
        assert_eq!(rotate_to_position(&items, 1, 1), items);
    }
}
