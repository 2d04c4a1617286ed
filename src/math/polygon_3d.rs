use crate::error::{GeometryError, Result};

use super::{Point3, Vector3, TOLERANCE};

/// Unit normal of a planar polygon by Newell's method.
///
/// The normal follows the right-hand rule over the vertex order, so a
/// boundary seen counter-clockwise from a point has its normal towards it.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the polygon has no area.
pub fn newell_normal(points: &[Point3]) -> Result<Vector3> {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(format!("polygon of {n} points has no area")).into());
    }
    Ok(normal / len)
}

/// Midpoint of the segment `a`-`b`.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    Point3::from((a.coords + b.coords) * 0.5)
}

/// Returns `true` if the two points coincide within `tolerance`.
#[must_use]
pub fn points_match(a: &Point3, b: &Point3, tolerance: f64) -> bool {
    (a - b).norm() <= tolerance
}
