//! Figure builders shared by unit tests.

#![allow(clippy::unwrap_used)]

use crate::figure::{BundleData, ColorPair, FaceData, FaceId, Figure};
use crate::math::{Point3, Vector3};

/// A bundle lying in the XY plane with its top towards +Z.
pub fn xy_bundle() -> BundleData {
    BundleData::new(Vector3::z()).unwrap()
}

/// Adds a face in the XY plane with fresh vertices.
pub fn add_face(figure: &mut Figure, corners: &[(f64, f64)]) -> FaceId {
    let points: Vec<Point3> = corners.iter().map(|&(x, y)| Point3::new(x, y, 0.0)).collect();
    add_face_3d(figure, &points, ColorPair::default())
}

/// Adds a face with fresh vertices at arbitrary positions.
pub fn add_face_3d(figure: &mut Figure, points: &[Point3], colors: ColorPair) -> FaceId {
    let vertices = points.iter().map(|&p| figure.add_vertex(p)).collect();
    figure
        .add_face(FaceData::new(vertices).with_colors(colors))
        .unwrap()
}

/// A strip of three unit squares along +X in the XY plane. Returns the
/// middle square: its edges along y = 0 and y = 1 are free, the two it
/// shares with its neighbours are connecting.
pub fn add_strip_middle(figure: &mut Figure) -> FaceId {
    let v: Vec<_> = [
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
        (3.0, 1.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y)| figure.add_vertex(Point3::new(x, y, 0.0)))
    .collect();
    figure.add_face(FaceData::new(vec![v[0], v[1], v[6], v[7]])).unwrap();
    figure.add_face(FaceData::new(vec![v[2], v[3], v[4], v[5]])).unwrap();
    figure
        .add_face(FaceData::new(vec![v[1], v[2], v[5], v[6]]))
        .unwrap()
}
