use crate::error::Result;
use crate::figure::{BundleData, BundleSide, FaceId, Figure};
use crate::operations::deform::DeformedBoundary;
use crate::rendering::{OneSidedPolygon, RenderParams};

/// The polygon drawing `side` of a face, still in the face plane.
///
/// The face side turned towards `side` of the bundle decides the winding and
/// colour. A deformed boundary replaces the face boundary and drops the
/// creases, which only make sense on a flat polygon.
///
/// # Errors
///
/// Returns an error if the face is missing or has no area.
pub fn face_polygon(
    figure: &Figure,
    bundle: &BundleData,
    face: FaceId,
    side: BundleSide,
    deformed: Option<&DeformedBoundary>,
) -> Result<OneSidedPolygon> {
    let data = figure.face(face)?;
    let shows_front = figure.face_normal(face)?.dot(&bundle.normal(side)) > 0.0;

    if let Some(boundary) = deformed {
        let color = if shows_front {
            data.colors.front
        } else {
            data.colors.back
        };
        return OneSidedPolygon::new(boundary.oriented(shows_front), color);
    }

    let points = figure.face_points(face)?;
    if shows_front {
        OneSidedPolygon::front_of(&points, data.colors, &data.creases)
    } else {
        OneSidedPolygon::back_of(&points, data.colors, &data.creases)
    }
}

/// Moves a polygon drawn for `side` to its layer.
///
/// The layer sits `layer_offset` along the upwards normal. Top surfaces go
/// half a separation further up and bottom surfaces half a separation
/// further down, so the two sides of one layer never coincide. Creases sit
/// a full separation in front of their surface, towards the side viewing
/// it.
#[must_use]
pub fn offset_polygon(
    polygon: &OneSidedPolygon,
    bundle: &BundleData,
    side: BundleSide,
    layer_offset: f64,
    params: &RenderParams,
) -> OneSidedPolygon {
    let surface = match side {
        BundleSide::Top => layer_offset + params.half_separation(),
        BundleSide::Bottom => layer_offset - params.half_separation(),
    };
    let offset = bundle.upwards() * surface;
    let crease_offset = offset + bundle.normal(side) * params.layer_separation;
    polygon.translated(&offset, &crease_offset)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::figure::{Color, ColorPair, Crease, FaceData};
    use crate::fixtures::{add_face_3d, xy_bundle};
    use crate::math::Point3;
    use approx::assert_relative_eq;

    fn red_blue() -> ColorPair {
        ColorPair::new(Color::rgb(255, 0, 0), Color::rgb(0, 0, 255))
    }

    fn square_points(z: f64) -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, z),
            Point3::new(1.0, 0.0, z),
            Point3::new(1.0, 1.0, z),
            Point3::new(0.0, 1.0, z),
        ]
    }

    #[test]
    fn face_up_shows_front_from_top_and_back_from_bottom() {
        let mut figure = Figure::new();
        let face = add_face_3d(&mut figure, &square_points(0.0), red_blue());
        let bundle = xy_bundle().with_face(face);

        let top = face_polygon(&figure, &bundle, face, BundleSide::Top, None).unwrap();
        let bottom = face_polygon(&figure, &bundle, face, BundleSide::Bottom, None).unwrap();
        assert_eq!(top.color(), red_blue().front);
        assert_eq!(bottom.color(), red_blue().back);
        assert_eq!(top.boundary(), square_points(0.0).as_slice());
        assert_eq!(bottom.boundary()[0], square_points(0.0)[3]);
    }

    #[test]
    fn face_down_shows_back_from_top() {
        let mut figure = Figure::new();
        let mut points = square_points(0.0);
        points.reverse();
        let face = add_face_3d(&mut figure, &points, red_blue());
        let bundle = xy_bundle().with_face(face);

        let top = face_polygon(&figure, &bundle, face, BundleSide::Top, None).unwrap();
        let bottom = face_polygon(&figure, &bundle, face, BundleSide::Bottom, None).unwrap();
        assert_eq!(top.color(), red_blue().back);
        assert_eq!(bottom.color(), red_blue().front);
        // both wound counter-clockwise about the side they face
        assert_eq!(top.boundary()[1], square_points(0.0)[1]);
        assert_eq!(bottom.boundary(), points.as_slice());
    }

    #[test]
    fn offsets_separate_the_two_sides_of_a_layer() {
        let mut figure = Figure::new();
        let points = square_points(0.0);
        let vertices = points.iter().map(|&p| figure.add_vertex(p)).collect();
        let crease = Crease::new(points[0], points[2]);
        let face = figure
            .add_face(FaceData::new(vertices).with_crease(crease))
            .unwrap();
        let bundle = xy_bundle().with_face(face);
        let top = face_polygon(&figure, &bundle, face, BundleSide::Top, None).unwrap();
        let bottom = face_polygon(&figure, &bundle, face, BundleSide::Bottom, None).unwrap();

        let params = RenderParams::default().with_layer_separation(1.0);
        // creases always sit on the viewing side of their surface
        let cases = [
            (0.0, BundleSide::Top, 0.5, 1.5),
            (0.0, BundleSide::Bottom, -0.5, -1.5),
            (0.5, BundleSide::Bottom, 0.0, -1.0),
            (0.5, BundleSide::Top, 1.0, 2.0),
            (-0.5, BundleSide::Top, 0.0, 1.0),
            (-1.0, BundleSide::Top, -0.5, 0.5),
            (-1.0, BundleSide::Bottom, -1.5, -2.5),
        ];
        for (offset, side, surface_z, crease_z) in cases {
            let polygon = if side == BundleSide::Top { &top } else { &bottom };
            let moved = offset_polygon(polygon, &bundle, side, offset, &params);
            for point in moved.boundary() {
                assert_relative_eq!(point.z, surface_z, epsilon = 1e-12);
            }
            let [a, b] = moved.creases()[0];
            assert_relative_eq!(a.z, crease_z, epsilon = 1e-12);
            assert_relative_eq!(b.z, crease_z, epsilon = 1e-12);
        }
    }
}
