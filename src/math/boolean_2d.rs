//! Planar polygon booleans on top of `geo`.
//!
//! Faces of a bundle are flattened into the bundle plane and handled here as
//! rings of [`Point2`]. Only the two operations visibility needs are exposed:
//! subtracting a covering union from a ring, and clipping a segment against
//! it.

use geo::{
    Area, BooleanOps, BoundingRect, Coord, LineString, MultiLineString, MultiPolygon, Polygon, Rect,
};

use super::polygon_2d::{signed_area_2d, simplify_ring};
use super::{Point2, TOLERANCE};

/// Fraction of the subject's area below which a remainder is treated as
/// clipping noise.
pub const RELATIVE_AREA_TOLERANCE: f64 = 1e-9;

/// A hole-free piece of a polygon difference.
///
/// A remainder that encloses a hole is cut into pieces first, so the
/// exterior alone describes the region exactly.
#[derive(Debug, Clone)]
pub struct Region {
    /// Outer boundary, counter-clockwise, without a closing point.
    pub exterior: Vec<Point2>,
    /// Unsigned area of the region.
    pub area: f64,
}

/// Union of the areas of a set of covering polygons.
#[derive(Debug, Clone)]
pub struct CoverSet {
    union: MultiPolygon<f64>,
}

impl CoverSet {
    /// Builds the union of the given rings.
    #[must_use]
    pub fn from_rings<'a, I>(rings: I) -> Self
    where
        I: IntoIterator<Item = &'a [Point2]>,
    {
        let mut union = MultiPolygon::new(Vec::new());
        for ring in rings {
            let polygon = MultiPolygon::new(vec![to_geo_polygon(ring)]);
            union = if union.0.is_empty() {
                polygon
            } else {
                union.union(&polygon)
            };
        }
        Self { union }
    }

    /// Returns `true` if the set covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.union.0.is_empty() || self.union.unsigned_area() < TOLERANCE
    }

    /// Subtracts the covered area from `subject`, returning each connected
    /// remainder with a meaningful area.
    #[must_use]
    pub fn subtract_from(&self, subject: &[Point2]) -> Vec<Region> {
        let subject_area = signed_area_2d(subject).abs();
        if self.is_empty() {
            return vec![Region {
                exterior: counter_clockwise(simplify_ring(subject)),
                area: subject_area,
            }];
        }
        let threshold = subject_area * RELATIVE_AREA_TOLERANCE;
        let subject = MultiPolygon::new(vec![to_geo_polygon(subject)]);
        subject
            .difference(&self.union)
            .0
            .into_iter()
            .flat_map(cut_holes)
            .filter_map(|polygon| {
                let area = polygon.unsigned_area();
                if area <= threshold {
                    return None;
                }
                let exterior = simplify_ring(&from_line_string(polygon.exterior()));
                if exterior.len() < 3 {
                    return None;
                }
                Some(Region {
                    exterior: counter_clockwise(exterior),
                    area,
                })
            })
            .collect()
    }

    /// Returns `true` if the union covers `subject` entirely (area test).
    #[must_use]
    pub fn covers(&self, subject: &[Point2]) -> bool {
        if self.is_empty() {
            return false;
        }
        self.subtract_from(subject).is_empty()
    }

    /// Parts of the segment `start`-`end` lying outside the covered area.
    #[must_use]
    pub fn segment_outside(&self, start: &Point2, end: &Point2) -> Vec<(Point2, Point2)> {
        if self.is_empty() {
            return vec![(*start, *end)];
        }
        let line = MultiLineString::new(vec![LineString::new(vec![to_coord(start), to_coord(end)])]);
        self.union
            .clip(&line, true)
            .0
            .iter()
            .filter_map(|piece| {
                let first = piece.0.first()?;
                let last = piece.0.last()?;
                let (a, b) = (from_coord(first), from_coord(last));
                ((b - a).norm() > TOLERANCE).then_some((a, b))
            })
            .collect()
    }
}

/// Cuts `polygon` into hole-free pieces.
///
/// Each step splits a holed polygon along the vertical line through the
/// middle of its first hole's x-range. That line crosses the hole's
/// interior, so the hole opens up into notches on both halves and the hole
/// count of every piece drops.
fn cut_holes(polygon: Polygon<f64>) -> Vec<Polygon<f64>> {
    let mut pending = vec![polygon];
    let mut pieces = Vec::new();
    while let Some(polygon) = pending.pop() {
        let (Some(hole), Some(bounds)) = (
            polygon.interiors().first().and_then(|hole| hole.bounding_rect()),
            polygon.bounding_rect(),
        ) else {
            pieces.push(polygon);
            continue;
        };
        let cut_x = (hole.min().x + hole.max().x) / 2.0;
        let margin = bounds.width().max(bounds.height()).max(1.0);
        let low = Coord {
            x: bounds.min().x - margin,
            y: bounds.min().y - margin,
        };
        let high = Coord {
            x: bounds.max().x + margin,
            y: bounds.max().y + margin,
        };
        let left = Rect::new(low, Coord { x: cut_x, y: high.y }).to_polygon();
        let right = Rect::new(Coord { x: cut_x, y: low.y }, high).to_polygon();
        let whole = MultiPolygon::new(vec![polygon]);
        for half in [left, right] {
            pending.extend(whole.intersection(&MultiPolygon::new(vec![half])).0);
        }
    }
    pieces
}

fn counter_clockwise(mut ring: Vec<Point2>) -> Vec<Point2> {
    if signed_area_2d(&ring) < 0.0 {
        ring.reverse();
    }
    ring
}

fn to_coord(point: &Point2) -> Coord<f64> {
    Coord {
        x: point.x,
        y: point.y,
    }
}

fn from_coord(coord: &Coord<f64>) -> Point2 {
    Point2::new(coord.x, coord.y)
}

fn to_geo_polygon(ring: &[Point2]) -> Polygon<f64> {
    Polygon::new(LineString::new(ring.iter().map(to_coord).collect()), Vec::new())
}

fn from_line_string(line: &LineString<f64>) -> Vec<Point2> {
    line.0.iter().map(from_coord).collect()
}
