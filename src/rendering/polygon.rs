use crate::error::{Result, TopologyError};
use crate::figure::{Color, ColorPair, Crease};
use crate::math::{Point3, Vector3};

/// A polygon that can only be seen from one side.
///
/// The boundary order decides which side: it is counter-clockwise when
/// seen from the side it is drawn for. Creases are 2-point segments.
#[derive(Debug, Clone, PartialEq)]
pub struct OneSidedPolygon {
    boundary: Vec<Point3>,
    color: Color,
    creases: Vec<[Point3; 2]>,
}

impl OneSidedPolygon {
    /// Creates a polygon without creases.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary has fewer than 3 points.
    pub fn new(boundary: Vec<Point3>, color: Color) -> Result<Self> {
        if boundary.len() < 3 {
            return Err(TopologyError::TooFewVertices {
                count: boundary.len(),
            }
            .into());
        }
        Ok(Self {
            boundary,
            color,
            creases: Vec::new(),
        })
    }

    /// The front side of a polygon: boundary kept, front colour.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary has fewer than 3 points.
    pub fn front_of(boundary: &[Point3], colors: ColorPair, creases: &[Crease]) -> Result<Self> {
        Ok(Self::new(boundary.to_vec(), colors.front)?.with_creases(creases))
    }

    /// The back side of a polygon: boundary reversed, back colour.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary has fewer than 3 points.
    pub fn back_of(boundary: &[Point3], colors: ColorPair, creases: &[Crease]) -> Result<Self> {
        let reversed = boundary.iter().rev().copied().collect();
        Ok(Self::new(reversed, colors.back)?.with_creases(creases))
    }

    /// Replaces the crease segments.
    #[must_use]
    pub fn with_creases(mut self, creases: &[Crease]) -> Self {
        self.creases = creases.iter().map(|c| [c.start, c.end]).collect();
        self
    }

    #[must_use]
    pub fn boundary(&self) -> &[Point3] {
        &self.boundary
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn creases(&self) -> &[[Point3; 2]] {
        &self.creases
    }
}

/// Moves a polygon `distance` along `direction`.
///
/// Creases travel `distance + separation` so they never sit exactly on the
/// surface they are drawn over.
#[must_use]
pub fn push(
    polygon: &OneSidedPolygon,
    direction: &Vector3,
    distance: f64,
    separation: f64,
) -> OneSidedPolygon {
    let unit = direction.normalize();
    polygon.translated(&(unit * distance), &(unit * (distance + separation)))
}

impl OneSidedPolygon {
    /// Moves the boundary by `offset` and the creases by `crease_offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3, crease_offset: &Vector3) -> Self {
        Self {
            boundary: self.boundary.iter().map(|p| p + offset).collect(),
            color: self.color,
            creases: self
                .creases
                .iter()
                .map(|[a, b]| [a + crease_offset, b + crease_offset])
                .collect(),
        }
    }
}
