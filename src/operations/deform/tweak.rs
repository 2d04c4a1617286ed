use crate::figure::FaceData;
use crate::math::polygon_2d::rotate_to_position;
use crate::math::Point3;

use super::Deformation;

/// Position the deformed vertex takes in an emitted boundary.
const DEFORMED_POSITION: usize = 1;

/// A face boundary with its tweaks applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DeformedBoundary {
    points: Vec<Point3>,
    deformed: Option<usize>,
}

impl DeformedBoundary {
    /// Applies `deformation` to the boundary `points` of `face`, spending at
    /// most `budget` moved or inserted vertices. The corner pull is applied
    /// before the edge bulge.
    #[must_use]
    pub fn new(face: &FaceData, points: &[Point3], deformation: &Deformation, budget: usize) -> Self {
        let mut points = points.to_vec();
        let mut deformed = None;
        let mut spent = 0;

        if let Some(pull) = deformation.corner.filter(|_| spent < budget) {
            if let Some(index) = face.index_of(pull.vertex) {
                points[index] = pull.position;
                deformed = Some(index);
                spent += 1;
            }
        }
        if let Some(bulge) = deformation.bulge.filter(|_| spent < budget) {
            if let Some(index) = face.index_of(bulge.after) {
                points.insert(index + 1, bulge.position);
                deformed = Some(index + 1);
            }
        }
        Self { points, deformed }
    }

    /// The boundary, unrotated.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Index of the last moved or inserted vertex, if any.
    #[must_use]
    pub fn deformed(&self) -> Option<usize> {
        self.deformed
    }

    /// The boundary wound for the front (`true`) or back side, rotated so
    /// the deformed vertex comes second in both cases.
    #[must_use]
    pub fn oriented(&self, front: bool) -> Vec<Point3> {
        let n = self.points.len();
        if front {
            return match self.deformed {
                Some(index) => rotate_to_position(&self.points, index, DEFORMED_POSITION),
                None => self.points.clone(),
            };
        }
        let reversed: Vec<Point3> = self.points.iter().rev().copied().collect();
        match self.deformed {
            Some(index) => rotate_to_position(&reversed, n - 1 - index, DEFORMED_POSITION),
            None => reversed,
        }
    }
}
