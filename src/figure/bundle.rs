use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::error::{GeometryError, Result};
use crate::math::{Vector3, TOLERANCE};

use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for a bundle in the figure.
    pub struct BundleId;
}

/// One of the two sides of a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleSide {
    /// The side the `upwards` normal points to.
    Top,
    /// The side the `downwards` normal points to.
    Bottom,
}

/// A stack of faces lying in one approximate plane.
///
/// The stacking order is a DAG over face handles: `stack(lower, upper)`
/// records "upper lies directly above lower" in both directions at once,
/// so the above and below maps are always symmetric. Acyclicity is the
/// caller's responsibility; layering reports a cycle as an error.
#[derive(Debug, Clone)]
pub struct BundleData {
    faces: Vec<FaceId>,
    upwards: Vector3,
    above: BTreeMap<FaceId, BTreeSet<FaceId>>,
    below: BTreeMap<FaceId, BTreeSet<FaceId>>,
}

impl BundleData {
    /// Creates an empty bundle whose top side looks along `upwards`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if `upwards` has no length.
    pub fn new(upwards: Vector3) -> Result<Self> {
        let len = upwards.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            faces: Vec::new(),
            upwards: upwards / len,
            above: BTreeMap::new(),
            below: BTreeMap::new(),
        })
    }

    /// Adds a face to the bundle. Adding it twice has no effect.
    pub fn add_face(&mut self, face: FaceId) {
        if !self.faces.contains(&face) {
            self.faces.push(face);
        }
    }

    /// Builder form of [`BundleData::add_face`].
    #[must_use]
    pub fn with_face(mut self, face: FaceId) -> Self {
        self.add_face(face);
        self
    }

    /// Records that `upper` lies directly above `lower`, adding both faces
    /// to the bundle if needed.
    pub fn stack(&mut self, lower: FaceId, upper: FaceId) {
        self.add_face(lower);
        self.add_face(upper);
        self.above.entry(lower).or_default().insert(upper);
        self.below.entry(upper).or_default().insert(lower);
    }

    /// Builder form of [`BundleData::stack`].
    #[must_use]
    pub fn with_stacked(mut self, lower: FaceId, upper: FaceId) -> Self {
        self.stack(lower, upper);
        self
    }

    /// Faces of the bundle in insertion order.
    #[must_use]
    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }

    #[must_use]
    pub fn contains(&self, face: FaceId) -> bool {
        self.faces.contains(&face)
    }

    /// Unit normal of the top side.
    #[must_use]
    pub fn upwards(&self) -> Vector3 {
        self.upwards
    }

    /// Unit normal of the bottom side.
    #[must_use]
    pub fn downwards(&self) -> Vector3 {
        -self.upwards
    }

    /// Unit normal pointing out of the given side.
    #[must_use]
    pub fn normal(&self, side: BundleSide) -> Vector3 {
        match side {
            BundleSide::Top => self.upwards(),
            BundleSide::Bottom => self.downwards(),
        }
    }

    /// Faces directly above `face`.
    pub fn faces_above(&self, face: FaceId) -> impl Iterator<Item = FaceId> + '_ {
        self.above.get(&face).into_iter().flatten().copied()
    }

    /// Faces directly below `face`.
    pub fn faces_below(&self, face: FaceId) -> impl Iterator<Item = FaceId> + '_ {
        self.below.get(&face).into_iter().flatten().copied()
    }

    /// Every face above `face`, directly or through other faces.
    #[must_use]
    pub fn all_faces_above(&self, face: FaceId) -> BTreeSet<FaceId> {
        Self::reachable(&self.above, face)
    }

    /// Every face below `face`, directly or through other faces.
    #[must_use]
    pub fn all_faces_below(&self, face: FaceId) -> BTreeSet<FaceId> {
        Self::reachable(&self.below, face)
    }

    /// Every face on the given side of `face`.
    #[must_use]
    pub fn all_faces_on(&self, face: FaceId, side: BundleSide) -> BTreeSet<FaceId> {
        match side {
            BundleSide::Top => self.all_faces_above(face),
            BundleSide::Bottom => self.all_faces_below(face),
        }
    }

    /// Returns `true` if nothing lies above `face`.
    #[must_use]
    pub fn is_top_face(&self, face: FaceId) -> bool {
        self.faces_above(face).next().is_none()
    }

    /// Returns `true` if nothing lies below `face`.
    #[must_use]
    pub fn is_bottom_face(&self, face: FaceId) -> bool {
        self.faces_below(face).next().is_none()
    }

    /// Faces with nothing above them.
    #[must_use]
    pub fn top_faces(&self) -> Vec<FaceId> {
        self.faces.iter().copied().filter(|&f| self.is_top_face(f)).collect()
    }

    /// Faces with nothing below them.
    #[must_use]
    pub fn bottom_faces(&self) -> Vec<FaceId> {
        self.faces.iter().copied().filter(|&f| self.is_bottom_face(f)).collect()
    }

    fn reachable(relation: &BTreeMap<FaceId, BTreeSet<FaceId>>, start: FaceId) -> BTreeSet<FaceId> {
        let mut seen = BTreeSet::new();
        let mut queue: VecDeque<FaceId> = relation.get(&start).into_iter().flatten().copied().collect();
        while let Some(face) = queue.pop_front() {
            if face == start || !seen.insert(face) {
                continue;
            }
            queue.extend(relation.get(&face).into_iter().flatten().copied());
        }
        seen
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn faces(n: usize) -> Vec<FaceId> {
        let mut keys: SlotMap<FaceId, ()> = SlotMap::with_key();
        (0..n).map(|_| keys.insert(())).collect()
    }

    #[test]
    fn zero_normal_is_rejected() {
        assert!(BundleData::new(Vector3::zeros()).is_err());
    }

    #[test]
    fn upwards_is_normalised() {
        let bundle = BundleData::new(Vector3::new(0.0, 0.0, 3.0)).unwrap();
        assert!((bundle.upwards().z - 1.0).abs() < TOLERANCE);
        assert!((bundle.downwards().z + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn stacking_is_symmetric() {
        let f = faces(2);
        let bundle = BundleData::new(Vector3::z()).unwrap().with_stacked(f[0], f[1]);
        assert_eq!(bundle.faces_above(f[0]).collect::<Vec<_>>(), vec![f[1]]);
        assert_eq!(bundle.faces_below(f[1]).collect::<Vec<_>>(), vec![f[0]]);
        assert!(bundle.is_top_face(f[1]));
        assert!(bundle.is_bottom_face(f[0]));
        assert!(!bundle.is_top_face(f[0]));
        assert_eq!(bundle.faces().len(), 2);
    }

    #[test]
    fn transitive_closure_reaches_every_face_above() {
        let f = faces(4);
        let bundle = BundleData::new(Vector3::z())
            .unwrap()
            .with_stacked(f[0], f[1])
            .with_stacked(f[1], f[2])
            .with_stacked(f[0], f[3]);
        let above = bundle.all_faces_above(f[0]);
        assert_eq!(above.len(), 3);
        assert!(bundle.all_faces_above(f[2]).is_empty());
        assert_eq!(bundle.all_faces_below(f[2]).len(), 2);
        assert_eq!(bundle.top_faces(), vec![f[2], f[3]]);
        assert_eq!(bundle.bottom_faces(), vec![f[0]]);
    }

    #[test]
    fn transitive_closure_terminates_on_cycles() {
        let f = faces(2);
        let bundle = BundleData::new(Vector3::z())
            .unwrap()
            .with_stacked(f[0], f[1])
            .with_stacked(f[1], f[0]);
        assert_eq!(bundle.all_faces_above(f[0]).len(), 1);
    }
}
