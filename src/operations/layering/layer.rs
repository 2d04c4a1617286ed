use crate::figure::{BundleSide, FaceId};

/// Which sides of a face a layer has to draw, relative to the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideToRender {
    /// Only the side facing the bundle's top.
    Top,
    /// Only the side facing the bundle's bottom.
    Bottom,
    /// Both sides.
    Both,
    /// Hidden from both sides; never drawn.
    None,
}

impl SideToRender {
    /// Classifies a face from whether it is hidden from each side.
    #[must_use]
    pub fn from_hidden(hidden_from_above: bool, hidden_from_below: bool) -> Self {
        match (hidden_from_above, hidden_from_below) {
            (true, true) => Self::None,
            (true, false) => Self::Bottom,
            (false, true) => Self::Top,
            (false, false) => Self::Both,
        }
    }

    /// The bundle sides to draw, top first.
    #[must_use]
    pub fn sides(self) -> &'static [BundleSide] {
        match self {
            Self::Top => &[BundleSide::Top],
            Self::Bottom => &[BundleSide::Bottom],
            Self::Both => &[BundleSide::Top, BundleSide::Bottom],
            Self::None => &[],
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self != Self::None
    }
}

/// A set of mutually non-overlapping faces of a bundle, drawn together.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    faces: Vec<(FaceId, SideToRender)>,
}

impl Layer {
    /// Builds a layer from classified faces, dropping hidden ones.
    ///
    /// Returns `None` when no face is left to draw.
    #[must_use]
    pub fn from_classified<I>(classified: I) -> Option<Self>
    where
        I: IntoIterator<Item = (FaceId, SideToRender)>,
    {
        let faces: Vec<_> = classified
            .into_iter()
            .filter(|(_, side)| side.is_visible())
            .collect();
        (!faces.is_empty()).then_some(Self { faces })
    }

    /// Faces and the sides to draw for each.
    #[must_use]
    pub fn faces(&self) -> &[(FaceId, SideToRender)] {
        &self.faces
    }

    /// Side to draw for `face`, if the face belongs to the layer.
    #[must_use]
    pub fn side_of(&self, face: FaceId) -> Option<SideToRender> {
        self.faces.iter().find(|(f, _)| *f == face).map(|&(_, side)| side)
    }

    #[must_use]
    pub fn contains(&self, face: FaceId) -> bool {
        self.side_of(face).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn classification_table() {
        assert_eq!(SideToRender::from_hidden(true, true), SideToRender::None);
        assert_eq!(SideToRender::from_hidden(true, false), SideToRender::Bottom);
        assert_eq!(SideToRender::from_hidden(false, true), SideToRender::Top);
        assert_eq!(SideToRender::from_hidden(false, false), SideToRender::Both);
    }

    #[test]
    fn hidden_faces_are_dropped_and_empty_layers_refused() {
        let mut keys: SlotMap<FaceId, ()> = SlotMap::with_key();
        let a = keys.insert(());
        let b = keys.insert(());
        let layer =
            Layer::from_classified([(a, SideToRender::Top), (b, SideToRender::None)]).unwrap();
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.side_of(a), Some(SideToRender::Top));
        assert!(!layer.contains(b));
        assert!(Layer::from_classified([(b, SideToRender::None)]).is_none());
    }

    #[test]
    fn both_expands_to_two_sides() {
        assert_eq!(SideToRender::Both.sides().len(), 2);
        assert!(SideToRender::None.sides().is_empty());
    }
}
