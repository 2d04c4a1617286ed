use crate::error::Result;
use crate::figure::{BundleId, BundleSide, Figure};
use crate::operations::coverage::BundleProjection;
use crate::rendering::LayeredRendering;

use super::visible_polygons::visible_polygons;

/// Visible polygons of a bundle from both sides.
#[derive(Debug, Clone, Default)]
pub struct VisibleSides {
    /// Seen from the top side.
    pub from_top: LayeredRendering,
    /// Seen from the bottom side.
    pub from_bottom: LayeredRendering,
}

impl VisibleSides {
    /// Both sides together.
    #[must_use]
    pub fn all(&self) -> LayeredRendering {
        let mut all = self.from_top.clone();
        all.merge(self.from_bottom.clone());
        all
    }

    /// The polygons seen from `side`.
    #[must_use]
    pub fn side(&self, side: BundleSide) -> &LayeredRendering {
        match side {
            BundleSide::Top => &self.from_top,
            BundleSide::Bottom => &self.from_bottom,
        }
    }
}

/// Flat rendering of a bundle: the visible part of every face, per side.
///
/// Shares one projection of the bundle between both sides.
pub struct VisibleBundle {
    bundle: BundleId,
}

impl VisibleBundle {
    /// Creates a new `VisibleBundle` operation.
    #[must_use]
    pub fn new(bundle: BundleId) -> Self {
        Self { bundle }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundle references missing entities or holds
    /// a face with no area.
    pub fn execute(&self, figure: &Figure) -> Result<VisibleSides> {
        let bundle = figure.bundle(self.bundle)?;
        let projection = BundleProjection::new(figure, bundle)?;
        Ok(VisibleSides {
            from_top: visible_polygons(figure, bundle, &projection, BundleSide::Top)?,
            from_bottom: visible_polygons(figure, bundle, &projection, BundleSide::Bottom)?,
        })
    }
}
