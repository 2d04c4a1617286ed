/// How bundles are turned into polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Whole faces, pushed apart in layers, always planar.
    #[default]
    Layered,
    /// Layered, plus corner opening and convex edges on extremal faces.
    ThreeDimensional,
}

/// Parameters controlling layered rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderParams {
    /// Minimum distance between coincident surfaces along the bundle normal.
    pub layer_separation: f64,
    /// Angle (radians) by which free corners and edges are opened. Small
    /// enough that the angle stands in for its sine.
    pub opening_angle: f64,
    /// Most vertices of one polygon that may leave its plane. The downstream
    /// renderer copes with a single one.
    pub max_deformed_vertices: usize,
    /// Flat layers or pseudo-3D.
    pub mode: RenderMode,
    /// Render independent bundles on the rayon thread pool.
    pub parallel: bool,
}

impl RenderParams {
    /// Half of [`RenderParams::layer_separation`]: the extra gap between the
    /// top and bottom surfaces of one layer.
    #[must_use]
    pub fn half_separation(&self) -> f64 {
        self.layer_separation / 2.0
    }

    /// Builder helper to switch the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder helper to change the layer separation.
    #[must_use]
    pub fn with_layer_separation(mut self, layer_separation: f64) -> Self {
        self.layer_separation = layer_separation;
        self
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            layer_separation: 0.01,
            opening_angle: 0.1,
            max_deformed_vertices: 1,
            mode: RenderMode::Layered,
            parallel: true,
        }
    }
}
