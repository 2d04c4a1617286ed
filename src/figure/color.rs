/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Creates a colour from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The colours of the two sides of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    /// Colour of the side the boundary order points to (right-hand rule).
    pub front: Color,
    /// Colour of the opposite side.
    pub back: Color,
}

impl ColorPair {
    /// Creates a colour pair.
    #[must_use]
    pub const fn new(front: Color, back: Color) -> Self {
        Self { front, back }
    }

    /// Same colour on both sides.
    #[must_use]
    pub const fn mono(color: Color) -> Self {
        Self::new(color, color)
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::mono(Color::WHITE)
    }
}
