/// A continuous position in pixel space.
///
/// Pixel `(i, j)` covers `[i, i + 1) × [j, j + 1)`, so its center sits at
/// `(i + 0.5, j + 0.5)`. Input layers report pointer positions in this space.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PixelPosition {
    pub x: f64,
    pub y: f64,
}

impl PixelPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn center_of(x: u32, y: u32) -> Self {
        Self {
            x: f64::from(x) + 0.5,
            y: f64::from(y) + 0.5,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
