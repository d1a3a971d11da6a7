use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelBoundsError {
    #[error("pixel bounds size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("pixel bounds at ({x}, {y}) sized {width}x{height} extend past the u32 pixel range")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Half-open pixel rectangle `[x, x + width) × [y, y + height)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelBounds {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl PixelBounds {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Result<Self, PixelBoundsError> {
        if width == 0 || height == 0 {
            return Err(PixelBoundsError::InvalidSize { width, height });
        }

        if x.checked_add(width).is_none() || y.checked_add(height).is_none() {
            return Err(PixelBoundsError::OutOfRange {
                x,
                y,
                width,
                height,
            });
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Bounds covering a whole `width × height` grid anchored at the origin.
    pub fn full(width: u32, height: u32) -> Result<Self, PixelBoundsError> {
        Self::new(0, 0, width, height)
    }

    #[must_use]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> u32 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Exclusive right edge. Never overflows; `new` rejects such bounds.
    #[must_use]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
