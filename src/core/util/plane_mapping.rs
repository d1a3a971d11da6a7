use crate::core::data::complex::Complex;
use crate::core::data::pixel_position::PixelPosition;

/// Affine map from a viewport's pixel space onto the complex plane.
///
/// Pixel `(i, j)` samples the plane at its center. Chunks keep their parent's
/// mapping and address it with global pixel indices, which is what makes a
/// partitioned render bit-for-bit identical to a whole-frame render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping {
    x_center: f64,
    y_center: f64,
    x_increment: f64,
    y_increment: f64,
    half_width_px: f64,
    half_height_px: f64,
}

impl PlaneMapping {
    pub(crate) fn new(
        center: Complex,
        x_increment: f64,
        y_increment: f64,
        width_px: u32,
        height_px: u32,
    ) -> Self {
        Self {
            x_center: center.real,
            y_center: center.imag,
            x_increment,
            y_increment,
            half_width_px: f64::from(width_px) / 2.0,
            half_height_px: f64::from(height_px) / 2.0,
        }
    }

    #[must_use]
    pub fn x_increment(&self) -> f64 {
        self.x_increment
    }

    #[must_use]
    pub fn y_increment(&self) -> f64 {
        self.y_increment
    }

    #[must_use]
    pub fn position_to_plane(&self, position: PixelPosition) -> Complex {
        Complex {
            real: self.x_center + (position.x - self.half_width_px) * self.x_increment,
            imag: self.y_center + (position.y - self.half_height_px) * self.y_increment,
        }
    }

    #[inline]
    #[must_use]
    pub fn pixel_to_plane(&self, x: u32, y: u32) -> Complex {
        self.position_to_plane(PixelPosition::center_of(x, y))
    }

    /// Offset of a pixel position from the center, in plane units.
    #[must_use]
    pub fn offset_from_center(&self, position: PixelPosition) -> Complex {
        Complex {
            real: (position.x - self.half_width_px) * self.x_increment,
            imag: (position.y - self.half_height_px) * self.y_increment,
        }
    }
}
