use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::pixel_bounds::PixelBounds;
use crate::core::util::plane_mapping::PlaneMapping;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport x_width must be positive and finite, got {x_width}")]
    InvalidWidth { x_width: f64 },
    #[error("viewport center must be finite, got ({x_center}, {y_center})")]
    NonFiniteCenter { x_center: f64, y_center: f64 },
    #[error("viewport resolution must be positive: {width_px}x{height_px}")]
    ZeroResolution { width_px: u32, height_px: u32 },
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// A renderable frame: a region of the complex plane, an output resolution
/// and an iteration cap.
///
/// The imaginary extent is never stored. It is always derived from `x_width`
/// and the pixel aspect ratio, so the two axes cannot drift apart.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_center: f64,
    y_center: f64,
    x_width: f64,
    width_px: u32,
    height_px: u32,
    max_iter: u32,
}

impl Viewport {
    pub fn new(
        x_center: f64,
        y_center: f64,
        x_width: f64,
        width_px: u32,
        height_px: u32,
        max_iter: u32,
    ) -> Result<Self, ViewportError> {
        if !x_center.is_finite() || !y_center.is_finite() {
            return Err(ViewportError::NonFiniteCenter { x_center, y_center });
        }

        if !(x_width.is_finite() && x_width > 0.0) {
            return Err(ViewportError::InvalidWidth { x_width });
        }

        if width_px == 0 || height_px == 0 {
            return Err(ViewportError::ZeroResolution {
                width_px,
                height_px,
            });
        }

        if max_iter == 0 {
            return Err(ViewportError::ZeroMaxIterations);
        }

        Ok(Self {
            x_center,
            y_center,
            x_width,
            width_px,
            height_px,
            max_iter,
        })
    }

    #[must_use]
    pub fn x_center(&self) -> f64 {
        self.x_center
    }

    #[must_use]
    pub fn y_center(&self) -> f64 {
        self.y_center
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.x_center, self.y_center)
    }

    #[must_use]
    pub fn x_width(&self) -> f64 {
        self.x_width
    }

    #[must_use]
    pub fn y_width(&self) -> f64 {
        self.x_width * f64::from(self.height_px) / f64::from(self.width_px)
    }

    #[must_use]
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    #[must_use]
    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    #[must_use]
    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    /// Real-axis distance between horizontally adjacent pixel samples.
    #[must_use]
    pub fn x_increment(&self) -> f64 {
        self.x_width / f64::from(self.width_px)
    }

    /// Imaginary-axis distance between vertically adjacent pixel samples.
    #[must_use]
    pub fn y_increment(&self) -> f64 {
        self.y_width() / f64::from(self.height_px)
    }

    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width_px) * u64::from(self.height_px)
    }

    #[must_use]
    pub fn mapping(&self) -> PlaneMapping {
        PlaneMapping::new(
            self.center(),
            self.x_increment(),
            self.y_increment(),
            self.width_px,
            self.height_px,
        )
    }

    #[must_use]
    pub fn bounds(&self) -> PixelBounds {
        PixelBounds::full(self.width_px, self.height_px)
            .expect("viewport resolution is validated non-zero")
    }

    pub fn with_center(&self, center: Complex) -> Result<Self, ViewportError> {
        Self::new(
            center.real,
            center.imag,
            self.x_width,
            self.width_px,
            self.height_px,
            self.max_iter,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-0.5, 0.25, 3.5, 800, 600, 200).unwrap();

        assert_eq!(viewport.x_center(), -0.5);
        assert_eq!(viewport.y_center(), 0.25);
        assert_eq!(viewport.x_width(), 3.5);
        assert_eq!(viewport.width_px(), 800);
        assert_eq!(viewport.height_px(), 600);
        assert_eq!(viewport.max_iter(), 200);
        assert_eq!(viewport.pixel_count(), 480_000);
    }

    #[test]
    fn test_y_width_is_aspect_locked() {
        let viewport = Viewport::new(0.0, 0.0, 4.0, 800, 600, 10).unwrap();

        assert_eq!(viewport.y_width(), 3.0);
        assert_eq!(viewport.x_increment(), 0.005);
        assert_eq!(viewport.y_increment(), 0.005);
    }

    #[test]
    fn test_width_must_be_positive_and_finite() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 0.0, 4, 4, 10),
            Err(ViewportError::InvalidWidth { x_width: 0.0 })
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, -1.0, 4, 4, 10),
            Err(ViewportError::InvalidWidth { x_width: -1.0 })
        );
        assert!(matches!(
            Viewport::new(0.0, 0.0, f64::NAN, 4, 4, 10),
            Err(ViewportError::InvalidWidth { .. })
        ));
        assert!(matches!(
            Viewport::new(0.0, 0.0, f64::INFINITY, 4, 4, 10),
            Err(ViewportError::InvalidWidth { .. })
        ));
    }

    #[test]
    fn test_center_must_be_finite() {
        assert!(matches!(
            Viewport::new(f64::NAN, 0.0, 1.0, 4, 4, 10),
            Err(ViewportError::NonFiniteCenter { .. })
        ));
        assert!(matches!(
            Viewport::new(0.0, f64::NEG_INFINITY, 1.0, 4, 4, 10),
            Err(ViewportError::NonFiniteCenter { .. })
        ));
    }

    #[test]
    fn test_resolution_must_be_positive() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 1.0, 0, 4, 10),
            Err(ViewportError::ZeroResolution {
                width_px: 0,
                height_px: 4
            })
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, 1.0, 4, 0, 10),
            Err(ViewportError::ZeroResolution {
                width_px: 4,
                height_px: 0
            })
        );
    }

    #[test]
    fn test_max_iter_must_be_positive() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 1.0, 4, 4, 0),
            Err(ViewportError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let err = Viewport::new(0.0, 0.0, 1.0, 0, 3, 10).unwrap_err();

        assert_eq!(err.to_string(), "viewport resolution must be positive: 0x3");
    }

    #[test]
    fn test_bounds_cover_full_grid() {
        let viewport = Viewport::new(0.0, 0.0, 1.0, 7, 3, 10).unwrap();
        let bounds = viewport.bounds();

        assert_eq!((bounds.x(), bounds.y()), (0, 0));
        assert_eq!((bounds.width(), bounds.height()), (7, 3));
    }

    #[test]
    fn test_with_center_revalidates() {
        let viewport = Viewport::new(0.0, 0.0, 1.0, 4, 4, 10).unwrap();

        assert!(matches!(
            viewport.with_center(Complex::new(f64::NAN, 0.0)),
            Err(ViewportError::NonFiniteCenter { .. })
        ));
        assert_eq!(
            viewport.with_center(Complex::new(1.0, 2.0)).unwrap().center(),
            Complex::new(1.0, 2.0)
        );
    }
}
