use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::pixel_position::PixelPosition;
use crate::core::data::viewport::{Viewport, ViewportError};

/// One wheel notch towards the screen.
pub const ZOOM_IN_FACTOR: f64 = 1.25;
/// One wheel notch away from the screen.
pub const ZOOM_OUT_FACTOR: f64 = 0.8;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ZoomError {
    #[error("zoom factor must be positive and finite, got {factor}")]
    InvalidFactor { factor: f64 },
    #[error("zoom anchor must be finite, got ({x}, {y})")]
    InvalidAnchor { x: f64, y: f64 },
    #[error("zoomed viewport is invalid: {0}")]
    Viewport(#[from] ViewportError),
}

/// Zooms by `factor` about `anchor`, keeping the plane point under the
/// anchor stationary on screen.
///
/// `factor > 1` zooms in and `factor < 1` zooms out. Resolution and
/// iteration cap carry over from `prev`.
pub fn zoom_viewport(
    prev: &Viewport,
    factor: f64,
    anchor: PixelPosition,
) -> Result<Viewport, ZoomError> {
    if !(factor.is_finite() && factor > 0.0) {
        return Err(ZoomError::InvalidFactor { factor });
    }

    if !anchor.is_finite() {
        return Err(ZoomError::InvalidAnchor {
            x: anchor.x,
            y: anchor.y,
        });
    }

    let offset = prev.mapping().offset_from_center(anchor);
    let shift = 1.0 - 1.0 / factor;
    let center = Complex {
        real: prev.x_center() + offset.real * shift,
        imag: prev.y_center() + offset.imag * shift,
    };

    let zoomed = Viewport::new(
        center.real,
        center.imag,
        prev.x_width() / factor,
        prev.width_px(),
        prev.height_px(),
        prev.max_iter(),
    )?;

    Ok(zoomed)
}

/// Moves the viewport by `delta_px` pixels; positive `x` moves towards larger
/// real parts and positive `y` towards larger imaginary parts.
pub fn pan_viewport(prev: &Viewport, delta_px: PixelPosition) -> Result<Viewport, ViewportError> {
    prev.with_center(Complex {
        real: prev.x_center() + delta_px.x * prev.x_increment(),
        imag: prev.y_center() + delta_px.y * prev.y_increment(),
    })
}
