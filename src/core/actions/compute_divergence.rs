use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::data::chunk::Chunk;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_bounds::PixelBounds;
use crate::core::data::viewport::Viewport;
use crate::core::util::plane_mapping::PlaneMapping;

/// Count reported for points that never escaped within `max_iter` steps.
pub const BOUNDED: u32 = 0;

/// |z| > 2 guarantees divergence; compared squared.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z ← z² + c` from `z = 0` for up to `max_iter` steps.
///
/// Returns the last iteration index at which `|z| ≤ 2` still held, not the
/// index at which the point escaped. A point that never escapes ends with
/// `max_iter - 1` and is reported as [`BOUNDED`].
///
/// A point whose last bounded index is exactly `max_iter - 1` because it
/// escapes on the final step is indistinguishable from a bounded point and
/// is also reported as [`BOUNDED`]. Renderers built on these counts rely on
/// that, so it is kept as is.
#[inline]
#[must_use]
pub fn escape_count(c: Complex, max_iter: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut last_bounded = 0;

    for iteration in 0..max_iter {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            break;
        }
        last_bounded = iteration;
        z = z * z + c;
    }

    if last_bounded == max_iter.saturating_sub(1) {
        BOUNDED
    } else {
        last_bounded
    }
}

/// Computes the iteration grid for a whole viewport.
#[must_use]
pub fn compute_divergence(viewport: &Viewport) -> IterationGrid {
    match compute_divergence_cancelable(viewport, &NeverCancel) {
        Ok(grid) => grid,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`compute_divergence`], but polls `cancel` at the start of each row
/// and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
pub fn compute_divergence_cancelable<C: CancelToken>(
    viewport: &Viewport,
    cancel: &C,
) -> Result<IterationGrid, Cancelled> {
    compute_region(
        &viewport.mapping(),
        viewport.bounds(),
        viewport.max_iter(),
        cancel,
    )
}

/// Computes a chunk in its parent's pixel frame.
///
/// The result is identical, cell for cell, to the same region of
/// [`compute_divergence`] run on the parent viewport.
pub fn compute_chunk<C: CancelToken>(chunk: &Chunk, cancel: &C) -> Result<IterationGrid, Cancelled> {
    compute_region(chunk.parent_frame(), chunk.bounds(), chunk.max_iter(), cancel)
}

fn compute_region<C: CancelToken>(
    frame: &PlaneMapping,
    region: PixelBounds,
    max_iter: u32,
    cancel: &C,
) -> Result<IterationGrid, Cancelled> {
    let mut data = Vec::with_capacity(region.area() as usize);

    for y in region.y()..region.bottom() {
        for (i, x) in (region.x()..region.right()).enumerate() {
            if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(Cancelled);
            }

            data.push(escape_count(frame.pixel_to_plane(x, y), max_iter));
        }
    }

    Ok(IterationGrid::from_data(region.width(), region.height(), data)
        .expect("region produces exactly width * height cells"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn classic_viewport(width_px: u32, height_px: u32, max_iter: u32) -> Viewport {
        Viewport::new(0.0, 0.0, 3.5, width_px, height_px, max_iter).unwrap()
    }

    #[test]
    fn test_escape_count_reports_last_bounded_iteration() {
        // c = 1: z = 0, 1, 2, 5 -> |z| <= 2 holds through index 2
        assert_eq!(escape_count(Complex::new(1.0, 0.0), 50), 2);
        // c = 2: z = 0, 2, 6
        assert_eq!(escape_count(Complex::new(2.0, 0.0), 50), 1);
        // c = 0.5: z = 0, 0.5, 0.75, 1.0625, 1.6289.., 3.1533..
        assert_eq!(escape_count(Complex::new(0.5, 0.0), 50), 4);
    }

    #[test]
    fn test_immediate_escape_reports_zero() {
        assert_eq!(escape_count(Complex::new(3.0, 0.0), 50), 0);
        assert_eq!(escape_count(Complex::new(0.0, -2.5), 50), 0);
    }

    #[test]
    fn test_bounded_points_report_sentinel() {
        assert_eq!(escape_count(Complex::ZERO, 50), BOUNDED);
        assert_eq!(escape_count(Complex::new(-1.0, 0.0), 50), BOUNDED);
        assert_eq!(escape_count(Complex::new(-2.0, 0.0), 50), BOUNDED);
        assert_eq!(escape_count(Complex::new(-0.1, 0.1), 1000), BOUNDED);
    }

    #[test]
    fn test_truncated_max_iter_edge_cases() {
        let c = Complex::new(1.0, 0.0);

        // true count is 2; max_iter - 1 == 2 collides with the bounded sentinel
        assert_eq!(escape_count(c, 4), 2);
        assert_eq!(escape_count(c, 3), BOUNDED);
        assert_eq!(escape_count(c, 2), BOUNDED);
        assert_eq!(escape_count(c, 1), BOUNDED);
    }

    #[test]
    fn test_zero_max_iter_does_not_underflow() {
        assert_eq!(escape_count(Complex::new(1.0, 0.0), 0), BOUNDED);
    }

    #[test]
    fn test_grid_has_viewport_shape() {
        let grid = compute_divergence(&classic_viewport(7, 5, 20));

        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.as_slice().len(), 35);
    }

    #[test]
    fn test_grid_cells_match_per_point_kernel() {
        let viewport = classic_viewport(6, 4, 30);
        let mapping = viewport.mapping();
        let grid = compute_divergence(&viewport);

        for y in 0..4 {
            for x in 0..6 {
                assert_eq!(
                    grid.get(x, y),
                    Some(escape_count(mapping.pixel_to_plane(x, y), 30)),
                    "mismatch at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_grid_is_symmetric_about_real_axis() {
        let grid = compute_divergence(&classic_viewport(9, 8, 40));

        for y in 0..4 {
            assert_eq!(grid.row(y), grid.row(7 - y), "row {} differs from its mirror", y);
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        let viewport = Viewport::new(-0.743, 0.131, 0.02, 32, 24, 300).unwrap();

        assert_eq!(compute_divergence(&viewport), compute_divergence(&viewport));
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result = compute_divergence_cancelable(&classic_viewport(8, 8, 10), &token);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_cancellation_polled_at_row_start() {
        let polls = AtomicUsize::new(0);
        let token = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = compute_divergence_cancelable(&classic_viewport(2, 5, 10), &token);

        assert!(result.is_ok());
        assert_eq!(polls.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn test_cancellation_polled_within_wide_rows() {
        let polls = AtomicUsize::new(0);
        let token = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        // 3000 pixels per row polls at 0, 1024 and 2048
        let result = compute_divergence_cancelable(&classic_viewport(3000, 2, 2), &token);

        assert!(result.is_ok());
        assert_eq!(polls.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn test_cancellation_mid_computation() {
        let polls = AtomicUsize::new(0);
        let token = || polls.fetch_add(1, Ordering::Relaxed) >= 3;

        let result = compute_divergence_cancelable(&classic_viewport(4, 10, 10), &token);

        assert_eq!(result, Err(Cancelled));
        assert_eq!(polls.load(Ordering::Relaxed), 4);
    }
}
