use thiserror::Error;

use crate::core::data::chunk::Chunk;
use crate::core::data::pixel_bounds::PixelBounds;
use crate::core::data::viewport::{Viewport, ViewportError};

pub const DEFAULT_CHUNK_SIZE: u32 = 200;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PartitionError {
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
    #[error("chunk sub-viewport is invalid: {0}")]
    SubViewport(#[from] ViewportError),
}

/// Tiles the viewport's pixel grid into chunks of at most
/// `chunk_size × chunk_size` pixels, row-major from the top-left corner.
///
/// Edge tiles shrink to fit. Each chunk's sub-viewport is centred on the
/// tile's pixel-centre offset from the parent centre and spans
/// `tile_width_px * x_increment` of the real axis.
pub fn partition_viewport(viewport: &Viewport, chunk_size: u32) -> Result<Vec<Chunk>, PartitionError> {
    if chunk_size == 0 {
        return Err(PartitionError::ZeroChunkSize);
    }

    let width_px = viewport.width_px();
    let height_px = viewport.height_px();
    let x_increment = viewport.x_increment();
    let y_increment = viewport.y_increment();
    let parent_frame = viewport.mapping();

    let tiles_x = width_px.div_ceil(chunk_size);
    let tiles_y = height_px.div_ceil(chunk_size);
    let mut chunks = Vec::with_capacity(tiles_x as usize * tiles_y as usize);

    for y in (0..height_px).step_by(chunk_size as usize) {
        for x in (0..width_px).step_by(chunk_size as usize) {
            let tile_width = chunk_size.min(width_px - x);
            let tile_height = chunk_size.min(height_px - y);

            let x_center = viewport.x_center()
                + (f64::from(x) + f64::from(tile_width) / 2.0 - f64::from(width_px) / 2.0)
                    * x_increment;
            let y_center = viewport.y_center()
                + (f64::from(y) + f64::from(tile_height) / 2.0 - f64::from(height_px) / 2.0)
                    * y_increment;

            let sub_viewport = Viewport::new(
                x_center,
                y_center,
                f64::from(tile_width) * x_increment,
                tile_width,
                tile_height,
                viewport.max_iter(),
            )?;

            let bounds = PixelBounds::new(x, y, tile_width, tile_height)
                .expect("tile is non-empty and lies inside the viewport");

            chunks.push(Chunk::new(bounds, sub_viewport, parent_frame));
        }
    }

    Ok(chunks)
}
