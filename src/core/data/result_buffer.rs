use std::sync::atomic::{AtomicU32, Ordering};

use thiserror::Error;

use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_bounds::PixelBounds;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultBufferError {
    #[error(
        "region at ({x}, {y}) sized {width}x{height} is outside the {buffer_width}x{buffer_height} buffer"
    )]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        buffer_width: u32,
        buffer_height: u32,
    },
    #[error("region is {region_width}x{region_height} but the grid is {grid_width}x{grid_height}")]
    GridSizeMismatch {
        region_width: u32,
        region_height: u32,
        grid_width: u32,
        grid_height: u32,
    },
}

/// The iteration-count frame a job fills in, chunk by chunk.
///
/// Chunks own disjoint pixel regions, so cells need no lock. Each cell is an
/// `AtomicU32` written with relaxed stores; the publisher's synchronisation
/// (the job gate and the event channel) orders those stores before any
/// consumer read that follows a chunk notification. Regions that have not
/// been published yet read as zero.
#[derive(Debug)]
pub struct ResultBuffer {
    width_px: u32,
    height_px: u32,
    cells: Box<[AtomicU32]>,
}

impl ResultBuffer {
    #[must_use]
    pub fn new(width_px: u32, height_px: u32) -> Self {
        let len = width_px as usize * height_px as usize;

        Self {
            width_px,
            height_px,
            cells: (0..len).map(|_| AtomicU32::new(0)).collect(),
        }
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
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width_px || y >= self.height_px {
            return None;
        }

        Some(self.cells[self.index(x, y)].load(Ordering::Relaxed))
    }

    /// Copies `grid` into the buffer with its top-left corner at `region`'s origin.
    pub fn write_region(
        &self,
        region: PixelBounds,
        grid: &IterationGrid,
    ) -> Result<(), ResultBufferError> {
        if region.right() > self.width_px || region.bottom() > self.height_px {
            return Err(ResultBufferError::RegionOutOfBounds {
                x: region.x(),
                y: region.y(),
                width: region.width(),
                height: region.height(),
                buffer_width: self.width_px,
                buffer_height: self.height_px,
            });
        }

        if region.width() != grid.width() || region.height() != grid.height() {
            return Err(ResultBufferError::GridSizeMismatch {
                region_width: region.width(),
                region_height: region.height(),
                grid_width: grid.width(),
                grid_height: grid.height(),
            });
        }

        for (row_offset, row) in grid.rows().enumerate() {
            let start = self.index(region.x(), region.y() + row_offset as u32);

            for (cell, &value) in self.cells[start..start + row.len()].iter().zip(row) {
                cell.store(value, Ordering::Relaxed);
            }
        }

        Ok(())
    }

    /// Copy of the current contents, including zeros for unfinished regions.
    #[must_use]
    pub fn snapshot(&self) -> IterationGrid {
        let data = self
            .cells
            .iter()
            .map(|cell| cell.load(Ordering::Relaxed))
            .collect();

        IterationGrid::from_data(self.width_px, self.height_px, data)
            .expect("buffer cell count matches its dimensions")
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width_px as usize + x as usize
    }
}
