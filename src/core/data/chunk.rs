use crate::core::data::pixel_bounds::PixelBounds;
use crate::core::data::viewport::Viewport;
use crate::core::util::plane_mapping::PlaneMapping;

/// An independently computable tile of a parent viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Chunk {
    bounds: PixelBounds,
    sub_viewport: Viewport,
    parent_frame: PlaneMapping,
}

impl Chunk {
    pub(crate) fn new(bounds: PixelBounds, sub_viewport: Viewport, parent_frame: PlaneMapping) -> Self {
        Self {
            bounds,
            sub_viewport,
            parent_frame,
        }
    }

    /// Top-left pixel of the tile within the parent grid.
    #[must_use]
    pub fn pixel_offset(&self) -> (u32, u32) {
        (self.bounds.x(), self.bounds.y())
    }

    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.bounds.width(), self.bounds.height())
    }

    #[must_use]
    pub fn bounds(&self) -> PixelBounds {
        self.bounds
    }

    /// The tile as a standalone viewport at resolution `pixel_size()`.
    #[must_use]
    pub fn sub_viewport(&self) -> &Viewport {
        &self.sub_viewport
    }

    /// The parent's pixel-to-plane mapping, addressed with global pixel indices.
    #[must_use]
    pub fn parent_frame(&self) -> &PlaneMapping {
        &self.parent_frame
    }

    #[must_use]
    pub fn max_iter(&self) -> u32 {
        self.sub_viewport.max_iter()
    }
}
