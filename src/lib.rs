mod controllers;
mod core;
mod presenters;

pub use controllers::interactive::{
    ChannelObserver, ChunkFrame, CompletedFrame, ControllerError, JobHandle, JobState, PoolError,
    RenderEvent, RenderObserver, SubmitError, ViewportController, WorkerPool,
};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, GenerationToken, NeverCancel};
pub use crate::core::actions::compute_divergence::{
    BOUNDED, compute_chunk, compute_divergence, compute_divergence_cancelable, escape_count,
};
pub use crate::core::actions::partition_viewport::{DEFAULT_CHUNK_SIZE, PartitionError, partition_viewport};
pub use crate::core::actions::zoom_viewport::{
    ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR, ZoomError, pan_viewport, zoom_viewport,
};
pub use crate::core::data::chunk::Chunk;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_grid::{IterationGrid, IterationGridError};
pub use crate::core::data::pixel_bounds::{PixelBounds, PixelBoundsError};
pub use crate::core::data::pixel_position::PixelPosition;
pub use crate::core::data::result_buffer::{ResultBuffer, ResultBufferError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::engine_config::{ConfigError, EngineConfig, ViewportConfig};
pub use crate::core::util::plane_mapping::PlaneMapping;
pub use crate::core::util::worker_count::{default_worker_count, resolve_worker_count};
pub use presenters::colour::{ColourScheme, RgbImage, UnsupportedColourScheme};
pub use presenters::file::PpmFilePresenter;
