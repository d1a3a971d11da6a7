use std::sync::Arc;
use std::time::Duration;

use crate::core::data::pixel_bounds::PixelBounds;
use crate::core::data::result_buffer::ResultBuffer;

/// A chunk's region is now final for its job.
#[derive(Debug, Clone)]
pub struct ChunkFrame {
    pub generation: u64,
    pub bounds: PixelBounds,
    /// The job's buffer; regions of chunks still in flight read as zero.
    pub buffer: Arc<ResultBuffer>,
    pub remaining_chunks: usize,
}

/// Every chunk of a job has been published.
#[derive(Debug, Clone)]
pub struct CompletedFrame {
    pub generation: u64,
    pub buffer: Arc<ResultBuffer>,
    pub chunk_count: usize,
    pub render_duration: Duration,
}
