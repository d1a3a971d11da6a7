use crate::controllers::interactive::data::frame_data::{ChunkFrame, CompletedFrame};

/// Streamed to the observer: one `ChunkFinished` per published chunk, in
/// completion order, then a single `JobCompleted` once the job is whole.
#[derive(Debug, Clone)]
pub enum RenderEvent {
    ChunkFinished(ChunkFrame),
    JobCompleted(CompletedFrame),
}

impl RenderEvent {
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::ChunkFinished(frame) => frame.generation,
            Self::JobCompleted(frame) => frame.generation,
        }
    }

    #[must_use]
    pub fn is_completion(&self) -> bool {
        matches!(self, Self::JobCompleted(_))
    }
}
