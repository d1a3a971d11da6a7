use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::core::data::result_buffer::ResultBuffer;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Pending,
    Running,
    Cancelled,
    Completed,
}

impl JobState {
    const fn to_u8(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Running => 1,
            Self::Cancelled => 2,
            Self::Completed => 3,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Pending,
            1 => Self::Running,
            2 => Self::Cancelled,
            _ => Self::Completed,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }
}

/// One computation pass over one viewport.
///
/// `Pending → Running → {Completed | Cancelled}`; a pending job may also be
/// cancelled before any worker picks it up. Terminal states are final.
#[derive(Debug)]
pub(crate) struct Job {
    generation: u64,
    viewport: Viewport,
    chunk_count: usize,
    remaining_chunks: AtomicUsize,
    state: AtomicU8,
    buffer: Arc<ResultBuffer>,
    submitted_at: Instant,
}

impl Job {
    pub(crate) fn new(generation: u64, viewport: Viewport, chunk_count: usize) -> Self {
        Self {
            generation,
            viewport,
            chunk_count,
            remaining_chunks: AtomicUsize::new(chunk_count),
            state: AtomicU8::new(JobState::Pending.to_u8()),
            buffer: Arc::new(ResultBuffer::new(viewport.width_px(), viewport.height_px())),
            submitted_at: Instant::now(),
        }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub(crate) fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    pub(crate) fn remaining_chunks(&self) -> usize {
        self.remaining_chunks.load(Ordering::Acquire)
    }

    pub(crate) fn buffer(&self) -> &Arc<ResultBuffer> {
        &self.buffer
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.submitted_at.elapsed()
    }

    pub(crate) fn state(&self) -> JobState {
        JobState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub(crate) fn mark_running(&self) -> bool {
        self.transition(&[JobState::Pending], JobState::Running)
    }

    pub(crate) fn mark_cancelled(&self) -> bool {
        self.transition(&[JobState::Pending, JobState::Running], JobState::Cancelled)
    }

    pub(crate) fn mark_completed(&self) -> bool {
        self.transition(&[JobState::Pending, JobState::Running], JobState::Completed)
    }

    /// Records one published chunk and returns how many are still outstanding.
    pub(crate) fn complete_chunk(&self) -> usize {
        let previous = self.remaining_chunks.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0, "job {} published too many chunks", self.generation);
        previous - 1
    }

    fn transition(&self, from: &[JobState], to: JobState) -> bool {
        let mut current = self.state.load(Ordering::Acquire);

        loop {
            if !from.contains(&JobState::from_u8(current)) {
                return false;
            }

            match self.state.compare_exchange_weak(
                current,
                to.to_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }
}

/// The caller's view of a submitted job.
#[derive(Debug, Clone)]
pub struct JobHandle {
    job: Arc<Job>,
    pool_generation: Arc<AtomicU64>,
}

impl JobHandle {
    pub(crate) fn new(job: Arc<Job>, pool_generation: Arc<AtomicU64>) -> Self {
        Self {
            job,
            pool_generation,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.job.generation()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        self.job.viewport()
    }

    #[must_use]
    pub fn state(&self) -> JobState {
        self.job.state()
    }

    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.job.chunk_count()
    }

    #[must_use]
    pub fn remaining_chunks(&self) -> usize {
        self.job.remaining_chunks()
    }

    /// The job's buffer, partially filled until the job completes.
    #[must_use]
    pub fn result(&self) -> Arc<ResultBuffer> {
        Arc::clone(self.job.buffer())
    }

    /// Whether no later job has been submitted and the job was not cancelled.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.pool_generation.load(Ordering::Acquire) == self.job.generation()
    }

    pub(crate) fn job(&self) -> &Arc<Job> {
        &self.job
    }
}
