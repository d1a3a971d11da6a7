use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, trace};
use thiserror::Error;

use crate::controllers::interactive::data::frame_data::{ChunkFrame, CompletedFrame};
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::job::{Job, JobHandle};
use crate::controllers::interactive::ports::render_observer::RenderObserver;
use crate::core::actions::cancellation::{Cancelled, GenerationToken};
use crate::core::actions::compute_divergence::compute_chunk;
use crate::core::actions::partition_viewport::{PartitionError, partition_viewport};
use crate::core::data::chunk::Chunk;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::viewport::Viewport;
use crate::core::engine_config::EngineConfig;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
    #[error("failed to start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SubmitError {
    #[error("cannot partition viewport: {0}")]
    Partition(#[from] PartitionError),
}

struct SharedState {
    generation: Arc<AtomicU64>,
    /// The publish gate. Guards the current job; generation bumps and chunk
    /// publishes both happen under it.
    current: Mutex<Option<Arc<Job>>>,
    observer: Arc<dyn RenderObserver>,
}

impl SharedState {
    fn lock_current(&self) -> MutexGuard<'_, Option<Arc<Job>>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::Acquire) == generation
    }

    /// Bumps the generation and swaps in `next`, cancelling whatever was current.
    fn supersede(&self, current: &mut Option<Arc<Job>>, next: Option<Arc<Job>>) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

        let cancelled = current.take().filter(|previous| previous.mark_cancelled());
        if let Some(previous) = cancelled {
            debug!(
                "job {} cancelled with {} of {} chunks outstanding",
                previous.generation(),
                previous.remaining_chunks(),
                previous.chunk_count()
            );
        }

        *current = next;
        generation
    }

    fn run_chunk(&self, job: &Arc<Job>, chunk: &Chunk) {
        if !self.is_current(job.generation()) {
            trace!(
                "skipping chunk at {:?} of superseded job {}",
                chunk.pixel_offset(),
                job.generation()
            );
            return;
        }

        job.mark_running();

        let token = GenerationToken::new(Arc::clone(&self.generation), job.generation());
        match compute_chunk(chunk, &token) {
            Ok(grid) => self.publish(job, chunk, &grid),
            Err(Cancelled) => trace!(
                "abandoned chunk at {:?} of superseded job {}",
                chunk.pixel_offset(),
                job.generation()
            ),
        }
    }

    fn publish(&self, job: &Arc<Job>, chunk: &Chunk, grid: &IterationGrid) {
        let _gate = self.lock_current();

        if !self.is_current(job.generation()) {
            trace!(
                "discarding chunk at {:?} of superseded job {}",
                chunk.pixel_offset(),
                job.generation()
            );
            return;
        }

        if let Err(err) = job.buffer().write_region(chunk.bounds(), grid) {
            error!("job {} could not merge chunk: {}", job.generation(), err);
            return;
        }

        let remaining = job.complete_chunk();
        trace!(
            "job {} published chunk at {:?}, {} remaining",
            job.generation(),
            chunk.pixel_offset(),
            remaining
        );

        self.observer.on_event(RenderEvent::ChunkFinished(ChunkFrame {
            generation: job.generation(),
            bounds: chunk.bounds(),
            buffer: Arc::clone(job.buffer()),
            remaining_chunks: remaining,
        }));

        if remaining == 0 && job.mark_completed() {
            let render_duration = job.elapsed();
            info!(
                "job {} completed: {}x{} px in {} chunks, {:?}",
                job.generation(),
                job.viewport().width_px(),
                job.viewport().height_px(),
                job.chunk_count(),
                render_duration
            );

            self.observer.on_event(RenderEvent::JobCompleted(CompletedFrame {
                generation: job.generation(),
                buffer: Arc::clone(job.buffer()),
                chunk_count: job.chunk_count(),
                render_duration,
            }));
        }
    }
}

/// Runs chunk computations on a fixed set of worker threads.
///
/// Every `submit` starts a new generation. Workers compare the generation
/// their job was issued for against the pool's current one; results of a
/// superseded job are dropped without merging or notifying.
pub struct WorkerPool {
    shared: Arc<SharedState>,
    threads: rayon::ThreadPool,
    chunk_size: u32,
}

impl WorkerPool {
    pub fn new(
        observer: Arc<dyn RenderObserver>,
        workers: NonZeroUsize,
        chunk_size: u32,
    ) -> Result<Self, PoolError> {
        if chunk_size == 0 {
            return Err(PoolError::ZeroChunkSize);
        }

        let threads = rayon::ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|index| format!("mandelbrot-worker-{}", index))
            .build()?;

        debug!(
            "worker pool started with {} threads, chunk size {}",
            workers, chunk_size
        );

        Ok(Self {
            shared: Arc::new(SharedState {
                generation: Arc::new(AtomicU64::new(0)),
                current: Mutex::new(None),
                observer,
            }),
            threads,
            chunk_size,
        })
    }

    pub fn from_config(
        config: &EngineConfig,
        observer: Arc<dyn RenderObserver>,
    ) -> Result<Self, PoolError> {
        Self::new(observer, config.worker_count(), config.chunk_size)
    }

    #[must_use]
    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.threads.current_num_threads()
    }

    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    /// Partitions `viewport` and queues one task per chunk, superseding any
    /// job still in flight.
    pub fn submit(&self, viewport: Viewport) -> Result<JobHandle, SubmitError> {
        let chunks = partition_viewport(&viewport, self.chunk_size)?;

        let job = {
            let mut current = self.shared.lock_current();
            let generation = self.shared.generation.load(Ordering::Acquire) + 1;
            let job = Arc::new(Job::new(generation, viewport, chunks.len()));
            let assigned = self.shared.supersede(&mut current, Some(Arc::clone(&job)));
            debug_assert_eq!(assigned, generation);
            job
        };

        debug!(
            "job {} submitted: center ({}, {}), width {}, {}x{} px, max_iter {}, {} chunks",
            job.generation(),
            viewport.x_center(),
            viewport.y_center(),
            viewport.x_width(),
            viewport.width_px(),
            viewport.height_px(),
            viewport.max_iter(),
            chunks.len()
        );

        for chunk in chunks {
            let shared = Arc::clone(&self.shared);
            let job = Arc::clone(&job);
            self.threads.spawn(move || shared.run_chunk(&job, &chunk));
        }

        Ok(JobHandle::new(job, Arc::clone(&self.shared.generation)))
    }

    /// Best-effort, non-blocking cancel. Returns `false` if the job already
    /// completed or was superseded.
    pub fn cancel(&self, handle: &JobHandle) -> bool {
        let mut current = self.shared.lock_current();

        let is_current_job = current
            .as_ref()
            .is_some_and(|job| Arc::ptr_eq(job, handle.job()));

        if !is_current_job || handle.state().is_terminal() {
            return false;
        }

        self.shared.supersede(&mut current, None);
        true
    }

    /// Cancels any in-flight job so queued chunks drain without computing.
    pub fn shutdown(&self) {
        let mut current = self.shared.lock_current();
        self.shared.supersede(&mut current, None);
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}
