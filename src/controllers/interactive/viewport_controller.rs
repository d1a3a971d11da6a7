use log::debug;
use thiserror::Error;

use crate::controllers::interactive::job::JobHandle;
use crate::controllers::interactive::worker_pool::{SubmitError, WorkerPool};
use crate::core::actions::zoom_viewport::{ZoomError, pan_viewport, zoom_viewport};
use crate::core::data::pixel_position::PixelPosition;
use crate::core::data::viewport::{Viewport, ViewportError};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Zoom(#[from] ZoomError),
    #[error(transparent)]
    Pan(#[from] ViewportError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Owns the current viewport and turns user gestures into pool submissions.
///
/// A failed gesture leaves the viewport and the running job untouched.
pub struct ViewportController {
    pool: WorkerPool,
    home: Viewport,
    viewport: Viewport,
    current_job: Option<JobHandle>,
}

impl ViewportController {
    #[must_use]
    pub fn new(pool: WorkerPool, initial: Viewport) -> Self {
        Self {
            pool,
            home: initial,
            viewport: initial,
            current_job: None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn current_job(&self) -> Option<&JobHandle> {
        self.current_job.as_ref()
    }

    #[must_use]
    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// Submits the current viewport.
    pub fn start(&mut self) -> Result<&JobHandle, ControllerError> {
        self.show(self.viewport)
    }

    /// Zooms about the pointer position and resubmits.
    pub fn on_zoom(
        &mut self,
        factor: f64,
        anchor: PixelPosition,
    ) -> Result<&JobHandle, ControllerError> {
        let next = zoom_viewport(&self.viewport, factor, anchor)?;
        debug!(
            "zoom x{} at ({}, {}): width {} -> {}",
            factor,
            anchor.x,
            anchor.y,
            self.viewport.x_width(),
            next.x_width()
        );
        self.show(next)
    }

    pub fn on_pan(&mut self, delta_px: PixelPosition) -> Result<&JobHandle, ControllerError> {
        let next = pan_viewport(&self.viewport, delta_px)?;
        self.show(next)
    }

    /// Returns to the viewport the controller was created with.
    pub fn reset(&mut self) -> Result<&JobHandle, ControllerError> {
        self.show(self.home)
    }

    /// Cancels the in-flight job, if any.
    pub fn cancel(&self) -> bool {
        self.current_job
            .as_ref()
            .is_some_and(|handle| self.pool.cancel(handle))
    }

    fn show(&mut self, next: Viewport) -> Result<&JobHandle, ControllerError> {
        let handle = self.pool.submit(next)?;
        self.viewport = next;
        Ok(&*self.current_job.insert(handle))
    }
}
