//! Interactive rendering for real-time exploration.
//!
//! This module provides the application layer that turns viewports into
//! chunked jobs, runs them on a worker pool and streams partial results to
//! the presentation layer.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `ViewportController` gestures (zoom, pan, reset)
//! - **Output**: `RenderObserver` trait for receiving chunk and job events
//! - **Core**: Uses domain actions from `core/` for actual computation

pub mod data;
pub mod events;
mod job;
pub mod ports;
mod viewport_controller;
mod worker_pool;

pub use data::frame_data::{ChunkFrame, CompletedFrame};
pub use events::render_event::RenderEvent;
pub use job::{JobHandle, JobState};
pub use ports::{ChannelObserver, RenderObserver};
pub use viewport_controller::{ControllerError, ViewportController};
pub use worker_pool::{PoolError, SubmitError, WorkerPool};
