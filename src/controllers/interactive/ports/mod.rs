//! Port definitions for the interactive controller.
//!
//! Contains the trait the rendering layer implements to receive streamed
//! chunk results and job completions.

pub mod render_observer;

pub use render_observer::{ChannelObserver, RenderObserver};
