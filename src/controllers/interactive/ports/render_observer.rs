use std::sync::mpsc::{self, Receiver, Sender};

use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives render events from worker threads.
///
/// Events are delivered while the pool's publish gate is held, so an
/// implementation must return promptly and must not call back into the pool
/// or a [`ViewportController`] that owns it; doing so deadlocks. To react to
/// events on another thread, such as a UI loop that zooms in response, use
/// [`ChannelObserver`] and drive the controller from the receiving side.
///
/// [`ViewportController`]: crate::controllers::interactive::ViewportController
pub trait RenderObserver: Send + Sync {
    fn on_event(&self, event: RenderEvent);
}

impl<F> RenderObserver for F
where
    F: Fn(RenderEvent) + Send + Sync,
{
    fn on_event(&self, event: RenderEvent) {
        self(event)
    }
}

/// Forwards events into an mpsc channel for a consumer on another thread.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: Sender<RenderEvent>,
}

impl ChannelObserver {
    #[must_use]
    pub fn channel() -> (Self, Receiver<RenderEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }
}

impl RenderObserver for ChannelObserver {
    fn on_event(&self, event: RenderEvent) {
        // a dropped receiver means nobody is watching any more
        let _ = self.sender.send(event);
    }
}
