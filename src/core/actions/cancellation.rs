use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

/// Control-flow marker for work abandoned because its job was superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation cancelled")]
pub struct Cancelled;

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Cancelled as soon as the shared generation counter moves past the
/// generation this token was issued for.
#[derive(Debug, Clone)]
pub struct GenerationToken {
    current: Arc<AtomicU64>,
    issued_for: u64,
}

impl GenerationToken {
    #[must_use]
    pub fn new(current: Arc<AtomicU64>, issued_for: u64) -> Self {
        Self {
            current,
            issued_for,
        }
    }
}

impl CancelToken for GenerationToken {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.current.load(Ordering::Relaxed) != self.issued_for
    }
}
