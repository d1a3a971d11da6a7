use std::num::NonZeroUsize;

/// Worker threads to use when none are configured: one per available core.
#[must_use]
pub fn default_worker_count() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Resolves a configured worker count, falling back to the available parallelism.
#[must_use]
pub fn resolve_worker_count(configured: Option<NonZeroUsize>) -> NonZeroUsize {
    configured.unwrap_or_else(default_worker_count)
}
