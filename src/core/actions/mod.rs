pub mod cancellation;
pub mod compute_divergence;
pub mod partition_viewport;
pub mod zoom_viewport;
