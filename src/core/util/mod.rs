pub mod plane_mapping;
pub mod worker_count;
