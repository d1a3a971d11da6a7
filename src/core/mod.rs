pub mod actions;
pub mod data;
pub mod engine_config;
pub mod util;
