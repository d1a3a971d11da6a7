pub mod colour;
pub mod file;
