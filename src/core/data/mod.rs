pub mod chunk;
pub mod complex;
pub mod iteration_grid;
pub mod pixel_bounds;
pub mod pixel_position;
pub mod result_buffer;
pub mod viewport;
