pub mod colour;
pub mod complex;
pub mod escape_time_grid;
pub mod grid_size;
pub mod pixel_buffer;
pub mod viewport;
