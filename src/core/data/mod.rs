pub mod complex;
pub mod iteration_buffer;
pub mod pixel_buffer;
pub mod sample_grid;
