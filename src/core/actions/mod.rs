pub mod evaluate_grid;
pub mod iterate_point;
pub mod shade_pixels;
