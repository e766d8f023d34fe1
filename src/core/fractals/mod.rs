pub mod julia;
pub mod mandelbrot;
pub mod recurrence;
