use crate::core::data::complex::Complex;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::sample_grid::SampleGrid;
use crate::protocol::messages::FrameDirective;

pub mod julia;
pub mod mandelbrot;

/// The per-fractal half of the renderer loop.
///
/// The two loops are the same state machine; a role supplies the recurrence
/// to evaluate and its side of the C exchange: the Mandelbrot role produces
/// C from mouse input, the Julia role consumes it from directives.
pub trait RendererRole: Send + 'static {
    /// Base window caption for this fractal.
    fn caption_base(&self) -> &'static str;

    /// Complex-plane point the viewport is centered on.
    fn view_center(&self) -> Complex;

    /// Evaluates this fractal's recurrence over the grid.
    fn evaluate(&self, grid: &SampleGrid, c: Complex, max_iters: u32) -> IterationBuffer;

    /// Whether a left-button drag in this window moves C.
    fn tracks_pointer(&self) -> bool;

    /// Returns the new C if this directive changes it, `None` otherwise.
    ///
    /// A `Some` return obliges the loop to re-evaluate its grid before the
    /// next present.
    fn absorb(&self, current_c: Complex, directive: &FrameDirective) -> Option<Complex>;

    /// The C value this loop includes in its frame reports.
    fn reported_c(&self, c: Complex) -> Option<Complex>;
}
