use crate::core::actions::evaluate_grid::evaluate_grid;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::mandelbrot::MandelbrotRecurrence;
use crate::protocol::messages::FrameDirective;
use crate::renderer::roles::RendererRole;

/// Producer side of the C exchange: the user picks C in this window.
#[derive(Debug, Copy, Clone, Default)]
pub struct MandelbrotRole;

impl RendererRole for MandelbrotRole {
    fn caption_base(&self) -> &'static str {
        "Choose a Point on the Mandelbrot Set"
    }

    fn view_center(&self) -> Complex {
        Complex {
            real: -0.5,
            imag: 0.0,
        }
    }

    fn evaluate(&self, grid: &SampleGrid, _c: Complex, max_iters: u32) -> IterationBuffer {
        // C plays no part here; the sample itself is the varying parameter
        evaluate_grid(grid, &MandelbrotRecurrence, max_iters)
    }

    fn tracks_pointer(&self) -> bool {
        true
    }

    fn absorb(&self, _current_c: Complex, _directive: &FrameDirective) -> Option<Complex> {
        // this loop owns C; directives never overwrite it
        None
    }

    fn reported_c(&self, c: Complex) -> Option<Complex> {
        Some(c)
    }
}
