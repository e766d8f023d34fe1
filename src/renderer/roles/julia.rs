use crate::core::actions::evaluate_grid::evaluate_grid;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::julia::JuliaRecurrence;
use crate::protocol::messages::FrameDirective;
use crate::renderer::roles::RendererRole;

/// Consumer side of the C exchange: redraws whenever a directive moves C.
#[derive(Debug, Copy, Clone, Default)]
pub struct JuliaRole;

impl RendererRole for JuliaRole {
    fn caption_base(&self) -> &'static str {
        "Julia Set"
    }

    fn view_center(&self) -> Complex {
        Complex {
            real: 0.0,
            imag: 0.0,
        }
    }

    fn evaluate(&self, grid: &SampleGrid, c: Complex, max_iters: u32) -> IterationBuffer {
        evaluate_grid(grid, &JuliaRecurrence::new(c), max_iters)
    }

    fn tracks_pointer(&self) -> bool {
        false
    }

    fn absorb(&self, current_c: Complex, directive: &FrameDirective) -> Option<Complex> {
        // an unchanged C must not trigger a full re-evaluation
        directive.c.filter(|&c| c != current_c)
    }

    fn reported_c(&self, _c: Complex) -> Option<Complex> {
        None
    }
}
