use crate::core::actions::shade_pixels::shade_pixels;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::viewport::{Viewport, ViewportError};
use crate::renderer::roles::RendererRole;

/// Iteration budget per sample point.
pub const DEFAULT_MAX_ITERS: u32 = 35;

/// Parameter both windows start from.
pub const INITIAL_C: Complex = Complex {
    real: -1.1,
    imag: -0.2,
};

/// All mutable state owned by one renderer loop.
///
/// The cached pixel buffer is the expensive part: it is only rebuilt when the
/// viewport changes (resize) or, for the Julia loop, when C moves.
#[derive(Debug)]
pub struct RendererContext {
    pub viewport: Viewport,
    pub grid: SampleGrid,
    pub iterations: IterationBuffer,
    pub pixels: PixelBuffer,
    pub c: Complex,
    pub max_iters: u32,
    pub left_mouse_down: bool,
    pub running: bool,
}

impl RendererContext {
    pub fn new<R: RendererRole>(
        role: &R,
        width: u32,
        height: u32,
        max_iters: u32,
    ) -> Result<Self, ViewportError> {
        let viewport = Viewport::new(role.view_center(), width, height)?;
        let grid = SampleGrid::from_viewport(&viewport);
        let iterations = role.evaluate(&grid, INITIAL_C, max_iters);
        let pixels = shade_pixels(&iterations, max_iters);

        Ok(Self {
            viewport,
            grid,
            iterations,
            pixels,
            c: INITIAL_C,
            max_iters,
            left_mouse_down: false,
            running: true,
        })
    }

    /// Rebuilds viewport, grid and both buffers for a new window size.
    ///
    /// Runs synchronously: the frame in flight waits for the full
    /// re-evaluation, so a resize stalls the loop by design.
    pub fn rebuild_for_size<R: RendererRole>(
        &mut self,
        role: &R,
        width: u32,
        height: u32,
    ) -> Result<(), ViewportError> {
        self.viewport = Viewport::new(role.view_center(), width, height)?;
        self.grid = SampleGrid::from_viewport(&self.viewport);
        self.recompute(role);
        Ok(())
    }

    /// Re-evaluates the unchanged grid for the current C and reshades it.
    pub fn recompute<R: RendererRole>(&mut self, role: &R) {
        self.iterations = role.evaluate(&self.grid, self.c, self.max_iters);
        self.pixels = shade_pixels(&self.iterations, self.max_iters);
    }
}
