use rayon::prelude::*;

use crate::core::actions::iterate_point::iterate;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::recurrence::Recurrence;

/// Evaluates the escape time of every grid sample in parallel.
///
/// Each sample's orbit is independent, so this is a plain data-parallel map
/// over the grid on rayon's work-stealing scheduler. The result is
/// deterministic: the same grid, recurrence and budget always produce a
/// bit-identical buffer.
#[must_use]
pub fn evaluate_grid<R: Recurrence>(
    grid: &SampleGrid,
    recurrence: &R,
    max_iters: u32,
) -> IterationBuffer {
    let counts: Vec<i32> = grid
        .points()
        .par_iter()
        .map(|&sample| iterate(recurrence.start(sample), recurrence.offset(sample), max_iters))
        .collect();

    IterationBuffer::from_grid_counts(grid.width(), grid.height(), counts)
}
