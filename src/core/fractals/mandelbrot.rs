use crate::core::data::complex::Complex;
use crate::core::fractals::recurrence::Recurrence;

/// z_{n+1} = z_n² + z_0, with z_0 the sample point itself.
#[derive(Debug, Copy, Clone, Default)]
pub struct MandelbrotRecurrence;

impl Recurrence for MandelbrotRecurrence {
    fn start(&self, sample: Complex) -> Complex {
        sample
    }

    fn offset(&self, sample: Complex) -> Complex {
        sample
    }
}
