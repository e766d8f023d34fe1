use crate::core::data::complex::Complex;
use crate::core::fractals::recurrence::Recurrence;

/// z_{n+1} = z_n² + C, with C shared across every sample of the grid.
#[derive(Debug, Copy, Clone)]
pub struct JuliaRecurrence {
    c: Complex,
}

impl JuliaRecurrence {
    #[must_use]
    pub fn new(c: Complex) -> Self {
        Self { c }
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }
}

impl Recurrence for JuliaRecurrence {
    fn start(&self, sample: Complex) -> Complex {
        sample
    }

    fn offset(&self, _sample: Complex) -> Complex {
        self.c
    }
}
