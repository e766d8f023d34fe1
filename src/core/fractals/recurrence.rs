use crate::core::data::complex::Complex;

/// Escape-time recurrence z_{n+1} = z_n² + offset, parameterized per sample.
///
/// The two fractal kinds differ only in which role the sample point plays:
/// for the Mandelbrot set the sample is the additive offset itself, for a
/// Julia set the offset is the shared parameter C and the sample is only the
/// starting point. `Sync` so a grid can be evaluated in parallel.
pub trait Recurrence: Sync {
    /// z_0 for the orbit starting at this sample.
    fn start(&self, sample: Complex) -> Complex;

    /// The constant added on every step of this sample's orbit.
    fn offset(&self, sample: Complex) -> Complex;
}
