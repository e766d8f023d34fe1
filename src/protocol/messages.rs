use crate::core::data::complex::Complex;

/// Per-frame go-ahead from the coordinator to a renderer loop.
///
/// `c` is only populated on the Julia loop's directive, carrying the
/// parameter the Mandelbrot loop reported in the same cycle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameDirective {
    pub keep_running: bool,
    pub c: Option<Complex>,
}

impl FrameDirective {
    #[must_use]
    pub fn keep_going(c: Option<Complex>) -> Self {
        Self {
            keep_running: true,
            c,
        }
    }

    #[must_use]
    pub fn stop() -> Self {
        Self {
            keep_running: false,
            c: None,
        }
    }
}

/// Per-frame reply from a renderer loop to the coordinator.
///
/// The Mandelbrot loop reports `Some(c)` (it owns the parameter); the Julia
/// loop reports `None`. `running` turns false after a quit event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    pub c: Option<Complex>,
    pub running: bool,
}
