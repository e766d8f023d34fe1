use crate::core::data::complex::Complex;
use crate::core::viewport::Viewport;

/// Row-major grid of complex sample points, one per window pixel.
///
/// Points are linearly interpolated over the viewport rectangle with both
/// endpoints included: pixel (0, 0) sits exactly at
/// `(center - half_width, center - half_height)` and pixel
/// `(width - 1, height - 1)` at `(center + half_width, center + half_height)`.
/// Immutable once built; a resize produces a fresh grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    points: Vec<Complex>,
    width: u32,
    height: u32,
}

impl SampleGrid {
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        let width = viewport.width();
        let height = viewport.height();
        let center = viewport.center();

        // Viewport construction guarantees width >= 2 and height >= 2, so the
        // (n - 1) interpolation divisors are never zero.
        let real_step = 2.0 * viewport.half_width() / f64::from(width - 1);
        let imag_step = 2.0 * viewport.half_height() / f64::from(height - 1);
        let real_start = center.real - viewport.half_width();
        let imag_start = center.imag - viewport.half_height();

        let mut points = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            let imag = imag_start + f64::from(y) * imag_step;
            for x in 0..width {
                points.push(Complex {
                    real: real_start + f64::from(x) * real_step,
                    imag,
                });
            }
        }

        Self {
            points,
            width,
            height,
        }
    }

    #[must_use]
    pub fn points(&self) -> &[Complex] {
        &self.points
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
