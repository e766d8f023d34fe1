use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Fixed factor by which the visible rectangle of the complex plane is scaled.
pub const VIEW_SCALE: f64 = 1.2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportError {
    InvalidWindowSize { width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWindowSize { width, height } => {
                write!(
                    f,
                    "window size must be at least 2x2 pixels: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangular region of the complex plane mapped onto the window.
///
/// Half extents are derived from the window aspect ratio so that
/// `half_width / half_height` always equals `width / height`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    width: u32,
    height: u32,
    half_width: f64,
    half_height: f64,
    ratio: f64,
}

impl Viewport {
    pub fn new(center: Complex, width: u32, height: u32) -> Result<Self, ViewportError> {
        if width < 2 || height < 2 {
            return Err(ViewportError::InvalidWindowSize { width, height });
        }

        let ratio = f64::from(width) / f64::from(height);

        let half_width = if height < width {
            VIEW_SCALE * ratio
        } else {
            VIEW_SCALE
        };
        let half_height = half_width / ratio;

        Ok(Self {
            center,
            width,
            height,
            half_width,
            half_height,
            ratio,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
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
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[must_use]
    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Maps a window coordinate to its complex-plane counterpart.
    #[must_use]
    pub fn screen_to_complex(&self, x: f64, y: f64) -> Complex {
        Complex {
            real: self.center.real - self.half_width
                + x * 2.0 * self.half_width / f64::from(self.width),
            imag: self.center.imag - self.half_height
                + y * 2.0 * self.half_height / f64::from(self.height),
        }
    }

    /// Maps a complex-plane point back to window coordinates.
    ///
    /// Inverse of [`Viewport::screen_to_complex`] up to floating rounding.
    #[must_use]
    pub fn complex_to_screen(&self, point: Complex) -> (f64, f64) {
        (
            (point.real - self.center.real + self.half_width) * f64::from(self.width)
                / (2.0 * self.half_width),
            (point.imag - self.center.imag + self.half_height) * f64::from(self.height)
                / (2.0 * self.half_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Complex = Complex {
        real: -0.5,
        imag: 0.0,
    };

    #[test]
    fn test_viewport_rejects_degenerate_sizes() {
        assert_eq!(
            Viewport::new(CENTER, 1, 100),
            Err(ViewportError::InvalidWindowSize {
                width: 1,
                height: 100
            })
        );
        assert_eq!(
            Viewport::new(CENTER, 100, 0),
            Err(ViewportError::InvalidWindowSize {
                width: 100,
                height: 0
            })
        );
    }

    #[test]
    fn test_wide_window_scales_half_width() {
        let viewport = Viewport::new(CENTER, 200, 100).unwrap();

        assert_eq!(viewport.ratio(), 2.0);
        assert_eq!(viewport.half_width(), VIEW_SCALE * 2.0);
        assert_eq!(viewport.half_height(), VIEW_SCALE);
    }

    #[test]
    fn test_tall_window_keeps_half_width_at_view_scale() {
        let viewport = Viewport::new(CENTER, 100, 200).unwrap();

        assert_eq!(viewport.half_width(), VIEW_SCALE);
        assert_eq!(viewport.half_height(), VIEW_SCALE * 2.0);
    }

    #[test]
    fn test_square_window_keeps_half_width_at_view_scale() {
        // height < width is false for a square window, so the untouched branch applies
        let viewport = Viewport::new(CENTER, 100, 100).unwrap();

        assert_eq!(viewport.half_width(), VIEW_SCALE);
        assert_eq!(viewport.half_height(), VIEW_SCALE);
    }

    #[test]
    fn test_half_extent_ratio_matches_window_ratio() {
        for (width, height) in [(100, 75), (75, 100), (1000, 750), (640, 640)] {
            let viewport = Viewport::new(CENTER, width, height).unwrap();

            let extent_ratio = viewport.half_width() / viewport.half_height();
            assert!(
                (extent_ratio - viewport.ratio()).abs() < 1e-12,
                "extent ratio {} diverges from window ratio {} for {}x{}",
                extent_ratio,
                viewport.ratio(),
                width,
                height
            );
        }
    }

    #[test]
    fn test_screen_to_complex_origin_is_top_left_of_view() {
        let viewport = Viewport::new(CENTER, 100, 75).unwrap();

        let top_left = viewport.screen_to_complex(0.0, 0.0);

        assert!((top_left.real - (CENTER.real - viewport.half_width())).abs() < 1e-12);
        assert!((top_left.imag - (CENTER.imag - viewport.half_height())).abs() < 1e-12);
    }

    #[test]
    fn test_screen_to_complex_window_center() {
        let viewport = Viewport::new(CENTER, 100, 80).unwrap();

        let middle = viewport.screen_to_complex(50.0, 40.0);

        assert!((middle.real - CENTER.real).abs() < 1e-12);
        assert!((middle.imag - CENTER.imag).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_screen_complex_screen() {
        let viewport = Viewport::new(CENTER, 311, 157).unwrap();

        for (x, y) in [(0.0, 0.0), (1.0, 1.0), (155.0, 78.0), (310.0, 156.0)] {
            let (rx, ry) = viewport.complex_to_screen(viewport.screen_to_complex(x, y));

            assert!((rx - x).abs() < 1e-9, "x round trip: {} -> {}", x, rx);
            assert!((ry - y).abs() < 1e-9, "y round trip: {} -> {}", y, ry);
        }
    }

    #[test]
    fn test_complex_to_screen_places_center_mid_window() {
        let viewport = Viewport::new(CENTER, 100, 80).unwrap();

        let (x, y) = viewport.complex_to_screen(CENTER);

        assert!((x - 50.0).abs() < 1e-12);
        assert!((y - 40.0).abs() < 1e-12);
    }
}
