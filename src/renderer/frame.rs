use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::renderer::context::RendererContext;

/// Marker colour, packed `0x00RRGGBB`.
const MARKER_COLOUR: u32 = 0x0004_FF00;
const MARKER_RADIUS: i64 = 3;

/// Composes the presentable frame: cached fractal pixels plus the C marker.
///
/// The cached buffer stays untouched; the marker is stamped on a copy so a
/// dragged C never leaves trails.
#[must_use]
pub fn compose_frame(ctx: &RendererContext) -> PixelBuffer {
    let mut frame = ctx.pixels.clone();
    let (x, y) = ctx.viewport.complex_to_screen(ctx.c);
    stamp_marker(&mut frame, x.round() as i64, y.round() as i64);
    frame
}

/// Caption with the live text readout of C.
#[must_use]
pub fn caption(base: &str, c: Complex) -> String {
    format!("{}   C = {:.4} + {:.4}j", base, c.real, c.imag)
}

fn stamp_marker(frame: &mut PixelBuffer, cx: i64, cy: i64) {
    let width = i64::from(frame.width());
    let height = i64::from(frame.height());

    for dy in -MARKER_RADIUS..=MARKER_RADIUS {
        for dx in -MARKER_RADIUS..=MARKER_RADIUS {
            if dx * dx + dy * dy > MARKER_RADIUS * MARKER_RADIUS {
                continue;
            }

            let x = cx + dx;
            let y = cy + dy;
            if x < 0 || y < 0 || x >= width || y >= height {
                continue;
            }

            frame.pixels_mut()[(y * width + x) as usize] = MARKER_COLOUR;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::context::DEFAULT_MAX_ITERS;
    use crate::renderer::roles::RendererRole;
    use crate::renderer::roles::mandelbrot::MandelbrotRole;

    fn test_context() -> RendererContext {
        RendererContext::new(&MandelbrotRole, 100, 75, DEFAULT_MAX_ITERS).unwrap()
    }

    #[test]
    fn test_marker_is_stamped_at_the_parameter_position() {
        let ctx = test_context();

        let frame = compose_frame(&ctx);

        let (x, y) = ctx.viewport.complex_to_screen(ctx.c);
        let index = (y.round() as usize) * 100 + (x.round() as usize);
        assert_eq!(frame.pixels()[index], 0x0004_FF00);
    }

    #[test]
    fn test_cached_pixels_stay_untouched() {
        let ctx = test_context();
        let cached_before = ctx.pixels.clone();

        let frame = compose_frame(&ctx);

        assert_eq!(ctx.pixels, cached_before);
        assert_ne!(frame, cached_before);
    }

    #[test]
    fn test_marker_outside_the_window_is_clipped() {
        let mut ctx = test_context();
        ctx.c = Complex {
            real: 50.0,
            imag: 50.0,
        };

        let frame = compose_frame(&ctx);

        // fully off-screen marker leaves the frame identical to the cache
        assert_eq!(frame, ctx.pixels);
    }

    #[test]
    fn test_marker_at_the_corner_is_partially_clipped() {
        let mut ctx = test_context();
        // top-left corner of the viewport maps to screen (0, 0)
        ctx.c = ctx.viewport.screen_to_complex(0.0, 0.0);

        let frame = compose_frame(&ctx);

        assert_eq!(frame.pixels()[0], 0x0004_FF00);
        assert_eq!(frame.len(), ctx.pixels.len());
    }

    #[test]
    fn test_caption_readout_format() {
        let c = Complex {
            real: -1.1,
            imag: -0.2,
        };

        assert_eq!(
            caption("Julia Set", c),
            "Julia Set   C = -1.1000 + -0.2000j"
        );
    }
}
