use rayon::prelude::*;

use crate::core::data::iteration_buffer::{IterationBuffer, NOT_ESCAPED};
use crate::core::data::pixel_buffer::PixelBuffer;

/// Colour of points that never escaped (interior of the set).
const INTERIOR: (u32, u32, u32) = (255, 255, 255);
/// Gradient endpoints for escaping points, from slowest to fastest escape.
const RAMP_START: (u32, u32, u32) = (0, 0, 0);
const RAMP_END: (u32, u32, u32) = (255, 0, 0);

#[inline]
#[must_use]
fn pack_rgb(r: u32, g: u32, b: u32) -> u32 {
    (r << 16) | (g << 8) | b
}

/// Maps an escape count to a packed `0x00RRGGBB` colour.
///
/// Interior points ([`NOT_ESCAPED`]) are white; escaping points interpolate
/// each channel linearly from black at count 0 to red at `max_iters`, with
/// the fractional channel values truncated.
#[must_use]
pub fn colour_of(iterations: i32, max_iters: u32) -> u32 {
    if iterations == NOT_ESCAPED {
        let (r, g, b) = INTERIOR;
        return pack_rgb(r, g, b);
    }

    let m = f64::from(iterations) / f64::from(max_iters);
    let r = f64::from(RAMP_START.0) + f64::from(RAMP_END.0 - RAMP_START.0) * m;
    let g = f64::from(RAMP_START.1) + f64::from(RAMP_END.1 - RAMP_START.1) * m;
    let b = f64::from(RAMP_START.2) + f64::from(RAMP_END.2 - RAMP_START.2) * m;

    pack_rgb(r as u32, g as u32, b as u32)
}

/// Shades a whole iteration buffer into packed pixels, in parallel.
///
/// Pure derivation: same buffer and budget always produce the same pixels.
#[must_use]
pub fn shade_pixels(iterations: &IterationBuffer, max_iters: u32) -> PixelBuffer {
    let pixels: Vec<u32> = iterations
        .counts()
        .par_iter()
        .map(|&n| colour_of(n, max_iters))
        .collect();

    PixelBuffer::from_shaded(iterations.width(), iterations.height(), pixels)
}
