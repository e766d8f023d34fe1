use crate::core::data::complex::Complex;
use crate::core::data::iteration_buffer::NOT_ESCAPED;

/// Squared escape radius; an orbit has diverged once |z|² exceeds this.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts the iterations of z ↦ z² + c before the orbit escapes.
///
/// Returns the first 0-based index n at which |z_n| > 2, starting from
/// z_0 = `z0`, or [`NOT_ESCAPED`] if the orbit stays bounded for
/// `max_iters` steps.
#[must_use]
pub fn iterate(z0: Complex, c: Complex, max_iters: u32) -> i32 {
    let mut z = z0;

    for n in 0..max_iters {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return n as i32;
        }

        z = z * z + c;
    }

    NOT_ESCAPED
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO: Complex = Complex {
        real: 0.0,
        imag: 0.0,
    };

    #[test]
    fn test_point_outside_escape_radius_escapes_immediately() {
        let far = Complex {
            real: 3.0,
            imag: 0.0,
        };

        assert_eq!(iterate(far, far, 35), 0);
        assert_eq!(
            iterate(
                Complex {
                    real: 0.0,
                    imag: -2.5
                },
                ZERO,
                35
            ),
            0
        );
    }

    #[test]
    fn test_origin_with_zero_offset_never_escapes() {
        assert_eq!(iterate(ZERO, ZERO, 35), NOT_ESCAPED);
        assert_eq!(iterate(ZERO, ZERO, 1), NOT_ESCAPED);
        assert_eq!(iterate(ZERO, ZERO, 1000), NOT_ESCAPED);
    }

    #[test]
    fn test_known_escaping_orbit() {
        // z0 = c = 1: orbit 1, 2, 5, 26, ... first |z| > 2 at n = 2
        let one = Complex {
            real: 1.0,
            imag: 0.0,
        };

        assert_eq!(iterate(one, one, 35), 2);
    }

    #[test]
    fn test_budget_exhaustion_returns_sentinel() {
        // the same orbit with too small a budget reports no escape
        let one = Complex {
            real: 1.0,
            imag: 0.0,
        };

        assert_eq!(iterate(one, one, 2), NOT_ESCAPED);
    }

    #[test]
    fn test_interior_point_of_main_cardioid_never_escapes() {
        let interior = Complex {
            real: -0.1,
            imag: 0.1,
        };

        assert_eq!(iterate(interior, interior, 500), NOT_ESCAPED);
    }

    #[test]
    fn test_result_is_below_max_iters_or_sentinel() {
        let samples = [
            Complex {
                real: 0.3,
                imag: 0.5,
            },
            Complex {
                real: -1.1,
                imag: -0.2,
            },
            Complex {
                real: 2.1,
                imag: 0.0,
            },
        ];

        for z0 in samples {
            let n = iterate(z0, z0, 35);
            assert!(n == NOT_ESCAPED || (0..35).contains(&n));
        }
    }
}
