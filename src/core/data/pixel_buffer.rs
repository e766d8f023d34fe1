use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch {
        expected_len: usize,
        actual_len: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_len,
                actual_len,
            } => {
                write!(
                    f,
                    "pixel buffer length {} does not match window size {}",
                    actual_len, expected_len
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Packed `0x00RRGGBB` pixels in row-major order, one per window pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub fn from_data(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, PixelBufferError> {
        let expected_len = (width as usize) * (height as usize);

        if pixels.len() != expected_len {
            return Err(PixelBufferError::BoundsMismatch {
                expected_len,
                actual_len: pixels.len(),
            });
        }

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    // Used by the shader, which derives the pixels from an iteration buffer.
    pub(crate) fn from_shaded(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize));
        Self {
            pixels,
            width,
            height,
        }
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
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
        self.pixels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_accepts_matching_length() {
        let buffer = PixelBuffer::from_data(2, 2, vec![0, 0xFF0000, 0xFFFFFF, 0x04FF00]);

        let buffer = buffer.unwrap();
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.pixels()[1], 0xFF0000);
        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 2);
    }

    #[test]
    fn test_from_data_rejects_length_mismatch() {
        let result = PixelBuffer::from_data(3, 3, vec![0; 8]);

        assert_eq!(
            result,
            Err(PixelBufferError::BoundsMismatch {
                expected_len: 9,
                actual_len: 8
            })
        );
    }
}
