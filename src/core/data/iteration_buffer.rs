use std::error::Error;
use std::fmt;

/// Sentinel for sample points that never escaped within the iteration budget.
pub const NOT_ESCAPED: i32 = -1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationBufferError {
    BoundsMismatch {
        expected_len: usize,
        actual_len: usize,
    },
}

impl fmt::Display for IterationBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_len,
                actual_len,
            } => {
                write!(
                    f,
                    "iteration buffer length {} does not match grid size {}",
                    actual_len, expected_len
                )
            }
        }
    }
}

impl Error for IterationBufferError {}

/// Escape-time results for a sample grid, same length and row-major order.
///
/// Each count is in `[0, max_iters)` or [`NOT_ESCAPED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationBuffer {
    counts: Vec<i32>,
    width: u32,
    height: u32,
}

impl IterationBuffer {
    pub fn from_counts(
        width: u32,
        height: u32,
        counts: Vec<i32>,
    ) -> Result<Self, IterationBufferError> {
        let expected_len = (width as usize) * (height as usize);

        if counts.len() != expected_len {
            return Err(IterationBufferError::BoundsMismatch {
                expected_len,
                actual_len: counts.len(),
            });
        }

        Ok(Self {
            counts,
            width,
            height,
        })
    }

    // Used by the evaluator, which derives the counts from the grid itself.
    pub(crate) fn from_grid_counts(width: u32, height: u32, counts: Vec<i32>) -> Self {
        debug_assert_eq!(counts.len(), (width as usize) * (height as usize));
        Self {
            counts,
            width,
            height,
        }
    }

    #[must_use]
    pub fn counts(&self) -> &[i32] {
        &self.counts
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
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
