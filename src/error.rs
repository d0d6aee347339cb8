use std::error::Error;
use std::fmt;

/// Invalid inclusive bounds for an operation on a sequence.
///
/// Returned when a non-trivial range does not fit the sequence's index space.
/// The sequence is guaranteed untouched when this error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    pub low: usize,
    pub high: usize,
    pub len: usize,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid range: low: {} high: {} for sequence of len: {}",
            self.low, self.high, self.len
        )
    }
}

impl Error for RangeError {}

/// Checks that the inclusive range `[low, high]` indexes into a sequence of
/// length `len`. The caller has already established `low <= high`.
pub(crate) fn check_range(len: usize, low: usize, high: usize) -> Result<(), RangeError> {
    if high < len {
        Ok(())
    } else {
        Err(RangeError { low, high, len })
    }
}
