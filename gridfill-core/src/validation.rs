//! Construction-parameter validation
//!
//! Pure mathematical checks shared by every construction entry point,
//! with no I/O dependencies.

use crate::error::GridError;

/// Validate a requested grid extent and return its cell count
///
/// Rejects zero-sized axes and extents whose cell count would overflow
/// `usize`.
pub const fn validate_dimensions(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    match width.checked_mul(height) {
        Some(total) => Ok(total),
        None => Err(GridError::InvalidDimensions { width, height }),
    }
}
