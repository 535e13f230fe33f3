//! Error types for grid operations

/// Errors that can occur during grid construction and access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside the `[0, width) x [0, height)` rectangle
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// Coordinate is in range but not a populated slot of a sparse grid
    InvalidSlot { x: usize, y: usize },
    /// Requested extent has a zero axis or an overflowing cell count
    InvalidDimensions { width: usize, height: usize },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "coordinate ({x}, {y}) out of range for {width}x{height} grid")
            }
            GridError::InvalidSlot { x, y } => {
                write!(f, "coordinate ({x}, {y}) is not a populated slot")
            }
            GridError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
        }
    }
}

/// Result type for grid operations
pub type Result<T> = core::result::Result<T, GridError>;
