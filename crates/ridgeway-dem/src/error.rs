use std::fmt;

use ridgeway_core::GridError;

/// Errors that can occur when generating terrain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemError {
    /// Side length is not `2^k + 1`.
    InvalidSize(usize),
    /// Noise amplitude must be at least 1.
    InvalidRoughness(i32),
    /// The finished heights were rejected by the grid.
    Grid(GridError),
}

impl fmt::Display for DemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(s) => write!(f, "dem: size {s} is not 2^k + 1"),
            Self::InvalidRoughness(r) => write!(f, "dem: roughness {r} must be at least 1"),
            Self::Grid(e) => write!(f, "dem: {e}"),
        }
    }
}

impl std::error::Error for DemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for DemError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
