//! Error types for Tetra core operations

use thiserror::Error;

/// Result type alias for Tetra core operations
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Errors that can occur when constructing a lattice.
///
/// Everything past construction is total over its domain; out-of-range
/// coordinates or axes reaching the engine are caller bugs and assert
/// rather than surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// An axis extent of zero would make every coordinate invalid
    #[error("extent on axis {axis} must be nonzero")]
    ZeroExtent { axis: char },

    /// The requested cell count does not fit in addressable memory
    #[error("lattice of {cells} cells exceeds addressable size")]
    TooManyCells { cells: u128 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LatticeError::ZeroExtent { axis: 'z' };
        let msg = format!("{}", err);
        assert!(msg.contains("axis z"));

        let err = LatticeError::TooManyCells { cells: u128::MAX };
        assert!(format!("{}", err).contains("exceeds"));
    }
}
