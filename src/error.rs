//! Error types for region grid assignment

use thiserror::Error;

/// Errors that can occur while configuring the grid or validating polygon input
///
/// The containment engine itself never fails: malformed input produces an empty
/// cell set. These errors exist so callers can find out *why* an area was
/// ignored, or reject a bad configuration up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A polygon area has fewer than three points
    #[error("polygon area needs at least 3 points (got {count})")]
    TooFewPoints {
        /// Number of points the area actually has
        count: usize,
    },
    /// A polygon point has a NaN or infinite coordinate
    #[error("polygon point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the area's point list
        index: usize,
    },
}

/// Result type alias for region grid operations
pub type Result<T> = std::result::Result<T, RegionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RegionError::InvalidConfig("cell size must be positive".into()).to_string(),
            "invalid configuration: cell size must be positive"
        );
        assert_eq!(
            RegionError::TooFewPoints { count: 2 }.to_string(),
            "polygon area needs at least 3 points (got 2)"
        );
        assert_eq!(
            RegionError::NonFiniteCoordinate { index: 4 }.to_string(),
            "polygon point 4 has a non-finite coordinate"
        );
    }
}
