//! Unified error handling for the life-atlas library.
//!
//! The error surface is deliberately small: only invalid input to
//! location creation is an error. Missing ids, unmatched regions and
//! degenerate statistics inputs all have defined non-error results.

use thiserror::Error;

/// Unified error type for life-atlas operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtlasError {
    /// Location name is empty or whitespace only
    #[error("Location name must not be empty")]
    EmptyName,
    /// Latitude is not finite or outside [-90, 90]
    #[error("Latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),
    /// Longitude is not finite or outside [-180, 180]
    #[error("Longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
}

/// Result type alias for life-atlas operations.
pub type Result<T> = std::result::Result<T, AtlasError>;
