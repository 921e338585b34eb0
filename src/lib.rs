//! # Life Atlas
//!
//! Location pinning and travel statistics for a personal life map.
//!
//! This library provides:
//! - Haversine distance between coordinates
//! - Coarse region classification from static bounding boxes
//! - Path length and farthest-pair aggregation over pinned locations
//! - A life statistics summary, recomputed from scratch on every read
//! - An in-memory location store with selection and map viewport state
//!
//! ## Features
//!
//! - **`parallel`** - Evaluate the farthest-pair scan with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use life_atlas::{LocationCategory, LocationDraft, LocationStore};
//!
//! let mut store = LocationStore::new();
//! store
//!     .add(LocationDraft::new("New York", LocationCategory::Lived, 40.7128, -74.0060))
//!     .expect("valid location");
//! store
//!     .add(LocationDraft::new("London", LocationCategory::Traveled, 51.5074, -0.1278))
//!     .expect("valid location");
//!
//! let stats = store.stats();
//! assert_eq!(stats.total_locations, 2);
//! assert!(stats.farthest_pair.is_some());
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{AtlasError, Result};

// Location data model
pub mod location;
pub use location::{Location, LocationCategory, LocationDraft, LocationId};

// Geographic utilities (Haversine distance)
pub mod geo_utils;
pub use geo_utils::{distance_between, haversine_km, EARTH_RADIUS_KM};

// Coarse bounding-box region classification
pub mod regions;
pub use regions::{classify, unique_regions, Region};

// Path ordering and pairwise aggregation
pub mod path;
#[cfg(feature = "parallel")]
pub use path::farthest_pair_parallel;
pub use path::{farthest_pair, path_sequence, timeline_sequence, total_path_distance};

// Life statistics summary
pub mod stats;
pub use stats::{summarize, LifeStats};

// Stateful location store (collection + selection + viewport)
pub mod store;
pub use store::{LocationStore, MapView, ViewConfig};

// Helpers around the external geocoding lookup
pub mod geocode;
pub use geocode::{
    rank_candidates, GeocodeCandidate, GeocodeConfig, SearchQuery, SearchSequencer, SearchTicket,
};

// ============================================================================
// Core Types
// ============================================================================

/// A geographic coordinate in decimal degrees.
///
/// # Example
/// ```
/// use life_atlas::Coordinate;
/// let london = Coordinate::new(51.5074, -0.1278);
/// assert!(london.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check if the latitude is finite and within [-90, 90].
    pub fn has_valid_latitude(&self) -> bool {
        self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude)
    }

    /// Check if the longitude is finite and within [-180, 180].
    pub fn has_valid_longitude(&self) -> bool {
        self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Check if the coordinate has valid latitude and longitude.
    pub fn is_valid(&self) -> bool {
        self.has_valid_latitude() && self.has_valid_longitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());

        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }
}
