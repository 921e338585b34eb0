//! Coarse region classification.
//!
//! Maps a coordinate to a named region by testing a fixed, ordered list of
//! rectangular latitude/longitude boxes. The first matching box wins, so the
//! order of [`REGION_BOXES`] is part of the behaviour: the boxes overlap
//! (United States/Canada, United States/South America, India/China) and
//! reordering them changes results.
//!
//! This is an approximation, not reverse geocoding. Northern Mexico
//! classifies as United States, Japan falls outside every box, and anything
//! unmatched is [`Region::Unknown`]. Known limitation, not a bug.

use std::collections::HashSet;

use geo::{coord, Coord, Intersects, Rect};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{Coordinate, Location};

/// A coarse named area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "United States")]
    UnitedStates,
    #[serde(rename = "Europe")]
    Europe,
    #[serde(rename = "India")]
    India,
    #[serde(rename = "China")]
    China,
    #[serde(rename = "Australia")]
    Australia,
    #[serde(rename = "Canada")]
    Canada,
    #[serde(rename = "South America")]
    SouthAmerica,
    #[serde(rename = "Africa")]
    Africa,
    /// No box matched
    #[serde(rename = "Unknown Region")]
    Unknown,
}

impl Region {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Region::UnitedStates => "United States",
            Region::Europe => "Europe",
            Region::India => "India",
            Region::China => "China",
            Region::Australia => "Australia",
            Region::Canada => "Canada",
            Region::SouthAmerica => "South America",
            Region::Africa => "Africa",
            Region::Unknown => "Unknown Region",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Build an edge-inclusive box from latitude and longitude ranges.
fn lat_lng_box(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Rect<f64> {
    Rect::new(
        coord! { x: min_lng, y: min_lat },
        coord! { x: max_lng, y: max_lat },
    )
}

/// Region boxes in priority order.
pub static REGION_BOXES: Lazy<Vec<(Region, Rect<f64>)>> = Lazy::new(|| {
    vec![
        (Region::UnitedStates, lat_lng_box(25.0, 49.0, -125.0, -66.0)),
        (Region::Europe, lat_lng_box(41.0, 83.0, -10.0, 40.0)),
        (Region::India, lat_lng_box(8.0, 37.0, 68.0, 97.0)),
        (Region::China, lat_lng_box(18.0, 54.0, 73.0, 135.0)),
        (Region::Australia, lat_lng_box(-44.0, -10.0, 113.0, 154.0)),
        (Region::Canada, lat_lng_box(45.0, 83.0, -141.0, -52.0)),
        (Region::SouthAmerica, lat_lng_box(-35.0, 37.0, -74.0, -34.0)),
        (Region::Africa, lat_lng_box(-35.0, 37.0, -20.0, 55.0)),
    ]
});

/// Classify a coordinate into the first matching region.
///
/// Never fails: a coordinate outside every box (or a NaN one) yields
/// [`Region::Unknown`].
pub fn classify(point: &Coordinate) -> Region {
    let c: Coord<f64> = coord! { x: point.longitude, y: point.latitude };
    REGION_BOXES
        .iter()
        .find(|(_, bounds)| bounds.intersects(&c))
        .map(|(region, _)| *region)
        .unwrap_or(Region::Unknown)
}

/// Distinct regions visited, in first-seen order.
pub fn unique_regions(locations: &[Location]) -> Vec<Region> {
    let mut seen = HashSet::new();
    let mut regions = Vec::new();
    for location in locations {
        let region = classify(&location.coordinate());
        if seen.insert(region) {
            regions.push(region);
        }
    }
    regions
}
