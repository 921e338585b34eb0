//! Life statistics summary.
//!
//! [`summarize`] is a pure function over a location snapshot. Nothing is
//! cached: every call recomputes everything, so there is no invalidation to
//! get wrong. At life-map scale (tens to low hundreds of locations) this is
//! cheap enough to run on every render.
//!
//! `longest_stay` is the first `lived` location in input order. There is no
//! duration in the data model, so it is not an actual longest stay; the
//! name is kept for the presentation layer ("home base").

use log::{debug, error};
use serde::Serialize;

use crate::geo_utils::distance_between;
use crate::path::total_path_distance;
use crate::regions::{unique_regions, Region};
use crate::{Location, LocationCategory};

#[cfg(not(feature = "parallel"))]
use crate::path::farthest_pair;

#[cfg(feature = "parallel")]
use crate::path::farthest_pair_parallel as farthest_pair;

/// Derived statistics for a location snapshot.
///
/// Borrows the locations it cites, so it cannot outlive the snapshot it was
/// computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeStats<'a> {
    pub total_locations: usize,
    /// Path length in km, rounded to the nearest integer
    pub total_distance: u64,
    /// Distinct regions in first-seen order
    pub countries: Vec<Region>,
    /// Distance between the farthest pair in km, rounded; 0 when there is none
    pub farthest_distance: u64,
    pub farthest_pair: Option<(&'a Location, &'a Location)>,
    /// First `lived` location in input order
    pub longest_stay: Option<&'a Location>,
}

impl LifeStats<'_> {
    /// Serialize for the presentation layer.
    ///
    /// Returns `"{}"` if serialization fails.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            error!("[StatsEngine] Failed to serialize stats: {}", e);
            "{}".to_string()
        })
    }
}

/// Compute life statistics for a set of locations.
pub fn summarize(locations: &[Location]) -> LifeStats<'_> {
    let total_distance = total_path_distance(locations);
    let farthest_pair = farthest_pair(locations);
    let farthest_distance = farthest_pair
        .map(|(a, b)| distance_between(a, b))
        .unwrap_or(0.0);
    let longest_stay = locations
        .iter()
        .find(|l| l.category == LocationCategory::Lived);

    let stats = LifeStats {
        total_locations: locations.len(),
        total_distance: round_km(total_distance),
        countries: unique_regions(locations),
        farthest_distance: round_km(farthest_distance),
        farthest_pair,
        longest_stay,
    };

    debug!(
        "[StatsEngine] Summarized {} locations: path={}km, farthest={}km, regions={}",
        stats.total_locations,
        stats.total_distance,
        stats.farthest_distance,
        stats.countries.len()
    );

    stats
}

fn round_km(km: f64) -> u64 {
    km.round() as u64
}
