//! Path ordering and pairwise aggregation.
//!
//! Two orderings coexist and must stay distinct:
//! - [`path_sequence`]: life `date` when set, else `created_at`. Drives the
//!   travelled path and its total distance.
//! - [`timeline_sequence`]: `created_at` only. Drives the timeline display.
//!
//! Unifying them changes the drawn path shape, so they are kept separate.
//!
//! [`farthest_pair`] scans all C(n, 2) pairs. That is O(n²), fine for the
//! tens to low hundreds of locations a life map holds. The scan order is
//! part of the contract (first maximum wins), so any faster variant has to
//! reproduce the same tie-break.

use crate::geo_utils::distance_between;
use crate::Location;

/// Locations ordered for path aggregation.
///
/// Stable sort by [`Location::chronological_key`], ascending. Locations with
/// equal keys keep their input order.
pub fn path_sequence(locations: &[Location]) -> Vec<&Location> {
    let mut sorted: Vec<&Location> = locations.iter().collect();
    sorted.sort_by_key(|l| l.chronological_key());
    sorted
}

/// Locations ordered for the timeline: by `created_at` only, ascending.
pub fn timeline_sequence(locations: &[Location]) -> Vec<&Location> {
    let mut sorted: Vec<&Location> = locations.iter().collect();
    sorted.sort_by_key(|l| l.created_at);
    sorted
}

/// Total distance along the path in kilometers.
///
/// Sum of consecutive-pair distances in [`path_sequence`] order. Zero for
/// fewer than two locations. This is a path length, not a pairwise total.
pub fn total_path_distance(locations: &[Location]) -> f64 {
    if locations.len() < 2 {
        return 0.0;
    }

    path_sequence(locations)
        .windows(2)
        .map(|pair| distance_between(pair[0], pair[1]))
        .sum()
}

/// Find the two locations farthest apart.
///
/// Returns `None` for fewer than two locations. Otherwise scans `i`
/// ascending, `j > i` ascending, over the input order (not the path order)
/// and keeps the first pair reaching the maximum distance. Co-located
/// inputs still yield the first pair `(0, 1)`.
pub fn farthest_pair(locations: &[Location]) -> Option<(&Location, &Location)> {
    if locations.len() < 2 {
        return None;
    }

    let mut best = (0, 1);
    let mut max_distance = distance_between(&locations[0], &locations[1]);

    for i in 0..locations.len() {
        for j in (i + 1)..locations.len() {
            let distance = distance_between(&locations[i], &locations[j]);
            if distance > max_distance {
                max_distance = distance;
                best = (i, j);
            }
        }
    }

    Some((&locations[best.0], &locations[best.1]))
}

/// Parallel version of [`farthest_pair`].
///
/// Each row `i` is scanned on its own thread; rows are then reduced by
/// distance, preferring the lower `i` on ties. The result is identical to
/// the sequential scan.
#[cfg(feature = "parallel")]
pub fn farthest_pair_parallel(locations: &[Location]) -> Option<(&Location, &Location)> {
    use rayon::prelude::*;

    if locations.len() < 2 {
        return None;
    }

    let n = locations.len();
    let (i, j, _) = (0..n - 1)
        .into_par_iter()
        .map(|i| {
            let mut best_j = i + 1;
            let mut row_max = distance_between(&locations[i], &locations[best_j]);
            for j in (i + 2)..n {
                let distance = distance_between(&locations[i], &locations[j]);
                if distance > row_max {
                    row_max = distance;
                    best_j = j;
                }
            }
            (i, best_j, row_max)
        })
        .reduce_with(|a, b| {
            if b.2 > a.2 || (b.2 == a.2 && b.0 < a.0) {
                b
            } else {
                a
            }
        })?;

    Some((&locations[i], &locations[j]))
}
