//! Helpers around the external place-search (geocoding) lookup.
//!
//! The lookup itself lives outside this crate. What lives here is the
//! logic a client applies around it:
//! - deciding whether a typed query is worth sending,
//! - ranking and trimming the candidates that come back,
//! - turning a chosen candidate into a `LocationDraft`,
//! - dropping responses superseded by a newer request.
//!
//! The caller owns the debounce timer ([`GeocodeConfig::debounce`]) and the
//! transport; results only ever reach the store through the normal `add`.

use std::cmp::Ordering;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{LocationCategory, LocationDraft};

/// Configuration for place search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeConfig {
    /// Minimum query length (in chars, after trimming) worth sending.
    /// Default: 2
    pub min_query_chars: usize,

    /// Candidates must have relevance strictly above this.
    /// Default: 0.3
    pub min_relevance: f64,

    /// Maximum candidates shown.
    /// Default: 6
    pub max_results: usize,

    /// Quiet period the caller should wait after the last keystroke.
    /// Default: 500ms
    pub debounce: Duration,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            min_query_chars: 2,
            min_relevance: 0.3,
            max_results: 6,
            debounce: Duration::from_millis(500),
        }
    }
}

/// A trimmed search query that passed the length check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim `raw` and accept it if it is long enough to send.
    pub fn parse(raw: &str, config: &GeocodeConfig) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < config.min_query_chars {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One result from the geocoding service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    /// Full display label, e.g. "Paris, Île-de-France, France"
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Service-provided relevance score, higher is better
    pub relevance: Option<f64>,
}

impl GeocodeCandidate {
    /// Short place name: the first comma-separated segment of the label.
    pub fn place_name(&self) -> &str {
        self.label.split(',').next().unwrap_or_default().trim()
    }

    /// Build a location draft from this candidate.
    pub fn to_draft(&self, category: LocationCategory) -> LocationDraft {
        LocationDraft::new(self.place_name(), category, self.latitude, self.longitude)
    }
}

/// Filter and order candidates for display.
///
/// Drops candidates with no relevance or relevance at or below
/// `min_relevance`, sorts by relevance descending (stable), and keeps at
/// most `max_results`.
pub fn rank_candidates(
    candidates: Vec<GeocodeCandidate>,
    config: &GeocodeConfig,
) -> Vec<GeocodeCandidate> {
    let total = candidates.len();
    let mut ranked: Vec<GeocodeCandidate> = candidates
        .into_iter()
        .filter(|c| c.relevance.is_some_and(|r| r > config.min_relevance))
        .collect();

    ranked.sort_by(|a, b| {
        let ra = a.relevance.unwrap_or(0.0);
        let rb = b.relevance.unwrap_or(0.0);
        rb.partial_cmp(&ra).unwrap_or(Ordering::Equal)
    });
    ranked.truncate(config.max_results);

    debug!(
        "[Geocode] Kept {} of {} candidates",
        ranked.len(),
        total
    );
    ranked
}

// ============================================================================
// Request sequencing
// ============================================================================

/// Ticket identifying one issued search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

/// Tracks which search request is the newest.
///
/// A newer request supersedes any in-flight older one: responses for stale
/// tickets are discarded instead of being shown.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    issued: u64,
    current: Option<u64>,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request, superseding all earlier ones.
    pub fn issue(&mut self) -> SearchTicket {
        self.issued += 1;
        self.current = Some(self.issued);
        SearchTicket(self.issued)
    }

    /// Invalidate every outstanding ticket (search closed or cleared).
    pub fn cancel(&mut self) {
        self.current = None;
    }

    /// Whether `ticket` is still the newest live request.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.current == Some(ticket.0)
    }

    /// Pass `results` through only if `ticket` is still current.
    pub fn accept<T>(&self, ticket: SearchTicket, results: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(results)
        } else {
            debug!("[Geocode] Dropping superseded response {:?}", ticket);
            None
        }
    }
}
