//! # Location Store
//!
//! The single in-memory owner of the pinned locations and the UI state that
//! goes with them: the selected location, the "adding" flag and the map
//! viewport.
//!
//! ## Operations
//!
//! State changes only through `add`, `remove`, `select`, `set_adding` and
//! `set_view`. Each one is synchronous and total, and either applies fully
//! or (for rejected `add` input) leaves the store untouched.
//!
//! Derived statistics are never stored. [`LocationStore::stats`] recomputes
//! them from the current collection on every call.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::timeline_sequence;
use crate::stats::{summarize, LifeStats};
use crate::{Coordinate, Location, LocationDraft, LocationId};

// ============================================================================
// Configuration
// ============================================================================

/// Map viewport: center and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: f64,
}

impl MapView {
    pub fn new(center: Coordinate, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

/// Viewport behaviour of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Viewport of a fresh store.
    /// Default: center (20, 0), zoom 2 (whole world)
    pub initial_view: MapView,

    /// Zoom applied when centering on a newly added location.
    /// Default: 10.0
    pub add_zoom: f64,

    /// Zoom applied when centering on a selected location.
    /// Default: 12.0
    pub select_zoom: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_view: MapView::new(Coordinate::new(20.0, 0.0), 2.0),
            add_zoom: 10.0,
            select_zoom: 12.0,
        }
    }
}

// ============================================================================
// Location Store
// ============================================================================

/// Owner of the location collection plus selection and viewport state.
#[derive(Debug, Clone)]
pub struct LocationStore {
    locations: Vec<Location>,
    // Tracked by id so it can only ever refer to a live entry
    selected: Option<LocationId>,
    is_adding: bool,
    view: MapView,
    config: ViewConfig,
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationStore {
    /// Create an empty store with default view configuration.
    pub fn new() -> Self {
        Self::with_config(ViewConfig::default())
    }

    /// Create an empty store with custom view configuration.
    pub fn with_config(config: ViewConfig) -> Self {
        Self {
            locations: Vec::new(),
            selected: None,
            is_adding: false,
            view: config.initial_view,
            config,
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a location from a draft.
    ///
    /// Assigns a fresh id and creation time, appends it, leaves add mode,
    /// selects it and centers the map on it.
    ///
    /// # Errors
    /// Returns the validation error for an invalid draft. The store is left
    /// exactly as it was.
    pub fn add(&mut self, draft: LocationDraft) -> Result<&Location> {
        let location = Location::new(draft).map_err(|e| {
            warn!("[LocationStore] Rejected location: {}", e);
            e
        })?;

        info!(
            "[LocationStore] Added location {} ({:?})",
            location.id, location.category
        );

        self.view = MapView::new(location.coordinate(), self.config.add_zoom);
        self.selected = Some(location.id);
        self.is_adding = false;
        self.locations.push(location);

        Ok(&self.locations[self.locations.len() - 1])
    }

    /// Remove a location by id.
    ///
    /// Unknown ids are a no-op. Clears the selection if it pointed at the
    /// removed entry. Returns whether anything was removed.
    pub fn remove(&mut self, id: LocationId) -> bool {
        let before = self.locations.len();
        self.locations.retain(|l| l.id != id);
        let removed = self.locations.len() != before;

        if removed {
            if self.selected == Some(id) {
                self.selected = None;
            }
            info!("[LocationStore] Removed location {}", id);
        } else {
            debug!("[LocationStore] Remove ignored, unknown id {}", id);
        }

        removed
    }

    /// Set or clear the selection.
    ///
    /// Selecting a live location centers the map on it. Clearing leaves the
    /// viewport alone. Selecting an unknown id is a no-op.
    pub fn select(&mut self, id: Option<LocationId>) {
        match id {
            Some(id) => {
                let Some(center) = self.get(id).map(|l| l.coordinate()) else {
                    debug!("[LocationStore] Select ignored, unknown id {}", id);
                    return;
                };
                self.selected = Some(id);
                self.view = MapView::new(center, self.config.select_zoom);
            }
            None => self.selected = None,
        }
    }

    /// Enter or leave add mode. Does not touch the collection.
    pub fn set_adding(&mut self, adding: bool) {
        self.is_adding = adding;
    }

    /// Set the map viewport. Does not touch selection.
    pub fn set_view(&mut self, center: Coordinate, zoom: f64) {
        self.view = MapView::new(center, zoom);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All locations in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn selected(&self) -> Option<&Location> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn is_adding(&self) -> bool {
        self.is_adding
    }

    pub fn view(&self) -> MapView {
        self.view
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Life statistics for the current collection, recomputed on every call.
    pub fn stats(&self) -> LifeStats<'_> {
        summarize(&self.locations)
    }

    /// Life statistics as JSON for the presentation layer.
    pub fn stats_json(&self) -> String {
        self.stats().to_json()
    }

    /// Locations in timeline order (creation time only).
    pub fn timeline(&self) -> Vec<&Location> {
        timeline_sequence(&self.locations)
    }
}

// ============================================================================
// Tests
// ============================================================================
