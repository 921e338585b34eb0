//! Location data model.
//!
//! A `Location` is one pinned place on the life map. It is created once from a
//! validated `LocationDraft`, never edited afterwards, and removed wholesale.
//!
//! # Invariants
//! - `id` is a v4 UUID assigned at creation and never reused.
//! - `latitude`/`longitude` are finite and within range for every `Location`.
//! - `created_at` is assigned at creation and marks insertion order.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AtlasError, Result};
use crate::Coordinate;

/// Stable identifier for a pinned location.
pub type LocationId = Uuid;

/// What a location means in the user's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationCategory {
    Born,
    Lived,
    Traveled,
    Studied,
    Other,
}

impl LocationCategory {
    /// Every category in display order.
    pub const ALL: [LocationCategory; 5] = [
        LocationCategory::Born,
        LocationCategory::Lived,
        LocationCategory::Traveled,
        LocationCategory::Studied,
        LocationCategory::Other,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            LocationCategory::Born => "Born",
            LocationCategory::Lived => "Lived",
            LocationCategory::Traveled => "Traveled",
            LocationCategory::Studied => "Studied",
            LocationCategory::Other => "Other",
        }
    }

    /// Marker icon shown on the map and timeline.
    pub fn icon(&self) -> &'static str {
        match self {
            LocationCategory::Born => "🏡",
            LocationCategory::Lived => "🏠",
            LocationCategory::Traveled => "✈️",
            LocationCategory::Studied => "🎓",
            LocationCategory::Other => "📍",
        }
    }

    /// Marker colour as a hex RGB string.
    pub fn color(&self) -> &'static str {
        match self {
            LocationCategory::Born => "#ef4444",
            LocationCategory::Lived => "#3b82f6",
            LocationCategory::Traveled => "#10b981",
            LocationCategory::Studied => "#f59e0b",
            LocationCategory::Other => "#8b5cf6",
        }
    }
}

/// Caller-supplied fields for a new location.
///
/// Everything except the identity and creation timestamp, which the core
/// assigns. Call [`LocationDraft::validate`] (or let [`Location::new`] do it)
/// before the draft reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDraft {
    pub name: String,
    pub category: LocationCategory,
    pub latitude: f64,
    pub longitude: f64,
    /// When this happened in the user's life
    pub date: Option<NaiveDate>,
    pub note: Option<String>,
    /// Free-form image reference (URL or data URI), not validated
    pub image: Option<String>,
}

impl LocationDraft {
    /// Create a draft with the required fields and no annotations.
    pub fn new(
        name: impl Into<String>,
        category: LocationCategory,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            latitude,
            longitude,
            date: None,
            note: None,
            image: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Position of this draft.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Check the creation preconditions.
    ///
    /// # Errors
    /// - `EmptyName` when the name is empty after trimming.
    /// - `InvalidLatitude` / `InvalidLongitude` for non-finite or
    ///   out-of-range coordinates.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AtlasError::EmptyName);
        }
        let coord = self.coordinate();
        if !coord.has_valid_latitude() {
            return Err(AtlasError::InvalidLatitude(self.latitude));
        }
        if !coord.has_valid_longitude() {
            return Err(AtlasError::InvalidLongitude(self.longitude));
        }
        Ok(())
    }
}

/// One pinned place on the life map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub category: LocationCategory,
    pub latitude: f64,
    pub longitude: f64,
    pub date: Option<NaiveDate>,
    pub note: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Location {
    /// Create a location from a draft with a fresh id and the current time.
    pub fn new(draft: LocationDraft) -> Result<Self> {
        Self::with_id(Uuid::new_v4(), draft, Utc::now())
    }

    /// Create a location with caller-provided identity and creation time.
    ///
    /// Used where identity already exists (fixtures, replayed sessions).
    /// The draft is validated the same way as in [`Location::new`].
    pub fn with_id(id: LocationId, draft: LocationDraft, created_at: DateTime<Utc>) -> Result<Self> {
        draft.validate()?;
        Ok(Self {
            id,
            name: draft.name,
            category: draft.category,
            latitude: draft.latitude,
            longitude: draft.longitude,
            date: draft.date,
            note: draft.note,
            image: draft.image,
            created_at,
        })
    }

    /// Position of this location.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Ordering key for the travelled path: the life `date` (at midnight UTC)
    /// when set, otherwise `created_at`.
    pub fn chronological_key(&self) -> DateTime<Utc> {
        self.date
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
            .unwrap_or(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_draft_validation() {
        let ok = LocationDraft::new("Paris", LocationCategory::Traveled, 48.8566, 2.3522);
        assert!(ok.validate().is_ok());

        let blank = LocationDraft::new("   ", LocationCategory::Other, 0.0, 0.0);
        assert_eq!(blank.validate(), Err(AtlasError::EmptyName));

        let north = LocationDraft::new("Nowhere", LocationCategory::Other, 91.0, 0.0);
        assert_eq!(north.validate(), Err(AtlasError::InvalidLatitude(91.0)));

        let east = LocationDraft::new("Nowhere", LocationCategory::Other, 0.0, 181.0);
        assert_eq!(east.validate(), Err(AtlasError::InvalidLongitude(181.0)));
    }

    #[test]
    fn test_zero_coordinates_are_valid() {
        let null_island = LocationDraft::new("Null Island", LocationCategory::Other, 0.0, 0.0);
        assert!(Location::new(null_island).is_ok());
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let draft = LocationDraft::new("Tokyo", LocationCategory::Studied, 35.6762, 139.6503);
        let a = Location::new(draft.clone()).expect("valid draft");
        let b = Location::new(draft).expect("valid draft");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_chronological_key_prefers_date() {
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let date = NaiveDate::from_ymd_opt(1990, 3, 14).unwrap();

        let dated = Location::with_id(
            Uuid::new_v4(),
            LocationDraft::new("Home", LocationCategory::Born, 10.0, 10.0).with_date(date),
            created_at,
        )
        .expect("valid draft");
        assert_eq!(
            dated.chronological_key(),
            Utc.with_ymd_and_hms(1990, 3, 14, 0, 0, 0).unwrap()
        );

        let undated = Location::with_id(
            Uuid::new_v4(),
            LocationDraft::new("Home", LocationCategory::Born, 10.0, 10.0),
            created_at,
        )
        .expect("valid draft");
        assert_eq!(undated.chronological_key(), created_at);
    }

    #[test]
    fn test_serializes_camel_case() {
        let location = Location::with_id(
            Uuid::nil(),
            LocationDraft::new("Lisbon", LocationCategory::Lived, 38.7223, -9.1393)
                .with_note("first flat"),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
        .expect("valid draft");

        let json = serde_json::to_value(&location).expect("serializable");
        assert_eq!(json["category"], "lived");
        assert_eq!(json["note"], "first flat");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_category_metadata() {
        assert_eq!(LocationCategory::ALL.len(), 5);
        assert_eq!(LocationCategory::Lived.label(), "Lived");
        assert_eq!(LocationCategory::Born.color(), "#ef4444");
        for category in LocationCategory::ALL {
            assert!(category.color().starts_with('#'));
            assert!(!category.icon().is_empty());
        }
    }
}
