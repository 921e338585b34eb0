//! Location store flows as driven by the presentation layer.
//!
//! Covers add/select/remove sequences, rejected input, and feeding a
//! geocoding result through the normal add path.

use life_atlas::{
    rank_candidates, AtlasError, Coordinate, GeocodeCandidate, GeocodeConfig, LocationCategory,
    LocationDraft, LocationId, LocationStore, MapView, SearchQuery, SearchSequencer,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_out_of_range_latitude_is_rejected() {
    init_logging();
    let mut store = LocationStore::new();
    store
        .add(LocationDraft::new("Home", LocationCategory::Born, 10.0, 10.0))
        .expect("valid draft");

    let result = store.add(LocationDraft::new("Bad", LocationCategory::Other, 91.0, 0.0));
    assert!(matches!(result, Err(AtlasError::InvalidLatitude(_))));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_remove_missing_id_leaves_state() {
    init_logging();
    let mut store = LocationStore::new();
    let id = store
        .add(LocationDraft::new("Home", LocationCategory::Lived, 10.0, 10.0))
        .expect("valid draft")
        .id;
    let view = store.view();

    assert!(!store.remove(LocationId::new_v4()));
    assert_eq!(store.len(), 1);
    assert_eq!(store.selected().map(|l| l.id), Some(id));
    assert_eq!(store.view(), view);
}

#[test]
fn test_session_flow() {
    init_logging();
    let mut store = LocationStore::new();

    store.set_adding(true);
    let born = store
        .add(
            LocationDraft::new("Lagos", LocationCategory::Born, 6.5244, 3.3792)
                .with_note("hospital on the island"),
        )
        .expect("valid draft")
        .id;
    assert!(!store.is_adding());

    store.set_adding(true);
    let lived = store
        .add(LocationDraft::new("London", LocationCategory::Lived, 51.5074, -0.1278))
        .expect("valid draft")
        .id;
    assert_eq!(store.selected().map(|l| l.id), Some(lived));
    assert_eq!(store.view(), MapView::new(Coordinate::new(51.5074, -0.1278), 10.0));

    store.select(Some(born));
    assert_eq!(store.view().zoom, 12.0);

    let stats = store.stats();
    assert_eq!(stats.total_locations, 2);
    assert_eq!(stats.longest_stay.map(|l| l.id), Some(lived));
    assert_eq!(stats.countries.len(), 2);

    assert!(store.remove(born));
    assert!(store.selected().is_none());

    let json: serde_json::Value = serde_json::from_str(&store.stats_json()).expect("valid json");
    assert_eq!(json["totalLocations"], 1);
    assert_eq!(json["countries"][0], "Europe");
    assert!(json["farthestPair"].is_null());
}

#[test]
fn test_geocoded_result_goes_through_add() {
    init_logging();
    let config = GeocodeConfig::default();
    let mut sequencer = SearchSequencer::new();
    let mut store = LocationStore::new();

    let query = SearchQuery::parse(" kyoto ", &config).expect("long enough");
    assert_eq!(query.as_str(), "kyoto");

    let stale = sequencer.issue();
    let ticket = sequencer.issue();

    let response = vec![
        GeocodeCandidate {
            label: "Kyoto, Kyoto Prefecture, Japan".to_string(),
            latitude: 35.0116,
            longitude: 135.7681,
            relevance: Some(0.8),
        },
        GeocodeCandidate {
            label: "Kyoto Station, Shimogyo Ward".to_string(),
            latitude: 34.9858,
            longitude: 135.7588,
            relevance: Some(0.2),
        },
    ];

    assert!(sequencer.accept(stale, response.clone()).is_none());
    let ranked = rank_candidates(
        sequencer.accept(ticket, response).expect("current ticket"),
        &config,
    );
    assert_eq!(ranked.len(), 1);

    let id = store
        .add(ranked[0].to_draft(LocationCategory::Traveled))
        .expect("valid draft")
        .id;
    let added = store.get(id).expect("stored");
    assert_eq!(added.name, "Kyoto");
    assert_eq!(added.category, LocationCategory::Traveled);
}
