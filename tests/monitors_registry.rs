// tests/monitors_registry.rs
//
// Registry round-trips through the persisted store, validation failures,
// and scoring parity with built-in hotspots.

use std::sync::Arc;

use situation_map::activity;
use situation_map::compose::{compose, MapLayerState};
use situation_map::geo::Viewport;
use situation_map::ingest::types::NewsItem;
use situation_map::keywords;
use situation_map::monitors::{MonitorDraft, MonitorError, MonitorRegistry};
use situation_map::store::{JsonStore, Theme};

fn registry_at(dir: &tempfile::TempDir) -> MonitorRegistry {
    MonitorRegistry::load(Arc::new(JsonStore::open(dir.path().join("state.json"))))
}

fn item(title: &str) -> NewsItem {
    NewsItem {
        source: "Wire".into(),
        title: title.into(),
        link: "https://example.com".into(),
        published_at: None,
        is_alert: keywords::is_alert(title),
    }
}

#[test]
fn create_list_round_trip_preserves_fields() {
    let dir = tempfile::tempdir().unwrap();
    let reg = registry_at(&dir);

    let created = reg
        .create(&MonitorDraft {
            name: "Sahel Watch".into(),
            keywords: "sahel, Mali, niger".into(),
            color: Some("#ffcc00".into()),
            lat: Some(16.0),
            lon: Some(-2.0),
        })
        .unwrap();

    let listed = reg.list();
    assert_eq!(listed.len(), 1);
    let m = &listed[0];
    assert_eq!(m.name, "Sahel Watch");
    assert_eq!(m.keywords, vec!["sahel", "mali", "niger"]);
    assert_eq!(m.color, "#ffcc00");
    assert_eq!(m.coord, created.coord);
    assert_eq!(m.id, created.id);
    assert_eq!(m.created_at, created.created_at);
}

#[test]
fn unnamed_monitor_is_rejected_and_absent() {
    let dir = tempfile::tempdir().unwrap();
    let reg = registry_at(&dir);
    let err = reg
        .create(&MonitorDraft {
            name: "".into(),
            keywords: "anything".into(),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, MonitorError::Validation(_)));
    assert!(reg.list().is_empty());
}

#[test]
fn corrupt_store_starts_empty_not_crashing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{\"custom_monitors\": \"not-a-list\"}").unwrap();
    let reg = MonitorRegistry::load(Arc::new(JsonStore::open(&path)));
    assert!(reg.list().is_empty());
    // store remains usable afterwards
    reg.create(&MonitorDraft {
        name: "Recovered".into(),
        keywords: "kw".into(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(reg.list().len(), 1);
}

#[test]
fn insertion_order_is_list_order() {
    let dir = tempfile::tempdir().unwrap();
    let reg = registry_at(&dir);
    for name in ["first", "second", "third"] {
        reg.create(&MonitorDraft {
            name: name.into(),
            keywords: "kw".into(),
            ..Default::default()
        })
        .unwrap();
    }
    let names: Vec<String> = reg.list().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn monitor_at_null_island_projects_to_map_center() {
    let dir = tempfile::tempdir().unwrap();
    let reg = registry_at(&dir);
    reg.create(&MonitorDraft {
        name: "Null Island".into(),
        keywords: "buoy".into(),
        color: None,
        lat: Some(0.0),
        lon: Some(0.0),
    })
    .unwrap();

    let (model, _) = compose(
        &[],
        &[],
        &reg.list(),
        MapLayerState::default(),
        Theme::Dark,
        Viewport::new(800.0, 550.0),
    );
    assert_eq!(model.monitors.len(), 1);
    let pos = model.monitors[0].pos;
    assert!((pos.x - 50.0).abs() < 1e-9, "horizontal center");
    assert!((pos.y - 50.0).abs() < 1e-9, "vertical center");
}

#[test]
fn monitors_score_like_hotspots() {
    let dir = tempfile::tempdir().unwrap();
    let reg = registry_at(&dir);
    let m = reg
        .create(&MonitorDraft {
            name: "Border Watch".into(),
            keywords: "russia, ukraine".into(),
            ..Default::default()
        })
        .unwrap();

    let corpus = vec![item("Russia masses troops near Ukraine border")];
    let results = activity::score_monitors(&reg.list(), &corpus);
    let r = &results[&m.id];
    // two keyword hits plus the alert bonus, same policy as hotspots
    assert_eq!(r.score, 5);
    assert_eq!(r.evidence.len(), 1);
}
