// tests/ingest_corpus.rs
//
// Fixture-driven ingest pipeline: RSS parsing, alert flagging, corpus
// assembly (dedup + alert-first ordering), and USGS parsing.

use situation_map::ingest::providers::rss::{parse_rss, FixtureFeedProvider};
use situation_map::ingest::providers::usgs::parse_usgs;
use situation_map::ingest::types::FeedProvider;
use situation_map::ingest::{assemble_corpus, CORPUS_CAP};

const WORLD_FEED: &str = include_str!("fixtures/world_feed.xml");

#[test]
fn fixture_parses_with_alert_flags() {
    let items = parse_rss("World Feed", WORLD_FEED).unwrap();
    assert_eq!(items.len(), 5);
    assert!(items[0].is_alert, "troops");
    assert!(items[1].is_alert, "attack");
    assert!(!items[3].is_alert, "markets headline is not an alert");
    assert!(items.iter().all(|i| i.published_at.is_some()));
}

#[test]
fn corpus_dedups_syndicated_copy_and_orders_alert_first() {
    let items = parse_rss("World Feed", WORLD_FEED).unwrap();
    let corpus = assemble_corpus(items, CORPUS_CAP);

    // the syndicated jobs-report copy collapses into one
    assert_eq!(corpus.len(), 4);

    // alerts lead, newest first within each band
    assert_eq!(corpus[0].title, "Russia masses troops near Ukraine border");
    assert_eq!(
        corpus[1].title,
        "Houthi attack disrupts Red Sea shipping lane"
    );
    assert!(!corpus[2].is_alert);
    assert!(!corpus[3].is_alert);
    assert!(corpus[2].published_at >= corpus[3].published_at);
}

#[tokio::test]
async fn fixture_provider_feeds_the_pipeline() {
    let provider = FixtureFeedProvider::from_fixture("World Feed", WORLD_FEED);
    let items = provider.fetch_latest().await.unwrap();
    let corpus = assemble_corpus(items, 2);
    assert_eq!(corpus.len(), 2, "cap applies after ordering");
    assert!(corpus.iter().all(|i| i.is_alert));
}

#[test]
fn usgs_fixture_round_trip() {
    let json = r#"{
      "type": "FeatureCollection",
      "features": [
        {"id": "us1", "properties": {"mag": 5.8, "place": "Kuril Islands", "time": 1754450000000},
         "geometry": {"type": "Point", "coordinates": [153.2, 46.5, 35.0]}},
        {"id": "us2", "properties": {"mag": 6.7, "place": "off Honshu", "time": 1754460000000},
         "geometry": {"type": "Point", "coordinates": [142.3, 38.1, 20.0]}}
      ]
    }"#;
    let quakes = parse_usgs(json).unwrap();
    assert_eq!(quakes.len(), 2);
    assert!(!quakes[0].is_major());
    assert!(quakes[1].is_major());
    assert_eq!(quakes[1].place, "off Honshu");
}
