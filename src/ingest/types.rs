// src/ingest/types.rs
use anyhow::Result;
use chrono::{DateTime, Utc};

/// One deduplicated, alert-flagged headline. Lifecycle is a single refresh
/// cycle; items are never persisted.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub source: String, // e.g. "BBC World", "Defense One"
    pub title: String,  // normalized headline text
    pub link: String,
    pub published_at: Option<DateTime<Utc>>,
    pub is_alert: bool,
}

/// Earthquake record from the USGS summary feed, kept in feed order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Earthquake {
    pub id: String,
    pub magnitude: f64,
    pub place: String,
    pub time_ms: i64, // epoch millis, as delivered by the feed
    pub lon: f64,
    pub lat: f64,
    pub depth_km: f64,
}

impl Earthquake {
    /// Magnitude threshold for the "major" map styling.
    pub fn is_major(&self) -> bool {
        self.magnitude >= 6.0
    }
}

/// A single RSS source within a category.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

/// Feed categories, fetched in priority stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedCategory {
    Politics,
    Tech,
    Finance,
    Gov,
    Intel,
}

#[async_trait::async_trait]
pub trait FeedProvider: Send + Sync {
    async fn fetch_latest(&self) -> Result<Vec<NewsItem>>;
    fn name(&self) -> &str;
}
