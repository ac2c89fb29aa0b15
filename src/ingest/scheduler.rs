// src/ingest/scheduler.rs
//! Staged refresh: critical news first, secondary data second, intel last.
//!
//! Within a stage every fetch runs concurrently and independently; one
//! failing source never blocks or cancels its siblings. A stage starts only
//! after the previous stage has fully settled. Nothing is cancellable once
//! started, and a new cycle does not abort an in-flight one; the periodic
//! interval comfortably exceeds worst-case fetch latency but overlap is
//! tolerated, not prevented.

use std::sync::Arc;

use metrics::counter;
use reqwest::Client;
use tokio::task::JoinHandle;

use crate::ingest::config::FeedCatalog;
use crate::ingest::providers::usgs;
use crate::ingest::types::{Earthquake, NewsItem};
use crate::ingest::{assemble_corpus, fetch_category, CORPUS_CAP};

/// Auto-refresh period; the dashboard polls every five minutes.
pub const REFRESH_INTERVAL_SECS: u64 = 5 * 60;

/// Everything one refresh cycle produces.
#[derive(Debug, Clone, Default)]
pub struct RefreshData {
    /// Deduplicated, alert-first scoring corpus (politics/tech/finance/gov).
    pub corpus: Vec<NewsItem>,
    pub earthquakes: Vec<Earthquake>,
    /// Intel-source headlines, kept out of the scoring corpus.
    pub intel: Vec<NewsItem>,
}

/// Run the three fetch stages once. Never fails: every operation degrades
/// to an empty result on its own.
pub async fn run_stages(client: &Client, catalog: &FeedCatalog) -> RefreshData {
    // Stage 1: critical news categories
    let (politics, tech, finance) = tokio::join!(
        fetch_category(client, &catalog.politics),
        fetch_category(client, &catalog.tech),
        fetch_category(client, &catalog.finance),
    );
    tracing::info!(
        target: "refresh",
        politics = politics.len(),
        tech = tech.len(),
        finance = finance.len(),
        "stage 1 settled"
    );

    // Stage 2: secondary data (government feeds + earthquakes)
    let (gov, earthquakes) = tokio::join!(fetch_category(client, &catalog.gov), async {
        let Some(url) = catalog.quake_feed.as_deref() else {
            return Vec::new();
        };
        match usgs::fetch_earthquakes(client, url).await {
            Ok(quakes) => quakes,
            Err(e) => {
                tracing::warn!(target: "refresh", error = ?e, "earthquake feed error");
                counter!("feed_errors_total").increment(1);
                Vec::new()
            }
        }
    });
    tracing::info!(
        target: "refresh",
        gov = gov.len(),
        earthquakes = earthquakes.len(),
        "stage 2 settled"
    );

    // Stage 3: auxiliary intel sources, lowest priority
    let intel_raw = fetch_category(client, &catalog.intel).await;
    tracing::info!(target: "refresh", intel = intel_raw.len(), "stage 3 settled");

    let mut raw = politics;
    raw.extend(tech);
    raw.extend(finance);
    raw.extend(gov);

    let data = RefreshData {
        corpus: assemble_corpus(raw, CORPUS_CAP),
        earthquakes,
        intel: assemble_corpus(intel_raw, CORPUS_CAP),
    };
    counter!("refresh_cycles_total").increment(1);
    data
}

/// Spawn the periodic refresh loop. The first tick fires immediately, so
/// startup gets data without waiting a full period.
pub fn spawn_refresh_loop(state: Arc<crate::api::AppState>, interval_secs: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
        loop {
            ticker.tick().await;
            let summary = crate::api::run_refresh(&state).await;
            tracing::info!(
                target: "refresh",
                corpus = summary.corpus_items,
                earthquakes = summary.earthquakes,
                intel = summary.intel_items,
                "refresh cycle complete"
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // run_stages against an empty catalog exercises the stage plumbing
    // without any network access.
    #[tokio::test]
    async fn empty_catalog_yields_empty_data() {
        let catalog = FeedCatalog {
            politics: Vec::new(),
            tech: Vec::new(),
            finance: Vec::new(),
            gov: Vec::new(),
            intel: Vec::new(),
            quake_feed: None,
        };
        let client = Client::new();
        let data = run_stages(&client, &catalog).await;
        assert!(data.corpus.is_empty());
        assert!(data.earthquakes.is_empty());
        assert!(data.intel.is_empty());
    }
}
