// src/ingest/providers/rss.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use metrics::{counter, histogram};
use quick_xml::de::from_str;
use reqwest::Client;
use serde::Deserialize;
use time::{format_description::well_known::Rfc2822, OffsetDateTime, UtcOffset};

use crate::ingest::fetch::fetch_text;
use crate::ingest::normalize_title;
use crate::ingest::types::{FeedProvider, FeedSource, NewsItem};
use crate::keywords;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

fn parse_rfc2822(ts: &str) -> Option<DateTime<Utc>> {
    OffsetDateTime::parse(ts, &Rfc2822)
        .ok()
        .map(|dt| dt.to_offset(UtcOffset::UTC).unix_timestamp())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
}

/// Parse an RSS document into news items attributed to `source_name`.
/// Items with empty titles after normalization are dropped.
pub fn parse_rss(source_name: &str, xml: &str) -> Result<Vec<NewsItem>> {
    let t0 = std::time::Instant::now();

    let rss: Rss = from_str(xml).with_context(|| format!("parsing rss xml from {source_name}"))?;
    let mut out = Vec::with_capacity(rss.channel.item.len());

    for it in rss.channel.item {
        let title = normalize_title(it.title.as_deref().unwrap_or_default());
        if title.is_empty() {
            continue;
        }
        let is_alert = keywords::is_alert(&title);
        out.push(NewsItem {
            source: source_name.to_string(),
            title,
            link: it.link.unwrap_or_default(),
            published_at: it.pub_date.as_deref().and_then(parse_rfc2822),
            is_alert,
        });
    }

    let ms = t0.elapsed().as_secs_f64() * 1_000.0;
    histogram!("feed_parse_ms").record(ms);
    counter!("feed_items_total").increment(out.len() as u64);

    Ok(out)
}

/// RSS provider for one catalog source, fetched through the relay chain.
pub struct RssFeedProvider {
    source: FeedSource,
    client: Client,
}

impl RssFeedProvider {
    pub fn new(source: FeedSource, client: Client) -> Self {
        Self { source, client }
    }
}

#[async_trait]
impl FeedProvider for RssFeedProvider {
    async fn fetch_latest(&self) -> Result<Vec<NewsItem>> {
        let body = fetch_text(&self.client, &self.source.url).await?;
        parse_rss(&self.source.name, &body)
    }

    fn name(&self) -> &str {
        &self.source.name
    }
}

/// Fixture-backed provider for tests and offline runs.
pub struct FixtureFeedProvider {
    pub source_name: String,
    pub rss_content: String,
}

impl FixtureFeedProvider {
    pub fn from_fixture(source_name: &str, content: &str) -> Self {
        Self {
            source_name: source_name.to_string(),
            rss_content: content.to_string(),
        }
    }
}

#[async_trait]
impl FeedProvider for FixtureFeedProvider {
    async fn fetch_latest(&self) -> Result<Vec<NewsItem>> {
        parse_rss(&self.source_name, &self.rss_content)
    }

    fn name(&self) -> &str {
        &self.source_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
  <title>World Feed</title>
  <item>
    <title>Russia masses troops near Ukraine border</title>
    <link>https://example.com/a</link>
    <pubDate>Mon, 03 Aug 2026 09:15:00 GMT</pubDate>
  </item>
  <item>
    <title>Markets steady ahead of jobs report</title>
    <link>https://example.com/b</link>
    <pubDate>Mon, 03 Aug 2026 08:00:00 GMT</pubDate>
  </item>
  <item>
    <title></title>
    <link>https://example.com/empty</link>
  </item>
</channel></rss>"#;

    #[test]
    fn parses_items_and_flags_alerts() {
        let items = parse_rss("World Feed", SAMPLE).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_alert, "troops headline must be an alert");
        assert!(!items[1].is_alert);
        assert_eq!(items[0].link, "https://example.com/a");
        assert!(items[0].published_at.is_some());
    }

    #[test]
    fn malformed_xml_is_an_error_not_a_panic() {
        assert!(parse_rss("Broken", "<rss><channel><item>").is_err());
    }

    #[tokio::test]
    async fn fixture_provider_round_trip() {
        let p = FixtureFeedProvider::from_fixture("World Feed", SAMPLE);
        let items = p.fetch_latest().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(p.name(), "World Feed");
    }
}
