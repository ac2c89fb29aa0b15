// src/ingest/mod.rs
pub mod config;
pub mod fetch;
pub mod providers;
pub mod scheduler;
pub mod types;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge};
use once_cell::sync::OnceCell;
use reqwest::Client;
use tokio::task::JoinSet;

use crate::ingest::providers::rss::RssFeedProvider;
use crate::ingest::types::{FeedProvider, FeedSource, NewsItem};

/// Hard cap on the scoring corpus; the map scorers are O(entities × corpus).
pub const CORPUS_CAP: usize = 90;

/// Titles at or above this normalized similarity are treated as duplicates
/// (same story syndicated across outlets).
const NEAR_DUP_THRESHOLD: f64 = 0.9;

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("feed_items_total", "Total items parsed from feeds.");
        describe_counter!("feed_errors_total", "Feed fetch/parse errors.");
        describe_counter!(
            "corpus_dedup_total",
            "Items removed as near-duplicate headlines."
        );
        describe_counter!("refresh_cycles_total", "Completed staged refresh cycles.");
        describe_histogram!("feed_parse_ms", "Feed parse time in milliseconds.");
        describe_gauge!("corpus_size", "Headlines in the current scoring corpus.");
    });
}

/// Normalize a headline: decode entities, strip tags, unify quotes,
/// collapse whitespace, drop trailing sentence punctuation, cap length.
pub fn normalize_title(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, "").to_string();

    out = out
        .replace(['\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");

    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();
    out = out.trim().to_string();

    while let Some(last) = out.chars().last() {
        if matches!(last, '!' | '?' | '.' | ',') {
            out.pop();
        } else {
            break;
        }
    }

    if out.chars().count() > 300 {
        out = out.chars().take(300).collect();
    }

    out
}

fn is_near_duplicate(a: &str, b: &str) -> bool {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()) >= NEAR_DUP_THRESHOLD
}

/// Assemble the scoring corpus from raw per-feed results:
/// drop near-duplicate headlines (first occurrence wins), order alert-first
/// then recency-descending, cap at `cap` items.
pub fn assemble_corpus(raw: Vec<NewsItem>, cap: usize) -> Vec<NewsItem> {
    let mut kept: Vec<NewsItem> = Vec::with_capacity(raw.len());
    let mut dedup_out = 0usize;

    for item in raw {
        if item.title.is_empty() {
            continue;
        }
        if kept.iter().any(|k| is_near_duplicate(&k.title, &item.title)) {
            dedup_out += 1;
            continue;
        }
        kept.push(item);
    }

    // alert-first, then newest-first; undated items sink within their band
    kept.sort_by(|a, b| {
        b.is_alert
            .cmp(&a.is_alert)
            .then_with(|| b.published_at.cmp(&a.published_at))
    });
    kept.truncate(cap);

    counter!("corpus_dedup_total").increment(dedup_out as u64);
    gauge!("corpus_size").set(kept.len() as f64);

    kept
}

/// Fetch every source of one category concurrently. A failing source logs,
/// bumps the error counter, and contributes nothing; feed order of the
/// catalog is preserved in the output.
pub async fn fetch_category(client: &Client, sources: &[FeedSource]) -> Vec<NewsItem> {
    ensure_metrics_described();

    let mut set = JoinSet::new();
    for (idx, source) in sources.iter().cloned().enumerate() {
        let provider = RssFeedProvider::new(source, client.clone());
        set.spawn(async move { (idx, provider.fetch_latest().await, provider.name().to_string()) });
    }

    let mut slots: Vec<Vec<NewsItem>> = vec![Vec::new(); sources.len()];
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, Ok(items), _)) => slots[idx] = items,
            Ok((idx, Err(e), name)) => {
                tracing::warn!(provider = name.as_str(), error = ?e, "feed error");
                counter!("feed_errors_total").increment(1);
                slots[idx] = Vec::new();
            }
            Err(e) => tracing::warn!(error = ?e, "feed task panicked"),
        }
    }

    slots.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(title: &str, is_alert: bool, ts: Option<i64>) -> NewsItem {
        NewsItem {
            source: "Test".into(),
            title: title.into(),
            link: String::new(),
            published_at: ts.and_then(|t| Utc.timestamp_opt(t, 0).single()),
            is_alert,
        }
    }

    #[test]
    fn normalize_title_collapses_ws_and_punct() {
        let s = "  Breaking:&nbsp;&nbsp; markets slide!!!  ";
        assert_eq!(normalize_title(s), "Breaking: markets slide");
    }

    #[test]
    fn normalize_title_strips_tags() {
        assert_eq!(
            normalize_title("<b>Ceasefire</b> talks <i>resume</i>"),
            "Ceasefire talks resume"
        );
    }

    #[test]
    fn corpus_is_alert_first_then_recent() {
        let raw = vec![
            item("quiet story", false, Some(2_000)),
            item("missile strike reported", true, Some(1_000)),
            item("another calm item", false, Some(3_000)),
            item("war update from the front", true, Some(1_500)),
        ];
        let corpus = assemble_corpus(raw, 10);
        let titles: Vec<_> = corpus.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "war update from the front",
                "missile strike reported",
                "another calm item",
                "quiet story",
            ]
        );
    }

    #[test]
    fn near_duplicates_are_dropped_first_wins() {
        let raw = vec![
            item("Russia masses troops near Ukraine border", true, Some(10)),
            item("Russia masses troops near Ukraine border.", true, Some(20)),
            item("Completely different headline", false, Some(30)),
        ];
        let corpus = assemble_corpus(raw, 10);
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn corpus_is_capped() {
        let raw = (0..200)
            .map(|i| item(&format!("unique headline number {i} with padding"), false, Some(i)))
            .collect();
        let corpus = assemble_corpus(raw, CORPUS_CAP);
        assert_eq!(corpus.len(), CORPUS_CAP);
    }
}
