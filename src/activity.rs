//! Activity Scorer: turns the news corpus into per-entity relevance.
//!
//! Two scoring policies coexist on purpose and must not be unified:
//! hotspots, monitors, and density regions score additively against fixed
//! thresholds, while chokepoints and conflict zones only carry a binary
//! "any matching headline" alert flag. Unifying them would change what the
//! map shows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Chokepoint, ConflictZone, Hotspot};
use crate::ingest::types::NewsItem;
use crate::keywords;
use crate::monitors::Monitor;

/// Flat score bonus for a matching headline that is also an alert.
const ALERT_BONUS: u32 = 3;

/// Evidence retained per entity.
pub const EVIDENCE_CAP: usize = 5;

/// Additive-score thresholds: ≥8 high, ≥3 medium.
const LEVEL_HIGH_MIN: u32 = 8;
const LEVEL_MEDIUM_MIN: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Pure function of the additive score.
    pub fn from_score(score: u32) -> Self {
        if score >= LEVEL_HIGH_MIN {
            Level::High
        } else if score >= LEVEL_MEDIUM_MIN {
            Level::Medium
        } else {
            Level::Low
        }
    }
}

/// A headline cited as evidence for an entity's activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub source: String,
    pub title: String,
    pub link: String,
    pub is_alert: bool,
}

impl Evidence {
    fn from_item(item: &NewsItem) -> Self {
        Self {
            source: item.source.clone(),
            title: item.title.clone(),
            link: item.link.clone(),
            is_alert: item.is_alert,
        }
    }
}

/// Recomputed every refresh; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityResult {
    pub level: Level,
    pub score: u32,
    /// Up to [`EVIDENCE_CAP`] items, in corpus order.
    pub evidence: Vec<Evidence>,
}

impl Default for ActivityResult {
    fn default() -> Self {
        Self {
            level: Level::Low,
            score: 0,
            evidence: Vec::new(),
        }
    }
}

/// Additive policy shared by hotspots and monitors: per matching item,
/// add the matched-keyword count, plus the alert bonus when flagged.
fn score_additive(keywords_owned: &[String], corpus: &[NewsItem]) -> ActivityResult {
    let mut score = 0u32;
    let mut evidence = Vec::new();

    for item in corpus {
        let matched = keywords::match_owned_keywords(&item.title, keywords_owned);
        if matched.is_empty() {
            continue;
        }
        score += matched.len() as u32;
        if item.is_alert {
            score += ALERT_BONUS;
        }
        if evidence.len() < EVIDENCE_CAP {
            evidence.push(Evidence::from_item(item));
        }
    }

    ActivityResult {
        level: Level::from_score(score),
        score,
        evidence,
    }
}

fn score_static(keywords: &[&str], corpus: &[NewsItem]) -> ActivityResult {
    let owned: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
    score_additive(&owned, corpus)
}

/// Score every built-in hotspot against the corpus.
pub fn score_hotspots(hotspots: &[Hotspot], corpus: &[NewsItem]) -> HashMap<String, ActivityResult> {
    hotspots
        .iter()
        .map(|spot| (spot.id.to_string(), score_static(spot.keywords, corpus)))
        .collect()
}

/// Score custom monitors with the hotspot policy. Monitors without a
/// coordinate are still scored here; the composer just never places them.
pub fn score_monitors(monitors: &[Monitor], corpus: &[NewsItem]) -> HashMap<String, ActivityResult> {
    monitors
        .iter()
        .map(|m| (m.id.clone(), score_additive(&m.keywords, corpus)))
        .collect()
}

/// Presence-based status for a chokepoint: any matching headline raises the
/// alert flag; up to [`EVIDENCE_CAP`] matches are kept in corpus order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceStatus {
    pub alert: bool,
    pub evidence: Vec<Evidence>,
}

fn presence_match(keywords: &[&str], corpus: &[NewsItem]) -> PresenceStatus {
    let evidence: Vec<Evidence> = corpus
        .iter()
        .filter(|item| !keywords::match_keywords(&item.title, keywords).is_empty())
        .take(EVIDENCE_CAP)
        .map(Evidence::from_item)
        .collect();
    PresenceStatus {
        alert: !evidence.is_empty(),
        evidence,
    }
}

pub fn chokepoint_status(cp: &Chokepoint, corpus: &[NewsItem]) -> PresenceStatus {
    presence_match(cp.keywords, corpus)
}

pub fn conflict_headlines(zone: &ConflictZone, corpus: &[NewsItem]) -> PresenceStatus {
    presence_match(zone.keywords, corpus)
}

/// Every matching headline for a monitor, in corpus order. The monitors
/// panel caps what it shows; the full count feeds the map label.
pub fn monitor_matches(monitor: &Monitor, corpus: &[NewsItem]) -> Vec<Evidence> {
    corpus
        .iter()
        .filter(|item| !keywords::match_owned_keywords(&item.title, &monitor.keywords).is_empty())
        .map(Evidence::from_item)
        .collect()
}
