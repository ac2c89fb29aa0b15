//! News Density Estimator: keyword pressure per broad region, feeding the
//! heatmap blob layer.
//!
//! Unlike hotspot scoring, the alert bonus here is unconditional: every
//! alert headline adds +2 to every region, a broad-brush "the world is
//! noisy" signal rather than a per-keyword one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::NewsRegion;
use crate::ingest::types::NewsItem;

const ALERT_BONUS: u32 = 2;

/// Density thresholds differ from entity thresholds: ≥10 high, ≥5 medium.
const DENSITY_HIGH_MIN: u32 = 10;
const DENSITY_MEDIUM_MIN: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityLevel {
    Low,
    Medium,
    High,
}

impl DensityLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= DENSITY_HIGH_MIN {
            DensityLevel::High
        } else if score >= DENSITY_MEDIUM_MIN {
            DensityLevel::Medium
        } else {
            DensityLevel::Low
        }
    }

    /// Blob radius multiplier per level.
    pub fn radius_factor(self) -> f64 {
        match self {
            DensityLevel::High => 1.5,
            DensityLevel::Medium => 1.2,
            DensityLevel::Low => 1.0,
        }
    }
}

/// Raw density score per region id. Every keyword occurrence counts once
/// per item; alert items add the flat bonus whether or not they matched.
pub fn density(regions: &[NewsRegion], corpus: &[NewsItem]) -> HashMap<String, u32> {
    regions
        .iter()
        .map(|region| {
            let mut score = 0u32;
            for item in corpus {
                let lower = item.title.to_lowercase();
                score += region.keywords.iter().filter(|kw| lower.contains(**kw)).count() as u32;
                if item.is_alert {
                    score += ALERT_BONUS;
                }
            }
            (region.id.to_string(), score)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn item(title: &str, is_alert: bool) -> NewsItem {
        NewsItem {
            source: "Test".into(),
            title: title.into(),
            link: String::new(),
            published_at: None,
            is_alert,
        }
    }

    #[test]
    fn density_levels_and_factors() {
        assert_eq!(DensityLevel::from_score(4), DensityLevel::Low);
        assert_eq!(DensityLevel::from_score(5), DensityLevel::Medium);
        assert_eq!(DensityLevel::from_score(9), DensityLevel::Medium);
        assert_eq!(DensityLevel::from_score(10), DensityLevel::High);
        assert!((DensityLevel::High.radius_factor() - 1.5).abs() < f64::EPSILON);
        assert!((DensityLevel::Medium.radius_factor() - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn alert_bonus_applies_without_keyword_match() {
        // one alert item matching no region keywords still bumps every region by 2
        let corpus = vec![item("Hostage situation at undisclosed location", true)];
        let scores = density(catalog::NEWS_REGIONS, &corpus);
        for region in catalog::NEWS_REGIONS {
            assert_eq!(scores[region.id], 2, "region {}", region.id);
        }
    }

    #[test]
    fn scenario_a_europe_density() {
        let corpus = vec![item("Russia masses troops near Ukraine border", true)];
        let scores = density(catalog::NEWS_REGIONS, &corpus);
        let empty = density(catalog::NEWS_REGIONS, &[]);
        // the Russia region matches "russia" plus the +2 alert bonus
        assert_eq!(scores["russia"], 1 + 2);
        // Europe matches no density keyword here but still rises by the bonus
        assert_eq!(scores["europe"], empty["europe"] + 2);
    }

    #[test]
    fn empty_corpus_is_all_zero() {
        let scores = density(catalog::NEWS_REGIONS, &[]);
        assert!(scores.values().all(|&s| s == 0));
    }
}
