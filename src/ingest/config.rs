// src/ingest/config.rs
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ingest::types::FeedSource;

const ENV_PATH: &str = "FEED_CATALOG_PATH";

/// The feed catalog: which RSS sources to pull, grouped by refresh stage.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FeedCatalog {
    #[serde(default)]
    pub politics: Vec<FeedSource>,
    #[serde(default)]
    pub tech: Vec<FeedSource>,
    #[serde(default)]
    pub finance: Vec<FeedSource>,
    #[serde(default)]
    pub gov: Vec<FeedSource>,
    #[serde(default)]
    pub intel: Vec<FeedSource>,
    /// GeoJSON earthquake feed; omit to skip the quake layer's data.
    #[serde(default)]
    pub quake_feed: Option<String>,
}

impl FeedCatalog {
    /// Load using env var + fallbacks:
    /// 1) $FEED_CATALOG_PATH
    /// 2) config/feeds.toml
    /// 3) built-in seed
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!("FEED_CATALOG_PATH points to non-existent path"));
        }
        let toml_p = PathBuf::from("config/feeds.toml");
        if toml_p.exists() {
            return Self::load_from(&toml_p);
        }
        Ok(Self::default_seed())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading feed catalog from {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Built-in catalog mirroring the dashboard's stock sources.
    pub fn default_seed() -> Self {
        fn src(name: &str, url: &str) -> FeedSource {
            FeedSource {
                name: name.to_string(),
                url: url.to_string(),
            }
        }
        Self {
            quake_feed: Some(crate::ingest::providers::usgs::USGS_FEED_URL.to_string()),
            politics: vec![
                src("BBC World", "https://feeds.bbci.co.uk/news/world/rss.xml"),
                src("NPR News", "https://feeds.npr.org/1001/rss.xml"),
                src("Guardian World", "https://www.theguardian.com/world/rss"),
                src("Al Jazeera", "https://www.aljazeera.com/xml/rss/all.xml"),
            ],
            tech: vec![
                src("Hacker News", "https://hnrss.org/frontpage"),
                src(
                    "Ars Technica",
                    "https://feeds.arstechnica.com/arstechnica/technology-lab",
                ),
                src("The Verge", "https://www.theverge.com/rss/index.xml"),
                src("MIT Tech Review", "https://www.technologyreview.com/feed/"),
                src("TechCrunch", "https://techcrunch.com/feed/"),
            ],
            finance: vec![
                src("Bloomberg", "https://feeds.bloomberg.com/markets/news.rss"),
                src(
                    "MarketWatch",
                    "https://feeds.marketwatch.com/marketwatch/topstories",
                ),
                src("Yahoo Finance", "https://finance.yahoo.com/news/rssindex"),
                src("Investing.com", "https://www.investing.com/rss/news.rss"),
                src(
                    "Seeking Alpha",
                    "https://seekingalpha.com/market_currents.xml",
                ),
            ],
            gov: vec![
                src(
                    "Federal Reserve",
                    "https://www.federalreserve.gov/feeds/press_all.xml",
                ),
                src(
                    "SEC Announcements",
                    "https://www.sec.gov/news/pressreleases.rss",
                ),
                src(
                    "State Dept",
                    "https://www.state.gov/rss-feed/press-releases/feed/",
                ),
                src(
                    "DoD News",
                    "https://www.defense.gov/DesktopModules/ArticleCS/RSS.ashx?max=10&ContentType=1&Site=945",
                ),
            ],
            intel: vec![
                src("CSIS", "https://www.csis.org/analysis/feed"),
                src("Brookings", "https://www.brookings.edu/feed/"),
                src("CFR", "https://www.cfr.org/rss.xml"),
                src("Defense One", "https://www.defenseone.com/rss/all/"),
                src("War on Rocks", "https://warontherocks.com/feed/"),
                src("Breaking Defense", "https://breakingdefense.com/feed/"),
                src("The Diplomat", "https://thediplomat.com/feed/"),
                src("Al-Monitor", "https://www.al-monitor.com/rss"),
                src("Bellingcat", "https://www.bellingcat.com/feed/"),
                src("CISA Alerts", "https://www.cisa.gov/uscert/ncas/alerts.xml"),
                src("Krebs Security", "https://krebsonsecurity.com/feed/"),
            ],
        }
    }
}
