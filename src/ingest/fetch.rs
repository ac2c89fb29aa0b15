// src/ingest/fetch.rs
//! Fetch with a relay fallback chain.
//!
//! The direct URL is tried first, then each configured relay with the
//! target percent-encoded into it. The first non-error response wins.
//! Every feed in the dashboard degrades to empty on failure, so callers
//! treat `AllProxiesFailed` as "no data this cycle", not as fatal.

use std::fmt;

use reqwest::Client;
use tracing::debug;

/// Relay endpoints, tried in order after the direct request.
pub const RELAY_ENDPOINTS: &[&str] = &[
    "https://corsproxy.io/?",
    "https://api.allorigins.win/raw?url=",
];

#[derive(Debug)]
pub struct AllProxiesFailed {
    pub url: String,
}

impl fmt::Display for AllProxiesFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all proxies failed for {}", self.url)
    }
}

impl std::error::Error for AllProxiesFailed {}

/// Percent-encode a URL for embedding as a relay query argument.
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => {
                use std::fmt::Write as _;
                let _ = write!(&mut out, "%{b:02X}");
            }
        }
    }
    out
}

/// Fetch `url` as text: direct first, then each relay. Returns the first
/// 2xx body; `AllProxiesFailed` when everything errored.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AllProxiesFailed> {
    fetch_text_via(client, url, RELAY_ENDPOINTS).await
}

pub async fn fetch_text_via(
    client: &Client,
    url: &str,
    relays: &[&str],
) -> Result<String, AllProxiesFailed> {
    let mut attempts = Vec::with_capacity(1 + relays.len());
    attempts.push(url.to_string());
    for relay in relays {
        attempts.push(format!("{relay}{}", encode_component(url)));
    }

    for attempt in &attempts {
        match client
            .get(attempt)
            .header(
                "Accept",
                "application/rss+xml, application/xml, text/xml, application/json, */*",
            )
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(body) => return Ok(body),
                Err(e) => debug!(url = attempt.as_str(), error = %e, "body read failed"),
            },
            Ok(resp) => {
                debug!(url = attempt.as_str(), status = %resp.status(), "non-2xx, trying next")
            }
            Err(e) => debug!(url = attempt.as_str(), error = %e, "request failed, trying next"),
        }
    }

    Err(AllProxiesFailed {
        url: url.to_string(),
    })
}
