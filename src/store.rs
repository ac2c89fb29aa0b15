//! File-backed key → JSON document store.
//!
//! Mirrors the origin-scoped storage semantics the front-end relies on:
//! every read tolerates a missing file or malformed JSON by returning the
//! caller's default, and writes never propagate failures; a full disk or
//! read-only volume degrades to in-memory state for the session.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

pub const DEFAULT_STORE_PATH: &str = "data/state.json";

/// UI theme preference; selects the sanction-fill palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    // whole-document read/modify/write; the document is tiny
    cache: Mutex<BTreeMap<String, Value>>,
}

impl JsonStore {
    /// Open a store at `path`, loading whatever parses. Corrupt or missing
    /// content starts the store empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let cache = match fs::read_to_string(&path) {
            Ok(s) => serde_json::from_str::<BTreeMap<String, Value>>(&s).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "state store corrupt, starting empty");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path,
            cache: Mutex::new(cache),
        }
    }

    /// Read a key, falling back to `T::default()` on absence or shape mismatch.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let cache = self.cache.lock().expect("store mutex poisoned");
        cache
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }

    /// Write a key and persist the document. Persistence failures are
    /// logged and swallowed; the in-memory value is still updated.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) {
        let doc = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                warn!(key, error = %e, "unserializable value, skipping persist");
                return;
            }
        };
        let mut cache = self.cache.lock().expect("store mutex poisoned");
        cache.insert(key.to_string(), doc);
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(&*cache) {
            Ok(s) => {
                if let Err(e) = fs::write(&self.path, s) {
                    warn!(path = %self.path.display(), error = %e, "state store write failed");
                }
            }
            Err(e) => warn!(error = %e, "state store serialize failed"),
        }
    }

    pub fn theme(&self) -> Theme {
        self.get_or_default::<Theme>("theme")
    }

    pub fn set_theme(&self, theme: Theme) {
        self.put("theme", &theme);
    }
}
