//! Monitor Registry: user-defined keyword+location watches.
//!
//! Monitors are the only user-mutable entities on the map. They persist in
//! the JSON state store under `custom_monitors` and are scored alongside
//! built-in hotspots on every refresh.

use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::MONITOR_COLORS;
use crate::geo::Coordinate;
use crate::store::JsonStore;

const STORE_KEY: &str = "custom_monitors";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    pub id: String,
    pub name: String,
    /// Lowercased, trimmed, non-empty.
    pub keywords: Vec<String>,
    pub color: String,
    pub coord: Option<Coordinate>,
    pub created_at: DateTime<Utc>,
}

/// User input for create/update; keywords arrive comma-separated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitorDraft {
    pub name: String,
    pub keywords: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorError {
    Validation(String),
    NotFound(String),
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::Validation(msg) => write!(f, "invalid monitor: {msg}"),
            MonitorError::NotFound(id) => write!(f, "no monitor with id {id}"),
        }
    }
}

impl std::error::Error for MonitorError {}

#[derive(Debug)]
pub struct MonitorRegistry {
    store: Arc<JsonStore>,
    monitors: RwLock<Vec<Monitor>>,
}

impl MonitorRegistry {
    /// Load persisted monitors; corrupt or missing state starts empty.
    pub fn load(store: Arc<JsonStore>) -> Self {
        let monitors: Vec<Monitor> = store.get_or_default(STORE_KEY);
        Self {
            store,
            monitors: RwLock::new(monitors),
        }
    }

    /// Validate a draft and add the monitor. Insertion order is list order.
    pub fn create(&self, draft: &MonitorDraft) -> Result<Monitor, MonitorError> {
        let (name, keywords, color, coord) = validate(draft)?;
        let created_at = Utc::now();
        let monitor = Monitor {
            id: generate_id(&name),
            name,
            keywords,
            color,
            coord,
            created_at,
        };
        let mut guard = self.monitors.write().expect("monitor lock poisoned");
        guard.push(monitor.clone());
        self.persist(&guard);
        Ok(monitor)
    }

    /// Replace an existing monitor's fields; the creation timestamp and id
    /// are preserved.
    pub fn update(&self, id: &str, draft: &MonitorDraft) -> Result<Monitor, MonitorError> {
        let (name, keywords, color, coord) = validate(draft)?;
        let mut guard = self.monitors.write().expect("monitor lock poisoned");
        let slot = guard
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| MonitorError::NotFound(id.to_string()))?;
        slot.name = name;
        slot.keywords = keywords;
        slot.color = color;
        slot.coord = coord;
        let updated = slot.clone();
        self.persist(&guard);
        Ok(updated)
    }

    /// Silent no-op when the id is absent; the UI confirms before calling.
    pub fn delete(&self, id: &str) {
        let mut guard = self.monitors.write().expect("monitor lock poisoned");
        let before = guard.len();
        guard.retain(|m| m.id != id);
        if guard.len() != before {
            self.persist(&guard);
        }
    }

    pub fn list(&self) -> Vec<Monitor> {
        self.monitors.read().expect("monitor lock poisoned").clone()
    }

    fn persist(&self, monitors: &[Monitor]) {
        self.store.put(STORE_KEY, &monitors.to_vec());
    }
}

fn validate(
    draft: &MonitorDraft,
) -> Result<(String, Vec<String>, String, Option<Coordinate>), MonitorError> {
    let name = draft.name.trim().to_string();
    if name.is_empty() {
        return Err(MonitorError::Validation("name must not be empty".into()));
    }

    let keywords: Vec<String> = draft
        .keywords
        .split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return Err(MonitorError::Validation(
            "at least one keyword is required".into(),
        ));
    }

    let color = draft
        .color
        .clone()
        .unwrap_or_else(|| MONITOR_COLORS[0].to_string());

    let coord = match (draft.lat, draft.lon) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
            Some(Coordinate::new(lat, lon))
        }
        _ => None,
    };

    Ok((name, keywords, color, coord))
}

fn generate_id(name: &str) -> String {
    use sha2::{Digest, Sha256};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(nanos.to_le_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(8 + 12);
    out.push_str("monitor_");
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> (tempfile::TempDir, MonitorRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path().join("state.json")));
        (dir, MonitorRegistry::load(store))
    }

    fn draft(name: &str, keywords: &str) -> MonitorDraft {
        MonitorDraft {
            name: name.into(),
            keywords: keywords.into(),
            color: None,
            lat: None,
            lon: None,
        }
    }

    #[test]
    fn create_then_list_round_trips() {
        let (_dir, reg) = registry();
        let created = reg
            .create(&MonitorDraft {
                name: "Baltic Watch".into(),
                keywords: "Kaliningrad, BALTIC , gotland".into(),
                color: Some("#ff6600".into()),
                lat: Some(55.0),
                lon: Some(19.0),
            })
            .unwrap();

        let listed = reg.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
        assert_eq!(listed[0].keywords, vec!["kaliningrad", "baltic", "gotland"]);
        assert!(listed[0].id.starts_with("monitor_"));
    }

    #[test]
    fn empty_name_is_rejected_and_not_listed() {
        let (_dir, reg) = registry();
        let err = reg.create(&draft("", "russia")).unwrap_err();
        assert!(matches!(err, MonitorError::Validation(_)));
        assert!(reg.list().is_empty());
    }

    #[test]
    fn keywords_empty_after_trim_are_rejected() {
        let (_dir, reg) = registry();
        let err = reg.create(&draft("Watch", " , ,, ")).unwrap_err();
        assert!(matches!(err, MonitorError::Validation(_)));
    }

    #[test]
    fn update_preserves_created_at_and_id() {
        let (_dir, reg) = registry();
        let m = reg.create(&draft("Watch", "alpha")).unwrap();
        let updated = reg.update(&m.id, &draft("Watch v2", "beta,gamma")).unwrap();
        assert_eq!(updated.id, m.id);
        assert_eq!(updated.created_at, m.created_at);
        assert_eq!(updated.name, "Watch v2");
        assert_eq!(updated.keywords, vec!["beta", "gamma"]);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let (_dir, reg) = registry();
        let err = reg.update("monitor_missing", &draft("X", "y")).unwrap_err();
        assert!(matches!(err, MonitorError::NotFound(_)));
    }

    #[test]
    fn delete_is_silent_on_missing_id() {
        let (_dir, reg) = registry();
        reg.delete("monitor_missing");
        let m = reg.create(&draft("Watch", "kw")).unwrap();
        reg.delete(&m.id);
        assert!(reg.list().is_empty());
    }

    #[test]
    fn monitors_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let id = {
            let store = Arc::new(JsonStore::open(&path));
            let reg = MonitorRegistry::load(store);
            reg.create(&draft("Persistent", "kw1,kw2")).unwrap().id
        };
        let store = Arc::new(JsonStore::open(&path));
        let reg = MonitorRegistry::load(store);
        let listed = reg.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
    }

    #[test]
    fn zero_zero_coordinate_is_accepted() {
        let (_dir, reg) = registry();
        let m = reg
            .create(&MonitorDraft {
                name: "Null Island".into(),
                keywords: "gulf of guinea".into(),
                color: None,
                lat: Some(0.0),
                lon: Some(0.0),
            })
            .unwrap();
        assert_eq!(m.coord, Some(Coordinate::new(0.0, 0.0)));
    }
}
