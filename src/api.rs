//! HTTP surface for the dashboard front-end.
//!
//! The front-end is plain presentation: it polls the overlay model, asks
//! for popups by entity id, toggles layers, and drives zoom/pan. All state
//! lives here; handlers mutate it only between await points, so plain
//! `std::sync` locks are enough.

use std::sync::{Arc, RwLock};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::activity::{self, Evidence};
use crate::compose::{MapLayerState, MapSession, OverlayModel, PlacedPopup};
use crate::geo::Viewport;
use crate::ingest::config::FeedCatalog;
use crate::ingest::scheduler;
use crate::ingest::types::NewsItem;
use crate::keywords;
use crate::monitors::{Monitor, MonitorDraft, MonitorError, MonitorRegistry};
use crate::store::{JsonStore, Theme};

/// Default container size until the front-end reports its real one.
const DEFAULT_VIEWPORT: Viewport = Viewport::new(800.0, 550.0);

/// Headlines shown per monitor in the panel listing.
const PANEL_MATCH_CAP: usize = 10;

pub struct AppState {
    pub client: reqwest::Client,
    pub feeds: FeedCatalog,
    pub store: Arc<JsonStore>,
    pub registry: MonitorRegistry,
    pub session: RwLock<MapSession>,
    corpus: RwLock<Vec<NewsItem>>,
    intel: RwLock<Vec<IntelItem>>,
    last_refresh: RwLock<Option<DateTime<Utc>>>,
}

impl AppState {
    pub fn new(feeds: FeedCatalog, store: Arc<JsonStore>) -> Self {
        let theme = store.theme();
        let registry = MonitorRegistry::load(store.clone());
        Self {
            client: reqwest::Client::new(),
            feeds,
            store,
            registry,
            session: RwLock::new(MapSession::new(DEFAULT_VIEWPORT, theme)),
            corpus: RwLock::new(Vec::new()),
            intel: RwLock::new(Vec::new()),
            last_refresh: RwLock::new(None),
        }
    }

    /// Install already-fetched data (fixtures, offline runs) exactly as a
    /// network refresh would.
    pub fn install_data(
        &self,
        corpus: Vec<NewsItem>,
        earthquakes: Vec<crate::ingest::types::Earthquake>,
        intel: Vec<NewsItem>,
    ) {
        let monitors = self.registry.list();
        *self.corpus.write().expect("corpus lock poisoned") = corpus.clone();
        *self.intel.write().expect("intel lock poisoned") =
            intel.iter().map(IntelItem::tag).collect();
        self.session_write().update_data(corpus, earthquakes, monitors);
        *self.last_refresh.write().expect("refresh lock poisoned") = Some(Utc::now());
    }

    fn session_write(&self) -> std::sync::RwLockWriteGuard<'_, MapSession> {
        self.session.write().expect("session lock poisoned")
    }

    fn session_read(&self) -> std::sync::RwLockReadGuard<'_, MapSession> {
        self.session.read().expect("session lock poisoned")
    }
}

/// A tagged intel headline for the intel panel.
#[derive(Debug, Clone, Serialize)]
pub struct IntelItem {
    pub source: String,
    pub title: String,
    pub link: String,
    pub is_alert: bool,
    pub regions: Vec<&'static str>,
    pub topics: Vec<&'static str>,
}

impl IntelItem {
    fn tag(item: &NewsItem) -> Self {
        Self {
            source: item.source.clone(),
            title: item.title.clone(),
            link: item.link.clone(),
            is_alert: item.is_alert,
            regions: keywords::region_tags(&item.title),
            topics: keywords::topic_tags(&item.title),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RefreshSummary {
    pub corpus_items: usize,
    pub earthquakes: usize,
    pub intel_items: usize,
}

/// Run one staged refresh and install the results into the session.
pub async fn run_refresh(state: &AppState) -> RefreshSummary {
    let data = scheduler::run_stages(&state.client, &state.feeds).await;
    let summary = RefreshSummary {
        corpus_items: data.corpus.len(),
        earthquakes: data.earthquakes.len(),
        intel_items: data.intel.len(),
    };
    state.install_data(data.corpus, data.earthquakes, data.intel);
    summary
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/map", get(map_model))
        .route("/map/layers", get(map_layers))
        .route("/map/layers/{name}", post(toggle_layer))
        .route("/map/view/{op}", post(view_op))
        .route("/map/view/pan", put(view_pan))
        .route("/map/resize", post(map_resize))
        .route("/map/popup/{id}", get(open_popup))
        .route("/map/popup", delete(close_popup))
        .route("/monitors", get(list_monitors).post(create_monitor))
        .route("/monitors/matches", get(monitor_panel))
        .route("/monitors/{id}", put(update_monitor).delete(delete_monitor))
        .route("/intel", get(intel_feed))
        .route("/theme/{theme}", post(set_theme))
        .route("/refresh", post(manual_refresh))
        .route("/status", get(status))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn map_model(
    State(state): State<Arc<AppState>>,
) -> Result<Json<OverlayModel>, (StatusCode, String)> {
    let session = state.session_read();
    match session.model() {
        Some(model) => Ok(Json(model.clone())),
        None => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "no data yet; refresh pending".to_string(),
        )),
    }
}

async fn map_layers(State(state): State<Arc<AppState>>) -> Json<MapLayerState> {
    Json(state.session_read().layers())
}

async fn toggle_layer(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<MapLayerState>, (StatusCode, String)> {
    match state.session_write().toggle_layer(&name) {
        Some(layers) => Ok(Json(layers)),
        None => Err((StatusCode::NOT_FOUND, format!("unknown layer {name}"))),
    }
}

#[derive(Debug, Serialize)]
struct ViewInfo {
    zoom: f32,
    pan: (f32, f32),
    pannable: bool,
    transform: String,
    label: String,
}

fn view_info(session: &MapSession) -> ViewInfo {
    ViewInfo {
        zoom: session.view.zoom,
        pan: session.view.pan,
        pannable: session.view.pannable(),
        transform: session.view.transform(),
        label: session.view.zoom_label(),
    }
}

async fn view_op(
    State(state): State<Arc<AppState>>,
    Path(op): Path<String>,
) -> Result<Json<ViewInfo>, (StatusCode, String)> {
    let mut session = state.session_write();
    match op.as_str() {
        "zoom-in" => session.view.zoom_in(),
        "zoom-out" => session.view.zoom_out(),
        "reset" => session.view.reset(),
        _ => return Err((StatusCode::NOT_FOUND, format!("unknown view op {op}"))),
    }
    Ok(Json(view_info(&session)))
}

#[derive(Debug, Deserialize)]
struct PanParams {
    x: f32,
    y: f32,
}

async fn view_pan(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PanParams>,
) -> Json<ViewInfo> {
    let mut session = state.session_write();
    let viewport = session.viewport();
    session.view.pan_to(params.x, params.y, viewport);
    Json(view_info(&session))
}

#[derive(Debug, Deserialize)]
struct ResizeParams {
    width: f64,
    height: f64,
}

async fn map_resize(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResizeParams>,
) -> Json<Viewport> {
    let mut session = state.session_write();
    session.resize(Viewport::new(params.width, params.height));
    Json(session.viewport())
}

async fn open_popup(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PlacedPopup>, (StatusCode, String)> {
    match state.session_write().open_popup(&id) {
        Some(placed) => Ok(Json(placed)),
        None => Err((StatusCode::NOT_FOUND, format!("no popup for {id}"))),
    }
}

async fn close_popup(State(state): State<Arc<AppState>>) -> StatusCode {
    state.session_write().close_popup();
    StatusCode::NO_CONTENT
}

async fn list_monitors(State(state): State<Arc<AppState>>) -> Json<Vec<Monitor>> {
    Json(state.registry.list())
}

fn monitor_error_response(err: MonitorError) -> (StatusCode, String) {
    match &err {
        MonitorError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        MonitorError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
    }
}

async fn create_monitor(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<MonitorDraft>,
) -> Result<(StatusCode, Json<Monitor>), (StatusCode, String)> {
    let monitor = state
        .registry
        .create(&draft)
        .map_err(monitor_error_response)?;
    state.session_write().set_monitors(state.registry.list());
    Ok((StatusCode::CREATED, Json(monitor)))
}

async fn update_monitor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(draft): Json<MonitorDraft>,
) -> Result<Json<Monitor>, (StatusCode, String)> {
    let monitor = state
        .registry
        .update(&id, &draft)
        .map_err(monitor_error_response)?;
    state.session_write().set_monitors(state.registry.list());
    Ok(Json(monitor))
}

async fn delete_monitor(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> StatusCode {
    state.registry.delete(&id);
    state.session_write().set_monitors(state.registry.list());
    StatusCode::NO_CONTENT
}

#[derive(Debug, Serialize)]
struct MonitorPanelEntry {
    monitor: Monitor,
    match_count: usize,
    matches: Vec<Evidence>,
}

#[derive(Debug, Serialize)]
struct MonitorPanel {
    total_matches: usize,
    entries: Vec<MonitorPanelEntry>,
}

/// The "My Monitors" panel: per-monitor matches against the cached corpus,
/// capped per monitor, with the uncapped total.
async fn monitor_panel(State(state): State<Arc<AppState>>) -> Json<MonitorPanel> {
    let corpus = state.corpus.read().expect("corpus lock poisoned");
    let entries: Vec<MonitorPanelEntry> = state
        .registry
        .list()
        .into_iter()
        .map(|monitor| {
            let matches = activity::monitor_matches(&monitor, &corpus);
            MonitorPanelEntry {
                match_count: matches.len(),
                matches: matches.into_iter().take(PANEL_MATCH_CAP).collect(),
                monitor,
            }
        })
        .collect();
    let total_matches = entries.iter().map(|e| e.match_count).sum();
    Json(MonitorPanel {
        total_matches,
        entries,
    })
}

async fn intel_feed(State(state): State<Arc<AppState>>) -> Json<Vec<IntelItem>> {
    Json(state.intel.read().expect("intel lock poisoned").clone())
}

async fn set_theme(
    State(state): State<Arc<AppState>>,
    Path(theme): Path<String>,
) -> Result<Json<Theme>, (StatusCode, String)> {
    let theme = match theme.as_str() {
        "light" => Theme::Light,
        "dark" => Theme::Dark,
        other => return Err((StatusCode::NOT_FOUND, format!("unknown theme {other}"))),
    };
    state.store.set_theme(theme);
    state.session_write().set_theme(theme);
    Ok(Json(theme))
}

async fn manual_refresh(State(state): State<Arc<AppState>>) -> Json<RefreshSummary> {
    Json(run_refresh(&state).await)
}

#[derive(Debug, Serialize)]
struct StatusInfo {
    last_refresh: Option<DateTime<Utc>>,
    corpus_items: usize,
    monitors: usize,
}

async fn status(State(state): State<Arc<AppState>>) -> Json<StatusInfo> {
    Json(StatusInfo {
        last_refresh: *state.last_refresh.read().expect("refresh lock poisoned"),
        corpus_items: state.corpus.read().expect("corpus lock poisoned").len(),
        monitors: state.registry.list().len(),
    })
}
