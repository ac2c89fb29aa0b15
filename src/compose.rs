//! Map Composer: merges static datasets with scored activity into one
//! layered overlay model, and owns the session state the front-end mutates
//! (layer flags, zoom/pan, active popup, cached refresh data).
//!
//! Composition is deterministic for fixed inputs with one deliberate
//! exception: the cyber-region "active" flag is a randomly sampled
//! placeholder signal, re-drawn on every composition. It is not derived
//! from news and must not be read as a real threat indicator.

use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;

use crate::activity::{self, Level};
use crate::catalog::{self, BaseAffiliation, Intensity, NuclearKind, SanctionTier};
use crate::density::{self, DensityLevel};
use crate::geo::{Projection, ScreenPercent, ScreenPx, Viewport};
use crate::ingest::types::{Earthquake, NewsItem};
use crate::monitors::Monitor;
use crate::popup::{place_popup, PopupContent, PopupSize, PopupView};
use crate::store::Theme;
use crate::view::MapView;

/// Earthquake markers shown on the map, in feed order.
const QUAKE_DISPLAY_CAP: usize = 10;

/// Which optional layers render. Resets to defaults on every load; only
/// explicit user toggles mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapLayerState {
    pub conflicts: bool,
    pub bases: bool,
    pub nuclear: bool,
    pub cables: bool,
    pub sanctions: bool,
    pub density: bool,
}

impl Default for MapLayerState {
    fn default() -> Self {
        Self {
            conflicts: true,
            bases: false,
            nuclear: false,
            cables: false,
            sanctions: true,
            density: true,
        }
    }
}

impl MapLayerState {
    /// Flip a layer by name; `None` for an unknown layer.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let slot = match name {
            "conflicts" => &mut self.conflicts,
            "bases" => &mut self.bases,
            "nuclear" => &mut self.nuclear,
            "cables" => &mut self.cables,
            "sanctions" => &mut self.sanctions,
            "density" => &mut self.density,
            _ => return None,
        };
        *slot = !*slot;
        Some(*slot)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictOverlay {
    pub id: String,
    pub name: String,
    pub intensity: Intensity,
    pub ring: Vec<ScreenPx>,
    pub label_pos: ScreenPercent,
    pub alert: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanctionFill {
    pub country_id: u16,
    pub tier: SanctionTier,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityBlob {
    pub id: String,
    pub name: String,
    pub pos: ScreenPercent,
    pub level: DensityLevel,
    pub score: u32,
    pub size_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseMarker {
    pub id: String,
    pub name: String,
    pub pos: ScreenPercent,
    pub affiliation: BaseAffiliation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NuclearMarker {
    pub id: String,
    pub name: String,
    pub pos: ScreenPercent,
    pub kind: NuclearKind,
    pub weapons_related: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CablePath {
    pub id: String,
    pub name: String,
    pub major: bool,
    pub points: Vec<ScreenPx>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CyberMarker {
    pub id: String,
    pub label: String,
    pub pos: ScreenPercent,
    /// Placeholder signal, sampled per composition. Not news-derived.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChokepointMarker {
    pub id: String,
    pub name: String,
    pub pos: ScreenPercent,
    pub alert: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuakeMarker {
    pub id: String,
    pub pos: ScreenPercent,
    pub magnitude: f64,
    pub major: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotMarker {
    pub id: String,
    pub name: String,
    pub subtext: String,
    pub pos: ScreenPercent,
    pub level: Level,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorMarker {
    pub id: String,
    pub name: String,
    pub color: String,
    pub pos: ScreenPercent,
    pub level: Level,
    pub match_count: usize,
}

/// The full layered overlay set for one composition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayModel {
    pub viewport: Viewport,
    pub layers: MapLayerState,
    pub conflicts: Vec<ConflictOverlay>,
    pub sanctions: Vec<SanctionFill>,
    pub density: Vec<DensityBlob>,
    pub bases: Vec<BaseMarker>,
    pub nuclear: Vec<NuclearMarker>,
    pub cables: Vec<CablePath>,
    pub cyber: Vec<CyberMarker>,
    pub chokepoints: Vec<ChokepointMarker>,
    pub quakes: Vec<QuakeMarker>,
    pub hotspots: Vec<HotspotMarker>,
    pub monitors: Vec<MonitorMarker>,
}

/// Compose the overlay model and its popup table from one refresh's data.
pub fn compose(
    corpus: &[NewsItem],
    earthquakes: &[Earthquake],
    monitors: &[Monitor],
    layers: MapLayerState,
    theme: Theme,
    viewport: Viewport,
) -> (OverlayModel, HashMap<String, PopupContent>) {
    let projection = Projection::fit(viewport);
    let mut popups: HashMap<String, PopupContent> = HashMap::new();

    // conflict polygons + labels
    let conflicts = if layers.conflicts {
        catalog::CONFLICT_ZONES
            .iter()
            .map(|zone| {
                let status = activity::conflict_headlines(zone, corpus);
                let overlay = ConflictOverlay {
                    id: zone.id.to_string(),
                    name: zone.name.to_string(),
                    intensity: zone.intensity,
                    ring: projection.project_ring(zone.ring),
                    label_pos: projection.to_percent(zone.label),
                    alert: status.alert,
                };
                popups.insert(zone.id.to_string(), PopupContent::Conflict { zone, status });
                overlay
            })
            .collect()
    } else {
        Vec::new()
    };

    let sanctions = if layers.sanctions {
        catalog::SANCTIONED_COUNTRIES
            .iter()
            .map(|&(country_id, tier)| SanctionFill {
                country_id,
                tier,
                color: tier.fill_color(theme).to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let density = if layers.density {
        let scores = density::density(catalog::NEWS_REGIONS, corpus);
        catalog::NEWS_REGIONS
            .iter()
            .filter_map(|region| {
                let score = scores.get(region.id).copied().unwrap_or(0);
                if score == 0 {
                    return None;
                }
                let level = DensityLevel::from_score(score);
                Some(DensityBlob {
                    id: region.id.to_string(),
                    name: region.name.to_string(),
                    pos: projection.to_percent(region.coord),
                    level,
                    score,
                    size_px: region.radius * level.radius_factor(),
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    let bases = if layers.bases {
        catalog::MILITARY_BASES
            .iter()
            .map(|b| BaseMarker {
                id: b.id.to_string(),
                name: b.name.to_string(),
                pos: projection.to_percent(b.coord),
                affiliation: b.affiliation,
            })
            .collect()
    } else {
        Vec::new()
    };

    let nuclear = if layers.nuclear {
        catalog::NUCLEAR_FACILITIES
            .iter()
            .map(|f| NuclearMarker {
                id: f.id.to_string(),
                name: f.name.to_string(),
                pos: projection.to_percent(f.coord),
                kind: f.kind,
                weapons_related: f.kind.is_weapons_related(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let cables = if layers.cables {
        catalog::CABLE_ROUTES
            .iter()
            .map(|c| CablePath {
                id: c.id.to_string(),
                name: c.name.to_string(),
                major: c.major,
                points: projection.project_ring(c.waypoints),
            })
            .collect()
    } else {
        Vec::new()
    };

    // cyber regions render unconditionally; activity is a sampled placeholder
    let mut rng = rand::rng();
    let cyber = catalog::CYBER_REGIONS
        .iter()
        .map(|region| {
            let active = rng.random_bool(0.4);
            popups.insert(region.id.to_string(), PopupContent::Cyber { region, active });
            CyberMarker {
                id: region.id.to_string(),
                label: region.group.to_string(),
                pos: projection.to_percent(region.coord),
                active,
            }
        })
        .collect();

    let chokepoints = catalog::CHOKEPOINTS
        .iter()
        .map(|point| {
            let status = activity::chokepoint_status(point, corpus);
            let marker = ChokepointMarker {
                id: point.id.to_string(),
                name: point.name.to_string(),
                pos: projection.to_percent(point.coord),
                alert: status.alert,
            };
            popups.insert(point.id.to_string(), PopupContent::Chokepoint { point, status });
            marker
        })
        .collect();

    let quakes = earthquakes
        .iter()
        .take(QUAKE_DISPLAY_CAP)
        .enumerate()
        .map(|(idx, eq)| {
            let id = if eq.id.is_empty() {
                format!("eq_{idx}")
            } else {
                eq.id.clone()
            };
            popups.insert(id.clone(), PopupContent::Quake(eq.clone()));
            QuakeMarker {
                id,
                pos: projection.to_percent(crate::geo::Coordinate::new(eq.lat, eq.lon)),
                magnitude: eq.magnitude,
                major: eq.is_major(),
                label: format!("M{:.1}", eq.magnitude),
            }
        })
        .collect();

    let hotspot_results = activity::score_hotspots(catalog::HOTSPOTS, corpus);
    let hotspots = catalog::HOTSPOTS
        .iter()
        .map(|spot| {
            let activity = hotspot_results
                .get(spot.id)
                .cloned()
                .unwrap_or_default();
            let marker = HotspotMarker {
                id: spot.id.to_string(),
                name: spot.name.to_string(),
                subtext: spot.subtext.to_string(),
                pos: projection.to_percent(spot.coord),
                level: activity.level,
                score: activity.score,
            };
            popups.insert(spot.id.to_string(), PopupContent::Hotspot { spot, activity });
            marker
        })
        .collect();

    let monitor_results = activity::score_monitors(monitors, corpus);
    let monitor_markers = monitors
        .iter()
        .filter_map(|m| {
            // monitors without a coordinate are scored but never placed
            let coord = m.coord?;
            let activity = monitor_results.get(&m.id).cloned().unwrap_or_default();
            let match_count = activity::monitor_matches(m, corpus).len();
            let marker = MonitorMarker {
                id: m.id.clone(),
                name: m.name.clone(),
                color: m.color.clone(),
                pos: projection.to_percent(coord),
                level: activity.level,
                match_count,
            };
            popups.insert(
                m.id.clone(),
                PopupContent::Monitor {
                    monitor: m.clone(),
                    activity,
                },
            );
            Some(marker)
        })
        .collect();

    let model = OverlayModel {
        viewport,
        layers,
        conflicts,
        sanctions,
        density,
        bases,
        nuclear,
        cables,
        cyber,
        chokepoints,
        quakes,
        hotspots,
        monitors: monitor_markers,
    };

    (model, popups)
}

/// A rendered popup plus where to place it inside the container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPopup {
    pub id: String,
    pub view: PopupView,
    pub position: ScreenPx,
    pub size: PopupSize,
}

/// Last refresh's inputs, kept so layer toggles and resizes recompose
/// without touching the network.
#[derive(Debug, Clone, Default)]
struct CachedData {
    corpus: Vec<NewsItem>,
    earthquakes: Vec<Earthquake>,
    monitors: Vec<Monitor>,
}

/// Session state for one rendered map: layer flags, view transform,
/// cached data, composed model, and the single active popup.
#[derive(Debug)]
pub struct MapSession {
    layers: MapLayerState,
    pub view: MapView,
    viewport: Viewport,
    theme: Theme,
    cached: CachedData,
    model: Option<OverlayModel>,
    popups: HashMap<String, PopupContent>,
    active_popup: Option<String>,
}

impl MapSession {
    pub fn new(viewport: Viewport, theme: Theme) -> Self {
        Self {
            layers: MapLayerState::default(),
            view: MapView::default(),
            viewport,
            theme,
            cached: CachedData::default(),
            model: None,
            popups: HashMap::new(),
            active_popup: None,
        }
    }

    pub fn layers(&self) -> MapLayerState {
        self.layers
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn model(&self) -> Option<&OverlayModel> {
        self.model.as_ref()
    }

    /// Install a refresh cycle's data and recompose.
    pub fn update_data(
        &mut self,
        corpus: Vec<NewsItem>,
        earthquakes: Vec<Earthquake>,
        monitors: Vec<Monitor>,
    ) {
        self.cached = CachedData {
            corpus,
            earthquakes,
            monitors,
        };
        self.recompose();
    }

    /// Monitor CRUD changed the registry; recompose against the cached
    /// corpus without refetching anything.
    pub fn set_monitors(&mut self, monitors: Vec<Monitor>) {
        self.cached.monitors = monitors;
        self.recompose();
    }

    /// Flip a layer and recompose from cached data only. `None` for an
    /// unknown layer name.
    pub fn toggle_layer(&mut self, name: &str) -> Option<MapLayerState> {
        self.layers.toggle(name)?;
        self.recompose();
        Some(self.layers)
    }

    /// Container resize: re-project everything at the new dimensions.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.recompose();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.recompose();
    }

    /// Open a popup by entity id, hiding any other. Returns the rendered,
    /// placed popup, anchored at the entity's projected position.
    pub fn open_popup(&mut self, id: &str) -> Option<PlacedPopup> {
        let content = self.popups.get(id)?;
        let anchor = self.popup_anchor(id)?;
        let size = content.size();
        let placed = PlacedPopup {
            id: id.to_string(),
            view: content.render(),
            position: place_popup(anchor, self.viewport, size),
            size,
        };
        self.active_popup = Some(id.to_string());
        Some(placed)
    }

    pub fn close_popup(&mut self) {
        self.active_popup = None;
    }

    pub fn active_popup(&self) -> Option<&str> {
        self.active_popup.as_deref()
    }

    fn popup_anchor(&self, id: &str) -> Option<ScreenPx> {
        let projection = Projection::fit(self.viewport);
        let coord = match self.popups.get(id)? {
            PopupContent::Hotspot { spot, .. } => spot.coord,
            PopupContent::Chokepoint { point, .. } => point.coord,
            PopupContent::Conflict { zone, .. } => zone.label,
            PopupContent::Cyber { region, .. } => region.coord,
            PopupContent::Quake(eq) => crate::geo::Coordinate::new(eq.lat, eq.lon),
            PopupContent::Monitor { monitor, .. } => monitor.coord?,
        };
        Some(projection.project(coord))
    }

    fn recompose(&mut self) {
        let (model, popups) = compose(
            &self.cached.corpus,
            &self.cached.earthquakes,
            &self.cached.monitors,
            self.layers,
            self.theme,
            self.viewport,
        );
        // an open popup survives recomposition only if its entity still exists
        if let Some(active) = &self.active_popup {
            if !popups.contains_key(active) {
                self.active_popup = None;
            }
        }
        self.model = Some(model);
        self.popups = popups;
    }
}
