//! Detail popups for map entities.
//!
//! One tagged union covers every clickable overlay kind; a single renderer
//! dispatches on the tag and a single placement routine clamps the popup
//! into the container. The composer owns the id → content table, so popup
//! data never rides serialized inside the rendered markup.

use serde::Serialize;

use crate::activity::{ActivityResult, Evidence, PresenceStatus};
use crate::catalog::{Chokepoint, ConflictZone, CyberRegion, Hotspot};
use crate::geo::{Coordinate, ScreenPx, Viewport};
use crate::ingest::types::Earthquake;
use crate::monitors::Monitor;

/// Popup payload per entity kind. Static catalog entries are borrowed;
/// dynamic results are owned snapshots from the last refresh.
#[derive(Debug, Clone)]
pub enum PopupContent {
    Hotspot {
        spot: &'static Hotspot,
        activity: ActivityResult,
    },
    Chokepoint {
        point: &'static Chokepoint,
        status: PresenceStatus,
    },
    Conflict {
        zone: &'static ConflictZone,
        status: PresenceStatus,
    },
    Cyber {
        region: &'static CyberRegion,
        active: bool,
    },
    Quake(Earthquake),
    Monitor {
        monitor: Monitor,
        activity: ActivityResult,
    },
}

/// Rendered popup, ready for the front-end to template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupView {
    pub title: String,
    pub badge: String,
    pub description: String,
    pub meta: Vec<MetaEntry>,
    /// Up to 5 linked headlines with source attribution.
    pub headlines: Vec<Evidence>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaEntry {
    pub label: String,
    pub value: String,
}

fn meta(label: &str, value: impl Into<String>) -> MetaEntry {
    MetaEntry {
        label: label.to_string(),
        value: value.into(),
    }
}

/// "38.90°N, 77.00°W" style readout.
fn format_coord(c: Coordinate) -> String {
    format!(
        "{:.2}°{}, {:.2}°{}",
        c.lat.abs(),
        if c.lat >= 0.0 { 'N' } else { 'S' },
        c.lon.abs(),
        if c.lon >= 0.0 { 'E' } else { 'W' },
    )
}

impl PopupContent {
    /// Render the popup view for this entity.
    pub fn render(&self) -> PopupView {
        match self {
            PopupContent::Hotspot { spot, activity } => {
                let mut m = vec![meta("Coordinates", format_coord(spot.coord))];
                if !spot.status.is_empty() {
                    m.push(meta("Status", spot.status));
                }
                if !spot.agencies.is_empty() {
                    m.push(meta("Key Entities", spot.agencies.join(", ")));
                }
                PopupView {
                    title: spot.name.to_string(),
                    badge: format!("{:?}", activity.level).to_uppercase(),
                    description: format!("{}. {}", spot.subtext, spot.description),
                    meta: m,
                    headlines: activity.evidence.clone(),
                }
            }
            PopupContent::Chokepoint { point, status } => {
                let mut m = vec![
                    meta("Daily Traffic", point.traffic),
                    meta("Region", point.region),
                ];
                if let Some(dim) = point.dimensions {
                    m.push(meta("Dimensions", dim));
                }
                if let Some(ctl) = point.controlled_by {
                    m.push(meta("Controlled By", ctl));
                }
                if !point.cargo.is_empty() {
                    m.push(meta("Primary Cargo", point.cargo.join(", ")));
                }
                PopupView {
                    title: point.name.to_string(),
                    badge: if status.alert { "ALERT" } else { "NORMAL" }.to_string(),
                    description: point.description.to_string(),
                    meta: m,
                    headlines: status.evidence.clone(),
                }
            }
            PopupContent::Conflict { zone, status } => PopupView {
                title: zone.name.to_string(),
                badge: format!("{:?}", zone.intensity).to_uppercase(),
                description: zone.description.to_string(),
                meta: vec![
                    meta("Start Date", zone.start_date),
                    meta("Casualties", zone.casualties),
                    meta("Displaced", zone.displaced),
                    meta("Location", format_coord(zone.label)),
                    meta("Belligerents", zone.parties.join(", ")),
                    meta("Key Developments", zone.key_events.join(", ")),
                ],
                headlines: status.evidence.clone(),
            },
            PopupContent::Cyber { region, active } => PopupView {
                title: region.group.to_string(),
                badge: if *active { "ACTIVE" } else { "DORMANT" }.to_string(),
                description: region.description.to_string(),
                meta: vec![
                    meta("Country", region.country),
                    meta("Also Known As", region.aliases),
                    meta("Sponsor", region.sponsor),
                    meta("Target Sectors", region.targets.join(", ")),
                ],
                headlines: Vec::new(),
            },
            PopupContent::Quake(eq) => PopupView {
                title: format!("M{:.1}", eq.magnitude),
                badge: if eq.is_major() { "MAJOR" } else { "MINOR" }.to_string(),
                description: eq.place.clone(),
                meta: vec![
                    meta("Magnitude", format!("{:.1}", eq.magnitude)),
                    meta("Depth", format!("{:.1} km", eq.depth_km)),
                    meta(
                        "Coordinates",
                        format_coord(Coordinate::new(eq.lat, eq.lon)),
                    ),
                ],
                headlines: Vec::new(),
            },
            PopupContent::Monitor { monitor, activity } => {
                let mut m = vec![meta("Keywords", monitor.keywords.join(", "))];
                if let Some(coord) = monitor.coord {
                    m.push(meta("Coordinates", format_coord(coord)));
                }
                m.push(meta("Matches", activity.evidence.len().to_string()));
                PopupView {
                    title: monitor.name.clone(),
                    badge: format!("{:?}", activity.level).to_uppercase(),
                    description: String::new(),
                    meta: m,
                    headlines: activity.evidence.clone(),
                }
            }
        }
    }

    /// Pixel footprint used by the placement clamp.
    pub fn size(&self) -> PopupSize {
        match self {
            PopupContent::Conflict { .. } => PopupSize {
                width: 380.0,
                height: 450.0,
            },
            _ => PopupSize {
                width: 320.0,
                height: 400.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopupSize {
    pub width: f64,
    pub height: f64,
}

const ANCHOR_GAP: f64 = 20.0;
const EDGE_MARGIN: f64 = 10.0;

/// Place a popup near its anchor, flipped to the left when it would spill
/// past the right edge and clamped inside the container otherwise. Shared
/// by every popup kind.
pub fn place_popup(anchor: ScreenPx, container: Viewport, size: PopupSize) -> ScreenPx {
    let mut left = anchor.x + ANCHOR_GAP;
    let mut top = anchor.y - EDGE_MARGIN;

    if left + size.width > container.width {
        left = anchor.x - size.width - ANCHOR_GAP;
    }
    if top + size.height > container.height {
        top = container.height - size.height - EDGE_MARGIN;
    }
    if top < EDGE_MARGIN {
        top = EDGE_MARGIN;
    }
    if left < EDGE_MARGIN {
        left = EDGE_MARGIN;
    }

    ScreenPx { x: left, y: top }
}
