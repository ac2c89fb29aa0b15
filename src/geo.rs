//! Equirectangular projection fitted to a rendering container.
//!
//! The map fills its container without cropping: the scale is the smaller of
//! `width / 2π` and `height / π`, centered on (0°, 0°) and translated to the
//! container center. Everything here is pure; the composer re-creates a
//! projection whenever the container size changes.

use serde::{Deserialize, Serialize};

/// WGS84 point. Longitude east-positive, latitude north-positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Container dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Projected point in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPx {
    pub x: f64,
    pub y: f64,
}

/// Projected point as a percentage of the container, for CSS placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPercent {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    viewport: Viewport,
    scale: f64,
}

impl Projection {
    /// Fit the full globe into the viewport.
    pub fn fit(viewport: Viewport) -> Self {
        let scale_x = viewport.width / (2.0 * std::f64::consts::PI);
        let scale_y = viewport.height / std::f64::consts::PI;
        Self {
            viewport,
            scale: scale_x.min(scale_y),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Project to container pixels. (0°, 0°) lands at the container center.
    pub fn project(&self, coord: Coordinate) -> ScreenPx {
        let x = self.viewport.width / 2.0 + self.scale * coord.lon.to_radians();
        let y = self.viewport.height / 2.0 - self.scale * coord.lat.to_radians();
        ScreenPx { x, y }
    }

    pub fn to_percent(&self, coord: Coordinate) -> ScreenPercent {
        let px = self.project(coord);
        ScreenPercent {
            x: px.x / self.viewport.width * 100.0,
            y: px.y / self.viewport.height * 100.0,
        }
    }

    /// Project a closed (lon, lat) ring to pixel points, ready for a path.
    pub fn project_ring(&self, ring: &[(f64, f64)]) -> Vec<ScreenPx> {
        ring.iter()
            .map(|&(lon, lat)| self.project(Coordinate::new(lat, lon)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_container_center() {
        let p = Projection::fit(Viewport::new(800.0, 550.0));
        let px = p.project(Coordinate::new(0.0, 0.0));
        assert!((px.x - 400.0).abs() < 1e-9);
        assert!((px.y - 275.0).abs() < 1e-9);
    }

    #[test]
    fn scale_uses_smaller_axis() {
        // 800x550: width-limited (800/2π < 550/π), so ±180° spans the full width
        let p = Projection::fit(Viewport::new(800.0, 550.0));
        let east = p.project(Coordinate::new(0.0, 180.0));
        let west = p.project(Coordinate::new(0.0, -180.0));
        assert!((east.x - 800.0).abs() < 1e-9);
        assert!(west.x.abs() < 1e-9);
        // poles are letterboxed inside the container, not pinned to the edges
        let north = p.project(Coordinate::new(90.0, 0.0));
        assert!(north.y > 0.0);
    }

    #[test]
    fn percent_center_is_fifty_fifty() {
        let p = Projection::fit(Viewport::new(1024.0, 512.0));
        let pct = p.to_percent(Coordinate::new(0.0, 0.0));
        assert!((pct.x - 50.0).abs() < 1e-9);
        assert!((pct.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn ring_projection_preserves_order() {
        let p = Projection::fit(Viewport::new(800.0, 550.0));
        let ring = [(34.2, 31.6), (34.6, 31.6), (34.6, 31.2), (34.2, 31.2)];
        let pts = p.project_ring(&ring);
        assert_eq!(pts.len(), 4);
        assert!(pts[0].x < pts[1].x);
        assert!(pts[1].y < pts[2].y);
    }
}
