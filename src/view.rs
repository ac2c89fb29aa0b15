//! Map Interaction: zoom/pan viewport state.
//!
//! This is strictly a view transform over the already-rendered map: it
//! never re-triggers scoring or composition. The front-end applies the
//! transform string to the zoom wrapper element.

use serde::{Deserialize, Serialize};

use crate::geo::Viewport;

pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 4.0;
pub const ZOOM_STEP: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub zoom: f32,
    pub pan: (f32, f32),
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            zoom: ZOOM_MIN,
            pan: (0.0, 0.0),
        }
    }
}

impl MapView {
    pub fn zoom_in(&mut self) {
        if self.zoom < ZOOM_MAX {
            self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
        }
    }

    /// Zooming back to 1x re-zeroes the pan offset.
    pub fn zoom_out(&mut self) {
        if self.zoom > ZOOM_MIN {
            self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
            if self.zoom == ZOOM_MIN {
                self.pan = (0.0, 0.0);
            }
        }
    }

    pub fn reset(&mut self) {
        self.zoom = ZOOM_MIN;
        self.pan = (0.0, 0.0);
    }

    /// Wheel input maps to the same fixed steps as the buttons.
    pub fn wheel(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.zoom_in();
        } else {
            self.zoom_out();
        }
    }

    /// True when drag-to-pan is enabled (any zoom beyond 1x).
    pub fn pannable(&self) -> bool {
        self.zoom > ZOOM_MIN
    }

    /// Request a pan offset; the result is clamped so the scaled viewport
    /// never exposes space beyond the container edges. At 1x the offset is
    /// always (0, 0).
    pub fn pan_to(&mut self, x: f32, y: f32, container: Viewport) {
        if !self.pannable() {
            self.pan = (0.0, 0.0);
            return;
        }
        let max_x = (container.width as f32 * (self.zoom - 1.0) / 2.0).max(0.0);
        let max_y = (container.height as f32 * (self.zoom - 1.0) / 2.0).max(0.0);
        self.pan = (x.clamp(-max_x, max_x), y.clamp(-max_y, max_y));
    }

    /// CSS transform applied to the zoom wrapper.
    pub fn transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.zoom, self.pan.0, self.pan.1
        )
    }

    /// Zoom readout, e.g. "1.5x".
    pub fn zoom_label(&self) -> String {
        format!("{:.1}x", self.zoom)
    }
}
