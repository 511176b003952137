//! Globe configuration.
//!
//! All sizes, rates and speeds are fixed at build time. The renderer and the
//! animation loop receive a `&'static GlobeConfig` instead of reading globals.

use std::f64::consts::TAU;

/// Configuration for the rotating globe widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobeConfig {
    /// Side of the square output grid in logical cells.
    pub grid: u32,
    /// Each logical cell is drawn as a `pixel_scale × pixel_scale` block.
    pub pixel_scale: u32,
    /// Target redraw rate. The host callback may fire faster; ticks are throttled.
    pub fps: u32,
    /// Time for one full revolution at the target rate.
    pub seconds_per_revolution: u32,
}

impl GlobeConfig {
    /// Logical canvas side length (grid × pixel scale).
    pub fn canvas_size(&self) -> u32 {
        self.grid * self.pixel_scale
    }

    /// Sphere radius in grid cells.
    pub fn radius(&self) -> f64 {
        self.grid as f64 / 2.0
    }

    /// Minimum time between two redraws in milliseconds.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.fps as f64
    }

    /// Rotation added per qualifying tick, in radians.
    pub fn rotation_speed(&self) -> f64 {
        TAU / (self.seconds_per_revolution * self.fps) as f64
    }

    /// Number of qualifying ticks in one full revolution.
    pub fn ticks_per_revolution(&self) -> u32 {
        self.seconds_per_revolution * self.fps
    }
}

/// The globe shown on the landing page: 28×28 cells at 2px, 12 fps, 30s per turn.
pub static GLOBE_CONFIG: GlobeConfig = GlobeConfig {
    grid: 28,
    pixel_scale: 2,
    fps: 12,
    seconds_per_revolution: 30,
};
