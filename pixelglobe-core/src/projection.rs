//! Orthographic sphere projection from grid cells to texture cells.
//!
//! Only the front hemisphere is ever visible. Cells on or outside the unit
//! circle are not part of the sphere and have no texture sample.

use crate::config::GlobeConfig;
use crate::texture::{COLS, ROWS};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Latitude/longitude of a visible cell, in radians.
/// `lon` includes the rotation offset and is not wrapped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpherePoint {
    pub lat: f64,
    pub lon: f64,
}

/// Texture-space fractions: `u` in `[0, 1]` west to east, `v` in `[0, 1]` north to south.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TexCoord {
    pub u: f64,
    pub v: f64,
}

/// Integer texture cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Texel {
    pub row: usize,
    pub col: usize,
}

/// Wrap any finite angle into `[0, 2π)`, negative angles included.
pub fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Normalized device coordinates of a cell center, roughly `[-1, 1]`.
pub fn cell_ndc(config: &GlobeConfig, px: u32, py: u32) -> (f64, f64) {
    let r = config.radius();
    ((px as f64 + 0.5 - r) / r, (py as f64 + 0.5 - r) / r)
}

/// Project grid cell `(px, py)` onto the sphere rotated by `rotation`.
///
/// Returns `None` when the cell center lies on or outside the silhouette.
pub fn project_cell(config: &GlobeConfig, px: u32, py: u32, rotation: f64) -> Option<SpherePoint> {
    let (nx, ny) = cell_ndc(config, px, py);
    let d2 = nx * nx + ny * ny;
    if d2 >= 1.0 {
        return None;
    }

    let nz = (1.0 - d2).sqrt();

    // North is up on screen, so screen y is negated.
    Some(SpherePoint {
        lat: (-ny).asin(),
        lon: rotation + nx.atan2(nz),
    })
}

impl SpherePoint {
    pub fn tex_coord(&self) -> TexCoord {
        TexCoord {
            u: wrap_angle(self.lon) / TAU,
            v: (FRAC_PI_2 - self.lat) / PI,
        }
    }
}

impl TexCoord {
    pub fn texel(&self) -> Texel {
        let row = ((self.v * ROWS as f64).floor().max(0.0) as usize).min(ROWS - 1);
        // rem_euclid can round up to exactly 2π, so u may be 1.0.
        let col = (self.u * COLS as f64).floor().max(0.0) as usize % COLS;
        Texel { row, col }
    }
}

/// Texture cell sampled by grid cell `(px, py)`, if visible.
pub fn sample_texel(config: &GlobeConfig, px: u32, py: u32, rotation: f64) -> Option<Texel> {
    project_cell(config, px, py, rotation).map(|p| p.tex_coord().texel())
}
