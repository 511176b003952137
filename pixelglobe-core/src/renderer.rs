//! Sphere renderer: projects the texture onto the grid and shades it.

use crate::config::{GlobeConfig, GLOBE_CONFIG};
use crate::palette::{Palette, Rgba, GLOBE_PALETTE};
use crate::projection::sample_texel;
use crate::shading::{sphere_shading, RadialGradient};
use crate::surface::{CompositeMode, DrawingSurface};
use crate::texture::{TextureMap, EARTH};

/// Draws one frame of the globe for a given rotation.
///
/// Texture and palette are borrowed for `'static` and never mutated, so any
/// number of renderers can share them.
#[derive(Clone, Debug)]
pub struct SphereRenderer {
    config: &'static GlobeConfig,
    texture: &'static TextureMap,
    palette: &'static Palette,
    shading: RadialGradient,
}

impl SphereRenderer {
    pub fn new(
        config: &'static GlobeConfig,
        texture: &'static TextureMap,
        palette: &'static Palette,
    ) -> Self {
        Self {
            config,
            texture,
            palette,
            shading: sphere_shading(config),
        }
    }

    pub fn config(&self) -> &'static GlobeConfig {
        self.config
    }

    /// Palette color of grid cell `(px, py)`, or `None` outside the silhouette.
    pub fn cell_color(&self, px: u32, py: u32, rotation: f64) -> Option<Rgba> {
        sample_texel(self.config, px, py, rotation)
            .map(|t| self.palette.color(self.texture.get(t.row, t.col)))
    }

    /// Clear the canvas, paint every visible cell, then lay the shading
    /// gradient over painted pixels only.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S, rotation: f64) {
        let size = self.config.canvas_size() as f64;
        let scale = self.config.pixel_scale as f64;
        let grid = self.config.grid;

        surface.clear_rect(0.0, 0.0, size, size);

        for py in 0..grid {
            for px in 0..grid {
                let Some(color) = self.cell_color(px, py, rotation) else {
                    continue;
                };
                surface.fill_rect(px as f64 * scale, py as f64 * scale, scale, scale, color);
            }
        }

        surface.set_composite(CompositeMode::SourceAtop);
        surface.fill_radial_gradient(&self.shading, 0.0, 0.0, size, size);
        surface.set_composite(CompositeMode::SourceOver);
    }
}

impl Default for SphereRenderer {
    fn default() -> Self {
        Self::new(&GLOBE_CONFIG, &EARTH, &GLOBE_PALETTE)
    }
}
