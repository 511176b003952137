//! Terrain colors.

use crate::texture::Terrain;

/// Straight-alpha color. Alpha is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }

    /// Linear interpolation of every channel, alpha included.
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// One color per terrain type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub ocean: Rgba,
    pub land: Rgba,
    pub ice: Rgba,
}

impl Palette {
    pub fn color(&self, terrain: Terrain) -> Rgba {
        match terrain {
            Terrain::Ocean => self.ocean,
            Terrain::Land => self.land,
            Terrain::Ice => self.ice,
        }
    }
}

/// Blue ocean, green land, pale ice.
pub static GLOBE_PALETTE: Palette = Palette {
    ocean: Rgba::opaque(0x3b, 0x82, 0xf6),
    land: Rgba::opaque(0x34, 0xd3, 0x99),
    ice: Rgba::opaque(0xe2, 0xe8, 0xf0),
};
