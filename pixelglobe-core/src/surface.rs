//! Drawing surface abstraction.
//!
//! The renderer draws through this trait so the same code paints a browser
//! canvas and the in-memory [`PixelBuffer`](crate::PixelBuffer).
//! All coordinates are logical units; device-pixel scaling belongs to the surface.

use crate::palette::Rgba;
use crate::shading::RadialGradient;

/// How new paint combines with what is already on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompositeMode {
    /// Normal painting over existing pixels.
    #[default]
    SourceOver,
    /// Paint only where the destination is already opaque; alpha is preserved.
    SourceAtop,
}

impl CompositeMode {
    /// Canvas `globalCompositeOperation` name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::SourceAtop => "source-atop",
        }
    }
}

/// Stateful 2D sink the renderer paints into. The renderer never owns or
/// recreates it.
pub trait DrawingSurface {
    /// Reset a region to fully transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fill a rectangle with a solid color using the current composite mode.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);

    /// Switch the composite mode for subsequent fills.
    fn set_composite(&mut self, mode: CompositeMode);

    /// Fill a rectangle with a radial gradient using the current composite mode.
    fn fill_radial_gradient(
        &mut self,
        gradient: &RadialGradient,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_names_match_canvas() {
        assert_eq!(CompositeMode::SourceOver.as_str(), "source-over");
        assert_eq!(CompositeMode::SourceAtop.as_str(), "source-atop");
        assert_eq!(CompositeMode::default(), CompositeMode::SourceOver);
    }
}
