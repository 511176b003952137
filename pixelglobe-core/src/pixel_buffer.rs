//! In-memory RGBA surface.
//!
//! Straight-alpha RGBA8 buffer implementing [`DrawingSurface`]. Used to
//! render the globe off-screen and to check what the renderer paints.

use crate::palette::Rgba;
use crate::shading::RadialGradient;
use crate::surface::{CompositeMode, DrawingSurface};

pub struct PixelBuffer {
    width: u32,
    height: u32,
    scale: u32,
    data: Vec<u8>,
    composite: CompositeMode,
    draw_calls: usize,
}

impl PixelBuffer {
    /// Create a transparent buffer of `logical × scale` physical pixels.
    pub fn new(logical_width: u32, logical_height: u32, scale: u32) -> Self {
        let scale = scale.max(1);
        let width = logical_width * scale;
        let height = logical_height * scale;
        Self {
            width,
            height,
            scale,
            data: vec![0u8; (width * height * 4) as usize],
            composite: CompositeMode::SourceOver,
            draw_calls: 0,
        }
    }

    /// Physical width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Physical height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn composite(&self) -> CompositeMode {
        self.composite
    }

    /// Number of clear/fill operations received so far.
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    /// RGBA bytes, row-major, suitable for `ImageData`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Physical pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Top-left physical pixel of logical unit `(lx, ly)`.
    pub fn logical_pixel(&self, lx: u32, ly: u32) -> [u8; 4] {
        self.pixel(lx * self.scale, ly * self.scale)
    }

    /// Physical pixel span covered by a logical rectangle, clipped to the buffer.
    fn span(&self, x: f64, y: f64, width: f64, height: f64) -> (u32, u32, u32, u32) {
        let s = self.scale as f64;
        let clip = |v: f64, max: u32| (v * s).round().clamp(0.0, max as f64) as u32;
        (
            clip(x, self.width),
            clip(y, self.height),
            clip(x + width, self.width),
            clip(y + height, self.height),
        )
    }

    fn blend(&mut self, x: u32, y: u32, src: Rgba) {
        let idx = ((y * self.width + x) * 4) as usize;
        let dst_a = self.data[idx + 3] as f64 / 255.0;
        let src_a = src.a.clamp(0.0, 1.0);
        let src_c = [src.r as f64, src.g as f64, src.b as f64];

        match self.composite {
            CompositeMode::SourceOver => {
                let out_a = src_a + dst_a * (1.0 - src_a);
                if out_a <= 0.0 {
                    self.data[idx..idx + 4].copy_from_slice(&[0, 0, 0, 0]);
                    return;
                }
                for (i, &c) in src_c.iter().enumerate() {
                    let d = self.data[idx + i] as f64;
                    let out = (c * src_a + d * dst_a * (1.0 - src_a)) / out_a;
                    self.data[idx + i] = out.round().clamp(0.0, 255.0) as u8;
                }
                self.data[idx + 3] = (out_a * 255.0).round() as u8;
            }
            CompositeMode::SourceAtop => {
                if dst_a <= 0.0 {
                    return;
                }
                for (i, &c) in src_c.iter().enumerate() {
                    let d = self.data[idx + i] as f64;
                    let out = c * src_a + d * (1.0 - src_a);
                    self.data[idx + i] = out.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }
}

impl DrawingSurface for PixelBuffer {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.draw_calls += 1;
        let (x0, y0, x1, y1) = self.span(x, y, width, height);
        for py in y0..y1 {
            let start = ((py * self.width + x0) * 4) as usize;
            let end = ((py * self.width + x1) * 4) as usize;
            self.data[start..end].fill(0);
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.draw_calls += 1;
        let (x0, y0, x1, y1) = self.span(x, y, width, height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color);
            }
        }
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.composite = mode;
    }

    fn fill_radial_gradient(
        &mut self,
        gradient: &RadialGradient,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) {
        self.draw_calls += 1;
        let s = self.scale as f64;
        let (x0, y0, x1, y1) = self.span(x, y, width, height);
        for py in y0..y1 {
            for px in x0..x1 {
                // Sample at the physical pixel center, in logical units.
                let color = gradient.color_at((px as f64 + 0.5) / s, (py as f64 + 0.5) / s);
                self.blend(px, py, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::opaque(255, 0, 0);

    #[test]
    fn new_buffer_is_transparent() {
        let buf = PixelBuffer::new(4, 3, 2);
        assert_eq!(buf.width(), 8);
        assert_eq!(buf.height(), 6);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn fill_rect_scales_logical_units() {
        let mut buf = PixelBuffer::new(4, 4, 2);
        buf.fill_rect(1.0, 1.0, 1.0, 1.0, RED);
        assert_eq!(buf.pixel(2, 2), [255, 0, 0, 255]);
        assert_eq!(buf.pixel(3, 3), [255, 0, 0, 255]);
        assert_eq!(buf.pixel(1, 2), [0, 0, 0, 0]);
        assert_eq!(buf.pixel(4, 4), [0, 0, 0, 0]);
        assert_eq!(buf.logical_pixel(1, 1), [255, 0, 0, 255]);
    }

    #[test]
    fn fill_rect_clips_to_buffer() {
        let mut buf = PixelBuffer::new(2, 2, 1);
        buf.fill_rect(-5.0, -5.0, 100.0, 100.0, RED);
        assert_eq!(buf.pixel(1, 1), [255, 0, 0, 255]);
    }

    #[test]
    fn source_over_blends_translucent_paint() {
        let mut buf = PixelBuffer::new(1, 1, 1);
        buf.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba::opaque(0, 0, 200));
        buf.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba::new(0, 0, 0, 0.5));
        assert_eq!(buf.pixel(0, 0), [0, 0, 100, 255]);
    }

    #[test]
    fn source_atop_skips_transparent_pixels() {
        let mut buf = PixelBuffer::new(2, 1, 1);
        buf.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba::opaque(0, 0, 200));
        buf.set_composite(CompositeMode::SourceAtop);
        buf.fill_rect(0.0, 0.0, 2.0, 1.0, Rgba::new(0, 0, 0, 0.5));
        assert_eq!(buf.pixel(0, 0), [0, 0, 100, 255]);
        assert_eq!(buf.pixel(1, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn clear_rect_resets_region() {
        let mut buf = PixelBuffer::new(2, 2, 1);
        buf.fill_rect(0.0, 0.0, 2.0, 2.0, RED);
        buf.clear_rect(0.0, 0.0, 1.0, 2.0);
        assert_eq!(buf.pixel(0, 1), [0, 0, 0, 0]);
        assert_eq!(buf.pixel(1, 1), [255, 0, 0, 255]);
        assert_eq!(buf.draw_calls(), 2);
    }
}
