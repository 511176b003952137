//! Browser canvas implementation of the globe's drawing surface.

use crate::error::GlobeError;
use crate::rendering::canvas_utils::{device_pixel_ratio, get_2d_context};
use pixelglobe_core::{CompositeMode, DrawingSurface, GlobeConfig, RadialGradient, Rgba};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    scale: u32,
}

impl CanvasSurface {
    /// Size the canvas backing store for the display and prepare the context.
    ///
    /// The logical size stays `canvas_size × canvas_size`; the backing store
    /// is multiplied by the rounded device pixel ratio and the context scaled
    /// to match.
    pub fn attach(canvas: &HtmlCanvasElement, config: &GlobeConfig) -> Result<Self, GlobeError> {
        let scale = device_pixel_ratio();
        let size = config.canvas_size() * scale;
        canvas.set_width(size);
        canvas.set_height(size);

        let ctx = get_2d_context(canvas)?;
        ctx.scale(scale as f64, scale as f64)?;
        ctx.set_image_smoothing_enabled(false);

        log::debug!("Pixel globe canvas attached ({}x{}, dpr {})", size, size, scale);

        Ok(Self { ctx, scale })
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    /// Backing-store pixels per logical unit.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn create_gradient(&self, gradient: &RadialGradient) -> Result<CanvasGradient, GlobeError> {
        let canvas_gradient = self.ctx.create_radial_gradient(
            gradient.x0,
            gradient.y0,
            gradient.r0,
            gradient.x1,
            gradient.y1,
            gradient.r1,
        )?;
        for stop in &gradient.stops {
            canvas_gradient.add_color_stop(stop.offset as f32, &stop.color.to_css())?;
        }
        Ok(canvas_gradient)
    }
}

impl DrawingSurface for CanvasSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x, y, width, height);
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        if let Err(e) = self.ctx.set_global_composite_operation(mode.as_str()) {
            log::warn!("Failed to set composite mode {}: {:?}", mode.as_str(), e);
        }
    }

    fn fill_radial_gradient(
        &mut self,
        gradient: &RadialGradient,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) {
        match self.create_gradient(gradient) {
            Ok(canvas_gradient) => {
                self.ctx.set_fill_style_canvas_gradient(&canvas_gradient);
                self.ctx.fill_rect(x, y, width, height);
            }
            Err(e) => log::warn!("Skipping globe shading: {}", e),
        }
    }
}
