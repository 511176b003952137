//! Globe widget lifecycle: mount, per-frame tick, unmount.

use crate::animation::{AnimationLoop, TickOutcome};
use crate::config::{GlobeConfig, GLOBE_CONFIG};
use crate::renderer::SphereRenderer;
use crate::surface::DrawingSurface;

/// One mounted globe. Owns its surface and rotation exclusively.
pub struct Globe<S: DrawingSurface> {
    surface: S,
    renderer: SphereRenderer,
    animation: AnimationLoop,
}

impl<S: DrawingSurface> Globe<S> {
    /// Mount with the default renderer and draw the first frame immediately.
    pub fn mount(surface: S) -> Self {
        Self::mount_with(surface, SphereRenderer::default(), &GLOBE_CONFIG)
    }

    /// Mount with an explicit renderer and timing configuration.
    pub fn mount_with(surface: S, renderer: SphereRenderer, config: &'static GlobeConfig) -> Self {
        let mut animation = AnimationLoop::new(config);
        animation.start();

        let mut globe = Self {
            surface,
            renderer,
            animation,
        };
        globe.redraw();
        globe
    }

    /// Mount only if a surface is available. Without one nothing is drawn and
    /// nothing should be scheduled.
    pub fn mount_optional(surface: Option<S>) -> Option<Self> {
        surface.map(Self::mount)
    }

    /// Handle one scheduler callback. Redraws only when the rotation advanced.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> TickOutcome {
        let outcome = self.animation.tick(timestamp_ms);
        if outcome.should_redraw() {
            self.redraw();
        }
        outcome
    }

    /// Stop the animation. Later callbacks are ignored and never draw.
    pub fn unmount(&mut self) {
        self.animation.stop();
    }

    pub fn rotation(&self) -> f64 {
        self.animation.rotation()
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn redraw(&mut self) {
        self.renderer.draw(&mut self.surface, self.animation.rotation());
    }
}
