// pixelglobe-ui/src/components/pixel_globe.rs
use leptos::*;
use pixelglobe_core::{Globe, GlobeConfig, GLOBE_CONFIG};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::error::GlobeError;
use crate::rendering::{CanvasSurface, FrameLoop};

/// A mounted globe and the frame loop driving it.
struct RunningGlobe {
    globe: Rc<RefCell<Globe<CanvasSurface>>>,
    frame_loop: FrameLoop,
}

impl RunningGlobe {
    /// Attach to the canvas, draw the first frame, and start animating.
    fn start(canvas: &HtmlCanvasElement, config: &GlobeConfig) -> Result<Self, GlobeError> {
        let surface = CanvasSurface::attach(canvas, config)?;
        let globe = Rc::new(RefCell::new(Globe::mount(surface)));

        let frame_globe = Rc::clone(&globe);
        let frame_loop = FrameLoop::start(move |timestamp| {
            frame_globe
                .borrow_mut()
                .on_frame(timestamp)
                .should_continue()
        })?;

        Ok(Self { globe, frame_loop })
    }

    fn stop(&self) {
        self.frame_loop.cancel();
        self.globe.borrow_mut().unmount();
    }
}

/// Inline CSS keeping the canvas at its logical size with crisp pixels.
fn canvas_style(config: &GlobeConfig) -> String {
    let size = config.canvas_size();
    format!(
        "width: {}px; height: {}px; image-rendering: pixelated;",
        size, size
    )
}

/// Rotating pixelated globe on a fixed-size canvas.
///
/// If the host has no usable 2D canvas the widget stays blank and schedules
/// nothing.
#[component]
pub fn PixelGlobe() -> impl IntoView {
    let config: &'static GlobeConfig = &GLOBE_CONFIG;
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();
    let running: Rc<RefCell<Option<RunningGlobe>>> = Rc::new(RefCell::new(None));

    let effect_running = Rc::clone(&running);
    create_effect(move |_| {
        let Some(canvas_el) = canvas_ref.get() else {
            return;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>();

        if let Some(previous) = effect_running.borrow_mut().take() {
            previous.stop();
        }

        match RunningGlobe::start(canvas, config) {
            Ok(globe) => {
                log::debug!("Pixel globe mounted");
                *effect_running.borrow_mut() = Some(globe);
            }
            Err(e) => log::debug!("Pixel globe disabled: {}", e),
        }
    });

    on_cleanup(move || {
        if let Some(globe) = running.borrow_mut().take() {
            globe.stop();
            log::debug!("Pixel globe unmounted");
        }
    });

    view! {
        <canvas node_ref=canvas_ref style=canvas_style(config) />
    }
}
