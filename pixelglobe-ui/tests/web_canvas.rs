#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use pixelglobe_core::{Globe, GLOBE_CONFIG};
use pixelglobe_ui::{CanvasSurface, FrameLoop};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn make_canvas() -> HtmlCanvasElement {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap()
}

fn alpha_at(surface: &CanvasSurface, x: f64, y: f64) -> u8 {
    let data = surface
        .context()
        .get_image_data(x, y, 1.0, 1.0)
        .unwrap()
        .data();
    data[3]
}

#[wasm_bindgen_test]
fn attach_scales_backing_store() {
    let canvas = make_canvas();
    let surface = CanvasSurface::attach(&canvas, &GLOBE_CONFIG).unwrap();
    let expected = GLOBE_CONFIG.canvas_size() * surface.scale();
    assert_eq!(canvas.width(), expected);
    assert_eq!(canvas.height(), expected);
}

#[wasm_bindgen_test]
fn mount_paints_sphere_but_not_corners() {
    let canvas = make_canvas();
    let surface = CanvasSurface::attach(&canvas, &GLOBE_CONFIG).unwrap();
    let globe = Globe::mount(surface);

    let size = canvas.width() as f64;
    assert_eq!(alpha_at(globe.surface(), 0.0, 0.0), 0);
    assert_eq!(alpha_at(globe.surface(), size - 1.0, size - 1.0), 0);
    assert_eq!(alpha_at(globe.surface(), size / 2.0, size / 2.0), 255);
}

#[wasm_bindgen_test]
async fn frame_loop_runs_until_cancelled() {
    let frames = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&frames);
    let frame_loop = FrameLoop::start(move |_| {
        counter.set(counter.get() + 1);
        true
    })
    .unwrap();
    assert!(frame_loop.is_pending());

    TimeoutFuture::new(200).await;
    assert!(frames.get() > 0, "no animation frames fired");

    frame_loop.cancel();
    assert!(!frame_loop.is_pending());
    let after_cancel = frames.get();

    TimeoutFuture::new(200).await;
    assert_eq!(frames.get(), after_cancel);
}

#[wasm_bindgen_test]
async fn frame_loop_stops_when_callback_declines() {
    let frames = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&frames);
    let _frame_loop = FrameLoop::start(move |_| {
        counter.set(counter.get() + 1);
        false
    })
    .unwrap();

    TimeoutFuture::new(200).await;
    assert_eq!(frames.get(), 1);
}
