mod app;
pub mod components;
pub mod error;
pub mod rendering;

pub use app::App;
pub use components::PixelGlobe;
pub use error::GlobeError;
pub use rendering::{CanvasSurface, FrameLoop};

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(App);
}
