use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons the globe cannot run in the current host.
#[derive(Debug, Error)]
pub enum GlobeError {
    #[error("no window available")]
    NoWindow,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for GlobeError {
    fn from(value: JsValue) -> Self {
        GlobeError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
