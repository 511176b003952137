use crate::error::GlobeError;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Get 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, GlobeError> {
    canvas
        .get_context("2d")?
        .ok_or(GlobeError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| GlobeError::NoContext)
}

/// Integer backing-store scale for the current display (at least 1).
pub fn device_pixel_ratio() -> u32 {
    let raw = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    round_pixel_ratio(raw)
}

/// Round a raw device pixel ratio to a whole backing scale.
pub fn round_pixel_ratio(raw: f64) -> u32 {
    if raw.is_finite() {
        raw.round().max(1.0) as u32
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_rounds_to_whole_scale() {
        assert_eq!(round_pixel_ratio(1.0), 1);
        assert_eq!(round_pixel_ratio(1.25), 1);
        assert_eq!(round_pixel_ratio(1.5), 2);
        assert_eq!(round_pixel_ratio(2.0), 2);
        assert_eq!(round_pixel_ratio(3.0), 3);
    }

    #[test]
    fn degenerate_pixel_ratio_falls_back_to_one() {
        assert_eq!(round_pixel_ratio(0.0), 1);
        assert_eq!(round_pixel_ratio(0.4), 1);
        assert_eq!(round_pixel_ratio(f64::NAN), 1);
    }
}
