pub mod canvas_surface;
pub mod canvas_utils;
pub mod frame_loop;

pub use canvas_surface::CanvasSurface;
pub use canvas_utils::{device_pixel_ratio, get_2d_context};
pub use frame_loop::FrameLoop;
