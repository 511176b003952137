pub mod pixel_globe;

pub use pixel_globe::PixelGlobe;
