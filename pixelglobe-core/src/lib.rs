pub mod animation;
pub mod config;
pub mod globe;
pub mod palette;
pub mod pixel_buffer;
pub mod projection;
pub mod renderer;
pub mod shading;
pub mod surface;
pub mod texture;

pub use animation::{AnimationLoop, LoopState, TickOutcome};
pub use config::{GlobeConfig, GLOBE_CONFIG};
pub use globe::Globe;
pub use palette::{Palette, Rgba, GLOBE_PALETTE};
pub use pixel_buffer::PixelBuffer;
pub use projection::{
    cell_ndc, project_cell, sample_texel, wrap_angle, SpherePoint, TexCoord, Texel,
};
pub use renderer::SphereRenderer;
pub use shading::{sphere_shading, ColorStop, RadialGradient};
pub use surface::{CompositeMode, DrawingSurface};
pub use texture::{build_row, ice, land, RangeSpec, Terrain, TextureMap, COLS, EARTH, ROWS};
