use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_schemes::kinds::ColourScheme;

pub const MIN_RESOLUTION: u32 = 100;
pub const MAX_RESOLUTION: u32 = 1000;
pub const RESOLUTION_STEP: u32 = 100;
pub const DEFAULT_RESOLUTION: u32 = 500;

pub const MIN_ITERATIONS: u32 = 20;
pub const MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_ITERATIONS: u32 = 50;

/// Everything one render needs. Defaults mirror the explorer's initial
/// control positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub resolution: u32,
    pub max_iterations: u32,
    pub scheme: ColourScheme,
    pub viewport: Viewport,
    pub colourbar: bool,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            max_iterations: DEFAULT_ITERATIONS,
            scheme: ColourScheme::default(),
            viewport: Viewport::default(),
            colourbar: true,
        }
    }
}
