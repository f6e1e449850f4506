use crate::core::errors::FractalError;
use crate::core::fractals::mandelbrot::colour_schemes::escape_time_colour_map::EscapeTimeColourMap;
use crate::core::fractals::mandelbrot::colour_schemes::kinds::ColourScheme;

pub fn mandelbrot_colour_map_factory(
    scheme: ColourScheme,
    max_iterations: u32,
) -> Result<EscapeTimeColourMap, FractalError> {
    EscapeTimeColourMap::new(scheme, max_iterations)
}

/// Resolves a scheme by name before building the map, so an unknown name is
/// reported even when `max_iterations` is also invalid.
pub fn mandelbrot_colour_map_from_name(
    name: &str,
    max_iterations: u32,
) -> Result<EscapeTimeColourMap, FractalError> {
    let scheme: ColourScheme = name.parse()?;
    mandelbrot_colour_map_factory(scheme, max_iterations)
}
