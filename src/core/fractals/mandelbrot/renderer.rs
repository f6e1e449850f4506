use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer_cancelable, GeneratePixelBufferError,
};
use crate::core::data::escape_time_grid::EscapeTimeGrid;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::errors::{CancelableError, FractalError};
use crate::core::fractals::mandelbrot::colour_schemes::factory::{
    mandelbrot_colour_map_factory, mandelbrot_colour_map_from_name,
};
use crate::core::fractals::mandelbrot::colour_schemes::escape_time_colour_map::EscapeTimeColourMap;
use crate::core::fractals::mandelbrot::colour_schemes::kinds::ColourScheme;

/// Colours `grid` with `scheme`, normalising each cell by `max_iter`.
/// Pixel (x, y) comes from grid cell (row y, col x).
pub fn render(
    grid: &EscapeTimeGrid,
    max_iter: u32,
    scheme: ColourScheme,
) -> Result<PixelBuffer, FractalError> {
    let colour_map = mandelbrot_colour_map_factory(scheme, max_iter)?;
    render_uncancelled(grid, &colour_map)
}

/// [`render`] with the scheme given by name, e.g. `"viridis"`.
pub fn render_named(
    grid: &EscapeTimeGrid,
    max_iter: u32,
    scheme_name: &str,
) -> Result<PixelBuffer, FractalError> {
    let colour_map = mandelbrot_colour_map_from_name(scheme_name, max_iter)?;
    render_uncancelled(grid, &colour_map)
}

pub fn render_cancelable<C: CancelToken>(
    grid: &EscapeTimeGrid,
    max_iter: u32,
    scheme: ColourScheme,
    cancel: &C,
) -> Result<PixelBuffer, CancelableError> {
    let colour_map = mandelbrot_colour_map_factory(scheme, max_iter)?;
    render_with(grid, &colour_map, cancel)
}

fn render_uncancelled(
    grid: &EscapeTimeGrid,
    colour_map: &EscapeTimeColourMap,
) -> Result<PixelBuffer, FractalError> {
    render_with(grid, colour_map, &NeverCancel).map_err(|e| match e {
        CancelableError::Fractal(err) => err,
        CancelableError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

fn render_with<C: CancelToken>(
    grid: &EscapeTimeGrid,
    colour_map: &EscapeTimeColourMap,
    cancel: &C,
) -> Result<PixelBuffer, CancelableError> {
    generate_pixel_buffer_cancelable(grid.values(), colour_map, grid.width(), grid.height(), cancel)
        .map_err(|e| match e {
            GeneratePixelBufferError::Cancelled(c) => CancelableError::Cancelled(c),
            GeneratePixelBufferError::PixelBuffer(err) => {
                CancelableError::Fractal(FractalError::invalid("grid", err.to_string()))
            }
        })
}
