mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::cli_controller::CliController;
pub use crate::controllers::cli::render_request::{
    RenderRequest, DEFAULT_ITERATIONS, DEFAULT_RESOLUTION, MAX_ITERATIONS, MAX_RESOLUTION,
    MIN_ITERATIONS, MIN_RESOLUTION, RESOLUTION_STEP,
};
pub use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::cancellation::{
    CancelFlag, CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS,
};
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    generate_fractal_parallel_rayon, generate_fractal_parallel_rayon_cancelable,
};
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, generate_pixel_buffer_cancelable, GeneratePixelBufferError,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_time_grid::EscapeTimeGrid;
pub use crate::core::data::grid_size::{GridPoint, GridSize};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::errors::{CancelableError, FractalError};
pub use crate::core::fractals::mandelbrot::algorithm::{escape_time, MandelbrotAlgorithm, ESCAPE_RADIUS_SQUARED};
pub use crate::core::fractals::mandelbrot::colour_schemes::escape_time_colour_map::EscapeTimeColourMap;
pub use crate::core::fractals::mandelbrot::colour_schemes::factory::{
    mandelbrot_colour_map_factory, mandelbrot_colour_map_from_name,
};
pub use crate::core::fractals::mandelbrot::colour_schemes::gradient::Gradient;
pub use crate::core::fractals::mandelbrot::colour_schemes::kinds::ColourScheme;
pub use crate::core::fractals::mandelbrot::colourbar::{
    attach_colourbar, colourbar_ticks, colourbar_width, render_colourbar, MIN_COLOURBAR_HEIGHT,
};
pub use crate::core::fractals::mandelbrot::engine::{
    compute_escape_times, compute_escape_times_cancelable, compute_escape_times_serial,
};
pub use crate::core::fractals::mandelbrot::renderer::{render, render_cancelable, render_named};
pub use crate::core::util::grid_to_complex_coords::GridToComplexCoords;
