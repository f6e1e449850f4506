use std::error::Error;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::controllers::cli::render_request::RenderRequest;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::colourbar::{
    attach_colourbar, colourbar_ticks, render_colourbar, MIN_COLOURBAR_HEIGHT,
};
use crate::core::fractals::mandelbrot::engine::compute_escape_times;
use crate::core::fractals::mandelbrot::renderer::render;

pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self, request: &RenderRequest) -> Result<(), Box<dyn Error>> {
        let viewport = request.viewport;

        info!(
            "Rendering Mandelbrot set: {}x{} px, {} iterations, {} colour scheme",
            request.resolution,
            request.resolution,
            request.max_iterations,
            request.scheme.display_name()
        );
        debug!(
            "Viewport: real [{}, {}], imag [{}, {}]",
            viewport.real_min(),
            viewport.real_max(),
            viewport.imag_min(),
            viewport.imag_max()
        );

        let start = Instant::now();
        let grid = compute_escape_times(
            request.resolution,
            request.resolution,
            request.max_iterations,
            viewport,
        )?;
        debug!(
            "Escape times computed in {:?} ({:.1}% of points escaped)",
            start.elapsed(),
            grid.escaped_fraction(request.max_iterations) * 100.0
        );

        let start = Instant::now();
        let mut image = render(&grid, request.max_iterations, request.scheme)?;

        if request.colourbar && image.height() < MIN_COLOURBAR_HEIGHT {
            debug!(
                "Skipping colourbar: image height {} is below {}",
                image.height(),
                MIN_COLOURBAR_HEIGHT
            );
        } else if request.colourbar {
            let colourbar = render_colourbar(request.max_iterations, request.scheme, image.height())?;
            debug!("Colourbar ticks: {:?}", colourbar_ticks(request.max_iterations));
            image = attach_colourbar(&image, &colourbar)?;
        }
        debug!("Image coloured in {:?}", start.elapsed());

        self.buffer = Some(image);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        let filepath = filepath.as_ref();

        if let Some(buffer) = &self.buffer {
            if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }

            self.presenter.present(buffer, filepath)?;
            info!("Saved to {}", filepath.display());
        }

        Ok(())
    }
}
