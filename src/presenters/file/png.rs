use std::path::Path;

use image::{ExtendedColorType, ImageFormat};

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgb8,
            ImageFormat::Png,
        )?;

        Ok(())
    }
}
