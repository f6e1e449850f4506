use std::error::Error;
use std::fmt;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum PresentError {
    Io(std::io::Error),
    Image(image::ImageError),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not write image: {}", err),
            Self::Image(err) => write!(f, "could not encode image: {}", err),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Image(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PresentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for PresentError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err)
    }
}

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError>;
}
