use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes binary (P6) PPM files.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode<W: Write>(&self, buffer: &PixelBuffer, mut out: W) -> std::io::Result<()> {
        // P6 header: magic, width, height and max colour value
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", buffer.width(), buffer.height())?;
        writeln!(out, "255")?;
        out.write_all(buffer.buffer())?;
        out.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        let file = std::fs::File::create(filepath)?;
        self.encode(buffer, BufWriter::new(file))?;

        Ok(())
    }
}
