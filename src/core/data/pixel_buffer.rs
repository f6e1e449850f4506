use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of pixel data, got {}",
                    expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB8 raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Colour::default())
    }

    #[must_use]
    pub fn filled(width: u32, height: u32, colour: Colour) -> Self {
        let buffer = [colour.r, colour.g, colour.b]
            .into_iter()
            .cycle()
            .take(buffer_size(width, height))
            .collect();

        Self {
            width,
            height,
            buffer,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.index_of(x, y).map(|index| Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Paints a rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, colour: Colour) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);

        for py in y..y_end {
            for px in x..x_end {
                if let Some(index) = self.index_of(px, py) {
                    self.buffer[index] = colour.r;
                    self.buffer[index + 1] = colour.g;
                    self.buffer[index + 2] = colour.b;
                }
            }
        }
    }

    /// Copies `source` with its top-left corner at (`x`, `y`), clipped to this buffer.
    pub fn blit(&mut self, source: &PixelBuffer, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }

        let copy_width = source.width.min(self.width - x) as usize;
        let copy_height = source.height.min(self.height - y);
        let row_bytes = copy_width * BYTES_PER_PIXEL;

        for row in 0..copy_height {
            let src_start = row as usize * source.width as usize * BYTES_PER_PIXEL;
            let dst_start = ((y + row) as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;

            self.buffer[dst_start..dst_start + row_bytes]
                .copy_from_slice(&source.buffer[src_start..src_start + row_bytes]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour::from_hex(0xff0000);
    const BLUE: Colour = Colour::from_hex(0x0000ff);

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(10, 10);

        assert_eq!(buffer.buffer().len(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_filled_repeats_colour() {
        let buffer = PixelBuffer::filled(2, 2, RED);

        assert_eq!(buffer.buffer(), &vec![255, 0, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0]);
    }

    #[test]
    fn test_single_pixel_rect_and_read_back() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.fill_rect(2, 1, 1, 1, BLUE);

        assert_eq!(buffer.pixel(2, 1), Some(BLUE));
        assert_eq!(&buffer.buffer()[15..18], &[0, 0, 255]);
        assert_eq!(buffer.pixel(3, 0), None);
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.fill_rect(2, 2, 10, 10, RED);

        assert_eq!(buffer.pixel(1, 1), Some(Colour::default()));
        assert_eq!(buffer.pixel(2, 2), Some(RED));
        assert_eq!(buffer.pixel(3, 3), Some(RED));
    }

    #[test]
    fn test_blit_places_source_at_offset() {
        let mut target = PixelBuffer::new(5, 3);
        let source = PixelBuffer::filled(2, 2, BLUE);
        target.blit(&source, 3, 1);

        assert_eq!(target.pixel(2, 1), Some(Colour::default()));
        assert_eq!(target.pixel(3, 1), Some(BLUE));
        assert_eq!(target.pixel(4, 2), Some(BLUE));
        assert_eq!(target.pixel(3, 0), Some(Colour::default()));
    }

    #[test]
    fn test_blit_clips_oversized_source() {
        let mut target = PixelBuffer::new(2, 2);
        let source = PixelBuffer::filled(4, 4, RED);
        target.blit(&source, 1, 1);

        assert_eq!(target.pixel(0, 0), Some(Colour::default()));
        assert_eq!(target.pixel(1, 1), Some(RED));
    }
}
