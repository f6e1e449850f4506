use rayon::prelude::*;

use crate::core::actions::cancellation::{should_stop, CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError, BYTES_PER_PIXEL};

/// Generates a pixel buffer by mapping row-major input values to colours.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, PixelBufferError>
where
    T: Copy + Sync,
    CMap: ColourMap<T>,
{
    generate_pixel_buffer_cancelable(input, mapper, width, height, &NeverCancel).map_err(|e| {
        match e {
            GeneratePixelBufferError::PixelBuffer(err) => err,
            GeneratePixelBufferError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        }
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratePixelBufferError {
    Cancelled(Cancelled),
    PixelBuffer(PixelBufferError),
}

impl std::fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl std::error::Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Generates a pixel buffer with cancellation support.
///
/// Rows are coloured in parallel straight into a preallocated buffer. The
/// token is polled at the start of each row and periodically within it.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: &[T],
    mapper: &CMap,
    width: u32,
    height: u32,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy + Sync,
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let expected_size = width as usize * height as usize;

    if input.len() != expected_size {
        return Err(GeneratePixelBufferError::PixelBuffer(
            PixelBufferError::BoundsMismatch {
                expected_size: expected_size * BYTES_PER_PIXEL,
                buffer_size: input.len() * BYTES_PER_PIXEL,
            },
        ));
    }

    let mut pixel_buffer = PixelBuffer::new(width, height);

    if expected_size == 0 {
        return Ok(pixel_buffer);
    }

    let row_width = width as usize;

    pixel_buffer
        .buffer_mut()
        .par_chunks_mut(row_width * BYTES_PER_PIXEL)
        .zip(input.par_chunks(row_width))
        .try_for_each(|(row_bytes, row_values)| {
            for (i, (pixel, &value)) in row_bytes
                .chunks_exact_mut(BYTES_PER_PIXEL)
                .zip(row_values)
                .enumerate()
            {
                if should_stop(i, cancel) {
                    return Err(Cancelled);
                }

                let colour = mapper.map(value);
                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
            }

            Ok(())
        })
        .map_err(GeneratePixelBufferError::Cancelled)?;

    Ok(pixel_buffer)
}
