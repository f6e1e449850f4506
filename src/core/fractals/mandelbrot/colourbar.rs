use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::errors::FractalError;
use crate::core::fractals::mandelbrot::colour_schemes::escape_time_colour_map::EscapeTimeColourMap;
use crate::core::fractals::mandelbrot::colour_schemes::kinds::ColourScheme;
use crate::core::util::bitmap_font::{draw_text, text_width, GLYPH_HEIGHT};
use crate::core::util::nice_ticks::nice_ticks;

pub const PANEL_BACKGROUND: Colour = Colour::from_hex(0x1b1c20);
pub const LABEL_COLOUR: Colour = Colour::from_hex(0xffffff);

pub const MARGIN_Y: u32 = 10;
pub const LEFT_PADDING: u32 = 12;
pub const BAR_WIDTH: u32 = 20;
pub const TICK_LENGTH: u32 = 4;
pub const LABEL_GAP: u32 = 3;
pub const RIGHT_PADDING: u32 = 8;
pub const MAX_TICKS: usize = 6;

const MIN_BAR_HEIGHT: u32 = 2;

/// Shortest panel that still fits a gradient strip between the margins.
pub const MIN_COLOURBAR_HEIGHT: u32 = 2 * MARGIN_Y + MIN_BAR_HEIGHT;

/// Escape-time values that get a tick on the legend.
#[must_use]
pub fn colourbar_ticks(max_iter: u32) -> Vec<u32> {
    nice_ticks(max_iter, MAX_TICKS)
}

/// Width of the legend panel for a given iteration cap.
#[must_use]
pub fn colourbar_width(max_iter: u32) -> u32 {
    LEFT_PADDING + BAR_WIDTH + TICK_LENGTH + LABEL_GAP + text_width(&max_iter.to_string()) + RIGHT_PADDING
}

/// Vertical legend for `scheme`: the gradient runs from `max_iter` at the
/// top to 0 at the bottom, with labelled ticks in escape-time units.
pub fn render_colourbar(
    max_iter: u32,
    scheme: ColourScheme,
    height: u32,
) -> Result<PixelBuffer, FractalError> {
    let colour_map = EscapeTimeColourMap::new(scheme, max_iter)?;

    if height < MIN_COLOURBAR_HEIGHT {
        return Err(FractalError::invalid(
            "colourbar.height",
            format!("must be at least {}, got {}", MIN_COLOURBAR_HEIGHT, height),
        ));
    }

    let width = colourbar_width(max_iter);
    let bar_height = height - 2 * MARGIN_Y;
    let gradient = colour_map.gradient();
    let mut panel = PixelBuffer::filled(width, height, PANEL_BACKGROUND);

    for y in 0..bar_height {
        let t = 1.0 - f64::from(y) / f64::from(bar_height - 1);
        panel.fill_rect(LEFT_PADDING, MARGIN_Y + y, BAR_WIDTH, 1, gradient.sample(t));
    }

    let tick_x = LEFT_PADDING + BAR_WIDTH;
    let label_x = tick_x + TICK_LENGTH + LABEL_GAP;

    for tick in colourbar_ticks(max_iter) {
        let offset = (1.0 - colour_map.normalise(tick)) * f64::from(bar_height - 1);
        let tick_y = MARGIN_Y + offset.round() as u32;
        let label_y = tick_y
            .saturating_sub(GLYPH_HEIGHT / 2)
            .min(height - GLYPH_HEIGHT);

        panel.fill_rect(tick_x, tick_y, TICK_LENGTH, 1, LABEL_COLOUR);
        draw_text(&mut panel, label_x, label_y, &tick.to_string(), LABEL_COLOUR);
    }

    Ok(panel)
}

/// Places `colourbar` to the right of `image`. Both must be the same height.
pub fn attach_colourbar(
    image: &PixelBuffer,
    colourbar: &PixelBuffer,
) -> Result<PixelBuffer, FractalError> {
    if image.height() != colourbar.height() {
        return Err(FractalError::invalid(
            "colourbar",
            format!(
                "height {} does not match image height {}",
                colourbar.height(),
                image.height()
            ),
        ));
    }

    let mut combined = PixelBuffer::new(image.width() + colourbar.width(), image.height());
    combined.blit(image, 0, 0);
    combined.blit(colourbar, image.width(), 0);

    Ok(combined)
}
