//! 5x7 bitmap digits for colourbar tick labels.

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

const DIGITS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111], // 2
    [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

/// Pixel width of `text` when drawn with [`draw_text`].
#[must_use]
pub fn text_width(text: &str) -> u32 {
    match text.chars().count() as u32 {
        0 => 0,
        n => n * GLYPH_ADVANCE - 1,
    }
}

/// Draws the digits of `text` with the top-left at (`x`, `y`). Characters
/// other than ASCII digits advance the cursor without drawing. Glyphs are
/// clipped to the buffer.
pub fn draw_text(buffer: &mut PixelBuffer, x: u32, y: u32, text: &str, colour: Colour) {
    let mut cursor_x = x;

    for c in text.chars() {
        if let Some(digit) = c.to_digit(10) {
            draw_glyph(buffer, cursor_x, y, &DIGITS[digit as usize], colour);
        }
        cursor_x += GLYPH_ADVANCE;
    }
}

fn draw_glyph(buffer: &mut PixelBuffer, x: u32, y: u32, glyph: &[u8; 7], colour: Colour) {
    for (row, &bits) in (0u32..).zip(glyph.iter()) {
        let py = y.saturating_add(row);
        if py >= buffer.height() {
            break;
        }

        for col in 0..GLYPH_WIDTH {
            let px = x.saturating_add(col);
            if px < buffer.width() && (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                buffer.fill_rect(px, py, 1, 1, colour);
            }
        }
    }
}
