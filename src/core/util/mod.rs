pub mod bitmap_font;
pub mod grid_to_complex_coords;
pub mod nice_ticks;
