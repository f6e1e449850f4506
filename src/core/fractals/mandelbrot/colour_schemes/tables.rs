//! Evenly spaced stops sampled from the reference palettes, dark end first.

use crate::core::data::colour::Colour;

pub const MAGMA: &[Colour] = &[
    Colour::from_hex(0x000004),
    Colour::from_hex(0x1c1044),
    Colour::from_hex(0x4f127b),
    Colour::from_hex(0x812581),
    Colour::from_hex(0xb5367a),
    Colour::from_hex(0xe55064),
    Colour::from_hex(0xfb8761),
    Colour::from_hex(0xfec287),
    Colour::from_hex(0xfcfdbf),
];

pub const VIRIDIS: &[Colour] = &[
    Colour::from_hex(0x440154),
    Colour::from_hex(0x46327e),
    Colour::from_hex(0x3b528b),
    Colour::from_hex(0x2c728e),
    Colour::from_hex(0x21918c),
    Colour::from_hex(0x28ae80),
    Colour::from_hex(0x5ec962),
    Colour::from_hex(0xaddc30),
    Colour::from_hex(0xfde725),
];

pub const PLASMA: &[Colour] = &[
    Colour::from_hex(0x0d0887),
    Colour::from_hex(0x4c02a1),
    Colour::from_hex(0x7e03a8),
    Colour::from_hex(0xa92395),
    Colour::from_hex(0xcc4778),
    Colour::from_hex(0xe56b5d),
    Colour::from_hex(0xf89441),
    Colour::from_hex(0xfdc328),
    Colour::from_hex(0xf0f921),
];

pub const INFERNO: &[Colour] = &[
    Colour::from_hex(0x000004),
    Colour::from_hex(0x1f0c48),
    Colour::from_hex(0x550f6d),
    Colour::from_hex(0x88226a),
    Colour::from_hex(0xba3655),
    Colour::from_hex(0xe35933),
    Colour::from_hex(0xf98e09),
    Colour::from_hex(0xf9cb35),
    Colour::from_hex(0xfcffa4),
];

pub const CIVIDIS: &[Colour] = &[
    Colour::from_hex(0x00224e),
    Colour::from_hex(0x123570),
    Colour::from_hex(0x3b496c),
    Colour::from_hex(0x575d6d),
    Colour::from_hex(0x707173),
    Colour::from_hex(0x8a8678),
    Colour::from_hex(0xa59c74),
    Colour::from_hex(0xc3b369),
    Colour::from_hex(0xfee838),
];
