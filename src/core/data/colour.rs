#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Builds a colour from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Linear blend towards `other`; `t` is expected in `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let channel = |a: u8, b: u8| -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(
            Colour::from_hex(0x1b1c20),
            Colour {
                r: 0x1b,
                g: 0x1c,
                b: 0x20
            }
        );
    }

    #[test]
    fn test_lerp_endpoints_are_exact() {
        let a = Colour::from_hex(0x440154);
        let b = Colour::from_hex(0xfde725);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint_rounds() {
        let black = Colour::from_hex(0x000000);
        let white = Colour::from_hex(0xffffff);

        assert_eq!(black.lerp(white, 0.5), Colour { r: 128, g: 128, b: 128 });
    }
}
