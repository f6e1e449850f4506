use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_schemes::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::colour_schemes::tables;

/// Piecewise-linear map from `[0, 1]` onto a table of evenly spaced stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    stops: &'static [Colour],
}

impl Gradient {
    #[must_use]
    pub const fn for_scheme(scheme: ColourScheme) -> Self {
        let stops = match scheme {
            ColourScheme::Magma => tables::MAGMA,
            ColourScheme::Viridis => tables::VIRIDIS,
            ColourScheme::Plasma => tables::PLASMA,
            ColourScheme::Inferno => tables::INFERNO,
            ColourScheme::Cividis => tables::CIVIDIS,
        };

        Self { stops }
    }

    /// Colour at `t`. Values outside `[0, 1]` are clamped and NaN maps to 0.
    #[must_use]
    pub fn sample(&self, t: f64) -> Colour {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;

        let scaled = t * last as f64;
        let index = (scaled.floor() as usize).min(last - 1);
        let frac = scaled - index as f64;

        self.stops[index].lerp(self.stops[index + 1], frac)
    }

    #[must_use]
    pub fn start(&self) -> Colour {
        self.stops[0]
    }

    #[must_use]
    pub fn end(&self) -> Colour {
        self.stops[self.stops.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rec. 709 weights on the raw 8-bit channels
    fn luminance(colour: Colour) -> f64 {
        0.2126 * f64::from(colour.r) + 0.7152 * f64::from(colour.g) + 0.0722 * f64::from(colour.b)
    }

    #[test]
    fn test_endpoints_hit_first_and_last_stop() {
        for &scheme in ColourScheme::ALL {
            let gradient = Gradient::for_scheme(scheme);

            assert_eq!(gradient.sample(0.0), gradient.start(), "{}", scheme);
            assert_eq!(gradient.sample(1.0), gradient.end(), "{}", scheme);
        }
    }

    #[test]
    fn test_sample_lands_on_interior_stops() {
        let gradient = Gradient::for_scheme(ColourScheme::Viridis);

        assert_eq!(gradient.sample(0.5), Colour::from_hex(0x21918c));
        assert_eq!(gradient.sample(0.25), Colour::from_hex(0x3b528b));
    }

    #[test]
    fn test_sample_interpolates_between_stops() {
        let gradient = Gradient::for_scheme(ColourScheme::Magma);
        let colour = gradient.sample(1.0 / 16.0);

        // halfway between 0x000004 and 0x1c1044
        assert_eq!(colour, Colour { r: 14, g: 8, b: 36 });
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let gradient = Gradient::for_scheme(ColourScheme::Plasma);

        assert_eq!(gradient.sample(-0.5), gradient.start());
        assert_eq!(gradient.sample(7.0), gradient.end());
        assert_eq!(gradient.sample(f64::NAN), gradient.start());
    }

    #[test]
    fn test_every_scheme_runs_dark_to_light() {
        for &scheme in ColourScheme::ALL {
            let stops = Gradient::for_scheme(scheme).stops;

            for pair in stops.windows(2) {
                assert!(
                    luminance(pair[0]) < luminance(pair[1]),
                    "{} is not monotonic at {:?} -> {:?}",
                    scheme,
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn test_sampled_luminance_is_monotonic() {
        for &scheme in ColourScheme::ALL {
            let gradient = Gradient::for_scheme(scheme);
            let samples: Vec<f64> = (0..=64)
                .map(|i| luminance(gradient.sample(f64::from(i) / 64.0)))
                .collect();

            for pair in samples.windows(2) {
                assert!(pair[0] <= pair[1] + 1.0, "{} dips in brightness", scheme);
            }
        }
    }
}
