use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::errors::FractalError;
use crate::core::fractals::mandelbrot::colour_schemes::gradient::Gradient;
use crate::core::fractals::mandelbrot::colour_schemes::kinds::ColourScheme;

/// Normalises an escape time by the iteration cap and looks it up in the
/// scheme's gradient. Points that never escaped land on the gradient's end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeColourMap {
    gradient: Gradient,
    max_iterations: u32,
}

impl EscapeTimeColourMap {
    pub fn new(scheme: ColourScheme, max_iterations: u32) -> Result<Self, FractalError> {
        if max_iterations == 0 {
            return Err(FractalError::invalid("max_iter", "must be at least 1"));
        }

        Ok(Self {
            gradient: Gradient::for_scheme(scheme),
            max_iterations,
        })
    }

    #[must_use]
    pub fn gradient(&self) -> Gradient {
        self.gradient
    }

    #[inline]
    #[must_use]
    pub fn normalise(&self, iterations: u32) -> f64 {
        (f64::from(iterations) / f64::from(self.max_iterations)).min(1.0)
    }
}

impl ColourMap<u32> for EscapeTimeColourMap {
    fn map(&self, iterations: u32) -> Colour {
        self.gradient.sample(self.normalise(iterations))
    }
}
