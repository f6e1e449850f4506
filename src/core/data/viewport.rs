use crate::core::data::complex::Complex;
use crate::core::errors::FractalError;

pub const DEFAULT_REAL_MIN: f64 = -2.0;
pub const DEFAULT_REAL_MAX: f64 = 0.8;
pub const DEFAULT_IMAG_MIN: f64 = -1.4;
pub const DEFAULT_IMAG_MAX: f64 = 1.4;

/// Rectangle of the complex plane sampled onto the escape-time grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

impl Viewport {
    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Self, FractalError> {
        check_axis("viewport.real", real_min, real_max)?;
        check_axis("viewport.imag", imag_min, imag_max)?;

        Ok(Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.real_max
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.imag_min
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.imag_max
    }

    #[must_use]
    pub fn min_corner(&self) -> Complex {
        Complex::new(self.real_min, self.imag_min)
    }

    #[must_use]
    pub fn real_span(&self) -> f64 {
        self.real_max - self.real_min
    }

    #[must_use]
    pub fn imag_span(&self) -> f64 {
        self.imag_max - self.imag_min
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            real_min: DEFAULT_REAL_MIN,
            real_max: DEFAULT_REAL_MAX,
            imag_min: DEFAULT_IMAG_MIN,
            imag_max: DEFAULT_IMAG_MAX,
        }
    }
}

fn check_axis(parameter: &'static str, min: f64, max: f64) -> Result<(), FractalError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(FractalError::invalid(
            parameter,
            format!("bounds must be finite, got [{}, {}]", min, max),
        ));
    }

    if min >= max {
        return Err(FractalError::invalid(
            parameter,
            format!("min must be less than max, got [{}, {}]", min, max),
        ));
    }

    Ok(())
}
