use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::grid_size::{GridPoint, GridSize};
use crate::core::data::viewport::Viewport;
use crate::core::errors::FractalError;
use crate::core::util::grid_to_complex_coords::GridToComplexCoords;

/// |z|² threshold, i.e. an escape radius of 2.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iteration at which the orbit of `c` escapes, or `max_iterations` if it
/// stays bounded.
///
/// The orbit starts at `z = c` rather than `z = 0` and the escape test runs
/// after each squaring step, so iteration 0 already reflects `c² + c`.
#[inline]
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;

    for iteration in 0..max_iterations {
        z = z.square() + c;
        let magnitude_squared = z.magnitude_squared();
        // overflow to inf/NaN counts as escaped
        if magnitude_squared.is_nan() || magnitude_squared > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    grid_size: GridSize,
    coords: GridToComplexCoords,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(
        grid_size: GridSize,
        viewport: Viewport,
        max_iterations: u32,
    ) -> Result<Self, FractalError> {
        if max_iterations == 0 {
            return Err(FractalError::invalid("max_iter", "must be at least 1"));
        }

        Ok(Self {
            grid_size,
            coords: GridToComplexCoords::new(grid_size, viewport),
            max_iterations,
        })
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    fn compute(&self, point: GridPoint) -> u32 {
        escape_time(self.coords.to_complex(point), self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 20, 50, 100, 1000] {
            assert_eq!(escape_time(Complex::new(0.0, 0.0), max_iterations), max_iterations);
        }
    }

    #[test]
    fn test_far_point_escapes_on_first_step() {
        assert_eq!(escape_time(Complex::new(3.0, 3.0), 50), 0);
    }

    #[test]
    fn test_huge_finite_points_escape_on_first_step() {
        // squaring overflows to inf, and inf * 0 yields NaN in the imaginary part
        assert_eq!(escape_time(Complex::new(-1e308, 0.0), 20), 0);
        assert_eq!(escape_time(Complex::new(1e308, 0.0), 20), 0);
        assert_eq!(escape_time(Complex::new(0.0, f64::MAX), 20), 0);
    }

    #[test]
    fn test_minus_one_is_periodic_and_bounded() {
        // z = -1 -> 0 -> -1 -> ...
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 100), 100);
    }

    #[test]
    fn test_point_just_outside_escapes_late() {
        // c = 0.3: 0.39, 0.452, 0.504, ... creeps past 2 after several steps
        let escape = escape_time(Complex::new(0.3, 0.0), 100);

        assert!(escape > 2 && escape < 100, "escape time was {}", escape);
    }

    #[test]
    fn test_c_equal_one_escapes_at_iteration_one() {
        // z = 1 -> 2 (|z|² = 4, not > 4) -> 5
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 10), 1);
    }

    #[test]
    fn test_new_rejects_zero_iterations() {
        let result = MandelbrotAlgorithm::new(GridSize::new(2, 2).unwrap(), Viewport::default(), 0);

        assert!(matches!(
            result,
            Err(FractalError::InvalidParameter { parameter: "max_iter", .. })
        ));
    }

    #[test]
    fn test_compute_samples_viewport_corners() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let algorithm = MandelbrotAlgorithm::new(GridSize::new(3, 3).unwrap(), viewport, 30).unwrap();

        // centre is c = 0, bottom-right is c = 2 + 2i
        assert_eq!(algorithm.compute(GridPoint { row: 1, col: 1 }), 30);
        assert_eq!(algorithm.compute(GridPoint { row: 2, col: 2 }), 0);
        // c = -2 lands on z = 2 forever, which sits exactly on the threshold
        assert_eq!(algorithm.compute(GridPoint { row: 1, col: 0 }), 30);
    }
}
