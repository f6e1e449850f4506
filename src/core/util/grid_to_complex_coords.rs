use crate::core::data::complex::Complex;
use crate::core::data::grid_size::{GridPoint, GridSize};
use crate::core::data::viewport::Viewport;

/// Linear sampling of a viewport onto a grid: column 0 sits on `real_min`,
/// the last column on `real_max`, row 0 on `imag_min`, the last row on
/// `imag_max`. An axis with a single sample sits on its min bound.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridToComplexCoords {
    origin: Complex,
    real_step: f64,
    imag_step: f64,
}

impl GridToComplexCoords {
    #[must_use]
    pub fn new(size: GridSize, viewport: Viewport) -> Self {
        Self {
            origin: viewport.min_corner(),
            real_step: viewport.real_span() / intervals(size.width()),
            imag_step: viewport.imag_span() / intervals(size.height()),
        }
    }

    #[inline]
    #[must_use]
    pub fn to_complex(&self, point: GridPoint) -> Complex {
        Complex {
            real: self.origin.real + f64::from(point.col) * self.real_step,
            imag: self.origin.imag + f64::from(point.row) * self.imag_step,
        }
    }
}

fn intervals(samples: u32) -> f64 {
    f64::from(samples.saturating_sub(1).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_top_left_maps_to_min_corner() {
        let coords = GridToComplexCoords::new(GridSize::new(101, 101).unwrap(), Viewport::default());
        let c = coords.to_complex(GridPoint { row: 0, col: 0 });

        assert_eq!(c, Complex::new(-2.0, -1.4));
    }

    #[test]
    fn test_last_cell_maps_to_max_corner() {
        let coords = GridToComplexCoords::new(GridSize::new(101, 201).unwrap(), Viewport::default());
        let c = coords.to_complex(GridPoint { row: 100, col: 200 });

        assert!(close(c.real, 0.8));
        assert!(close(c.imag, 1.4));
    }

    #[test]
    fn test_centre_of_symmetric_viewport() {
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let coords = GridToComplexCoords::new(GridSize::new(101, 101).unwrap(), viewport);
        let c = coords.to_complex(GridPoint { row: 50, col: 50 });

        assert!(close(c.real, 0.0));
        assert!(close(c.imag, 0.0));
    }

    #[test]
    fn test_rows_follow_imaginary_axis() {
        let viewport = Viewport::new(0.0, 4.0, 0.0, 2.0).unwrap();
        let coords = GridToComplexCoords::new(GridSize::new(3, 5).unwrap(), viewport);

        assert_eq!(coords.to_complex(GridPoint { row: 1, col: 0 }), Complex::new(0.0, 1.0));
        assert_eq!(coords.to_complex(GridPoint { row: 0, col: 1 }), Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_single_sample_axis_sits_on_min_bound() {
        let viewport = Viewport::new(-2.0, 2.0, -1.0, 1.0).unwrap();
        let coords = GridToComplexCoords::new(GridSize::new(1, 1).unwrap(), viewport);

        assert_eq!(coords.to_complex(GridPoint { row: 0, col: 0 }), Complex::new(-2.0, -1.0));
    }
}
