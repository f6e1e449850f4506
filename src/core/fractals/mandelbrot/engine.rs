use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::data::escape_time_grid::EscapeTimeGrid;
use crate::core::data::grid_size::GridSize;
use crate::core::data::viewport::Viewport;
use crate::core::errors::{CancelableError, FractalError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Escape-time grid for `viewport` sampled at `height` x `width`, computed
/// row-parallel on the rayon pool.
pub fn compute_escape_times(
    height: u32,
    width: u32,
    max_iter: u32,
    viewport: Viewport,
) -> Result<EscapeTimeGrid, FractalError> {
    compute_escape_times_cancelable(height, width, max_iter, viewport, &NeverCancel).map_err(
        |e| match e {
            CancelableError::Fractal(err) => err,
            CancelableError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        },
    )
}

/// Like [`compute_escape_times`], but gives up between pixel blocks once
/// `cancel` fires. Inputs are validated before any row is started.
pub fn compute_escape_times_cancelable<C: CancelToken>(
    height: u32,
    width: u32,
    max_iter: u32,
    viewport: Viewport,
    cancel: &C,
) -> Result<EscapeTimeGrid, CancelableError> {
    let size = GridSize::new(height, width)?;
    let algorithm = MandelbrotAlgorithm::new(size, viewport, max_iter)?;

    let values = generate_fractal_parallel_rayon_cancelable(&algorithm, cancel)?;

    Ok(EscapeTimeGrid::from_values(size, values)?)
}

/// Single-threaded equivalent of [`compute_escape_times`].
pub fn compute_escape_times_serial(
    height: u32,
    width: u32,
    max_iter: u32,
    viewport: Viewport,
) -> Result<EscapeTimeGrid, FractalError> {
    let size = GridSize::new(height, width)?;
    let algorithm = MandelbrotAlgorithm::new(size, viewport, max_iter)?;

    EscapeTimeGrid::from_values(size, generate_fractal_serial(&algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::{CancelFlag, Cancelled};
    use crate::core::data::grid_size::GridPoint;

    #[test]
    fn test_grid_has_requested_shape_and_range() {
        let grid = compute_escape_times(30, 40, 25, Viewport::default()).unwrap();

        assert_eq!(grid.height(), 30);
        assert_eq!(grid.width(), 40);
        assert_eq!(grid.values().len(), 1200);
        assert!(grid.values().iter().all(|&v| v <= 25));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let viewport = Viewport::default();

        assert_eq!(
            compute_escape_times(57, 83, 60, viewport).unwrap(),
            compute_escape_times_serial(57, 83, 60, viewport).unwrap()
        );
    }

    #[test]
    fn test_row_zero_is_imag_min() {
        let viewport = Viewport::new(-1.0, 0.0, -3.0, 0.0).unwrap();
        let grid = compute_escape_times(4, 2, 20, viewport).unwrap();

        // row 0 samples c = -1 - 3i, the last row sits on the real axis
        assert_eq!(grid.get(GridPoint { row: 0, col: 0 }), Some(0));
        assert_eq!(grid.get(GridPoint { row: 3, col: 0 }), Some(20));
        assert_eq!(grid.get(GridPoint { row: 3, col: 1 }), Some(20));
    }

    #[test]
    fn test_rows_mirror_about_real_axis() {
        // Quarter steps are exact in binary, and the set is symmetric about
        // the real axis, so rows mirror each other around the middle row.
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let grid = compute_escape_times(9, 13, 40, viewport).unwrap();
        let rows: Vec<&[u32]> = grid.values().chunks(13).collect();

        assert_eq!(rows[0], rows[8]);
        assert_eq!(rows[3], rows[5]);
        // row 4 is the real axis: c = -1 is bounded, c = 1 escapes
        assert_eq!(grid.get(GridPoint { row: 4, col: 4 }), Some(40));
        assert_eq!(grid.get(GridPoint { row: 4, col: 12 }), Some(1));
    }

    #[test]
    fn test_centre_of_default_view_is_inside() {
        // 15 columns over [-2, 0.8] put column 10 exactly on 0
        let grid = compute_escape_times(15, 15, 30, Viewport::default()).unwrap();

        assert_eq!(grid.get(GridPoint { row: 7, col: 10 }), Some(30));
    }

    #[test]
    fn test_rejects_zero_dimensions_before_work() {
        assert!(matches!(
            compute_escape_times(0, 10, 10, Viewport::default()),
            Err(FractalError::InvalidParameter { parameter: "height", .. })
        ));
        assert!(matches!(
            compute_escape_times(10, 0, 10, Viewport::default()),
            Err(FractalError::InvalidParameter { parameter: "width", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_iterations() {
        assert!(matches!(
            compute_escape_times(10, 10, 0, Viewport::default()),
            Err(FractalError::InvalidParameter { parameter: "max_iter", .. })
        ));
    }

    #[test]
    fn test_cancelled_token_yields_no_grid() {
        let flag = CancelFlag::new();
        flag.cancel();

        let result = compute_escape_times_cancelable(50, 50, 20, Viewport::default(), &flag);

        assert_eq!(result, Err(CancelableError::Cancelled(Cancelled)));
    }

    #[test]
    fn test_validation_wins_over_cancellation() {
        let flag = CancelFlag::new();
        flag.cancel();

        let result = compute_escape_times_cancelable(0, 50, 20, Viewport::default(), &flag);

        assert!(matches!(result, Err(CancelableError::Fractal(_))));
    }
}
