use log::trace;
use rayon::prelude::*;

use crate::core::actions::cancellation::{should_stop, CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridPoint;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// For cancel-aware generation, use [`generate_fractal_parallel_rayon_cancelable`].
pub fn generate_fractal_parallel_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Output>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Copy + Default + Send,
{
    match generate_fractal_parallel_rayon_cancelable(algorithm, &NeverCancel) {
        Ok(values) => values,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Generates fractal data in parallel with cancellation support.
///
/// The output is preallocated and split into one disjoint slice per row;
/// rayon hands rows to its workers and each worker writes only its own
/// slice. The token is polled at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`](crate::core::actions::cancellation::CANCEL_CHECK_INTERVAL_PIXELS)
/// pixels within a row. On cancellation no partial output is returned.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Output>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Copy + Default + Send,
    C: CancelToken,
{
    let size = algorithm.grid_size();
    let row_width = size.width() as usize;
    let mut values = vec![Alg::Output::default(); size.cell_count()];

    trace!(
        "generating {}x{} grid across {} rayon threads",
        size.width(),
        size.height(),
        rayon::current_num_threads()
    );

    values
        .par_chunks_mut(row_width)
        .enumerate()
        .try_for_each(|(row, row_values)| {
            for (col, value) in row_values.iter_mut().enumerate() {
                if should_stop(col, cancel) {
                    return Err(Cancelled);
                }

                *value = algorithm.compute(GridPoint {
                    row: row as u32,
                    col: col as u32,
                });
            }

            Ok(())
        })?;

    Ok(values)
}
