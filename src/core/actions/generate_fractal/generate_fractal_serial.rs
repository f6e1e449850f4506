use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridPoint;

/// Single-threaded, row-major reference generator.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Output> {
    let size = algorithm.grid_size();

    (0..size.height())
        .flat_map(|row| (0..size.width()).map(move |col| GridPoint { row, col }))
        .map(|point| algorithm.compute(point))
        .collect()
}
