use crate::core::data::grid_size::{GridPoint, GridSize};

/// Per-cell computation over a fixed grid. Cells must not depend on each
/// other so the generators are free to evaluate them in any order.
pub trait FractalAlgorithm {
    type Output;

    fn grid_size(&self) -> GridSize;

    fn compute(&self, point: GridPoint) -> Self::Output;
}
