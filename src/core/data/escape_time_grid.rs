use crate::core::data::grid_size::{GridPoint, GridSize};
use crate::core::errors::FractalError;

/// Row-major escape iterations. A value equal to the iteration cap marks a
/// point that never escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeTimeGrid {
    size: GridSize,
    values: Vec<u32>,
}

impl EscapeTimeGrid {
    pub fn from_values(size: GridSize, values: Vec<u32>) -> Result<Self, FractalError> {
        if values.len() != size.cell_count() {
            return Err(FractalError::invalid(
                "values",
                format!(
                    "expected {} values for a {}x{} grid, got {}",
                    size.cell_count(),
                    size.height(),
                    size.width(),
                    values.len()
                ),
            ));
        }

        Ok(Self { size, values })
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.height()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.width()
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, point: GridPoint) -> Option<u32> {
        if !self.size.contains(point) {
            return None;
        }

        let index = point.row as usize * self.size.width() as usize + point.col as usize;
        Some(self.values[index])
    }

    /// Number of cells whose orbit escaped before `max_iterations`.
    #[must_use]
    pub fn escaped_count(&self, max_iterations: u32) -> usize {
        self.values.iter().filter(|&&v| v < max_iterations).count()
    }

    #[must_use]
    pub fn escaped_fraction(&self, max_iterations: u32) -> f64 {
        self.escaped_count(max_iterations) as f64 / self.values.len() as f64
    }
}
