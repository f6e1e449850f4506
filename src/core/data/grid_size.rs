use crate::core::errors::FractalError;

/// A cell of the escape-time grid. Row 0 is the top row.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridPoint {
    pub row: u32,
    pub col: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    height: u32,
    width: u32,
}

impl GridSize {
    pub fn new(height: u32, width: u32) -> Result<Self, FractalError> {
        if height == 0 {
            return Err(FractalError::invalid("height", "must be at least 1"));
        }

        if width == 0 {
            return Err(FractalError::invalid("width", "must be at least 1"));
        }

        Ok(Self { height, width })
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.height as usize * self.width as usize
    }

    #[must_use]
    pub fn contains(&self, point: GridPoint) -> bool {
        point.row < self.height && point.col < self.width
    }
}
