use crate::error::{GridError, GridResult};
use grid_util::point::Point;

pub const ROWS: usize = 20;
pub const COLS: usize = 20;
pub const START_ROW: usize = 5;
pub const START_COL: usize = 5;
pub const END_ROW: usize = 15;
pub const END_COL: usize = 15;

/// Fixed layout of a grid: its dimensions and the coordinates of the start and end nodes.
///
/// A [GridConfig] can only be obtained through [GridConfig::new] (or [Default], or
/// deserialization when the `serde` feature is enabled), all of which validate it, so a grid
/// built from one always has exactly one in-bounds start and one distinct in-bounds end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGridConfig"))]
pub struct GridConfig {
    rows: usize,
    cols: usize,
    start_row: usize,
    start_col: usize,
    end_row: usize,
    end_col: usize,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            rows: ROWS,
            cols: COLS,
            start_row: START_ROW,
            start_col: START_COL,
            end_row: END_ROW,
            end_col: END_COL,
        }
    }
}

impl GridConfig {
    pub fn new(
        rows: usize,
        cols: usize,
        (start_row, start_col): (usize, usize),
        (end_row, end_col): (usize, usize),
    ) -> GridResult<GridConfig> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        // Coordinates are handed out as i32 points and nodes are indexed by row * cols + col
        if rows > i32::MAX as usize || cols > i32::MAX as usize || rows.checked_mul(cols).is_none()
        {
            return Err(GridError::TooLarge { rows, cols });
        }
        for (role, row, col) in [("start", start_row, start_col), ("end", end_row, end_col)] {
            if row >= rows || col >= cols {
                return Err(GridError::EndpointOutOfBounds { role, row, col });
            }
        }
        if (start_row, start_col) == (end_row, end_col) {
            return Err(GridError::StartEqualsEnd {
                row: start_row,
                col: start_col,
            });
        }
        Ok(GridConfig {
            rows,
            cols,
            start_row,
            start_col,
            end_row,
            end_col,
        })
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// Number of nodes in the grid.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }
    pub fn start(&self) -> (usize, usize) {
        (self.start_row, self.start_col)
    }
    pub fn end(&self) -> (usize, usize) {
        (self.end_row, self.end_col)
    }
    pub fn start_point(&self) -> Point {
        Point::new(self.start_col as i32, self.start_row as i32)
    }
    pub fn end_point(&self) -> Point {
        Point::new(self.end_col as i32, self.end_row as i32)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGridConfig {
    rows: usize,
    cols: usize,
    start_row: usize,
    start_col: usize,
    end_row: usize,
    end_col: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGridConfig> for GridConfig {
    type Error = GridError;

    fn try_from(raw: RawGridConfig) -> GridResult<GridConfig> {
        GridConfig::new(
            raw.rows,
            raw.cols,
            (raw.start_row, raw.start_col),
            (raw.end_row, raw.end_col),
        )
    }
}
