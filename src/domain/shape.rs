//! Dense rectangular seed shapes and their rotation.

use super::{Cell, Orientation};

/// A dense rectangle of cells, stored row-major.
///
/// Ragged input is padded with dead cells on construction, so every row
/// always has exactly `width` cells.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Shape {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Shape {
    /// A shape with no cells; stamping it is a no-op
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from rows of booleans, padding short rows with dead cells
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Self::empty();
        }
        let height = rows.len();

        let cells = rows
            .into_iter()
            .flat_map(|row| {
                let pad = width - row.len();
                row.into_iter()
                    .map(Cell::from)
                    .chain(std::iter::repeat_n(Cell::Dead, pad))
            })
            .collect();

        Self { width, height, cells }
    }

    /// Parse text rows where `O` marks a live cell and anything else is dead
    pub fn from_art(rows: &[&str]) -> Self {
        Self::from_rows(
            rows.iter()
                .map(|row| row.chars().map(|c| c == 'O').collect())
                .collect(),
        )
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get shape dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell state at (row, col); false outside the shape
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col].is_alive()
    }

    /// Iterate rows as slices of cells
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks_exact panics on zero; an empty shape has no rows anyway
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Positions of live cells as (row, col)
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx / self.width, idx % self.width))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Rotate 90° clockwise: an R×C shape becomes C×R with
    /// `rotated[j][R-1-i] = original[i][j]`
    pub fn rotate_clockwise(&self) -> Self {
        let (rows, cols) = (self.height, self.width);
        let mut cells = vec![Cell::Dead; self.cells.len()];

        for i in 0..rows {
            for j in 0..cols {
                // Rotated shape is `rows` wide
                cells[j * rows + (rows - 1 - i)] = self.cells[i * cols + j];
            }
        }

        Self {
            width: rows,
            height: cols,
            cells,
        }
    }

    /// Rotate to face the given orientation via repeated quarter turns
    pub fn rotate(&self, orientation: Orientation) -> Self {
        (0..orientation.quarter_turns()).fold(self.clone(), |shape, _| shape.rotate_clockwise())
    }
}
