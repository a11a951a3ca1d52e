use super::{Cell, LifeError, Result, Shape};
use rand::Rng;
use rayon::prelude::*;

/// Moore neighborhood offsets as (row, col) deltas
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid manages the 2D cellular automaton grid.
/// Uses functional, immutable updates for predictable state transitions.
///
/// Cells are addressed as (row, col). Everything outside the grid counts
/// as permanently dead; nothing wraps around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(LifeError::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    fn out_of_range(&self, row: usize, col: usize) -> LifeError {
        LifeError::IndexOutOfRange {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }

    /// Get cell state at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        if !self.contains(row, col) {
            return Err(self.out_of_range(row, col));
        }
        Ok(self.cells[self.get_index(row, col)].is_alive())
    }

    /// Set cell state at (row, col)
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        if !self.contains(row, col) {
            return Err(self.out_of_range(row, col));
        }
        let idx = self.get_index(row, col);
        self.cells[idx] = Cell::from(alive);
        Ok(())
    }

    /// Cell state at any signed coordinate; off-grid cells are dead
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if self.contains(r, c) => self.cells[self.get_index(r, c)].is_alive(),
            _ => false,
        }
    }

    /// Count live cells in the Moore neighborhood of (row, col)
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| {
                match (row.checked_add_signed(dr), col.checked_add_signed(dc)) {
                    (Some(r), Some(c)) if self.contains(r, c) => {
                        self.cells[self.get_index(r, c)].is_alive()
                    }
                    _ => false,
                }
            })
            .count() as u8
    }

    /// Copy `shape` onto the grid with its top-left corner at
    /// (row_offset, col_offset), overwriting whatever was there.
    ///
    /// The whole footprint is bounds-checked before any cell is written,
    /// so a failed stamp leaves the grid untouched.
    pub fn stamp(&mut self, shape: &Shape, row_offset: usize, col_offset: usize) -> Result<()> {
        if shape.is_empty() {
            return Ok(());
        }

        let (shape_width, shape_height) = shape.dimensions();
        let last_row = row_offset.checked_add(shape_height - 1);
        let last_col = col_offset.checked_add(shape_width - 1);
        match (last_row, last_col) {
            (Some(r), Some(c)) if self.contains(r, c) => {}
            (r, c) => {
                return Err(self.out_of_range(
                    r.unwrap_or(usize::MAX),
                    c.unwrap_or(usize::MAX),
                ));
            }
        }

        for (i, shape_row) in shape.rows().enumerate() {
            let start = self.get_index(row_offset + i, col_offset);
            self.cells[start..start + shape_width].copy_from_slice(shape_row);
        }
        Ok(())
    }

    fn next_cell(&self, row: usize, col: usize) -> Cell {
        let current = self.cells[self.get_index(row, col)];
        current.evolve(self.count_live_neighbors(row, col))
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn next_generation(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Parallel evolution using rayon, one task per row.
    /// Reads only `self`; the result is identical to [`Grid::next_generation`].
    pub fn next_generation_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|row| (0..self.width).map(move |col| self.next_cell(row, col)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Render as `height` newline-terminated lines of glyphs
    pub fn render(&self, alive_glyph: &str, dead_glyph: &str) -> String {
        let glyph_len = alive_glyph.len().max(dead_glyph.len());
        let mut out = String::with_capacity(self.height * (self.width * glyph_len + 1));

        for row in self.cells.chunks_exact(self.width) {
            for cell in row {
                out.push_str(if cell.is_alive() { alive_glyph } else { dead_glyph });
            }
            out.push('\n');
        }
        out
    }

    /// Count total alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill each cell alive with probability `density`.
    /// Densities are clamped to 0.0..=1.0; NaN counts as 0.0.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Iterate over all cells as (row, col, alive)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (idx / self.width, idx % self.width, cell.is_alive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{presets, Orientation, PatternBuilder};
    use rand::{rngs::StdRng, SeedableRng};

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(row, col) in alive {
            grid.set(row, col, true).unwrap();
        }
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 4).unwrap();
        assert_eq!(grid.dimensions(), (7, 4));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimension { width: 0, height: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_oversized_dimensions_are_invalid() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(LifeError::InvalidDimension { width: usize::MAX, height: 2 })
        );
        assert!(Grid::new(usize::MAX / 2 + 1, 2).is_err());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(2, 3, true).unwrap();
        assert_eq!(grid.get(2, 3), Ok(true));
        assert_eq!(grid.get(0, 0), Ok(false));
        assert_eq!(
            grid.get(3, 0),
            Err(LifeError::IndexOutOfRange { row: 3, col: 0, width: 4, height: 3 })
        );
        assert!(grid.set(0, 4, true).is_err());
    }

    #[test]
    fn test_is_alive_outside_is_dead() {
        let grid = grid_with(3, 3, &[(0, 0), (2, 2)]);
        assert!(grid.is_alive(0, 0));
        assert!(!grid.is_alive(-1, 0));
        assert!(!grid.is_alive(0, -1));
        assert!(!grid.is_alive(3, 2));
        assert!(!grid.is_alive(2, 3));
        assert!(!grid.is_alive(isize::MIN, isize::MAX));
    }

    #[test]
    fn test_count_far_outside_grid_is_zero() {
        let grid = grid_with(3, 3, &[(0, 0), (0, 1)]);
        // Must not wrap around to row 0 or overflow
        assert_eq!(grid.count_live_neighbors(usize::MAX, 0), 0);
        assert_eq!(grid.count_live_neighbors(0, usize::MAX), 0);
        assert_eq!(grid.count_live_neighbors(usize::MAX / 2 + 1, 0), 0);
        assert_eq!(grid.count_live_neighbors(usize::MAX, usize::MAX), 0);
        // One step off the edge still sees the border cells
        assert_eq!(grid.count_live_neighbors(0, 3), 0);
        assert_eq!(grid.count_live_neighbors(0, 2), 1);
        assert_eq!(grid.count_live_neighbors(3, 0), 0);
    }

    #[test]
    fn test_count_live_neighbors() {
        let grid = grid_with(3, 3, &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
        // Corners see only three in-grid neighbors
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(0, 1), 5);
    }

    #[test]
    fn test_no_wraparound_at_edges() {
        // Cells on opposite edges must not see each other
        let grid = grid_with(5, 5, &[(0, 2), (4, 2), (2, 0)]);
        assert_eq!(grid.count_live_neighbors(0, 2), 0);
        assert_eq!(grid.count_live_neighbors(2, 4), 0);
    }

    #[test]
    fn test_stamp_places_and_overwrites() {
        let mut grid = grid_with(5, 5, &[(1, 1)]);
        let shape = Shape::from_art(&["O.", ".O"]);
        grid.stamp(&shape, 1, 1).unwrap();
        // Dead shape cells clear what was underneath
        assert_eq!(alive_cells(&grid), vec![(1, 1), (2, 2)]);

        let mut grid = grid_with(5, 5, &[(1, 2)]);
        grid.stamp(&shape, 1, 1).unwrap();
        assert_eq!(alive_cells(&grid), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_stamp_at_far_corner() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.stamp(&presets::GLIDER.shape(), 2, 2).unwrap();
        assert_eq!(grid.population(), 5);
        assert!(grid.is_alive(4, 4));
    }

    #[test]
    fn test_stamp_out_of_range_leaves_grid_untouched() {
        let mut grid = grid_with(5, 5, &[(0, 0)]);
        let before = grid.clone();
        let err = grid.stamp(&presets::GLIDER.shape(), 3, 0).unwrap_err();
        assert!(matches!(err, LifeError::IndexOutOfRange { row: 5, .. }));
        assert_eq!(grid, before);

        assert!(grid.stamp(&presets::GLIDER.shape(), 0, usize::MAX).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_stamp_empty_shape_is_noop() {
        let mut grid = grid_with(3, 3, &[(1, 1)]);
        let before = grid.clone();
        grid.stamp(&Shape::empty(), 100, 100).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_next_generation_does_not_mutate_input() {
        let mut grid = Grid::new(20, 20).unwrap();
        grid.stamp(&presets::R_PENTOMINO.shape(), 8, 8).unwrap();
        let before = grid.render("*", "-");
        let next = grid.next_generation();
        assert_eq!(grid.render("*", "-"), before);
        assert_ne!(next.render("*", "-"), before);
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.next_generation().population(), 0);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        assert_eq!(grid.next_generation().population(), 0);
    }

    #[test]
    fn test_block_still_life() {
        let grid = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(grid.next_generation(), grid);
    }

    #[test]
    fn test_block_in_corner_is_stable() {
        let grid = grid_with(2, 2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.next_generation(), grid);
    }

    #[test]
    fn test_blinker_period_two() {
        let mut grid = Grid::new(9, 9).unwrap();
        let blinker = PatternBuilder::new().select_type("blinker").unwrap().build();
        grid.stamp(&blinker, 3, 4).unwrap();

        let gen1 = grid.next_generation();
        let gen2 = gen1.next_generation();
        assert_ne!(gen1.render("*", "-"), grid.render("*", "-"));
        assert_eq!(gen2.render("*", "-"), grid.render("*", "-"));
        assert_eq!(alive_cells(&gen1), vec![(4, 3), (4, 4), (4, 5)]);
    }

    #[test]
    fn test_oscillator_pattern_is_a_blinker() {
        let mut grid = Grid::new(9, 9).unwrap();
        grid.stamp(&presets::OSCILLATOR.shape(), 4, 3).unwrap();
        let gen1 = grid.next_generation();
        assert_ne!(gen1, grid);
        assert_eq!(gen1.next_generation(), grid);
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let glider = PatternBuilder::new().select_type("glider").unwrap().build();
        let mut grid = Grid::new(150, 50).unwrap();
        grid.stamp(&glider, 10, 10).unwrap();

        let after = (0..4).fold(grid, |g, _| g.next_generation());

        let mut expected = Grid::new(150, 50).unwrap();
        expected.stamp(&glider, 11, 11).unwrap();
        assert_eq!(after.render("*", "-"), expected.render("*", "-"));
    }

    #[test]
    fn test_rotated_glider_travels_other_way() {
        // Facing right the glider heads down-left
        let glider = PatternBuilder::new()
            .select_type("glider")
            .unwrap()
            .rotate(Orientation::Right)
            .build();
        let mut grid = Grid::new(20, 20).unwrap();
        grid.stamp(&glider, 10, 10).unwrap();

        let after = (0..4).fold(grid, |g, _| g.next_generation());

        let mut expected = Grid::new(20, 20).unwrap();
        expected.stamp(&glider, 11, 9).unwrap();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = Grid::new(64, 48).unwrap();
        grid.randomize(&mut StdRng::seed_from_u64(7), 0.35);

        let mut serial = grid.clone();
        let mut parallel = grid;
        for _ in 0..5 {
            serial = serial.next_generation();
            parallel = parallel.next_generation_parallel();
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_render_shape() {
        let grid = grid_with(3, 2, &[(0, 1), (1, 2)]);
        assert_eq!(grid.render("*", "-"), "-*-\n--*\n");
        assert_eq!(grid.render("[]", "  "), "  []  \n    []\n");
    }

    #[test]
    fn test_render_line_and_glyph_counts() {
        let mut grid = Grid::new(13, 6).unwrap();
        grid.randomize(&mut StdRng::seed_from_u64(1), 0.5);
        let text = grid.render("##", "..");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        for line in lines {
            assert_eq!(line.len() / 2, 13);
            assert_eq!(line.matches("##").count() + line.matches("..").count(), 13);
        }
    }

    #[test]
    fn test_randomize_extremes_and_clear() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        grid.randomize(&mut rng, 1.0);
        assert_eq!(grid.population(), 100);
        grid.randomize(&mut rng, 0.0);
        assert_eq!(grid.population(), 0);

        grid.randomize(&mut rng, f64::NAN);
        assert_eq!(grid.population(), 0);
        grid.randomize(&mut rng, f64::INFINITY);
        assert_eq!(grid.population(), 100);
        grid.randomize(&mut rng, -3.0);
        assert_eq!(grid.population(), 0);

        grid.randomize(&mut rng, 0.5);
        grid.clear();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.dimensions(), (10, 10));
    }
}
