use std::ops::{Index, IndexMut};

use crate::{Position, TileId};

/// The placement mapping of a puzzle: which tile occupies each grid cell.
///
/// Dimensions are fixed for the lifetime of the grid. The mapping is always a
/// bijection from cells to tile identities — mutation only ever exchanges two
/// cells' contents, never creates or destroys a tile.
///
/// Indexing with an out-of-bounds [`Position`] panics; callers are expected
/// to validate coordinates against [`TileGrid::width`] / [`TileGrid::height`]
/// before passing them in.
///
/// # Examples
///
/// ```
/// use tessella_core::{Position, TileGrid, TileId};
///
/// let mut grid = TileGrid::new(4, 3);
/// assert_eq!(grid[Position::new(2, 1)], TileId::new(2, 1));
///
/// grid.swap(Position::new(0, 0), Position::new(2, 3));
/// assert_eq!(grid[Position::new(0, 0)], TileId::new(2, 3));
/// assert!(!grid.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<TileId>,
}

impl TileGrid {
    /// Creates a grid in the solved arrangement: every cell holds its own
    /// tile.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| TileId::new(row, col)))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether `pos` names a cell of this grid.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub(crate) fn cell_index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        pos.row * self.width + pos.col
    }

    /// Iterates over all cell positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    /// Iterates over the 4-directional neighbors of `pos` that lie within
    /// the grid.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width, self.height);
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(d_row, d_col)| pos.offset_by(d_row, d_col))
            .filter(move |n| n.row < height && n.col < width)
    }

    /// Exchanges the tiles at two cells.
    ///
    /// Swapping a cell with itself is a no-op. The bijection between cells
    /// and tiles is preserved by construction.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, a: Position, b: Position) {
        let i = self.cell_index(a);
        let j = self.cell_index(b);
        self.cells.swap(i, j);
    }

    /// Whether the tile at `pos` is back in its original place.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn is_correct(&self, pos: Position) -> bool {
        self[pos].home() == pos
    }

    /// Whether every tile is back in its original place.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.positions().all(|pos| self.is_correct(pos))
    }

    /// Computes a fresh per-cell correctness snapshot.
    #[must_use]
    pub fn correctness(&self) -> CorrectnessGrid {
        let cells = self.positions().map(|pos| self.is_correct(pos)).collect();
        CorrectnessGrid {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Restores the solved arrangement.
    pub fn reset(&mut self) {
        for pos in self.positions() {
            let i = self.cell_index(pos);
            self.cells[i] = TileId::from(pos);
        }
    }
}

impl Index<Position> for TileGrid {
    type Output = TileId;

    fn index(&self, pos: Position) -> &TileId {
        &self.cells[self.cell_index(pos)]
    }
}

impl IndexMut<Position> for TileGrid {
    fn index_mut(&mut self, pos: Position) -> &mut TileId {
        let i = self.cell_index(pos);
        &mut self.cells[i]
    }
}

/// A per-cell snapshot of which tiles are correctly placed.
///
/// Produced by [`TileGrid::correctness`]; not kept up to date by later grid
/// mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectnessGrid {
    width: usize,
    height: usize,
    cells: Box<[bool]>,
}

impl CorrectnessGrid {
    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of correctly-placed cells.
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.cells.iter().filter(|&&correct| correct).count()
    }
}

impl Index<Position> for CorrectnessGrid {
    type Output = bool;

    fn index(&self, pos: Position) -> &bool {
        assert!(
            pos.row < self.height && pos.col < self.width,
            "position {pos} out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[pos.row * self.width + pos.col]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn new_grid_is_solved_identity() {
        let grid = TileGrid::new(3, 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cell_count(), 6);
        assert!(grid.is_solved());
        for pos in grid.positions() {
            assert_eq!(grid[pos], TileId::from(pos));
        }
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be positive")]
    fn zero_width_panics() {
        let _ = TileGrid::new(0, 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_index_panics() {
        let grid = TileGrid::new(2, 2);
        let _ = grid[Position::new(0, 2)];
    }

    #[test]
    fn swap_is_an_involution() {
        let mut grid = TileGrid::new(3, 3);
        let a = Position::new(0, 1);
        let b = Position::new(2, 2);
        let before = grid.clone();

        grid.swap(a, b);
        assert_eq!(grid[a], TileId::new(2, 2));
        assert_eq!(grid[b], TileId::new(0, 1));
        assert_ne!(grid, before);

        grid.swap(a, b);
        assert_eq!(grid, before);
    }

    #[test]
    fn self_swap_is_a_no_op() {
        let mut grid = TileGrid::new(2, 2);
        let before = grid.clone();
        grid.swap(Position::new(1, 1), Position::new(1, 1));
        assert_eq!(grid, before);
    }

    #[test]
    fn correctness_tracks_misplaced_cells() {
        let mut grid = TileGrid::new(3, 3);
        grid.swap(Position::new(0, 0), Position::new(2, 2));

        let correctness = grid.correctness();
        assert!(!correctness[Position::new(0, 0)]);
        assert!(!correctness[Position::new(2, 2)]);
        assert_eq!(correctness.count_correct(), 7);
        assert!(correctness[Position::new(1, 1)]);
    }

    #[test]
    fn reset_restores_solved_arrangement() {
        let mut grid = TileGrid::new(4, 4);
        grid.swap(Position::new(0, 0), Position::new(3, 3));
        grid.swap(Position::new(1, 2), Position::new(2, 1));
        assert!(!grid.is_solved());

        grid.reset();
        assert!(grid.is_solved());
    }

    #[test]
    fn neighbors_clip_at_edges() {
        let grid = TileGrid::new(3, 3);

        let corner: Vec<_> = grid.neighbors(Position::new(0, 0)).collect();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);

        let center: Vec<_> = grid.neighbors(Position::new(1, 1)).collect();
        assert_eq!(center.len(), 4);
    }

    proptest! {
        /// Any sequence of swaps keeps the cell-to-tile mapping a bijection.
        #[test]
        fn swaps_preserve_bijection(
            width in 1_usize..6,
            height in 1_usize..6,
            raw_swaps in proptest::collection::vec((0_usize..100, 0_usize..100), 0..64),
        ) {
            let mut grid = TileGrid::new(width, height);
            for (a, b) in raw_swaps {
                let a = Position::new(a / width % height, a % width);
                let b = Position::new(b / width % height, b % width);
                grid.swap(a, b);
            }

            let mut seen = vec![false; grid.cell_count()];
            for pos in grid.positions() {
                let id = grid[pos];
                let i = id.row * width + id.col;
                prop_assert!(!seen[i], "tile {id} appears twice");
                seen[i] = true;
            }
        }
    }
}
