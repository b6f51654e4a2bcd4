use derive_more::Display;

/// A cell coordinate on the puzzle grid.
///
/// Rows are counted from the top, columns from the left. The derived ordering
/// is lexicographic by `(row, col)`, so the minimum of a set of positions is
/// its top-left-most cell; group moves use that cell as their anchor.
///
/// A `Position` carries no grid dimensions of its own; bounds are checked by
/// the grid that is indexed with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index, `0..height`.
    pub row: usize,
    /// Column index, `0..width`.
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Translates this position by a signed row/column delta.
    ///
    /// Returns `None` if either coordinate would become negative. The result
    /// may still lie outside a particular grid; that check belongs to the
    /// grid itself.
    #[must_use]
    pub fn offset_by(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }

    /// Returns the signed `(row, col)` delta that translates `origin` to
    /// `self`.
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub fn delta_from(self, origin: Self) -> (isize, isize) {
        (
            self.row as isize - origin.row as isize,
            self.col as isize - origin.col as isize,
        )
    }
}

/// The identity of a tile: the cell it occupies in the solved arrangement.
///
/// Distinct from [`Position`], which names a cell of the grid; a `TileId`
/// names the rectangular sub-image cut from the source picture. A cell is
/// correctly placed when the tile it holds has that cell as its home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("({row}, {col})")]
pub struct TileId {
    /// Row of the tile in the solved arrangement.
    pub row: usize,
    /// Column of the tile in the solved arrangement.
    pub col: usize,
}

impl TileId {
    /// Creates a tile identity from its solved-arrangement coordinates.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell this tile occupies when the puzzle is solved.
    #[must_use]
    pub const fn home(self) -> Position {
        Position::new(self.row, self.col)
    }
}

impl From<Position> for TileId {
    fn from(pos: Position) -> Self {
        Self::new(pos.row, pos.col)
    }
}

impl From<TileId> for Position {
    fn from(id: TileId) -> Self {
        id.home()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 0),
            Position::new(1, 2),
        ];
        cells.sort_unstable();
        assert_eq!(
            cells,
            vec![
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
        assert_eq!(cells.iter().min(), Some(&Position::new(0, 0)));
    }

    #[test]
    fn offset_by_rejects_negative_coordinates() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.offset_by(-1, 2), Some(Position::new(0, 3)));
        assert_eq!(pos.offset_by(-2, 0), None);
        assert_eq!(pos.offset_by(0, -2), None);
    }

    #[test]
    fn delta_round_trips_through_offset() {
        let from = Position::new(2, 5);
        let to = Position::new(4, 1);
        let (d_row, d_col) = to.delta_from(from);
        assert_eq!((d_row, d_col), (2, -4));
        assert_eq!(from.offset_by(d_row, d_col), Some(to));
    }

    #[test]
    fn tile_home_matches_position() {
        let id = TileId::new(3, 7);
        assert_eq!(id.home(), Position::new(3, 7));
        assert_eq!(TileId::from(Position::new(3, 7)), id);
    }
}
