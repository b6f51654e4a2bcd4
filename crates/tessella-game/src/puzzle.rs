use log::{debug, trace};
use tessella_core::{CorrectnessGrid, Position, TileGrid, TileGroup, TileId, merged_groups};
use tessella_shuffle::Shuffler;

use crate::GroupMoveError;

/// The state of one sliding-tile puzzle session.
///
/// Owns the grid-to-original-tile mapping and the merged-group list derived
/// from it. Every mutating operation (swaps, shuffles, resets) recomputes the
/// groups, so the group list always reflects the current placement.
///
/// The state holds no image data; tiles are referenced purely by their
/// [`TileId`] identity, and the tile bitmaps live with whoever sliced the
/// source image.
///
/// # Example
///
/// ```
/// use tessella_core::Position;
/// use tessella_game::PuzzleState;
///
/// let mut puzzle = PuzzleState::new(3, 3);
/// assert!(puzzle.is_solved());
///
/// puzzle.swap(Position::new(0, 0), Position::new(2, 2));
/// assert!(!puzzle.is_solved());
///
/// // The seven untouched tiles have merged into a single group.
/// assert_eq!(puzzle.groups().len(), 1);
/// assert_eq!(puzzle.groups()[0].len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    grid: TileGrid,
    groups: Vec<TileGroup>,
}

impl PuzzleState {
    /// Creates a session in the solved arrangement.
    ///
    /// Groups are recomputed immediately, so a fresh state with at least two
    /// cells reports one tracked group spanning the whole grid until the
    /// first shuffle. Normal flow shuffles right away (see
    /// [`PuzzleState::new_shuffled`]).
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let grid = TileGrid::new(width, height);
        let groups = merged_groups(&grid);
        Self { grid, groups }
    }

    /// Creates a session and immediately shuffles it with the default swap
    /// budget.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn new_shuffled(width: usize, height: usize) -> Self {
        let mut state = Self::new(width, height);
        state.shuffle();
        state
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Shuffles the grid with the default budget of `5 × width × height`
    /// random swaps.
    pub fn shuffle(&mut self) {
        self.shuffle_using(&Shuffler::new());
    }

    /// Shuffles the grid with a caller-configured [`Shuffler`].
    pub fn shuffle_using(&mut self, shuffler: &Shuffler) {
        shuffler.shuffle(&mut self.grid);
        self.recompute_groups();
        debug!(
            "shuffled {}x{} grid with {} swaps, {} groups remain",
            self.width(),
            self.height(),
            shuffler.num_swaps_for(&self.grid),
            self.groups.len()
        );
    }

    /// Shuffles the grid reproducibly from a seed, with the default budget.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        Shuffler::new().shuffle_seeded(&mut self.grid, seed);
        self.recompute_groups();
        debug!("shuffled {}x{} grid from seed {seed}", self.width(), self.height());
    }

    /// Exchanges the tiles at two cells and recomputes the merged groups.
    ///
    /// Swapping a cell with itself is a no-op that still triggers the group
    /// recomputation.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use tessella_core::{Position, TileId};
    /// use tessella_game::PuzzleState;
    ///
    /// let mut puzzle = PuzzleState::new(3, 3);
    /// puzzle.swap(Position::new(0, 0), Position::new(2, 2));
    /// assert_eq!(puzzle.origin_at(Position::new(0, 0)), TileId::new(2, 2));
    /// assert_eq!(puzzle.origin_at(Position::new(2, 2)), TileId::new(0, 0));
    /// ```
    pub fn swap(&mut self, a: Position, b: Position) {
        trace!("swap {a} <-> {b}");
        self.grid.swap(a, b);
        self.recompute_groups();
    }

    /// Whether every tile is back in its original place.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// The identity of the tile currently occupying `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn origin_at(&self, pos: Position) -> TileId {
        self.grid[pos]
    }

    /// Computes a fresh per-cell correctness snapshot.
    #[must_use]
    pub fn correctness(&self) -> CorrectnessGrid {
        self.grid.correctness()
    }

    /// All currently tracked merged groups.
    #[must_use]
    pub fn groups(&self) -> &[TileGroup] {
        &self.groups
    }

    /// The tracked group containing `pos`, if any.
    ///
    /// A linear scan over the group list; group counts are small at puzzle
    /// grid sizes.
    #[must_use]
    pub fn group_containing(&self, pos: Position) -> Option<&TileGroup> {
        self.groups.iter().find(|group| group.contains(pos))
    }

    /// The rigid unit a pointer grab at `pos` picks up: the cells of the
    /// tracked group containing `pos`, or `pos` alone.
    #[must_use]
    pub fn drag_cells(&self, pos: Position) -> Vec<Position> {
        match self.group_containing(pos) {
            Some(group) => group.cells().to_vec(),
            None => vec![pos],
        }
    }

    /// Whether the rigid unit `source` can be relocated so that its anchor
    /// lands on `target`.
    ///
    /// `source` is a set of cells as produced by [`PuzzleState::drag_cells`]:
    /// either a single loose cell or the cells of one tracked group. An
    /// out-of-bounds `target` is an infeasible move, not a fault.
    ///
    /// # Panics
    ///
    /// Panics if `source` is empty.
    #[must_use]
    pub fn can_swap_groups(&self, source: &[Position], target: Position) -> bool {
        self.plan_group_move(source, target).is_ok()
    }

    /// Relocates the rigid unit `source` so that its anchor lands on
    /// `target`, exchanging its tiles with the displaced region's tiles.
    ///
    /// The move translates every source cell by `target − anchor`, where the
    /// anchor is the top-left-most source cell. The contents of the source
    /// cells and their destination cells are captured first and then written
    /// crosswise, so both regions keep their internal arrangement. Merged
    /// groups are recomputed afterwards.
    ///
    /// # Errors
    ///
    /// Returns a [`GroupMoveError`] describing the rejection, leaving the
    /// placement mapping completely unchanged:
    ///
    /// - [`GroupMoveError::OutOfBounds`] — some destination cell (or the
    ///   target itself) lies outside the grid.
    /// - [`GroupMoveError::LooseDestination`] — a multi-tile group was
    ///   dropped where no tracked group sits; only single tiles may move
    ///   onto loose cells.
    /// - [`GroupMoveError::SizeMismatch`] — the target group holds a
    ///   different number of tiles than the source.
    /// - [`GroupMoveError::ForeignGroupOverlap`] — a destination cell
    ///   belongs to a tracked group other than the target.
    /// - [`GroupMoveError::SelfOverlap`] — the destination region partially
    ///   overlaps the source cells.
    ///
    /// # Panics
    ///
    /// Panics if `source` is empty or contains an out-of-bounds cell.
    ///
    /// # Example
    ///
    /// ```
    /// use tessella_core::{Position, TileId};
    /// use tessella_game::PuzzleState;
    ///
    /// // Row of six; swapping cells 2 and 5 leaves two groups of two.
    /// let mut puzzle = PuzzleState::new(6, 1);
    /// puzzle.swap(Position::new(0, 2), Position::new(0, 5));
    /// assert_eq!(puzzle.groups().len(), 2);
    ///
    /// // Trade the left pair with the right pair.
    /// let source = puzzle.drag_cells(Position::new(0, 0));
    /// puzzle.swap_groups(&source, Position::new(0, 3)).unwrap();
    /// assert_eq!(puzzle.origin_at(Position::new(0, 3)), TileId::new(0, 0));
    /// assert_eq!(puzzle.origin_at(Position::new(0, 4)), TileId::new(0, 1));
    /// ```
    pub fn swap_groups(
        &mut self,
        source: &[Position],
        target: Position,
    ) -> Result<(), GroupMoveError> {
        let destinations = self.plan_group_move(source, target)?;

        let source_tiles: Vec<TileId> = source.iter().map(|&cell| self.grid[cell]).collect();
        let dest_tiles: Vec<TileId> = destinations.iter().map(|&cell| self.grid[cell]).collect();
        for (&dest, tile) in destinations.iter().zip(source_tiles) {
            self.grid[dest] = tile;
        }
        for (&cell, tile) in source.iter().zip(dest_tiles) {
            self.grid[cell] = tile;
        }

        self.recompute_groups();
        debug!(
            "moved {} tiles to {target}, {} groups remain",
            source.len(),
            self.groups.len()
        );
        Ok(())
    }

    /// Restores the solved arrangement and recomputes the groups.
    pub fn reset_to_solved(&mut self) {
        self.grid.reset();
        self.recompute_groups();
    }

    /// Restarts the session: back to solved, then immediately reshuffled
    /// with the default budget.
    pub fn restart(&mut self) {
        debug!("restarting {}x{} puzzle", self.width(), self.height());
        self.reset_to_solved();
        self.shuffle();
    }

    fn recompute_groups(&mut self) {
        self.groups = merged_groups(&self.grid);
    }

    /// Validates a group move and computes its destination cells, pairing
    /// `destinations[i]` with `source[i]`.
    fn plan_group_move(
        &self,
        source: &[Position],
        target: Position,
    ) -> Result<Vec<Position>, GroupMoveError> {
        assert!(!source.is_empty(), "group move requires a source cell");
        let anchor = *source.iter().min().expect("source is non-empty");
        let (d_row, d_col) = target.delta_from(anchor);

        let mut destinations = Vec::with_capacity(source.len());
        for &cell in source {
            let dest = cell
                .offset_by(d_row, d_col)
                .filter(|&dest| self.grid.contains(dest))
                .ok_or(GroupMoveError::OutOfBounds)?;
            destinations.push(dest);
        }

        match self.group_containing(target) {
            None => {
                // Only a lone tile may land on untracked cells.
                if source.len() != 1 {
                    return Err(GroupMoveError::LooseDestination);
                }
            }
            Some(target_group) => {
                if target_group.len() != source.len() {
                    return Err(GroupMoveError::SizeMismatch);
                }
                for &dest in &destinations {
                    if !target_group.contains(dest) && self.group_containing(dest).is_some() {
                        return Err(GroupMoveError::ForeignGroupOverlap);
                    }
                }
            }
        }

        // A partially self-overlapping exchange cannot keep the cell-to-tile
        // mapping a bijection; a zero-offset drop back onto the same cells
        // stays a valid no-op.
        if (d_row, d_col) != (0, 0) && destinations.iter().any(|dest| source.contains(dest)) {
            return Err(GroupMoveError::SelfOverlap);
        }

        Ok(destinations)
    }
}
