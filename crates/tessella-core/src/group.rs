use derive_more::Display;

use crate::{Position, TileGrid};

/// Minimum number of cells a connected component of correctly-placed tiles
/// must reach before it is tracked as a merged group.
///
/// Isolated correct cells stay correct but are not grouped.
pub const MIN_TRACKED_SIZE: usize = 2;

/// A merged group: a maximal 4-connected set of correctly-placed cells.
///
/// Groups are value sets of positions, not identity-bearing objects; they are
/// recomputed wholesale from the grid after every mutation by
/// [`merged_groups`]. Cells are kept sorted in row-major order, so the first
/// cell is the group's top-left-most one and serves as the anchor for rigid
/// moves.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("group of {} anchored at {}", cells.len(), cells[0])]
pub struct TileGroup {
    cells: Vec<Position>,
}

impl TileGroup {
    /// Builds a group from a flood-fill component.
    ///
    /// Callers guarantee the component is connected and at least
    /// [`MIN_TRACKED_SIZE`] cells large.
    fn from_component(mut cells: Vec<Position>) -> Self {
        debug_assert!(cells.len() >= MIN_TRACKED_SIZE);
        cells.sort_unstable();
        Self { cells }
    }

    /// The group's cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Number of cells in the group. Always at least [`MIN_TRACKED_SIZE`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; tracked groups hold at least [`MIN_TRACKED_SIZE`]
    /// cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `pos` belongs to this group.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.binary_search(&pos).is_ok()
    }

    /// The lexicographically smallest (top-left-most) cell of the group.
    #[must_use]
    pub fn anchor(&self) -> Position {
        self.cells[0]
    }
}

/// Recomputes the merged groups of a grid.
///
/// Runs an explicit-stack flood fill (4-directional) over the correctly
/// placed cells and collects every connected component of at least
/// [`MIN_TRACKED_SIZE`] cells. Singleton components are discarded. Every cell
/// is visited at most once, so the cost is `O(width × height)`.
///
/// The returned groups partition the correctly-placed cells that have at
/// least one correctly-placed 4-directional neighbor.
///
/// # Examples
///
/// ```
/// use tessella_core::{Position, TileGrid, merged_groups};
///
/// // A solved grid is one giant group.
/// let grid = TileGrid::new(2, 2);
/// let groups = merged_groups(&grid);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].len(), 4);
/// ```
#[must_use]
pub fn merged_groups(grid: &TileGrid) -> Vec<TileGroup> {
    let mut visited = vec![false; grid.cell_count()];
    let mut groups = Vec::new();

    for start in grid.positions() {
        if visited[grid.cell_index(start)] || !grid.is_correct(start) {
            continue;
        }

        let mut component = Vec::new();
        let mut frontier = vec![start];
        visited[grid.cell_index(start)] = true;
        while let Some(pos) = frontier.pop() {
            component.push(pos);
            for neighbor in grid.neighbors(pos) {
                let i = grid.cell_index(neighbor);
                if !visited[i] && grid.is_correct(neighbor) {
                    visited[i] = true;
                    frontier.push(neighbor);
                }
            }
        }

        if component.len() >= MIN_TRACKED_SIZE {
            groups.push(TileGroup::from_component(component));
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid_after_swaps(width: usize, height: usize, swaps: &[(Position, Position)]) -> TileGrid {
        let mut grid = TileGrid::new(width, height);
        for &(a, b) in swaps {
            grid.swap(a, b);
        }
        grid
    }

    #[test]
    fn solved_grid_forms_one_giant_group() {
        let grid = TileGrid::new(4, 4);
        let groups = merged_groups(&grid);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 16);
        assert_eq!(groups[0].anchor(), Position::new(0, 0));
    }

    #[test]
    fn single_cell_grid_has_no_tracked_group() {
        let grid = TileGrid::new(1, 1);
        assert!(merged_groups(&grid).is_empty());
    }

    #[test]
    fn corner_swap_leaves_one_group_of_seven() {
        let grid = grid_after_swaps(3, 3, &[(Position::new(0, 0), Position::new(2, 2))]);

        let groups = merged_groups(&grid);
        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.len(), 7);
        assert!(!group.contains(Position::new(0, 0)));
        assert!(!group.contains(Position::new(2, 2)));
        assert!(group.contains(Position::new(0, 1)));
        assert!(group.contains(Position::new(1, 0)));
    }

    #[test]
    fn isolated_correct_cell_is_not_tracked() {
        // Row of five; swapping (0,1)<->(0,3) strands the correct cells
        // (0,0), (0,2) and (0,4) without correct neighbors.
        let grid = grid_after_swaps(5, 1, &[(Position::new(0, 1), Position::new(0, 3))]);

        assert!(grid.is_correct(Position::new(0, 0)));
        assert!(grid.is_correct(Position::new(0, 2)));
        assert!(grid.is_correct(Position::new(0, 4)));
        assert!(merged_groups(&grid).is_empty());
    }

    #[test]
    fn separated_runs_form_distinct_groups() {
        // Row of seven; swapping (0,3)<->(0,6) leaves the runs [0..=2] and
        // [4..=5] correct with misplaced cells between them.
        let grid = grid_after_swaps(7, 1, &[(Position::new(0, 3), Position::new(0, 6))]);

        let groups = merged_groups(&grid);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].anchor(), Position::new(0, 0));
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[1].anchor(), Position::new(0, 4));
        assert_eq!(groups[1].len(), 2);
    }

    #[test]
    fn diagonal_neighbors_do_not_connect() {
        // Leave (0,0) and (1,1) correct but break their shared 4-neighbors.
        let grid = grid_after_swaps(
            2,
            2,
            &[(Position::new(0, 1), Position::new(1, 0))],
        );

        assert!(grid.is_correct(Position::new(0, 0)));
        assert!(grid.is_correct(Position::new(1, 1)));
        assert!(merged_groups(&grid).is_empty());
    }

    #[test]
    fn group_display_names_size_and_anchor() {
        let grid = TileGrid::new(2, 2);
        let groups = merged_groups(&grid);
        assert_eq!(groups[0].to_string(), "group of 4 anchored at (0, 0)");
    }

    proptest! {
        /// Tracked groups partition the groupable cells: pairwise disjoint,
        /// all cells correct, never below the tracking threshold, and every
        /// correct cell with a correct neighbor belongs to some group.
        #[test]
        fn groups_partition_correct_cells(
            width in 1_usize..7,
            height in 1_usize..7,
            raw_swaps in proptest::collection::vec((0_usize..100, 0_usize..100), 0..48),
        ) {
            let mut grid = TileGrid::new(width, height);
            for (a, b) in raw_swaps {
                grid.swap(
                    Position::new(a / width % height, a % width),
                    Position::new(b / width % height, b % width),
                );
            }

            let groups = merged_groups(&grid);
            let mut member_of = vec![0_usize; grid.cell_count()];
            for group in &groups {
                prop_assert!(group.len() >= MIN_TRACKED_SIZE);
                for &pos in group.cells() {
                    prop_assert!(grid.is_correct(pos));
                    member_of[grid.cell_index(pos)] += 1;
                }
            }
            for pos in grid.positions() {
                let memberships = member_of[grid.cell_index(pos)];
                prop_assert!(memberships <= 1, "cell {pos} in {memberships} groups");

                let groupable = grid.is_correct(pos)
                    && grid.neighbors(pos).any(|n| grid.is_correct(n));
                prop_assert_eq!(memberships == 1, groupable);
            }
        }
    }
}
