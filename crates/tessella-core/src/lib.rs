//! Core data structures for the Tessella sliding-tile puzzle engine.
//!
//! This crate provides the fundamental types for representing a tile puzzle:
//! where every tile currently sits, which tiles are back in their original
//! place, and which correctly-placed tiles have merged into groups.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Coordinates and identities**
//!    - [`Position`]: a cell on the grid, addressed by `(row, col)`
//!    - [`TileId`]: the identity of a tile, i.e. the cell it occupies in the
//!      solved arrangement
//!
//! 2. **Placement mapping**
//!    - [`TileGrid`]: the `width × height` mapping from cells to the tiles
//!      currently occupying them. Always a bijection: every tile occupies
//!      exactly one cell and every cell holds exactly one tile.
//!    - [`CorrectnessGrid`]: a per-cell snapshot of which tiles are back in
//!      their original place.
//!
//! 3. **Merged groups**
//!    - [`TileGroup`]: a maximal 4-connected set of correctly-placed cells,
//!      tracked once it reaches [`MIN_TRACKED_SIZE`] cells. Groups are
//!      derived state, recomputed from the grid by [`merged_groups`].
//!
//! # Examples
//!
//! ```
//! use tessella_core::{Position, TileGrid, merged_groups};
//!
//! let mut grid = TileGrid::new(3, 3);
//! assert!(grid.is_solved());
//!
//! grid.swap(Position::new(0, 0), Position::new(2, 2));
//! assert!(!grid.is_solved());
//!
//! // The seven untouched tiles still form a single merged group.
//! let groups = merged_groups(&grid);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].len(), 7);
//! ```

pub use self::{grid::*, group::*, position::*};

mod grid;
mod group;
mod position;
