//! Puzzle session management for Tessella.
//!
//! This crate provides [`PuzzleState`], the mutable state of one sliding-tile
//! puzzle session: the placement mapping, shuffling, single-tile and
//! group-aware swaps, merged-group tracking, and win detection. A
//! presentation layer drives it through direct calls from its input loop and
//! reads it back every frame for rendering decisions.
//!
//! # Examples
//!
//! ```
//! use tessella_game::PuzzleState;
//!
//! // A freshly created session is solved and then shuffled.
//! let puzzle = PuzzleState::new_shuffled(4, 3);
//! assert_eq!(puzzle.width(), 4);
//! assert_eq!(puzzle.height(), 3);
//! ```

pub use self::{error::*, puzzle::*};

mod error;
mod puzzle;
