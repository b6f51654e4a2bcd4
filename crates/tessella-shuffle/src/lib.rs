//! Randomized shuffling for Tessella tile grids.
//!
//! A shuffle is a fixed number of uniform random cell-pair swaps applied to a
//! [`TileGrid`]. Both endpoints of every swap are drawn independently over
//! the whole grid (with replacement), so a cell may be swapped with itself,
//! and nothing guarantees the result differs from the solved arrangement —
//! for small grids or small swap budgets a shuffle may occasionally
//! reproduce it. That distribution is deliberate.
//!
//! # Examples
//!
//! ```
//! use tessella_core::TileGrid;
//! use tessella_shuffle::Shuffler;
//!
//! let mut grid = TileGrid::new(4, 4);
//! Shuffler::new().shuffle(&mut grid);
//! ```
//!
//! Seeded shuffles are reproducible:
//!
//! ```
//! use tessella_core::TileGrid;
//! use tessella_shuffle::Shuffler;
//!
//! let mut a = TileGrid::new(4, 4);
//! let mut b = TileGrid::new(4, 4);
//! Shuffler::new().shuffle_seeded(&mut a, 7);
//! Shuffler::new().shuffle_seeded(&mut b, 7);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use tessella_core::{Position, TileGrid};

/// Default number of swaps performed per grid cell.
const SWAPS_PER_CELL: usize = 5;

/// Shuffles a [`TileGrid`] by repeated random cell-pair swaps.
///
/// The default swap budget is `5 × width × height`; a fixed budget can be
/// set with [`Shuffler::with_num_swaps`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Shuffler {
    num_swaps: Option<usize>,
}

impl Shuffler {
    /// Creates a shuffler with the default swap budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shuffler that always performs exactly `num_swaps` swaps.
    #[must_use]
    pub const fn with_num_swaps(num_swaps: usize) -> Self {
        Self {
            num_swaps: Some(num_swaps),
        }
    }

    /// The number of swaps a shuffle of `grid` will perform.
    #[must_use]
    pub fn num_swaps_for(&self, grid: &TileGrid) -> usize {
        self.num_swaps
            .unwrap_or_else(|| grid.cell_count() * SWAPS_PER_CELL)
    }

    /// Shuffles `grid` using the thread-local random number generator.
    pub fn shuffle(&self, grid: &mut TileGrid) {
        self.shuffle_with_rng(grid, &mut rand::rng());
    }

    /// Shuffles `grid` reproducibly from a seed.
    pub fn shuffle_seeded(&self, grid: &mut TileGrid, seed: u64) {
        self.shuffle_with_rng(grid, &mut Pcg64Mcg::seed_from_u64(seed));
    }

    /// Shuffles `grid` using the provided random number generator.
    pub fn shuffle_with_rng<R>(&self, grid: &mut TileGrid, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for _ in 0..self.num_swaps_for(grid) {
            let a = random_position(grid, rng);
            let b = random_position(grid, rng);
            grid.swap(a, b);
        }
    }
}

fn random_position<R>(grid: &TileGrid, rng: &mut R) -> Position
where
    R: Rng + ?Sized,
{
    Position::new(
        rng.random_range(0..grid.height()),
        rng.random_range(0..grid.width()),
    )
}
