//! Example demonstrating a full puzzle session round trip.
//!
//! This example shows how to:
//! - Create a `PuzzleState` and shuffle it
//! - Inspect the placement mapping and merged groups
//! - Solve the puzzle with single-tile swaps
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play_puzzle
//! ```
//!
//! Control the grid size:
//!
//! ```sh
//! cargo run --example play_puzzle -- --width 5 --height 4
//! ```
//!
//! Reproduce a shuffle from a seed:
//!
//! ```sh
//! cargo run --example play_puzzle -- --seed 42
//! ```

use clap::Parser;
use tessella_core::Position;
use tessella_game::PuzzleState;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of tiles per row.
    #[arg(long, value_name = "COUNT", default_value_t = 4)]
    width: usize,

    /// Number of tiles per column.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    height: usize,

    /// Seed for a reproducible shuffle; omitted means a random one.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut puzzle = PuzzleState::new(args.width, args.height);
    match args.seed {
        Some(seed) => puzzle.shuffle_seeded(seed),
        None => puzzle.shuffle(),
    }

    println!("Shuffled:");
    print_state(&puzzle);

    // Walk the cells in order; for each misplaced cell, fetch its own tile
    // from wherever it currently sits.
    let mut swaps = 0;
    for row in 0..puzzle.height() {
        for col in 0..puzzle.width() {
            let cell = Position::new(row, col);
            if puzzle.origin_at(cell).home() == cell {
                continue;
            }
            let holder = holder_of(&puzzle, cell);
            puzzle.swap(cell, holder);
            swaps += 1;
        }
    }

    println!();
    println!("Solved in {swaps} swaps:");
    print_state(&puzzle);
    assert!(puzzle.is_solved());
}

/// Finds the cell currently holding the tile whose home is `home`.
fn holder_of(puzzle: &PuzzleState, home: Position) -> Position {
    (0..puzzle.height())
        .flat_map(|row| (0..puzzle.width()).map(move |col| Position::new(row, col)))
        .find(|&cell| puzzle.origin_at(cell).home() == home)
        .expect("placement mapping is a bijection")
}

fn print_state(puzzle: &PuzzleState) {
    let correctness = puzzle.correctness();
    for row in 0..puzzle.height() {
        print!(" ");
        for col in 0..puzzle.width() {
            let cell = Position::new(row, col);
            let id = puzzle.origin_at(cell);
            let mark = if correctness[cell] { '*' } else { ' ' };
            print!(" {},{}{mark}", id.row, id.col);
        }
        println!();
    }

    let groups: Vec<String> = puzzle.groups().iter().map(ToString::to_string).collect();
    if groups.is_empty() {
        println!("  no merged groups");
    } else {
        println!("  {}", groups.join("; "));
    }
}
