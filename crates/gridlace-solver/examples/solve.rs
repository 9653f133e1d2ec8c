//! Example demonstrating the four puzzle solvers on built-in demo boards.
//!
//! This example shows how to:
//! - Build a `PuzzleGrid` for a chosen puzzle family
//! - Seed it with a small demo state
//! - Validate and solve it, then render the result
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve -- queens
//! ```
//!
//! Choose the grid size where the family allows it (Sudoku and Tango are
//! fixed at 6):
//!
//! ```sh
//! cargo run --example solve -- queens --size 7
//! cargo run --example solve -- zip --size 5
//! ```
//!
//! Enable solver logging:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example solve -- tango
//! ```

use std::process;

use clap::Parser;
use gridlace_core::{Border, Cell, Pos, PuzzleKind, QueensGrid, SudokuGrid, TangoGrid, ZipGrid};
use gridlace_solver::PuzzleGrid;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle family to solve (queens, sudoku, tango, zip).
    #[arg(value_name = "PUZZLE")]
    puzzle: String,

    /// Grid size for size-flexible families.
    #[arg(long, value_name = "SIZE", default_value_t = 6)]
    size: i32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Some(kind) = PuzzleKind::from_name(&args.puzzle) else {
        eprintln!("Unknown puzzle: {}", args.puzzle);
        eprintln!("Available puzzles:");
        for kind in PuzzleKind::ALL {
            eprintln!("  {} - {}", kind.name().to_ascii_lowercase(), kind.description());
        }
        process::exit(2);
    };

    let mut grid = match PuzzleGrid::new(kind, args.size) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{}: {err}", kind.name());
            process::exit(1);
        }
    };
    seed_demo(&mut grid);

    if let Err(err) = grid.validate() {
        eprintln!("Invalid puzzle state: {err}");
        process::exit(1);
    }

    let solution = grid.solve();
    if solution.is_empty() {
        println!("{}: no solution found.", kind.name());
        process::exit(1);
    }

    println!("{} ({size}x{size}):", kind.name(), size = grid.size());
    render(&grid, &solution);
}

/// Fills the grid with a small hand-made puzzle for its family.
fn seed_demo(grid: &mut PuzzleGrid) {
    let size = grid.size();
    if let Some(queens) = grid.as_queens_mut() {
        seed_queens(queens, size);
    } else if let Some(sudoku) = grid.as_sudoku_mut() {
        seed_sudoku(sudoku);
    } else if let Some(tango) = grid.as_tango_mut() {
        seed_tango(tango);
    } else if let Some(zip) = grid.as_zip_mut() {
        seed_zip(zip, size);
    }
}

/// Column-stripe regions: region k is column k.
fn seed_queens(grid: &mut QueensGrid, size: i32) {
    for row in 0..size {
        for col in 0..size {
            #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let region = col as u8;
            grid.set_region(Pos::new(row, col), region);
        }
    }
}

fn seed_sudoku(grid: &mut SudokuGrid) {
    grid.set_number(Pos::new(0, 0), 1);
    grid.set_number(Pos::new(1, 3), 2);
    grid.set_number(Pos::new(2, 1), 4);
    grid.set_number(Pos::new(4, 5), 3);
}

fn seed_tango(grid: &mut TangoGrid) {
    grid.set_cell(Pos::new(0, 0), Cell::Sun);
    grid.set_cell(Pos::new(3, 3), Cell::Moon);
    grid.set_border(Pos::new(1, 1), Pos::new(1, 2), Some(Border::Equal));
    grid.set_border(Pos::new(4, 0), Pos::new(5, 0), Some(Border::Opposite));
}

fn seed_zip(grid: &mut ZipGrid, size: i32) {
    grid.set_number(Pos::new(0, 0), 1);
    // A path covering every cell of an even-sized board must end on the
    // opposite checkerboard color from its start.
    let mid = size / 2;
    let end = if size % 2 == 0 {
        Pos::new(mid, mid - 1)
    } else {
        Pos::new(mid, mid)
    };
    grid.set_number(end, 2);
    grid.toggle_wall(Pos::new(0, 0), Pos::new(1, 0));
}

fn render(grid: &PuzzleGrid, solution: &[Pos]) {
    match grid {
        PuzzleGrid::Queens(_) => {
            render_cells(grid.size(), |pos| {
                if solution.contains(&pos) { 'Q' } else { '.' }
            });
        }
        PuzzleGrid::Sudoku(sudoku) => {
            let mut sudoku = sudoku.clone();
            sudoku.apply_solution(solution);
            render_cells(grid.size(), |pos| {
                let number = if sudoku.has_number(pos) {
                    sudoku.number(pos)
                } else {
                    sudoku.solution_number(pos)
                };
                char::from(b'0' + number)
            });
        }
        PuzzleGrid::Tango(tango) => {
            render_cells(grid.size(), |pos| match tango.cell(pos) {
                Cell::Sun => 'S',
                Cell::Moon => 'M',
                Cell::Empty if solution.contains(&pos) => 'm',
                Cell::Empty => 's',
            });
        }
        PuzzleGrid::Zip(_) => {
            render_cells(grid.size(), |pos| {
                let step = solution.iter().position(|&visited| visited == pos);
                match step {
                    Some(step) if step < 26 => {
                        #[expect(clippy::cast_possible_truncation)]
                        let offset = step as u8;
                        char::from(b'a' + offset)
                    }
                    Some(_) => '+',
                    None => '.',
                }
            });
        }
    }
}

fn render_cells(size: i32, cell: impl Fn(Pos) -> char) {
    for row in 0..size {
        let line: String = (0..size).map(|col| cell(Pos::new(row, col))).collect();
        println!("  {line}");
    }
}
