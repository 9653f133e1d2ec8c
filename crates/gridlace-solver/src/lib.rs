//! Validation and exhaustive-search solving for the gridlace puzzle
//! families.
//!
//! Each puzzle family gets one solver type implementing the shared
//! [`Solver`] trait: validate the user-entered grid state, then compute one
//! satisfying assignment by deterministic, exhaustive backtracking. Search
//! spaces are small (grid sides 4-16), so every solve call terminates
//! without timeouts or cancellation.
//!
//! Solvers never hold on to a grid: they borrow it per call and keep all
//! search scratch state private to that call, so an unchanged grid always
//! validates to the same result and a grid mutation between calls is always
//! observed.
//!
//! # Overview
//!
//! - [`queens`]: region-constrained queen placement ([`QueensSolver`])
//! - [`sudoku`]: 6×6 number placement ([`SudokuSolver`])
//! - [`tango`]: binary-symbol adjacency ([`TangoSolver`])
//! - [`zip`]: single-path routing ([`ZipSolver`])
//! - [`puzzle_grid`]: the kind-dispatched [`PuzzleGrid`] facade tying a
//!   grid state to its family solver
//!
//! # Examples
//!
//! ```
//! use gridlace_core::{Pos, PuzzleKind};
//! use gridlace_solver::PuzzleGrid;
//!
//! let mut grid = PuzzleGrid::new(PuzzleKind::Zip, 4)?;
//! assert!(grid.validate().is_ok());
//! let path = grid.solve();
//! assert_eq!(path.len(), 16);
//! # Ok::<(), gridlace_core::SizeError>(())
//! ```

use gridlace_core::Pos;

pub mod puzzle_grid;
pub mod queens;
pub mod sudoku;
pub mod tango;
pub mod zip;

pub use self::{
    puzzle_grid::PuzzleGrid,
    queens::{QueensError, QueensSolver},
    sudoku::{SudokuError, SudokuSolver},
    tango::{TangoError, TangoSolver},
    zip::{ZipError, ZipSolver},
};

/// A structural rule violated by some puzzle's grid state.
///
/// Each variant wraps one family's error type; the rendered message
/// identifies the rule and, where applicable, the offending
/// cell/row/column/region.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum ValidateError {
    /// A Queens rule was violated.
    #[display("{_0}")]
    Queens(QueensError),
    /// A Sudoku rule was violated.
    #[display("{_0}")]
    Sudoku(SudokuError),
    /// A Tango rule was violated.
    #[display("{_0}")]
    Tango(TangoError),
    /// A Zip rule was violated.
    #[display("{_0}")]
    Zip(ZipError),
}

/// A puzzle-family solver: structural validation plus exhaustive search.
///
/// Implementations are stateless; the grid is borrowed per call and any
/// mutable search state is a private working copy cloned at the start of
/// [`Solver::solve`].
pub trait Solver {
    /// The grid state model this solver operates on.
    type Grid;

    /// Checks the grid state against the family's structural rules.
    ///
    /// Never mutates the grid; calling it repeatedly on an unmodified grid
    /// returns the same result.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, with a message identifying the
    /// offending cell, row, column, or region where applicable.
    fn validate(&self, grid: &Self::Grid) -> Result<(), ValidateError>;

    /// Searches for one satisfying assignment.
    ///
    /// The meaning of the returned positions is family-specific; an empty
    /// sequence always means no solution exists. Callers are expected to
    /// confirm [`Solver::validate`] passed first.
    fn solve(&self, grid: &Self::Grid) -> Vec<Pos>;
}
