//! Core data structures for the gridlace puzzle engine.
//!
//! This crate holds the shared position abstraction and the per-family
//! mutable grid state models that the solvers in `gridlace-solver` operate
//! on. The surrounding UI layer mutates these grids through their setters,
//! then hands them to a solver for validation and solving.
//!
//! # Overview
//!
//! - [`pos`]: the [`Pos`] coordinate type, neighbor utilities, and the
//!   canonical-pair normalization used for undirected cell relations.
//! - [`size`]: shared size limits and [`SizeError`], the rejection type for
//!   out-of-range grid sizes.
//! - One state model per puzzle family:
//!   - [`queens`]: region-labeled cells ([`QueensGrid`])
//!   - [`sudoku`]: 6×6 number placement with a solution overlay
//!     ([`SudokuGrid`])
//!   - [`tango`]: Sun/Moon cells with border constraints ([`TangoGrid`])
//!   - [`zip`]: numbered checkpoints and walls ([`ZipGrid`])
//! - [`puzzle`]: the static [`PuzzleKind`] catalog.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::{Pos, QueensGrid};
//!
//! let mut grid = QueensGrid::new(8);
//! assert!(QueensGrid::validate_size(8).is_ok());
//! grid.set_region(Pos::new(0, 0), 1);
//! assert!(grid.is_in_bounds(Pos::new(7, 7)));
//! ```

pub mod pos;
pub mod puzzle;
pub mod queens;
pub mod size;
pub mod sudoku;
pub mod tango;
pub mod zip;

pub use self::{
    pos::Pos,
    puzzle::PuzzleKind,
    queens::QueensGrid,
    size::SizeError,
    sudoku::SudokuGrid,
    tango::{Border, Cell, TangoGrid},
    zip::ZipGrid,
};
