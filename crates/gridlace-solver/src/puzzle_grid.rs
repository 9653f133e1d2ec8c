//! Kind-dispatched facade over the per-family grids and solvers.

use gridlace_core::{
    Pos, PuzzleKind, QueensGrid, SizeError, SudokuGrid, TangoGrid, ZipGrid,
};

use crate::{QueensSolver, Solver as _, SudokuSolver, TangoSolver, ValidateError, ZipSolver};

/// A puzzle grid of any family, paired with its family's solver.
///
/// This is the single entry point the surrounding UI layer needs: construct
/// a grid by [`PuzzleKind`], mutate its family-specific state via
/// [`PuzzleGrid::as_queens_mut`] and friends, then [`PuzzleGrid::validate`]
/// and [`PuzzleGrid::solve`].
///
/// # Examples
///
/// ```
/// use gridlace_core::{Pos, PuzzleKind};
/// use gridlace_solver::PuzzleGrid;
///
/// let mut grid = PuzzleGrid::new(PuzzleKind::Sudoku, 6)?;
/// grid.as_sudoku_mut().unwrap().set_number(Pos::new(0, 0), 3);
/// assert!(grid.validate().is_ok());
/// assert!(!grid.solve().is_empty());
/// # Ok::<(), gridlace_core::SizeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum PuzzleGrid {
    /// A Queens grid.
    Queens(QueensGrid),
    /// A Sudoku grid.
    Sudoku(SudokuGrid),
    /// A Tango grid.
    Tango(TangoGrid),
    /// A Zip grid.
    Zip(ZipGrid),
}

impl PuzzleGrid {
    /// Creates an empty grid of the given family.
    ///
    /// # Errors
    ///
    /// Returns a [`SizeError`] when the family rejects `size`.
    pub fn new(kind: PuzzleKind, size: i32) -> Result<Self, SizeError> {
        let grid = match kind {
            PuzzleKind::Queens => {
                QueensGrid::validate_size(size)?;
                Self::Queens(QueensGrid::new(size))
            }
            PuzzleKind::Sudoku => {
                SudokuGrid::validate_size(size)?;
                Self::Sudoku(SudokuGrid::new())
            }
            PuzzleKind::Tango => {
                TangoGrid::validate_size(size)?;
                Self::Tango(TangoGrid::new())
            }
            PuzzleKind::Zip => {
                ZipGrid::validate_size(size)?;
                Self::Zip(ZipGrid::new(size))
            }
        };
        Ok(grid)
    }

    /// The family this grid belongs to.
    #[must_use]
    pub const fn kind(&self) -> PuzzleKind {
        match self {
            Self::Queens(_) => PuzzleKind::Queens,
            Self::Sudoku(_) => PuzzleKind::Sudoku,
            Self::Tango(_) => PuzzleKind::Tango,
            Self::Zip(_) => PuzzleKind::Zip,
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn size(&self) -> i32 {
        match self {
            Self::Queens(grid) => grid.size(),
            Self::Sudoku(grid) => grid.size(),
            Self::Tango(grid) => grid.size(),
            Self::Zip(grid) => grid.size(),
        }
    }

    /// Whether `pos` lies within the grid.
    #[must_use]
    pub const fn is_in_bounds(&self, pos: Pos) -> bool {
        pos.is_in_bounds(self.size())
    }

    /// Checks a prospective size against the family's accepted range.
    ///
    /// # Errors
    ///
    /// Returns a [`SizeError`] when the family rejects `size`.
    pub fn validate_size(&self, size: i32) -> Result<(), SizeError> {
        match self.kind() {
            PuzzleKind::Queens => QueensGrid::validate_size(size),
            PuzzleKind::Sudoku => SudokuGrid::validate_size(size),
            PuzzleKind::Tango => TangoGrid::validate_size(size),
            PuzzleKind::Zip => ZipGrid::validate_size(size),
        }
    }

    /// Discards all state and reinitializes at the given size.
    ///
    /// # Errors
    ///
    /// Returns a [`SizeError`] and leaves the grid untouched when the
    /// family rejects `new_size`.
    pub fn reset(&mut self, new_size: i32) -> Result<(), SizeError> {
        self.validate_size(new_size)?;
        match self {
            Self::Queens(grid) => grid.reset(new_size),
            Self::Sudoku(grid) => grid.reset(new_size),
            Self::Tango(grid) => grid.reset(new_size),
            Self::Zip(grid) => grid.reset(new_size),
        }
        Ok(())
    }

    /// Checks the grid state against its family's structural rules.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`ValidateError`].
    pub fn validate(&self) -> Result<(), ValidateError> {
        match self {
            Self::Queens(grid) => QueensSolver::new().validate(grid),
            Self::Sudoku(grid) => SudokuSolver::new().validate(grid),
            Self::Tango(grid) => TangoSolver::new().validate(grid),
            Self::Zip(grid) => ZipSolver::new().validate(grid),
        }
    }

    /// Searches for one satisfying assignment via the family's solver.
    ///
    /// An empty result always means the puzzle is unsolvable; the encoding
    /// of a non-empty result is family-specific.
    #[must_use]
    pub fn solve(&self) -> Vec<Pos> {
        match self {
            Self::Queens(grid) => QueensSolver::new().solve(grid),
            Self::Sudoku(grid) => SudokuSolver::new().solve(grid),
            Self::Tango(grid) => TangoSolver::new().solve(grid),
            Self::Zip(grid) => ZipSolver::new().solve(grid),
        }
    }

    /// The underlying Queens state, if this is a Queens grid.
    #[must_use]
    pub fn as_queens_mut(&mut self) -> Option<&mut QueensGrid> {
        match self {
            Self::Queens(grid) => Some(grid),
            _ => None,
        }
    }

    /// The underlying Sudoku state, if this is a Sudoku grid.
    #[must_use]
    pub fn as_sudoku_mut(&mut self) -> Option<&mut SudokuGrid> {
        match self {
            Self::Sudoku(grid) => Some(grid),
            _ => None,
        }
    }

    /// The underlying Tango state, if this is a Tango grid.
    #[must_use]
    pub fn as_tango_mut(&mut self) -> Option<&mut TangoGrid> {
        match self {
            Self::Tango(grid) => Some(grid),
            _ => None,
        }
    }

    /// The underlying Zip state, if this is a Zip grid.
    #[must_use]
    pub fn as_zip_mut(&mut self) -> Option<&mut ZipGrid> {
        match self {
            Self::Zip(grid) => Some(grid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_sizes() {
        assert!(PuzzleGrid::new(PuzzleKind::Queens, 3).is_err());
        assert!(PuzzleGrid::new(PuzzleKind::Sudoku, 9).is_err());
        assert!(PuzzleGrid::new(PuzzleKind::Tango, 8).is_err());
        assert!(PuzzleGrid::new(PuzzleKind::Zip, 17).is_err());
        assert!(PuzzleGrid::new(PuzzleKind::Zip, 8).is_ok());
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in PuzzleKind::ALL {
            let size = match kind {
                PuzzleKind::Sudoku | PuzzleKind::Tango => 6,
                PuzzleKind::Queens | PuzzleKind::Zip => 8,
            };
            let grid = PuzzleGrid::new(kind, size).unwrap();
            assert_eq!(grid.kind(), kind);
            assert_eq!(grid.size(), size);
        }
    }

    #[test]
    fn test_reset_rejects_out_of_range_and_keeps_state() {
        let mut grid = PuzzleGrid::new(PuzzleKind::Queens, 8).unwrap();
        grid.as_queens_mut()
            .unwrap()
            .set_region(Pos::new(0, 0), 5);
        assert!(grid.reset(30).is_err());
        assert_eq!(grid.size(), 8);
        let queens = grid.as_queens_mut().unwrap();
        assert_eq!(queens.region(Pos::new(0, 0)), 5);

        assert!(grid.reset(4).is_ok());
        assert_eq!(grid.size(), 4);
    }

    #[test]
    fn test_validate_and_solve_dispatch() {
        let mut grid = PuzzleGrid::new(PuzzleKind::Queens, 4).unwrap();
        // All cells in region 0: invalid for Queens.
        assert!(grid.validate().is_err());

        let queens = grid.as_queens_mut().unwrap();
        for row in 0..4 {
            for col in 0..4 {
                queens.set_region(Pos::new(row, col), u8::try_from(row).unwrap());
            }
        }
        assert!(grid.validate().is_ok());
        assert_eq!(grid.solve().len(), 4);
    }
}
