//! Number-placement grid state for the mini Sudoku puzzle.

use crate::{
    Pos,
    size::{self, SizeError},
};

/// Fixed side length of the mini Sudoku grid.
pub const SUDOKU_SIZE: i32 = 6;

/// Height in rows of a Sudoku box (boxes are 2 rows × 3 columns).
pub const BOX_ROWS: i32 = SUDOKU_SIZE / 3;
/// Width in columns of a Sudoku box.
pub const BOX_COLS: i32 = SUDOKU_SIZE / 2;

/// Mutable state for a 6×6 Sudoku puzzle.
///
/// The primary state holds the user's pre-filled numbers (`0` = empty). A
/// separate, same-shaped `solution` overlay stores solver output, so cells
/// that were pre-filled stay distinguishable from cells the solver decided.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Pos, SudokuGrid};
///
/// let mut grid = SudokuGrid::new();
/// grid.set_number(Pos::new(0, 0), 4);
/// assert!(grid.has_number(Pos::new(0, 0)));
/// assert!(!grid.has_solution_at(Pos::new(0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudokuGrid {
    size: i32,
    state: Vec<u8>,
    solution: Vec<u8>,
}

impl Default for SudokuGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SudokuGrid {
    /// Creates an empty 6×6 grid.
    #[must_use]
    pub fn new() -> Self {
        let mut grid = Self {
            size: SUDOKU_SIZE,
            state: Vec::new(),
            solution: Vec::new(),
        };
        grid.reset(SUDOKU_SIZE);
        grid
    }

    /// Checks whether `size` is acceptable for this family.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::NotExactly`] unless `size` is 6.
    pub fn validate_size(size: i32) -> Result<(), SizeError> {
        size::check_size_exactly(size, SUDOKU_SIZE)
    }

    /// Discards all state, including any stored solution.
    pub fn reset(&mut self, new_size: i32) {
        self.size = new_size;
        #[expect(clippy::cast_sign_loss)]
        let cells = (new_size * new_size) as usize;
        self.state = vec![0; cells];
        self.solution = vec![0; cells];
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// Whether `pos` lies within the grid.
    #[must_use]
    pub const fn is_in_bounds(&self, pos: Pos) -> bool {
        pos.is_in_bounds(self.size)
    }

    /// Index of the 2×3 box containing `pos` (0-5, left to right, top to
    /// bottom).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn box_index(&self, pos: Pos) -> usize {
        assert!(self.is_in_bounds(pos), "position {pos} out of bounds");
        #[expect(clippy::cast_sign_loss)]
        let index = (pos.row / BOX_ROWS * BOX_ROWS + pos.col / BOX_COLS) as usize;
        index
    }

    /// Number at `pos` in the pre-filled state (`0` = empty).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn number(&self, pos: Pos) -> u8 {
        self.state[self.index(pos)]
    }

    /// Whether the cell at `pos` has a pre-filled number.
    #[must_use]
    pub fn has_number(&self, pos: Pos) -> bool {
        self.number(pos) > 0
    }

    /// Assigns a number to the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set_number(&mut self, pos: Pos, number: u8) {
        let i = self.index(pos);
        self.state[i] = number;
    }

    /// Clears the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn clear_number(&mut self, pos: Pos) {
        self.set_number(pos, 0);
    }

    /// Solver-decided number at `pos` (`0` = no solution stored there).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn solution_number(&self, pos: Pos) -> u8 {
        self.solution[self.index(pos)]
    }

    /// Whether the stored solution decided the cell at `pos`.
    #[must_use]
    pub fn has_solution_at(&self, pos: Pos) -> bool {
        self.solution_number(pos) > 0
    }

    /// Parses a solver result into the solution overlay.
    ///
    /// The solver encodes its result as position groups for the values
    /// `1..=size`, with [`Pos::INVALID`] separating consecutive groups: the
    /// running value starts at 1 and increments at each delimiter.
    ///
    /// # Panics
    ///
    /// Panics (in debug builds) if a solution position is already occupied
    /// in the pre-filled state or duplicated in the overlay; callers are
    /// expected to pass a solver result for this grid's current state.
    pub fn apply_solution(&mut self, solution: &[Pos]) {
        let mut number = 1;
        for &pos in solution {
            if pos == Pos::INVALID {
                number += 1;
                continue;
            }
            let i = self.index(pos);
            debug_assert_eq!(self.state[i], 0, "solution overlaps pre-filled cell {pos}");
            debug_assert_eq!(self.solution[i], 0, "duplicate solution position {pos}");
            self.solution[i] = number;
        }
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(self.is_in_bounds(pos), "position {pos} out of bounds");
        #[expect(clippy::cast_sign_loss)]
        let index = (pos.row * self.size + pos.col) as usize;
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_index_partition() {
        let grid = SudokuGrid::new();
        assert_eq!(grid.box_index(Pos::new(0, 0)), 0);
        assert_eq!(grid.box_index(Pos::new(0, 3)), 1);
        assert_eq!(grid.box_index(Pos::new(1, 2)), 0);
        assert_eq!(grid.box_index(Pos::new(2, 0)), 2);
        assert_eq!(grid.box_index(Pos::new(5, 5)), 5);

        // Every box covers exactly BOX_ROWS * BOX_COLS cells.
        let mut counts = [0; 6];
        for row in 0..SUDOKU_SIZE {
            for col in 0..SUDOKU_SIZE {
                counts[grid.box_index(Pos::new(row, col))] += 1;
            }
        }
        assert_eq!(counts, [6; 6]);
    }

    #[test]
    fn test_apply_solution_groups_by_value() {
        let mut grid = SudokuGrid::new();
        // Value 1 at (0,0); empty group for 2; value 3 at (1,1).
        let solution = [
            Pos::new(0, 0),
            Pos::INVALID,
            Pos::INVALID,
            Pos::new(1, 1),
            Pos::INVALID,
            Pos::INVALID,
            Pos::INVALID,
        ];
        grid.apply_solution(&solution);
        assert_eq!(grid.solution_number(Pos::new(0, 0)), 1);
        assert_eq!(grid.solution_number(Pos::new(1, 1)), 3);
        assert!(!grid.has_solution_at(Pos::new(2, 2)));
    }

    #[test]
    fn test_reset_clears_solution() {
        let mut grid = SudokuGrid::new();
        grid.apply_solution(&[Pos::new(0, 0)]);
        grid.reset(SUDOKU_SIZE);
        assert!(!grid.has_solution_at(Pos::new(0, 0)));
    }

    #[test]
    fn test_size_validation() {
        assert!(SudokuGrid::validate_size(6).is_ok());
        assert_eq!(
            SudokuGrid::validate_size(9).unwrap_err().to_string(),
            "size must be 6, but was 9"
        );
    }
}
