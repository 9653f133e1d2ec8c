//! Solver for the mini Sudoku puzzle family.

use gridlace_core::{Pos, SudokuGrid};

use crate::{Solver, ValidateError};

/// Reasons a Sudoku grid state is structurally invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SudokuError {
    /// A pre-filled number appears twice in the same row.
    #[display("invalid row: {row}")]
    DuplicateInRow {
        /// Row index of the first violation found.
        row: i32,
    },
    /// A pre-filled number appears twice in the same column.
    #[display("invalid column: {col}")]
    DuplicateInColumn {
        /// Column index of the first violation found.
        col: i32,
    },
    /// A pre-filled number appears twice in the same box.
    #[display("invalid box at {pos}")]
    DuplicateInBox {
        /// Cell whose box holds the duplicate.
        pos: Pos,
    },
}

/// Validates and solves 6×6 number placement with 2×3 boxes.
///
/// Every number `1..=6` must appear exactly once per row, column, and box.
/// The solver's result lists the positions of solved (originally empty)
/// cells grouped by assigned value, with groups for consecutive values
/// separated by [`Pos::INVALID`]; see [`SudokuGrid::apply_solution`].
///
/// # Examples
///
/// ```
/// use gridlace_core::{Pos, SudokuGrid};
/// use gridlace_solver::{Solver as _, SudokuSolver};
///
/// let mut grid = SudokuGrid::new();
/// grid.set_number(Pos::new(0, 0), 1);
/// let solver = SudokuSolver::new();
/// assert!(solver.validate(&grid).is_ok());
///
/// let solution = solver.solve(&grid);
/// assert!(!solution.is_empty());
/// grid.apply_solution(&solution);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SudokuSolver;

impl SudokuSolver {
    /// Creates a new `SudokuSolver`.
    #[must_use]
    pub const fn new() -> Self {
        SudokuSolver
    }
}

impl Solver for SudokuSolver {
    type Grid = SudokuGrid;

    fn validate(&self, grid: &SudokuGrid) -> Result<(), ValidateError> {
        let search = Search::new(grid);
        for row in 0..grid.size() {
            for col in 0..grid.size() {
                let pos = Pos::new(row, col);
                if !grid.has_number(pos) {
                    continue;
                }
                if !search.valid_row(pos) {
                    return Err(SudokuError::DuplicateInRow { row }.into());
                }
                if !search.valid_col(pos) {
                    return Err(SudokuError::DuplicateInColumn { col }.into());
                }
                if !search.valid_box(pos) {
                    return Err(SudokuError::DuplicateInBox { pos }.into());
                }
            }
        }
        Ok(())
    }

    fn solve(&self, grid: &SudokuGrid) -> Vec<Pos> {
        let mut search = Search::new(grid);
        log::debug!("sudoku: backtracking over a {0}x{0} grid", grid.size());
        if !search.fill_from(0) {
            return Vec::new();
        }

        // Group solved cells by assigned value, then join the groups for
        // 1..=size with a single delimiter between consecutive groups.
        let size = grid.size();
        #[expect(clippy::cast_sign_loss)]
        let mut by_value: Vec<Vec<Pos>> = vec![Vec::new(); size as usize + 1];
        for row in 0..size {
            for col in 0..size {
                let pos = Pos::new(row, col);
                if !grid.has_number(pos) {
                    by_value[usize::from(search.number(pos))].push(pos);
                }
            }
        }

        let mut result = Vec::new();
        for (value, group) in by_value.iter().enumerate().skip(1) {
            if value > 1 {
                result.push(Pos::INVALID);
            }
            result.extend_from_slice(group);
        }
        result
    }
}

/// Scratch state for one validate or solve call.
///
/// Holds a working copy of the cell values plus per-box occurrence counters
/// maintained incrementally during the search.
struct Search<'a> {
    size: i32,
    state: Vec<u8>,
    /// `boxes[box_index][number]` = occurrences of `number` in that box.
    /// Numbers are 1-based, so each counter row has `size + 1` slots.
    boxes: Vec<Vec<u8>>,
    grid: &'a SudokuGrid,
}

impl<'a> Search<'a> {
    fn new(grid: &'a SudokuGrid) -> Self {
        let size = grid.size();
        #[expect(clippy::cast_sign_loss)]
        let (cells, slots) = ((size * size) as usize, size as usize + 1);
        let mut state = vec![0; cells];
        let mut boxes = vec![vec![0; slots]; slots - 1];
        for row in 0..size {
            for col in 0..size {
                let pos = Pos::new(row, col);
                let number = grid.number(pos);
                state[Self::index_of(size, pos)] = number;
                if number > 0 {
                    boxes[grid.box_index(pos)][usize::from(number)] += 1;
                }
            }
        }
        Self {
            size,
            state,
            boxes,
            grid,
        }
    }

    #[expect(clippy::cast_sign_loss)]
    fn index_of(size: i32, pos: Pos) -> usize {
        (pos.row * size + pos.col) as usize
    }

    fn number(&self, pos: Pos) -> u8 {
        self.state[Self::index_of(self.size, pos)]
    }

    /// Row-major chronological backtracking from cell index `i`.
    fn fill_from(&mut self, i: i32) -> bool {
        if i == self.size * self.size {
            return true;
        }
        let pos = Pos::new(i / self.size, i % self.size);
        let cell = Self::index_of(self.size, pos);
        if self.state[cell] != 0 {
            return self.fill_from(i + 1);
        }

        let box_index = self.grid.box_index(pos);
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let max = self.size as u8;
        for number in 1..=max {
            self.state[cell] = number;
            self.boxes[box_index][usize::from(number)] += 1;
            if self.valid_row(pos)
                && self.valid_col(pos)
                && self.valid_box(pos)
                && self.fill_from(i + 1)
            {
                return true;
            }
            self.boxes[box_index][usize::from(number)] -= 1;
        }

        self.state[cell] = 0;
        false
    }

    /// The number at `pos` appears nowhere else in its row.
    fn valid_row(&self, pos: Pos) -> bool {
        let number = self.number(pos);
        (0..self.size)
            .filter(|&col| col != pos.col)
            .all(|col| self.number(Pos::new(pos.row, col)) != number)
    }

    /// The number at `pos` appears nowhere else in its column.
    fn valid_col(&self, pos: Pos) -> bool {
        let number = self.number(pos);
        (0..self.size)
            .filter(|&row| row != pos.row)
            .all(|row| self.number(Pos::new(row, pos.col)) != number)
    }

    /// The number at `pos` appears exactly once in its box.
    fn valid_box(&self, pos: Pos) -> bool {
        let number = self.number(pos);
        self.boxes[self.grid.box_index(pos)][usize::from(number)] == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay(grid: &SudokuGrid, solution: &[Pos]) -> Vec<Vec<u8>> {
        let mut grid = grid.clone();
        grid.apply_solution(solution);
        (0..grid.size())
            .map(|row| {
                (0..grid.size())
                    .map(|col| {
                        let pos = Pos::new(row, col);
                        if grid.has_number(pos) {
                            grid.number(pos)
                        } else {
                            grid.solution_number(pos)
                        }
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_validate_duplicate_in_row() {
        let mut grid = SudokuGrid::new();
        grid.set_number(Pos::new(2, 0), 5);
        grid.set_number(Pos::new(2, 4), 5);
        let err = SudokuSolver::new().validate(&grid).unwrap_err();
        assert_eq!(err.to_string(), "invalid row: 2");
    }

    #[test]
    fn test_validate_duplicate_in_column() {
        let mut grid = SudokuGrid::new();
        grid.set_number(Pos::new(0, 3), 2);
        grid.set_number(Pos::new(5, 3), 2);
        let err = SudokuSolver::new().validate(&grid).unwrap_err();
        assert_eq!(err.to_string(), "invalid column: 3");
    }

    #[test]
    fn test_validate_duplicate_in_box() {
        let mut grid = SudokuGrid::new();
        // Same 2x3 box, different row and column.
        grid.set_number(Pos::new(0, 0), 4);
        grid.set_number(Pos::new(1, 2), 4);
        let err = SudokuSolver::new().validate(&grid).unwrap_err();
        assert_eq!(err.to_string(), "invalid box at (0,0)");
    }

    #[test]
    fn test_solve_satisfies_uniqueness() {
        let mut grid = SudokuGrid::new();
        grid.set_number(Pos::new(0, 0), 1);
        grid.set_number(Pos::new(3, 3), 6);
        assert!(SudokuSolver::new().validate(&grid).is_ok());

        let solution = SudokuSolver::new().solve(&grid);
        assert!(!solution.is_empty());

        let full = overlay(&grid, &solution);
        for i in 0..6 {
            let row: Vec<u8> = (0..6).map(|col| full[i][col]).collect();
            let col: Vec<u8> = (0..6).map(|row| full[row][i]).collect();
            for value in 1..=6 {
                assert_eq!(row.iter().filter(|&&n| n == value).count(), 1);
                assert_eq!(col.iter().filter(|&&n| n == value).count(), 1);
            }
        }
        // Box uniqueness: each 2x3 box holds each value once.
        for box_row in 0..3 {
            for box_col in 0..2 {
                let mut values: Vec<u8> = Vec::new();
                for row in 0..2 {
                    for col in 0..3 {
                        values.push(full[box_row * 2 + row][box_col * 3 + col]);
                    }
                }
                values.sort_unstable();
                assert_eq!(values, [1, 2, 3, 4, 5, 6]);
            }
        }
    }

    #[test]
    fn test_solve_delimiter_law() {
        // One pre-filled cell: 5 delimiters separate 6 value groups, and
        // the pre-filled cell never appears in the result.
        let mut grid = SudokuGrid::new();
        grid.set_number(Pos::new(0, 0), 3);
        let solution = SudokuSolver::new().solve(&grid);
        let delimiters = solution.iter().filter(|&&pos| pos == Pos::INVALID).count();
        assert_eq!(delimiters, 5);
        assert_eq!(solution.len(), 35 + 5);
        assert!(!solution.contains(&Pos::new(0, 0)));
    }

    #[test]
    fn test_solve_unsolvable_returns_empty() {
        let mut grid = SudokuGrid::new();
        // Row 0 holds 1..=5; cell (0,5) must be 6, but 6 is already in the
        // same box on row 1.
        for col in 0..5 {
            grid.set_number(Pos::new(0, col), u8::try_from(col + 1).unwrap());
        }
        grid.set_number(Pos::new(1, 4), 6);
        assert!(SudokuSolver::new().validate(&grid).is_ok());
        assert!(SudokuSolver::new().solve(&grid).is_empty());
    }
}
