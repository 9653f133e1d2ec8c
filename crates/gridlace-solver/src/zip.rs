//! Solver for the Zip puzzle family.

use std::collections::BTreeSet;

use gridlace_core::{Pos, ZipGrid};
use tinyvec::ArrayVec;

use crate::{Solver, ValidateError};

/// Reasons a Zip grid state is structurally invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ZipError {
    /// Checkpoint numbers must form a contiguous run starting at 1.
    #[display("checkpoint number {number} is missing")]
    MissingNumber {
        /// The smallest absent number below the maximum.
        number: u16,
    },
}

/// Validates and solves the single-path puzzle.
///
/// The solver searches for a Hamiltonian path that visits every cell once,
/// passes through the numbered checkpoints in increasing order, ends on the
/// highest checkpoint, and never steps across a wall. The result is the
/// ordered sequence of cells along the path, empty when no path exists.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Pos, ZipGrid};
/// use gridlace_solver::{Solver as _, ZipSolver};
///
/// let mut grid = ZipGrid::new(4);
/// grid.set_number(Pos::new(0, 0), 1);
/// grid.set_number(Pos::new(3, 2), 2);
/// let solver = ZipSolver::new();
/// assert!(solver.validate(&grid).is_ok());
///
/// let path = solver.solve(&grid);
/// assert_eq!(path.len(), 16);
/// assert_eq!(path[0], Pos::new(0, 0));
/// assert_eq!(path[15], Pos::new(3, 2));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipSolver;

impl ZipSolver {
    /// Creates a new `ZipSolver`.
    #[must_use]
    pub const fn new() -> Self {
        ZipSolver
    }
}

impl Solver for ZipSolver {
    type Grid = ZipGrid;

    fn validate(&self, grid: &ZipGrid) -> Result<(), ValidateError> {
        let assigned: BTreeSet<u16> = (0..grid.size())
            .flat_map(|row| (0..grid.size()).map(move |col| Pos::new(row, col)))
            .map(|pos| grid.number(pos))
            .filter(|&number| number > 0)
            .collect();
        for number in 1..=grid.max_number() {
            if !assigned.contains(&number) {
                return Err(ZipError::MissingNumber { number }.into());
            }
        }
        Ok(())
    }

    fn solve(&self, grid: &ZipGrid) -> Vec<Pos> {
        let mut search = Search::new(grid);
        log::debug!(
            "zip: searching for a path through {} checkpoints on a {size}x{size} grid",
            grid.max_number(),
            size = grid.size()
        );

        // The path must open at checkpoint 1 when one exists; an unnumbered
        // grid may start anywhere.
        let starts: Vec<Pos> = match search.checkpoint(1) {
            Some(pos) => vec![pos],
            None => (0..grid.size())
                .flat_map(|row| (0..grid.size()).map(move |col| Pos::new(row, col)))
                .collect(),
        };

        for start in starts {
            if search.walk_from(start) {
                return search.path;
            }
        }
        Vec::new()
    }
}

/// Scratch state for one solve call.
struct Search<'a> {
    size: i32,
    visited: Vec<bool>,
    path: Vec<Pos>,
    /// The checkpoint number the path must hit next.
    next_checkpoint: u16,
    /// Highest checkpoint on the grid; the path must end there.
    max_checkpoint: u16,
    grid: &'a ZipGrid,
}

impl<'a> Search<'a> {
    fn new(grid: &'a ZipGrid) -> Self {
        #[expect(clippy::cast_sign_loss)]
        let cells = (grid.size() * grid.size()) as usize;
        Self {
            size: grid.size(),
            visited: vec![false; cells],
            path: Vec::with_capacity(cells),
            next_checkpoint: 1,
            max_checkpoint: grid.max_number(),
            grid,
        }
    }

    /// Position of the given checkpoint number, if assigned.
    fn checkpoint(&self, number: u16) -> Option<Pos> {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| Pos::new(row, col)))
            .find(|&pos| self.grid.number(pos) == number)
    }

    #[expect(clippy::cast_sign_loss)]
    fn index(&self, pos: Pos) -> usize {
        (pos.row * self.size + pos.col) as usize
    }

    /// Whether entering `pos` is legal for the current search state.
    fn can_enter(&self, pos: Pos) -> bool {
        if self.visited[self.index(pos)] {
            return false;
        }
        let number = self.grid.number(pos);
        number == 0 || number == self.next_checkpoint
    }

    /// Depth-first extension of the path from `pos`.
    ///
    /// Assumes `can_enter(pos)` held; restores all state on failure.
    fn walk_from(&mut self, pos: Pos) -> bool {
        let number = self.grid.number(pos);
        let i = self.index(pos);
        self.visited[i] = true;
        self.path.push(pos);
        if number > 0 {
            self.next_checkpoint += 1;
        }

        let complete = self.path.len() == self.visited.len();
        let on_last_checkpoint = number > 0 && number == self.max_checkpoint;
        if complete && (self.max_checkpoint == 0 || on_last_checkpoint) {
            return true;
        }

        // The highest checkpoint closes the path, so reaching it early is a
        // dead end; otherwise keep extending.
        if !complete && !on_last_checkpoint {
            let mut steps: ArrayVec<[Pos; 4]> = ArrayVec::new();
            steps.extend(
                pos.orthogonal_neighbors()
                    .into_iter()
                    .filter(|&next| next.is_in_bounds(self.size) && !self.grid.has_wall(pos, next)),
            );
            for next in steps {
                if self.can_enter(next) && self.walk_from(next) {
                    return true;
                }
            }
        }

        if number > 0 {
            self.next_checkpoint -= 1;
        }
        self.path.pop();
        self.visited[i] = false;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid_path(grid: &ZipGrid, path: &[Pos]) {
        #[expect(clippy::cast_sign_loss)]
        let cells = (grid.size() * grid.size()) as usize;
        assert_eq!(path.len(), cells);

        let distinct: BTreeSet<Pos> = path.iter().copied().collect();
        assert_eq!(distinct.len(), cells, "path revisits a cell");

        let mut last_number = 0;
        for (i, &pos) in path.iter().enumerate() {
            if i > 0 {
                let prev = path[i - 1];
                assert!(prev.is_adjacent_to(pos), "non-adjacent step {prev} -> {pos}");
                assert!(!grid.has_wall(prev, pos), "step through wall at {pos}");
            }
            let number = grid.number(pos);
            if number > 0 {
                assert_eq!(number, last_number + 1, "checkpoint out of order");
                last_number = number;
            }
        }
        assert_eq!(last_number, grid.max_number());
        if grid.max_number() > 0 {
            let last = *path.last().unwrap();
            assert_eq!(grid.number(last), grid.max_number(), "path must end on the last checkpoint");
        }
    }

    #[test]
    fn test_validate_missing_number() {
        let mut grid = ZipGrid::new(4);
        grid.set_number(Pos::new(0, 0), 1);
        grid.set_number(Pos::new(2, 2), 3);
        let err = ZipSolver::new().validate(&grid).unwrap_err();
        assert_eq!(err.to_string(), "checkpoint number 2 is missing");
    }

    #[test]
    fn test_solve_unnumbered_grid() {
        let grid = ZipGrid::new(4);
        let path = ZipSolver::new().solve(&grid);
        assert_valid_path(&grid, &path);
    }

    #[test]
    fn test_solve_with_checkpoints() {
        let mut grid = ZipGrid::new(4);
        grid.set_number(Pos::new(0, 0), 1);
        grid.set_number(Pos::new(2, 1), 2);
        grid.set_number(Pos::new(1, 2), 3);
        assert!(ZipSolver::new().validate(&grid).is_ok());
        let path = ZipSolver::new().solve(&grid);
        assert_valid_path(&grid, &path);
        assert_eq!(path[0], Pos::new(0, 0));
    }

    #[test]
    fn test_solve_respects_walls() {
        let mut grid = ZipGrid::new(4);
        grid.set_number(Pos::new(0, 0), 1);
        grid.set_number(Pos::new(0, 1), 2);
        // Wall directly between the two checkpoints: the path must leave
        // (0,0) downward and come back around.
        grid.toggle_wall(Pos::new(0, 0), Pos::new(0, 1));
        let path = ZipSolver::new().solve(&grid);
        assert_valid_path(&grid, &path);
        assert_ne!(path[1], Pos::new(0, 1));
    }

    #[test]
    fn test_solve_walled_off_cell_returns_empty() {
        let mut grid = ZipGrid::new(4);
        // Seal off the corner cell completely.
        grid.toggle_wall(Pos::new(0, 0), Pos::new(0, 1));
        grid.toggle_wall(Pos::new(0, 0), Pos::new(1, 0));
        assert!(ZipSolver::new().validate(&grid).is_ok());
        assert!(ZipSolver::new().solve(&grid).is_empty());
    }

    #[test]
    fn test_solve_contradictory_checkpoints_return_empty() {
        // The wall makes (0,0) a dead end, so it can only be the path's
        // terminal cell; checkpoint 3 elsewhere can then never follow it.
        let mut grid = ZipGrid::new(4);
        grid.toggle_wall(Pos::new(0, 0), Pos::new(0, 1));
        grid.set_number(Pos::new(0, 3), 1);
        grid.set_number(Pos::new(0, 0), 2);
        grid.set_number(Pos::new(2, 2), 3);
        assert!(ZipSolver::new().validate(&grid).is_ok());
        assert!(ZipSolver::new().solve(&grid).is_empty());
    }
}
