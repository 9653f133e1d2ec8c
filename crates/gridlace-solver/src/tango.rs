//! Solver for the Tango puzzle family.

use gridlace_core::{Border, Cell, Pos, TangoGrid, tango::TANGO_SIZE};

use crate::{Solver, ValidateError};

/// Reasons a Tango grid state is structurally invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TangoError {
    /// The grid is not the fixed Tango dimension.
    #[display("size of grid must be {TANGO_SIZE}, but was {size}")]
    WrongSize {
        /// The offending size.
        size: i32,
    },
    /// A row or column holds more than half its length of one symbol.
    #[display("each row and column must not contain more than {max} Suns or {max} Moons")]
    TooManySymbols {
        /// Half the grid's side length.
        max: i32,
    },
    /// Three consecutive identical symbols in a row or column.
    #[display("found 3 adjacent Suns or Moons in a row or column")]
    ThreeInARow,
    /// A border relation contradicts the placed symbols, or two chained
    /// `Equal` borders force a three-in-a-row.
    #[display("puzzle cannot be solved due to invalid border state")]
    InvalidBorders,
}

/// Validates and solves the binary-symbol adjacency puzzle.
///
/// Every cell receives a Sun or a Moon such that each row and column holds
/// exactly half of each, no three consecutive cells share a symbol, and all
/// border relations are respected. The solver's result lists the positions
/// of Moons placed in originally-empty cells.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Cell, Pos, TangoGrid};
/// use gridlace_solver::{Solver as _, TangoSolver};
///
/// let mut grid = TangoGrid::new();
/// grid.set_cell(Pos::new(0, 0), Cell::Sun);
/// let solver = TangoSolver::new();
/// assert!(solver.validate(&grid).is_ok());
/// assert!(!solver.solve(&grid).is_empty());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TangoSolver;

impl TangoSolver {
    /// Creates a new `TangoSolver`.
    #[must_use]
    pub const fn new() -> Self {
        TangoSolver
    }
}

impl Solver for TangoSolver {
    type Grid = TangoGrid;

    fn validate(&self, grid: &TangoGrid) -> Result<(), ValidateError> {
        if grid.size() != TANGO_SIZE {
            return Err(TangoError::WrongSize { size: grid.size() }.into());
        }
        if !symbol_counts_within_cap(grid) {
            return Err(TangoError::TooManySymbols {
                max: grid.size() / 2,
            }
            .into());
        }
        if !no_three_in_a_row(grid) {
            return Err(TangoError::ThreeInARow.into());
        }
        if !borders_consistent(grid) {
            return Err(TangoError::InvalidBorders.into());
        }
        Ok(())
    }

    fn solve(&self, grid: &TangoGrid) -> Vec<Pos> {
        let mut search = Search::new(grid);
        log::debug!("tango: backtracking over a {0}x{0} grid", grid.size());
        if !search.fill_from(0) {
            return Vec::new();
        }

        let mut moons = Vec::new();
        for row in 0..grid.size() {
            for col in 0..grid.size() {
                let pos = Pos::new(row, col);
                if grid.cell(pos) == Cell::Empty && search.cell(pos) == Cell::Moon {
                    moons.push(pos);
                }
            }
        }
        moons
    }
}

/// No row or column may hold more than `size / 2` of either symbol.
fn symbol_counts_within_cap(grid: &TangoGrid) -> bool {
    let cap = grid.size() / 2;
    for i in 0..grid.size() {
        let (mut row_suns, mut row_moons) = (0, 0);
        let (mut col_suns, mut col_moons) = (0, 0);
        for j in 0..grid.size() {
            match grid.cell(Pos::new(i, j)) {
                Cell::Sun => row_suns += 1,
                Cell::Moon => row_moons += 1,
                Cell::Empty => {}
            }
            match grid.cell(Pos::new(j, i)) {
                Cell::Sun => col_suns += 1,
                Cell::Moon => col_moons += 1,
                Cell::Empty => {}
            }
            if row_suns > cap || row_moons > cap || col_suns > cap || col_moons > cap {
                return false;
            }
        }
    }
    true
}

/// No three consecutive cells in any row or column share a non-empty symbol.
fn no_three_in_a_row(grid: &TangoGrid) -> bool {
    let same_run = |a: Pos, b: Pos, c: Pos| {
        let first = grid.cell(a);
        first != Cell::Empty && grid.cell(b) == first && grid.cell(c) == first
    };
    for i in 0..grid.size() {
        for j in 0..grid.size() - 2 {
            if same_run(Pos::new(i, j), Pos::new(i, j + 1), Pos::new(i, j + 2)) {
                return false;
            }
            if same_run(Pos::new(j, i), Pos::new(j + 1, i), Pos::new(j + 2, i)) {
                return false;
            }
        }
    }
    true
}

/// Border relations must be consistent with placed symbols, and two `Equal`
/// borders chained in the same direction are rejected outright (they would
/// force three identical symbols in a row).
fn borders_consistent(grid: &TangoGrid) -> bool {
    for (&(a, b), &border) in grid.borders() {
        let (first, second) = (grid.cell(a), grid.cell(b));
        let both_filled = first != Cell::Empty && second != Cell::Empty;
        match border {
            Border::Equal => {
                if both_filled && first != second {
                    return false;
                }
                // Keys are canonical, so the border direction is b - a.
                let dir = b - a;
                let forward = grid.border(b, b + dir) == Some(Border::Equal);
                let backward = grid.border(a - dir, a) == Some(Border::Equal);
                if forward || backward {
                    return false;
                }
            }
            Border::Opposite => {
                if both_filled && first == second {
                    return false;
                }
            }
        }
    }
    true
}

/// Scratch state for one solve call: a working copy of the cells plus
/// running per-row and per-column symbol counts.
struct Search<'a> {
    size: i32,
    cells: Vec<Cell>,
    row_suns: Vec<i32>,
    row_moons: Vec<i32>,
    col_suns: Vec<i32>,
    col_moons: Vec<i32>,
    grid: &'a TangoGrid,
}

impl<'a> Search<'a> {
    fn new(grid: &'a TangoGrid) -> Self {
        let size = grid.size();
        #[expect(clippy::cast_sign_loss)]
        let lines = size as usize;
        let mut search = Self {
            size,
            cells: vec![Cell::Empty; lines * lines],
            row_suns: vec![0; lines],
            row_moons: vec![0; lines],
            col_suns: vec![0; lines],
            col_moons: vec![0; lines],
            grid,
        };
        for row in 0..size {
            for col in 0..size {
                let pos = Pos::new(row, col);
                search.place(pos, grid.cell(pos));
            }
        }
        search
    }

    #[expect(clippy::cast_sign_loss)]
    fn index(&self, pos: Pos) -> usize {
        (pos.row * self.size + pos.col) as usize
    }

    fn cell(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    fn place(&mut self, pos: Pos, cell: Cell) {
        let i = self.index(pos);
        self.cells[i] = cell;
        #[expect(clippy::cast_sign_loss)]
        let (row, col) = (pos.row as usize, pos.col as usize);
        match cell {
            Cell::Sun => {
                self.row_suns[row] += 1;
                self.col_suns[col] += 1;
            }
            Cell::Moon => {
                self.row_moons[row] += 1;
                self.col_moons[col] += 1;
            }
            Cell::Empty => {}
        }
    }

    fn unplace(&mut self, pos: Pos) {
        let i = self.index(pos);
        #[expect(clippy::cast_sign_loss)]
        let (row, col) = (pos.row as usize, pos.col as usize);
        match self.cells[i] {
            Cell::Sun => {
                self.row_suns[row] -= 1;
                self.col_suns[col] -= 1;
            }
            Cell::Moon => {
                self.row_moons[row] -= 1;
                self.col_moons[col] -= 1;
            }
            Cell::Empty => {}
        }
        self.cells[i] = Cell::Empty;
    }

    /// Row-major chronological backtracking from cell index `i`.
    fn fill_from(&mut self, i: i32) -> bool {
        if i == self.size * self.size {
            return true;
        }
        let pos = Pos::new(i / self.size, i % self.size);
        if self.grid.cell(pos) != Cell::Empty {
            // Pre-placed symbols are fixed input.
            return self.fill_from(i + 1);
        }

        for symbol in [Cell::Moon, Cell::Sun] {
            self.place(pos, symbol);
            if self.placement_ok(pos) && self.fill_from(i + 1) {
                return true;
            }
            self.unplace(pos);
        }
        false
    }

    /// Checks the rules affected by a tentative placement at `pos`: the
    /// count caps, the borders incident to the cell, and the 3-run windows
    /// around it. Nothing else can have changed, so no full rescan.
    fn placement_ok(&self, pos: Pos) -> bool {
        let cap = self.size / 2;
        #[expect(clippy::cast_sign_loss)]
        let (row, col) = (pos.row as usize, pos.col as usize);
        if self.row_suns[row] > cap
            || self.row_moons[row] > cap
            || self.col_suns[col] > cap
            || self.col_moons[col] > cap
        {
            return false;
        }

        for neighbor in pos.orthogonal_neighbors() {
            if self.grid.is_in_bounds(neighbor) && !self.border_ok(pos, neighbor) {
                return false;
            }
        }

        let same_run = |a: Pos, b: Pos, c: Pos| {
            let first = self.cell(a);
            first != Cell::Empty && self.cell(b) == first && self.cell(c) == first
        };
        for row in (pos.row - 2).max(0)..=pos.row.min(self.size - 3) {
            if same_run(
                Pos::new(row, pos.col),
                Pos::new(row + 1, pos.col),
                Pos::new(row + 2, pos.col),
            ) {
                return false;
            }
        }
        for col in (pos.col - 2).max(0)..=pos.col.min(self.size - 3) {
            if same_run(
                Pos::new(pos.row, col),
                Pos::new(pos.row, col + 1),
                Pos::new(pos.row, col + 2),
            ) {
                return false;
            }
        }
        true
    }

    /// A border between two cells passes while either side is empty.
    fn border_ok(&self, a: Pos, b: Pos) -> bool {
        let Some(border) = self.grid.border(a, b) else {
            return true;
        };
        let (first, second) = (self.cell(a), self.cell(b));
        if first == Cell::Empty || second == Cell::Empty {
            return true;
        }
        match border {
            Border::Equal => first == second,
            Border::Opposite => first != second,
        }
    }
}
