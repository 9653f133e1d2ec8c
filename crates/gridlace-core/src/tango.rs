//! Binary-symbol grid state for the Tango puzzle.

use std::collections::BTreeMap;

use crate::{
    Pos,
    size::{self, SizeError},
};

/// Fixed side length of the Tango grid.
pub const TANGO_SIZE: i32 = 6;

/// Contents of a single Tango cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// No symbol placed yet.
    #[default]
    Empty,
    /// The Sun symbol.
    Sun,
    /// The Moon symbol.
    Moon,
}

/// A constraint tying the symbols of two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    /// Both cells must hold the same symbol.
    Equal,
    /// The cells must hold different symbols.
    Opposite,
}

/// Mutable state for a Tango puzzle: a 6×6 grid of Sun/Moon/Empty cells
/// plus border constraints between adjacent cells.
///
/// Border relations are keyed by the canonical (sorted) pair of the two
/// cell positions, and only grid-adjacent pairs can carry a relation; the
/// mutators enforce both.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Border, Cell, Pos, TangoGrid};
///
/// let mut grid = TangoGrid::new();
/// grid.cycle_cell(Pos::new(0, 0));
/// assert_eq!(grid.cell(Pos::new(0, 0)), Cell::Sun);
///
/// grid.cycle_border(Pos::new(0, 1), Pos::new(0, 0));
/// assert_eq!(grid.border(Pos::new(0, 0), Pos::new(0, 1)), Some(Border::Equal));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TangoGrid {
    size: i32,
    cells: Vec<Cell>,
    borders: BTreeMap<(Pos, Pos), Border>,
}

impl Default for TangoGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TangoGrid {
    /// Creates an empty 6×6 grid with no borders.
    #[must_use]
    pub fn new() -> Self {
        let mut grid = Self {
            size: TANGO_SIZE,
            cells: Vec::new(),
            borders: BTreeMap::new(),
        };
        grid.reset(TANGO_SIZE);
        grid
    }

    /// Checks whether `size` is acceptable for this family.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::NotExactly`] unless `size` is 6.
    pub fn validate_size(size: i32) -> Result<(), SizeError> {
        size::check_size_exactly(size, TANGO_SIZE)
    }

    /// Discards all cells and borders, reinitializing at the given size.
    pub fn reset(&mut self, new_size: i32) {
        self.size = new_size;
        #[expect(clippy::cast_sign_loss)]
        let cells = (new_size * new_size) as usize;
        self.cells = vec![Cell::Empty; cells];
        self.borders.clear();
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

    /// Symbol at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Places a symbol (or clears the cell) at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set_cell(&mut self, pos: Pos, cell: Cell) {
        let i = self.index(pos);
        self.cells[i] = cell;
    }

    /// Cell-click mutator: Empty → Sun → Moon → Empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn cycle_cell(&mut self, pos: Pos) {
        let next = match self.cell(pos) {
            Cell::Empty => Cell::Sun,
            Cell::Sun => Cell::Moon,
            Cell::Moon => Cell::Empty,
        };
        self.set_cell(pos, next);
    }

    /// Border relation between two cells, if any.
    ///
    /// The pair is canonicalized before lookup, so argument order does not
    /// matter.
    #[must_use]
    pub fn border(&self, a: Pos, b: Pos) -> Option<Border> {
        self.borders.get(&Pos::sorted_pair(a, b)).copied()
    }

    /// Sets or clears the border relation between two adjacent cells.
    ///
    /// Non-adjacent or out-of-bounds pairs are ignored.
    pub fn set_border(&mut self, a: Pos, b: Pos, border: Option<Border>) {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) || !a.is_adjacent_to(b) {
            return;
        }
        let key = Pos::sorted_pair(a, b);
        match border {
            Some(border) => {
                self.borders.insert(key, border);
            }
            None => {
                self.borders.remove(&key);
            }
        }
    }

    /// Border-click mutator: None → Equal → Opposite → None.
    ///
    /// Non-adjacent or out-of-bounds pairs are ignored.
    pub fn cycle_border(&mut self, a: Pos, b: Pos) {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) || !a.is_adjacent_to(b) {
            return;
        }
        let key = Pos::sorted_pair(a, b);
        match self.borders.get(&key) {
            None => {
                self.borders.insert(key, Border::Equal);
            }
            Some(Border::Equal) => {
                self.borders.insert(key, Border::Opposite);
            }
            Some(Border::Opposite) => {
                self.borders.remove(&key);
            }
        }
    }

    /// All border relations, keyed by canonical cell pair.
    #[must_use]
    pub const fn borders(&self) -> &BTreeMap<(Pos, Pos), Border> {
        &self.borders
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(self.is_in_bounds(pos), "position {pos} out of bounds");
        #[expect(clippy::cast_sign_loss)]
        let index = (pos.row * self.size + pos.col) as usize;
        index
    }
}
