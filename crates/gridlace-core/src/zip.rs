//! Numbered-checkpoint grid state for the Zip puzzle.

use std::collections::BTreeSet;

use crate::{
    Pos,
    size::{self, DEFAULT_SIZE, SizeError},
};

/// Mutable state for a Zip puzzle: a sparse set of numbered checkpoint
/// cells plus impassable walls between adjacent cells.
///
/// Checkpoint numbers are unique by construction (one number per cell, and
/// the click mutator always assigns the smallest missing number). Walls are
/// stored as canonical (sorted) adjacent cell pairs.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Pos, ZipGrid};
///
/// let mut grid = ZipGrid::new(6);
/// grid.toggle_number(Pos::new(0, 0));
/// assert_eq!(grid.number(Pos::new(0, 0)), 1);
/// grid.toggle_wall(Pos::new(0, 0), Pos::new(0, 1));
/// assert!(grid.has_wall(Pos::new(0, 1), Pos::new(0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipGrid {
    size: i32,
    numbers: Vec<u16>,
    walls: BTreeSet<(Pos, Pos)>,
}

impl Default for ZipGrid {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl ZipGrid {
    /// Creates a grid with no numbers and no walls.
    #[must_use]
    pub fn new(size: i32) -> Self {
        let mut grid = Self {
            size,
            numbers: Vec::new(),
            walls: BTreeSet::new(),
        };
        grid.reset(size);
        grid
    }

    /// Checks whether `size` is acceptable for this family.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::OutOfRange`] when `size` is not in `4..=16`.
    pub fn validate_size(size: i32) -> Result<(), SizeError> {
        size::check_size_range(size)
    }

    /// Discards all numbers and walls, reinitializing at the given size.
    pub fn reset(&mut self, new_size: i32) {
        self.size = new_size;
        #[expect(clippy::cast_sign_loss)]
        let cells = (new_size * new_size) as usize;
        self.numbers = vec![0; cells];
        self.walls.clear();
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

    /// Checkpoint number at `pos` (`0` = unnumbered).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn number(&self, pos: Pos) -> u16 {
        self.numbers[self.index(pos)]
    }

    /// Whether the cell at `pos` carries a checkpoint number.
    #[must_use]
    pub fn has_number(&self, pos: Pos) -> bool {
        self.number(pos) > 0
    }

    /// Assigns a checkpoint number to the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set_number(&mut self, pos: Pos, number: u16) {
        let i = self.index(pos);
        self.numbers[i] = number;
    }

    /// Removes the checkpoint number at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn clear_number(&mut self, pos: Pos) {
        self.set_number(pos, 0);
    }

    /// Cell-click mutator: clears a numbered cell, otherwise assigns the
    /// smallest missing checkpoint number.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn toggle_number(&mut self, pos: Pos) {
        if self.has_number(pos) {
            self.clear_number(pos);
        } else {
            let number = self.smallest_missing_number();
            self.set_number(pos, number);
        }
    }

    /// Smallest checkpoint number not yet assigned to any cell.
    #[must_use]
    pub fn smallest_missing_number(&self) -> u16 {
        let used: BTreeSet<u16> = self.numbers.iter().copied().filter(|&n| n > 0).collect();
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let limit = (self.size * self.size) as u16;
        (1..=limit).find(|n| !used.contains(n)).unwrap_or(limit + 1)
    }

    /// Largest checkpoint number assigned to any cell (`0` if none).
    #[must_use]
    pub fn max_number(&self) -> u16 {
        self.numbers.iter().copied().max().unwrap_or(0)
    }

    /// Whether an impassable wall separates the two cells.
    ///
    /// The pair is canonicalized before lookup, so argument order does not
    /// matter.
    #[must_use]
    pub fn has_wall(&self, a: Pos, b: Pos) -> bool {
        self.walls.contains(&Pos::sorted_pair(a, b))
    }

    /// Border-click mutator: adds or removes the wall between two cells.
    ///
    /// Non-adjacent or out-of-bounds pairs are ignored.
    pub fn toggle_wall(&mut self, a: Pos, b: Pos) {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) || !a.is_adjacent_to(b) {
            return;
        }
        let key = Pos::sorted_pair(a, b);
        if !self.walls.remove(&key) {
            self.walls.insert(key);
        }
    }

    /// All walls, as canonical cell pairs.
    #[must_use]
    pub const fn walls(&self) -> &BTreeSet<(Pos, Pos)> {
        &self.walls
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(self.is_in_bounds(pos), "position {pos} out of bounds");
        #[expect(clippy::cast_sign_loss)]
        let index = (pos.row * self.size + pos.col) as usize;
        index
    }
}
