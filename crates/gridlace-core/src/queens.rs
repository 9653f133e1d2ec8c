//! Region-labeled grid state for the Queens puzzle.

use crate::{
    Pos,
    size::{self, DEFAULT_SIZE, SizeError},
};

/// Mutable state for a Queens puzzle: every cell carries a region label.
///
/// A well-formed puzzle partitions the grid into exactly `size` regions,
/// each a 4-connected set of cells destined to hold exactly one queen. The
/// grid itself accepts any labeling; structural rules are checked by the
/// solver's validation.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Pos, QueensGrid};
///
/// let mut grid = QueensGrid::new(8);
/// grid.set_region(Pos::new(0, 0), 3);
/// assert_eq!(grid.region(Pos::new(0, 0)), 3);
/// assert_eq!(grid.region(Pos::new(1, 1)), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueensGrid {
    size: i32,
    regions: Vec<u8>,
}

impl Default for QueensGrid {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl QueensGrid {
    /// Creates a grid with all cells in region 0.
    #[must_use]
    pub fn new(size: i32) -> Self {
        let mut grid = Self {
            size,
            regions: Vec::new(),
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

    /// Discards all state and reinitializes at the given size.
    pub fn reset(&mut self, new_size: i32) {
        self.size = new_size;
        #[expect(clippy::cast_sign_loss)]
        let cells = (new_size * new_size) as usize;
        self.regions = vec![0; cells];
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

    /// Region label of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn region(&self, pos: Pos) -> u8 {
        self.regions[self.index(pos)]
    }

    /// Relabels the cell at `pos` with the given region id.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set_region(&mut self, pos: Pos, region: u8) {
        let i = self.index(pos);
        self.regions[i] = region;
    }

    /// Advances the cell's region label, wrapping around at `size`.
    ///
    /// This is the cell-click mutator the UI layer uses to paint regions.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn cycle_region(&mut self, pos: Pos) {
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let wrap = self.size as u8;
        let i = self.index(pos);
        // wrapping_add keeps labels above the wrap point (from set_region)
        // from overflowing at u8::MAX.
        self.regions[i] = self.regions[i].wrapping_add(1) % wrap;
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
    fn test_reset_discards_state() {
        let mut grid = QueensGrid::new(4);
        grid.set_region(Pos::new(1, 1), 2);
        grid.reset(5);
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.region(Pos::new(1, 1)), 0);
    }

    #[test]
    fn test_cycle_region_wraps() {
        let mut grid = QueensGrid::new(4);
        let pos = Pos::new(0, 0);
        for _ in 0..4 {
            grid.cycle_region(pos);
        }
        assert_eq!(grid.region(pos), 0);
    }

    #[test]
    fn test_cycle_region_from_max_label() {
        let mut grid = QueensGrid::new(4);
        let pos = Pos::new(0, 0);
        grid.set_region(pos, u8::MAX);
        grid.cycle_region(pos);
        assert!(grid.region(pos) < 4);
    }

    #[test]
    fn test_size_validation() {
        assert!(QueensGrid::validate_size(4).is_ok());
        assert!(QueensGrid::validate_size(16).is_ok());
        assert!(QueensGrid::validate_size(3).is_err());
        assert!(QueensGrid::validate_size(17).is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_access_panics() {
        let grid = QueensGrid::new(4);
        let _ = grid.region(Pos::new(0, 4));
    }
}
