//! Grid position representation.

use tinyvec::ArrayVec;

/// A 2-D grid coordinate (row, column).
///
/// Positions are ordered by row, then column. This total order is what makes
/// [`Pos::sorted_pair`] produce a canonical key for undirected cell pairs
/// (borders, walls).
///
/// # Examples
///
/// ```
/// use gridlace_core::Pos;
///
/// let pos = Pos::new(2, 3);
/// assert_eq!(pos.row, 2);
/// assert_eq!(pos.col, 3);
/// assert!(pos.is_in_bounds(6));
/// assert_eq!(pos.to_string(), "(2,3)");
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Display,
)]
#[display("({row},{col})")]
pub struct Pos {
    /// Row index, counted from the top.
    pub row: i32,
    /// Column index, counted from the left.
    pub col: i32,
}

impl Pos {
    /// The reserved "no position" sentinel.
    ///
    /// Used as a list delimiter in solver output encodings and as an
    /// out-of-grid marker. Never in bounds for any grid size.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::Pos;
    ///
    /// assert!(!Pos::INVALID.is_in_bounds(16));
    /// ```
    pub const INVALID: Self = Self { row: -1, col: -1 };

    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the 4 orthogonal neighbors (up, down, left, right).
    ///
    /// Neighbors may be out of bounds; callers filter with
    /// [`Pos::is_in_bounds`].
    #[must_use]
    pub const fn orthogonal_neighbors(self) -> [Self; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
            Self::new(self.row, self.col + 1),
        ]
    }

    /// Returns the 4 diagonal neighbors.
    #[must_use]
    pub const fn diagonal_neighbors(self) -> [Self; 4] {
        [
            Self::new(self.row - 1, self.col - 1),
            Self::new(self.row - 1, self.col + 1),
            Self::new(self.row + 1, self.col - 1),
            Self::new(self.row + 1, self.col + 1),
        ]
    }

    /// Returns all 8 neighbors (orthogonal first, then diagonal).
    #[must_use]
    pub fn all_neighbors(self) -> ArrayVec<[Self; 8]> {
        let mut neighbors = ArrayVec::new();
        neighbors.extend(self.orthogonal_neighbors());
        neighbors.extend(self.diagonal_neighbors());
        neighbors
    }

    /// Whether the position lies within a `size × size` grid.
    #[must_use]
    pub const fn is_in_bounds(self, size: i32) -> bool {
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }

    /// Whether `other` is orthogonally adjacent to this position.
    #[must_use]
    pub const fn is_adjacent_to(self, other: Self) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }

    /// Normalizes an unordered pair of positions into a canonical ordering.
    ///
    /// Undirected relations between cells (Tango borders, Zip walls) are
    /// keyed by the pair in `(smaller, larger)` order, so the same physical
    /// edge always maps to the same key regardless of argument order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::Pos;
    ///
    /// let a = Pos::new(1, 2);
    /// let b = Pos::new(1, 1);
    /// assert_eq!(Pos::sorted_pair(a, b), Pos::sorted_pair(b, a));
    /// assert_eq!(Pos::sorted_pair(a, b), (b, a));
    /// ```
    #[must_use]
    pub fn sorted_pair(a: Self, b: Self) -> (Self, Self) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_and_arithmetic() {
        assert!(Pos::new(0, 5) < Pos::new(1, 0));
        assert!(Pos::new(2, 1) < Pos::new(2, 3));
        assert_eq!(Pos::new(1, 2) + Pos::new(0, 1), Pos::new(1, 3));
        assert_eq!(Pos::new(1, 2) - Pos::new(1, 0), Pos::new(0, 2));
    }

    #[test]
    fn test_neighbors() {
        let pos = Pos::new(3, 3);
        assert_eq!(
            pos.orthogonal_neighbors(),
            [
                Pos::new(2, 3),
                Pos::new(4, 3),
                Pos::new(3, 2),
                Pos::new(3, 4)
            ]
        );
        assert_eq!(pos.all_neighbors().len(), 8);
        for neighbor in pos.diagonal_neighbors() {
            assert!(!pos.is_adjacent_to(neighbor));
        }
        for neighbor in pos.orthogonal_neighbors() {
            assert!(pos.is_adjacent_to(neighbor));
        }
    }

    #[test]
    fn test_bounds() {
        assert!(Pos::new(0, 0).is_in_bounds(1));
        assert!(!Pos::new(0, 1).is_in_bounds(1));
        assert!(!Pos::new(-1, 0).is_in_bounds(4));
        assert!(!Pos::INVALID.is_in_bounds(16));
    }

    #[test]
    fn test_sorted_pair_is_canonical() {
        let a = Pos::new(2, 0);
        let b = Pos::new(1, 3);
        let pair = Pos::sorted_pair(a, b);
        assert_eq!(pair, Pos::sorted_pair(b, a));
        assert!(pair.0 <= pair.1);
    }

    proptest::proptest! {
        #[test]
        fn test_sorted_pair_laws(
            a_row in -1..16_i32, a_col in -1..16_i32,
            b_row in -1..16_i32, b_col in -1..16_i32,
        ) {
            let a = Pos::new(a_row, a_col);
            let b = Pos::new(b_row, b_col);
            let pair = Pos::sorted_pair(a, b);
            proptest::prop_assert_eq!(pair, Pos::sorted_pair(b, a));
            proptest::prop_assert!(pair.0 <= pair.1);
            proptest::prop_assert!(pair.0 == a || pair.0 == b);
        }
    }
}
