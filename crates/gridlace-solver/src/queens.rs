//! Solver for the Queens puzzle family.

use std::collections::BTreeMap;

use gridlace_core::{Pos, QueensGrid};

use crate::{Solver, ValidateError};

/// Reasons a Queens grid state is structurally invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum QueensError {
    /// The grid must be partitioned into exactly `size` regions.
    #[display("size of grid and number of regions must match! size: {size}, regions: {regions}")]
    RegionCountMismatch {
        /// Side length of the grid.
        size: i32,
        /// Number of distinct region labels found.
        regions: usize,
    },
    /// A region label appears in two separate connected components.
    #[display("cell {pos} disconnected from region {region}")]
    DisconnectedCell {
        /// First cell found outside its region's component.
        pos: Pos,
        /// The region label in question.
        region: u8,
    },
}

/// Validates and solves region-constrained queen placement.
///
/// One queen must be placed in every region such that no two queens share a
/// row or column and no two queens are diagonally adjacent.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Pos, QueensGrid};
/// use gridlace_solver::{QueensSolver, Solver as _};
///
/// // 4 single-row regions: 0, 1, 2, 3 from top to bottom.
/// let mut grid = QueensGrid::new(4);
/// for row in 0..4 {
///     for col in 0..4 {
///         grid.set_region(Pos::new(row, col), u8::try_from(row).unwrap());
///     }
/// }
/// let solver = QueensSolver::new();
/// assert!(solver.validate(&grid).is_ok());
/// assert_eq!(solver.solve(&grid).len(), 4);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct QueensSolver;

impl QueensSolver {
    /// Creates a new `QueensSolver`.
    #[must_use]
    pub const fn new() -> Self {
        QueensSolver
    }
}

impl Solver for QueensSolver {
    type Grid = QueensGrid;

    fn validate(&self, grid: &QueensGrid) -> Result<(), ValidateError> {
        check_region_count(grid)?;
        check_region_connectivity(grid)?;
        Ok(())
    }

    fn solve(&self, grid: &QueensGrid) -> Vec<Pos> {
        // Bucket cells by region, then search the most constrained (i.e.
        // smallest) regions first to cut down branching.
        let mut regions: BTreeMap<u8, Vec<Pos>> = BTreeMap::new();
        for row in 0..grid.size() {
            for col in 0..grid.size() {
                let pos = Pos::new(row, col);
                regions.entry(grid.region(pos)).or_default().push(pos);
            }
        }
        let mut regions: Vec<Vec<Pos>> = regions.into_values().collect();
        regions.sort_by_key(Vec::len);

        log::debug!(
            "queens: searching {} regions on a {size}x{size} grid",
            regions.len(),
            size = grid.size()
        );

        let mut queens = Vec::with_capacity(regions.len());
        if place_queens(&regions, &mut queens, 0) {
            queens
        } else {
            Vec::new()
        }
    }
}

/// The number of distinct region labels must equal the grid size.
fn check_region_count(grid: &QueensGrid) -> Result<(), QueensError> {
    let mut seen = [false; 256];
    let mut regions = 0;
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let region = grid.region(Pos::new(row, col));
            if !seen[usize::from(region)] {
                seen[usize::from(region)] = true;
                regions += 1;
            }
        }
    }
    #[expect(clippy::cast_sign_loss)]
    let expected = grid.size() as usize;
    if regions != expected {
        return Err(QueensError::RegionCountMismatch {
            size: grid.size(),
            regions,
        });
    }
    Ok(())
}

/// Every region must form a single 4-connected component.
///
/// Flood-fills from each unvisited cell; reaching an unvisited cell whose
/// region was already fully processed means that region is split.
fn check_region_connectivity(grid: &QueensGrid) -> Result<(), QueensError> {
    let size = grid.size();
    #[expect(clippy::cast_sign_loss)]
    let mut visited = vec![false; (size * size) as usize];
    let mut processed = [false; 256];

    #[expect(clippy::cast_sign_loss)]
    let index = |pos: Pos| (pos.row * size + pos.col) as usize;

    for row in 0..size {
        for col in 0..size {
            let start = Pos::new(row, col);
            if visited[index(start)] {
                continue;
            }

            let region = grid.region(start);
            if processed[usize::from(region)] {
                // The component containing this label was already flooded,
                // so this cell cannot reach it.
                return Err(QueensError::DisconnectedCell { pos: start, region });
            }
            processed[usize::from(region)] = true;

            let mut to_visit = vec![start];
            while let Some(pos) = to_visit.pop() {
                if visited[index(pos)] {
                    continue;
                }
                visited[index(pos)] = true;
                to_visit.extend(pos.orthogonal_neighbors().into_iter().filter(|&neighbor| {
                    grid.is_in_bounds(neighbor) && grid.region(neighbor) == region
                }));
            }
        }
    }

    Ok(())
}

/// Whether a queen at `pos` attacks none of the queens already placed.
fn can_place_queen(queens: &[Pos], pos: Pos) -> bool {
    queens.iter().all(|&queen| {
        queen.row != pos.row
            && queen.col != pos.col
            && !((queen.row - pos.row).abs() == 1 && (queen.col - pos.col).abs() == 1)
    })
}

/// Places one queen per region by backtracking, in region order.
fn place_queens(regions: &[Vec<Pos>], queens: &mut Vec<Pos>, region_index: usize) -> bool {
    if region_index >= regions.len() {
        return true;
    }
    for &pos in &regions[region_index] {
        if can_place_queen(queens, pos) {
            queens.push(pos);
            if place_queens(regions, queens, region_index + 1) {
                return true;
            }
            queens.pop();
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_rows(rows: &[&[u8]]) -> QueensGrid {
        let size = i32::try_from(rows.len()).unwrap();
        let mut grid = QueensGrid::new(size);
        for (row, labels) in rows.iter().enumerate() {
            for (col, &label) in labels.iter().enumerate() {
                grid.set_region(
                    Pos::new(i32::try_from(row).unwrap(), i32::try_from(col).unwrap()),
                    label,
                );
            }
        }
        grid
    }

    #[test]
    fn test_validate_region_count() {
        let grid = QueensGrid::new(4);
        let err = QueensSolver::new().validate(&grid).unwrap_err();
        assert_eq!(
            err.to_string(),
            "size of grid and number of regions must match! size: 4, regions: 1"
        );
    }

    #[test]
    fn test_validate_detects_disconnected_region() {
        // Region 1 appears in two separate components.
        let grid = grid_from_rows(&[
            &[1, 0, 0, 1],
            &[0, 0, 0, 1],
            &[2, 2, 3, 3],
            &[2, 2, 3, 3],
        ]);
        let err = QueensSolver::new().validate(&grid).unwrap_err();
        assert_eq!(err.to_string(), "cell (0,3) disconnected from region 1");
    }

    #[test]
    fn test_validate_accepts_connected_partition() {
        let grid = grid_from_rows(&[
            &[0, 0, 1, 1],
            &[0, 0, 1, 1],
            &[2, 2, 3, 3],
            &[2, 2, 3, 3],
        ]);
        assert!(QueensSolver::new().validate(&grid).is_ok());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let grid = grid_from_rows(&[
            &[1, 0, 0, 1],
            &[0, 0, 0, 1],
            &[2, 2, 3, 3],
            &[2, 2, 3, 3],
        ]);
        let solver = QueensSolver::new();
        let first = solver.validate(&grid);
        let second = solver.validate(&grid);
        assert_eq!(first, second);
    }

    #[test]
    fn test_solve_respects_no_attack_law() {
        // Column-stripe regions on a 5x5 grid.
        let grid = grid_from_rows(&[
            &[0, 1, 2, 3, 4],
            &[0, 1, 2, 3, 4],
            &[0, 1, 2, 3, 4],
            &[0, 1, 2, 3, 4],
            &[0, 1, 2, 3, 4],
        ]);
        let solution = QueensSolver::new().solve(&grid);
        assert_eq!(solution.len(), 5);
        for (i, &a) in solution.iter().enumerate() {
            for &b in &solution[i + 1..] {
                assert_ne!(a.row, b.row);
                assert_ne!(a.col, b.col);
                assert!((a.row - b.row).abs() != 1 || (a.col - b.col).abs() != 1);
            }
        }
    }

    #[test]
    fn test_solve_forced_singleton_regions() {
        // Five single-cell regions, pairwise non-attacking, plus one filler
        // region for everything else. The singletons force their cells and
        // the filler queen is forced into the remaining row and column.
        let singletons = [
            Pos::new(0, 0),
            Pos::new(1, 2),
            Pos::new(2, 4),
            Pos::new(3, 1),
            Pos::new(4, 3),
        ];
        let mut grid = QueensGrid::new(6);
        for (i, &pos) in singletons.iter().enumerate() {
            grid.set_region(pos, u8::try_from(i + 1).unwrap());
        }
        assert!(QueensSolver::new().validate(&grid).is_ok());
        let solution = QueensSolver::new().solve(&grid);
        assert_eq!(solution.len(), 6);
        for pos in singletons {
            assert!(solution.contains(&pos));
        }
        // Row 5 and column 5 are the only ones left for the filler region.
        assert!(solution.contains(&Pos::new(5, 5)));
    }

    #[test]
    fn test_solve_unsolvable_returns_empty() {
        // Two horizontally adjacent singleton regions can never both hold a
        // queen: their cells are in the same row.
        let grid = grid_from_rows(&[
            &[1, 2, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 3],
            &[0, 0, 0, 0],
        ]);
        assert!(QueensSolver::new().validate(&grid).is_ok());
        assert!(QueensSolver::new().solve(&grid).is_empty());
    }
}
