//! Static catalog of the supported puzzle families.

/// Identifies one of the supported puzzle families.
///
/// Carries the static metadata (display name, tagline, icon asset, route)
/// that page composition uses to build the puzzle catalog.
///
/// # Examples
///
/// ```
/// use gridlace_core::PuzzleKind;
///
/// let kind = PuzzleKind::from_name("queens").unwrap();
/// assert_eq!(kind, PuzzleKind::Queens);
/// assert_eq!(kind.description(), "Crown each region");
/// assert_eq!(kind.route(), "/queens");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleKind {
    /// Single-path puzzle: numbered checkpoints and walls.
    Zip,
    /// Binary-symbol puzzle: Suns and Moons with border constraints.
    Tango,
    /// Region-constrained queen placement.
    Queens,
    /// 6×6 number placement with 2×3 boxes.
    Sudoku,
}

impl PuzzleKind {
    /// All puzzle kinds, in catalog order.
    pub const ALL: [Self; 4] = [Self::Zip, Self::Tango, Self::Queens, Self::Sudoku];

    /// Display name of the puzzle.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zip => "Zip",
            Self::Tango => "Tango",
            Self::Queens => "Queens",
            Self::Sudoku => "Sudoku",
        }
    }

    /// One-line tagline shown in the catalog.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Zip => "Complete the path",
            Self::Tango => "Harmonize the grid",
            Self::Queens => "Crown each region",
            Self::Sudoku => "Fill every row, column and box",
        }
    }

    /// Icon asset file name.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Zip => "zip.svg",
            Self::Tango => "tango.svg",
            Self::Queens => "queens.svg",
            Self::Sudoku => "sudoku.svg",
        }
    }

    /// Page route of the puzzle.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Zip => "/zip",
            Self::Tango => "/tango",
            Self::Queens => "/queens",
            Self::Sudoku => "/sudoku",
        }
    }

    /// Looks up a puzzle kind by display name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}
