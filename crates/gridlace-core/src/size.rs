//! Grid size limits and validation.

/// Default side length for resizable puzzle grids.
pub const DEFAULT_SIZE: i32 = 8;
/// Smallest accepted side length.
pub const MIN_SIZE: i32 = 4;
/// Largest accepted side length.
pub const MAX_SIZE: i32 = 16;

/// A requested grid size was rejected by a puzzle family.
///
/// Callers must check a family's `validate_size` before resetting a grid to
/// a new size; the grid itself never refuses a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SizeError {
    /// The size falls outside the family's accepted range.
    #[display("size must be between {min} and {max}, but was {got}")]
    OutOfRange {
        /// Smallest accepted size.
        min: i32,
        /// Largest accepted size.
        max: i32,
        /// The rejected size.
        got: i32,
    },
    /// The family only plays on one fixed size.
    #[display("size must be {required}, but was {got}")]
    NotExactly {
        /// The single accepted size.
        required: i32,
        /// The rejected size.
        got: i32,
    },
}

/// Checks a size against the shared `4..=16` range.
///
/// # Errors
///
/// Returns [`SizeError::OutOfRange`] when `size` is not in `4..=16`.
pub fn check_size_range(size: i32) -> Result<(), SizeError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(SizeError::OutOfRange {
            min: MIN_SIZE,
            max: MAX_SIZE,
            got: size,
        })
    }
}

/// Checks a size against a single fixed value.
///
/// # Errors
///
/// Returns [`SizeError::NotExactly`] when `size != required`.
pub fn check_size_exactly(size: i32, required: i32) -> Result<(), SizeError> {
    if size == required {
        Ok(())
    } else {
        Err(SizeError::NotExactly {
            required,
            got: size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_check() {
        assert_eq!(check_size_range(MIN_SIZE), Ok(()));
        assert_eq!(check_size_range(MAX_SIZE), Ok(()));
        assert!(check_size_range(3).is_err());
        assert!(check_size_range(17).is_err());
    }

    #[test]
    fn test_exact_check_message() {
        let err = check_size_exactly(8, 6).unwrap_err();
        assert_eq!(err.to_string(), "size must be 6, but was 8");
    }
}
