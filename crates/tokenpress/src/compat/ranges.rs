//! # Range Utilities

use core::ops::Range;

/// Shift a byte [`Range`] by `offset`.
///
/// Used to lift ranges found in a sub-slice back into the coordinates of the
/// enclosing text.
pub fn offset_range(
    range: Range<usize>,
    offset: usize,
) -> Range<usize> {
    (range.start + offset)..(range.end + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_range() {
        assert_eq!(offset_range(0..10, 5), 5..15);
        assert_eq!(offset_range(3..3, 0), 3..3);
    }
}
