//! Search/reduction peers dispatched through the same table.
//!
//! All three return the first index at which the extremum occurs; an empty
//! slice yields index 0, which callers must treat as meaningless.

#![cfg(feature = "std")]

use crate::dispatch::table;

/// Index of the first minimum of `src`.
pub fn min_index(src: &[f32]) -> usize {
    (table().min_index)(src)
}

/// Index of the first maximum of `src`.
pub fn max_index(src: &[f32]) -> usize {
    (table().max_index)(src)
}

/// Indices of the first minimum and first maximum of `src`.
pub fn minmax_index(src: &[f32]) -> (usize, usize) {
    (table().minmax_index)(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatched_matches_reference() {
        let v = [3.0f32, -1.0, 5.0, -1.0, 5.0, 0.0];
        assert_eq!(min_index(&v), crate::generic::search::min_index(&v));
        assert_eq!(max_index(&v), crate::generic::search::max_index(&v));
        assert_eq!(minmax_index(&v), (1, 2));
    }
}
