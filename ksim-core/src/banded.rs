//! Banded edit-distance recurrence.
//!
//! Row `i` of the table only computes columns within `k` of the diagonal, so
//! one window costs O(m·k) instead of O(m·n). Any alignment with at most `k`
//! edits never leaves that band, which keeps the scores exact for every
//! distance the scanner can report.

use std::cmp::{max, min};
use std::ops::RangeInclusive;

use crate::matrix::BandedMatrix;

/// Columns of row `row` that lie inside the band: `[max(1, row - k), min(window_len, row + k)]`
pub fn band_columns(row: usize, window_len: usize, k: usize) -> RangeInclusive<usize> {
    max(1, row.saturating_sub(k))..=min(window_len, row.saturating_add(k))
}

/// Align the whole pattern against `window`, updating the matrix in place.
///
/// Cells outside the band are neither read as fresh nor written; the
/// boundary row and column are left as they are. The matrix must have been
/// built for this pattern length and a tolerance of `k`, and the window must
/// not be longer than `m + k`.
pub fn update_table(matrix: &mut BandedMatrix, pattern: &[u8], window: &[u8], k: usize) {
    let m = pattern.len();
    let n = window.len();

    debug_assert_eq!(matrix.pattern_len(), m);
    debug_assert_eq!(matrix.tolerance(), k);
    debug_assert!(n <= matrix.window_len(), "window longer than matrix width");

    for i in 1..=m {
        for j in band_columns(i, n, k) {
            let diagonal = matrix.get(i - 1, j - 1);
            let substitution = if pattern[i - 1] == window[j - 1] {
                diagonal
            } else {
                diagonal.penalize(1)
            };

            // Deletion from the pattern or insertion into it
            let gap = max(
                matrix.get(i - 1, j).penalize(1),
                matrix.get(i, j - 1).penalize(1),
            );

            matrix.set(i, j, max(substitution, gap));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Score;

    #[test]
    fn test_band_columns() {
        assert_eq!(band_columns(1, 4, 1), 1..=2);
        assert_eq!(band_columns(3, 4, 1), 2..=4);
        assert_eq!(band_columns(5, 8, 2), 3..=7);
        assert_eq!(band_columns(2, 3, 0), 2..=2);
        assert!(band_columns(1, 0, 0).is_empty());
    }

    #[test]
    fn test_exact_window() {
        let mut matrix = BandedMatrix::new(3, 1);
        update_table(&mut matrix, b"ATG", b"ATGA", 1);

        let last = matrix.final_row();
        assert_eq!(last[3], Score::Reachable(0));
        assert_eq!(last[2], Score::Reachable(-1));
        assert_eq!(last[4], Score::Reachable(-1));
    }

    #[test]
    fn test_substitution_costs_one() {
        let mut matrix = BandedMatrix::new(3, 0);
        update_table(&mut matrix, b"ATG", b"ACG", 0);
        assert_eq!(matrix.get(3, 3), Score::Reachable(-1));
    }

    #[test]
    fn test_cells_outside_band_stay_unreachable() {
        let mut matrix = BandedMatrix::new(4, 1);
        update_table(&mut matrix, b"ACGT", b"ACGTA", 1);

        for i in 1..=4 {
            for j in 1..matrix.cols() {
                if !band_columns(i, 5, 1).contains(&j) {
                    assert_eq!(matrix.get(i, j), Score::Unreachable, "cell ({i}, {j})");
                }
            }
        }
    }

    #[test]
    fn test_reused_matrix_matches_fresh_one() {
        let pattern = b"GATTA";
        let k = 2;
        let windows: [&[u8]; 3] = [b"CCCCCCC", b"GATTACA", b"GTTAAAC"];

        let mut reused = BandedMatrix::new(pattern.len(), k);
        for window in windows {
            update_table(&mut reused, pattern, window, k);

            let mut fresh = BandedMatrix::new(pattern.len(), k);
            update_table(&mut fresh, pattern, window, k);
            assert_eq!(reused, fresh);
        }
    }
}
