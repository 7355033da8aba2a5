//! Reference edit distance
//!
//! Plain two-row Levenshtein over bytes, with no band. Used to cross-check
//! motifs reported by the banded scanner.

use thiserror::Error;

use crate::types::Motif;

/// Errors reported when a motif fails cross-checking
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Motif {offset} {end_column} lies outside the text")]
    OutOfRange { offset: usize, end_column: usize },

    #[error("Motif {offset} {end_column} has edit distance {actual}, above tolerance {k}")]
    DistanceExceeded {
        offset: usize,
        end_column: usize,
        actual: usize,
        k: usize,
    },

    #[error("Motif {offset} {end_column} reports distance {reported} but the alignment needs {actual}")]
    DistanceMismatch {
        offset: usize,
        end_column: usize,
        reported: usize,
        actual: usize,
    },
}

/// Minimum number of insertions, deletions and substitutions turning `a` into `b`
pub fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Are `a` and `b` within `max` edits of each other?
///
/// Exits early when the length difference alone exceeds `max`, or when a
/// whole row of the table is already above it.
pub fn within_distance(a: &[u8], b: &[u8], max: usize) -> bool {
    if a.len().abs_diff(b.len()) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    dp[b.len()] <= max
}

/// Recompute every motif against the text with the unbanded distance
pub fn verify_motifs(
    pattern: &[u8],
    text: &[u8],
    motifs: &[Motif],
    k: usize,
) -> Result<(), VerifyError> {
    for motif in motifs {
        let matched = motif.matched(text).ok_or(VerifyError::OutOfRange {
            offset: motif.offset,
            end_column: motif.end_column,
        })?;

        let actual = edit_distance(pattern, matched);
        if actual > k {
            return Err(VerifyError::DistanceExceeded {
                offset: motif.offset,
                end_column: motif.end_column,
                actual,
                k,
            });
        }
        if actual != motif.distance {
            return Err(VerifyError::DistanceMismatch {
                offset: motif.offset,
                end_column: motif.end_column,
                reported: motif.distance,
                actual,
            });
        }
    }

    log::debug!("Verified {} motifs against the reference distance", motifs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_distances() {
        assert_eq!(edit_distance(b"kitten", b"sitting"), 3);
        assert_eq!(edit_distance(b"ATG", b"ATG"), 0);
        assert_eq!(edit_distance(b"ATG", b"GAT"), 2);
        assert_eq!(edit_distance(b"", b"ACGT"), 4);
        assert_eq!(edit_distance(b"ACGT", b""), 4);
        assert_eq!(edit_distance(b"PLEASANTLY", b"MEANLY"), 5);
    }

    #[test]
    fn test_within_distance() {
        assert!(within_distance(b"ACGT", b"ACGT", 0));
        assert!(within_distance(b"ACGT", b"AGGT", 1));
        assert!(within_distance(b"ACGT", b"ACG", 1));
        assert!(!within_distance(b"A", b"ACGTAC", 1));
        assert!(!within_distance(b"AAAA", b"TTTT", 3));
    }

    #[test]
    fn test_within_agrees_with_distance() {
        let words: [&[u8]; 6] = [b"", b"A", b"AC", b"CA", b"ACGT", b"TGCA"];
        for a in words {
            for b in words {
                let d = edit_distance(a, b);
                for max in 0..5 {
                    assert_eq!(within_distance(a, b, max), d <= max);
                }
            }
        }
    }

    #[test]
    fn test_verify_accepts_correct_motifs() {
        let motifs = vec![Motif::new(1, 3, 0), Motif::new(1, 4, 1)];
        assert_eq!(verify_motifs(b"ATG", b"ATGATG", &motifs, 1), Ok(()));
    }

    #[test]
    fn test_verify_rejects_bad_motifs() {
        let far = [Motif::new(3, 3, 1)];
        assert!(matches!(
            verify_motifs(b"ATG", b"ATGATG", &far, 1),
            Err(VerifyError::DistanceExceeded { actual: 2, .. })
        ));

        let wrong = [Motif::new(1, 3, 1)];
        assert!(matches!(
            verify_motifs(b"ATG", b"ATGATG", &wrong, 1),
            Err(VerifyError::DistanceMismatch { reported: 1, actual: 0, .. })
        ));

        let outside = [Motif::new(5, 3, 0)];
        assert!(matches!(
            verify_motifs(b"ATG", b"ATGATG", &outside, 1),
            Err(VerifyError::OutOfRange { .. })
        ));
    }
}
