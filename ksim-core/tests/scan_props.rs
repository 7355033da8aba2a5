use proptest::prelude::*;

use ksim_core::scan::end_columns;
use ksim_core::types::window_count;
use ksim_core::{
    edit_distance, find_similar_motifs, within_distance, ScanParams, ScanStrategy, ScannerFactory,
};

fn dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), 0..=max_len)
}

proptest! {
    #[test]
    fn every_motif_is_within_tolerance(pattern in dna(6), text in dna(30), k in 0usize..4) {
        for motif in find_similar_motifs(&pattern, &text, k) {
            let matched = motif.matched(&text).expect("motif inside text");
            prop_assert!(edit_distance(&pattern, matched) <= k);
            prop_assert_eq!(edit_distance(&pattern, matched), motif.distance);
        }
    }

    #[test]
    fn no_qualifying_pair_is_missed(pattern in dna(5), text in dna(20), k in 0usize..3) {
        let motifs = find_similar_motifs(&pattern, &text, k);
        let mut count = 0;
        for i in 0..window_count(text.len(), pattern.len(), k) {
            for j in end_columns(pattern.len(), k) {
                if within_distance(&pattern, &text[i..i + j], k) {
                    count += 1;
                    prop_assert!(motifs.iter().any(|m| m.offset == i + 1 && m.end_column == j));
                }
            }
        }
        prop_assert_eq!(motifs.len(), count);
    }

    #[test]
    fn output_is_strictly_ordered(pattern in dna(6), text in dna(40), k in 0usize..4) {
        let motifs = find_similar_motifs(&pattern, &text, k);
        for pair in motifs.windows(2) {
            prop_assert!((pair[0].offset, pair[0].end_column) < (pair[1].offset, pair[1].end_column));
        }
    }

    #[test]
    fn parallel_matches_sequential(pattern in dna(6), text in dna(60), k in 0usize..4) {
        let scanner = ScannerFactory::create(&ScanParams {
            strategy: ScanStrategy::Parallel,
            threads: Some(2),
        });
        let parallel = scanner.scan(&pattern, &text, k).expect("parallel scan");
        prop_assert_eq!(parallel, find_similar_motifs(&pattern, &text, k));
    }
}
