//! Motif scanning engines
//!
//! Every start offset of the text whose window of length `m + k` fits is
//! aligned against the pattern with the banded recurrence, and each end
//! column `j` in `[m - k, m + k]` whose final-row score is within `k` edits is
//! reported. Results come back in ascending offset order, and in ascending
//! end-column order within one offset, whichever engine runs the scan.

use std::ops::RangeInclusive;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::banded::update_table;
use crate::matrix::BandedMatrix;
use crate::types::{window_count, Motif};

/// Result type for scanning operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while scanning
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// How the alignment matrix is managed across windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStrategy {
    /// One matrix, initialised once and reused for every window
    #[default]
    Reuse,
    /// One matrix, fully re-initialised before every window
    Fresh,
    /// Windows spread over a rayon pool, one matrix per worker
    Parallel,
}

impl ScanStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            ScanStrategy::Reuse => "reuse",
            ScanStrategy::Fresh => "fresh",
            ScanStrategy::Parallel => "parallel",
        }
    }
}

/// Parameters for a motif scan
#[derive(Debug, Clone, Default)]
pub struct ScanParams {
    pub strategy: ScanStrategy,
    /// Worker threads for the parallel strategy; the global rayon pool when `None`
    pub threads: Option<usize>,
}

/// Trait for motif scanning engines
pub trait MotifScanner: Send + Sync {
    /// Report every motif of `pattern` in `text` with at most `k` edits
    fn scan(&self, pattern: &[u8], text: &[u8], k: usize) -> ScanResult<Vec<Motif>>;

    /// Get the name/identifier of this engine
    fn name(&self) -> &'static str;
}

/// Factory for creating scanning engines
pub struct ScannerFactory;

impl ScannerFactory {
    /// Create a scanner instance based on parameters
    pub fn create(params: &ScanParams) -> Box<dyn MotifScanner> {
        match params.strategy {
            ScanStrategy::Reuse => Box::new(ReuseScanner),
            ScanStrategy::Fresh => Box::new(FreshScanner),
            ScanStrategy::Parallel => Box::new(ParallelScanner::new(params.threads)),
        }
    }

    /// List all available scanning strategies
    pub fn available_strategies() -> Vec<&'static str> {
        vec!["reuse", "fresh", "parallel"]
    }
}

/// Scan with the default engine. The sequential scan cannot fail.
pub fn find_similar_motifs(pattern: &[u8], text: &[u8], k: usize) -> Vec<Motif> {
    ReuseScanner.collect(pattern, text, k)
}

/// End columns inspected in the final row; the lower bound clamps at 0 when `k > m`
/// and the upper bound at `usize::MAX`
pub fn end_columns(pattern_len: usize, k: usize) -> RangeInclusive<usize> {
    pattern_len.saturating_sub(k)..=pattern_len.saturating_add(k)
}

/// Align one window starting at 0-based `offset` and append its motifs to `out`
fn scan_window(
    matrix: &mut BandedMatrix,
    pattern: &[u8],
    text: &[u8],
    offset: usize,
    out: &mut Vec<Motif>,
) {
    let k = matrix.tolerance();
    let window = &text[offset..offset + pattern.len() + k];
    update_table(matrix, pattern, window, k);

    let last = matrix.final_row();
    let before = out.len();
    for j in end_columns(pattern.len(), k) {
        if let Some(distance) = last[j].distance().filter(|&d| d <= k) {
            out.push(Motif::new(offset + 1, j, distance));
        }
    }

    log::trace!("Window at offset {}: {} motifs", offset + 1, out.len() - before);
}

/// Single matrix allocated once; boundaries are written only at construction.
///
/// Reuse is sound because the recurrence never writes column 0, row 0, or any
/// cell outside the band, and every window has the same length.
pub struct ReuseScanner;

impl ReuseScanner {
    fn collect(&self, pattern: &[u8], text: &[u8], k: usize) -> Vec<Motif> {
        let windows = window_count(text.len(), pattern.len(), k);
        log::debug!(
            "Scanning {} windows of length {} (reuse)",
            windows,
            pattern.len().saturating_add(k)
        );
        if windows == 0 {
            return Vec::new();
        }

        let mut matrix = BandedMatrix::new(pattern.len(), k);
        let mut motifs = Vec::new();
        for offset in 0..windows {
            scan_window(&mut matrix, pattern, text, offset, &mut motifs);
        }

        log::debug!("Found {} motifs", motifs.len());
        motifs
    }
}

impl MotifScanner for ReuseScanner {
    fn scan(&self, pattern: &[u8], text: &[u8], k: usize) -> ScanResult<Vec<Motif>> {
        Ok(self.collect(pattern, text, k))
    }

    fn name(&self) -> &'static str {
        "reuse"
    }
}

/// Single matrix, cleared and re-initialised before each window
pub struct FreshScanner;

impl MotifScanner for FreshScanner {
    fn scan(&self, pattern: &[u8], text: &[u8], k: usize) -> ScanResult<Vec<Motif>> {
        let windows = window_count(text.len(), pattern.len(), k);
        log::debug!(
            "Scanning {} windows of length {} (fresh)",
            windows,
            pattern.len().saturating_add(k)
        );
        if windows == 0 {
            return Ok(Vec::new());
        }

        let mut matrix = BandedMatrix::new(pattern.len(), k);
        let mut motifs = Vec::new();
        for offset in 0..windows {
            matrix.clear();
            scan_window(&mut matrix, pattern, text, offset, &mut motifs);
        }

        log::debug!("Found {} motifs", motifs.len());
        Ok(motifs)
    }

    fn name(&self) -> &'static str {
        "fresh"
    }
}

/// Data-parallel scan over window offsets.
///
/// Each offset depends only on the pattern, `k` and its own window, so
/// offsets are distributed freely and the per-offset lists are concatenated
/// in offset order afterwards.
pub struct ParallelScanner {
    threads: Option<usize>,
}

impl ParallelScanner {
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }

    fn run(&self, pattern: &[u8], text: &[u8], k: usize) -> Vec<Motif> {
        let windows = window_count(text.len(), pattern.len(), k);
        log::debug!(
            "Scanning {} windows of length {} on {} threads",
            windows,
            pattern.len().saturating_add(k),
            rayon::current_num_threads()
        );
        if windows == 0 {
            return Vec::new();
        }

        let per_offset: Vec<Vec<Motif>> = (0..windows)
            .into_par_iter()
            .map_init(
                || BandedMatrix::new(pattern.len(), k),
                |matrix, offset| {
                    let mut hits = Vec::new();
                    scan_window(matrix, pattern, text, offset, &mut hits);
                    hits
                },
            )
            .collect();

        let motifs: Vec<Motif> = per_offset.into_iter().flatten().collect();
        log::debug!("Found {} motifs", motifs.len());
        motifs
    }
}

impl MotifScanner for ParallelScanner {
    fn scan(&self, pattern: &[u8], text: &[u8], k: usize) -> ScanResult<Vec<Motif>> {
        match self.threads {
            Some(0) => Err(ScanError::InvalidParams(
                "thread count must be at least 1".to_string(),
            )),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                Ok(pool.install(|| self.run(pattern, text, k)))
            }
            None => Ok(self.run(pattern, text, k)),
        }
    }

    fn name(&self) -> &'static str {
        "parallel"
    }
}
