//! Alignment matrix for banded k-difference matching.
//!
//! The matrix has one row per pattern prefix (`m + 1` rows) and one column per
//! window prefix (`m + k + 1` columns). Only cells within `k` of the diagonal
//! are ever computed; every other cell stays [`Score::Unreachable`] apart from
//! the boundary row and column, which hold the cost of pure insertions and
//! deletions.

use crate::score::Score;

/// Row-major alignment table `D[i][j]` for a pattern of length `m` and tolerance `k`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandedMatrix {
    cells: Vec<Score>,
    rows: usize,
    cols: usize,
    k: usize,
}

impl BandedMatrix {
    /// Allocate the table and write the boundary costs.
    ///
    /// `D[0][0] = 0`, `D[i][0] = -i` and `D[0][j] = -j`; all other cells
    /// start unreachable.
    pub fn new(pattern_len: usize, k: usize) -> Self {
        let rows = pattern_len + 1;
        let cols = pattern_len + k + 1;

        let mut matrix = Self {
            cells: vec![Score::Unreachable; rows * cols],
            rows,
            cols,
            k,
        };
        matrix.reset_boundaries();
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn pattern_len(&self) -> usize {
        self.rows - 1
    }

    /// Tolerance the matrix was sized for
    pub fn tolerance(&self) -> usize {
        self.k
    }

    /// Longest window the matrix can align against
    pub fn window_len(&self) -> usize {
        self.cols - 1
    }

    /// Cell value; cells outside the table read as unreachable
    pub fn get(&self, i: usize, j: usize) -> Score {
        if i < self.rows && j < self.cols {
            self.cells[i * self.cols + j]
        } else {
            Score::Unreachable
        }
    }

    /// Store a cell value; writes outside the table are dropped
    pub fn set(&mut self, i: usize, j: usize, score: Score) {
        debug_assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) outside matrix");
        if i < self.rows && j < self.cols {
            self.cells[i * self.cols + j] = score;
        }
    }

    /// Rewrite row 0 and column 0 with the pure gap costs
    pub fn reset_boundaries(&mut self) {
        for j in 0..self.cols {
            self.cells[j] = Score::from_cost(j);
        }
        for i in 1..self.rows {
            self.cells[i * self.cols] = Score::from_cost(i);
        }
    }

    /// Return every cell to its freshly initialised state
    pub fn clear(&mut self) {
        self.cells.fill(Score::Unreachable);
        self.reset_boundaries();
    }

    /// One full row of the table
    pub fn row(&self, i: usize) -> &[Score] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Row `m`: scores of the whole pattern against each window prefix
    pub fn final_row(&self) -> &[Score] {
        self.row(self.rows - 1)
    }
}
