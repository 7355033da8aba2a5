//! Alignment scores with an explicit unreachable marker.
//!
//! A reachable score is the negated edit distance of the best alignment path
//! into a cell. Cells that no path reaches inside the band hold
//! [`Score::Unreachable`], which compares below every reachable score so the
//! recurrence can take plain maxima without a numeric sentinel.

/// Score of one cell of the alignment matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Score {
    /// No alignment path reaches this cell
    #[default]
    Unreachable,
    /// Negated edit distance of the best path into this cell
    Reachable(i32),
}

impl Score {
    /// Score of a path that costs `cost` edits
    pub fn from_cost(cost: usize) -> Self {
        Score::Reachable(-(cost as i32))
    }

    /// Charge `cost` additional edits. Unreachable stays unreachable.
    pub fn penalize(self, cost: i32) -> Self {
        match self {
            Score::Reachable(value) => Score::Reachable(value - cost),
            Score::Unreachable => Score::Unreachable,
        }
    }

    pub fn value(self) -> Option<i32> {
        match self {
            Score::Reachable(value) => Some(value),
            Score::Unreachable => None,
        }
    }

    /// Edit distance represented by this score
    pub fn distance(self) -> Option<usize> {
        self.value().map(|value| value.unsigned_abs() as usize)
    }
}
