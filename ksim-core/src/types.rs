use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A window of the text that matches the pattern within the edit tolerance.
///
/// Ordering follows discovery order: offset first, then end column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Motif {
    /// 1-based start offset in the text
    pub offset: usize,
    /// Number of text characters aligned against the pattern
    pub end_column: usize,
    /// Edit distance between the pattern and the aligned text
    pub distance: usize,
}

impl Motif {
    pub fn new(offset: usize, end_column: usize, distance: usize) -> Self {
        Self {
            offset,
            end_column,
            distance,
        }
    }

    /// 0-based half-open range of the aligned substring in the text.
    /// `None` for the invalid offset 0 or an end past `usize::MAX`.
    pub fn text_range(&self) -> Option<Range<usize>> {
        let start = self.offset.checked_sub(1)?;
        let end = start.checked_add(self.end_column)?;
        Some(start..end)
    }

    /// The aligned substring, or `None` if the motif does not fit in `text`
    pub fn matched<'a>(&self, text: &'a [u8]) -> Option<&'a [u8]> {
        text.get(self.text_range()?)
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.offset, self.end_column)
    }
}

/// The three scalar inputs of a motif search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifQuery {
    /// Maximum number of edits tolerated
    pub k: usize,
    pub pattern: Vec<u8>,
    pub text: Vec<u8>,
}

impl MotifQuery {
    pub fn new(k: usize, pattern: impl Into<Vec<u8>>, text: impl Into<Vec<u8>>) -> Self {
        Self {
            k,
            pattern: pattern.into(),
            text: text.into(),
        }
    }

    /// Length of every text window compared against the pattern; `None` on overflow
    pub fn window_len(&self) -> Option<usize> {
        self.pattern.len().checked_add(self.k)
    }

    /// Number of start offsets whose window fits inside the text
    pub fn window_count(&self) -> usize {
        window_count(self.text.len(), self.pattern.len(), self.k)
    }
}

/// Number of windows of length `pattern_len + k` that fit in a text of `text_len`.
///
/// A window length that overflows `usize` cannot fit in any text.
pub fn window_count(text_len: usize, pattern_len: usize, k: usize) -> usize {
    pattern_len
        .checked_add(k)
        .and_then(|window_len| text_len.checked_sub(window_len))
        .map_or(0, |slack| slack + 1)
}
