//! Dataset parsing
//!
//! A dataset is three whitespace-separated tokens: the tolerance `k`, the
//! pattern and the text. Line layout does not matter.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::types::MotifQuery;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing {0} in input")]
    MissingToken(&'static str),

    #[error("Invalid tolerance '{value}': {reason}")]
    InvalidTolerance { value: String, reason: String },

    #[error("Unexpected trailing input starting at '{0}'")]
    TrailingInput(String),
}

pub type InputResult<T> = Result<T, InputError>;

/// Parse a dataset held in memory
pub fn parse_query(content: &str) -> InputResult<MotifQuery> {
    parse_query_bytes(content.as_bytes())
}

/// Parse a dataset from raw bytes.
///
/// Tokens are split on ASCII whitespace, so the pattern and text may use any
/// byte alphabet; only the tolerance has to be a decimal integer.
pub fn parse_query_bytes(content: &[u8]) -> InputResult<MotifQuery> {
    let mut tokens = content
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty());

    let raw_k = tokens.next().ok_or(InputError::MissingToken("tolerance"))?;
    let k = std::str::from_utf8(raw_k)
        .map_err(|e| e.to_string())
        .and_then(|digits| digits.parse::<usize>().map_err(|e| e.to_string()))
        .map_err(|reason| InputError::InvalidTolerance {
            value: String::from_utf8_lossy(raw_k).into_owned(),
            reason,
        })?;

    let pattern = tokens.next().ok_or(InputError::MissingToken("pattern"))?;
    let text = tokens.next().ok_or(InputError::MissingToken("text"))?;

    if let Some(extra) = tokens.next() {
        return Err(InputError::TrailingInput(
            String::from_utf8_lossy(extra).into_owned(),
        ));
    }

    if text.len() < pattern.len() {
        log::warn!(
            "Text ({} bp) is shorter than the pattern ({} bp); no motifs can be found",
            text.len(),
            pattern.len()
        );
    }

    Ok(MotifQuery::new(k, pattern, text))
}

/// Read a dataset from any readable source
pub fn read_query<R: Read>(mut reader: R) -> InputResult<MotifQuery> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    parse_query_bytes(&content)
}

/// Read a dataset from a file
pub fn read_query_file<P: AsRef<Path>>(path: P) -> InputResult<MotifQuery> {
    log::info!("Reading dataset from {}", path.as_ref().display());
    read_query(File::open(path)?)
}
