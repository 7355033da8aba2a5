//! KSIM Core Library
//!
//! Banded edit-distance matching of a short pattern against every fixed-length
//! window of a longer text, reporting all approximate (k-difference) motifs.

pub mod types;
pub mod score;
pub mod matrix;
pub mod banded;
pub mod scan;
pub mod edit;
pub mod input;

// Re-export commonly used types and functions
pub use types::{Motif, MotifQuery};
pub use score::Score;
pub use matrix::BandedMatrix;
pub use banded::update_table;
pub use scan::{
    find_similar_motifs, MotifScanner, ScanError, ScanParams, ScanResult, ScanStrategy,
    ScannerFactory,
};
pub use edit::{edit_distance, verify_motifs, within_distance, VerifyError};
pub use input::{
    parse_query, parse_query_bytes, read_query, read_query_file, InputError, InputResult,
};

/// Version information for the KSIM core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
