//! Error types for checked search and the benchmark harness.
//!
//! The core search is total and never returns these; they come from
//! [`Searcher::search_checked`](crate::Searcher::search_checked), the data
//! generators and the benchmark configuration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A corpus member's length differs from the first member's.
    #[error("corpus series {index} has length {found}, expected {expected}")]
    RaggedCorpus {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A corpus value is NaN or infinite.
    #[error("corpus series {series} has a non-finite value at position {position}")]
    NonFinite { series: usize, position: usize },

    /// A query value is NaN or infinite.
    #[error("query has a non-finite value at position {position}")]
    NonFiniteQuery { position: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = SearchError::RaggedCorpus {
            index: 3,
            expected: 10,
            found: 7,
        };
        assert_eq!(e.to_string(), "corpus series 3 has length 7, expected 10");

        let e = SearchError::InvalidParameter("step must be > 0".into());
        assert_eq!(e.to_string(), "invalid parameter: step must be > 0");
    }
}
