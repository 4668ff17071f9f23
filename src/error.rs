//! Error types for grid_stepsearch.

use thiserror::Error;

use crate::engine::SearchState;

/// Recoverable errors reported by [SearchEngine](crate::SearchEngine). The
/// engine remains usable after either variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start or end selection is out of bounds, or both name the same
    /// cell.
    #[error("start and end must be two distinct cells on the grid")]
    InvalidSelection,

    /// An operation was invoked in a state that forbids it, such as
    /// stepping an engine that is not running.
    #[error("operation not permitted while the engine is {0:?}")]
    InvalidState(SearchState),
}

pub type Result<T> = std::result::Result<T, SearchError>;
