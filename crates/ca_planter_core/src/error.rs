//! Error types for automaton generation.
//!
//! Every variant is fatal to the generation call that raised it; a grid is
//! either produced whole or not at all.

use ca_planter_data::GridError;
use thiserror::Error;

/// Main error type for ca_planter_core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaError {
    /// Rule number outside `[0, 255]`
    #[error("Invalid rule: {0} is outside 0..=255")]
    InvalidRule(i64),

    /// Zero-sized grid request
    #[error("Invalid dimensions: width {width} x height {height}, both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    /// A cell value other than 0 or 1 reached the transition function
    #[error("Invalid cell state: {0}, expected 0 or 1")]
    InvalidCellState(u8),
}

/// Result type alias for ca_planter_core operations.
pub type Result<T> = std::result::Result<T, CaError>;

impl From<GridError> for CaError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::NonBinary { value, .. } => Self::InvalidCellState(value),
            GridError::Empty => Self::InvalidDimensions {
                width: 0,
                height: 0,
            },
            GridError::Ragged { width, .. } => Self::InvalidDimensions { width, height: 0 },
        }
    }
}
