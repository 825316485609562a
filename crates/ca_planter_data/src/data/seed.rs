use serde::{Deserialize, Serialize};

/// How row 0 of a grid is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialCondition {
    /// Independent uniform random bits.
    #[default]
    Random,
    /// One active cell at `width / 2`.
    SingleCenter,
    /// `i % 2`: 0, 1, 0, 1, ...
    Alternating,
}
