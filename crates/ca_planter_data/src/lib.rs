//! Plain data types shared by the generator, the exporters and the application.

pub mod data;

pub use data::cell::{is_binary, ALIVE, DEAD};
pub use data::grid::{Grid, GridError};
pub use data::seed::InitialCondition;
