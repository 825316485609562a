//! # CA Planter Core
//!
//! Elementary cellular automaton engine used to pattern planter models.
//!
//! This crate contains the deterministic generation logic:
//! - Rule decoding and the neighborhood transition function
//! - Grid evolution under toroidal boundaries
//! - Run configuration and statistics
//!
//! ## Example
//!
//! ```
//! use ca_planter_core::generator::generate;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let grid = generate(40, 60, 110, &mut rng).unwrap();
//! assert_eq!(grid.height(), 60);
//! assert_eq!(grid.width(), 40);
//! ```

/// Run configuration loaded from `config.toml`
pub mod config;
/// Error types for generation
pub mod error;
/// Seed rows and grid evolution
pub mod generator;
/// Grid statistics and logging setup
pub mod metrics;
/// Rule decoding and the transition function
pub mod rule;

pub use error::{CaError, Result};
pub use generator::{evolve, generate, GridGenerator};
pub use rule::{apply, decode, encode, Rule, RuleTable};
