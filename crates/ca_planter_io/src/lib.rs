//! # CA Planter IO
//!
//! Output layer for generated grids.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - The OpenSCAD planter script writer
//! - Plain PBM raster export
//! - JSON grid dumps

/// Error types and result aliases for I/O operations
pub mod error;
/// Plain PBM rendering of a grid
pub mod raster;
/// OpenSCAD planter script rendering and file naming
pub mod scad;
/// JSON grid dumps
pub mod serialization;

pub use error::{IoError, Result};
pub use raster::{render_pbm, title, write_pbm};
pub use scad::{output_stem, render_scad, scad_filename, write_scad};
pub use serialization::write_grid_json;
