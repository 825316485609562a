//! JSON dump of a generated grid, written next to the model script.

use crate::error::{IoError, Result};
use crate::scad::output_stem;
use ca_planter_core::rule::Rule;
use ca_planter_data::Grid;
use std::path::{Path, PathBuf};

/// Writes `<stem>.json` into `dir` and returns its path.
pub fn write_grid_json(grid: &Grid, rule: Rule, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("creating output directory {:?}", dir))
    })?;
    let path = dir.join(format!("{}.json", output_stem(grid.width(), grid.height(), rule)));
    let json = serde_json::to_string_pretty(grid)?;
    std::fs::write(&path, json)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("writing JSON to {:?}", path)))?;
    tracing::info!(path = %path.display(), "Grid dump written");
    Ok(path)
}
