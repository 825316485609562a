//! Black/white raster export in plain PBM (`P1`) form.
//!
//! Active cells are black (`1`), inactive cells white (`0`). The title goes in
//! a comment line so image viewers show the raw pattern only.

use crate::error::{IoError, Result};
use crate::scad::output_stem;
use ca_planter_core::rule::Rule;
use ca_planter_data::Grid;
use std::fs;
use std::path::{Path, PathBuf};

/// Plain PBM lines should stay within 70 characters.
const MAX_LINE: usize = 70;

/// Caption used by every visualization of a grid.
pub fn title(rule: Rule) -> String {
    format!("Cellular Automaton - Rule {}", rule.number())
}

pub fn render_pbm(grid: &Grid, rule: Rule) -> String {
    let mut out = format!("P1\n# {}\n{} {}\n", title(rule), grid.width(), grid.height());
    for row in grid.rows() {
        for chunk in row.chunks(MAX_LINE) {
            out.extend(chunk.iter().map(|&c| char::from(b'0' + c)));
            out.push('\n');
        }
    }
    out
}

/// Writes `<stem>.pbm` into `dir` and returns its path.
pub fn write_pbm(grid: &Grid, rule: Rule, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("creating output directory {:?}", dir))
    })?;
    let path = dir.join(format!("{}.pbm", output_stem(grid.width(), grid.height(), rule)));
    fs::write(&path, render_pbm(grid, rule))
        .map_err(|e| IoError::FileSystem(e).with_context(format!("writing PBM to {:?}", path)))?;
    tracing::info!(path = %path.display(), "Raster written");
    Ok(path)
}
