pub mod state;

pub use state::App;

use anyhow::{Context, Result};
use ca_planter_core::metrics::{GridStats, RunTimer};
use ca_planter_core::rule::Rule;
use ca_planter_data::Grid;
use std::path::PathBuf;

/// Everything a finished run produced.
pub struct RunReport {
    pub grid: Grid,
    pub rule: Rule,
    pub stats: GridStats,
    pub first_repeat: Option<usize>,
    pub artifacts: Vec<PathBuf>,
}

impl RunReport {
    /// One-line description of the run for the terminal.
    pub fn summary(&self) -> String {
        let cycle = match self.first_repeat {
            Some(t) => format!("history repeats from step {t}"),
            None => "no repeated row".to_string(),
        };
        format!(
            "{}: {} x {} cells, density {:.3}, {}",
            self.rule,
            self.grid.width(),
            self.grid.height(),
            self.stats.density(),
            cycle
        )
    }
}

impl App {
    /// Generates the grid and writes the enabled artifacts.
    ///
    /// Nothing is written unless generation succeeded in full.
    pub fn run(&mut self) -> Result<RunReport> {
        let rule = self.generator.rule();
        tracing::info!(
            rule = rule.number(),
            width = self.generator.width(),
            height = self.generator.height(),
            initial_condition = ?self.generator.condition(),
            "Generating grid"
        );

        let timer = RunTimer::start();
        let grid = self
            .generator
            .generate(&mut self.rng)
            .context("Grid generation failed")?;
        let stats = GridStats::from_grid(&grid);
        stats.log(rule, timer.elapsed());

        let first_repeat = GridStats::first_repeat(&grid);
        if let Some(t) = first_repeat {
            tracing::debug!(step = t, "History enters a cycle");
        }

        let output = &self.config.output;
        let mut artifacts = Vec::new();
        if output.scad {
            artifacts.push(ca_planter_io::write_scad(
                &grid,
                rule,
                &self.config.planter,
                &output.directory,
            )?);
        }
        if output.raster {
            artifacts.push(ca_planter_io::write_pbm(&grid, rule, &output.directory)?);
        }
        if output.json {
            artifacts.push(ca_planter_io::write_grid_json(&grid, rule, &output.directory)?);
        }

        Ok(RunReport {
            grid,
            rule,
            stats,
            first_repeat,
            artifacts,
        })
    }
}
