//! Grid generation: seeds row 0 and evolves it under a rule.
//!
//! Boundaries are toroidal. Cell `i` of row `t` is computed from cells
//! `(i - 1) mod width`, `i` and `(i + 1) mod width` of row `t - 1`, so with
//! `width == 1` all three neighbors are the cell itself.

use crate::config::AutomatonConfig;
use crate::error::{CaError, Result};
use crate::rule::Rule;
use ca_planter_data::{is_binary, Grid, InitialCondition, ALIVE, DEAD};
use rand::Rng;

/// Fills a seed row of `width` cells.
///
/// The RNG is only consumed for [`InitialCondition::Random`].
pub fn seed_row<R: Rng>(
    width: usize,
    condition: InitialCondition,
    rng: &mut R,
) -> Vec<u8> {
    match condition {
        InitialCondition::Random => (0..width).map(|_| rng.gen_range(0..=1u8)).collect(),
        InitialCondition::SingleCenter => {
            let mut row = vec![DEAD; width];
            if width > 0 {
                row[width / 2] = ALIVE;
            }
            row
        }
        InitialCondition::Alternating => (0..width).map(|i| (i % 2) as u8).collect(),
    }
}

/// Computes the successor of `prev` into `next`.
///
/// Both slices must have the same non-zero length.
pub fn step(prev: &[u8], next: &mut [u8], rule: &Rule) -> Result<()> {
    let width = prev.len();
    debug_assert_eq!(width, next.len());
    for (i, cell) in next.iter_mut().enumerate() {
        let left = prev[(i + width - 1) % width];
        let center = prev[i];
        let right = prev[(i + 1) % width];
        *cell = rule.apply(left, center, right)?;
    }
    Ok(())
}

/// Evolves an explicit seed row for `height` rows in total (seed included).
pub fn evolve(seed: &[u8], height: usize, rule: &Rule) -> Result<Grid> {
    let width = seed.len();
    if width == 0 || height == 0 {
        return Err(CaError::InvalidDimensions { width, height });
    }
    if let Some(&bad) = seed.iter().find(|v| !is_binary(**v)) {
        return Err(CaError::InvalidCellState(bad));
    }

    let mut cells = vec![DEAD; width * height];
    cells[..width].copy_from_slice(seed);
    for t in 1..height {
        let (done, rest) = cells.split_at_mut(t * width);
        let prev = &done[(t - 1) * width..];
        step(prev, &mut rest[..width], rule)?;
    }

    Ok(Grid::from_cells(width, cells)?)
}

/// Generates a grid from a uniformly random seed row.
///
/// Dimensions are checked before the rule and before anything is allocated.
pub fn generate<R: Rng>(
    width: usize,
    height: usize,
    rule_number: i64,
    rng: &mut R,
) -> Result<Grid> {
    check_dimensions(width, height)?;
    let rule = Rule::new(rule_number)?;
    let seed = seed_row(width, InitialCondition::Random, rng);
    evolve(&seed, height, &rule)
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(CaError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Validated generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGenerator {
    width: usize,
    height: usize,
    rule: Rule,
    condition: InitialCondition,
}

impl GridGenerator {
    pub fn new(width: usize, height: usize, rule: Rule) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            rule,
            condition: InitialCondition::Random,
        })
    }

    pub fn from_config(config: &AutomatonConfig) -> Result<Self> {
        let rule = Rule::new(config.rule)?;
        Ok(Self::new(config.width, config.height, rule)?.with_condition(config.initial_condition))
    }

    #[must_use]
    pub fn with_condition(mut self, condition: InitialCondition) -> Self {
        self.condition = condition;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn condition(&self) -> InitialCondition {
        self.condition
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Grid> {
        let seed = seed_row(self.width, self.condition, rng);
        evolve(&seed, self.height, &self.rule)
    }
}
