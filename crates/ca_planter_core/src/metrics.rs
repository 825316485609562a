//! Run statistics and structured logging setup.

use crate::rule::Rule;
use ca_planter_data::{Grid, ALIVE};
use std::time::{Duration, Instant};

/// Per-row live-cell counts of a finished grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStats {
    pub width: usize,
    pub row_live: Vec<usize>,
}

impl GridStats {
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            row_live: grid
                .rows()
                .map(|row| row.iter().filter(|&&c| c == ALIVE).count())
                .collect(),
        }
    }

    pub fn total_live(&self) -> usize {
        self.row_live.iter().sum()
    }

    pub fn row_density(&self, t: usize) -> Option<f64> {
        self.row_live
            .get(t)
            .map(|&live| live as f64 / self.width as f64)
    }

    pub fn density(&self) -> f64 {
        let cells = self.width * self.row_live.len();
        if cells == 0 {
            return 0.0;
        }
        self.total_live() as f64 / cells as f64
    }

    /// First time step whose row equals a row seen earlier, if any.
    ///
    /// Evolution is deterministic, so from that step on the history cycles.
    pub fn first_repeat(grid: &Grid) -> Option<usize> {
        let mut seen = std::collections::HashSet::new();
        grid.rows().position(|row| !seen.insert(row))
    }

    /// Emits one debug event per row and an info summary.
    pub fn log(&self, rule: Rule, elapsed: Duration) {
        for (t, live) in self.row_live.iter().enumerate() {
            tracing::debug!(step = t, live = live, "Row evolved");
        }
        tracing::info!(
            rule = rule.number(),
            width = self.width,
            height = self.row_live.len(),
            live = self.total_live(),
            density = self.density(),
            elapsed_us = saturating_micros(elapsed),
            "Grid generated"
        );
    }
}

/// Microseconds in `elapsed`, clamped to `u64::MAX`.
fn saturating_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

/// Wall-clock timer for a single generation call.
pub struct RunTimer {
    start: Instant,
}

impl Default for RunTimer {
    fn default() -> Self {
        Self::start()
    }
}

impl RunTimer {
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, falling back to `default_filter`. Safe to call twice;
/// the second call is a no-op.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
