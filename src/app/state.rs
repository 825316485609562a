use anyhow::{Context, Result};
use ca_planter_core::config::AppConfig;
use ca_planter_core::generator::GridGenerator;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A configured run: validated parameters plus the seed-row RNG.
pub struct App {
    pub config: AppConfig,
    pub generator: GridGenerator,
    pub rng: ChaCha8Rng,
}

impl App {
    /// Builds the generator from `config` and seeds the RNG from
    /// `automaton.seed`, or from entropy when no seed is set.
    pub fn new(config: AppConfig) -> Result<Self> {
        let generator = GridGenerator::from_config(&config.automaton)
            .context("Invalid automaton configuration")?;
        let rng = if let Some(seed) = config.automaton.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Ok(Self {
            config,
            generator,
            rng,
        })
    }
}
