use ca_planter_core::config::AppConfig;
use ca_planter_core::rule::Rule;
use ca_planter_data::Grid;
use std::path::PathBuf;

/// Fresh scratch directory under the system temp dir.
#[allow(dead_code)]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ca_planter_test_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

/// Config writing only into `dir`, with a fixed seed and no preview.
#[allow(dead_code)]
pub fn seeded_config(dir: &std::path::Path, seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.automaton.width = 40;
    config.automaton.height = 60;
    config.automaton.rule = 110;
    config.automaton.seed = Some(seed);
    config.output.directory = dir.to_path_buf();
    config.output.preview = false;
    config
}

/// Evolves `seed` one step with the textbook rule definition.
#[allow(dead_code)]
pub fn reference_step(seed: &[u8], rule: Rule) -> Vec<u8> {
    let n = rule.number();
    let w = seed.len();
    (0..w)
        .map(|i| {
            let pattern = (seed[(i + w - 1) % w] << 2) | (seed[i] << 1) | seed[(i + 1) % w];
            (n >> pattern) & 1
        })
        .collect()
}

#[allow(dead_code)]
pub fn assert_well_formed(grid: &Grid, width: usize, height: usize) {
    assert_eq!(grid.height(), height, "row count");
    assert_eq!(grid.rows().len(), height, "row iterator length");
    for (t, row) in grid.rows().enumerate() {
        assert_eq!(row.len(), width, "row {t} width");
        assert!(row.iter().all(|&c| c <= 1), "row {t} holds a non-binary cell");
    }
}
