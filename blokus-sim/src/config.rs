//! Run configuration: TOML file merged with command-line overrides.
//!
//! ```text
//! [engine]
//! board_size = 20
//!
//! [sim]
//! games = 100
//! seed = 42
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use blokus_core::EngineConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Cli;

/// Default number of games per run.
pub const DEFAULT_GAMES: u32 = 10;

/// Self-play settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    pub games: u32,
    /// Fixed seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for SimSettings {
    fn default() -> Self {
        SimSettings {
            games: DEFAULT_GAMES,
            seed: None,
        }
    }
}

/// Everything a run needs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub engine: EngineConfig,
    pub sim: SimSettings,
}

impl RunConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<RunConfig> {
        toml::from_str(content).context("invalid run configuration")
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<RunConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), ?config, "loaded run configuration");
        Ok(config)
    }

    /// Load the file named by `--config` (if any), then apply flag overrides
    /// and validate the engine settings.
    pub fn resolve(cli: &Cli) -> Result<RunConfig> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => RunConfig::default(),
        };
        config.apply_overrides(cli);
        config.engine.validate()?;
        Ok(config)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(games) = cli.games {
            self.sim.games = games;
        }
        if let Some(seed) = cli.seed {
            self.sim.seed = Some(seed);
        }
        if let Some(size) = cli.board_size {
            self.engine.board_size = size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = RunConfig::from_toml("").unwrap();
        assert_eq!(config.engine.board_size, blokus_core::DEFAULT_BOARD_SIZE);
        assert_eq!(config.sim.games, DEFAULT_GAMES);
        assert_eq!(config.sim.seed, None);
    }

    #[test]
    fn test_partial_tables() {
        let config = RunConfig::from_toml("[sim]\nseed = 9\n").unwrap();
        assert_eq!(config.sim.seed, Some(9));
        assert_eq!(config.sim.games, DEFAULT_GAMES);

        let config = RunConfig::from_toml("[engine]\nboard_size = 14\n").unwrap();
        assert_eq!(config.engine.board_size, 14);
    }

    #[test]
    fn test_rejects_bad_toml() {
        assert!(RunConfig::from_toml("[sim]\ngames = \"many\"\n").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let mut config = RunConfig::from_toml("[sim]\ngames = 3\nseed = 1\n").unwrap();
        let cli = Cli::parse_from(["blokus-sim", "--games", "7", "--board-size", "10"]);
        config.apply_overrides(&cli);

        assert_eq!(config.sim.games, 7);
        assert_eq!(config.sim.seed, Some(1));
        assert_eq!(config.engine.board_size, 10);
    }

    #[test]
    fn test_resolve_validates_board_size() {
        let cli = Cli::parse_from(["blokus-sim", "--board-size", "1"]);
        assert!(RunConfig::resolve(&cli).is_err());

        let cli = Cli::parse_from(["blokus-sim", "--seed", "5"]);
        let config = RunConfig::resolve(&cli).unwrap();
        assert_eq!(config.sim.seed, Some(5));
    }
}
